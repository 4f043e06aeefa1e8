//! Error types for the admin console SDK.

use thiserror::Error;

/// Failure of a `ResourceApi` call that did not produce an envelope.
///
/// A well-formed `{ "success": false }` envelope is not an error; it is
/// reported as [`ApiOutcome::Failure`](crate::ApiOutcome::Failure).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdminError {
    /// Connection refused, DNS failure, TLS failure, timeout.
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body was not a valid envelope.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// Non-2xx response.
    #[error("HTTP {status}{}", message_suffix(.message))]
    Rejected {
        status: u16,
        message: Option<String>,
    },
}

impl AdminError {
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    #[must_use]
    pub fn rejected(status: u16, message: Option<String>) -> Self {
        Self::Rejected { status, message }
    }

    /// Message supplied by the server, if any.
    ///
    /// Only a rejected response can carry one; transport and decode
    /// failures never do.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected {
                message: Some(m), ..
            } if !m.trim().is_empty() => Some(m),
            _ => None,
        }
    }
}

#[allow(clippy::ref_option)]
fn message_suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_only_from_rejected() {
        assert_eq!(
            AdminError::rejected(409, Some("name taken".to_owned())).server_message(),
            Some("name taken")
        );
        assert_eq!(AdminError::rejected(500, None).server_message(), None);
        assert_eq!(
            AdminError::rejected(500, Some("  ".to_owned())).server_message(),
            None
        );
        assert_eq!(AdminError::transport("refused").server_message(), None);
    }

    #[test]
    fn display_includes_status_and_message() {
        assert_eq!(
            AdminError::rejected(404, Some("not found".to_owned())).to_string(),
            "HTTP 404: not found"
        );
        assert_eq!(AdminError::rejected(502, None).to_string(), "HTTP 502");
    }
}
