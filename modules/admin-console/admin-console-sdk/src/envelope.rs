//! The `{ success, data, message }` wrapper of every platform API response.

use serde::{Deserialize, Serialize};

/// Response envelope exactly as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Decode into a tagged outcome. Blank messages count as absent.
    #[must_use]
    pub fn into_outcome(self) -> ApiOutcome<Option<T>> {
        if self.success {
            ApiOutcome::Success(self.data)
        } else {
            ApiOutcome::Failure {
                message: self.message.filter(|m| !m.trim().is_empty()),
            }
        }
    }
}

/// Result of an API call that produced a well-formed envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiOutcome<T> {
    Success(T),
    Failure { message: Option<String> },
}

impl<T> ApiOutcome<T> {
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: Some(message.into()),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiOutcome<U> {
        match self {
            Self::Success(v) => ApiOutcome::Success(f(v)),
            Self::Failure { message } => ApiOutcome::Failure { message },
        }
    }

    /// Discard the payload of a successful outcome.
    #[must_use]
    pub fn discard(self) -> ApiOutcome<()> {
        self.map(|_| ())
    }
}
