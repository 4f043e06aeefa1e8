//! Indonesian rupiah display formatting.
//!
//! Follows the `id-ID` locale: `.` groups thousands and `,` separates the
//! fraction. Whole amounts are printed without a fraction, so `1500000.0`
//! renders as `Rp 1.500.000` rather than the browser locale's `Rp 1.500.000,00`.

const PREFIX: &str = "Rp ";

/// Format an amount as rupiah, e.g. `1500000.0` -> `Rp 1.500.000`.
///
/// Fractions are rounded to two digits and only shown when non-zero
/// (`99.5` -> `Rp 99,50`). Non-finite amounts render as `Rp -`.
#[must_use]
pub fn format_rupiah(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{PREFIX}-");
    }

    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut out = String::with_capacity(PREFIX.len() + fixed.len() * 2);
    out.push_str(PREFIX);
    if amount < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }
    out.push_str(&group_thousands(whole));
    if fraction != "00" {
        out.push(',');
        out.push_str(fraction);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() * 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_amounts() {
        assert_eq!(format_rupiah(0.0), "Rp 0");
        assert_eq!(format_rupiah(950.0), "Rp 950");
        assert_eq!(format_rupiah(1_000.0), "Rp 1.000");
        assert_eq!(format_rupiah(150_000.0), "Rp 150.000");
        assert_eq!(format_rupiah(1_500_000.0), "Rp 1.500.000");
    }

    #[test]
    fn fractions_use_comma() {
        assert_eq!(format_rupiah(99.5), "Rp 99,50");
        assert_eq!(format_rupiah(12_345.678), "Rp 12.345,68");
    }

    #[test]
    fn negative_amounts() {
        assert_eq!(format_rupiah(-2_500.0), "Rp -2.500");
        assert_eq!(format_rupiah(-0.001), "Rp 0");
    }

    #[test]
    fn non_finite() {
        assert_eq!(format_rupiah(f64::NAN), "Rp -");
        assert_eq!(format_rupiah(f64::INFINITY), "Rp -");
    }
}
