//! Parsing of frequency and impedance strings.

use crate::error::{Result, SynthesisError};

const FREQUENCY_SUFFIXES: [(&str, f64); 4] = [("ghz", 1e9), ("mhz", 1e6), ("khz", 1e3), ("hz", 1.0)];

const IMPEDANCE_SUFFIXES: [(&str, f64); 3] = [("mohm", 1e6), ("kohm", 1e3), ("ohm", 1.0)];

/// Parse a frequency such as `14.2MHz`, `500kHz`, `1GHz`, or `14200000`.
///
/// Suffixes are case-insensitive. The result is in Hz.
pub fn parse_frequency(text: &str) -> Result<f64> {
    parse_with_suffixes(text, &text.trim().to_lowercase(), &FREQUENCY_SUFFIXES, "frequency")
}

/// Parse an impedance such as `50`, `50ohm`, `1kohm`, or `75Ω`.
///
/// The result is in ohms.
pub fn parse_impedance(text: &str) -> Result<f64> {
    let normalized = text.trim().to_lowercase().replace(&['Ω', 'ω'][..], "ohm");
    parse_with_suffixes(text, &normalized, &IMPEDANCE_SUFFIXES, "impedance")
}

fn parse_with_suffixes(original: &str, normalized: &str, suffixes: &[(&str, f64)], quantity: &'static str) -> Result<f64> {
    let invalid = || SynthesisError::InvalidQuantity {
        quantity,
        input: original.to_string(),
    };

    let (number, multiplier) = suffixes
        .iter()
        .find_map(|(suffix, mult)| normalized.strip_suffix(suffix).map(|num| (num.trim(), *mult)))
        .unwrap_or((normalized, 1.0));

    let value = number.parse::<f64>().map_err(|_| invalid())? * multiplier;
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_frequency() {
        assert_relative_eq!(parse_frequency("14.2MHz").unwrap(), 14.2e6, max_relative = 1e-12);
        assert_relative_eq!(parse_frequency("500kHz").unwrap(), 500e3, max_relative = 1e-12);
        assert_relative_eq!(parse_frequency("1GHz").unwrap(), 1e9, max_relative = 1e-12);
        assert_relative_eq!(parse_frequency("14.2mhz").unwrap(), 14.2e6, max_relative = 1e-12);
        assert_relative_eq!(parse_frequency(" 7100000 ").unwrap(), 7.1e6, max_relative = 1e-12);
        assert_relative_eq!(parse_frequency("60 Hz").unwrap(), 60.0, max_relative = 1e-12);
    }

    #[test]
    fn test_parse_impedance() {
        assert_relative_eq!(parse_impedance("50").unwrap(), 50.0);
        assert_relative_eq!(parse_impedance("50ohm").unwrap(), 50.0);
        assert_relative_eq!(parse_impedance("1kohm").unwrap(), 1000.0);
        assert_relative_eq!(parse_impedance("75Ω").unwrap(), 75.0);
        assert_relative_eq!(parse_impedance("1MOhm").unwrap(), 1e6);
    }

    #[test]
    fn test_rejects_garbage_and_non_finite() {
        for bad in ["", "abc", "MHz", "inf", "nanHz", "1e400"] {
            assert!(
                matches!(parse_frequency(bad), Err(SynthesisError::InvalidQuantity { .. })),
                "accepted {bad:?}"
            );
        }
        assert!(parse_impedance("fifty").is_err());
    }
}
