//! Human-readable formatting with SI prefixes.

/// Scale `value` by the first threshold it reaches and append the unit.
///
/// Values smaller than every threshold use the last (smallest) unit.
pub fn format_value(value: f64, units: &[(f64, &str)], precision: Option<usize>) -> String {
    let (scale, suffix) = units
        .iter()
        .find(|(threshold, _)| value.abs() >= *threshold)
        .or_else(|| units.last())
        .copied()
        .unwrap_or((1.0, ""));
    let scaled = value / scale;
    match precision {
        Some(p) => format!("{:.*} {}", p, scaled, suffix),
        None => format!("{} {}", significant(scaled, 4), suffix),
    }
}

/// Format a frequency with GHz / MHz / kHz / Hz.
pub fn format_frequency(hz: f64) -> String {
    format_value(hz, &[(1e9, "GHz"), (1e6, "MHz"), (1e3, "kHz"), (1.0, "Hz")], None)
}

/// Format a capacitance with mF / µF / nF / pF.
pub fn format_capacitance(farads: f64) -> String {
    format_value(farads, &[(1e-3, "mF"), (1e-6, "µF"), (1e-9, "nF"), (1e-12, "pF")], Some(2))
}

/// Format an inductance with H / mH / µH / nH.
pub fn format_inductance(henries: f64) -> String {
    format_value(henries, &[(1.0, "H"), (1e-3, "mH"), (1e-6, "µH"), (1e-9, "nH")], Some(2))
}

/// Split `"224.16 pF"` into `("224.16", "pF")`.
pub fn split_value_unit(formatted: &str) -> (&str, &str) {
    formatted.rsplit_once(' ').unwrap_or((formatted, ""))
}

/// Up to `digits` significant digits without trailing zeros.
fn significant(value: f64, digits: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{}", value);
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (digits as i32 - 1 - magnitude).max(0) as usize;
    let text = format!("{:.*}", decimals, value);
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}
