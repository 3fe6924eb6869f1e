//! Matching calculated values to standard preferred values (IEC 60063).
//!
//! Calculated capacitances rarely land on a value you can buy. For each
//! target this module reports the closest single E-series part and, when
//! one exists, a two-part parallel combination that lands closer.

use std::fmt;

use serde::Serialize;

use crate::error::{Result, SynthesisError};

/// Default maximum ratio between the two parts of a parallel pair.
pub const DEFAULT_RATIO_LIMIT: f64 = 10.0;

const E12: [f64; 12] = [1.0, 1.2, 1.5, 1.8, 2.2, 2.7, 3.3, 3.9, 4.7, 5.6, 6.8, 8.2];

const E24: [f64; 24] = [
    1.0, 1.1, 1.2, 1.3, 1.5, 1.6, 1.8, 2.0, 2.2, 2.4, 2.7, 3.0, 3.3, 3.6, 3.9, 4.3, 4.7, 5.1, 5.6,
    6.2, 6.8, 7.5, 8.2, 9.1,
];

const E96: [f64; 96] = [
    1.00, 1.02, 1.05, 1.07, 1.10, 1.13, 1.15, 1.18, 1.21, 1.24, 1.27, 1.30, 1.33, 1.37, 1.40, 1.43,
    1.47, 1.50, 1.54, 1.58, 1.62, 1.65, 1.69, 1.74, 1.78, 1.82, 1.87, 1.91, 1.96, 2.00, 2.05, 2.10,
    2.15, 2.21, 2.26, 2.32, 2.37, 2.43, 2.49, 2.55, 2.61, 2.67, 2.74, 2.80, 2.87, 2.94, 3.01, 3.09,
    3.16, 3.24, 3.32, 3.40, 3.48, 3.57, 3.65, 3.74, 3.83, 3.92, 4.02, 4.12, 4.22, 4.32, 4.42, 4.53,
    4.64, 4.75, 4.87, 4.99, 5.11, 5.23, 5.36, 5.49, 5.62, 5.76, 5.90, 6.04, 6.19, 6.34, 6.49, 6.65,
    6.81, 6.98, 7.15, 7.32, 7.50, 7.68, 7.87, 8.06, 8.25, 8.45, 8.66, 8.87, 9.09, 9.31, 9.53, 9.76,
];

/// A preferred-number series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ESeries {
    #[cfg_attr(feature = "cli", value(name = "E12"))]
    E12,
    #[cfg_attr(feature = "cli", value(name = "E24"))]
    E24,
    #[cfg_attr(feature = "cli", value(name = "E96"))]
    E96,
}

impl ESeries {
    /// Normalized mantissas in `[1, 10)`.
    pub fn values(&self) -> &'static [f64] {
        match self {
            ESeries::E12 => &E12,
            ESeries::E24 => &E24,
            ESeries::E96 => &E96,
        }
    }
}

impl fmt::Display for ESeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ESeries::E12 => write!(f, "E12"),
            ESeries::E24 => write!(f, "E24"),
            ESeries::E96 => write!(f, "E96"),
        }
    }
}

/// Two preferred values in parallel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParallelCombo {
    pub parts: (f64, f64),
    pub value: f64,
    pub error_pct: f64,
}

/// Best single and parallel match for one target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ESeriesMatch {
    pub target: f64,
    pub single_value: f64,
    pub single_error_pct: f64,
    pub parallel: Option<ParallelCombo>,
}

fn decade_of(target: f64) -> Result<i32> {
    if !target.is_finite() || target <= 0.0 {
        return Err(SynthesisError::ESeriesUnavailable {
            target,
            message: "value must be positive".to_string(),
        });
    }
    Ok(target.log10().floor() as i32)
}

fn scaled(mantissa: f64, decade: i32) -> f64 {
    mantissa * 10f64.powi(decade)
}

fn error_pct(actual: f64, target: f64) -> f64 {
    (actual - target).abs() / target * 100.0
}

/// Closest single preferred value and its error in percent.
///
/// Besides the target's own decade, the first value of the next decade and
/// the last value of the previous one are considered.
pub fn find_closest_single(target: f64, series: ESeries) -> Result<(f64, f64)> {
    let decade = decade_of(target)?;
    let values = series.values();

    let own = values.iter().map(|&m| scaled(m, decade));
    let neighbours = [scaled(values[0], decade + 1), scaled(values[values.len() - 1], decade - 1)];

    own.chain(neighbours)
        .map(|candidate| (candidate, error_pct(candidate, target)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .ok_or(SynthesisError::ESeriesUnavailable {
            target,
            message: format!("{} series is empty", series),
        })
}

/// Best parallel pair `V1 || V2` approximating the target.
///
/// `V1` runs over the series from one decade below to two above the
/// target (only values above the target can work); `V2` is the preferred
/// value closest to `V1 * T / (V1 - T)`. Pairs whose ratio exceeds
/// `ratio_limit` are skipped.
pub fn find_parallel_combo(target: f64, series: ESeries, ratio_limit: f64) -> Result<Option<ParallelCombo>> {
    let decade = decade_of(target)?;
    let mut best: Option<ParallelCombo> = None;

    for d in (decade - 1)..(decade + 3) {
        for &m in series.values() {
            let v1 = scaled(m, d);
            if v1 <= target {
                continue;
            }
            let v2_needed = v1 * target / (v1 - target);
            let (v2, _) = find_closest_single(v2_needed, series)?;
            if v1.max(v2) / v1.min(v2) > ratio_limit {
                continue;
            }
            let value = v1 * v2 / (v1 + v2);
            let err = error_pct(value, target);
            if best.map_or(true, |b| err < b.error_pct) {
                best = Some(ParallelCombo {
                    parts: (v1, v2),
                    value,
                    error_pct: err,
                });
            }
        }
    }

    Ok(best)
}

/// Single and parallel matches for one target value.
pub fn match_component(target: f64, series: ESeries, ratio_limit: f64) -> Result<ESeriesMatch> {
    let (single_value, single_error_pct) = find_closest_single(target, series)?;
    let parallel = find_parallel_combo(target, series, ratio_limit)?;
    Ok(ESeriesMatch {
        target,
        single_value,
        single_error_pct,
        parallel,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exact_value() {
        let (v, err) = find_closest_single(4700.0, ESeries::E12).unwrap();
        assert_relative_eq!(v, 4700.0, max_relative = 1e-12);
        assert!(err < 1e-9);
    }

    #[test]
    fn test_rounds_to_nearest() {
        let (v, _) = find_closest_single(4.2e-12, ESeries::E24).unwrap();
        assert_relative_eq!(v, 4.3e-12, max_relative = 1e-9);
    }

    #[test]
    fn test_crosses_decade() {
        let (v, _) = find_closest_single(9.7, ESeries::E12).unwrap();
        assert_relative_eq!(v, 10.0, max_relative = 1e-12);
    }

    #[test]
    fn test_parallel_combo_respects_ratio() {
        let combo = find_parallel_combo(216.18e-12, ESeries::E12, DEFAULT_RATIO_LIMIT)
            .unwrap()
            .unwrap();
        let (v1, v2) = combo.parts;
        assert!(v1.max(v2) / v1.min(v2) <= DEFAULT_RATIO_LIMIT);
        assert_relative_eq!(combo.value, v1 * v2 / (v1 + v2), max_relative = 1e-12);
        assert!(combo.error_pct < 5.0);
    }

    #[test]
    fn test_parallel_beats_or_matches_coarse_single() {
        let m = match_component(216.18e-12, ESeries::E12, DEFAULT_RATIO_LIMIT).unwrap();
        let combo = m.parallel.unwrap();
        assert!(combo.error_pct <= m.single_error_pct);
    }

    #[test]
    fn test_rejects_non_positive() {
        assert!(matches!(
            find_closest_single(0.0, ESeries::E24),
            Err(SynthesisError::ESeriesUnavailable { .. })
        ));
        assert!(match_component(-1.0, ESeries::E96, DEFAULT_RATIO_LIMIT).is_err());
    }
}
