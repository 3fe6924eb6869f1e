//! Core types for describing a filter design.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Result, SynthesisError};
use crate::{DEFAULT_IMPEDANCE_OHMS, DEFAULT_Q_SAFETY, DEFAULT_RIPPLE_DB, MAX_FREQUENCY_HZ};

/// Passband response family of the lowpass prototype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
    /// Maximally flat passband
    Butterworth,
    /// Equal-ripple passband (odd orders only)
    Chebyshev,
}

impl ResponseType {
    /// Lowercase identifier used in machine-readable output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseType::Butterworth => "butterworth",
            ResponseType::Chebyshev => "chebyshev",
        }
    }

    /// Capitalized name for report headings.
    pub fn title(&self) -> &'static str {
        match self {
            ResponseType::Butterworth => "Butterworth",
            ResponseType::Chebyshev => "Chebyshev",
        }
    }
}

impl fmt::Display for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for ResponseType {
    type Err = SynthesisError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "butterworth" => Ok(ResponseType::Butterworth),
            "chebyshev" => Ok(ResponseType::Chebyshev),
            _ => Err(SynthesisError::InvalidQuantity {
                quantity: "response type",
                input: s.to_string(),
            }),
        }
    }
}

/// Inter-resonator coupling topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Topology {
    /// Series capacitors between the tops of adjacent tanks
    #[serde(rename = "top")]
    #[cfg_attr(feature = "cli", value(name = "top"))]
    TopC,
    /// Capacitors joining the bottoms of adjacent tanks
    #[serde(rename = "shunt")]
    #[cfg_attr(feature = "cli", value(name = "shunt"))]
    ShuntC,
}

impl Topology {
    /// Short identifier used in machine-readable output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Topology::TopC => "top",
            Topology::ShuntC => "shunt",
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topology::TopC => write!(f, "Top-C (Series)"),
            Topology::ShuntC => write!(f, "Shunt-C (Parallel)"),
        }
    }
}

impl FromStr for Topology {
    type Err = SynthesisError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" | "top-c" => Ok(Topology::TopC),
            "shunt" | "shunt-c" => Ok(Topology::ShuntC),
            _ => Err(SynthesisError::InvalidQuantity {
                quantity: "coupling topology",
                input: s.to_string(),
            }),
        }
    }
}

/// Center frequency, bandwidth, and band edges of the passband.
///
/// Always built through [`FrequencyPlan::from_center`] or
/// [`FrequencyPlan::from_edges`], both of which validate their inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrequencyPlan {
    pub center_hz: f64,
    pub bandwidth_hz: f64,
    pub low_hz: f64,
    pub high_hz: f64,
}

impl FrequencyPlan {
    /// Plan from a center frequency and 3 dB bandwidth.
    ///
    /// Band edges are placed arithmetically at `f0 ± BW/2`.
    pub fn from_center(center_hz: f64, bandwidth_hz: f64) -> Result<Self> {
        check_center_and_bandwidth(center_hz, bandwidth_hz)?;
        Ok(Self {
            center_hz,
            bandwidth_hz,
            low_hz: center_hz - bandwidth_hz / 2.0,
            high_hz: center_hz + bandwidth_hz / 2.0,
        })
    }

    /// Plan from lower and upper cutoff frequencies.
    ///
    /// The center is the geometric mean `sqrt(fl * fh)`.
    pub fn from_edges(low_hz: f64, high_hz: f64) -> Result<Self> {
        if !low_hz.is_finite() || low_hz <= 0.0 {
            return Err(SynthesisError::invalid_frequency(
                "low",
                low_hz,
                "lower cutoff must be positive",
            ));
        }
        if !high_hz.is_finite() || high_hz <= 0.0 {
            return Err(SynthesisError::invalid_frequency(
                "high",
                high_hz,
                "upper cutoff must be positive",
            ));
        }
        if low_hz >= high_hz {
            return Err(SynthesisError::invalid_frequency(
                "low",
                low_hz,
                "lower frequency must be less than upper frequency",
            ));
        }

        let center_hz = (low_hz * high_hz).sqrt();
        let bandwidth_hz = high_hz - low_hz;
        check_center_and_bandwidth(center_hz, bandwidth_hz)?;

        Ok(Self {
            center_hz,
            bandwidth_hz,
            low_hz,
            high_hz,
        })
    }

    /// Fractional bandwidth `BW / f0`.
    pub fn fractional_bandwidth(&self) -> f64 {
        self.bandwidth_hz / self.center_hz
    }
}

pub(crate) fn check_center_and_bandwidth(center_hz: f64, bandwidth_hz: f64) -> Result<()> {
    if !center_hz.is_finite() || center_hz <= 0.0 {
        return Err(SynthesisError::invalid_frequency(
            "center",
            center_hz,
            "center frequency must be positive",
        ));
    }
    if center_hz > MAX_FREQUENCY_HZ {
        return Err(SynthesisError::invalid_frequency(
            "center",
            center_hz,
            format!("exceeds {:.0} THz limit", MAX_FREQUENCY_HZ / 1e12),
        ));
    }
    if !bandwidth_hz.is_finite() || bandwidth_hz <= 0.0 {
        return Err(SynthesisError::invalid_bandwidth(
            bandwidth_hz,
            "bandwidth must be positive",
        ));
    }
    if bandwidth_hz >= center_hz {
        return Err(SynthesisError::invalid_bandwidth(
            bandwidth_hz,
            "bandwidth must be less than center frequency",
        ));
    }
    Ok(())
}

/// Complete input to one filter calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterSpec {
    pub response: ResponseType,
    pub topology: Topology,
    /// Number of resonators (LC tanks)
    pub order: usize,
    /// Passband ripple in dB, only meaningful for Chebyshev
    pub ripple_db: f64,
    pub plan: FrequencyPlan,
    pub impedance_ohms: f64,
    /// Multiplier applied to the loaded Q to get the minimum component Q
    pub q_safety: f64,
}

impl FilterSpec {
    /// Create a spec with default ripple, impedance, and Q safety factor.
    pub fn new(response: ResponseType, topology: Topology, order: usize, plan: FrequencyPlan) -> Self {
        Self {
            response,
            topology,
            order,
            ripple_db: DEFAULT_RIPPLE_DB,
            plan,
            impedance_ohms: DEFAULT_IMPEDANCE_OHMS,
            q_safety: DEFAULT_Q_SAFETY,
        }
    }

    /// Set the Chebyshev passband ripple (dB).
    pub fn with_ripple_db(mut self, ripple_db: f64) -> Self {
        self.ripple_db = ripple_db;
        self
    }

    /// Set the source/load impedance (ohms).
    pub fn with_impedance(mut self, impedance_ohms: f64) -> Self {
        self.impedance_ohms = impedance_ohms;
        self
    }

    /// Set the Q safety factor.
    ///
    /// Crystal filters: 1.5, LC filters: 2.0, lossy inductors: 3.0 and up.
    pub fn with_q_safety(mut self, q_safety: f64) -> Self {
        self.q_safety = q_safety;
        self
    }

    pub fn center_hz(&self) -> f64 {
        self.plan.center_hz
    }

    pub fn bandwidth_hz(&self) -> f64 {
        self.plan.bandwidth_hz
    }

    pub fn fractional_bandwidth(&self) -> f64 {
        self.plan.fractional_bandwidth()
    }

    /// Ripple as seen by prototype generation: `None` for Butterworth.
    pub fn ripple(&self) -> Option<f64> {
        match self.response {
            ResponseType::Butterworth => None,
            ResponseType::Chebyshev => Some(self.ripple_db),
        }
    }

    /// Check every field, returning the first failure.
    pub fn validate(&self) -> Result<()> {
        super::validate_spec(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_names() {
        assert_eq!("Chebyshev".parse::<ResponseType>().unwrap(), ResponseType::Chebyshev);
        assert_eq!(" top ".parse::<Topology>().unwrap(), Topology::TopC);
        assert_eq!("shunt-c".parse::<Topology>().unwrap(), Topology::ShuntC);
        assert!(matches!(
            "bessel".parse::<ResponseType>(),
            Err(SynthesisError::InvalidQuantity { quantity: "response type", .. })
        ));
    }

    #[test]
    fn test_plan_from_center() {
        let plan = FrequencyPlan::from_center(14.2e6, 500e3).unwrap();
        assert_relative_eq!(plan.low_hz, 13.95e6);
        assert_relative_eq!(plan.high_hz, 14.45e6);
        assert_relative_eq!(plan.fractional_bandwidth(), 500e3 / 14.2e6);
    }

    #[test]
    fn test_plan_from_edges_uses_geometric_mean() {
        let plan = FrequencyPlan::from_edges(14e6, 14.35e6).unwrap();
        assert_relative_eq!(plan.center_hz, (14e6_f64 * 14.35e6).sqrt());
        assert_relative_eq!(plan.bandwidth_hz, 350e3, max_relative = 1e-12);
    }

    #[test]
    fn test_plan_rejects_inverted_edges() {
        let err = FrequencyPlan::from_edges(14.35e6, 14e6).unwrap_err();
        assert!(matches!(err, SynthesisError::InvalidFrequency { field: "low", .. }));
    }

    #[test]
    fn test_plan_rejects_bandwidth_at_center() {
        let err = FrequencyPlan::from_center(1e6, 1e6).unwrap_err();
        assert!(matches!(err, SynthesisError::InvalidBandwidth { .. }));
        let err = FrequencyPlan::from_center(1e6, 0.0).unwrap_err();
        assert!(matches!(err, SynthesisError::InvalidBandwidth { .. }));
    }

    #[test]
    fn test_plan_rejects_bad_center() {
        assert!(matches!(
            FrequencyPlan::from_center(-1.0, 1.0),
            Err(SynthesisError::InvalidFrequency { field: "center", .. })
        ));
        assert!(matches!(
            FrequencyPlan::from_center(f64::NAN, 1.0),
            Err(SynthesisError::InvalidFrequency { .. })
        ));
        assert!(matches!(
            FrequencyPlan::from_center(2e12, 1e9),
            Err(SynthesisError::InvalidFrequency { .. })
        ));
    }

    #[test]
    fn test_ripple_only_for_chebyshev() {
        let plan = FrequencyPlan::from_center(7.1e6, 300e3).unwrap();
        let spec = FilterSpec::new(ResponseType::Butterworth, Topology::TopC, 3, plan);
        assert_eq!(spec.ripple(), None);
        let spec = FilterSpec::new(ResponseType::Chebyshev, Topology::TopC, 3, plan).with_ripple_db(1.0);
        assert_eq!(spec.ripple(), Some(1.0));
    }
}
