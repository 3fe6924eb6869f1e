//! Practical design guidance: component Q and bandwidth ceilings.

use std::fmt;

use serde::Serialize;

use crate::design::{FilterSpec, Topology};
use crate::{SHUNT_C_FBW_LIMIT, TOP_C_FBW_LIMIT};

/// Advisory raised when the fractional bandwidth is past what a topology
/// handles accurately. Never blocks a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BandwidthWarning {
    pub fractional_bandwidth: f64,
    pub ceiling: f64,
    pub topology: Topology,
}

impl fmt::Display for BandwidthWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pct = self.fractional_bandwidth * 100.0;
        let limit = self.ceiling * 100.0;
        match self.topology {
            Topology::ShuntC => write!(
                f,
                "FBW ({pct:.1}%) exceeds {limit:.0}% limit for Shunt-C topology; consider Top-C for wide bandwidth designs"
            ),
            Topology::TopC => write!(
                f,
                "FBW ({pct:.1}%) exceeds {limit:.0}% recommended limit; results may be inaccurate, consider a transmission-line design"
            ),
        }
    }
}

/// Minimum component Q and bandwidth advisory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Guidance {
    /// Minimum unloaded Q the inductors must exceed
    pub min_required_q: f64,
    pub bandwidth_warning: Option<BandwidthWarning>,
}

/// Practical fractional-bandwidth ceiling of a topology.
pub fn fbw_ceiling(topology: Topology) -> f64 {
    match topology {
        Topology::TopC => TOP_C_FBW_LIMIT,
        Topology::ShuntC => SHUNT_C_FBW_LIMIT,
    }
}

/// `Q_min = (f0 / BW) * safety`.
///
/// Typical unloaded Q: air-core solenoid 100-300, iron-powder toroid 50-150,
/// ferrite toroid 30-100, chip inductor 20-50.
pub fn min_required_q(center_hz: f64, bandwidth_hz: f64, q_safety: f64) -> f64 {
    center_hz / bandwidth_hz * q_safety
}

/// Evaluate guidance for a validated spec.
pub fn evaluate(spec: &FilterSpec, fbw: f64) -> Guidance {
    let ceiling = fbw_ceiling(spec.topology);
    let bandwidth_warning = (fbw > ceiling).then_some(BandwidthWarning {
        fractional_bandwidth: fbw,
        ceiling,
        topology: spec.topology,
    });

    if let Some(warning) = &bandwidth_warning {
        tracing::warn!(fbw, ceiling, topology = spec.topology.as_str(), "{}", warning);
    }

    Guidance {
        min_required_q: min_required_q(spec.center_hz(), spec.bandwidth_hz(), spec.q_safety),
        bandwidth_warning,
    }
}
