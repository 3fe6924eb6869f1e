//! Top-C (series) coupling.
//!
//! Coupling capacitors sit in series along the signal line between the hot
//! ends of adjacent tanks. Coupling grows with the capacitor:
//!
//! ```text
//! Cs = k * sqrt(Ci * Cj) = k / (w0 * sqrt(Zi * Zj))
//! ```
//!
//! At resonance each coupling capacitor loads its tanks in parallel, so its
//! capacitance is subtracted from the nominal tank capacitance. Usable up to
//! roughly 40% fractional bandwidth.

use crate::design::Topology;
use crate::resonator::Resonator;

use super::CouplingTopology;

/// Series-capacitor coupling strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopC;

impl CouplingTopology for TopC {
    fn topology(&self) -> Topology {
        Topology::TopC
    }

    fn coupling_capacitor(&self, k: f64, left: &Resonator, right: &Resonator) -> f64 {
        k * (left.capacitance * right.capacitance).sqrt()
    }

    fn tank_capacitance(&self, tank: &Resonator, adjacent: &[f64]) -> f64 {
        tank.capacitance - adjacent.iter().sum::<f64>()
    }
}
