//! Shunt-C (bottom) coupling.
//!
//! Adjacent tanks are joined at their cold ends through a shared capacitive
//! path to ground. The coupling voltage is developed across a large
//! capacitor, so a bigger capacitor means looser coupling:
//!
//! ```text
//! Cs = sqrt(Ci * Cj) / k
//! ```
//!
//! Each coupling capacitor appears in series with the tank capacitor, so
//! compensation works on elastance (1/C) and the tank capacitor grows:
//!
//! ```text
//! 1/Cp = 1/C0 - sum(1/Cs)      =>   Cp = C0 / (1 - sum(k))
//! ```
//!
//! Only accurate for narrow filters, roughly 10% fractional bandwidth.

use crate::design::Topology;
use crate::resonator::Resonator;

use super::CouplingTopology;

/// Bottom-capacitor coupling strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShuntC;

impl CouplingTopology for ShuntC {
    fn topology(&self) -> Topology {
        Topology::ShuntC
    }

    fn coupling_capacitor(&self, k: f64, left: &Resonator, right: &Resonator) -> f64 {
        (left.capacitance * right.capacitance).sqrt() / k
    }

    fn tank_capacitance(&self, tank: &Resonator, adjacent: &[f64]) -> f64 {
        let elastance = 1.0 / tank.capacitance - adjacent.iter().map(|cs| 1.0 / cs).sum::<f64>();
        1.0 / elastance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn tank() -> Resonator {
        Resonator {
            inductance: 1e-6,
            capacitance: 100e-12,
        }
    }

    #[test]
    fn test_looser_coupling_needs_larger_capacitor() {
        let loose = ShuntC.coupling_capacitor(0.01, &tank(), &tank());
        let tight = ShuntC.coupling_capacitor(0.05, &tank(), &tank());
        assert!(loose > tight);
        assert_relative_eq!(loose, 10e-9, max_relative = 1e-12);
    }

    #[test]
    fn test_compensation_in_elastance() {
        let k = [0.02, 0.03];
        let cs: Vec<f64> = k.iter().map(|&k| ShuntC.coupling_capacitor(k, &tank(), &tank())).collect();
        let cp = ShuntC.tank_capacitance(&tank(), &cs);
        assert_relative_eq!(cp, 100e-12 / (1.0 - 0.05), max_relative = 1e-12);
    }

    #[test]
    fn test_overcoupled_tank_goes_negative() {
        let cs = ShuntC.coupling_capacitor(0.6, &tank(), &tank());
        let cp = ShuntC.tank_capacitance(&tank(), &[cs, cs]);
        assert!(cp < 0.0);
    }
}
