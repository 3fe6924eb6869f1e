//! Linear passive parts: Capacitor, Inductor.

use serde::Serialize;

/// Where a capacitor sits in the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CapacitorRole {
    /// Compensated tank capacitor `Cp<i>`
    Tank,
    /// Inter-resonator coupling capacitor `Cs<ij>`
    Coupling,
}

/// A capacitor in the finished design.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Capacitor {
    pub name: String,
    /// Capacitance in farads
    pub capacitance: f64,
    pub role: CapacitorRole,
}

impl Capacitor {
    /// Create a new capacitor.
    pub fn new(name: String, capacitance: f64, role: CapacitorRole) -> Self {
        Self {
            name,
            capacitance,
            role,
        }
    }

    /// Magnitude of the reactance `1 / (wC)` at angular frequency `omega`.
    pub fn reactance(&self, omega: f64) -> f64 {
        1.0 / (omega * self.capacitance)
    }
}

/// An inductor in the finished design.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Inductor {
    pub name: String,
    /// Inductance in henries
    pub inductance: f64,
}

impl Inductor {
    /// Create a new inductor.
    pub fn new(name: String, inductance: f64) -> Self {
        Self { name, inductance }
    }

    /// Reactance `wL` at angular frequency `omega`.
    pub fn reactance(&self, omega: f64) -> f64 {
        omega * self.inductance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reactances_cross_at_resonance() {
        // 1 uH with 253.3 pF resonates near 10 MHz
        let omega = 2.0 * std::f64::consts::PI * 10e6;
        let l = Inductor::new("L1".to_string(), 1e-6);
        let c = Capacitor::new("Cp1".to_string(), 1.0 / (omega * omega * 1e-6), CapacitorRole::Tank);
        assert_relative_eq!(l.reactance(omega), c.reactance(omega), max_relative = 1e-12);
    }
}
