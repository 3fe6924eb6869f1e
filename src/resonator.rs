//! Parallel LC tank values at the center frequency.
//!
//! The absolute L/C split of a tank is a free parameter. This crate fixes it
//! by making the tank reactance at resonance equal to the system impedance:
//!
//! ```text
//! w0 = 2 * pi * f0
//! X0 = Z0 = w0 * L = 1 / (w0 * C)
//! L  = Z0 / w0
//! C  = 1 / (w0 * Z0)
//! ```
//!
//! All tanks share this nominal pair. Per-tank differences come only from
//! the coupling-capacitor compensation applied in [`crate::network`].

use std::f64::consts::PI;

use serde::Serialize;

use crate::error::{Result, SynthesisError};
use crate::prototype::MAX_ORDER;

/// One parallel LC tank.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Resonator {
    /// Inductance in henries
    pub inductance: f64,
    /// Capacitance in farads
    pub capacitance: f64,
}

impl Resonator {
    /// Angular resonant frequency `1 / sqrt(LC)`.
    pub fn resonant_omega(&self) -> f64 {
        1.0 / (self.inductance * self.capacitance).sqrt()
    }

    /// Resonant frequency in Hz.
    pub fn resonant_frequency(&self) -> f64 {
        self.resonant_omega() / (2.0 * PI)
    }
}

/// Nominal tank values for every resonator in the filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResonatorValues {
    /// Angular center frequency (rad/s)
    pub omega0: f64,
    /// Tank reactance at resonance (ohms)
    pub reference_reactance: f64,
    tanks: Vec<Resonator>,
    nominal: Resonator,
}

impl ResonatorValues {
    /// The shared nominal tank.
    pub fn nominal(&self) -> Resonator {
        self.nominal
    }

    /// One tank per resonator, never empty.
    pub fn tanks(&self) -> &[Resonator] {
        &self.tanks
    }
}

/// Compute `n` tanks resonant at `center_hz` with reactance `impedance_ohms`.
pub fn compute_resonators(order: usize, center_hz: f64, impedance_ohms: f64) -> Result<ResonatorValues> {
    if !center_hz.is_finite() || center_hz <= 0.0 {
        return Err(SynthesisError::invalid_frequency(
            "center",
            center_hz,
            "center frequency must be positive",
        ));
    }
    if !impedance_ohms.is_finite() || impedance_ohms <= 0.0 {
        return Err(SynthesisError::InvalidImpedance {
            value: impedance_ohms,
            message: "impedance must be positive".to_string(),
        });
    }
    if order == 0 || order > MAX_ORDER {
        return Err(SynthesisError::unsupported_order(
            "resonator",
            order,
            format!("tank count must be between 1 and {}", MAX_ORDER),
        ));
    }

    let omega0 = 2.0 * PI * center_hz;
    let tank = Resonator {
        inductance: impedance_ohms / omega0,
        capacitance: 1.0 / (omega0 * impedance_ohms),
    };

    tracing::debug!(
        omega0,
        inductance = tank.inductance,
        capacitance = tank.capacitance,
        "nominal tank"
    );

    Ok(ResonatorValues {
        omega0,
        reference_reactance: impedance_ohms,
        tanks: vec![tank; order],
        nominal: tank,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_resonance_at_seven_mhz() {
        let r = compute_resonators(3, 7e6, 50.0).unwrap();
        let error_ppm = (r.nominal().resonant_frequency() - 7e6).abs() / 7e6 * 1e6;
        assert!(error_ppm < 1.0);
        assert_eq!(r.tanks().len(), 3);
    }

    #[test]
    fn test_reactance_equals_impedance() {
        let r = compute_resonators(2, 14.2e6, 50.0).unwrap();
        let tank = r.nominal();
        assert_relative_eq!(r.omega0 * tank.inductance, 50.0, max_relative = 1e-12);
        assert_relative_eq!(1.0 / (r.omega0 * tank.capacitance), 50.0, max_relative = 1e-12);
        // 14.2 MHz / 50 ohm: ~560.4 nH, ~224.2 pF
        assert_relative_eq!(tank.inductance, 560.4047e-9, max_relative = 1e-6);
        assert_relative_eq!(tank.capacitance, 224.1619e-12, max_relative = 1e-6);
    }

    #[test]
    fn test_rejects_bad_frequency() {
        assert!(matches!(
            compute_resonators(3, 0.0, 50.0),
            Err(SynthesisError::InvalidFrequency { .. })
        ));
        assert!(matches!(
            compute_resonators(3, -5.0, 50.0),
            Err(SynthesisError::InvalidFrequency { .. })
        ));
    }

    #[test]
    fn test_rejects_tank_count_out_of_range() {
        for order in [0, MAX_ORDER + 1, usize::MAX] {
            assert!(
                matches!(
                    compute_resonators(order, 10e6, 50.0),
                    Err(SynthesisError::UnsupportedOrder { .. })
                ),
                "order {} accepted",
                order
            );
        }
        assert_eq!(compute_resonators(MAX_ORDER, 10e6, 50.0).unwrap().tanks().len(), MAX_ORDER);
    }
}
