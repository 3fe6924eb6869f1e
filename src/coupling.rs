//! Inter-resonator coupling coefficients and external Q.
//!
//! From the prototype values and fractional bandwidth `FBW = BW / f0`:
//!
//! ```text
//! k[i, i+1] = FBW / sqrt(g[i] * g[i+1]),   i = 1..n-1
//! Qe_in     = g0 * g1 / FBW
//! Qe_out    = gn * g(n+1) / FBW
//! ```

use serde::Serialize;

use crate::error::{Result, SynthesisError};
use crate::prototype::PrototypeValues;

/// Normalized coupling between adjacent resonators plus end loading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CouplingCoefficients {
    pub fractional_bandwidth: f64,
    /// `k[i]` couples resonator `i + 1` to resonator `i + 2`
    pub k: Vec<f64>,
    /// External Q seen by the first resonator
    pub qe_in: f64,
    /// External Q seen by the last resonator
    pub qe_out: f64,
}

impl CouplingCoefficients {
    /// Coefficients touching resonator `index` (0-based): one for the end
    /// resonators, two for interior ones.
    pub fn adjacent(&self, index: usize) -> impl Iterator<Item = f64> + '_ {
        let left = index.checked_sub(1).and_then(|i| self.k.get(i));
        let right = self.k.get(index);
        left.into_iter().chain(right).copied()
    }
}

/// Derive coupling coefficients and external Qs.
///
/// Fails with `InvalidBandwidth` unless `0 < FBW < 1`.
pub fn synthesize(g: &PrototypeValues, fbw: f64) -> Result<CouplingCoefficients> {
    if !(fbw > 0.0 && fbw < 1.0) {
        return Err(SynthesisError::invalid_bandwidth(
            fbw,
            "fractional bandwidth must be between 0 and 1 (bandwidth below center frequency)",
        ));
    }

    let n = g.order();
    let k: Vec<f64> = (1..n)
        .map(|i| fbw / (g.g(i) * g.g(i + 1)).sqrt())
        .collect();
    let qe_in = g.source() * g.g(1) / fbw;
    let qe_out = g.g(n) * g.load() / fbw;

    tracing::debug!(fbw, k = ?k, qe_in, qe_out, "coupling coefficients");

    Ok(CouplingCoefficients {
        fractional_bandwidth: fbw,
        k,
        qe_in,
        qe_out,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prototype::{Butterworth, PrototypeFamily};
    use approx::assert_relative_eq;

    #[test]
    fn test_butterworth_third_order() {
        let g = Butterworth.generate(3).unwrap();
        let c = synthesize(&g, 0.1).unwrap();
        // g = [1, 1, 2, 1, 1]
        assert_eq!(c.k.len(), 2);
        assert_relative_eq!(c.k[0], 0.1 / 2f64.sqrt(), max_relative = 1e-12);
        assert_relative_eq!(c.k[1], 0.1 / 2f64.sqrt(), max_relative = 1e-12);
        assert_relative_eq!(c.qe_in, 10.0, max_relative = 1e-12);
        assert_relative_eq!(c.qe_out, 10.0, max_relative = 1e-12);
    }

    #[test]
    fn test_coefficients_below_one_for_narrow_band() {
        let g = Butterworth.generate(5).unwrap();
        let c = synthesize(&g, 0.05).unwrap();
        assert!(c.k.iter().all(|&k| k > 0.0 && k < 1.0));
    }

    #[test]
    fn test_rejects_bad_fbw() {
        let g = Butterworth.generate(3).unwrap();
        for fbw in [0.0, -0.1, 1.0, 1.5, f64::NAN] {
            assert!(matches!(
                synthesize(&g, fbw),
                Err(SynthesisError::InvalidBandwidth { .. })
            ));
        }
    }

    #[test]
    fn test_adjacent() {
        let g = Butterworth.generate(4).unwrap();
        let c = synthesize(&g, 0.05).unwrap();
        assert_eq!(c.adjacent(0).collect::<Vec<_>>(), vec![c.k[0]]);
        assert_eq!(c.adjacent(1).collect::<Vec<_>>(), vec![c.k[0], c.k[1]]);
        assert_eq!(c.adjacent(3).collect::<Vec<_>>(), vec![c.k[2]]);
    }
}
