//! Butterworth (maximally flat) prototype.
//!
//! Closed form:
//!   g[k] = 2 * sin((2k - 1) * pi / (2n)),  k = 1..n
//!   g[0] = g[n+1] = 1

use std::f64::consts::PI;

use crate::error::{Result, SynthesisError};

use super::{PrototypeFamily, PrototypeValues, MAX_ORDER, MIN_ORDER};

/// Butterworth prototype generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Butterworth;

impl PrototypeFamily for Butterworth {
    fn name(&self) -> &'static str {
        "Butterworth"
    }

    fn check_order(&self, order: usize) -> Result<()> {
        if !(MIN_ORDER..=MAX_ORDER).contains(&order) {
            return Err(SynthesisError::unsupported_order(
                self.name(),
                order,
                format!("resonators must be between {} and {}", MIN_ORDER, MAX_ORDER),
            ));
        }
        Ok(())
    }

    fn generate(&self, order: usize) -> Result<PrototypeValues> {
        self.check_order(order)?;
        let n = order as f64;
        let elements = (1..=order)
            .map(|k| 2.0 * ((2 * k - 1) as f64 * PI / (2.0 * n)).sin())
            .collect();
        Ok(PrototypeValues::new(1.0, elements, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_tabulated_values() {
        let expected: &[(usize, &[f64])] = &[
            (2, &[1.41421, 1.41421]),
            (3, &[1.0, 2.0, 1.0]),
            (5, &[0.61803, 1.61803, 2.0, 1.61803, 0.61803]),
        ];
        for (n, values) in expected {
            let p = Butterworth.generate(*n).unwrap();
            for (got, want) in p.elements().iter().zip(values.iter()) {
                assert_abs_diff_eq!(*got, *want, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn test_terminations_exactly_one() {
        for n in MIN_ORDER..=MAX_ORDER {
            let p = Butterworth.generate(n).unwrap();
            assert_eq!(p.source(), 1.0);
            assert_eq!(p.load(), 1.0);
            assert_eq!(p.order(), n);
        }
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(Butterworth.generate(1).is_err());
        assert!(Butterworth.generate(10).is_err());
        assert!(Butterworth.generate(0).is_err());
    }
}
