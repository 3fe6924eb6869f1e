//! Chebyshev Type I (equal-ripple) prototype.
//!
//! For passband ripple `A` dB and order `n`:
//!
//! ```text
//! beta  = ln(coth(A / 17.37))
//! gamma = sinh(beta / 2n)
//! a[k]  = sin((2k - 1) * pi / 2n)
//! b[k]  = gamma^2 + sin^2(k * pi / n)
//!
//! g[1]  = 2 a[1] / gamma
//! g[k]  = 4 a[k-1] a[k] / (b[k-1] g[k-1]),   k = 2..n
//! ```
//!
//! Only odd orders give equal source and load terminations. The load is not
//! assumed: it is derived from the reversed ladder, `g[n+1] = g0 * g1 / gn`,
//! so a symmetric result is evidence that the recurrence is right.

use std::f64::consts::{LN_10, PI};

use crate::error::{Result, SynthesisError};

use super::{PrototypeFamily, PrototypeValues, MAX_ORDER};

/// Supported passband ripple levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ripple {
    /// 0.1 dB - nearly flat, modest skirt improvement
    Db0_1,
    /// 0.5 dB - the usual compromise
    Db0_5,
    /// 1.0 dB - steepest skirts, visible ripple
    Db1_0,
}

impl Ripple {
    pub const ALL: [Ripple; 3] = [Ripple::Db0_1, Ripple::Db0_5, Ripple::Db1_0];

    /// Parse a ripple level in dB, failing with `UnsupportedRipple`.
    pub fn from_db(ripple_db: f64) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|r| (r.db() - ripple_db).abs() < 1e-9)
            .ok_or(SynthesisError::UnsupportedRipple { ripple_db })
    }

    pub fn db(&self) -> f64 {
        match self {
            Ripple::Db0_1 => 0.1,
            Ripple::Db0_5 => 0.5,
            Ripple::Db1_0 => 1.0,
        }
    }

    /// Ripple factor squared, `10^(A/10) - 1`.
    pub fn epsilon_squared(&self) -> f64 {
        10f64.powf(self.db() / 10.0) - 1.0
    }
}

/// Chebyshev prototype generator for one ripple level.
#[derive(Debug, Clone, Copy)]
pub struct Chebyshev {
    ripple: Ripple,
}

impl Chebyshev {
    pub fn new(ripple: Ripple) -> Self {
        Self { ripple }
    }

    pub fn ripple(&self) -> Ripple {
        self.ripple
    }
}

impl PrototypeFamily for Chebyshev {
    fn name(&self) -> &'static str {
        "Chebyshev"
    }

    fn check_order(&self, order: usize) -> Result<()> {
        if order % 2 == 0 {
            return Err(SynthesisError::unsupported_order(
                self.name(),
                order,
                "equal terminations require an odd resonator count (3, 5, 7, 9); use Butterworth for even counts",
            ));
        }
        if !(3..=MAX_ORDER).contains(&order) {
            return Err(SynthesisError::unsupported_order(
                self.name(),
                order,
                "resonator count must be 3, 5, 7, or 9",
            ));
        }
        Ok(())
    }

    fn generate(&self, order: usize) -> Result<PrototypeValues> {
        self.check_order(order)?;

        let n = order as f64;
        // 17.37 = 40 / ln(10)
        let beta = (1.0 / (self.ripple.db() * LN_10 / 40.0).tanh()).ln();
        let gamma = (beta / (2.0 * n)).sinh();

        let a = |k: usize| ((2 * k - 1) as f64 * PI / (2.0 * n)).sin();
        let b = |k: usize| gamma * gamma + (k as f64 * PI / n).sin().powi(2);

        let mut elements = Vec::with_capacity(order);
        elements.push(2.0 * a(1) / gamma);
        for k in 2..=order {
            let prev = elements[k - 2];
            elements.push(4.0 * a(k - 1) * a(k) / (b(k - 1) * prev));
        }

        let source = 1.0;
        let load = source * elements[0] / elements[order - 1];
        Ok(PrototypeValues::new(source, elements, load))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_ripple_parse() {
        assert_eq!(Ripple::from_db(0.5).unwrap(), Ripple::Db0_5);
        assert_eq!(Ripple::from_db(0.1).unwrap(), Ripple::Db0_1);
        assert!(matches!(
            Ripple::from_db(0.2),
            Err(SynthesisError::UnsupportedRipple { .. })
        ));
    }

    #[test]
    fn test_half_db_third_order() {
        let p = Chebyshev::new(Ripple::Db0_5).generate(3).unwrap();
        assert_abs_diff_eq!(p.g(1), 1.5963, epsilon = 1e-3);
        assert_abs_diff_eq!(p.g(2), 1.0967, epsilon = 1e-3);
        assert_abs_diff_eq!(p.g(3), 1.5963, epsilon = 1e-3);
    }

    #[test]
    fn test_one_db_fifth_order() {
        let p = Chebyshev::new(Ripple::Db1_0).generate(5).unwrap();
        let expected = [2.1349, 1.0911, 3.0009, 1.0911, 2.1349];
        for (got, want) in p.elements().iter().zip(expected) {
            assert_abs_diff_eq!(*got, want, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_derived_load_matches_source() {
        for ripple in Ripple::ALL {
            for n in [3, 5, 7, 9] {
                let p = Chebyshev::new(ripple).generate(n).unwrap();
                assert!(p.termination_mismatch() < 1e-9, "ripple {:?} n {}", ripple, n);
            }
        }
    }

    #[test]
    fn test_rejects_even_and_out_of_range() {
        let cheb = Chebyshev::new(Ripple::Db0_5);
        for n in [0, 1, 2, 4, 6, 8, 10, 11] {
            assert!(
                matches!(cheb.generate(n), Err(SynthesisError::UnsupportedOrder { .. })),
                "order {} accepted",
                n
            );
        }
    }
}
