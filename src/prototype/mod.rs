//! Normalized lowpass-prototype element values (g-values).
//!
//! Every coupled-resonator design starts from a lowpass prototype ladder
//! with 1 rad/s cutoff and 1 ohm terminations. Its element values
//! `g[0..=n+1]` fix the shape of the passband:
//!
//! - `g[0]` is the source termination
//! - `g[1..=n]` are the ladder elements, one per resonator
//! - `g[n+1]` is the load termination
//!
//! Two families are supported, each behind the [`PrototypeFamily`] trait:
//! - [`Butterworth`] - closed form, any order from 2 to 9
//! - [`Chebyshev`] - ripple-parameterized recurrence, odd orders 3 to 9

mod butterworth;
mod chebyshev;

pub use butterworth::Butterworth;
pub use chebyshev::{Chebyshev, Ripple};

use serde::Serialize;

use crate::design::ResponseType;
use crate::error::Result;
use crate::DEFAULT_RIPPLE_DB;

/// Smallest supported resonator count.
pub const MIN_ORDER: usize = 2;

/// Largest supported resonator count.
pub const MAX_ORDER: usize = 9;

/// Tolerance for `g0 == g(n+1)` on equally terminated prototypes.
pub const TERMINATION_TOLERANCE: f64 = 1e-9;

/// Prototype element values `g[0..=n+1]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrototypeValues {
    g: Vec<f64>,
}

impl PrototypeValues {
    /// Assemble a prototype from its terminations and ladder elements.
    pub fn new(source: f64, elements: Vec<f64>, load: f64) -> Self {
        let mut g = Vec::with_capacity(elements.len() + 2);
        g.push(source);
        g.extend(elements);
        g.push(load);
        Self { g }
    }

    /// Filter order n (number of ladder elements).
    pub fn order(&self) -> usize {
        self.g.len() - 2
    }

    /// Source termination `g0`.
    pub fn source(&self) -> f64 {
        self.g[0]
    }

    /// Load termination `g(n+1)`.
    pub fn load(&self) -> f64 {
        self.g[self.g.len() - 1]
    }

    /// Element `g[k]` for `k` in `0..=n+1`.
    pub fn g(&self, k: usize) -> f64 {
        self.g[k]
    }

    /// Ladder elements `g[1..=n]`.
    pub fn elements(&self) -> &[f64] {
        &self.g[1..self.g.len() - 1]
    }

    /// The full sequence including terminations.
    pub fn as_slice(&self) -> &[f64] {
        &self.g
    }

    /// Absolute difference between source and load terminations.
    pub fn termination_mismatch(&self) -> f64 {
        (self.source() - self.load()).abs()
    }
}

/// A response family that can generate prototype values.
pub trait PrototypeFamily {
    /// Family name for diagnostics.
    fn name(&self) -> &'static str;

    /// Fail with `UnsupportedOrder` when the family cannot realize `order`.
    fn check_order(&self, order: usize) -> Result<()>;

    /// Generate `g[0..=n+1]` for the given order.
    fn generate(&self, order: usize) -> Result<PrototypeValues>;
}

/// Select the prototype family for a response type.
///
/// `ripple_db` is only consulted for Chebyshev; a missing ripple falls
/// back to the default of 0.5 dB.
pub fn family(response: ResponseType, ripple_db: Option<f64>) -> Result<Box<dyn PrototypeFamily>> {
    match response {
        ResponseType::Butterworth => Ok(Box::new(Butterworth)),
        ResponseType::Chebyshev => {
            let ripple = Ripple::from_db(ripple_db.unwrap_or(DEFAULT_RIPPLE_DB))?;
            Ok(Box::new(Chebyshev::new(ripple)))
        }
    }
}

/// Generate the prototype values for a response type, order, and ripple.
pub fn get_prototype(response: ResponseType, order: usize, ripple_db: Option<f64>) -> Result<PrototypeValues> {
    let family = family(response, ripple_db)?;
    let values = family.generate(order)?;
    tracing::debug!(
        family = family.name(),
        order,
        g = ?values.as_slice(),
        "generated prototype"
    );
    Ok(values)
}
