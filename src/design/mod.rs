//! Filter design inputs and their validation.
//!
//! A [`FilterSpec`] bundles everything one calculation needs: the response
//! family, the coupling topology, the resonator count, the frequency plan,
//! and the termination impedance. It is validated once, up front, by
//! [`validate_spec`] before any synthesis runs.

mod types;
mod validate;

pub use types::*;
pub use validate::validate_spec;
