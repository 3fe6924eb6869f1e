//! The synthesis pipeline.
//!
//! [`compute`] runs one linear, stateless pass:
//!
//! 1. Validate the [`FilterSpec`]
//! 2. Generate the lowpass prototype g-values
//! 3. Derive coupling coefficients and external Q
//! 4. Size the nominal LC tanks
//! 5. Size coupling capacitors and compensate the tanks for the topology
//! 6. Evaluate Q and bandwidth guidance
//!
//! Any failure stops the pass; no partial result is returned.

use serde::Serialize;

use crate::components::{bill_of_materials, Component};
use crate::coupling::{synthesize, CouplingCoefficients};
use crate::design::FilterSpec;
use crate::error::{Result, SynthesisError};
use crate::guidance::{evaluate, Guidance};
use crate::network::{compute_network, CouplingComponents};
use crate::prototype::{get_prototype, PrototypeValues, TERMINATION_TOLERANCE};
use crate::resonator::{compute_resonators, ResonatorValues};

/// Everything computed for one filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterResult {
    pub spec: FilterSpec,
    pub fractional_bandwidth: f64,
    pub prototype: PrototypeValues,
    pub coupling: CouplingCoefficients,
    pub resonators: ResonatorValues,
    pub network: CouplingComponents,
    pub guidance: Guidance,
}

impl FilterResult {
    /// Named parts of the design.
    pub fn components(&self) -> Vec<Component> {
        bill_of_materials(self)
    }

    /// Human-readable advisories.
    pub fn warnings(&self) -> Vec<String> {
        self.guidance
            .bandwidth_warning
            .iter()
            .map(|w| w.to_string())
            .collect()
    }
}

/// Calculate a coupled-resonator bandpass filter.
pub fn compute(spec: &FilterSpec) -> Result<FilterResult> {
    let _span = tracing::debug_span!(
        "compute",
        response = spec.response.as_str(),
        topology = spec.topology.as_str(),
        order = spec.order
    )
    .entered();

    spec.validate()?;
    let fbw = spec.fractional_bandwidth();

    let prototype = get_prototype(spec.response, spec.order, spec.ripple())?;
    if prototype.termination_mismatch() >= TERMINATION_TOLERANCE {
        return Err(SynthesisError::UnequalTerminations {
            source_g: prototype.source(),
            load_g: prototype.load(),
        });
    }

    let coupling = synthesize(&prototype, fbw)?;
    let resonators = compute_resonators(spec.order, spec.center_hz(), spec.impedance_ohms)?;
    let network = compute_network(spec.topology.strategy(), &coupling, &resonators)?;
    let guidance = evaluate(spec, fbw);

    tracing::debug!(fbw, min_q = guidance.min_required_q, "filter calculated");

    Ok(FilterResult {
        spec: spec.clone(),
        fractional_bandwidth: fbw,
        prototype,
        coupling,
        resonators,
        network,
        guidance,
    })
}
