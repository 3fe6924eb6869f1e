//! Physical coupling network: coupling capacitors and compensated tanks.
//!
//! Each topology implements [`CouplingTopology`], which owns the two
//! topology-specific formulas:
//!
//! - the coupling capacitor realizing coefficient `k` between two tanks
//! - the tank capacitance left over once the neighbouring coupling
//!   capacitors are connected
//!
//! [`compute_network`] walks the resonator chain with whichever strategy
//! was selected and rejects any result that is not physically buildable.
//!
//! | Topology | Coupling capacitor | Compensated tank |
//! |----------|--------------------|------------------|
//! | Top-C    | `k * sqrt(Ci Cj)`  | `C0 - sum(Cs)`   |
//! | Shunt-C  | `sqrt(Ci Cj) / k`  | `1 / (1/C0 - sum(1/Cs))` |

mod shunt_c;
mod top_c;

pub use shunt_c::ShuntC;
pub use top_c::TopC;

use serde::Serialize;

use crate::coupling::CouplingCoefficients;
use crate::design::Topology;
use crate::error::{Result, SynthesisError};
use crate::resonator::{Resonator, ResonatorValues};

/// Topology-specific coupling formulas.
pub trait CouplingTopology: Send + Sync {
    /// The topology this strategy implements.
    fn topology(&self) -> Topology;

    /// Capacitor realizing coupling coefficient `k` between two tanks.
    fn coupling_capacitor(&self, k: f64, left: &Resonator, right: &Resonator) -> f64;

    /// Tank capacitance after compensating for the adjacent coupling
    /// capacitors (one for end tanks, two for interior tanks).
    fn tank_capacitance(&self, tank: &Resonator, adjacent: &[f64]) -> f64;
}

impl Topology {
    /// The formula strategy for this topology.
    pub fn strategy(self) -> &'static dyn CouplingTopology {
        match self {
            Topology::TopC => &TopC,
            Topology::ShuntC => &ShuntC,
        }
    }
}

/// Coupling capacitors and compensated tank capacitors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CouplingComponents {
    pub topology: Topology,
    /// `Cs12, Cs23, ...` in farads
    pub coupling_capacitors: Vec<f64>,
    /// `Cp1, Cp2, ...` in farads
    pub tank_capacitors: Vec<f64>,
}

/// Label of the coupling capacitor between resonators `i` and `i + 1` (0-based `i`).
pub fn coupling_label(i: usize) -> String {
    format!("Cs{}{}", i + 1, i + 2)
}

/// Compute the coupling network for a resonator chain.
///
/// Fails with `UnsupportedOrder` unless there is exactly one coupling
/// coefficient per adjacent tank pair.
///
/// Fails with `NonPhysicalComponent` when any inductor, coupling capacitor,
/// or compensated tank capacitor comes out zero, negative, or non-finite.
pub fn compute_network(
    strategy: &dyn CouplingTopology,
    coefficients: &CouplingCoefficients,
    resonators: &ResonatorValues,
) -> Result<CouplingComponents> {
    let tanks = resonators.tanks();
    let topology = strategy.topology();

    if coefficients.k.len() + 1 != tanks.len() {
        return Err(SynthesisError::unsupported_order(
            "coupling network",
            tanks.len(),
            format!(
                "expected {} coupling coefficients, got {}",
                tanks.len() - 1,
                coefficients.k.len()
            ),
        ));
    }

    for (i, tank) in tanks.iter().enumerate() {
        check_physical(format!("L{}", i + 1), tank.inductance, topology)?;
    }

    let coupling_capacitors = coefficients
        .k
        .iter()
        .zip(tanks.windows(2))
        .enumerate()
        .map(|(i, (&k, pair))| {
            let cs = strategy.coupling_capacitor(k, &pair[0], &pair[1]);
            check_physical(coupling_label(i), cs, topology).map(|_| cs)
        })
        .collect::<Result<Vec<_>>>()?;

    let tank_capacitors = tanks
        .iter()
        .enumerate()
        .map(|(i, tank)| {
            let left = i.checked_sub(1).and_then(|j| coupling_capacitors.get(j));
            let right = coupling_capacitors.get(i);
            let adjacent: Vec<f64> = left.into_iter().chain(right).copied().collect();
            let cp = strategy.tank_capacitance(tank, &adjacent);
            check_physical(format!("Cp{}", i + 1), cp, topology).map(|_| cp)
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        topology = topology.as_str(),
        coupling = ?coupling_capacitors,
        tanks = ?tank_capacitors,
        "coupling network"
    );

    Ok(CouplingComponents {
        topology,
        coupling_capacitors,
        tank_capacitors,
    })
}

fn check_physical(component: String, value: f64, topology: Topology) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        return Ok(());
    }
    Err(SynthesisError::non_physical(
        component,
        value,
        format!(
            "bandwidth too wide for {} coupling; reduce bandwidth or use fewer resonators",
            topology
        ),
    ))
}
