//! Named parts of a finished filter design.
//!
//! A calculated filter is built from three kinds of part:
//! - Tank capacitors `Cp1..Cpn`
//! - Tank inductors `L1..Ln`
//! - Coupling capacitors `Cs12..Cs(n-1)n`
//!
//! [`bill_of_materials`] lists them in that order, which is also the order
//! every report format uses.

mod linear;

pub use linear::{Capacitor, CapacitorRole, Inductor};

use crate::calculator::FilterResult;
use crate::network::coupling_label;

/// A part in the filter.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Capacitor(Capacitor),
    Inductor(Inductor),
}

impl Component {
    /// Get the part designator (e.g. `Cp1`, `L2`, `Cs12`).
    pub fn name(&self) -> &str {
        match self {
            Component::Capacitor(c) => &c.name,
            Component::Inductor(l) => &l.name,
        }
    }

    /// Value in SI base units (farads or henries).
    pub fn value(&self) -> f64 {
        match self {
            Component::Capacitor(c) => c.capacitance,
            Component::Inductor(l) => l.inductance,
        }
    }

    /// SI unit symbol of [`Component::value`].
    pub fn unit(&self) -> &'static str {
        match self {
            Component::Capacitor(_) => "F",
            Component::Inductor(_) => "H",
        }
    }

    /// Magnitude of the part's reactance at `omega`.
    pub fn reactance(&self, omega: f64) -> f64 {
        match self {
            Component::Capacitor(c) => c.reactance(omega),
            Component::Inductor(l) => l.reactance(omega),
        }
    }

    pub fn is_capacitor(&self) -> bool {
        matches!(self, Component::Capacitor(_))
    }
}

/// All parts of a calculated filter: tank capacitors, inductors, then
/// coupling capacitors.
pub fn bill_of_materials(result: &FilterResult) -> Vec<Component> {
    let tanks = result.network.tank_capacitors.iter().enumerate().map(|(i, &cp)| {
        Component::Capacitor(Capacitor::new(format!("Cp{}", i + 1), cp, CapacitorRole::Tank))
    });
    let inductors = result
        .resonators
        .tanks()
        .iter()
        .enumerate()
        .map(|(i, tank)| Component::Inductor(Inductor::new(format!("L{}", i + 1), tank.inductance)));
    let coupling = result.network.coupling_capacitors.iter().enumerate().map(|(i, &cs)| {
        Component::Capacitor(Capacitor::new(coupling_label(i), cs, CapacitorRole::Coupling))
    });

    tanks.chain(inductors).chain(coupling).collect()
}
