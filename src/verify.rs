//! Self-check of the synthesis math against published reference values.
//!
//! [`verify`] runs a fixed battery and never fails outright; a check that
//! errors is reported as failed with the error as its detail.

use std::fmt;

use serde::Serialize;

use crate::calculator::compute;
use crate::coupling::synthesize;
use crate::design::{FilterSpec, FrequencyPlan, ResponseType, Topology};
use crate::error::Result;
use crate::prototype::{get_prototype, Ripple};
use crate::resonator::compute_resonators;

/// Butterworth g1..gn, Matthaei/Young/Jones table 4.05-1.
const BUTTERWORTH_TABLE: [(usize, &[f64]); 4] = [
    (3, &[1.00000, 2.00000, 1.00000]),
    (5, &[0.61803, 1.61803, 2.00000, 1.61803, 0.61803]),
    (7, &[0.44504, 1.24698, 1.80194, 2.00000, 1.80194, 1.24698, 0.44504]),
    (9, &[0.34730, 1.00000, 1.53209, 1.87939, 2.00000, 1.87939, 1.53209, 1.00000, 0.34730]),
];

/// Chebyshev g1..gn, Matthaei/Young/Jones table 4.05-2(a).
const CHEBYSHEV_TABLE: [(f64, usize, &[f64]); 12] = [
    (0.1, 3, &[1.03159, 1.14740, 1.03159]),
    (0.1, 5, &[1.14684, 1.37121, 1.97503, 1.37121, 1.14684]),
    (0.1, 7, &[1.18120, 1.42280, 2.09669, 1.57339, 2.09669, 1.42280, 1.18120]),
    (0.1, 9, &[1.19570, 1.44260, 2.13457, 1.61671, 2.20539, 1.61671, 2.13457, 1.44260, 1.19570]),
    (0.5, 3, &[1.59633, 1.09668, 1.59633]),
    (0.5, 5, &[1.70582, 1.22961, 2.54088, 1.22961, 1.70582]),
    (0.5, 7, &[1.73734, 1.25822, 2.63834, 1.34431, 2.63834, 1.25822, 1.73734]),
    (0.5, 9, &[1.75049, 1.26902, 2.66783, 1.36730, 2.72396, 1.36730, 2.66783, 1.26902, 1.75049]),
    (1.0, 3, &[2.02367, 0.99408, 2.02367]),
    (1.0, 5, &[2.13496, 1.09108, 3.00101, 1.09108, 2.13496]),
    (1.0, 7, &[2.16664, 1.11148, 3.09373, 1.17349, 3.09373, 1.11148, 2.16664]),
    (1.0, 9, &[2.17980, 1.11915, 3.12152, 1.18964, 3.17472, 1.18964, 3.12152, 1.11915, 2.17980]),
];

const BUTTERWORTH_TOLERANCE: f64 = 1e-4;
const CHEBYSHEV_TOLERANCE: f64 = 1e-3;
const WORKED_EXAMPLE_TOLERANCE: f64 = 1e-4;

/// Outcome of one named check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Check {
    pub name: String,
    pub passed: bool,
    pub detail: String,
}

/// Outcome of the whole battery.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerificationReport {
    pub checks: Vec<Check>,
}

impl VerificationReport {
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &Check> {
        self.checks.iter().filter(|c| !c.passed)
    }
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for check in &self.checks {
            let mark = if check.passed { "PASS" } else { "FAIL" };
            writeln!(f, "  [{mark}] {}: {}", check.name, check.detail)?;
        }
        writeln!(f, "{}", "=".repeat(50))?;
        if self.all_passed() {
            writeln!(f, "ALL VERIFICATIONS PASSED")?;
        } else {
            writeln!(f, "{} VERIFICATION(S) FAILED", self.failures().count())?;
        }
        write!(f, "{}", "=".repeat(50))
    }
}

fn run(name: impl Into<String>, check: impl FnOnce() -> Result<(bool, String)>) -> Check {
    let name = name.into();
    let (passed, detail) = check().unwrap_or_else(|e| (false, e.to_string()));
    tracing::debug!(check = name.as_str(), passed, "verification");
    Check { name, passed, detail }
}

/// Largest `|calculated - expected|` and its index.
fn worst_deviation(calculated: &[f64], expected: &[f64]) -> Option<(usize, f64)> {
    if calculated.len() != expected.len() {
        return None;
    }
    calculated
        .iter()
        .zip(expected)
        .map(|(c, e)| (c - e).abs())
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(&b.1))
}

fn table_check(calculated: &[f64], expected: &[f64], tolerance: f64) -> (bool, String) {
    match worst_deviation(calculated, expected) {
        Some((i, dev)) => (
            dev <= tolerance,
            format!("max deviation {dev:.2e} at g{} (tolerance {tolerance:.0e})", i + 1),
        ),
        None => (
            false,
            format!("got {} values, expected {}", calculated.len(), expected.len()),
        ),
    }
}

fn relative_error(actual: f64, expected: f64) -> f64 {
    ((actual - expected) / expected).abs()
}

fn worked_example() -> Result<(bool, String)> {
    let plan = FrequencyPlan::from_center(14.175e6, 350e3)?;
    let spec = FilterSpec::new(ResponseType::Chebyshev, Topology::TopC, 3, plan).with_ripple_db(0.5);
    let r = compute(&spec)?;
    let nominal = r.resonators.nominal();

    let pairs = [
        ("k12", r.coupling.k[0], 0.0186616),
        ("Qe", r.coupling.qe_in, 64.649),
        ("L", nominal.inductance, 561.393e-9),
        ("C0", nominal.capacitance, 224.557e-12),
        ("Cs12", r.network.coupling_capacitors[0], 4.1906e-12),
        ("Cp1", r.network.tank_capacitors[0], 220.367e-12),
        ("Cp2", r.network.tank_capacitors[1], 216.176e-12),
    ];
    let worst = pairs
        .iter()
        .map(|&(name, actual, expected)| (name, relative_error(actual, expected)))
        .max_by(|a, b| a.1.total_cmp(&b.1));

    Ok(match worst {
        Some((name, err)) => (
            err <= WORKED_EXAMPLE_TOLERANCE,
            format!("worst relative error {err:.2e} ({name})"),
        ),
        None => (false, "nothing compared".to_string()),
    })
}

fn inductor_reactance() -> Result<(bool, String)> {
    let plan = FrequencyPlan::from_center(7.1e6, 300e3)?;
    let spec = FilterSpec::new(ResponseType::Butterworth, Topology::ShuntC, 4, plan).with_impedance(75.0);
    let r = compute(&spec)?;
    let omega0 = r.resonators.omega0;
    let worst = r
        .components()
        .iter()
        .filter(|c| !c.is_capacitor())
        .map(|c| relative_error(c.reactance(omega0), spec.impedance_ohms))
        .fold(0.0, f64::max);
    Ok((worst < 1e-9, format!("max |XL - Z0| / Z0 = {worst:.2e}")))
}

/// Run every check.
pub fn verify() -> VerificationReport {
    let mut checks = Vec::new();

    for (n, expected) in BUTTERWORTH_TABLE {
        checks.push(run(format!("Butterworth g-values n={n}"), || {
            let g = get_prototype(ResponseType::Butterworth, n, None)?;
            Ok(table_check(g.elements(), expected, BUTTERWORTH_TOLERANCE))
        }));
    }

    for (ripple_db, n, expected) in CHEBYSHEV_TABLE {
        checks.push(run(format!("Chebyshev g-values {ripple_db} dB n={n}"), || {
            let ripple = Ripple::from_db(ripple_db)?;
            let g = get_prototype(ResponseType::Chebyshev, n, Some(ripple.db()))?;
            Ok(table_check(g.elements(), expected, CHEBYSHEV_TOLERANCE))
        }));
    }

    checks.push(run("Resonance at 7 MHz", || {
        let tanks = compute_resonators(1, 7e6, 50.0)?;
        let ppm = relative_error(tanks.nominal().resonant_frequency(), 7e6) * 1e6;
        Ok((ppm < 1.0, format!("error {ppm:.3} ppm")))
    }));

    checks.push(run("Coupling coefficients below 1", || {
        let g = get_prototype(ResponseType::Butterworth, 5, None)?;
        let coupling = synthesize(&g, 0.05)?;
        let listed: Vec<String> = coupling.k.iter().map(|k| format!("{k:.4}")).collect();
        Ok((coupling.k.iter().all(|&k| k < 1.0), format!("k = [{}]", listed.join(", "))))
    }));

    checks.push(run("Chebyshev 0.5 dB n=3 worked example", worked_example));
    checks.push(run("Inductor reactance equals Z0", inductor_reactance));

    VerificationReport { checks }
}
