//! # Bandpass Core
//!
//! Component values for coupled-resonator LC bandpass filters.
//!
//! This library provides:
//! - Butterworth and Chebyshev lowpass prototypes (g-values)
//! - Coupling coefficients and external Q for a given fractional bandwidth
//! - Tank and coupling capacitor values for Top-C and Shunt-C topologies
//! - Component Q and bandwidth guidance
//! - Text, JSON and CSV reports, E-series matching and an ideal response plot
//!
//! ## Architecture
//!
//! - [`design`] - Filter specification, frequency plan and validation
//! - [`prototype`] - Lowpass prototype element values
//! - [`coupling`] - Inter-resonator coupling and external Q
//! - [`resonator`] - Nominal LC tank values
//! - [`network`] - Per-topology coupling networks
//! - [`guidance`] - Minimum Q and bandwidth advisories
//! - [`calculator`] - The end-to-end pipeline
//! - [`report`] - Output formats (CLI and WASM)
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! bandpass -t butterworth -f 14.2MHz -b 500kHz -c top -n 5
//! bandpass -t chebyshev --fl 14MHz --fh 14.35MHz -c shunt -r 0.5 -n 7 --format json
//! ```
//!
//! ### Library
//!
//! ```
//! use bandpass_core::{compute, FilterSpec, FrequencyPlan, ResponseType, Topology};
//!
//! let plan = FrequencyPlan::from_center(14.2e6, 500e3).unwrap();
//! let spec = FilterSpec::new(ResponseType::Butterworth, Topology::TopC, 5, plan);
//! let result = compute(&spec).unwrap();
//! assert_eq!(result.network.tank_capacitors.len(), 5);
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmBandpassDesigner } from 'bandpass_core';
//!
//! const json = WasmBandpassDesigner.design('chebyshev', 'top', 5, 14.2e6, 500e3, 50, 0.5);
//! ```
//!
//! ## Synthesis Method
//!
//! For a fractional bandwidth `FBW = BW / f0`:
//!
//! 1. Take prototype values `g0..g(n+1)` for the response and order
//! 2. `k(i,i+1) = FBW / sqrt(g(i) g(i+1))`, `Qe = g0 g1 / FBW`
//! 3. Every tank resonates at `f0` with reactance `Z0`: `L = Z0 / w0`, `C0 = 1 / (w0 Z0)`
//! 4. Coupling capacitors are sized from `k` and the tank capacitors are
//!    reduced (Top-C) or increased (Shunt-C) so each tank still resonates at `f0`

pub mod calculator;
pub mod components;
pub mod coupling;
pub mod design;
pub mod error;
pub mod eseries;
pub mod explain;
pub mod guidance;
pub mod network;
pub mod prototype;
pub mod report;
pub mod resonator;
pub mod response;
pub mod units;
pub mod verify;

// Re-export main types for convenience
pub use calculator::{compute, FilterResult};
pub use design::{FilterSpec, FrequencyPlan, ResponseType, Topology};
pub use error::{Result, SynthesisError};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmBandpassDesigner;

/// Default system impedance in ohms
pub const DEFAULT_IMPEDANCE_OHMS: f64 = 50.0;

/// Default multiplier on `f0 / BW` for the minimum inductor Q
pub const DEFAULT_Q_SAFETY: f64 = 2.0;

/// Default Chebyshev passband ripple in dB
pub const DEFAULT_RIPPLE_DB: f64 = 0.5;

/// Highest accepted center frequency (1 THz)
pub const MAX_FREQUENCY_HZ: f64 = 1e12;

/// Highest accepted system impedance (1 MOhm)
pub const MAX_IMPEDANCE_OHMS: f64 = 1e6;

/// Fractional bandwidth past which the narrowband approximation degrades
pub const TOP_C_FBW_LIMIT: f64 = 0.40;

/// Fractional bandwidth past which Shunt-C coupling is not recommended
pub const SHUNT_C_FBW_LIMIT: f64 = 0.10;
