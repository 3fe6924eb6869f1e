//! WASM bindings for Bandpass Core.
//!
//! This module provides JavaScript-friendly bindings for filter design in a
//! web page.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmBandpassDesigner } from 'bandpass_core';
//!
//! await init();
//!
//! // One-shot: JSON report string
//! const json = WasmBandpassDesigner.design('chebyshev', 'top', 5, 14.2e6, 500e3, 50, 0.5);
//!
//! // Or keep the design around and render it several ways
//! const d = WasmBandpassDesigner.from_edges('butterworth', 'shunt', 4, 14.0e6, 14.35e6);
//! console.log(d.min_required_q, d.to_table());
//! ```

use wasm_bindgen::prelude::*;

use crate::calculator::{compute, FilterResult};
use crate::design::{FilterSpec, FrequencyPlan, ResponseType, Topology};
use crate::error::SynthesisError;
use crate::report::{render, OutputFormat, RenderOptions};
use crate::{DEFAULT_IMPEDANCE_OHMS, DEFAULT_Q_SAFETY, DEFAULT_RIPPLE_DB};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn js_err(e: SynthesisError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// A calculated filter, ready to render.
#[wasm_bindgen]
pub struct WasmBandpassDesigner {
    result: FilterResult,
}

#[wasm_bindgen]
impl WasmBandpassDesigner {
    /// Design from center frequency and bandwidth with default impedance,
    /// ripple, and Q safety factor.
    ///
    /// # Example
    /// ```javascript
    /// const d = new WasmBandpassDesigner('butterworth', 'top', 5, 14.2e6, 500e3);
    /// ```
    #[wasm_bindgen(constructor)]
    pub fn new(
        response: &str,
        topology: &str,
        order: usize,
        center_hz: f64,
        bandwidth_hz: f64,
    ) -> Result<WasmBandpassDesigner, JsValue> {
        Self::with_options(
            response,
            topology,
            order,
            center_hz,
            bandwidth_hz,
            DEFAULT_IMPEDANCE_OHMS,
            DEFAULT_RIPPLE_DB,
            DEFAULT_Q_SAFETY,
        )
    }

    /// Design from center frequency and bandwidth with every option.
    #[wasm_bindgen]
    #[allow(clippy::too_many_arguments)]
    pub fn with_options(
        response: &str,
        topology: &str,
        order: usize,
        center_hz: f64,
        bandwidth_hz: f64,
        impedance_ohms: f64,
        ripple_db: f64,
        q_safety: f64,
    ) -> Result<WasmBandpassDesigner, JsValue> {
        let plan = FrequencyPlan::from_center(center_hz, bandwidth_hz).map_err(js_err)?;
        Self::build(response, topology, order, plan, impedance_ohms, ripple_db, q_safety)
    }

    /// Design from lower and upper cutoff frequencies.
    #[wasm_bindgen]
    pub fn from_edges(
        response: &str,
        topology: &str,
        order: usize,
        low_hz: f64,
        high_hz: f64,
    ) -> Result<WasmBandpassDesigner, JsValue> {
        let plan = FrequencyPlan::from_edges(low_hz, high_hz).map_err(js_err)?;
        Self::build(
            response,
            topology,
            order,
            plan,
            DEFAULT_IMPEDANCE_OHMS,
            DEFAULT_RIPPLE_DB,
            DEFAULT_Q_SAFETY,
        )
    }

    /// One-shot design returning the JSON report.
    #[wasm_bindgen]
    pub fn design(
        response: &str,
        topology: &str,
        order: usize,
        center_hz: f64,
        bandwidth_hz: f64,
        impedance_ohms: f64,
        ripple_db: f64,
    ) -> Result<String, JsValue> {
        Self::with_options(
            response,
            topology,
            order,
            center_hz,
            bandwidth_hz,
            impedance_ohms,
            ripple_db,
            DEFAULT_Q_SAFETY,
        )?
        .to_json()
    }

    /// JSON report.
    #[wasm_bindgen]
    pub fn to_json(&self) -> Result<String, JsValue> {
        self.render(OutputFormat::Json)
    }

    /// CSV component list.
    #[wasm_bindgen]
    pub fn to_csv(&self) -> Result<String, JsValue> {
        self.render(OutputFormat::Csv)
    }

    /// Plain-text report including the topology diagram.
    #[wasm_bindgen]
    pub fn to_table(&self) -> Result<String, JsValue> {
        self.render(OutputFormat::Table)
    }

    /// Minimum unloaded inductor Q.
    #[wasm_bindgen(getter)]
    pub fn min_required_q(&self) -> f64 {
        self.result.guidance.min_required_q
    }

    /// Fractional bandwidth `BW / f0`.
    #[wasm_bindgen(getter)]
    pub fn fractional_bandwidth(&self) -> f64 {
        self.result.fractional_bandwidth
    }

    /// Bandwidth advisory, or `undefined` when there is none.
    #[wasm_bindgen(getter)]
    pub fn warning(&self) -> Option<String> {
        self.result.guidance.bandwidth_warning.map(|w| w.to_string())
    }
}

impl WasmBandpassDesigner {
    fn build(
        response: &str,
        topology: &str,
        order: usize,
        plan: FrequencyPlan,
        impedance_ohms: f64,
        ripple_db: f64,
        q_safety: f64,
    ) -> Result<WasmBandpassDesigner, JsValue> {
        let response: ResponseType = response.parse().map_err(js_err)?;
        let topology: Topology = topology.parse().map_err(js_err)?;
        let spec = FilterSpec::new(response, topology, order, plan)
            .with_impedance(impedance_ohms)
            .with_ripple_db(ripple_db)
            .with_q_safety(q_safety);
        let result = compute(&spec).map_err(js_err)?;
        Ok(WasmBandpassDesigner { result })
    }

    fn render(&self, format: OutputFormat) -> Result<String, JsValue> {
        render(&self.result, format, &RenderOptions::default()).map_err(js_err)
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Describe a response type (`butterworth` or `chebyshev`).
#[wasm_bindgen]
pub fn explain(response: &str) -> Result<String, JsValue> {
    let response: ResponseType = response.parse().map_err(js_err)?;
    Ok(crate::explain::explain(response).to_string())
}
