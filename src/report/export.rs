//! Machine-readable reports: JSON via `serde_json`, CSV via `csv`.

use serde::Serialize;

use super::display_value;
use crate::calculator::FilterResult;
use crate::components::{CapacitorRole, Component};
use crate::error::{Result, SynthesisError};
use crate::eseries::ESeriesMatch;
use crate::response::ResponsePoint;
use crate::units::split_value_unit;

#[derive(Serialize)]
struct JsonReport<'a> {
    filter_type: &'static str,
    coupling: &'static str,
    center_frequency_hz: f64,
    bandwidth_hz: f64,
    f_low_hz: f64,
    f_high_hz: f64,
    fractional_bw: f64,
    impedance_ohms: f64,
    n_resonators: usize,
    q_min: f64,
    components: JsonComponents,
    external_q: ExternalQ,
    #[serde(skip_serializing_if = "Option::is_none")]
    ripple_db: Option<f64>,
    warnings: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    standard_values: Vec<NamedMatch<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    frequency_response: Option<&'a [ResponsePoint]>,
}

#[derive(Serialize)]
struct JsonComponents {
    tank_capacitors: Vec<NamedCapacitor>,
    inductors: Vec<NamedInductor>,
    coupling_capacitors: Vec<NamedCapacitor>,
}

#[derive(Serialize)]
struct NamedCapacitor {
    name: String,
    value_farads: f64,
}

#[derive(Serialize)]
struct NamedInductor {
    name: String,
    value_henries: f64,
}

#[derive(Serialize)]
struct ExternalQ {
    input: f64,
    output: f64,
}

#[derive(Serialize)]
struct NamedMatch<'a> {
    name: &'a str,
    #[serde(flatten)]
    matched: &'a ESeriesMatch,
}

fn json_components(parts: &[Component]) -> JsonComponents {
    let mut out = JsonComponents {
        tank_capacitors: Vec::new(),
        inductors: Vec::new(),
        coupling_capacitors: Vec::new(),
    };
    for part in parts {
        match part {
            Component::Inductor(l) => out.inductors.push(NamedInductor {
                name: l.name.clone(),
                value_henries: l.inductance,
            }),
            Component::Capacitor(c) => {
                let named = NamedCapacitor {
                    name: c.name.clone(),
                    value_farads: c.capacitance,
                };
                match c.role {
                    CapacitorRole::Tank => out.tank_capacitors.push(named),
                    CapacitorRole::Coupling => out.coupling_capacitors.push(named),
                }
            }
        }
    }
    out
}

/// Pretty-printed JSON document for a result.
///
/// `matches` and `sweep` add the optional `standard_values` and
/// `frequency_response` sections.
pub fn to_json(
    result: &FilterResult,
    matches: &[(String, ESeriesMatch)],
    sweep: Option<&[ResponsePoint]>,
) -> Result<String> {
    let spec = &result.spec;
    let report = JsonReport {
        filter_type: spec.response.as_str(),
        coupling: spec.topology.as_str(),
        center_frequency_hz: spec.plan.center_hz,
        bandwidth_hz: spec.plan.bandwidth_hz,
        f_low_hz: spec.plan.low_hz,
        f_high_hz: spec.plan.high_hz,
        fractional_bw: result.fractional_bandwidth,
        impedance_ohms: spec.impedance_ohms,
        n_resonators: spec.order,
        q_min: result.guidance.min_required_q,
        components: json_components(&result.components()),
        external_q: ExternalQ {
            input: result.coupling.qe_in,
            output: result.coupling.qe_out,
        },
        ripple_db: spec.ripple(),
        warnings: result.warnings(),
        standard_values: matches
            .iter()
            .map(|(name, matched)| NamedMatch { name, matched })
            .collect(),
        frequency_response: sweep,
    };
    serde_json::to_string_pretty(&report).map_err(|e| SynthesisError::output("json", e))
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer.into_inner().map_err(|e| SynthesisError::output("csv", e))?;
    String::from_utf8(bytes).map_err(|e| SynthesisError::output("csv", e))
}

/// `Component,Value,Unit` rows with SI-prefixed values.
pub fn to_csv(result: &FilterResult) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(["Component", "Value", "Unit"])
        .map_err(|e| SynthesisError::output("csv", e))?;
    for part in result.components() {
        let formatted = display_value(&part, false);
        let (value, unit) = split_value_unit(&formatted);
        writer
            .write_record([part.name(), value, unit])
            .map_err(|e| SynthesisError::output("csv", e))?;
    }
    finish(writer)
}

/// `frequency_hz,magnitude_db` rows of a sweep.
pub fn sweep_to_csv(points: &[ResponsePoint]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(["frequency_hz", "magnitude_db"])
        .map_err(|e| SynthesisError::output("csv", e))?;
    for p in points {
        writer
            .write_record([p.frequency_hz.to_string(), format!("{:.2}", p.magnitude_db)])
            .map_err(|e| SynthesisError::output("csv", e))?;
    }
    finish(writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::compute;
    use crate::design::{FilterSpec, FrequencyPlan, ResponseType, Topology};
    use crate::eseries::{match_component, ESeries, DEFAULT_RATIO_LIMIT};

    fn cheb3() -> FilterResult {
        let plan = FrequencyPlan::from_center(14.175e6, 350e3).unwrap();
        compute(&FilterSpec::new(ResponseType::Chebyshev, Topology::TopC, 3, plan)).unwrap()
    }

    #[test]
    fn test_json_layout() {
        let r = cheb3();
        let text = to_json(&r, &[], None).unwrap();
        let v: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(v["filter_type"], "chebyshev");
        assert_eq!(v["coupling"], "top");
        assert_eq!(v["n_resonators"], 3);
        assert_eq!(v["ripple_db"], 0.5);
        assert_eq!(v["components"]["tank_capacitors"].as_array().unwrap().len(), 3);
        assert_eq!(v["components"]["inductors"][1]["name"], "L2");
        assert_eq!(v["components"]["coupling_capacitors"][1]["name"], "Cs23");
        assert!(v["external_q"]["input"].as_f64().unwrap() > 64.0);
        assert!(v["warnings"].as_array().unwrap().is_empty());
        assert!(v.get("standard_values").is_none());
        assert!(v.get("frequency_response").is_none());
    }

    #[test]
    fn test_json_butterworth_omits_ripple() {
        let plan = FrequencyPlan::from_center(7.1e6, 300e3).unwrap();
        let r = compute(&FilterSpec::new(ResponseType::Butterworth, Topology::ShuntC, 2, plan)).unwrap();
        let v: serde_json::Value = serde_json::from_str(&to_json(&r, &[], None).unwrap()).unwrap();
        assert!(v.get("ripple_db").is_none());
    }

    #[test]
    fn test_json_standard_values_are_flattened() {
        let r = cheb3();
        let m = match_component(r.network.coupling_capacitors[0], ESeries::E24, DEFAULT_RATIO_LIMIT).unwrap();
        let text = to_json(&r, &[("Cs12".to_string(), m)], None).unwrap();
        let v: serde_json::Value = serde_json::from_str(&text).unwrap();
        let entry = &v["standard_values"][0];
        assert_eq!(entry["name"], "Cs12");
        assert!(entry["single_value"].as_f64().is_some());
    }

    #[test]
    fn test_csv_rows() {
        let text = to_csv(&cheb3()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Component,Value,Unit");
        assert_eq!(lines.len(), 1 + 3 + 3 + 2);
        assert_eq!(lines[4], "L1,561.39,nH");
        assert_eq!(lines[7], "Cs12,4.19,pF");
    }

    #[test]
    fn test_sweep_csv() {
        let points = [
            ResponsePoint {
                frequency_hz: 1e6,
                magnitude_db: -3.014,
            },
            ResponsePoint {
                frequency_hz: 2e6,
                magnitude_db: 0.0,
            },
        ];
        let text = sweep_to_csv(&points).unwrap();
        assert_eq!(text.lines().collect::<Vec<_>>(), vec!["frequency_hz,magnitude_db", "1000000,-3.01", "2000000,0.00"]);
    }
}
