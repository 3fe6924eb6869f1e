//! Plain-text reports.

use std::fmt::Write;

use super::{capacitor_matches, display_value, plot_for, topology_diagram, RenderOptions};
use crate::calculator::FilterResult;
use crate::components::Component;
use crate::error::{Result, SynthesisError};
use crate::eseries::ESeriesMatch;
use crate::response::ResponsePoint;
use crate::units::{format_capacitance, format_frequency, format_value};

const RULE_WIDTH: usize = 50;
const CELL: usize = 24;

/// One `Name: value` line per part.
pub fn render_quiet(result: &FilterResult, raw: bool) -> String {
    result
        .components()
        .iter()
        .map(|c| format!("{}: {}", c.name(), display_value(c, raw)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full report: header, guidance, diagram, value tables, external Q.
pub fn render_table(result: &FilterResult, opts: &RenderOptions, sweep: Option<&[ResponsePoint]>) -> Result<String> {
    let matches = capacitor_matches(result, opts.eseries)?;
    let mut out = String::new();
    write_report(&mut out, result, opts.raw).map_err(|e| SynthesisError::output("table", e))?;

    if let Some(series) = opts.eseries {
        write_matches(&mut out, &series.to_string(), &matches).map_err(|e| SynthesisError::output("table", e))?;
    }
    if let Some(points) = sweep {
        out.push('\n');
        out.push_str(&plot_for(result, points));
        out.push('\n');
    }
    Ok(out)
}

fn write_report(out: &mut String, result: &FilterResult, raw: bool) -> std::fmt::Result {
    let spec = &result.spec;
    let plan = &spec.plan;
    let rule = "=".repeat(RULE_WIDTH);

    writeln!(out)?;
    writeln!(out, "{} Coupled Resonator Bandpass Filter", spec.response.title())?;
    writeln!(out, "{rule}")?;
    writeln!(out, "Center Frequency f₀: {}", format_frequency(plan.center_hz))?;
    writeln!(out, "Lower Cutoff fₗ:     {}", format_frequency(plan.low_hz))?;
    writeln!(out, "Upper Cutoff fₕ:     {}", format_frequency(plan.high_hz))?;
    writeln!(out, "Bandwidth BW:        {}", format_frequency(plan.bandwidth_hz))?;
    writeln!(out, "Fractional BW:       {:.2}%", result.fractional_bandwidth * 100.0)?;
    writeln!(out, "Impedance Z₀:        {}", format_value(spec.impedance_ohms, &[(1.0, "Ω")], None))?;
    if let Some(ripple) = spec.ripple() {
        writeln!(out, "Ripple:              {ripple} dB")?;
    }
    writeln!(out, "Resonators:          {}", spec.order)?;
    writeln!(out, "Coupling:            {}", spec.topology)?;
    writeln!(out, "{rule}")?;

    let warnings = result.warnings();
    if !warnings.is_empty() {
        writeln!(out, "\nWarnings:")?;
        for w in &warnings {
            writeln!(out, "  ⚠ {w}")?;
        }
    }

    writeln!(out, "\nMinimum Component Q: {:.0}", result.guidance.min_required_q)?;
    writeln!(out, "  (Q safety factor: {})", spec.q_safety)?;

    writeln!(out, "\nTopology:")?;
    for line in topology_diagram(spec.topology, spec.order) {
        writeln!(out, "{}", line.trim_end())?;
    }

    let parts = result.components();
    let (tanks, rest): (Vec<&Component>, Vec<&Component>) = parts.iter().partition(|c| c.name().starts_with("Cp"));
    let (inductors, coupling): (Vec<&Component>, Vec<&Component>) = rest.into_iter().partition(|c| !c.is_capacitor());
    let bar = "─".repeat(CELL);

    writeln!(out, "\n{:^width$}", "Component Values", width = RULE_WIDTH)?;
    writeln!(out, "┌{bar}┬{bar}┐")?;
    writeln!(out, "│{:^w$}│{:^w$}│", "Tank Capacitors", "Inductors", w = CELL)?;
    writeln!(out, "├{bar}┼{bar}┤")?;
    for (cap, ind) in tanks.iter().zip(&inductors) {
        let cap = format!("{}: {}", cap.name(), display_value(cap, raw));
        let ind = format!("{}: {}", ind.name(), display_value(ind, raw));
        writeln!(out, "│ {:<w$} │ {:<w$} │", cap, ind, w = CELL - 2)?;
    }
    writeln!(out, "└{bar}┴{bar}┘")?;

    writeln!(out, "\n┌{bar}┐")?;
    writeln!(out, "│{:^w$}│", "Coupling Capacitors", w = CELL)?;
    writeln!(out, "├{bar}┤")?;
    for cs in &coupling {
        let cs = format!("{}: {}", cs.name(), display_value(cs, raw));
        writeln!(out, "│ {:<w$} │", cs, w = CELL - 2)?;
    }
    writeln!(out, "└{bar}┘")?;

    writeln!(out, "\nExternal Q (input):  {:.2}", result.coupling.qe_in)?;
    writeln!(out, "External Q (output): {:.2}", result.coupling.qe_out)?;
    Ok(())
}

fn write_matches(
    out: &mut String,
    series: &str,
    matches: &[(String, ESeriesMatch)],
) -> std::fmt::Result {
    writeln!(out, "\n{series} Standard Values")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for (name, m) in matches {
        write!(
            out,
            "{:<5} {:>10} -> {:>10} ({:.2}%)",
            name,
            format_capacitance(m.target),
            format_capacitance(m.single_value),
            m.single_error_pct
        )?;
        if let Some(p) = &m.parallel {
            if p.error_pct < m.single_error_pct {
                write!(
                    out,
                    "  or {} || {} ({:.2}%)",
                    format_capacitance(p.parts.0),
                    format_capacitance(p.parts.1),
                    p.error_pct
                )?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::compute;
    use crate::design::{FilterSpec, FrequencyPlan, ResponseType, Topology};
    use crate::eseries::ESeries;

    fn result(response: ResponseType, topology: Topology, order: usize) -> FilterResult {
        let plan = FrequencyPlan::from_center(14.2e6, 500e3).unwrap();
        compute(&FilterSpec::new(response, topology, order, plan)).unwrap()
    }

    #[test]
    fn test_quiet_lists_every_part() {
        let r = result(ResponseType::Butterworth, Topology::TopC, 3);
        let text = render_quiet(&r, false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3 + 3 + 2);
        assert_eq!(lines[3], "L1: 560.40 nH");
        assert!(lines[6].starts_with("Cs12: "));
    }

    #[test]
    fn test_table_sections() {
        let r = result(ResponseType::Chebyshev, Topology::ShuntC, 5);
        let text = render_table(&r, &RenderOptions::default(), None).unwrap();
        assert!(text.contains("Chebyshev Coupled Resonator Bandpass Filter"));
        assert!(text.contains("Ripple:              0.5 dB"));
        assert!(text.contains("Coupling:            Shunt-C (Parallel)"));
        assert!(text.contains("Minimum Component Q: 57"));
        assert!(text.contains("│ L5: 560.40 nH"));
        assert!(text.contains("Cs45: "));
        assert!(text.contains("External Q (output):"));
        assert!(!text.contains("Warnings:"));
    }

    #[test]
    fn test_butterworth_has_no_ripple_line() {
        let r = result(ResponseType::Butterworth, Topology::TopC, 2);
        let text = render_table(&r, &RenderOptions::default(), None).unwrap();
        assert!(!text.contains("Ripple:"));
        assert!(text.contains("Impedance Z₀:        50 Ω"));
    }

    #[test]
    fn test_eseries_section() {
        let r = result(ResponseType::Butterworth, Topology::TopC, 3);
        let opts = RenderOptions {
            eseries: Some(ESeries::E24),
            ..RenderOptions::default()
        };
        let text = render_table(&r, &opts, None).unwrap();
        assert!(text.contains("E24 Standard Values"));
        assert!(text.lines().any(|l| l.starts_with("Cs23")));
    }
}
