//! Rendering a calculated filter for people and for other programs.
//!
//! - [`OutputFormat::Table`] - header block, topology diagram, value tables
//! - [`OutputFormat::Quiet`] - one `Name: value` line per part
//! - [`OutputFormat::Json`] - pretty-printed document
//! - [`OutputFormat::Csv`] - `Component,Value,Unit` rows

mod diagram;
mod export;
mod plot;
mod table;

pub use diagram::topology_diagram;
pub use export::{sweep_to_csv, to_csv, to_json};
pub use plot::{render_ascii_plot, PlotOptions};
pub use table::{render_quiet, render_table};

use crate::calculator::FilterResult;
use crate::components::Component;
use crate::eseries::{match_component, ESeries, ESeriesMatch, DEFAULT_RATIO_LIMIT};
use crate::error::Result;
use crate::response::{frequency_sweep, ResponsePoint, DEFAULT_SWEEP_POINTS, DEFAULT_SWEEP_SPAN};
use crate::units::{format_capacitance, format_inductance};

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
    Quiet,
}

/// Optional report sections.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Print values in scientific notation instead of SI prefixes
    pub raw: bool,
    /// Match every capacitor against a preferred-value series
    pub eseries: Option<ESeries>,
    /// Append the ideal frequency response
    pub plot: bool,
}

/// Render a result in the requested format.
pub fn render(result: &FilterResult, format: OutputFormat, opts: &RenderOptions) -> Result<String> {
    let sweep = opts.plot.then(|| frequency_sweep(result, DEFAULT_SWEEP_SPAN, DEFAULT_SWEEP_POINTS));

    match format {
        OutputFormat::Table => render_table(result, opts, sweep.as_deref()),
        OutputFormat::Quiet => {
            let mut out = render_quiet(result, opts.raw);
            if let Some(points) = &sweep {
                out.push_str("\n\n");
                out.push_str(&plot_for(result, points));
            }
            Ok(out)
        }
        OutputFormat::Json => to_json(result, &capacitor_matches(result, opts.eseries)?, sweep.as_deref()),
        OutputFormat::Csv => {
            let mut out = to_csv(result)?;
            if let Some(points) = &sweep {
                out.push('\n');
                out.push_str(&sweep_to_csv(points)?);
            }
            Ok(out)
        }
    }
}

/// Human-readable value of a part.
///
/// `raw` gives scientific notation with the base SI unit.
pub(crate) fn display_value(component: &Component, raw: bool) -> String {
    if raw {
        return format!("{:.6e} {}", component.value(), component.unit());
    }
    match component {
        Component::Capacitor(c) => format_capacitance(c.capacitance),
        Component::Inductor(l) => format_inductance(l.inductance),
    }
}

/// Preferred-value matches for every capacitor, in bill-of-materials order.
pub(crate) fn capacitor_matches(
    result: &FilterResult,
    series: Option<ESeries>,
) -> Result<Vec<(String, ESeriesMatch)>> {
    let Some(series) = series else {
        return Ok(Vec::new());
    };
    result
        .components()
        .iter()
        .filter(|c| c.is_capacitor())
        .map(|c| Ok((c.name().to_string(), match_component(c.value(), series, DEFAULT_RATIO_LIMIT)?)))
        .collect()
}

pub(crate) fn plot_for(result: &FilterResult, points: &[ResponsePoint]) -> String {
    let spec = &result.spec;
    let opts = PlotOptions {
        title: format!("Frequency Response ({}, n={})", spec.response.title(), spec.order),
        ..PlotOptions::default()
    };
    render_ascii_plot(points, spec.center_hz(), spec.bandwidth_hz(), &opts)
}
