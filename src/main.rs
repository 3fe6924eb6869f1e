//! Bandpass - Coupled Resonator Bandpass Filter Calculator
//!
//! Component values for Top-C and Shunt-C coupled-resonator LC bandpass
//! filters with Butterworth or Chebyshev response.
//!
//! # Usage
//!
//! ```bash
//! bandpass -t butterworth -f 14.2MHz -b 500kHz -c top -n 5
//! bandpass -t chebyshev --fl 14MHz --fh 14.35MHz -c shunt -r 0.5 -n 7
//! bandpass -t butterworth -f 7.1MHz -b 300kHz -c top --eseries E24 --plot
//! ```

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use bandpass_core::{
    compute,
    error::Result,
    eseries::ESeries,
    explain::explain,
    report::{render, OutputFormat, RenderOptions},
    units::{parse_frequency, parse_impedance},
    verify::verify,
    FilterSpec, FrequencyPlan, ResponseType, Topology, DEFAULT_Q_SAFETY, DEFAULT_RIPPLE_DB,
};

/// Coupled resonator bandpass filter calculator
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    after_help = "Examples:\n  \
        bandpass -t butterworth -f 14.2MHz -b 500kHz -c top -n 5\n  \
        bandpass -t chebyshev --fl 14MHz --fh 14.35MHz -c shunt -r 0.5 -n 7\n  \
        bandpass -t butterworth --explain"
)]
struct Args {
    /// Filter type: butterworth (any n) or chebyshev (odd n only)
    #[arg(short = 't', long = "type", value_enum)]
    response: Option<ResponseType>,

    /// Center frequency (e.g. 14.2MHz, 7.1MHz)
    #[arg(short = 'f', long)]
    frequency: Option<String>,

    /// 3 dB bandwidth (e.g. 500kHz, 1MHz)
    #[arg(short = 'b', long)]
    bandwidth: Option<String>,

    /// Lower cutoff frequency (e.g. 14MHz)
    #[arg(long = "fl", visible_alias = "f-low")]
    f_low: Option<String>,

    /// Upper cutoff frequency (e.g. 14.35MHz)
    #[arg(long = "fh", visible_alias = "f-high")]
    f_high: Option<String>,

    /// Coupling topology: top (series) or shunt (parallel)
    #[arg(short = 'c', long = "coupling", value_enum)]
    topology: Option<Topology>,

    /// System impedance (e.g. 50, 75ohm, 1kohm)
    #[arg(short = 'z', long, default_value = "50")]
    impedance: String,

    /// Number of resonators (LC tanks): 2-9
    #[arg(short = 'n', long = "resonators", default_value_t = 2)]
    order: usize,

    /// Chebyshev passband ripple: 0.1, 0.5, or 1.0 dB
    #[arg(short = 'r', long, default_value_t = DEFAULT_RIPPLE_DB)]
    ripple: f64,

    /// Q safety factor (crystal filters 1.5, LC filters 2.0, lossy inductors 3.0+)
    #[arg(long, default_value_t = DEFAULT_Q_SAFETY)]
    q_safety: f64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Print values in scientific notation
    #[arg(long)]
    raw: bool,

    /// Match capacitors to a standard value series
    #[arg(long, value_enum)]
    eseries: Option<ESeries>,

    /// Show the ideal frequency response
    #[arg(long)]
    plot: bool,

    /// Explain how the selected filter type works
    #[arg(long)]
    explain: bool,

    /// Run calculation verification tests
    #[arg(long)]
    verify: bool,

    /// Log filter (e.g. debug, bandpass_core=trace); overrides RUST_LOG
    #[arg(long)]
    log_level: Option<String>,
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn usage_error(kind: ErrorKind, message: &str) -> ! {
    Args::command().error(kind, message).exit()
}

fn frequency_plan(args: &Args) -> Result<FrequencyPlan> {
    match (&args.frequency, &args.bandwidth, &args.f_low, &args.f_high) {
        (Some(f), Some(bw), None, None) => FrequencyPlan::from_center(parse_frequency(f)?, parse_frequency(bw)?),
        (None, None, Some(fl), Some(fh)) => FrequencyPlan::from_edges(parse_frequency(fl)?, parse_frequency(fh)?),
        (None, None, None, None) => usage_error(
            ErrorKind::MissingRequiredArgument,
            "specify -f/--frequency with -b/--bandwidth, or --fl with --fh",
        ),
        _ => usage_error(
            ErrorKind::ArgumentConflict,
            "use either -f/--frequency with -b/--bandwidth, or --fl with --fh, not a mix",
        ),
    }
}

fn run(args: &Args, response: ResponseType, topology: Topology) -> Result<String> {
    let plan = frequency_plan(args)?;
    let spec = FilterSpec::new(response, topology, args.order, plan)
        .with_impedance(parse_impedance(&args.impedance)?)
        .with_ripple_db(args.ripple)
        .with_q_safety(args.q_safety);

    let result = compute(&spec)?;

    let opts = RenderOptions {
        raw: args.raw,
        eseries: args.eseries,
        plot: args.plot,
    };
    render(&result, args.format, &opts)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.log_level.as_deref());

    if args.verify {
        let report = verify();
        println!("{report}");
        return if report.all_passed() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    let Some(response) = args.response else {
        usage_error(ErrorKind::MissingRequiredArgument, "the following argument is required: -t/--type");
    };

    if args.explain {
        println!("{}", explain(response));
        return ExitCode::SUCCESS;
    }

    let Some(topology) = args.topology else {
        usage_error(ErrorKind::MissingRequiredArgument, "the following argument is required: -c/--coupling");
    };

    match run(&args, response, topology) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
