//! # Window Filter
//!
//! The Window Filter tool performs the following functions:
//! * Reads a signal, or a request holding a signal, as JSON from a file or stdin.
//! * Checks the window size, step, metric and window shape before any processing begins.
//! * Slides a shaped window along the reflect-padded signal, reducing each slice to a single value.
//! * Writes the resulting samples as a JSON array to a file or stdout.
//!
mod parameters;
mod signal_io;

use clap::Parser;
use miette::IntoDiagnostic;
use moving_window::{MovingWindow, ValidatedRequest, ValidationMode, validation};
use parameters::Mode;
use signal_io::Output;
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, fmt};

/// [clap] derived struct to handle command line parameters.
#[derive(Debug, Parser)]
#[clap(author, version, about)]
struct Cli {
    /// Path of the JSON input, if absent the input is read from stdin
    #[clap(long, env = "WINDOW_FILTER_INPUT")]
    input: Option<PathBuf>,

    /// Path to write the JSON output to, if absent the output is written to stdout
    #[clap(long)]
    output: Option<PathBuf>,

    /// If set, the output is indented
    #[clap(long)]
    pretty: bool,

    /// If set, the slices are reduced in parallel
    #[clap(long)]
    parallel: bool,

    /// If set, window sizes and steps below their minimum are used as given, not rejected
    #[clap(long, env = "WINDOW_FILTER_SKIP_CHECKS")]
    skip_checks: bool,

    #[command(subcommand)]
    pub(crate) mode: Mode,
}

impl Cli {
    fn validation_mode(&self) -> ValidationMode {
        if self.skip_checks {
            ValidationMode::Disabled
        } else {
            ValidationMode::Enabled
        }
    }
}

fn main() -> miette::Result<()> {
    let args = Cli::parse();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mode = args.validation_mode();
    let output = match &args.mode {
        Mode::Apply(parameters) => {
            let signal = signal_io::read_input(args.input.as_deref()).into_diagnostic()?;
            let request =
                validation::validate(&parameters.to_request(signal), mode).into_diagnostic()?;
            process(&request, args.parallel)
        }
        Mode::Request => {
            let request = signal_io::read_input(args.input.as_deref()).into_diagnostic()?;
            let request = validation::validate(&request, mode).into_diagnostic()?;
            process(&request, args.parallel)
        }
        Mode::Shape(parameters) => {
            let window = parameters.window(mode).into_diagnostic()?;
            info!("{} window of size {}", window.shape(), window.len());
            Output(window.weights().to_vec())
        }
    };

    signal_io::write_output(args.output.as_deref(), &output, args.pretty).into_diagnostic()
}

#[instrument(skip_all, fields(
    signal_len = request.signal.len(),
    window = %request.spec.window(),
    metric = %request.metric
))]
fn process(request: &ValidatedRequest, parallel: bool) -> Output {
    let reducer = MovingWindow::new(&request.spec);
    let output = if parallel {
        reducer.apply_par(&request.signal, &request.metric)
    } else {
        reducer.apply(&request.signal, &request.metric)
    };
    info!("Produced {} samples", output.len());
    Output(output)
}
