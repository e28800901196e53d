// ─────────────────────────────────────────────────────────────────────
// Nuclide Analyzer — CLI
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Terminal front end for the liquid-drop calculator.
//!
//! Run: cargo run --release --bin nuclide-analyzer -- batch --series series.json

mod args;
mod session;

use args::{Args, Mode, USAGE};
use nuclide_core::NuclideCalculator;
use nuclide_types::config::AnalyzerConfig;
use nuclide_types::error::NuclideResult;
use session::Session;
use std::io;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so they never interleave with prompts on stdout.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_calculator(config_path: Option<&str>) -> NuclideResult<NuclideCalculator> {
    let config = match config_path {
        Some(path) => {
            info!(path, "loading configuration");
            AnalyzerConfig::from_file(path)?
        }
        None => AnalyzerConfig::default(),
    };
    NuclideCalculator::new(config)
}

fn run(args: &Args) -> NuclideResult<()> {
    if args.mode == Mode::Help {
        println!("{USAGE}");
        return Ok(());
    }
    let calculator = load_calculator(args.config.as_deref())?;
    let stdin = io::stdin();
    let mut session = Session::new(&calculator, stdin.lock(), io::stdout());
    let series = args.series.as_deref();

    match args.mode {
        Mode::Menu => session.run_menu(series),
        Mode::Interactive => session.run_interactive(),
        Mode::Batch => session.run_batch(series),
        Mode::Help => Ok(()),
    }
}

fn main() -> ExitCode {
    init_tracing();

    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "nuclide analyzer failed");
            eprintln!("Critical error: {e}");
            ExitCode::FAILURE
        }
    }
}
