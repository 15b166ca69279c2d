//! Boomwalk - Entry Point
//!
//! Loads a problem file and a solution file, runs the selected named checks
//! and prints a PASS/FAIL report. Exit status is 0 only when every selected
//! check passes.

use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;

use boomwalk::core::error::Result;
use boomwalk::core::VerifyConfig;
use boomwalk::io::{load_problem, load_solution};
use boomwalk::verify::{CheckKind, Runner, Verifier, ALL_CHECKS};

/// Verify a chained-vessel motion path against its problem description
#[derive(Parser, Debug)]
#[command(name = "boomwalk")]
#[command(about = "Verify a chained-vessel motion path against its problem description")]
struct Args {
    /// Problem description file
    problem: PathBuf,

    /// Solution path file
    solution: PathBuf,

    /// Checks to run, by name (default: all of initial, goal, steps, booms,
    /// convexity, areas, bounds, collisions, cost)
    #[arg(long, value_delimiter = ',')]
    checks: Vec<String>,

    /// Maximum error tolerance applied to every comparison
    #[arg(long, default_value_t = 1e-5)]
    max_error: f64,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: String,

    /// List offending solution-file line numbers on failure
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn run(args: &Args) -> Result<bool> {
    let checks: Vec<CheckKind> = if args.checks.is_empty() {
        ALL_CHECKS.to_vec()
    } else {
        args.checks
            .iter()
            .map(|name| CheckKind::from_str(name))
            .collect::<Result<_>>()?
    };

    let problem = load_problem(&args.problem)?;
    tracing::info!(
        vessels = problem.asv_count,
        obstacles = problem.obstacles.len(),
        "problem loaded"
    );
    let solution = load_solution(&args.solution)?;
    tracing::info!(configurations = solution.path.len(), "solution loaded");

    let config = VerifyConfig::with_max_error(args.max_error);
    if let Err(reason) = config.validate() {
        return Err(boomwalk::core::BoomwalkError::InvalidConfig(reason));
    }

    let verifier = Verifier::new(&problem, &solution, config);
    let report = if args.format == "json" {
        let report = Runner::new(verifier, args.verbose).quiet().run(&checks);
        println!("{}", serde_json::to_string_pretty(&report)?);
        report
    } else {
        Runner::new(verifier, args.verbose).run(&checks)
    };

    Ok(report.all_passed)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "boomwalk=warn".into()),
        )
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
