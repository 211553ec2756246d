use clap::{Parser, Subcommand};
use colored::Colorize;
use fixed_diffeq::{
    DiffeqError, IntegrationConfig, Method, PairedRhs, PairedTrajectory, ScalarRhs, Trajectory,
    compare_paired_with, compare_scalar_with, par_compare_paired_with, par_compare_scalar_with,
};

mod error;
mod report;
mod settings;
mod systems;

use error::CliError;
use settings::{PairedArgs, RunArgs};

#[derive(Debug, Parser)]
#[command(version, about = "Compare fixed-step ODE integrators", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// dy/dt = cos(t) + sin(y), reported as y against t
    FirstOrder(RunArgs),
    /// dy/dt = sin(t) + cos(y) + v, dv/dt = cos(v), reported as y against t
    SecondOrder(PairedArgs),
    /// dy/dt = sin(t) + cos(y), dv/dt = sin(v), reported in the (y, v) plane
    PhasePlane(PairedArgs),
}

impl Commands {
    fn stem(&self) -> &'static str {
        match self {
            Commands::FirstOrder(_) => "first_order",
            Commands::SecondOrder(_) => "second_order",
            Commands::PhasePlane(_) => "phase_plane",
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(&cli.command) {
        error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(command: &Commands) -> Result<(), CliError> {
    let stem = command.stem();
    match command {
        Commands::FirstOrder(args) => {
            let config = args.resolve(IntegrationConfig::default())?;
            let results = run_scalar(&systems::first_order, &config, args)?;
            report::print_table("t against y", &report::scalar_rows(&results));
            if let Some(dir) = &args.output {
                let paths = report::write_csv_files(dir, stem, &results)?;
                success(&format!("wrote {} files to {}", paths.len(), dir.display()));
            }
        }
        Commands::SecondOrder(args) => {
            let config = args.resolve(IntegrationConfig::default())?;
            let results = run_paired(&systems::second_order(), &config, &args.run)?;
            report::print_table("t against y", &report::paired_rows(&results));
            if let Some(dir) = &args.run.output {
                let paths = report::write_csv_files(dir, stem, &results)?;
                success(&format!("wrote {} files to {}", paths.len(), dir.display()));
            }
        }
        Commands::PhasePlane(args) => {
            let base = IntegrationConfig::default()
                .with_num_steps(100)
                .with_span(0.0, 10.0);
            let config = args.resolve(base)?;
            let results = run_paired(&systems::phase_plane(), &config, &args.run)?;
            report::print_table("y against v", &report::paired_rows(&results));
            if let Some(dir) = &args.run.output {
                let paths = report::write_csv_files(dir, stem, &results)?;
                success(&format!("wrote {} files to {}", paths.len(), dir.display()));
            }
        }
    }
    Ok(())
}

fn run_scalar<F>(
    f: &F,
    config: &IntegrationConfig,
    args: &RunArgs,
) -> Result<Vec<(Method, Trajectory)>, DiffeqError>
where
    F: ScalarRhs + Sync,
{
    let methods = args.selected_methods();
    log::info!("integrating {config:?} with {methods:?}");
    if args.parallel {
        par_compare_scalar_with(&methods, f, config)
    } else {
        compare_scalar_with(&methods, f, config)
    }
}

fn run_paired<F>(
    f: &F,
    config: &IntegrationConfig,
    args: &RunArgs,
) -> Result<Vec<(Method, PairedTrajectory)>, DiffeqError>
where
    F: PairedRhs + Sync,
{
    let methods = args.selected_methods();
    log::info!("integrating {config:?} with {methods:?}");
    if args.parallel {
        par_compare_paired_with(&methods, f, config)
    } else {
        compare_paired_with(&methods, f, config)
    }
}

fn success(s: &str) {
    println!("{}", s.green())
}

fn error(s: &str) {
    eprintln!("{}", s.red())
}
