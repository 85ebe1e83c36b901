//! Binary entry point for the idiombench suite runner.
#![forbid(unsafe_code)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use idiombench::config::{SuiteConfig, DEFAULT_INCREMENTS, DEFAULT_WORKERS};
use idiombench::runner::{self, TaskOutcome};
use idiombench::{report, tasks, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "idiombench",
    version,
    about = "Runs a suite of fifty isolated micro-benchmark tasks",
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Execute tasks (the default when no subcommand is given).
    Run(RunArgs),
    /// List the registered tasks in execution order.
    List,
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Restrict the run to these task ordinals (repeatable).
    #[arg(long = "only", value_name = "N")]
    only: Vec<u16>,

    /// Seed for tasks that draw random values; defaults to OS entropy.
    /// Pin it for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    /// Worker threads spawned by the atomic counter task.
    #[arg(long, default_value_t = DEFAULT_WORKERS)]
    workers: usize,

    /// Increments each counter worker applies.
    #[arg(long, default_value_t = DEFAULT_INCREMENTS)]
    increments: u64,

    /// Directory for task scratch files (discard file, round-trip file).
    #[arg(long, default_value = ".")]
    scratch_dir: PathBuf,

    /// Append-only log file written by the log task. Grows across runs.
    #[arg(long, default_value = "log.txt")]
    log_file: PathBuf,

    /// Archive env.json/results.json/results.csv under this directory.
    #[arg(long)]
    report_dir: Option<PathBuf>,

    /// Print the per-task timing table after the run.
    #[arg(long)]
    timings: bool,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            only: Vec::new(),
            seed: None,
            workers: DEFAULT_WORKERS,
            increments: DEFAULT_INCREMENTS,
            scratch_dir: PathBuf::from("."),
            log_file: PathBuf::from("log.txt"),
            report_dir: None,
            timings: false,
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_else(|| Command::Run(RunArgs::default()));
    let result = match command {
        Command::Run(args) => run_suite(args),
        Command::List => list_tasks(),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}

fn run_suite(args: RunArgs) -> Result<()> {
    let seed = args.seed.unwrap_or_else(rand::random);
    let config = SuiteConfig {
        seed,
        workers: args.workers,
        increments: args.increments,
        scratch_dir: args.scratch_dir,
        log_path: args.log_file,
    };

    let selected = runner::select(&args.only)?;
    info!(tasks = selected.len(), seed, "suite starting");

    let mut outcomes = Vec::with_capacity(selected.len());
    for task in &selected {
        let outcome = runner::run_task(task, &config)?;
        println!("{}", outcome.line);
        outcomes.push(outcome);
    }

    if args.timings {
        TaskOutcome::print_table_header();
        for outcome in &outcomes {
            outcome.print_table_row();
        }
    }

    if let Some(dir) = args.report_dir {
        let out_dir = report::write_artifacts(&dir, &outcomes)?;
        println!(
            "report artifacts written to {} ({} tasks)",
            out_dir.display(),
            outcomes.len()
        );
    }

    Ok(())
}

fn list_tasks() -> Result<()> {
    for task in tasks::all() {
        println!("{:>2}  {}", task.id, task.name);
    }
    Ok(())
}
