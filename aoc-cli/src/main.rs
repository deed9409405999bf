//! AOC CLI - runs day modules selected by activation flags

mod cli;
mod config;
mod error;

// Import aoc-days to link the day plugins
use aoc_days as _;

use aoc_runner::RegistryBuilder;
use clap::Parser;
use cli::Args;
use error::CliError;

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose, args.quiet);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose >= 2)
        .init();
}

fn run(args: Args) -> Result<(), CliError> {
    let run_config = config::resolve(&args)?;

    let registry = RegistryBuilder::new().register_all_plugins()?.build();
    if registry.is_empty() {
        println!("No day modules registered.");
        return Ok(());
    }

    let summary = registry.run_with_roots(&run_config, &args.input_dir, &args.output_dir);

    if !args.quiet {
        if summary.days_run == 0 {
            println!(
                "No day modules activated. Enable days in {} or pass --day.",
                args.config.display()
            );
        } else {
            println!(
                "Ran {} day(s), {} operation(s). Solutions are under {}.",
                summary.days_run,
                summary.operations,
                args.output_dir.join("solutions").display()
            );
        }
    }
    Ok(())
}
