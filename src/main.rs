use crate::{
    env::Env,
    tasks::{
        example::Examples,
        find::Find,
        ubench::{Ubench, UbenchRunArgs},
    },
};
use clap::{Parser, Subcommand};
use env_logger::Builder;
use log::error;
use pairsum::{GroupConfig, OutputFormat};
use std::{path::PathBuf, process};

pub mod env;
pub mod tasks;

/// Find all pairs of elements in an unsorted array that share the same sum
#[derive(Parser)]
#[command(name = "pairsum")]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,
    // The name of the task to execute
    #[clap(subcommand)]
    task: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Find pairs with equal sum in a user-provided array
    Find {
        /// Array of integers (space-separated)
        #[arg(
            short,
            long,
            num_args = 1..,
            allow_negative_numbers = true,
            required_unless_present = "file",
            conflicts_with = "file"
        )]
        array: Vec<String>,
        /// Path to a file containing integers (one per line)
        #[arg(short, long)]
        file: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Enumerate pairs in parallel
        #[arg(long)]
        parallel: bool,
    },
    /// Run the built-in examples from the problem statement
    Example {
        /// Example to run. If omitted, run every example and the additional
        /// test cases
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
        id: Option<u8>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Micro-benchmark pair grouping on random inputs
    Ubench {
        #[command(flatten)]
        run_args: UbenchRunArgs,
    },
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.task {
        Command::Find {
            array,
            file,
            format,
            parallel,
        } => {
            let values = Find::load(array, file.as_deref())?;
            Find::run(values, *format, GroupConfig {
                parallel: *parallel,
            })?;
        }
        Command::Example { id, format } => {
            Examples::run(id.map(usize::from), *format, GroupConfig::default())?;
        }
        Command::Ubench { run_args } => {
            Ubench::run(run_args)?;
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    // Initialize the logger.
    let env = env_logger::Env::default().filter_or(Env::LOG_ENV_VAR, Env::DEFAULT_LOG_FILTER);
    let mut builder = Builder::from_env(env);
    if let Some(level) = Env::log_level_override(cli.verbose) {
        builder.filter_level(level);
    }
    builder.init();

    if let Err(e) = run(&cli) {
        error!("{}: error processing array: {e:#}", Env::SYS_NAME);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_find_with_negative_numbers() {
        let cli = Cli::try_parse_from(["pairsum", "find", "--array", "10", "-8", "6", "-4"]).unwrap();
        match cli.task {
            Command::Find { array, file, .. } => {
                assert_eq!(array, vec!["10", "-8", "6", "-4"]);
                assert!(file.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_find_requires_a_source() {
        assert!(Cli::try_parse_from(["pairsum", "find"]).is_err());
        assert!(
            Cli::try_parse_from(["pairsum", "find", "--array", "1", "--file", "in.txt"]).is_err()
        );
    }

    #[test]
    fn test_parse_example_id_range() {
        assert!(Cli::try_parse_from(["pairsum", "example", "--id", "2"]).is_ok());
        assert!(Cli::try_parse_from(["pairsum", "example", "--id", "3"]).is_err());
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["pairsum", "example", "-v"]).unwrap();
        assert!(cli.verbose);
    }
}
