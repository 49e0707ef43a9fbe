use crate::env::Env;
use anyhow::{Result, bail};
use clap::Args;
use log::info;
use pairsum::{GroupConfig, Value, group_with_config};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::{fs::File, path::PathBuf, time::Instant};

#[derive(Debug, Args)]
pub struct UbenchRunArgs {
    /// Input sizes to benchmark
    #[arg(long, num_args = 1.., default_values_t = [100usize, 500, 1000, 2000])]
    pub sizes: Vec<usize>,
    #[arg(long, default_value = "3")]
    pub num_repeats: u32,
    #[arg(long, default_value = "1")]
    pub num_warmup_repeats: u32,
    /// Enumerate pairs in parallel
    #[arg(long)]
    pub parallel: bool,
    /// Random elements are drawn from [-value_range, value_range]
    #[arg(long, default_value = "1000")]
    pub value_range: Value,
    #[arg(long, default_value = "42")]
    pub seed: u64,
    /// Path of the CSV file to write results to
    #[arg(long, default_value = "ubench_results.csv")]
    pub out: PathBuf,
}

#[derive(Debug)]
pub struct Ubench {}

impl Ubench {
    pub fn random_input(size: usize, value_range: Value, rng: &mut StdRng) -> Vec<Value> {
        (0..size)
            .map(|_| rng.gen_range(-value_range..=value_range))
            .collect()
    }

    pub fn run(run_args: &UbenchRunArgs) -> Result<()> {
        if run_args.value_range < 0 {
            bail!(
                "{}(ubench): value range must be non-negative (got {})",
                Env::SYS_NAME,
                run_args.value_range
            );
        }

        let config = GroupConfig {
            parallel: run_args.parallel,
        };
        let mode = if config.parallel {
            "parallel"
        } else {
            "sequential"
        };
        let mut rng = StdRng::seed_from_u64(run_args.seed);

        let mut csv_file = csv::Writer::from_writer(File::create(&run_args.out)?);
        csv_file.write_record(["Size", "Run", "Mode", "ExecTimeMS", "QualifyingSums"])?;

        for size in &run_args.sizes {
            let values = Self::random_input(*size, run_args.value_range, &mut rng);

            for _ in 0..run_args.num_warmup_repeats {
                group_with_config(&values, config);
            }

            for run in 1..=run_args.num_repeats {
                let start = Instant::now();
                let groups = group_with_config(&values, config);
                let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

                csv_file.write_record([
                    size.to_string(),
                    run.to_string(),
                    mode.to_string(),
                    format!("{elapsed_ms:.3}"),
                    groups.len().to_string(),
                ])?;
                info!(
                    "{}(ubench): size: {size}, mode: {mode}, run: {run}, time: {elapsed_ms:.3} ms",
                    Env::SYS_NAME
                );
            }
        }

        csv_file.flush()?;
        info!(
            "{}(ubench): wrote results to {}",
            Env::SYS_NAME,
            run_args.out.display()
        );

        Ok(())
    }
}
