use anyhow::Result;
use clap::Parser as ClapParser;
use kbench::config::BenchConfig;
use kbench::generator::InstanceGenerator;
use kbench::io::cli::Cli;
use kbench::io::output::BenchOutput;
use kbench::{harness, io};
use knapsack_rs::solvers::{ExactSolver, GreedySolver};
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let mut config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            BenchConfig::default()
        }
        Some(config_file) => io::read_json(&config_file)?,
    };
    if let Some(seed) = args.seed {
        config.prng_seed = Some(seed);
    }
    if let Some(n_test_cases) = args.n_test_cases {
        config.n_test_cases = n_test_cases;
    }

    info!("[MAIN] Successfully parsed BenchConfig: {config:?}");

    let rng = match config.prng_seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => {
            warn!("[MAIN] No seed provided, generating instances from entropy");
            SmallRng::from_os_rng()
        }
    };
    let mut generator = InstanceGenerator::new(config.generator, rng);

    let exact = harness::run(
        &ExactSolver::new(config.dp_storage),
        &mut generator,
        config.n_test_cases,
        config.exact_harder_for_greedy,
    )?;
    let greedy = harness::run(
        &GreedySolver::new(config.zero_weight_policy),
        &mut generator,
        config.n_test_cases,
        config.greedy_harder_for_greedy,
    )?;

    let output = BenchOutput::new(config, exact, greedy);
    io::write_report(&output, &args.output_folder)
}
