use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(short, long, value_name = "FOLDER")]
    pub output_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Overrides the seed of the config
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// Overrides the number of test cases of the config
    #[arg(short, long)]
    pub n_test_cases: Option<usize>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
