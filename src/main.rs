use clap::Parser;
use log::{error, info};
use std::path::PathBuf;
use std::process;

use dataset_list::{generate_lists, Args};

fn main() {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let dataset_root = PathBuf::from(&args.dataset_root);
    if !dataset_root.exists() {
        error!(
            "The specified dataset_root does not exist: {}",
            args.dataset_root
        );
        process::exit(1);
    }

    info!("Generating dataset file lists...");

    if let Err(e) = generate_lists(&args, &dataset_root) {
        error!("Failed to generate file lists: {}", e);
        process::exit(1);
    }
}
