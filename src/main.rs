//! Binary entry point: resolve the data file, start logging, open the store,
//! and drive the Ratatui event loop until the user exits.
use anyhow::anyhow;
use clap::Parser;
use log::info;

use workout_tracker::config::{ensure_data_dir, log_file_for, Args};
use workout_tracker::logging::{init_logger, parse_level};
use workout_tracker::{run_app, App, WorkoutStore};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let level = parse_level(&args.log_level)
        .ok_or_else(|| anyhow!("unknown log level: {}", args.log_level))?;

    let data_file = args.resolve_data_file()?;
    ensure_data_dir(&data_file)?;
    init_logger(level, Some(&log_file_for(&data_file)));
    info!("using data file {}", data_file.display());

    let store = WorkoutStore::open(data_file);
    let mut app = App::new(store);
    run_app(&mut app)
}
