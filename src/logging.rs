use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use log::LevelFilter;

/// Map a level name from the command line onto a filter.
pub fn parse_level(level: &str) -> Option<LevelFilter> {
    let lvl = match level.trim().to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" | "warning" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => return None,
    };
    Some(lvl)
}

/// Install the global logger.
///
/// With a `log_file`, records are appended there; if it cannot be opened they
/// are dropped so nothing lands on the terminal UI. Without one they go to
/// stderr. Calling this twice keeps the first logger.
pub fn init_logger(level: LevelFilter, log_file: Option<&Path>) {
    let mut builder = env_logger::Builder::new();
    builder
        .format(move |buf, record| {
            writeln!(
                buf,
                "{} {}: {} - {}",
                buf.timestamp_seconds(),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .filter_level(level);

    match log_file {
        Some(path) => {
            builder.target(env_logger::Target::Pipe(log_writer(path)));
        }
        None => {
            builder.target(env_logger::Target::Stderr);
        }
    }

    let _ = builder.try_init();

    log::set_max_level(level);
}

fn log_writer(path: &Path) -> Box<dyn Write + Send> {
    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => Box::new(file),
        Err(_) => Box::new(io::sink()),
    }
}
