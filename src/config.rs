//! Command-line flags and data file location.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use directories::BaseDirs;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".workout-tracker";
/// JSON file name stored inside the application data directory.
const DATA_FILE_NAME: &str = "workout_data.json";
/// Log file written next to the data file while the TUI owns the terminal.
const LOG_FILE_NAME: &str = "workout-tracker.log";

#[derive(Parser, Debug)]
#[command(version, about = "Workout Tracker - strength programs and progressive overload", long_about = None)]
pub struct Args {
    /// JSON file holding every program, exercise and set.
    #[arg(long, env = "WORKOUT_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Log verbosity: off, error, warn, info, debug or trace.
    #[arg(long, env = "WORKOUT_LOG", default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// The explicit `--data-file` when given, otherwise the per-user default.
    pub fn resolve_data_file(&self) -> Result<PathBuf> {
        match &self.data_file {
            Some(path) => Ok(path.clone()),
            None => default_data_file(),
        }
    }
}

/// `~/.workout-tracker/workout_data.json`.
pub fn default_data_file() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs
        .home_dir()
        .join(DATA_DIR_NAME)
        .join(DATA_FILE_NAME))
}

/// Create the directory the data file lives in, if it has one.
pub fn ensure_data_dir(data_file: &Path) -> Result<()> {
    if let Some(parent) = data_file.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).context("failed to create data directory")?;
        }
    }
    Ok(())
}

pub fn log_file_for(data_file: &Path) -> PathBuf {
    data_file.with_file_name(LOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn explicit_data_file_wins() {
        let args = Args::try_parse_from(["workout-tracker", "--data-file", "/tmp/lifts.json"])
            .unwrap();
        assert_eq!(
            args.resolve_data_file().unwrap(),
            PathBuf::from("/tmp/lifts.json")
        );
    }

    #[test]
    fn log_level_flag_is_parsed() {
        let args = Args::try_parse_from(["workout-tracker", "--log-level", "debug"]).unwrap();
        assert_eq!(args.log_level, "debug");
    }

    #[test]
    fn default_data_file_lives_under_home() {
        if let Ok(path) = default_data_file() {
            assert!(path.ends_with(Path::new(DATA_DIR_NAME).join(DATA_FILE_NAME)));
        }
    }

    #[test]
    fn log_file_sits_beside_data_file() {
        let log = log_file_for(Path::new("/data/lifts.json"));
        assert_eq!(log, PathBuf::from("/data/workout-tracker.log"));
    }

    #[test]
    fn ensure_data_dir_creates_missing_parents() {
        let dir = TempDir::new().unwrap();
        let data_file = dir.path().join("nested").join("deeper").join(DATA_FILE_NAME);
        ensure_data_dir(&data_file).unwrap();
        assert!(data_file.parent().unwrap().is_dir());
    }

    #[test]
    fn bare_file_name_needs_no_directory() {
        ensure_data_dir(Path::new(DATA_FILE_NAME)).unwrap();
    }
}
