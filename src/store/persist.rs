use std::collections::HashMap;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, warn};

use crate::models::Program;

/// Read the data file into programs, keyed by id in file order.
///
/// Never fails: a missing file is an empty store, and anything unreadable or
/// unparsable is logged before falling back to empty.
pub(super) fn load_programs(path: &Path) -> Vec<Program> {
    if !path.exists() {
        debug!("no workout data at {}, starting empty", path.display());
        return Vec::new();
    }

    match read_programs(path) {
        Ok(programs) => index_by_id(programs),
        Err(err) => {
            warn!("ignoring unreadable workout data: {err:#}");
            Vec::new()
        }
    }
}

fn read_programs(path: &Path) -> Result<Vec<Program>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

/// Serialize every program and replace the data file.
///
/// The JSON goes to a sibling temp file first and is renamed over the
/// target, so an interrupted write leaves the previous file intact.
pub(super) fn save_programs(path: &Path, programs: &[Program]) -> Result<()> {
    let json = serde_json::to_string_pretty(programs).context("failed to serialize programs")?;
    let tmp = temp_path(path);
    fs::write(&tmp, json).with_context(|| format!("failed to write {}", tmp.display()))?;
    if let Err(err) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(err).with_context(|| format!("failed to replace {}", path.display()));
    }
    debug!("saved {} program(s) to {}", programs.len(), path.display());
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("workout_data.json"));
    name.push(".tmp");
    path.with_file_name(name)
}

/// Rebuild the id-keyed collections. A repeated id keeps the slot of its
/// first occurrence and the contents of its last.
fn index_by_id(programs: Vec<Program>) -> Vec<Program> {
    let mut programs = keep_last_by_id(programs, |program| program.id.clone());
    for program in &mut programs {
        let exercises = std::mem::take(&mut program.exercises);
        program.exercises = keep_last_by_id(exercises, |exercise| exercise.id.clone());
    }
    programs
}

fn keep_last_by_id<T>(items: Vec<T>, id_of: impl Fn(&T) -> String) -> Vec<T> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut kept: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        let id = id_of(&item);
        match positions.get(&id) {
            Some(&idx) => {
                warn!("duplicate id {id} in workout data, keeping the later entry");
                kept[idx] = item;
            }
            None => {
                positions.insert(id, kept.len());
                kept.push(item);
            }
        }
    }
    kept
}
