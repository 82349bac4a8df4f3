//! The workout store: every program, exercise and set, mirrored to one JSON
//! file. Operations are split by scope across the submodules; each one that
//! mutates state rewrites the whole file before returning.

mod exercises;
mod persist;
mod programs;
mod sets;

use std::path::{Path, PathBuf};

use log::{error, info};

use crate::error::{Entity, Result, StoreError};
use crate::models::{Exercise, Program};

/// Owner of all workout data. Construct once and hand `&mut` to callers.
#[derive(Debug)]
pub struct WorkoutStore {
    path: PathBuf,
    programs: Vec<Program>,
}

impl WorkoutStore {
    /// Open the store backed by `path`, loading whatever the file holds.
    ///
    /// A missing file starts an empty store. An unreadable or malformed file
    /// is logged and also starts empty; the next mutation overwrites it.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let programs = persist::load_programs(&path);
        info!(
            "opened workout store at {} with {} program(s)",
            path.display(),
            programs.len()
        );
        Self { path, programs }
    }

    /// Location of the backing data file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrite the data file with the current in-memory state.
    ///
    /// Write failures are logged and swallowed: memory keeps the mutation and
    /// the next successful save brings the file back in line.
    fn persist(&self) {
        if let Err(err) = persist::save_programs(&self.path, &self.programs) {
            error!("failed to save workout data: {err:#}");
        }
    }

    fn program_ref(&self, program_id: &str) -> Result<&Program> {
        self.programs
            .iter()
            .find(|program| program.id == program_id)
            .ok_or_else(|| StoreError::not_found(Entity::Program, program_id))
    }

    fn program_mut(&mut self, program_id: &str) -> Result<&mut Program> {
        self.programs
            .iter_mut()
            .find(|program| program.id == program_id)
            .ok_or_else(|| StoreError::not_found(Entity::Program, program_id))
    }

    fn exercise_ref(&self, program_id: &str, exercise_id: &str) -> Result<&Exercise> {
        self.program_ref(program_id)?
            .exercise(exercise_id)
            .ok_or_else(|| StoreError::not_found(Entity::Exercise, exercise_id))
    }

    fn exercise_mut(&mut self, program_id: &str, exercise_id: &str) -> Result<&mut Exercise> {
        self.program_mut(program_id)?
            .exercise_mut(exercise_id)
            .ok_or_else(|| StoreError::not_found(Entity::Exercise, exercise_id))
    }
}


#[cfg(test)]
mod tests {
    use std::fs;

    use super::test_support::temp_store;
    use super::*;

    #[test]
    fn missing_file_opens_empty_without_creating_it() {
        let (_dir, store) = temp_store();
        assert!(store.list_programs().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn malformed_file_opens_empty() {
        let (dir, _) = temp_store();
        let path = dir.path().join("workout_data.json");
        fs::write(&path, "[{\"id\": \"p1\", \"name\": \"Upper").unwrap();

        let store = WorkoutStore::open(&path);
        assert!(store.list_programs().is_empty());
    }

    #[test]
    fn wrong_shape_opens_empty() {
        let (dir, _) = temp_store();
        let path = dir.path().join("workout_data.json");
        fs::write(&path, r#"{"programs": []}"#).unwrap();

        let store = WorkoutStore::open(&path);
        assert!(store.list_programs().is_empty());
    }

    #[test]
    fn every_mutation_rewrites_the_file() {
        let (_dir, mut store) = temp_store();
        let program_id = store.create_program("Upper A");
        let on_disk = fs::read_to_string(store.path()).unwrap();
        assert!(on_disk.contains("Upper A"));

        store.rename_program(&program_id, "Upper B").unwrap();
        let on_disk = fs::read_to_string(store.path()).unwrap();
        assert!(on_disk.contains("Upper B"));
        assert!(!on_disk.contains("Upper A"));
    }

    #[test]
    fn failed_write_keeps_in_memory_mutation() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing-dir").join("workout_data.json");
        let mut store = WorkoutStore::open(&path);

        let program_id = store.create_program("Upper A");
        assert!(!path.exists());
        assert_eq!(store.get_program(&program_id).unwrap().name, "Upper A");
    }
}
