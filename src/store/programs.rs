use log::debug;

use super::WorkoutStore;
use crate::error::{Entity, Result, StoreError};
use crate::models::{Program, ProgramSummary};

impl WorkoutStore {
    /// Add an empty program and return its id.
    pub fn create_program(&mut self, name: &str) -> String {
        let program = Program::new(name);
        let program_id = program.id.clone();
        debug!("creating program {program_id} ({name})");
        self.programs.push(program);
        self.persist();
        program_id
    }

    pub fn rename_program(&mut self, program_id: &str, new_name: &str) -> Result<()> {
        let program = self.program_mut(program_id)?;
        program.name = new_name.to_string();
        debug!("renamed program {program_id} to {new_name}");
        self.persist();
        Ok(())
    }

    /// Remove a program together with all of its exercises and sets.
    pub fn delete_program(&mut self, program_id: &str) -> Result<()> {
        let idx = self
            .programs
            .iter()
            .position(|program| program.id == program_id)
            .ok_or_else(|| StoreError::not_found(Entity::Program, program_id))?;
        let removed = self.programs.remove(idx);
        debug!(
            "deleted program {program_id} with {} exercise(s)",
            removed.exercises.len()
        );
        self.persist();
        Ok(())
    }

    /// Every program's id and name, in creation order.
    pub fn list_programs(&self) -> Vec<ProgramSummary> {
        self.programs.iter().map(Program::summary).collect()
    }

    /// Full snapshot of one program, exercises and sets included.
    pub fn get_program(&self, program_id: &str) -> Result<Program> {
        self.program_ref(program_id).cloned()
    }
}
