use crate::models::{Exercise, Program, ProgramSummary, Set};

/// Clamp a list cursor after moving it by `offset`.
pub(crate) fn shifted(selected: usize, offset: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let moved = selected as isize + offset;
    moved.clamp(0, len as isize - 1) as usize
}

/// Program picker shown at startup.
#[derive(Default)]
pub(crate) struct ProgramListScreen {
    pub(crate) programs: Vec<ProgramSummary>,
    pub(crate) selected: usize,
}

impl ProgramListScreen {
    pub(crate) fn new(programs: Vec<ProgramSummary>) -> Self {
        Self {
            programs,
            selected: 0,
        }
    }

    pub(crate) fn current(&self) -> Option<&ProgramSummary> {
        self.programs.get(self.selected)
    }

    pub(crate) fn move_selection(&mut self, offset: isize) {
        self.selected = shifted(self.selected, offset, self.programs.len());
    }

    /// Replace the list, keeping the cursor on `focus_id` when it survives.
    pub(crate) fn set_programs(&mut self, programs: Vec<ProgramSummary>, focus_id: Option<&str>) {
        self.programs = programs;
        if let Some(id) = focus_id {
            if let Some(idx) = self.programs.iter().position(|p| p.id == id) {
                self.selected = idx;
                return;
            }
        }
        self.selected = shifted(self.selected, 0, self.programs.len());
    }
}

/// Exercises of one program, each with its suggested next weight.
pub(crate) struct ProgramScreen {
    pub(crate) program: Program,
    pub(crate) suggestions: Vec<f64>,
    pub(crate) selected: usize,
}

impl ProgramScreen {
    pub(crate) fn new(program: Program, suggestions: Vec<f64>) -> Self {
        Self {
            program,
            suggestions,
            selected: 0,
        }
    }

    pub(crate) fn current_exercise(&self) -> Option<&Exercise> {
        self.program.exercises.get(self.selected)
    }

    pub(crate) fn move_selection(&mut self, offset: isize) {
        self.selected = shifted(self.selected, offset, self.program.exercises.len());
    }

    pub(crate) fn replace(&mut self, program: Program, suggestions: Vec<f64>, focus_id: Option<&str>) {
        let focus = focus_id
            .and_then(|id| program.exercises.iter().position(|exercise| exercise.id == id));
        self.program = program;
        self.suggestions = suggestions;
        self.selected = match focus {
            Some(idx) => idx,
            None => shifted(self.selected, 0, self.program.exercises.len()),
        };
    }
}

/// Set log of one exercise. The cursor starts on the most recent set.
pub(crate) struct ExerciseScreen {
    pub(crate) program_id: String,
    pub(crate) program_name: String,
    pub(crate) exercise: Exercise,
    pub(crate) suggested: f64,
    pub(crate) selected: usize,
}

impl ExerciseScreen {
    pub(crate) fn new(program: &Program, exercise: Exercise, suggested: f64) -> Self {
        let selected = exercise.sets.len().saturating_sub(1);
        Self {
            program_id: program.id.clone(),
            program_name: program.name.clone(),
            exercise,
            suggested,
            selected,
        }
    }

    pub(crate) fn current_set(&self) -> Option<&Set> {
        self.exercise.sets.get(self.selected)
    }

    pub(crate) fn move_selection(&mut self, offset: isize) {
        self.selected = shifted(self.selected, offset, self.exercise.sets.len());
    }

    /// Swap in fresh data. `focus_id` selects a specific set; otherwise the
    /// cursor jumps to the newest set when the log grew.
    pub(crate) fn replace(&mut self, exercise: Exercise, suggested: f64, focus_id: Option<&str>) {
        let grew = exercise.sets.len() > self.exercise.sets.len();
        let focus = focus_id.and_then(|id| exercise.set_position(id));
        self.exercise = exercise;
        self.suggested = suggested;
        let len = self.exercise.sets.len();
        self.selected = match focus {
            Some(idx) => idx,
            None if grew => len.saturating_sub(1),
            None => shifted(self.selected, 0, len),
        };
    }
}
