use std::mem;

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::error::{Entity, StoreError};
use crate::models::{Exercise, Program};
use crate::store::WorkoutStore;

use super::forms::{
    apply_form_key, field_line, ConfirmDelete, DeleteTarget, ExerciseForm, FormEvent, FormInput,
    NameForm, SetField, SetForm, REP_CHOICES,
};
use super::helpers::{
    centered_rect, exercise_line, form_cursor, format_weight, set_line, surface_error,
};
use super::screens::{ExerciseScreen, ProgramListScreen, ProgramScreen};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Rows moved by PageUp/PageDown.
const PAGE: isize = 5;

/// High-level navigation states: programs, one program, one exercise.
enum Screen {
    Programs,
    Program(ProgramScreen),
    Exercise(ExerciseScreen),
}

/// Popup or confirmation currently capturing keys.
enum Mode {
    Normal,
    CreatingProgram(NameForm),
    RenamingProgram {
        program_id: String,
        form: NameForm,
    },
    AddingExercise {
        program_id: String,
        form: ExerciseForm,
    },
    RenamingExercise {
        program_id: String,
        exercise_id: String,
        form: NameForm,
    },
    EditingRepRange {
        program_id: String,
        exercise_id: String,
        form: ExerciseForm,
    },
    LoggingSet {
        program_id: String,
        exercise_id: String,
        form: SetForm,
    },
    EditingSet {
        program_id: String,
        exercise_id: String,
        set_id: String,
        form: SetForm,
    },
    ConfirmDelete(ConfirmDelete),
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state shared across the TUI. Owns the store; every
/// read and write goes through its public operations.
pub struct App {
    store: WorkoutStore,
    programs: ProgramListScreen,
    screen: Screen,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(store: WorkoutStore) -> Self {
        let programs = ProgramListScreen::new(store.list_programs());
        Self {
            store,
            programs,
            screen: Screen::Programs,
            mode: Mode::Normal,
            status: None,
        }
    }

    /// Feed one key press through the current mode. Returns true once the user
    /// asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit),
            Mode::CreatingProgram(form) => self.drive_form(
                code,
                form,
                "New program cancelled.",
                |app, form| app.save_new_program(form),
                Mode::CreatingProgram,
            ),
            Mode::RenamingProgram { program_id, form } => {
                let reopen_id = program_id.clone();
                self.drive_form(
                    code,
                    form,
                    "Rename cancelled.",
                    |app, form| app.save_program_name(&program_id, form),
                    move |form| Mode::RenamingProgram {
                        program_id: reopen_id,
                        form,
                    },
                )
            }
            Mode::AddingExercise { program_id, form } => {
                let reopen_id = program_id.clone();
                self.drive_form(
                    code,
                    form,
                    "Add exercise cancelled.",
                    |app, form| app.save_new_exercise(&program_id, form),
                    move |form| Mode::AddingExercise {
                        program_id: reopen_id,
                        form,
                    },
                )
            }
            Mode::RenamingExercise {
                program_id,
                exercise_id,
                form,
            } => {
                let reopen = (program_id.clone(), exercise_id.clone());
                self.drive_form(
                    code,
                    form,
                    "Rename cancelled.",
                    |app, form| app.save_exercise_name(&program_id, &exercise_id, form),
                    move |form| Mode::RenamingExercise {
                        program_id: reopen.0,
                        exercise_id: reopen.1,
                        form,
                    },
                )
            }
            Mode::EditingRepRange {
                program_id,
                exercise_id,
                form,
            } => {
                let reopen = (program_id.clone(), exercise_id.clone());
                self.drive_form(
                    code,
                    form,
                    "Rep range unchanged.",
                    |app, form| app.save_rep_range(&program_id, &exercise_id, form),
                    move |form| Mode::EditingRepRange {
                        program_id: reopen.0,
                        exercise_id: reopen.1,
                        form,
                    },
                )
            }
            Mode::LoggingSet {
                program_id,
                exercise_id,
                form,
            } => {
                let reopen = (program_id.clone(), exercise_id.clone());
                self.drive_form(
                    code,
                    form,
                    "Set not logged.",
                    |app, form| app.save_new_set(&program_id, &exercise_id, form),
                    move |form| Mode::LoggingSet {
                        program_id: reopen.0,
                        exercise_id: reopen.1,
                        form,
                    },
                )
            }
            Mode::EditingSet {
                program_id,
                exercise_id,
                set_id,
                form,
            } => {
                let reopen = (program_id.clone(), exercise_id.clone(), set_id.clone());
                self.drive_form(
                    code,
                    form,
                    "Edit cancelled.",
                    |app, form| app.save_set_edit(&program_id, &exercise_id, &set_id, form),
                    move |form| Mode::EditingSet {
                        program_id: reopen.0,
                        exercise_id: reopen.1,
                        set_id: reopen.2,
                        form,
                    },
                )
            }
            Mode::ConfirmDelete(confirm) => self.handle_confirm_delete(code, confirm),
        };

        Ok(exit)
    }

    /// Apply a key to a popup form. Submitting runs `save`; a failure keeps
    /// the form open with the error shown inline and in the footer.
    fn drive_form<F, S, R>(
        &mut self,
        code: KeyCode,
        mut form: F,
        cancelled: &str,
        save: S,
        reopen: R,
    ) -> Mode
    where
        F: FormInput,
        S: FnOnce(&mut Self, &F) -> Result<()>,
        R: FnOnce(F) -> Mode,
    {
        match apply_form_key(&mut form, code) {
            FormEvent::Cancel => {
                self.set_status(cancelled, StatusKind::Info);
                Mode::Normal
            }
            FormEvent::Submit => match save(self, &form) {
                Ok(()) => Mode::Normal,
                Err(err) => {
                    let message = surface_error(&err);
                    form.set_error(Some(message.clone()));
                    self.set_status(message, StatusKind::Error);
                    reopen(form)
                }
            },
            FormEvent::Edited | FormEvent::Unchanged => reopen(form),
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Mode {
        let outcome = match self.screen {
            Screen::Programs => self.handle_programs_key(code, exit),
            Screen::Program(_) => self.handle_program_key(code, exit),
            Screen::Exercise(_) => self.handle_exercise_key(code, exit),
        };
        match outcome {
            Ok(mode) => mode,
            Err(err) => {
                self.set_status(surface_error(&err), StatusKind::Error);
                Mode::Normal
            }
        }
    }

    fn handle_programs_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => *exit = true,
            KeyCode::Up => self.programs.move_selection(-1),
            KeyCode::Down => self.programs.move_selection(1),
            KeyCode::PageUp => self.programs.move_selection(-PAGE),
            KeyCode::PageDown => self.programs.move_selection(PAGE),
            KeyCode::Home => self.programs.selected = 0,
            KeyCode::End => self.programs.move_selection(isize::MAX / 2),
            KeyCode::Enter => match self.programs.current().cloned() {
                Some(program) => {
                    self.clear_status();
                    self.open_program(&program.id, None)?;
                }
                None => self.set_status("No program selected.", StatusKind::Error),
            },
            KeyCode::Char('+') => {
                self.clear_status();
                return Ok(Mode::CreatingProgram(NameForm::default()));
            }
            KeyCode::Char('e') | KeyCode::Char('E') => match self.programs.current() {
                Some(program) => {
                    let mode = Mode::RenamingProgram {
                        program_id: program.id.clone(),
                        form: NameForm::with_name(&program.name),
                    };
                    self.clear_status();
                    return Ok(mode);
                }
                None => self.set_status("No program selected to rename.", StatusKind::Error),
            },
            KeyCode::Char('-') => match self.programs.current() {
                Some(program) => {
                    let confirm = ConfirmDelete {
                        target: DeleteTarget::Program {
                            program_id: program.id.clone(),
                        },
                        label: format!("program \"{}\"", program.name),
                        detail: "All of its exercises and logged sets go with it.",
                    };
                    self.clear_status();
                    return Ok(Mode::ConfirmDelete(confirm));
                }
                None => self.set_status("No program selected to delete.", StatusKind::Error),
            },
            _ => {}
        }
        Ok(Mode::Normal)
    }

    fn handle_program_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        let Screen::Program(view) = &mut self.screen else {
            return Ok(Mode::Normal);
        };
        let program_id = view.program.id.clone();
        match code {
            KeyCode::Char('q') => *exit = true,
            KeyCode::Esc => {
                self.clear_status();
                self.show_programs(Some(&program_id));
            }
            KeyCode::Up => view.move_selection(-1),
            KeyCode::Down => view.move_selection(1),
            KeyCode::PageUp => view.move_selection(-PAGE),
            KeyCode::PageDown => view.move_selection(PAGE),
            KeyCode::Home => view.selected = 0,
            KeyCode::End => view.move_selection(isize::MAX / 2),
            KeyCode::Enter => match view.current_exercise().map(|e| e.id.clone()) {
                Some(exercise_id) => {
                    self.clear_status();
                    self.open_exercise(&program_id, &exercise_id)?;
                }
                None => self.set_status("No exercise selected.", StatusKind::Error),
            },
            KeyCode::Char('+') => {
                self.clear_status();
                return Ok(Mode::AddingExercise {
                    program_id,
                    form: ExerciseForm::new_exercise(),
                });
            }
            KeyCode::Char('e') | KeyCode::Char('E') => match view.current_exercise() {
                Some(exercise) => {
                    let mode = Mode::RenamingExercise {
                        program_id,
                        exercise_id: exercise.id.clone(),
                        form: NameForm::with_name(&exercise.name),
                    };
                    self.clear_status();
                    return Ok(mode);
                }
                None => self.set_status("No exercise selected to rename.", StatusKind::Error),
            },
            KeyCode::Char('r') | KeyCode::Char('R') => match view.current_exercise() {
                Some(exercise) => {
                    let mode = rep_range_mode(&program_id, exercise);
                    self.clear_status();
                    return Ok(mode);
                }
                None => self.set_status("No exercise selected.", StatusKind::Error),
            },
            KeyCode::Char('-') => match view.current_exercise() {
                Some(exercise) => {
                    let confirm = ConfirmDelete {
                        target: DeleteTarget::Exercise {
                            program_id,
                            exercise_id: exercise.id.clone(),
                        },
                        label: format!("exercise {exercise}"),
                        detail: "Its logged sets go with it.",
                    };
                    self.clear_status();
                    return Ok(Mode::ConfirmDelete(confirm));
                }
                None => self.set_status("No exercise selected to remove.", StatusKind::Error),
            },
            _ => {}
        }
        Ok(Mode::Normal)
    }

    fn handle_exercise_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        let Screen::Exercise(view) = &mut self.screen else {
            return Ok(Mode::Normal);
        };
        let program_id = view.program_id.clone();
        let exercise_id = view.exercise.id.clone();
        match code {
            KeyCode::Char('q') => *exit = true,
            KeyCode::Esc => {
                self.clear_status();
                self.open_program(&program_id, Some(&exercise_id))?;
            }
            KeyCode::Up => view.move_selection(-1),
            KeyCode::Down => view.move_selection(1),
            KeyCode::PageUp => view.move_selection(-PAGE),
            KeyCode::PageDown => view.move_selection(PAGE),
            KeyCode::Home => view.selected = 0,
            KeyCode::End => view.move_selection(isize::MAX / 2),
            KeyCode::Char('+') | KeyCode::Enter => {
                let form = SetForm::with_suggestion(view.suggested);
                self.clear_status();
                return Ok(Mode::LoggingSet {
                    program_id,
                    exercise_id,
                    form,
                });
            }
            KeyCode::Char('e') | KeyCode::Char('E') => match view.current_set() {
                Some(set) => {
                    let mode = Mode::EditingSet {
                        program_id,
                        exercise_id,
                        set_id: set.id.clone(),
                        form: SetForm::from_set(set),
                    };
                    self.clear_status();
                    return Ok(mode);
                }
                None => self.set_status("No set selected to edit.", StatusKind::Error),
            },
            KeyCode::Char('r') | KeyCode::Char('R') => {
                let mode = rep_range_mode(&program_id, &view.exercise);
                self.clear_status();
                return Ok(mode);
            }
            KeyCode::Char('-') => match view.current_set() {
                Some(set) => {
                    let confirm = ConfirmDelete {
                        target: DeleteTarget::Set {
                            program_id,
                            exercise_id,
                            set_id: set.id.clone(),
                        },
                        label: format!("set {}", set_line(view.selected, set)),
                        detail: "The remaining sets keep their order.",
                    };
                    self.clear_status();
                    return Ok(Mode::ConfirmDelete(confirm));
                }
                None => self.set_status("No set selected to delete.", StatusKind::Error),
            },
            _ => {}
        }
        Ok(Mode::Normal)
    }

    fn handle_confirm_delete(&mut self, code: KeyCode, confirm: ConfirmDelete) -> Mode {
        match code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.set_status("Deletion cancelled.", StatusKind::Info);
                Mode::Normal
            }
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                match self.perform_delete(&confirm) {
                    Ok(()) => Mode::Normal,
                    Err(err) => {
                        self.set_status(surface_error(&err), StatusKind::Error);
                        Mode::ConfirmDelete(confirm)
                    }
                }
            }
            _ => Mode::ConfirmDelete(confirm),
        }
    }

    fn save_new_program(&mut self, form: &NameForm) -> Result<()> {
        let name = form.parse_name()?;
        let program_id = self.store.create_program(&name);
        self.reload_programs(Some(&program_id));
        self.set_status(format!("Created program {name}."), StatusKind::Info);
        Ok(())
    }

    fn save_program_name(&mut self, program_id: &str, form: &NameForm) -> Result<()> {
        let name = form.parse_name()?;
        self.store.rename_program(program_id, &name)?;
        self.reload_programs(Some(program_id));
        self.set_status(format!("Renamed program to {name}."), StatusKind::Info);
        Ok(())
    }

    fn save_new_exercise(&mut self, program_id: &str, form: &ExerciseForm) -> Result<()> {
        let (name, rep_min, rep_max) = form.parse_inputs()?;
        let exercise_id = self
            .store
            .add_exercise(program_id, &name, rep_min, rep_max)?;
        self.refresh_program_screen(Some(&exercise_id))?;
        self.set_status(
            format!("Added {name} ({rep_min}-{rep_max} reps)."),
            StatusKind::Info,
        );
        Ok(())
    }

    fn save_exercise_name(
        &mut self,
        program_id: &str,
        exercise_id: &str,
        form: &NameForm,
    ) -> Result<()> {
        let name = form.parse_name()?;
        self.store.rename_exercise(program_id, exercise_id, &name)?;
        self.refresh_program_screen(Some(exercise_id))?;
        self.refresh_exercise_screen(None)?;
        self.set_status(format!("Renamed exercise to {name}."), StatusKind::Info);
        Ok(())
    }

    fn save_rep_range(
        &mut self,
        program_id: &str,
        exercise_id: &str,
        form: &ExerciseForm,
    ) -> Result<()> {
        let (_, rep_min, rep_max) = form.parse_inputs()?;
        self.store
            .set_exercise_rep_range(program_id, exercise_id, rep_min, rep_max)?;
        self.refresh_program_screen(Some(exercise_id))?;
        self.refresh_exercise_screen(None)?;
        self.set_status(
            format!("Rep range set to {rep_min}-{rep_max}."),
            StatusKind::Info,
        );
        Ok(())
    }

    fn save_new_set(&mut self, program_id: &str, exercise_id: &str, form: &SetForm) -> Result<()> {
        let (weight, reps) = form.parse_inputs()?;
        let set_id = self.store.add_set(program_id, exercise_id, weight, reps)?;
        self.refresh_exercise_screen(Some(&set_id))?;
        let next = self.store.get_suggested_weight(program_id, exercise_id)?;
        self.set_status(
            format!(
                "Logged {} lbs x {reps}. Next: {} lbs.",
                format_weight(weight),
                format_weight(next)
            ),
            StatusKind::Info,
        );
        Ok(())
    }

    fn save_set_edit(
        &mut self,
        program_id: &str,
        exercise_id: &str,
        set_id: &str,
        form: &SetForm,
    ) -> Result<()> {
        let (weight, reps) = form.parse_inputs()?;
        self.store
            .edit_set(program_id, exercise_id, set_id, weight, reps)?;
        self.refresh_exercise_screen(Some(set_id))?;
        self.set_status("Set updated.", StatusKind::Info);
        Ok(())
    }

    fn perform_delete(&mut self, confirm: &ConfirmDelete) -> Result<()> {
        match &confirm.target {
            DeleteTarget::Program { program_id } => {
                self.store.delete_program(program_id)?;
                self.show_programs(None);
            }
            DeleteTarget::Exercise {
                program_id,
                exercise_id,
            } => {
                self.store.remove_exercise(program_id, exercise_id)?;
                self.open_program(program_id, None)?;
            }
            DeleteTarget::Set {
                program_id,
                exercise_id,
                set_id,
            } => {
                self.store.remove_set(program_id, exercise_id, set_id)?;
                self.refresh_exercise_screen(None)?;
            }
        }
        self.set_status(format!("Deleted {}.", confirm.label), StatusKind::Info);
        Ok(())
    }

    fn reload_programs(&mut self, focus_id: Option<&str>) {
        let programs = self.store.list_programs();
        self.programs.set_programs(programs, focus_id);
    }

    fn show_programs(&mut self, focus_id: Option<&str>) {
        self.reload_programs(focus_id);
        self.screen = Screen::Programs;
    }

    /// Program snapshot plus the suggested next weight of each exercise.
    fn load_program(&self, program_id: &str) -> Result<(Program, Vec<f64>)> {
        let program = self.store.get_program(program_id)?;
        let suggestions = program
            .exercises
            .iter()
            .map(|exercise| self.store.get_suggested_weight(program_id, &exercise.id))
            .collect::<Result<Vec<_>, _>>()?;
        Ok((program, suggestions))
    }

    fn load_exercise(&self, program_id: &str, exercise_id: &str) -> Result<(Program, Exercise, f64)> {
        let program = self.store.get_program(program_id)?;
        let exercise = self
            .store
            .list_exercises(program_id)?
            .into_iter()
            .find(|exercise| exercise.id == exercise_id)
            .ok_or_else(|| StoreError::not_found(Entity::Exercise, exercise_id))?;
        let suggested = self.store.get_suggested_weight(program_id, exercise_id)?;
        Ok((program, exercise, suggested))
    }

    fn open_program(&mut self, program_id: &str, focus_id: Option<&str>) -> Result<()> {
        let (program, suggestions) = self.load_program(program_id)?;
        let mut view = ProgramScreen::new(program, suggestions);
        if let Some(id) = focus_id {
            if let Some(idx) = view.program.exercises.iter().position(|e| e.id == id) {
                view.selected = idx;
            }
        }
        self.screen = Screen::Program(view);
        Ok(())
    }

    fn open_exercise(&mut self, program_id: &str, exercise_id: &str) -> Result<()> {
        let (program, exercise, suggested) = self.load_exercise(program_id, exercise_id)?;
        self.screen = Screen::Exercise(ExerciseScreen::new(&program, exercise, suggested));
        Ok(())
    }

    fn refresh_program_screen(&mut self, focus_id: Option<&str>) -> Result<()> {
        let Screen::Program(view) = &self.screen else {
            return Ok(());
        };
        let program_id = view.program.id.clone();
        let (program, suggestions) = self.load_program(&program_id)?;
        if let Screen::Program(view) = &mut self.screen {
            view.replace(program, suggestions, focus_id);
        }
        Ok(())
    }

    fn refresh_exercise_screen(&mut self, focus_id: Option<&str>) -> Result<()> {
        let Screen::Exercise(view) = &self.screen else {
            return Ok(());
        };
        let program_id = view.program_id.clone();
        let exercise_id = view.exercise.id.clone();
        let (_, exercise, suggested) = self.load_exercise(&program_id, &exercise_id)?;
        if let Screen::Exercise(view) = &mut self.screen {
            view.replace(exercise, suggested, focus_id);
        }
        Ok(())
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        match &self.screen {
            Screen::Programs => self.draw_program_list(frame, content_area),
            Screen::Program(view) => self.draw_program_view(frame, content_area, view),
            Screen::Exercise(view) => self.draw_exercise_view(frame, content_area, view),
        }

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }

        match &self.mode {
            Mode::CreatingProgram(form) => self.draw_name_form(frame, area, "New Program", form),
            Mode::RenamingProgram { form, .. } => {
                self.draw_name_form(frame, area, "Rename Program", form)
            }
            Mode::AddingExercise { form, .. } => {
                self.draw_exercise_form(frame, area, "Add Exercise", form)
            }
            Mode::RenamingExercise { form, .. } => {
                self.draw_name_form(frame, area, "Rename Exercise", form)
            }
            Mode::EditingRepRange { form, .. } => {
                let title = format!("Rep Range: {}", form.name);
                self.draw_exercise_form(frame, area, &title, form)
            }
            Mode::LoggingSet { form, .. } => self.draw_set_form(frame, area, "Log Set", form),
            Mode::EditingSet { form, .. } => self.draw_set_form(frame, area, "Edit Set", form),
            Mode::ConfirmDelete(confirm) => self.draw_confirm_delete(frame, area, confirm),
            Mode::Normal => {}
        }
    }

    fn draw_program_list(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<String> = self
            .programs
            .programs
            .iter()
            .map(|program| program.name.clone())
            .collect();
        render_list(
            frame,
            area,
            "Programs",
            items,
            self.programs.selected,
            "No programs yet. Press '+' to create one.",
        );
    }

    fn draw_program_view(&self, frame: &mut Frame, area: Rect, view: &ProgramScreen) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(1)])
            .split(area);

        let count = view.program.exercises.len();
        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                view.program.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::raw(match count {
                1 => "1 exercise".to_string(),
                n => format!("{n} exercises"),
            })),
        ])
        .block(Block::default().borders(Borders::ALL).title("Program"));
        frame.render_widget(header, chunks[0]);

        let items: Vec<String> = view
            .program
            .exercises
            .iter()
            .enumerate()
            .map(|(idx, exercise)| {
                exercise_line(exercise, view.suggestions.get(idx).copied().unwrap_or(0.0))
            })
            .collect();
        render_list(
            frame,
            chunks[1],
            "Exercises",
            items,
            view.selected,
            "No exercises yet. Press '+' to add one.",
        );
    }

    fn draw_exercise_view(&self, frame: &mut Frame, area: Rect, view: &ExerciseScreen) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(1)])
            .split(area);

        let exercise = &view.exercise;
        let header = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(
                    exercise.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("  •  {}", view.program_name)),
            ]),
            Line::from(format!(
                "Rep range: {}-{}",
                exercise.rep_min, exercise.rep_max
            )),
            Line::from(vec![
                Span::raw("Suggested next weight: "),
                Span::styled(
                    format!("{} lbs", format_weight(view.suggested)),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ])
        .block(Block::default().borders(Borders::ALL).title("Exercise"));
        frame.render_widget(header, chunks[0]);

        let items: Vec<String> = exercise
            .sets
            .iter()
            .enumerate()
            .map(|(idx, set)| set_line(idx, set))
            .collect();
        render_list(
            frame,
            chunks[1],
            "Sets",
            items,
            view.selected,
            "No sets recorded yet. Press '+' to log one.",
        );
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let hints: &[(&str, &str)] = match (&self.screen, &self.mode) {
            (_, Mode::ConfirmDelete(_)) => &[("[Y]", "Delete"), ("[N/Esc]", "Cancel")],
            (_, Mode::Normal) => match self.screen {
                Screen::Programs => &[
                    ("[↑↓]", "Navigate"),
                    ("[Enter]", "Open"),
                    ("[+]", "New"),
                    ("[E]", "Rename"),
                    ("[-]", "Delete"),
                    ("[Q]", "Quit"),
                ],
                Screen::Program(_) => &[
                    ("[↑↓]", "Navigate"),
                    ("[Enter]", "Open"),
                    ("[+]", "Add"),
                    ("[E]", "Rename"),
                    ("[R]", "Rep range"),
                    ("[-]", "Remove"),
                    ("[Esc]", "Back"),
                ],
                Screen::Exercise(_) => &[
                    ("[↑↓]", "Navigate"),
                    ("[+]", "Log set"),
                    ("[E]", "Edit set"),
                    ("[-]", "Delete set"),
                    ("[R]", "Rep range"),
                    ("[Esc]", "Back"),
                ],
            },
            _ => &[("[Enter]", "Save"), ("[Tab]", "Next field"), ("[Esc]", "Cancel")],
        };

        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let mut spans = Vec::with_capacity(hints.len() * 2);
        for (key, action) in hints {
            spans.push(Span::styled(key.to_string(), key_style));
            spans.push(Span::raw(format!(" {action}   ")));
        }
        Line::from(spans)
    }

    fn draw_name_form(&self, frame: &mut Frame, area: Rect, title: &str, form: &NameForm) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title(title.to_string()).borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let lines = vec![
            field_line("Name", &form.name, true),
            Line::from(""),
            form_hint(&form.error, "Enter to save • Esc to cancel"),
        ];
        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        frame.set_cursor_position(form_cursor(inner, "Name: ", &form.name, 0));
    }

    fn draw_exercise_form(&self, frame: &mut Frame, area: Rect, title: &str, form: &ExerciseForm) {
        let popup_area = centered_rect(60, 40, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title(title.to_string()).borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let fields = form.fields();
        let mut lines: Vec<Line<'static>> = fields
            .iter()
            .map(|&field| {
                field_line(
                    ExerciseForm::label(field),
                    form.value(field),
                    form.active == field,
                )
            })
            .collect();
        lines.push(Line::from(Span::styled(
            format!(
                "Reps {}-{}; an inverted range is swapped.",
                REP_CHOICES.start(),
                REP_CHOICES.end()
            ),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
        lines.push(form_hint(
            &form.error,
            "Enter to save • Tab to switch • Esc to cancel",
        ));

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let row = fields
            .iter()
            .position(|&field| field == form.active)
            .unwrap_or(0);
        let prefix = format!("{}: ", ExerciseForm::label(form.active));
        frame.set_cursor_position(form_cursor(inner, &prefix, form.value(form.active), row));
    }

    fn draw_set_form(&self, frame: &mut Frame, area: Rect, title: &str, form: &SetForm) {
        let popup_area = centered_rect(50, 35, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title(title.to_string()).borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let lines = vec![
            field_line(
                "Weight (lbs)",
                form.value(SetField::Weight),
                form.active == SetField::Weight,
            ),
            field_line("Reps", form.value(SetField::Reps), form.active == SetField::Reps),
            Line::from(""),
            form_hint(&form.error, "Enter to save • Tab to switch • Esc to cancel"),
        ];
        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let (prefix, row) = match form.active {
            SetField::Weight => ("Weight (lbs): ", 0),
            SetField::Reps => ("Reps: ", 1),
        };
        frame.set_cursor_position(form_cursor(inner, prefix, form.value(form.active), row));
    }

    fn draw_confirm_delete(&self, frame: &mut Frame, area: Rect, confirm: &ConfirmDelete) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title("Confirm Removal")
            .borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let lines = vec![
            Line::from(format!("Delete {}?", confirm.label)),
            Line::from(confirm.detail),
            Line::from(""),
            Line::from(Span::styled(
                "Press Y to confirm or N / Esc to cancel.",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }
}

fn rep_range_mode(program_id: &str, exercise: &Exercise) -> Mode {
    Mode::EditingRepRange {
        program_id: program_id.to_string(),
        exercise_id: exercise.id.clone(),
        form: ExerciseForm::rep_range_of(exercise),
    }
}

/// Inline error when present, otherwise the key hint.
fn form_hint(error: &Option<String>, hint: &'static str) -> Line<'static> {
    match error {
        Some(error) => Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(Span::styled(hint, Style::default().fg(Color::Gray))),
    }
}

/// Bordered list with a highlighted cursor, or a centered hint when empty.
fn render_list(
    frame: &mut Frame,
    area: Rect,
    title: &'static str,
    items: Vec<String>,
    selected: usize,
    empty_message: &'static str,
) {
    let block = Block::default().borders(Borders::ALL).title(title);
    if items.is_empty() {
        let message = Paragraph::new(empty_message)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(message, area);
        return;
    }

    let list = List::new(items.into_iter().map(ListItem::new).collect::<Vec<_>>())
        .block(block)
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}
