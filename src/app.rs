//! Application state and core logic

use crate::config::TuiConfig;
use crate::platform;
use crate::state::{AppState, FormButton, Step, Wizard, WizardEvent};
use crate::store::{FileStore, FormStore, SubmissionLog};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Main application struct
pub struct App<S: FormStore = FileStore> {
    /// Focus and status feedback
    pub state: AppState,
    /// Form controller owning values, step and errors
    pub wizard: Wizard<S>,
    /// Where accepted submissions are recorded, if enabled
    submissions: Option<SubmissionLog>,
    /// Whether the app should quit
    quit: bool,
}

impl App<FileStore> {
    /// Create a new App backed by the configured storage directory
    pub fn new(config: &TuiConfig) -> Self {
        let dir = config.storage_dir();
        tracing::debug!(dir = %dir.display(), "Using storage directory");

        let wizard = Wizard::start(FileStore::new(&dir), config.storage_key());
        let submissions = config
            .record_submissions()
            .then(|| SubmissionLog::in_dir(&dir));

        let mut app = Self::with_wizard(wizard, submissions);
        app.process_events();
        app
    }
}

impl<S: FormStore> App<S> {
    pub fn with_wizard(wizard: Wizard<S>, submissions: Option<SubmissionLog>) -> Self {
        Self {
            state: AppState::default(),
            wizard,
            submissions,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn step(&self) -> Step {
        self.wizard.step()
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Reset confirmation is modal
        if self.state.pending_reset {
            self.handle_reset_dialog_key(key);
            self.process_events();
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        self.handle_form_key(key)?;
        self.process_events();
        Ok(())
    }

    fn handle_reset_dialog_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                self.state.pending_reset = false;
                self.wizard.reset();
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.state.pending_reset = false;
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let step = self.step();
        let on_buttons = self.state.is_buttons_row_active(step);
        let command = platform::is_command(key.modifiers);

        match key.code {
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('n') if command => self.next_step(),
            KeyCode::Char('p') if command => self.prev_step(),
            KeyCode::Char('s') if command => self.submit()?,
            KeyCode::Char('r') if command => self.state.pending_reset = true,
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.next_form_field(step),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_form_field(step),
            // Button row navigation
            KeyCode::Left | KeyCode::Char('h') if on_buttons => self.state.prev_button(),
            KeyCode::Right | KeyCode::Char('l') if on_buttons => self.state.next_button(),
            KeyCode::Enter if on_buttons => self.press_button(self.state.selected_button(step))?,
            // Enter on a field moves on to the next stop
            KeyCode::Enter => self.state.next_form_field(step),
            // Form field input (only when not on the button row)
            KeyCode::Char(c) if !command => self.input_char(c),
            KeyCode::Backspace => self.backspace(),
            _ => {}
        }
        Ok(())
    }

    fn press_button(&mut self, button: FormButton) -> Result<()> {
        match button {
            FormButton::Prev => self.prev_step(),
            FormButton::Next => self.next_step(),
            FormButton::Submit => self.submit()?,
        }
        Ok(())
    }

    /// Prev is disabled on the first step and while a submit is running
    pub fn can_go_back(&self) -> bool {
        let state = self.wizard.state();
        !state.is_first_step() && !state.is_loading()
    }

    fn input_char(&mut self, c: char) {
        if let Some(field) = self.state.active_field(self.step()) {
            let mut value = self.wizard.values().get(field).to_string();
            value.push(c);
            self.wizard.set_value(field, value);
        }
    }

    fn backspace(&mut self) {
        if let Some(field) = self.state.active_field(self.step()) {
            let mut value = self.wizard.values().get(field).to_string();
            if value.pop().is_some() {
                self.wizard.set_value(field, value);
            }
        }
    }

    fn next_step(&mut self) {
        let step = self.step();
        if step.is_last() {
            return;
        }
        if let Err(errors) = self.wizard.advance() {
            if let Some(field) = errors.fields().next() {
                self.state.focus_field(step, field);
            }
        }
    }

    fn prev_step(&mut self) {
        if self.can_go_back() {
            self.wizard.retreat();
        }
    }

    fn submit(&mut self) -> Result<()> {
        if !self.step().is_last() {
            return Ok(());
        }
        match self.wizard.submit() {
            Ok(submission) => {
                if let Some(log) = &self.submissions {
                    if let Err(err) = log.append(&submission) {
                        tracing::warn!("Failed to record submission {}: {err:#}", submission.id);
                    }
                }
            }
            Err(err) => {
                tracing::debug!("Submit refused: {err}");
            }
        }
        Ok(())
    }

    /// Apply wizard notifications to the UI state
    pub fn process_events(&mut self) {
        for event in self.wizard.poll_events() {
            match event {
                WizardEvent::Hydrated => {
                    self.state.status_message = Some("Restored saved progress".to_string());
                }
                WizardEvent::StepChanged { .. } => self.state.reset_focus(),
                WizardEvent::Submitted(_) => {
                    self.state.status_message = Some("Form submitted".to_string());
                }
                WizardEvent::SubmitRejected => {
                    let first = self.wizard.errors().iter().next();
                    self.state.status_message = first.map(|(field, message)| {
                        format!("Cannot submit: {} - {message}", field.review_label())
                    });
                }
                WizardEvent::Reset => {
                    self.state.status_message = Some("Form cleared".to_string());
                }
                WizardEvent::ValueChanged(_) | WizardEvent::AdvanceBlocked(_) => {}
            }
        }
    }
}
