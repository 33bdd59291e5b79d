//! Application state definitions

use super::forms::{Field, Step};

/// Buttons on the form's action row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormButton {
    Prev,
    Next,
    Submit,
}

impl FormButton {
    pub fn label(&self) -> &'static str {
        match self {
            FormButton::Prev => "Prev",
            FormButton::Next => "Next",
            FormButton::Submit => "Submit",
        }
    }

    /// Buttons shown on a step, left to right
    pub fn row_for(step: Step) -> [FormButton; 2] {
        if step.is_last() {
            [FormButton::Prev, FormButton::Submit]
        } else {
            [FormButton::Prev, FormButton::Next]
        }
    }
}

/// Keyboard focus within the current step plus transient UI feedback
#[derive(Debug, Clone)]
pub struct AppState {
    /// Index into the step's fields; one past the last field is the button row
    pub active_form_field: usize,
    /// Which button is selected when on the button row (0=Prev, 1=Next/Submit)
    pub form_selected_button: usize,
    /// Feedback shown in the status bar until the next key press
    pub status_message: Option<String>,
    /// Clear-form confirmation dialog is open
    pub pending_reset: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            active_form_field: 0,
            form_selected_button: 1,
            status_message: None,
            pending_reset: false,
        }
    }
}

impl AppState {
    /// Number of focus stops on a step: its fields plus the button row
    pub fn form_field_count(step: Step) -> usize {
        step.fields().len() + 1
    }

    /// Move to next form field
    pub fn next_form_field(&mut self, step: Step) {
        self.active_form_field = (self.active_form_field + 1) % Self::form_field_count(step);
    }

    /// Move to previous form field
    pub fn prev_form_field(&mut self, step: Step) {
        if self.active_form_field == 0 {
            self.active_form_field = Self::form_field_count(step) - 1;
        } else {
            self.active_form_field -= 1;
        }
    }

    /// Field under the cursor, `None` when the button row is focused
    pub fn active_field(&self, step: Step) -> Option<Field> {
        step.fields().get(self.active_form_field).copied()
    }

    pub fn is_buttons_row_active(&self, step: Step) -> bool {
        self.active_form_field >= step.fields().len()
    }

    /// Put the cursor on `field` if the step shows it
    pub fn focus_field(&mut self, step: Step, field: Field) {
        if let Some(index) = step.fields().iter().position(|f| *f == field) {
            self.active_form_field = index;
        }
    }

    /// Cursor on the first stop of a freshly shown step
    pub fn reset_focus(&mut self) {
        self.active_form_field = 0;
        self.form_selected_button = 1;
    }

    pub fn selected_button(&self, step: Step) -> FormButton {
        FormButton::row_for(step)[self.form_selected_button.min(1)]
    }

    pub fn next_button(&mut self) {
        self.form_selected_button = (self.form_selected_button + 1) % 2;
    }

    pub fn prev_button(&mut self) {
        self.next_button();
    }
}
