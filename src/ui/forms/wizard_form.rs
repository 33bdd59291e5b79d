//! Body of the wizard: the current step's inputs or the review summary,
//! followed by the button row

use super::field_renderer::{draw_field, FieldView, FIELD_HEIGHT};
use super::review::draw_review;
use crate::app::App;
use crate::state::{FormButton, Step};
use crate::store::FormStore;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};

/// Draw the step heading, its content and the buttons
pub fn draw<S: FormStore>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let step = app.step();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // Step heading
            Constraint::Min(0),                // Fields or review
            Constraint::Length(BUTTON_HEIGHT), // Buttons
        ])
        .split(area);

    let heading = Paragraph::new(step.title())
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(heading, chunks[0]);

    match step {
        Step::Review => draw_review(frame, chunks[1], app.wizard.values()),
        _ => draw_fields(frame, chunks[1], app, step),
    }

    draw_buttons(frame, chunks[2], app, step);
}

fn draw_fields<S: FormStore>(frame: &mut Frame, area: Rect, app: &App<S>, step: Step) {
    let fields = step.fields();
    let mut constraints: Vec<Constraint> = fields
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let active = app.state.active_field(step);
    for (i, field) in fields.iter().enumerate() {
        let view = FieldView {
            label: field.label(),
            value: app.wizard.values().get(*field),
            input_type: field.input_type(),
            error: app.wizard.error(*field),
            is_active: active == Some(*field),
        };
        draw_field(frame, chunks[i], &view);
    }
}

fn draw_buttons<S: FormStore>(frame: &mut Frame, area: Rect, app: &App<S>, step: Step) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12), // Prev
            Constraint::Min(0),     // Spacer
            Constraint::Length(12), // Next / Submit
        ])
        .split(area);

    let on_buttons = app.state.is_buttons_row_active(step);
    let loading = app.wizard.state().is_loading();
    let [left, right] = FormButton::row_for(step);

    render_button(
        frame,
        chunks[0],
        left.label(),
        on_buttons && app.state.form_selected_button == 0,
        app.can_go_back(),
    );

    let label = if right == FormButton::Submit && loading {
        "..."
    } else {
        right.label()
    };
    render_button(
        frame,
        chunks[2],
        label,
        on_buttons && app.state.form_selected_button == 1,
        !(right == FormButton::Submit && loading),
    );
}

