//! Layout components (header, stepper, status bar)

use crate::app::App;
use crate::platform::{NEXT_SHORTCUT, PREV_SHORTCUT, RESET_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::Step;
use crate::store::FormStore;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the centred form column
const FORM_WIDTH: u16 = 64;

/// Areas of the screen, top to bottom
pub struct ScreenLayout {
    pub header: Rect,
    pub stepper: Rect,
    pub body: Rect,
    pub status: Rect,
}

/// Split the frame into a centred form column plus a full-width status bar
pub fn create_layout(area: Rect) -> ScreenLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Form
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(FORM_WIDTH),
            Constraint::Min(0),
        ])
        .split(rows[0]);

    let form = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(3), // Stepper
            Constraint::Min(0),    // Step body
        ])
        .split(columns[1]);

    ScreenLayout {
        header: form[0],
        stepper: form[1],
        body: form[2],
        status: rows[1],
    }
}

pub fn draw_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("Multi-Step Form")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(title, area);
}

/// Progress row: a numbered box per step, a tick once a step is passed
pub fn draw_stepper(frame: &mut Frame, area: Rect, active: Step) {
    let constraints: Vec<Constraint> = Step::ALL
        .iter()
        .map(|_| Constraint::Ratio(1, Step::count() as u32))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for step in Step::ALL {
        let (marker, color) = if step.index() < active.index() {
            ("✓".to_string(), Color::Green)
        } else if step == active {
            ((step.index() + 1).to_string(), Color::Cyan)
        } else {
            ((step.index() + 1).to_string(), Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));
        let cell = Paragraph::new(marker)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .block(block);
        frame.render_widget(cell, chunks[step.index()]);
    }
}

/// Draw the status bar
pub fn draw_status_bar<S: FormStore>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let mut spans = vec![Span::styled(
        format!(" {}/{} ", app.step().index() + 1, Step::count()),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];

    spans.push(Span::styled(
        format!(" {}", get_step_hints(app.step())),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Get keyboard hints for the current step
fn get_step_hints(step: Step) -> String {
    match step {
        Step::PersonalInformation => {
            format!("Tab:next field  {NEXT_SHORTCUT}:next step  {RESET_SHORTCUT}:clear  Esc:quit")
        }
        Step::AddressInformation => format!(
            "Tab:next field  {NEXT_SHORTCUT}:next  {PREV_SHORTCUT}:prev  {RESET_SHORTCUT}:clear  Esc:quit"
        ),
        Step::Review => {
            format!("{SUBMIT_SHORTCUT}:submit  {PREV_SHORTCUT}:prev  {RESET_SHORTCUT}:clear  Esc:quit")
        }
    }
}
