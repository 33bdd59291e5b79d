//! Field rendering utilities for forms

use crate::state::InputType;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field: bordered input plus the error line below it
pub const FIELD_HEIGHT: u16 = 4;

/// Everything the renderer needs to draw one input
#[derive(Debug, Clone, Copy)]
pub struct FieldView<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub input_type: InputType,
    pub error: Option<&'a str>,
    pub is_active: bool,
}

/// Draw an input box with its inline error message
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FieldView) {
    let border_style = match (field.is_active, field.error.is_some()) {
        (_, true) => Style::default().fg(Color::Red),
        (true, false) => Style::default().fg(Color::Cyan),
        (false, false) => Style::default().fg(Color::DarkGray),
    };

    let value_style = if field.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let mut spans = if field.value.is_empty() && !field.is_active {
        vec![Span::styled(
            field.input_type.placeholder(),
            Style::default().fg(Color::DarkGray),
        )]
    } else {
        vec![Span::styled(field.value, value_style)]
    };
    if field.is_active {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    let input_area = Rect {
        height: area.height.min(3),
        ..area
    };
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), input_area);

    if let Some(message) = field.error {
        if area.height > 3 {
            let error_area = Rect {
                x: area.x + 1,
                y: area.y + 3,
                width: area.width.saturating_sub(1),
                height: 1,
            };
            let error = Paragraph::new(Span::styled(message, Style::default().fg(Color::Red)));
            frame.render_widget(error, error_area);
        }
    }
}
