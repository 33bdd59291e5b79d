//! Read-only summary shown on the review step

use crate::state::{review_sections, Field, FormValues};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// One `label: value` line
pub fn review_line<'a>(label: &'a str, value: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!("{label}: "),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(value),
    ])
}

/// Value as shown in the summary; an empty optional address line shows `_`
fn display_value(values: &FormValues, field: Field) -> &str {
    match (field, values.get(field)) {
        (Field::AddressLine2, "") => "_",
        (_, value) => value,
    }
}

pub fn draw_review(frame: &mut Frame, area: Rect, values: &FormValues) {
    let mut lines = Vec::new();
    for (i, (heading, fields)) in review_sections().into_iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            format!("{heading}:"),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        for field in fields {
            lines.push(review_line(
                field.review_label(),
                display_value(values, *field),
            ));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}
