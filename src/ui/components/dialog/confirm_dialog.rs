//! Confirmation dialog for clearing the form

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Ask before wiping every field and the saved progress
pub fn render_reset_dialog(frame: &mut Frame) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = Line::from(vec![
        Span::styled("y", key_style),
        Span::raw(" clear  "),
        Span::styled("n", key_style),
        Span::raw("/"),
        Span::styled("Esc", key_style),
        Span::raw(" keep"),
    ]);

    render_dialog(
        frame,
        DialogConfig {
            title: "Clear form?",
            accent: Color::Yellow,
            message: "All entered values and the saved progress will be removed.",
            hint: Some(hint),
            max_width: 50,
        },
    );
}
