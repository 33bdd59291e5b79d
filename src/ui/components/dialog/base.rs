//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

/// Configuration for rendering a modal dialog
pub struct DialogConfig<'a> {
    pub title: &'a str,
    pub accent: Color,
    /// Body text; `\n` starts a new paragraph
    pub message: &'a str,
    /// Key hint shown under the message
    pub hint: Option<Line<'a>>,
    pub max_width: u16,
}

/// Rect of `width` x `height` centred in `area`, clipped to it
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Render a centred dialog over whatever is already drawn
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    // 2 columns of padding each side plus the borders
    let chrome = 6u16;
    let text_width = config.max_width.saturating_sub(chrome).max(10) as usize;

    let wrapped = wrap_text(config.message, text_width);
    let widest = wrapped
        .iter()
        .map(|l| l.chars().count())
        .chain(std::iter::once(config.title.chars().count()))
        .max()
        .unwrap_or(0) as u16;

    let hint_rows = if config.hint.is_some() { 2 } else { 0 };
    let height = 2 + 2 + wrapped.len() as u16 + hint_rows;
    let area = centered_rect(frame.area(), widest + chrome, height);

    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(wrapped.into_iter().map(Line::from));
    if let Some(hint) = config.hint {
        content.push(Line::from(""));
        content.push(hint);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(config.accent))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(content).block(block.padding(Padding::horizontal(2))),
        area,
    );
}

/// Greedy word wrap; paragraphs are kept apart
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let needed = current.chars().count() + word.chars().count() + 1;
            if !current.is_empty() && needed > max_width {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }
    lines
}
