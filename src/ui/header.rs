use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK, STATUS_PAUSED};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Top bar: product name, position and autoplay state.
pub struct Header<'a> {
    title: &'a str,
    position: usize,
    total: usize,
    playing: bool,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, position: usize, total: usize, playing: bool) -> Self {
        Self {
            title,
            position,
            total,
            playing,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (state, state_color) = if self.playing {
            ("▶ Playing", STATUS_OK)
        } else {
            ("⏸ Paused", STATUS_PAUSED)
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                self.title.to_string(),
                text_style.add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{}/{}", self.position + 1, self.total), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(state, Style::default().fg(state_color)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
