use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const SEPARATOR: &str = " │ ";

/// Key hints along the bottom edge, most important first.
pub struct Footer {
    playing: bool,
}

impl Footer {
    pub fn new(playing: bool) -> Self {
        Self { playing }
    }

    fn hints(&self) -> [&'static str; 7] {
        [
            "←/→: Slide",
            if self.playing {
                "Space: Pause"
            } else {
                "Space: Play"
            },
            "1-9: Jump",
            "+/-: Qty",
            "b: Buy",
            "r: Reset",
            "q: Quit",
        ]
    }

    /// Hints that fit in `width` columns, dropping from the end.
    pub fn hint_text(&self, width: usize) -> String {
        let mut text = String::from(" ");
        for hint in self.hints() {
            let extra = if text.len() > 1 { SEPARATOR } else { "" };
            let needed = text.chars().count() + extra.chars().count() + hint.chars().count();
            if needed > width {
                break;
            }
            text.push_str(extra);
            text.push_str(hint);
        }
        text
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let version = format!("v{} ", VERSION);
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let hints = self.hint_text(content_width.saturating_sub(version.chars().count()));

        // Char count, not byte count: the hints contain arrows and box glyphs.
        let padding = content_width
            .saturating_sub(hints.chars().count())
            .saturating_sub(version.chars().count());

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_hint_follows_play_state() {
        assert!(Footer::new(true).hint_text(80).contains("Space: Pause"));
        assert!(Footer::new(false).hint_text(80).contains("Space: Play"));
    }

    #[test]
    fn narrow_width_drops_trailing_hints() {
        let text = Footer::new(true).hint_text(30);
        assert!(text.contains("←/→: Slide"));
        assert!(!text.contains("q: Quit"));
        assert!(text.chars().count() <= 30);
    }
}
