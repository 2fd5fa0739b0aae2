use crate::ui::theme::{ACCENT_GREEN, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Title bar: back marker when the stack is deeper than Home, then the
/// current screen title.
pub struct Header<'a> {
    title: &'a str,
    can_go_back: bool,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, can_go_back: bool) -> Self {
        Self { title, can_go_back }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let mut spans = vec![Span::raw("  ")];
        if self.can_go_back {
            spans.push(Span::styled("‹ Back", Style::default().fg(MUTED_TEXT)));
            spans.push(Span::styled("  │  ", Style::default().fg(GLOBAL_BORDER)));
        }
        spans.push(Span::styled(
            self.title.to_string(),
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled("  🌍", Style::default().fg(ACCENT_GREEN)));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
