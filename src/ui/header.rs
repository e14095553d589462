use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Title bar: screen title, current count and number of favorites.
pub struct Header<'a> {
    title: &'a str,
    count: i64,
    favorites: usize,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, count: i64, favorites: usize) -> Self {
        Self {
            title,
            count,
            favorites,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let title_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(self.title.to_string(), title_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("Count: {}", self.count), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("Favorites: {}", self.favorites), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
