use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, POPUP_BORDER};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

/// Bordered dialog sized to its content and centered over an area.
pub struct PopupDialog<'a> {
    title: &'a str,
    lines: Vec<Line<'a>>,
    min_width: u16,
}

impl<'a> PopupDialog<'a> {
    pub fn new(title: &'a str, lines: Vec<Line<'a>>) -> Self {
        Self {
            title,
            lines,
            min_width: 0,
        }
    }

    pub fn min_width(mut self, width: u16) -> Self {
        self.min_width = width;
        self
    }

    pub fn render(self, frame: &mut Frame, over: Rect) {
        let content_width = self.lines.iter().map(Line::width).max().unwrap_or(0) as u16;
        let width = content_width.saturating_add(4).max(self.min_width);
        let height = (self.lines.len() as u16).saturating_add(2);
        let area = centered_rect_by_size(over, width, height);

        frame.render_widget(Clear, area);
        let block = Block::default()
            .title(Span::styled(self.title, Style::default().fg(ACCENT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER));
        frame.render_widget(
            Paragraph::new(self.lines)
                .block(block)
                .wrap(Wrap { trim: false }),
            area,
        );
    }
}
