use crate::prime::{is_prime, ordinal};
use crate::state::{Activity, ActivityKind, AppState};
use crate::ui::app::{App, Screen, HOME_ITEMS};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::input::key_hints;
use crate::ui::layout::{layout_regions, split_favorites};
use crate::ui::popup::PopupDialog;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, DISABLED_TEXT, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use std::time::SystemTime;

const POPUP_MIN_WIDTH: u16 = 40;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let state = app.store().snapshot();

    let header_widget = Header::new(app.screen().title(), state.count, state.favorite_primes.len());
    frame.render_widget(header_widget.widget(), header);
    frame.render_widget(Clear, body);

    match app.screen() {
        Screen::Home => draw_home(frame, app, body),
        Screen::Counter => draw_counter(frame, app, &state, body),
        Screen::Favorites => draw_favorites(frame, app, &state, body),
    }

    let footer_widget = Footer::new(key_hints(app));
    frame.render_widget(footer_widget.widget(footer), footer);
}

fn draw_home(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let lines: Vec<Line> = HOME_ITEMS
        .iter()
        .enumerate()
        .map(|(idx, screen)| {
            let line = Line::from(vec![
                Span::styled(format!(" {:>2}. ", idx + 1), Style::default().fg(HEADER_TEXT)),
                Span::styled(screen.title(), Style::default().fg(HEADER_TEXT)),
            ]);
            if idx == app.home_selection() {
                line.style(Style::default().bg(ACTIVE_HIGHLIGHT))
            } else {
                line
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(bordered("Menu")), body);
}

fn draw_counter(frame: &mut Frame<'_>, app: &App, state: &AppState, body: Rect) {
    let view = app.counter();
    let text = Style::default().fg(HEADER_TEXT);

    let nth_prime_line = if view.is_lookup_in_flight() {
        Line::from(vec![Span::styled(
            format!("What's the {} prime?  (looking up...)", ordinal(state.count)),
            Style::default().fg(DISABLED_TEXT),
        )])
    } else {
        Line::from(vec![
            Span::styled(format!("What's the {} prime?", ordinal(state.count)), text),
            Span::styled("  [n]", Style::default().fg(DISABLED_TEXT)),
        ])
    };

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("[-]   ", Style::default().fg(ACCENT)),
            Span::styled(
                state.count.to_string(),
                text.add_modifier(Modifier::BOLD),
            ),
            Span::styled("   [+]", Style::default().fg(ACCENT)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Is this prime?", text),
            Span::styled("  [p]", Style::default().fg(DISABLED_TEXT)),
        ]),
        nth_prime_line,
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(bordered(Screen::Counter.title())),
        body,
    );

    if view.prime_modal_shown {
        PopupDialog::new("Is this prime?", prime_modal_lines(state))
            .min_width(POPUP_MIN_WIDTH)
            .render(frame, body);
    }

    if let Some(alert) = view.nth_prime_alert {
        let message = match alert.prime {
            Some(prime) => format!("The {} prime is {}", ordinal(alert.n), prime),
            None => format!("The {} prime is unavailable", ordinal(alert.n)),
        };
        let lines = vec![
            Line::from(message),
            Line::from(""),
            Line::from(Span::styled("[Enter] OK", Style::default().fg(DISABLED_TEXT))),
        ];
        PopupDialog::new("Prime", lines)
            .min_width(POPUP_MIN_WIDTH)
            .render(frame, body);
    }
}

fn prime_modal_lines(state: &AppState) -> Vec<Line<'static>> {
    let count = state.count;
    if !is_prime(count) {
        return vec![Line::from(format!("Phew, {} is not a prime, we're safe", count))];
    }

    let action = if state.is_favorite(count) {
        "[r] Remove from favorites"
    } else {
        "[s] Save to favorites"
    };
    vec![
        Line::from(Span::styled(
            format!("{} is a prime!", count),
            Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(action),
    ]
}

fn draw_favorites(frame: &mut Frame<'_>, app: &App, state: &AppState, body: Rect) {
    let (list_area, feed_area) = split_favorites(body);
    let view = app.favorites();

    let list: Vec<Line> = if state.favorite_primes.is_empty() {
        vec![Line::from(Span::styled(
            " No favorite primes yet",
            Style::default().fg(DISABLED_TEXT),
        ))]
    } else {
        state
            .favorite_primes
            .iter()
            .enumerate()
            .map(|(idx, prime)| {
                let marker = if view.is_marked(idx) { "*" } else { " " };
                let line = Line::from(Span::styled(
                    format!(" {} {}", marker, prime),
                    Style::default().fg(HEADER_TEXT),
                ));
                if idx == view.selected {
                    line.style(Style::default().bg(ACTIVE_HIGHLIGHT))
                } else {
                    line
                }
            })
            .collect()
    };
    frame.render_widget(Paragraph::new(list).block(bordered("Favorites")), list_area);

    // Newest entries last; keep the tail visible.
    let visible = feed_area.height.saturating_sub(2) as usize;
    let skip = state.activity_feed.len().saturating_sub(visible);
    let feed: Vec<Line> = state
        .activity_feed
        .iter()
        .skip(skip)
        .map(activity_line)
        .collect();
    frame.render_widget(Paragraph::new(feed).block(bordered("Activity")), feed_area);
}

fn activity_line(activity: &Activity) -> Line<'static> {
    let (label, color) = match activity.kind {
        ActivityKind::AddedFavoritePrime(p) => (format!("Added {}", p), STATUS_OK),
        ActivityKind::RemovedFavoritePrime(p) => (format!("Removed {}", p), STATUS_ERROR),
    };
    Line::from(vec![
        Span::styled(
            format!(" {}  ", format_time(activity.timestamp)),
            Style::default().fg(DISABLED_TEXT),
        ),
        Span::styled(label, Style::default().fg(color)),
    ])
}

fn bordered(title: &str) -> Block<'_> {
    Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

/// `HH:MM:SS` in UTC.
pub fn format_time(timestamp: SystemTime) -> String {
    let secs = timestamp
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
        % 86_400;
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
}
