use crate::ui::app::{App, Screen};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.request_quit();
        return;
    }

    match app.screen() {
        Screen::Home => handle_home_key(app, key),
        Screen::Counter => handle_counter_key(app, key),
        Screen::Favorites => handle_favorites_key(app, key),
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_home_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_home_selection(1),
        KeyCode::Enter => app.open_selected(),
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        _ => {}
    }
}

fn handle_counter_key(app: &mut App, key: KeyEvent) {
    // Overlays take the keys first: alert above modal above screen.
    if app.counter().is_alert_shown() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.dismiss_alert();
        }
        return;
    }

    if app.counter().prime_modal_shown {
        match key.code {
            KeyCode::Char('s') => app.save_current_prime(),
            KeyCode::Char('r') => app.remove_current_prime(),
            KeyCode::Esc | KeyCode::Char('p') => app.dismiss_prime_modal(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('-') | KeyCode::Left => app.decrement(),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => app.increment(),
        KeyCode::Char('p') => app.show_prime_modal(),
        KeyCode::Char('n') => app.request_nth_prime(),
        KeyCode::Esc | KeyCode::Backspace => app.back(),
        _ => {}
    }
}

fn handle_favorites_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_favorite_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_favorite_selection(1),
        KeyCode::Char(' ') => app.toggle_favorite_mark(),
        KeyCode::Char('d') | KeyCode::Delete => app.remove_selected_favorites(),
        KeyCode::Esc | KeyCode::Backspace => app.back(),
        _ => {}
    }
}

/// Key hints shown in the footer for the current screen and overlay.
pub fn key_hints(app: &App) -> &'static str {
    match app.screen() {
        Screen::Home => "Up/Down: Move │ Enter: Open │ q: Quit",
        Screen::Counter if app.counter().is_alert_shown() => "Enter/Esc: OK",
        Screen::Counter if app.counter().prime_modal_shown => {
            "s: Save to favorites │ r: Remove from favorites │ Esc: Close"
        }
        Screen::Counter => "-/+: Count │ p: Is this prime? │ n: Nth prime │ Esc: Back",
        Screen::Favorites => "Up/Down: Move │ Space: Mark │ d: Remove │ Esc: Back",
    }
}
