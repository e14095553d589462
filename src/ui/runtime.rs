use crate::lookup::PrimeLookup;
use crate::state::Store;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the terminal UI until the user quits.
///
/// `store` and `lookup` are owned by the caller; lookups are spawned on
/// `runtime`.
pub fn run(
    store: Store,
    lookup: Arc<dyn PrimeLookup>,
    runtime: Handle,
    tick_rate: Duration,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);

    let state_events = events.sender();
    let _subscription = store.subscribe(move |_| {
        let _ = state_events.send(AppEvent::StateChanged);
    });

    let mut app = App::new(store, lookup, runtime, events.sender());
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    tracing::info!("TUI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::StateChanged) => {}
            Ok(AppEvent::NthPrime { request_id, prime }) => app.on_nth_prime(request_id, prime),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!("TUI stopped");
    drop(guard);
    Ok(())
}
