use crate::config::UiConfig;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;

/// Run the interactive loop until the user quits.
///
/// Losing terminal input before a quit was requested is an error.
pub fn run(mut app: App, config: &UiConfig) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(config.tick_rate())?;
    tracing::info!(count = app.count(), "Counter UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next() {
            Ok(event) => apply_event(&mut app, event),
            Err(err) => {
                tracing::error!("Terminal input failed: {}", err);
                return Err(err);
            }
        }
    }

    drop(guard);
    tracing::info!(
        count = app.count(),
        dispatches = app.dispatch_count(),
        "Counter UI stopped"
    );
    Ok(())
}

fn apply_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        // Both only need the redraw at the top of the loop.
        AppEvent::Resize | AppEvent::Tick => {}
    }
}
