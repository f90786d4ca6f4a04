//! Main TUI runner - entry point and event loop

use microdesigner_app::config::Settings;
use microdesigner_app::{process_message, signals, AppState, Message};
use microdesigner_core::prelude::*;
use tokio::sync::mpsc;

use crate::hit_regions::HitRegions;
use crate::{event, render, terminal};

/// Run the board until the user quits or a signal arrives
pub async fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mouse = settings.ui.mouse;
    let mut state = AppState::with_settings(settings);
    info!(
        "Starting board with {} services (mouse={})",
        state.catalog().len(),
        mouse
    );

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    if mouse {
        if let Err(e) = terminal::enable_mouse_capture() {
            warn!("{}", e);
        }
    }

    // Signal handler sends Message::Quit on SIGINT/SIGTERM
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(16);
    signals::spawn_signal_handler(msg_tx);

    let result = run_loop(&mut term, &mut state, msg_rx);

    if mouse {
        if let Err(e) = terminal::disable_mouse_capture() {
            warn!("{}", e);
        }
    }
    ratatui::restore();

    info!("Board closed");
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    let mut regions = HitRegions::default();

    while !state.should_quit() {
        // Process external messages (signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg);
        }
        if state.should_quit() {
            break;
        }

        terminal.draw(|frame| regions = render::view(frame, state))?;

        if let Some(message) = event::poll(&regions)? {
            process_message(state, message);
        }
    }

    Ok(())
}
