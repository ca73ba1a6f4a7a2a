use crate::app::App;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use super::action_queue::channel;
use super::actions::run_action;
use super::mouse::handle_mouse_event;
use super::views::handle_view_key;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let (action_tx, mut action_rx) = channel();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_view_key(key, app, &action_tx);
                }
                Event::Mouse(mouse) => handle_mouse_event(mouse, app, &action_tx),
                _ => {}
            }
        }

        while let Ok(action) = action_rx.try_recv() {
            run_action(action, app);
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}
