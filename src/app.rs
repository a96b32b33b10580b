use crate::config::Config;
use crate::error::AppError;
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::state::State;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use tui_logger::{init_logger, set_default_level};

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: State,
    config: Config,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub fn start(config: Config) -> Result<()> {
        init_logger(config.log_level).map_err(|e| AppError::Logger(e.to_string()))?;
        set_default_level(LevelFilter::Trace);

        info!("Starting application...");
        let mut app = App {
            state: State::new(),
            config,
        };
        app.start_ui()?;
        info!("Exiting application...");
        Ok(())
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    fn start_ui(&mut self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        // Observe store mutations so every change lands in the log before
        // the next render pass
        let store_events = self.state.subscribe_store();

        let terminal_event_handler = TerminalEventHandler::new(self.config.tick_rate_ms);
        loop {
            terminal.draw(|frame| crate::ui::render(frame, &mut self.state))?;
            if !terminal_event_handler.handle_next(&mut self.state)? {
                debug!("Received application exit request.");
                break;
            }
            for event in store_events.try_iter() {
                debug!("Store changed: {:?}", event);
            }
        }

        disable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, LeaveAlternateScreen)?;

        Ok(())
    }
}
