use crate::state::{Focus, State};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

/// Return true when the event carries no modifier beyond shift.
///
fn is_plain(event: &KeyEvent) -> bool {
    event.modifiers == KeyModifiers::NONE || event.modifiers == KeyModifiers::SHIFT
}

impl Handler {
    /// Return new instance after spawning new input polling thread with the
    /// given tick rate.
    ///
    pub fn new(tick_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(tick_rate_ms);
            if event::poll(tick_rate).unwrap() {
                if let CrosstermEvent::Key(key) = event::read().unwrap() {
                    // Only presses; repeats and releases would double up
                    // keystrokes on some platforms
                    if key.kind == KeyEventKind::Press {
                        tx_clone.send(Event::Input(key)).unwrap();
                    }
                }
            } else {
                tx_clone.send(Event::Tick).unwrap();
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(event) => match event.code {
                KeyCode::Char('c') if event.modifiers == KeyModifiers::CONTROL => {
                    debug!("Processing exit terminal event '{:?}'...", event);
                    return Ok(false);
                }
                KeyCode::Char('l') if event.modifiers == KeyModifiers::CONTROL => {
                    debug!("Processing toggle log panel event '{:?}'...", event);
                    state.toggle_log_panel();
                }
                // Inline editor takes precedence over focus while an item is
                // under edit
                KeyCode::Char('d')
                    if event.modifiers == KeyModifiers::CONTROL && state.is_editing() =>
                {
                    debug!("Processing remove editing item event '{:?}'...", event);
                    state.remove_editing_item();
                }
                KeyCode::Char(c) if is_plain(&event) && state.is_editing() => {
                    state.edit_add_char(c)?;
                }
                KeyCode::Backspace if state.is_editing() => {
                    state.edit_remove_char()?;
                }
                KeyCode::Right if state.is_editing() => {
                    debug!("Processing next edit icon event '{:?}'...", event);
                    state.edit_next_icon()?;
                }
                KeyCode::Left if state.is_editing() => {
                    debug!("Processing previous edit icon event '{:?}'...", event);
                    state.edit_previous_icon()?;
                }
                KeyCode::Enter | KeyCode::Esc if state.is_editing() => {
                    debug!("Processing edit done event '{:?}'...", event);
                    state.edit_done();
                }
                // Entry input focus
                KeyCode::Char(c)
                    if is_plain(&event) && *state.current_focus() == Focus::Entry =>
                {
                    state.add_entry_char(c);
                }
                KeyCode::Backspace if *state.current_focus() == Focus::Entry => {
                    state.remove_entry_char();
                }
                KeyCode::Right if *state.current_focus() == Focus::Entry => {
                    debug!("Processing next entry icon event '{:?}'...", event);
                    state.next_entry_icon();
                }
                KeyCode::Left if *state.current_focus() == Focus::Entry => {
                    debug!("Processing previous entry icon event '{:?}'...", event);
                    state.previous_entry_icon();
                }
                KeyCode::Enter if *state.current_focus() == Focus::Entry => {
                    debug!("Processing entry submit event '{:?}'...", event);
                    state.submit_entry();
                }
                KeyCode::Tab | KeyCode::Down if *state.current_focus() == Focus::Entry => {
                    debug!("Processing focus list event '{:?}'...", event);
                    state.toggle_focus();
                }
                // List focus
                KeyCode::Char('q') if is_plain(&event) => {
                    debug!("Processing exit terminal event '{:?}'...", event);
                    return Ok(false);
                }
                KeyCode::Char('j') | KeyCode::Down => {
                    debug!("Processing next todo event '{:?}'...", event);
                    state.next_todo();
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    debug!("Processing previous todo event '{:?}'...", event);
                    state.previous_todo();
                }
                KeyCode::Enter => {
                    debug!("Processing start edit event '{:?}'...", event);
                    state.start_edit_selected();
                }
                KeyCode::Char('d') if is_plain(&event) => {
                    debug!("Processing remove todo event '{:?}'...", event);
                    state.remove_selected();
                }
                KeyCode::Char('r') if is_plain(&event) => {
                    debug!("Processing add random todo event '{:?}'...", event);
                    state.add_random_todo();
                }
                KeyCode::Tab | KeyCode::Esc => {
                    debug!("Processing focus entry event '{:?}'...", event);
                    state.toggle_focus();
                }
                _ => {
                    debug!("Skipping processing of terminal event '{:?}'...", event);
                }
            },
            Event::Tick => {}
        }
        Ok(true)
    }
}
