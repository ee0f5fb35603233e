//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms waiting for input and
//! only redraws after an event. All pending events are drained and applied
//! one by one before the next draw; `TuiState::sync` runs after each action
//! so the next key press is interpreted against the screen it produced.

mod component;
mod components;
mod event;
mod ui;

use log::{info, warn};
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{ScreenEvent, ScreenState, StackPanelState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub screen: ScreenState,
    pub stack_panel: StackPanelState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            screen: ScreenState::new(),
            stack_panel: StackPanelState::new(),
        }
    }

    /// Point the screen component at the visible entry.
    pub fn sync(&mut self, app: &App) {
        let top = app.controller.entries().last();
        self.screen
            .sync(top.map(|e| e.id), top.map(|e| e.route.as_str()));
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Routes one input event. Returns `Effect::Quit` when the app should exit.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    let action = match event {
        TuiEvent::Resize => return Effect::None,
        TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::ScrollUp | TuiEvent::ScrollDown => {
            tui.stack_panel.handle_event(event);
            None
        }
        _ => tui
            .screen
            .handle_event(event)
            .map(|ScreenEvent::Activate(action)| action),
    };

    let Some(action) = action else {
        return Effect::None;
    };
    let effect = update(app, action);
    tui.sync(app);
    effect
}

pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let mut app = App::from_config(&config).map_err(io::Error::other)?;
    let mut tui = TuiState::new();
    tui.sync(&app);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Failed to enable mouse capture: {}", e);
            None
        }
    };

    let result = event_loop(&mut terminal, &mut app, &mut tui);

    info!("Exiting with stack {:?}", app.routes());
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App, tui: &mut TuiState) -> io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(Duration::from_millis(500));
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(app, tui, &event) == Effect::Quit {
                return Ok(());
            }
        }
    }
}
