//! # Screen Component
//!
//! One destination: a title, a background colour and a column of buttons.
//! Which buttons appear is decided by the core (`available_actions`); this
//! component only draws them and turns key presses into `ScreenEvent`s.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ScreenState` lives in `TuiState` (selection survives redraws)
//! - `ScreenView` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use uuid::Uuid;

use crate::core::action::{Action, available_actions};
use crate::core::route::{ROUTE_A, ROUTE_B, ROUTE_C};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Background colour for a screen.
pub fn screen_color(route: Option<&str>) -> Color {
    match route {
        Some(ROUTE_A) => Color::Rgb(0xE4, 0xA5, 0xB0),
        Some(ROUTE_B) => Color::Rgb(0xDA, 0xC1, 0xFA),
        Some(ROUTE_C) => Color::Rgb(0x56, 0xAB, 0x91),
        _ => Color::DarkGray,
    }
}

/// Persistent state for the visible screen's button column.
pub struct ScreenState {
    pub actions: &'static [Action],
    pub selected: usize,
    /// Entry the selection belongs to; a new entry starts at the first button.
    entry: Option<Uuid>,
}

impl ScreenState {
    pub fn new() -> Self {
        Self {
            actions: available_actions(None),
            selected: 0,
            entry: None,
        }
    }

    /// Point the state at the visible entry. Resets the selection whenever a
    /// different entry comes on top, even one with the same route.
    pub fn sync(&mut self, entry: Option<Uuid>, route: Option<&str>) {
        self.actions = available_actions(route);
        if self.entry != entry {
            self.entry = entry;
            self.selected = 0;
        }
        self.selected = self.selected.min(self.actions.len().saturating_sub(1));
    }

    fn offers(&self, action: Action) -> Option<ScreenEvent> {
        self.actions
            .contains(&action)
            .then_some(ScreenEvent::Activate(action))
    }
}

impl Default for ScreenState {
    fn default() -> Self {
        Self::new()
    }
}

/// Events emitted by a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEvent {
    Activate(Action),
}

impl EventHandler for ScreenState {
    type Event = ScreenEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ScreenEvent> {
        match event {
            TuiEvent::CursorUp | TuiEvent::InputChar('k') => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown | TuiEvent::InputChar('j') => {
                if !self.actions.is_empty() {
                    self.selected = (self.selected + 1).min(self.actions.len() - 1);
                }
                None
            }
            TuiEvent::Submit => self
                .actions
                .get(self.selected)
                .map(|action| ScreenEvent::Activate(*action)),
            TuiEvent::InputChar(c @ '1'..='9') => {
                let index = (*c as u8 - b'1') as usize;
                self.actions
                    .get(index)
                    .map(|action| ScreenEvent::Activate(*action))
            }
            // Hardware back button
            TuiEvent::Escape | TuiEvent::Backspace => self.offers(Action::Back),
            TuiEvent::InputChar('r') => self.offers(Action::Relaunch),
            TuiEvent::InputChar('q') => Some(ScreenEvent::Activate(Action::Quit)),
            _ => None,
        }
    }
}

/// Transient render wrapper for the visible screen.
pub struct ScreenView<'a> {
    route: Option<&'a str>,
    state: &'a ScreenState,
}

impl<'a> ScreenView<'a> {
    pub fn new(route: Option<&'a str>, state: &'a ScreenState) -> Self {
        Self { route, state }
    }
}

impl Component for ScreenView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let background = screen_color(self.route);
        let block = Block::default().style(Style::default().bg(background).fg(Color::Black));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let title = self.route.unwrap_or("Back stack is empty");
        let [title_area, _, buttons_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new(title)
                .alignment(Alignment::Center)
                .style(Style::default().add_modifier(Modifier::BOLD)),
            title_area,
        );

        let lines: Vec<Line> = self
            .state
            .actions
            .iter()
            .enumerate()
            .map(|(i, action)| {
                let text = format!(" {}  {} ", i + 1, action.label());
                if i == self.state.selected {
                    Line::styled(
                        text,
                        Style::default()
                            .fg(Color::White)
                            .bg(Color::Black)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Line::raw(text)
                }
            })
            .collect();

        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            buttons_area,
        );
    }
}
