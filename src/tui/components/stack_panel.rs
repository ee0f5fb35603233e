//! # Stack Panel Component
//!
//! Lists the back stack below the buttons:
//!
//! ```text
//! Backstack count: 3
//!       ┃ C ┃        ← visible screen (top-first order)
//!       ┃ B ┃
//!       ┃ A ┃
//!       ┗━┛          ← the host the stack sits on
//! ```
//!
//! The list scrolls (mouse wheel, PageUp/PageDown) once the stack outgrows
//! the panel. Follows the persistent state + transient wrapper pattern.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect, Size};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::StackOrder;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const HOST_LINE: &str = "┗━┛";

/// Formats a route the way the panel shows it: `┃ A ┃`.
pub fn format_route(route: &str) -> String {
    format!("┃ {route} ┃")
}

/// Panel lines for a bottom-first route list, arranged by `order`, with the
/// host line on the bottom end.
pub fn panel_lines(bottom_first: &[String], order: StackOrder) -> Vec<String> {
    let mut lines: Vec<String> = bottom_first.iter().map(|r| format_route(r)).collect();
    lines.insert(0, HOST_LINE.to_string());
    match order {
        StackOrder::TopFirst => lines.into_iter().rev().collect(),
        StackOrder::BottomFirst => lines,
    }
}

/// Persistent scroll state for the panel.
#[derive(Default)]
pub struct StackPanelState {
    pub scroll_state: ScrollViewState,
    /// Stack height seen on the previous render, to detect growth.
    last_len: usize,
}

impl StackPanelState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventHandler for StackPanelState {
    type Event = (); // Scrolling is handled internally

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            _ => {}
        }
        None
    }
}

/// Transient render wrapper for the back stack panel.
pub struct StackPanel<'a> {
    routes: &'a [String],
    order: StackOrder,
    show_count: bool,
    state: &'a mut StackPanelState,
}

impl<'a> StackPanel<'a> {
    pub fn new(
        routes: &'a [String],
        order: StackOrder,
        show_count: bool,
        state: &'a mut StackPanelState,
    ) -> Self {
        Self {
            routes,
            order,
            show_count,
            state,
        }
    }
}

impl Component for StackPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let header_height = u16::from(self.show_count);
        let [header_area, list_area] =
            Layout::vertical([Constraint::Length(header_height), Constraint::Min(0)]).areas(area);

        if self.show_count {
            frame.render_widget(
                Paragraph::new(format!("Backstack count: {}", self.routes.len()))
                    .alignment(Alignment::Center),
                header_area,
            );
        }

        let lines = panel_lines(self.routes, self.order);
        let content_width = list_area.width.saturating_sub(1);
        let content_height = lines.len() as u16;

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        for (row, line) in lines.into_iter().enumerate() {
            scroll_view.render_widget(
                Paragraph::new(line).alignment(Alignment::Center),
                Rect::new(0, row as u16, content_width, 1),
            );
        }

        // Keep the visible screen in view when the stack changes size
        if self.routes.len() != self.state.last_len {
            self.state.last_len = self.routes.len();
            match self.order {
                StackOrder::TopFirst => self.state.scroll_state.scroll_to_top(),
                StackOrder::BottomFirst => self.state.scroll_state.scroll_to_bottom(),
            }
        }

        let max_y = content_height.saturating_sub(list_area.height);
        let offset = self.state.scroll_state.offset();
        if offset.y > max_y {
            self.state
                .scroll_state
                .set_offset(Position { x: offset.x, y: max_y });
        }

        frame.render_stateful_widget(scroll_view, list_area, &mut self.state.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn routes(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_panel_lines_top_first() {
        let lines = panel_lines(&routes(&["A", "B", "C"]), StackOrder::TopFirst);
        assert_eq!(lines, vec!["┃ C ┃", "┃ B ┃", "┃ A ┃", "┗━┛"]);
    }

    #[test]
    fn test_panel_lines_bottom_first() {
        let lines = panel_lines(&routes(&["A", "B"]), StackOrder::BottomFirst);
        assert_eq!(lines, vec!["┗━┛", "┃ A ┃", "┃ B ┃"]);
    }

    #[test]
    fn test_panel_lines_empty_stack_keeps_host() {
        assert_eq!(panel_lines(&[], StackOrder::TopFirst), vec!["┗━┛"]);
    }

    #[test]
    fn test_render_shows_count_and_routes() {
        let backend = TestBackend::new(40, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        let stack = routes(&["A", "A"]);
        let mut state = StackPanelState::new();

        terminal
            .draw(|f| {
                StackPanel::new(&stack, StackOrder::TopFirst, true, &mut state).render(f, f.area());
            })
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Backstack count: 2"));
        assert!(text.contains("┃ A ┃"));
        assert!(text.contains("┗━┛"));
    }

    #[test]
    fn test_render_without_count_header() {
        let backend = TestBackend::new(40, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let stack = routes(&["A"]);
        let mut state = StackPanelState::new();

        terminal
            .draw(|f| {
                StackPanel::new(&stack, StackOrder::TopFirst, false, &mut state)
                    .render(f, f.area());
            })
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(!text.contains("Backstack count"));
    }
}
