//! # TitleBar Component
//!
//! Top status bar: which screen is visible and what the last button did.
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.current_route(), app.status_message.clone());
//! title_bar.render(frame, title_area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"Backstack (screen: C) | Go to C"`
//! 2. **No status**: `"Backstack (screen: C)"`
//! 3. **Empty stack**: `"Backstack (screen: none) | Go back to A (inclusive)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

/// Top status bar component showing the visible screen and the last status.
pub struct TitleBar {
    /// Route of the visible screen, `None` while the stack is empty
    pub route: Option<String>,
    /// Status message (e.g., "Go to B", "Go back: already at start destination")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(route: Option<String>, status_message: String) -> Self {
        Self {
            route,
            status_message,
        }
    }

    fn text(&self) -> String {
        let screen = self.route.as_deref().unwrap_or("none");
        if self.status_message.is_empty() {
            format!("Backstack (screen: {screen})")
        } else {
            format!("Backstack (screen: {screen}) | {}", self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::raw(self.text()), area);
    }
}
