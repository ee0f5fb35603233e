//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Top status bar showing the visible screen and last status
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `ScreenView` / `ScreenState`: Title, background colour and button column
//!   of the visible destination; emits `ScreenEvent::Activate(action)`
//! - `StackPanel` / `StackPanelState`: Scrollable list of the back stack
//!
//! Each component file contains its state type, event type, rendering,
//! event handling and tests. Components receive external data as props
//! instead of reaching into `App`.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── screen.rs        (Destination + buttons)
//! └── stack_panel.rs   (Back stack list)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod screen;
pub mod stack_panel;
pub use screen::{ScreenEvent, ScreenState, ScreenView};
pub use stack_panel::{StackPanel, StackPanelState};
