//! # Core Application Logic
//!
//! This module contains Backstack's navigation logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • BackStack (data)     │
//!                    │  • Controller (+ subs)  │
//!                    │  • Action / update()    │
//!                    │                         │
//!                    │  No terminal. No UI.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │   Replay   │
//!             │  Adapter   │          │ (headless) │
//!             │ (ratatui)  │          │            │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`back_stack`]: `BackStack`, `Entry`, `NavOptions` and the pure transitions
//! - [`controller`]: `BackStackController` — registry checks and subscribers
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum — every button in the app

pub mod action;
pub mod back_stack;
pub mod config;
pub mod controller;
pub mod error;
pub mod route;
pub mod state;
