//! # Actions
//!
//! Every button in the app becomes an `Action`.
//! User presses "Go to B"? That's `Action::GoToB`.
//!
//! The `update()` function takes the current state and an action, applies the
//! matching back-stack call with its fixed arguments, and returns an `Effect`
//! telling the adapter whether anything beyond a redraw is needed.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! The action set is closed: each screen offers a fixed list, see
//! [`available_actions`].

use std::fmt;
use std::str::FromStr;

use log::{info, warn};

use crate::core::back_stack::NavOptions;
use crate::core::route::{ROUTE_A, ROUTE_B, ROUTE_C};
use crate::core::state::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    GoToA,
    GoToASingleTop,
    GoToB,
    GoToC,
    GoToAPopUpToInclusive,
    GoToAPopUpTo,
    BackToA,
    BackToAInclusive,
    Back,
    /// Navigate to the start destination after the stack was emptied.
    Relaunch,
    Quit,
}

/// What the adapter should do after `update()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

const A_ACTIONS: &[Action] = &[
    Action::GoToA,
    Action::GoToASingleTop,
    Action::GoToB,
    Action::GoToC,
    Action::Back,
];

const B_ACTIONS: &[Action] = &[
    Action::GoToA,
    Action::GoToAPopUpToInclusive,
    Action::GoToC,
    Action::Back,
];

const C_ACTIONS: &[Action] = &[
    Action::GoToA,
    Action::GoToAPopUpToInclusive,
    Action::GoToAPopUpTo,
    Action::BackToA,
    Action::BackToAInclusive,
    Action::GoToB,
    Action::Back,
];

const EMPTY_ACTIONS: &[Action] = &[Action::Relaunch, Action::Quit];

/// Buttons offered by the screen for `route`, in display order.
///
/// `None` means the stack is empty; only relaunching or quitting is possible.
pub fn available_actions(route: Option<&str>) -> &'static [Action] {
    match route {
        Some(ROUTE_A) => A_ACTIONS,
        Some(ROUTE_B) => B_ACTIONS,
        Some(ROUTE_C) => C_ACTIONS,
        Some(_) => &[Action::Back],
        None => EMPTY_ACTIONS,
    }
}

impl Action {
    pub const ALL: &'static [Action] = &[
        Action::GoToA,
        Action::GoToASingleTop,
        Action::GoToB,
        Action::GoToC,
        Action::GoToAPopUpToInclusive,
        Action::GoToAPopUpTo,
        Action::BackToA,
        Action::BackToAInclusive,
        Action::Back,
        Action::Relaunch,
        Action::Quit,
    ];

    /// Button text.
    pub fn label(self) -> &'static str {
        match self {
            Action::GoToA => "Go to A",
            Action::GoToASingleTop => "Go to A (launchSingleTop)",
            Action::GoToB => "Go to B",
            Action::GoToC => "Go to C",
            Action::GoToAPopUpToInclusive => "Go to A (popUpTo / inclusive)",
            Action::GoToAPopUpTo => "Go to A (popUpTo)",
            Action::BackToA => "Go back to A",
            Action::BackToAInclusive => "Go back to A (inclusive)",
            Action::Back => "Go back",
            Action::Relaunch => "Relaunch start destination",
            Action::Quit => "Quit",
        }
    }

    /// Stable identifier used on the command line.
    pub fn id(self) -> &'static str {
        match self {
            Action::GoToA => "go-to-a",
            Action::GoToASingleTop => "go-to-a-single-top",
            Action::GoToB => "go-to-b",
            Action::GoToC => "go-to-c",
            Action::GoToAPopUpToInclusive => "go-to-a-pop-up-to-inclusive",
            Action::GoToAPopUpTo => "go-to-a-pop-up-to",
            Action::BackToA => "back-to-a",
            Action::BackToAInclusive => "back-to-a-inclusive",
            Action::Back => "back",
            Action::Relaunch => "relaunch",
            Action::Quit => "quit",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .iter()
            .copied()
            .find(|a| a.id() == s)
            .ok_or_else(|| format!("unknown action: {s}"))
    }
}

/// Applies `action` to `app`.
pub fn update(app: &mut App, action: Action) -> Effect {
    info!("Action: {}", action);
    let label = action.label();

    let navigation = match action {
        Action::Quit => return Effect::Quit,
        Action::GoToA => Some((ROUTE_A, NavOptions::default())),
        Action::GoToASingleTop => Some((ROUTE_A, NavOptions::default().single_top())),
        Action::GoToB => Some((ROUTE_B, NavOptions::default())),
        Action::GoToC => Some((ROUTE_C, NavOptions::default())),
        Action::GoToAPopUpToInclusive => {
            Some((ROUTE_A, NavOptions::default().pop_up_to(ROUTE_A, true)))
        }
        Action::GoToAPopUpTo => Some((ROUTE_A, NavOptions::default().pop_up_to(ROUTE_A, false))),
        Action::BackToA | Action::BackToAInclusive | Action::Back | Action::Relaunch => None,
    };

    if let Some((route, options)) = navigation {
        match app.controller.navigate(route, &options) {
            Ok(true) => app.status_message = label.to_string(),
            Ok(false) => app.status_message = format!("{label}: {route} already on top"),
            Err(e) => {
                warn!("{} failed: {}", label, e);
                app.status_message = format!("{label}: {e}");
            }
        }
        return Effect::None;
    }

    match action {
        Action::Back => {
            app.status_message = if app.controller.pop_back_stack() {
                label.to_string()
            } else {
                format!("{label}: already at start destination")
            };
        }
        Action::BackToA | Action::BackToAInclusive => {
            let inclusive = action == Action::BackToAInclusive;
            app.status_message = if app.controller.pop_back_stack_to(ROUTE_A, inclusive) {
                label.to_string()
            } else {
                format!("{label}: nothing to pop")
            };
        }
        Action::Relaunch => {
            let start = app.controller.registry().start().to_string();
            app.status_message = match app.controller.navigate(&start, &NavOptions::default()) {
                Ok(_) => format!("Relaunched {start}"),
                Err(e) => format!("{label}: {e}"),
            };
        }
        _ => {}
    }
    Effect::None
}
