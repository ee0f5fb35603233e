//! # Back Stack
//!
//! The ordered history of visited destinations, oldest first. The last entry is
//! the screen the user is looking at.
//!
//! ```text
//! bottom                         top
//!   ┌───┐   ┌───┐   ┌───┐
//!   │ A │ → │ B │ → │ C │   ← visible
//!   └───┘   └───┘   └───┘
//! ```
//!
//! Everything here is plain data plus pure transitions. No registry lookups,
//! no observers, no logging; `BackStackController` layers those on top.

use uuid::Uuid;

/// One occurrence of a destination on the stack.
///
/// The same route may appear several times; `id` tells the occurrences apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: Uuid,
    pub route: String,
}

impl Entry {
    pub fn new(route: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            route: route.into(),
        }
    }
}

/// Pop target applied before a navigation pushes its entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopUpTo {
    pub route: String,
    pub inclusive: bool,
}

/// Per-call navigation policy. The default is a plain push.
///
/// ```rust,ignore
/// let options = NavOptions::default().pop_up_to("A", true);
/// controller.navigate("A", &options)?;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavOptions {
    pub launch_single_top: bool,
    pub pop_up_to: Option<PopUpTo>,
}

impl NavOptions {
    /// Skip the push when the destination is already on top.
    pub fn single_top(mut self) -> Self {
        self.launch_single_top = true;
        self
    }

    /// Pop everything above `route` (and `route` itself when `inclusive`)
    /// before pushing.
    pub fn pop_up_to(mut self, route: impl Into<String>, inclusive: bool) -> Self {
        self.pop_up_to = Some(PopUpTo {
            route: route.into(),
            inclusive,
        });
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct BackStack {
    entries: Vec<Entry>,
}

impl BackStack {
    /// A stack holding only the start destination.
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            entries: vec![Entry::new(start)],
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Routes, bottom first.
    pub fn routes(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.route.clone()).collect()
    }

    pub fn top(&self) -> Option<&Entry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, route: impl Into<String>) {
        self.entries.push(Entry::new(route));
    }

    /// Removes the top entry unless it is the only one.
    ///
    /// Returns `true` if an entry was removed.
    pub fn pop(&mut self) -> bool {
        if self.entries.len() > 1 {
            self.entries.pop();
            true
        } else {
            false
        }
    }

    /// Removes entries above the nearest (scanning from the top) entry with
    /// `route`, and that entry too when `inclusive`.
    ///
    /// Leaves the stack untouched when no entry has `route`. An inclusive pop
    /// to the bottom entry empties the stack.
    ///
    /// Returns `true` if at least one entry was removed.
    pub fn pop_to(&mut self, route: &str, inclusive: bool) -> bool {
        let Some(index) = self.entries.iter().rposition(|e| e.route == route) else {
            return false;
        };
        let keep = if inclusive { index } else { index + 1 };
        let removed = keep < self.entries.len();
        self.entries.truncate(keep);
        removed
    }

    /// Applies a navigation: optional pop-up-to, then a push unless
    /// single-top finds the route already on top.
    ///
    /// Returns `true` if the stack changed.
    pub fn navigate(&mut self, route: &str, options: &NavOptions) -> bool {
        let mut changed = false;

        if let Some(target) = &options.pop_up_to {
            changed |= self.pop_to(&target.route, target.inclusive);
        }

        if options.launch_single_top && self.top().is_some_and(|top| top.route == route) {
            return changed;
        }

        self.push(route);
        true
    }
}
