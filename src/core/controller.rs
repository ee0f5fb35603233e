//! # Back Stack Controller
//!
//! Owns the `BackStack`, validates routes against the `RouteRegistry`, and
//! tells subscribers about every change.
//!
//! ```text
//! button ─► Action ─► update() ─► controller.navigate(..)
//!                                      │
//!                                      ├─ mutate BackStack
//!                                      └─ notify subscribers (sync, in order)
//! ```
//!
//! Everything runs on one thread. Subscribers are called before the mutating
//! call returns, so the next input always sees an up-to-date snapshot.

use log::{debug, warn};

use crate::core::back_stack::{BackStack, Entry, NavOptions};
use crate::core::error::NavigationError;
use crate::core::route::RouteRegistry;

type Callback = Box<dyn FnMut(&[String])>;

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

pub struct BackStackController {
    registry: RouteRegistry,
    stack: BackStack,
    subscribers: Vec<(Subscription, Callback)>,
    next_subscription: u64,
}

impl BackStackController {
    /// Starts with a single entry for the registry's start destination.
    pub fn new(registry: RouteRegistry) -> Self {
        let stack = BackStack::new(registry.start());
        Self {
            registry,
            stack,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn registry(&self) -> &RouteRegistry {
        &self.registry
    }

    /// Bottom-first snapshot of the routes on the stack.
    pub fn current_stack(&self) -> Vec<String> {
        self.stack.routes()
    }

    pub fn entries(&self) -> &[Entry] {
        self.stack.entries()
    }

    /// Route of the visible screen, `None` while the stack is empty.
    pub fn current_route(&self) -> Option<&str> {
        self.stack.top().map(|e| e.route.as_str())
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Registers a callback invoked with the bottom-first routes after every
    /// change to the stack.
    pub fn subscribe(&mut self, callback: impl FnMut(&[String]) + 'static) -> Subscription {
        let subscription = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((subscription, Box::new(callback)));
        subscription
    }

    /// Returns `false` if the subscription was already gone.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(s, _)| *s != subscription);
        self.subscribers.len() != before
    }

    /// Navigates to `route`, applying `options` first.
    ///
    /// Returns `Ok(false)` when single-top left the stack as it was.
    pub fn navigate(&mut self, route: &str, options: &NavOptions) -> Result<bool, NavigationError> {
        let route = match self.registry.resolve(route) {
            Ok(route) => route.to_string(),
            Err(e) => {
                warn!("Navigation rejected: {}", e);
                return Err(e);
            }
        };

        let changed = self.stack.navigate(&route, options);
        if changed {
            debug!("navigate({:?}, {:?}) -> {:?}", route, options, self.stack.routes());
            self.notify();
        } else {
            debug!("navigate({:?}, {:?}) left stack unchanged", route, options);
        }
        Ok(changed)
    }

    /// Pops the visible screen. The start destination is never popped.
    pub fn pop_back_stack(&mut self) -> bool {
        let popped = self.stack.pop();
        if popped {
            debug!("pop_back_stack() -> {:?}", self.stack.routes());
            self.notify();
        } else {
            debug!("pop_back_stack() ignored at start destination");
        }
        popped
    }

    /// Pops down to the nearest `target` entry, removing it too if `inclusive`.
    ///
    /// An inclusive pop to the bottom entry leaves the stack empty until the
    /// next `navigate`.
    pub fn pop_back_stack_to(&mut self, target: &str, inclusive: bool) -> bool {
        let popped = self.stack.pop_to(target, inclusive);
        if popped {
            debug!(
                "pop_back_stack_to({:?}, inclusive={}) -> {:?}",
                target,
                inclusive,
                self.stack.routes()
            );
            self.notify();
        } else {
            debug!(
                "pop_back_stack_to({:?}, inclusive={}) left stack unchanged",
                target, inclusive
            );
        }
        popped
    }

    fn notify(&mut self) {
        let routes = self.stack.routes();
        for (_, callback) in &mut self.subscribers {
            callback(routes.as_slice());
        }
    }
}

impl Default for BackStackController {
    fn default() -> Self {
        Self::new(RouteRegistry::sample())
    }
}
