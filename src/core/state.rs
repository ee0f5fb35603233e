//! # Application State
//!
//! Core business state for Backstack. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── controller: BackStackController   // the back stack + registry
//! ├── routes: Rc<RefCell<Vec<String>>>  // snapshot kept fresh by a subscription
//! ├── status_message: String            // status bar text
//! ├── stack_order: StackOrder           // how the stack panel lists routes
//! └── show_count: bool                  // "Backstack count" header on/off
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::cell::RefCell;
use std::rc::Rc;

use crate::StackOrder;
use crate::core::config::ResolvedConfig;
use crate::core::controller::BackStackController;
use crate::core::error::NavigationError;
use crate::core::route::RouteRegistry;

pub struct App {
    pub controller: BackStackController,
    /// Bottom-first routes as last published by the controller.
    routes: Rc<RefCell<Vec<String>>>,
    pub status_message: String,
    pub stack_order: StackOrder,
    pub show_count: bool,
}

impl App {
    /// Builds the sample app from a resolved config.
    ///
    /// Fails if the configured start destination isn't one of the sample routes.
    pub fn from_config(config: &ResolvedConfig) -> Result<Self, NavigationError> {
        let mut registry = RouteRegistry::sample();
        registry.set_start(&config.start_destination)?;

        let mut app = Self::with_registry(registry);
        app.stack_order = config.stack_order;
        app.show_count = config.show_count;
        Ok(app)
    }

    /// Sample app starting at `start`.
    pub fn with_start(start: &str) -> Result<Self, NavigationError> {
        let mut registry = RouteRegistry::sample();
        registry.set_start(start)?;
        Ok(Self::with_registry(registry))
    }

    pub fn with_registry(registry: RouteRegistry) -> Self {
        let mut controller = BackStackController::new(registry);
        let routes = Rc::new(RefCell::new(controller.current_stack()));

        let sink = Rc::clone(&routes);
        controller.subscribe(move |latest| *sink.borrow_mut() = latest.to_vec());

        Self {
            controller,
            routes,
            status_message: String::from("Welcome to Backstack!"),
            stack_order: StackOrder::default(),
            show_count: true,
        }
    }

    /// Bottom-first routes, as observed through the controller subscription.
    pub fn routes(&self) -> Vec<String> {
        self.routes.borrow().clone()
    }

    /// Routes in the configured display order.
    pub fn display_routes(&self) -> Vec<String> {
        self.stack_order.arrange(&self.routes.borrow())
    }

    pub fn current_route(&self) -> Option<String> {
        self.routes.borrow().last().cloned()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::with_registry(RouteRegistry::sample())
    }
}
