//! # Routes
//!
//! The set of destinations the app knows about. Navigating anywhere else
//! fails with `NavigationError::RouteNotFound`.

use log::debug;

use crate::core::error::NavigationError;

pub const ROUTE_A: &str = "A";
pub const ROUTE_B: &str = "B";
pub const ROUTE_C: &str = "C";

/// Registered route identifiers plus the start destination.
#[derive(Debug, Clone)]
pub struct RouteRegistry {
    routes: Vec<String>,
    start: String,
}

impl RouteRegistry {
    /// Creates a registry whose only route is `start`.
    pub fn new(start: impl Into<String>) -> Self {
        let start = start.into();
        Self {
            routes: vec![start.clone()],
            start,
        }
    }

    /// The three sample screens, starting at A.
    pub fn sample() -> Self {
        let mut registry = Self::new(ROUTE_A);
        registry.register(ROUTE_B);
        registry.register(ROUTE_C);
        registry
    }

    /// Adds a route. Registering an existing route is ignored.
    pub fn register(&mut self, route: impl Into<String>) {
        let route = route.into();
        if self.contains(&route) {
            debug!("Route {:?} already registered", route);
            return;
        }
        self.routes.push(route);
    }

    /// Makes `route` the start destination. It must already be registered.
    pub fn set_start(&mut self, route: &str) -> Result<(), NavigationError> {
        let route = self.resolve(route)?.to_string();
        self.start = route;
        Ok(())
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn routes(&self) -> &[String] {
        &self.routes
    }

    pub fn contains(&self, route: &str) -> bool {
        self.routes.iter().any(|r| r == route)
    }

    /// Looks up `route`, failing with `RouteNotFound` if it is unknown.
    pub fn resolve(&self, route: &str) -> Result<&str, NavigationError> {
        self.routes
            .iter()
            .find(|r| *r == route)
            .map(String::as_str)
            .ok_or_else(|| NavigationError::RouteNotFound(route.to_string()))
    }
}

impl Default for RouteRegistry {
    fn default() -> Self {
        Self::sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_registers_three_routes() {
        let registry = RouteRegistry::sample();
        assert_eq!(registry.routes(), ["A", "B", "C"]);
        assert_eq!(registry.start(), "A");
    }

    #[test]
    fn test_register_ignores_duplicates() {
        let mut registry = RouteRegistry::sample();
        registry.register("B");
        assert_eq!(registry.routes().len(), 3);
    }

    #[test]
    fn test_resolve_unknown_route() {
        let registry = RouteRegistry::sample();
        assert_eq!(
            registry.resolve("D"),
            Err(NavigationError::RouteNotFound("D".to_string()))
        );
    }

    #[test]
    fn test_set_start_requires_registered_route() {
        let mut registry = RouteRegistry::sample();
        assert!(registry.set_start("C").is_ok());
        assert_eq!(registry.start(), "C");
        assert!(registry.set_start("Z").is_err());
        assert_eq!(registry.start(), "C");
    }
}
