//! # Navigation Errors
//!
//! Only one navigation failure is surfaced to callers: asking for a route the
//! registry does not know. Popping at the root or popping to a missing target
//! are no-ops, not errors, so a stray button press can never take the UI down.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The route was never registered with the `RouteRegistry`.
    #[error("route not found: {0:?}")]
    RouteNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_not_found_display() {
        let err = NavigationError::RouteNotFound("Z".to_string());
        assert_eq!(err.to_string(), "route not found: \"Z\"");
    }
}
