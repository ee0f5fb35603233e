use backstack::core::action::{Action, update};
use backstack::core::back_stack::NavOptions;
use backstack::core::controller::BackStackController;
use backstack::core::error::NavigationError;
use backstack::core::route::RouteRegistry;
use backstack::core::state::App;
use backstack::replay::replay;

// ============================================================================
// Helper Functions
// ============================================================================

/// Presses buttons on screen, failing the test if a button isn't offered.
fn press(app: &mut App, actions: &[Action]) {
    replay(app, actions).unwrap();
}

/// A → B → C, verifying the intermediate stack.
fn app_at_abc() -> App {
    let mut app = App::default();
    press(&mut app, &[Action::GoToB, Action::GoToC]);
    assert_eq!(app.routes(), vec!["A", "B", "C"]);
    app
}

// ============================================================================
// Button Scenarios
// ============================================================================

#[test]
fn test_initial_back_stack_contains_only_start_destination() {
    let app = App::default();
    assert_eq!(app.routes(), vec!["A"]);
}

#[test]
fn test_a_is_stacked_twice_when_navigating_to_a_from_a() {
    let mut app = App::default();
    press(&mut app, &[Action::GoToA]);
    assert_eq!(app.routes(), vec!["A", "A"]);
}

#[test]
fn test_a_is_not_stacked_twice_with_launch_single_top() {
    let mut app = App::default();
    press(&mut app, &[Action::GoToASingleTop]);
    assert_eq!(app.routes(), vec!["A"]);
}

#[test]
fn test_all_routes_popped_once_with_pop_up_to_inclusive() {
    let mut app = app_at_abc();
    press(&mut app, &[Action::GoToAPopUpToInclusive]);
    assert_eq!(app.routes(), vec!["A"]);
}

#[test]
fn test_a_is_not_popped_with_pop_up_to_only() {
    let mut app = app_at_abc();
    press(&mut app, &[Action::GoToAPopUpTo]);
    assert_eq!(app.routes(), vec!["A", "A"]);
}

#[test]
fn test_back_to_a_without_inclusive_keeps_a() {
    let mut app = app_at_abc();
    press(&mut app, &[Action::BackToA]);
    assert_eq!(app.routes(), vec!["A"]);
}

#[test]
fn test_back_to_a_with_inclusive_leaves_nothing() {
    let mut app = app_at_abc();
    press(&mut app, &[Action::BackToAInclusive]);
    assert!(app.routes().is_empty());
    assert_eq!(app.current_route(), None);
}

#[test]
fn test_pop_up_to_inclusive_from_b_screen() {
    let mut app = App::default();
    press(&mut app, &[Action::GoToB, Action::GoToAPopUpToInclusive]);
    assert_eq!(app.routes(), vec!["A"]);
}

#[test]
fn test_go_back_walks_down_to_start_and_stops() {
    let mut app = app_at_abc();
    press(&mut app, &[Action::Back, Action::Back, Action::Back, Action::Back]);
    assert_eq!(app.routes(), vec!["A"]);
}

#[test]
fn test_buttons_work_with_non_default_start() {
    let mut app = App::with_start("C").unwrap();
    press(&mut app, &[Action::GoToB, Action::GoToC, Action::BackToA]);
    // No A below the top: the pop is a no-op.
    assert_eq!(app.routes(), vec!["C", "B", "C"]);
}

// ============================================================================
// Controller API
// ============================================================================

#[test]
fn test_navigate_to_unregistered_route_fails() {
    let mut controller = BackStackController::new(RouteRegistry::sample());
    let result = controller.navigate("D", &NavOptions::default());
    assert_eq!(result, Err(NavigationError::RouteNotFound("D".to_string())));
    assert_eq!(controller.current_stack(), vec!["A"]);
}

#[test]
fn test_custom_registry_routes_are_navigable() {
    let mut registry = RouteRegistry::new("home");
    registry.register("settings");
    let mut controller = BackStackController::new(registry);

    controller.navigate("settings", &NavOptions::default()).unwrap();
    controller
        .navigate("home", &NavOptions::default().pop_up_to("home", true))
        .unwrap();

    assert_eq!(controller.current_stack(), vec!["home"]);
}

#[test]
fn test_update_surfaces_route_not_found_in_status() {
    // A registry without "B": the "Go to B" button has nowhere to go.
    let mut app = App::with_registry(RouteRegistry::new("A"));
    update(&mut app, Action::GoToB);
    assert_eq!(app.routes(), vec!["A"]);
    assert_eq!(app.status_message, "Go to B: route not found: \"B\"");
}
