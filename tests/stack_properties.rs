//! Property-based tests for the back stack

use backstack::core::back_stack::NavOptions;
use backstack::core::controller::BackStackController;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Navigate {
        route: &'static str,
        single_top: bool,
        pop_up_to: Option<(&'static str, bool)>,
    },
    Pop,
}

fn route() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("A"), Just("B"), Just("C")]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (route(), any::<bool>(), proptest::option::of((route(), any::<bool>()))).prop_map(
            |(route, single_top, pop_up_to)| Op::Navigate {
                route,
                single_top,
                pop_up_to,
            }
        ),
        Just(Op::Pop),
    ]
}

fn apply(controller: &mut BackStackController, op: &Op) {
    match op {
        Op::Navigate {
            route,
            single_top,
            pop_up_to,
        } => {
            let mut options = NavOptions::default();
            if *single_top {
                options = options.single_top();
            }
            if let Some((target, inclusive)) = pop_up_to {
                options = options.pop_up_to(*target, *inclusive);
            }
            controller.navigate(route, &options).unwrap();
        }
        Op::Pop => {
            controller.pop_back_stack();
        }
    }
}

/// Property: navigate and plain pops never empty the stack
#[test]
fn prop_stack_never_empty() {
    proptest!(|(ops in prop::collection::vec(op(), 0..64))| {
        let mut controller = BackStackController::default();
        for op in &ops {
            apply(&mut controller, op);
            prop_assert!(!controller.is_empty());
        }
    });
}

/// Property: after a navigate the visible screen is the navigated route
#[test]
fn prop_navigate_lands_on_route() {
    proptest!(|(ops in prop::collection::vec(op(), 0..32), last in route(), single_top in any::<bool>())| {
        let mut controller = BackStackController::default();
        for op in &ops {
            apply(&mut controller, op);
        }
        let mut options = NavOptions::default();
        if single_top {
            options = options.single_top();
        }
        controller.navigate(last, &options).unwrap();
        prop_assert_eq!(controller.current_route(), Some(last));
    });
}

/// Property: single-top never leaves two equal routes on top
#[test]
fn prop_single_top_never_duplicates_top() {
    proptest!(|(routes in prop::collection::vec(route(), 1..32))| {
        let mut controller = BackStackController::default();
        for route in &routes {
            controller.navigate(route, &NavOptions::default().single_top()).unwrap();
            let stack = controller.current_stack();
            let n = stack.len();
            prop_assert!(n < 2 || stack[n - 1] != stack[n - 2]);
        }
    });
}

/// Property: reading the stack twice without a mutation gives the same answer
#[test]
fn prop_current_stack_idempotent() {
    proptest!(|(ops in prop::collection::vec(op(), 0..32))| {
        let mut controller = BackStackController::default();
        for op in &ops {
            apply(&mut controller, op);
        }
        prop_assert_eq!(controller.current_stack(), controller.current_stack());
    });
}

/// Property: popping to a route absent from the stack changes nothing
#[test]
fn prop_pop_to_missing_route_is_noop() {
    proptest!(|(ops in prop::collection::vec(op(), 0..32), inclusive in any::<bool>())| {
        let mut controller = BackStackController::default();
        for op in &ops {
            apply(&mut controller, op);
        }
        let before = controller.current_stack();
        prop_assert!(!controller.pop_back_stack_to("Z", inclusive));
        prop_assert_eq!(controller.current_stack(), before);
    });
}
