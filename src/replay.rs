//! # Replay
//!
//! Headless driver: presses a scripted list of buttons, in order, the way a
//! user would on screen, and records the back stack after each press.
//!
//! ```text
//! $ backstack replay go-to-b go-to-c back-to-a-inclusive
//! go-to-b                  [A, B]
//! go-to-c                  [A, B, C]
//! back-to-a-inclusive      []
//! ```
//!
//! A press is only accepted if the visible screen actually shows that button.

use log::info;
use serde::Serialize;
use thiserror::Error;

use crate::StackOrder;
use crate::core::action::{Action, Effect, available_actions, update};
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("step {step}: {action} is not a button on screen {screen}")]
    NotOnScreen {
        step: usize,
        action: Action,
        screen: String,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct ReplayStep {
    pub action: String,
    pub status: String,
    /// Routes after the press, bottom first.
    pub stack: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub start: Vec<String>,
    pub steps: Vec<ReplayStep>,
}

impl ReplayReport {
    /// Stack after the last step.
    pub fn final_stack(&self) -> &[String] {
        self.steps.last().map_or(&self.start, |s| &s.stack)
    }

    /// Plain-text table, one line per step, stacks in `order`.
    pub fn to_text(&self, order: StackOrder) -> String {
        let mut out = format!("{:<30} [{}]\n", "start", order.arrange(&self.start).join(", "));
        for step in &self.steps {
            out.push_str(&format!(
                "{:<30} [{}]\n",
                step.action,
                order.arrange(&step.stack).join(", ")
            ));
        }
        out
    }
}

/// Presses `actions` in order. Stops early at `Quit`.
pub fn replay(app: &mut App, actions: &[Action]) -> Result<ReplayReport, ReplayError> {
    let mut report = ReplayReport {
        start: app.routes(),
        steps: Vec::with_capacity(actions.len()),
    };

    for (index, &action) in actions.iter().enumerate() {
        let screen = app.current_route();
        if !available_actions(screen.as_deref()).contains(&action) {
            return Err(ReplayError::NotOnScreen {
                step: index + 1,
                action,
                screen: screen.unwrap_or_else(|| "(empty)".to_string()),
            });
        }

        let effect = update(app, action);
        report.steps.push(ReplayStep {
            action: action.id().to_string(),
            status: app.status_message.clone(),
            stack: app.routes(),
        });
        if effect == Effect::Quit {
            info!("Replay stopped at quit (step {})", index + 1);
            break;
        }
    }

    info!("Replay finished: {:?}", report.final_stack());
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_records_each_step() {
        let mut app = App::default();
        let report = replay(&mut app, &[Action::GoToB, Action::GoToC]).unwrap();

        assert_eq!(report.start, vec!["A"]);
        assert_eq!(report.steps.len(), 2);
        assert_eq!(report.steps[0].stack, vec!["A", "B"]);
        assert_eq!(report.final_stack(), ["A", "B", "C"]);
    }

    #[test]
    fn test_replay_rejects_button_missing_from_screen() {
        let mut app = App::default();
        // Screen A has no "Go back to A" button.
        let result = replay(&mut app, &[Action::BackToA]);

        assert_eq!(
            result.unwrap_err(),
            ReplayError::NotOnScreen {
                step: 1,
                action: Action::BackToA,
                screen: "A".to_string(),
            }
        );
    }

    #[test]
    fn test_replay_stops_at_quit() {
        let mut app = App::default();
        let report = replay(
            &mut app,
            &[Action::GoToB, Action::GoToC, Action::BackToAInclusive, Action::Quit, Action::Relaunch],
        )
        .unwrap();

        assert_eq!(report.steps.len(), 4);
        assert!(report.final_stack().is_empty());
    }

    #[test]
    fn test_to_text_lists_stacks_in_order() {
        let mut app = App::default();
        let report = replay(&mut app, &[Action::GoToB]).unwrap();

        let text = report.to_text(StackOrder::TopFirst);

        assert!(text.contains("start"));
        assert!(text.contains("go-to-b"));
        assert!(text.contains("[B, A]"));
    }

    #[test]
    fn test_report_serializes_to_json() {
        let mut app = App::default();
        let report = replay(&mut app, &[Action::GoToA]).unwrap();

        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["steps"][0]["action"], "go-to-a");
        assert_eq!(json["steps"][0]["stack"], serde_json::json!(["A", "A"]));
    }
}
