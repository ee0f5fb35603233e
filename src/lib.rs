//! Backstack library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod core;
pub mod replay;
pub mod tui;

/// Which end of the back stack the stack panel lists first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StackOrder {
    /// Visible screen first, start destination last.
    #[default]
    TopFirst,
    /// Start destination first, visible screen last.
    BottomFirst,
}

impl StackOrder {
    /// Orders a bottom-first route list for display.
    pub fn arrange(self, bottom_first: &[String]) -> Vec<String> {
        match self {
            StackOrder::TopFirst => bottom_first.iter().rev().cloned().collect(),
            StackOrder::BottomFirst => bottom_first.to_vec(),
        }
    }
}

impl std::str::FromStr for StackOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <StackOrder as ValueEnum>::from_str(s, true)
    }
}
