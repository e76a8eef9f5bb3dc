//! Actions for the counter feature.

use std::str::FromStr;

use thiserror::Error;

use crate::store::Action;

/// User actions dispatched from the counter view. None carry a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterAction {
    Increment,
    Decrement,
    Reset,
}

impl Action for CounterAction {
    fn tag(&self) -> &'static str {
        match self {
            CounterAction::Increment => "[Counter Component] Increment",
            CounterAction::Decrement => "[Counter Component] Decrement",
            CounterAction::Reset => "[Counter Component] Reset",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseActionError {
    #[error("Unknown counter action '{0}' (expected increment, decrement or reset)")]
    Unknown(String),
}

impl FromStr for CounterAction {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "increment" | "inc" | "+" => Ok(CounterAction::Increment),
            "decrement" | "dec" | "-" => Ok(CounterAction::Decrement),
            "reset" | "0" => Ok(CounterAction::Reset),
            _ => Err(ParseActionError::Unknown(trimmed.to_string())),
        }
    }
}
