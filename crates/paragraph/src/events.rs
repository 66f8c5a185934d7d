//! Keyboard events delivered by the host.

use std::convert::Infallible;
use std::str::FromStr;

/// Physical key code, parsed from the DOM `KeyboardEvent.code` string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyCode {
    Backspace,
    Delete,
    Other(String),
}

impl KeyCode {
    /// Backspace and Delete remove content
    pub fn is_deletion(&self) -> bool {
        matches!(self, KeyCode::Backspace | KeyCode::Delete)
    }
}

impl FromStr for KeyCode {
    type Err = Infallible;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Ok(match code {
            "Backspace" => KeyCode::Backspace,
            "Delete" => KeyCode::Delete,
            other => KeyCode::Other(other.to_string()),
        })
    }
}

impl From<&str> for KeyCode {
    fn from(code: &str) -> Self {
        match code.parse() {
            Ok(key) => key,
            Err(never) => match never {},
        }
    }
}

/// A key-release event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardEvent {
    pub code: KeyCode,
}

impl KeyboardEvent {
    pub fn new(code: impl Into<KeyCode>) -> Self {
        Self { code: code.into() }
    }
}
