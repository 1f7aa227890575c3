//! Alias entity and name rules

use crate::errors::{StoreError, StoreResult};

/// Characters that cannot appear in an alias name because the name is
/// used verbatim as a filename component.
const RESERVED_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// A named shortcut mapping to a command template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    /// Unique key, doubles as the script file stem
    pub name: String,
    /// Display-form value: re-escaped, suppression-marked, unquoted
    pub value: String,
}

impl Alias {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The reusable registration line printed by list/search. The value
    /// is wrapped in quotes for re-entry convenience only; the quoted
    /// form is never parsed back.
    pub fn reusable_line(&self) -> String {
        format!("ally {} \"{}\"", self.name, self.value)
    }
}

/// Check that a name is non-empty and usable as a filename component.
pub fn validate_name(name: &str) -> StoreResult<()> {
    let illegal = name.is_empty()
        || name == "."
        || name == ".."
        || name
            .chars()
            .any(|c| RESERVED_CHARS.contains(&c) || c.is_control());

    if illegal {
        return Err(StoreError::InvalidName(name.to_string()));
    }
    Ok(())
}
