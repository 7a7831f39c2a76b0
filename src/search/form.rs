//! Form state for the search screen.
//!
//! One plain struct owns every field the user can edit, so the whole screen
//! state is serializable and testable without a terminal.

use serde::{Deserialize, Serialize};

use super::SelectionState;

/// Gearbox filter value. `Unset` means the filter is inactive and will be
/// omitted from the assembled search parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gearbox {
    Automatic,
    Manual,
    #[default]
    Unset,
}

impl Gearbox {
    /// Coerce free text into a gearbox value. Anything that is not exactly
    /// one of the two recognized names resets the filter, silently.
    pub fn coerce(input: &str) -> Self {
        match input {
            "Automatic" => Gearbox::Automatic,
            "Manual" => Gearbox::Manual,
            _ => Gearbox::Unset,
        }
    }

    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            Gearbox::Automatic => Some("Automatic"),
            Gearbox::Manual => Some("Manual"),
            Gearbox::Unset => None,
        }
    }
}

/// Everything the search screen lets the user edit.
///
/// Lives for the lifetime of the screen; nothing resets it after a search,
/// so repeated searches reuse the previous values until the user changes
/// them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormState {
    /// Raw location text, forwarded verbatim when non-empty.
    pub location: String,
    /// Raw seat-count text; parsed at assembly time, never validated here.
    pub seats: String,
    /// Raw gearbox text as typed; `gearbox` below holds the coerced value.
    pub gearbox_input: String,
    pub gearbox: Gearbox,
    pub pets_allowed: bool,
    pub selection: SelectionState,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a gearbox keystroke and re-coerce the filter value.
    pub fn set_gearbox_input(&mut self, input: String) {
        self.gearbox = Gearbox::coerce(&input);
        self.gearbox_input = input;
    }
}
