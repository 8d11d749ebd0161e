//! Focus and input mode types.
//!
//! The screen is split between the criteria form and the results panel; one of
//! them has keyboard focus. Independently, a date field may be open for text
//! entry, in which case every printable key goes to the edit buffer.
//!
//! # Example
//!
//! ```rust
//! use tgvmax::app::modes::{InputMode, Panel};
//! use tgvmax::app::form::DateField;
//!
//! let input_mode = InputMode::EditingDate(DateField::DepartureFrom);
//! let panel = Panel::Form;
//! assert_ne!(input_mode, InputMode::Normal);
//! assert_eq!(panel.toggled(), Panel::Results);
//! ```

use super::form::DateField;

/// Panel holding keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    /// Criteria form: field navigation, option cycling, submit.
    Form,

    /// Results: paging and export.
    Results,
}

impl Panel {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Form => Self::Results,
            Self::Results => Self::Form,
        }
    }
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys are commands.
    Normal,

    /// Keys edit the text of a date bound until Enter or Esc.
    EditingDate(DateField),
}
