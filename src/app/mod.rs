//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (`main.rs`) and the domain/worker layers.
//!
//! ```text
//! Keys/Timer → Events → handle_event → AppState mutations → Actions → Zellij calls
//!                            ↑                                   ↓
//!                            └───────── Worker responses ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`form`]: Criteria form and its field navigation
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Panel focus and input mode types
//! - [`pagination`]: Ten-row page navigation over results
//! - [`state`]: Central state container and view model computation

pub mod actions;
pub mod form;
pub mod handler;
pub mod modes;
pub mod pagination;
pub mod state;

pub use actions::Action;
pub use form::{DateField, FormField, SearchForm};
pub use handler::{handle_event, Event};
pub use modes::{InputMode, Panel};
pub use pagination::{Pager, PAGE_SIZE};
pub use state::AppState;
