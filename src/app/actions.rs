//! Side effects requested by the event handler.
//!
//! The handler never talks to Zellij directly; it returns [`Action`]s which the
//! plugin shim executes in order.
//!
//! # Example
//!
//! ```rust
//! use tgvmax::app::Action;
//! use tgvmax::worker::WorkerMessage;
//!
//! let actions = vec![
//!     Action::PostToWorker(WorkerMessage::load_fixture(None)),
//!     Action::ScheduleSearch { delay_secs: 0.5 },
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::worker::WorkerMessage;

/// Commands executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Posts a message to the background worker thread.
    PostToWorker(WorkerMessage),

    /// Arms a one-shot timer; its expiry is fed back as
    /// [`Event::SearchTimerElapsed`](super::Event::SearchTimerElapsed).
    ScheduleSearch {
        /// Delay in seconds, as taken by Zellij's `set_timeout`.
        delay_secs: f64,
    },
}
