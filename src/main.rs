//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the `tgvmax` library and the Zellij plugin
//! system. It implements `ZellijPlugin` here and registers the library's
//! `ZellijWorker` so that fixture loading, searching and CSV writing run off the
//! render thread.
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │
//! │  │  State (plugin)  │   │  ← Form, pager, search scheduling
//! │  └──────────────────┘   │
//! │          │              │
//! │          │ IPC          │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │  TgvMaxWorker    │   │  ← Trip source, result sets
//! │  │ (worker thread)  │   │  ← CSV export
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Key, `CustomMessage`, `Timer`, `PermissionRequestResult`
//! 3. **Permissions**: Once answered, the worker loads the trip fixture
//! 4. **Update**: Translate events, delegate to `handle_event`, run actions
//! 5. **Render**: Call the library render function
//!
//! # Keybindings
//!
//! Form panel:
//! - `j`/`Down`, `k`/`Up`: Next / previous field
//! - `h`/`Left`, `l`/`Right`: Previous / next option (dates move by one day)
//! - `Space`: Toggle the departure station under the cursor
//! - `Enter`: Edit the focused date, or submit
//! - `s`: Submit
//! - `i`: Swap departure and arrival
//! - `x`: Clear the focused field
//!
//! Results panel:
//! - `h`/`Left`, `l`/`Right`: Previous / next page
//! - `e`: Export the results as CSV
//!
//! Everywhere:
//! - `Tab`: Switch panel
//! - `Esc`: Dismiss the status line
//! - `q`: Close plugin
//!
//! While editing a date, printable keys are typed, `Backspace` deletes, `Enter`
//! commits and `Esc` cancels.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use tgvmax::worker::{TgvMaxWorker, WorkerMessage, WorkerResponse};
use tgvmax::{handle_event, Action, Config, Event, InputMode, Panel};

register_plugin!(State);
register_worker!(TgvMaxWorker, tgvmax_worker, TGVMAX_WORKER);

/// Plugin state wrapper.
struct State {
    /// Core application state from library layer.
    app: tgvmax::AppState,

    /// Worker thread identifier for IPC messaging.
    worker_name: String,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: tgvmax::initialize(&Config::default()),
            worker_name: "tgvmax".to_string(),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, initializes tracing and state, requests host
    /// filesystem access and subscribes to events.
    ///
    /// The trip fixture is requested once the permission prompt is answered.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        tgvmax::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            export_dir = %config.export_dir,
            search_delay_ms = config.search_delay_ms,
            filter = ?config.filter_policy,
            "parsed configuration"
        );
        self.app = tgvmax::initialize(&config);

        request_permission(&[PermissionType::FullHdAccess]);

        subscribe(&[
            EventType::Key,
            EventType::CustomMessage,
            EventType::Timer,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Translates Zellij events to library events, delegates to
    /// `handle_event` and executes the resulting actions.
    ///
    /// Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match self.map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::SearchTimerElapsed,
            zellij_tile::prelude::Event::PermissionRequestResult(status) => Event::PermissionsResult {
                granted: matches!(status, PermissionStatus::Granted),
            },
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        tgvmax::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if let InputMode::EditingDate(_) = self.app.input_mode {
            return Some(match key.bare_key {
                BareKey::Enter => Event::Activate,
                BareKey::Esc => Event::Escape,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            });
        }

        let in_form = self.app.panel == Panel::Form;
        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::FocusNext,
            BareKey::Up | BareKey::Char('k') => Event::FocusPrevious,
            BareKey::Left | BareKey::Char('h') if in_form => Event::PreviousOption,
            BareKey::Right | BareKey::Char('l') if in_form => Event::NextOption,
            BareKey::Left | BareKey::Char('h') => Event::PreviousPage,
            BareKey::Right | BareKey::Char('l') => Event::NextPage,
            BareKey::Char(' ') => Event::ToggleStation,
            BareKey::Enter => Event::Activate,
            BareKey::Char('s') => Event::Submit,
            BareKey::Char('i') => Event::Invert,
            BareKey::Char('x') => Event::ClearField,
            BareKey::Char('e') => Event::Export,
            BareKey::Tab => Event::SwitchPanel,
            BareKey::Esc => Event::Escape,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Maps custom message events to application events.
    fn map_custom_message_event(&self, message: &str, payload: &str) -> Option<Event> {
        tracing::debug!(message_name = %message, payload_len = payload.len(), "custom message event");

        if message != self.worker_name {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }

        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => Some(Event::WorkerResponse(response)),
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker response");
                None
            }
        }
    }

    /// Serializes `message` as JSON and posts it to the worker.
    ///
    /// Serialization errors are logged, not propagated.
    fn post_worker_message(&self, message: &WorkerMessage) {
        match serde_json::to_string(&message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(self.worker_name.clone()),
                    name: self.worker_name.clone(),
                    payload,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker message");
            }
        }
    }

    /// Executes an action returned from event handling.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => hide_self(),
            Action::PostToWorker(ref message) => self.post_worker_message(message),
            Action::ScheduleSearch { delay_secs } => {
                tracing::debug!(delay_secs, "scheduling search");
                set_timeout(*delay_secs);
            }
        }
    }
}
