//! TGV Max: a Zellij plugin for searching TGV Max trips.
//!
//! The plugin shows a criteria form (departure and return date ranges, zones,
//! departure stations, arrival station), runs the search on a background worker
//! after a short delay, and presents at most 50 trips sorted by departure in
//! pages of ten, with a CSV export of the whole result set.

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Keys, timers, IPC
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Criteria form and pager                          │
//! │  - Event handling, request supersession             │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Worker Layer  │   │ Export        │
//! │ (ui/)         │   │ (worker/)     │   │ (export/)     │
//! │ - Rendering   │   │ - Search      │   │ - CSV writer  │
//! │ - Theming     │   │ - Export I/O  │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                              │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Storage & Infrastructure                   │
//! │  - Trip, criteria, network, result set (domain/)    │
//! │  - JSON trip fixture (storage/)                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry spans to a rotating OTLP file      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/tgvmax.wasm" {
//!         theme "tgvmax"
//!         export_dir "~/Downloads"
//!         search_delay_ms "500"
//!         filter "ignore"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Search Flow
//!
//! 1. The form is submitted (`s`, or Enter outside a date field).
//! 2. `handle_event` takes a new request id and returns `Action::ScheduleSearch`.
//! 3. When the timer fires the search is posted to the worker, unless a newer
//!    one was submitted meanwhile.
//! 4. The worker builds the `ResultSet` (filter, sort, cap at 50) and replies
//!    with the request id; replies for superseded ids are dropped.
//!
//! # Example
//!
//! ```rust
//! use tgvmax::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! for event in [Event::FocusNext, Event::Submit, Event::SearchTimerElapsed] {
//!     let (_render, actions) = handle_event(&mut state, &event)?;
//!     // Execute actions...
//!     # let _ = actions;
//! }
//! # Ok::<(), tgvmax::TgvMaxError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod export;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event, InputMode, Panel};
pub use domain::{FilterPolicy, ResultSet, Result, SearchCriteria, TgvMaxError, Trip};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Default delay between submit and search, in milliseconds.
pub const DEFAULT_SEARCH_DELAY_MS: u64 = 500;

/// Plugin configuration parsed from Zellij's KDL plugin block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Built-in theme: `tgvmax` (default), `catppuccin-mocha`,
    /// `catppuccin-latte`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for spans, e.g. `debug`. Default: `info`.
    pub trace_level: Option<String>,

    /// JSON trip list replacing the embedded fixture.
    pub fixture_file: Option<String>,

    /// Directory receiving CSV exports. `~` expands to the host home;
    /// relative paths resolve against the focused terminal's directory.
    /// Default: `.`
    pub export_dir: String,

    /// Delay between submit and search. Default: 500.
    pub search_delay_ms: u64,

    /// Whether submitted criteria narrow the results. Default: ignore.
    pub filter_policy: FilterPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: None,
            theme_file: None,
            trace_level: None,
            fixture_file: None,
            export_dir: ".".to_string(),
            search_delay_ms: DEFAULT_SEARCH_DELAY_MS,
            filter_policy: FilterPolicy::default(),
        }
    }
}

impl Config {
    /// Parses the configuration map Zellij hands to `load`.
    ///
    /// Unknown keys are ignored; malformed values fall back to their defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use tgvmax::{Config, FilterPolicy};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("search_delay_ms".to_string(), "250".to_string());
    /// map.insert("filter".to_string(), "apply".to_string());
    /// map.insert("export_dir".to_string(), "~/Downloads".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.search_delay_ms, 250);
    /// assert_eq!(config.filter_policy, FilterPolicy::Apply);
    /// assert_eq!(config.export_dir, "~/Downloads");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let non_empty = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        let search_delay_ms = config.get("search_delay_ms").map_or(DEFAULT_SEARCH_DELAY_MS, |raw| {
            raw.trim().parse::<u64>().unwrap_or_else(|e| {
                tracing::debug!(value = %raw, error = %e, "invalid search_delay_ms, using default");
                DEFAULT_SEARCH_DELAY_MS
            })
        });

        let filter_policy = config.get("filter").map_or_else(FilterPolicy::default, |raw| {
            FilterPolicy::from_name(raw.trim()).unwrap_or_else(|| {
                tracing::debug!(value = %raw, "unknown filter policy, using default");
                FilterPolicy::default()
            })
        });

        Self {
            theme_name: non_empty("theme"),
            theme_file: non_empty("theme_file"),
            trace_level: non_empty("trace_level"),
            fixture_file: non_empty("fixture_file"),
            export_dir: non_empty("export_dir").unwrap_or_else(|| ".".to_string()),
            search_delay_ms,
            filter_policy,
        }
    }

    /// Resolves the configured theme, falling back to the default one.
    #[must_use]
    pub fn theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            match Theme::from_file(infrastructure::expand_tilde(theme_file)) {
                Ok(theme) => return theme,
                Err(e) => {
                    tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme file, using default");
                }
            }
        }

        self.theme_name
            .as_deref()
            .and_then(|name| {
                let theme = Theme::from_name(name);
                if theme.is_none() {
                    tracing::debug!(theme_name = %name, "unknown theme, using default");
                }
                theme
            })
            .unwrap_or_default()
    }
}

/// Creates the application state for `config`.
///
/// No trips are loaded yet; the worker reports them once the fixture is read.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        filter = ?config.filter_policy,
        search_delay_ms = config.search_delay_ms,
        "initializing tgvmax plugin"
    );

    AppState::new(config.theme(), config)
}
