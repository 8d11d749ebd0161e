//! User interface rendering layer with component-based architecture.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Cursor movement and width-aware padding
//! - [`theme`]: Colour schemes and ANSI escape sequences
//!
//! # Example
//!
//! ```rust,no_run
//! use tgvmax::app::AppState;
//! use tgvmax::ui::{render, Theme};
//! use tgvmax::Config;
//!
//! let state = AppState::new(Theme::default(), &Config::default());
//! render(&state, 40, 120);
//! ```

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    ChecklistItem, EmptyState, FieldValue, FooterInfo, FormRow, FormView, HeaderInfo, PagerInfo,
    ResultsPage, ResultsPanel, UIViewModel,
};
