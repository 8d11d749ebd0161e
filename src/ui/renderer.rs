//! Top-level rendering coordinator.
//!
//! Computes the view model from application state, then hands it to the
//! layout renderer.

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout with ANSI escapes.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel();

    tracing::trace!(rows, cols, results = ?std::mem::discriminant(&viewmodel.results), "rendering frame");

    components::render_layout(&viewmodel, &state.theme, cols, rows);
}
