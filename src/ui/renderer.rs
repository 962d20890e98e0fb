//! Top-level rendering coordinator.
//!
//! Computes the view model from application state and writes one frame to
//! stdout.

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel();
    print!("{}", components::render_screen(&viewmodel, &state.theme, rows, cols));
}
