//! Terminal user interface.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → components → ANSI frame
//! ```
//!
//! - [`viewmodel`]: View model types produced by the menu and the app shell
//! - [`renderer`]: Top-level rendering entry point
//! - [`components`]: Composable component renderers
//! - [`helpers`]: Shared rendering utilities (segments, padding)
//! - [`theme`]: Color schemes and ANSI escapes

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    EmptyState, FooterInfo, HeaderInfo, ItemView, LabelView, ListView, MenuView, SearchBoxView,
    Segment, ShowMoreView, UIViewModel,
};
