//! The Menu widget.
//!
//! Exposes one facet as a mutually exclusive choice list. The widget sits
//! between the host's refinement state and the generic [`list`](crate::list)
//! collaborator:
//!
//! ```text
//! host ──MenuProps──→ Menu ──ListConfig + render_item──→ List ──→ MenuView
//!   ↑                  │
//!   └──refine(value)───┘ (after reset_query)
//!        CapabilityChannel ←── can_refine on mount / update
//! ```
//!
//! # Modules
//!
//! - [`mediator`]: [`Menu`], rendering and selection
//! - [`item`]: Per-item view logic
//! - [`capability`]: Upward `can_refine` reporting
//! - [`props`]: [`MenuProps`] and the shared [`ListConfig`]
//! - [`target`]: Host callbacks
//! - [`translations`]: Strings forwarded to the list
//! - [`class_names`]: Element class names

pub mod capability;
pub mod class_names;
pub mod item;
pub mod mediator;
pub mod props;
pub mod target;
pub mod translations;

pub use capability::{CapabilityChannel, CapabilityReporter, CapabilityState};
pub use class_names::ClassNames;
pub use item::render_item;
pub use mediator::Menu;
pub use props::{ListConfig, MenuProps, TransformItems, DEFAULT_LIMIT_MAX, DEFAULT_LIMIT_MIN};
pub use target::RefinementTarget;
pub use translations::{TranslationKey, Translations};
