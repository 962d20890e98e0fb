//! Upward "can refine" signalling.
//!
//! An enclosing coordinator (a panel that hides empty facets, for instance)
//! injects a [`CapabilityChannel`] when it builds the menu. The menu pushes the
//! current `can_refine` prop into it on mount and on every property update and
//! never reads anything back. Without a channel the report is skipped.

use std::fmt;

/// Receiver of capability reports.
///
/// Implemented for any `FnMut(bool)`, so a closure is enough:
///
/// ```
/// use facet_menu::menu::{CapabilityChannel, CapabilityReporter};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let last = Rc::new(Cell::new(None));
/// let sink = Rc::clone(&last);
/// let mut reporter = CapabilityReporter::new(Some(Box::new(move |v: bool| sink.set(Some(v)))));
/// reporter.report(false);
/// assert_eq!(last.get(), Some(false));
/// ```
pub trait CapabilityChannel {
    /// Receives the current `can_refine` value. Last write wins.
    fn can_refine(&mut self, can_refine: bool);
}

impl<F: FnMut(bool)> CapabilityChannel for F {
    fn can_refine(&mut self, can_refine: bool) {
        self(can_refine);
    }
}

/// Observable capability state of a mounted menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityState {
    CanRefine,
    CannotRefine,
}

impl From<bool> for CapabilityState {
    fn from(can_refine: bool) -> Self {
        if can_refine {
            Self::CanRefine
        } else {
            Self::CannotRefine
        }
    }
}

/// Forwards `can_refine` to an optional channel.
pub struct CapabilityReporter {
    channel: Option<Box<dyn CapabilityChannel>>,
    state: Option<CapabilityState>,
}

impl CapabilityReporter {
    #[must_use]
    pub fn new(channel: Option<Box<dyn CapabilityChannel>>) -> Self {
        Self { channel, state: None }
    }

    /// Pushes `can_refine` into the channel, if any.
    pub fn report(&mut self, can_refine: bool) {
        let next = CapabilityState::from(can_refine);
        if self.state != Some(next) {
            tracing::debug!(previous = ?self.state, next = ?next, "capability transition");
        }
        self.state = Some(next);

        match self.channel.as_mut() {
            Some(channel) => channel.can_refine(can_refine),
            None => tracing::trace!(can_refine, "no capability channel, skipping report"),
        }
    }

    /// State derived from the last reported prop, `None` before mount.
    #[must_use]
    pub const fn state(&self) -> Option<CapabilityState> {
        self.state
    }
}

impl fmt::Debug for CapabilityReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapabilityReporter")
            .field("has_channel", &self.channel.is_some())
            .field("state", &self.state)
            .finish()
    }
}
