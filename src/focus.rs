//! Deferred Focus Coordination
//!
//! After a structural change to the line list, keyboard focus should land on
//! the new active line - but the rendering surface may not have realized the
//! change yet within the same update cycle. The coordinator therefore holds
//! the request until the next pump and tags it with the session's structural
//! generation: a request whose generation no longer matches is stale and is
//! dropped as a no-op instead of focusing a superseded line.
//!
//! Focus is advisory. A pending request may be superseded by a newer one at
//! any time; it is never an error for focus not to land.

use crate::session::LineId;

/// A pending focus-and-cursor-placement request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusRequest {
    /// The line that should receive focus, cursor at end of content
    pub line: LineId,
    /// Structural generation the request was issued under
    pub generation: u64,
}

/// Holds at most one authoritative pending focus request
#[derive(Debug, Default)]
pub struct FocusCoordinator {
    pending: Option<FocusRequest>,
}

impl FocusCoordinator {
    /// Create a coordinator with nothing pending
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a focus request, superseding any earlier pending one
    pub fn schedule(&mut self, line: LineId, generation: u64) {
        if self.pending.is_some() {
            debug!("superseding pending focus request");
        }
        self.pending = Some(FocusRequest { line, generation });
    }

    /// Whether a request is waiting to be applied
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Hand out the pending request if it is still current
    ///
    /// Returns the target line only when the request's generation matches
    /// `current_generation`; a stale request is dropped silently either way.
    pub fn take_due(&mut self, current_generation: u64) -> Option<LineId> {
        let request = self.pending.take()?;
        if request.generation == current_generation {
            Some(request.line)
        } else {
            debug!(
                scheduled = request.generation,
                current = current_generation,
                "dropping stale focus request"
            );
            None
        }
    }
}
