//! One-shot registrations for inbound responses.
//!
//! Each outbound request that expects a reply binds the reply's event kind
//! to the action to run when it arrives. A binding fires at most once, and
//! re-binding the same kind replaces the previous entry (last wins).

use std::collections::HashMap;

use crate::wire::InboundKind;

/// Action to run when a bound inbound event arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    ShowQueryCandidates,
    ShowRemovalCandidates,
    ShowUpdateCandidates,
    ShowConstraintEditor,
}

#[derive(Debug, Default)]
pub struct ResponseRegistry {
    pending: HashMap<InboundKind, PendingAction>,
}

impl ResponseRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `kind` to `action`, replacing any previous binding.
    pub fn bind(&mut self, kind: InboundKind, action: PendingAction) {
        if let Some(old) = self.pending.insert(kind, action) {
            log::debug!("replaced pending action {old:?} for {kind:?}");
        }
    }

    /// Consume the binding for `kind`, if any.
    pub fn take(&mut self, kind: InboundKind) -> Option<PendingAction> {
        self.pending.remove(&kind)
    }

    pub fn is_pending(&self, kind: InboundKind) -> bool {
        self.pending.contains_key(&kind)
    }
}
