//! VN Overlay Core Library
//!
//! Platform-independent logic for the virtual-network (VN) path overlay:
//! - Wire events exchanged with the backend over an established channel
//! - Command dispatch (user action -> outbound event)
//! - One-shot response-handler registrations
//! - Dialog form models and confirm-time read-back
//!
//! This library owns no terminal or transport code; the front end supplies
//! an [`EventSink`] for the outbound half of the channel and feeds inbound
//! events through [`VnOverlay::on_inbound`].

pub mod channel;
pub mod error;
pub mod forms;
pub mod overlay;
pub mod registry;
pub mod types;
pub mod wire;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use channel::EventSink;
pub use error::{OverlayError, OverlayResult};
pub use forms::{
    BandwidthGroup, CandidateEntry, CandidateFlow, CandidateForm, ConstraintField, ConstraintForm,
    CostGroup, SetupForm,
};
pub use overlay::{DialogRequest, VnOverlay};
pub use types::{BandwidthUnit, ConstraintProfile, CostType, Selection};
pub use wire::{InboundEvent, InboundKind, OutboundEvent, QueryMode};
