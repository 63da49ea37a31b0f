//! Outbound messaging seam.

use crate::error::OverlayResult;
use crate::wire::OutboundEvent;

/// Sink for outbound events.
///
/// Implementations must not block: dispatch happens on the UI thread.
pub trait EventSink {
    fn send(&self, event: OutboundEvent) -> OverlayResult<()>;
}
