//! Shared test fixtures.

use std::sync::Mutex;

use crate::channel::EventSink;
use crate::error::OverlayResult;
use crate::wire::OutboundEvent;

/// Sink that records every event for later inspection.
#[derive(Debug, Default)]
pub struct RecordingSink {
    sent: Mutex<Vec<OutboundEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the recorded events.
    #[allow(clippy::unwrap_used)]
    pub fn taken(&self) -> Vec<OutboundEvent> {
        std::mem::take(&mut *self.sent.lock().unwrap())
    }
}

impl EventSink for RecordingSink {
    fn send(&self, event: OutboundEvent) -> OverlayResult<()> {
        #[allow(clippy::unwrap_used)]
        self.sent.lock().unwrap().push(event);
        Ok(())
    }
}
