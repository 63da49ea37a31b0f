//! Overlay dispatcher: ties selection, requests, and inbound responses
//! together.
//!
//! Every user-facing operation returns the flash strings the UI should show,
//! so callers decide how to present them. Inbound events flow through
//! [`VnOverlay::on_inbound`], which resolves the one-shot registration and
//! hands back a dialog request for the UI to open.

use crate::channel::EventSink;
use crate::error::OverlayResult;
use crate::forms::{CandidateFlow, CandidateForm, ConstraintForm, SetupForm};
use crate::registry::{PendingAction, ResponseRegistry};
use crate::types::{ConstraintProfile, Selection};
use crate::wire::{buffer_array, InboundEvent, InboundKind, OutboundEvent, QueryMode};

/// Dialog the UI should open in response to an inbound event.
#[derive(Debug)]
pub enum DialogRequest {
    Candidates(CandidateForm),
    Constraints(ConstraintForm),
}

/// The overlay itself. Owns the response registry and the current node
/// selection; all outbound traffic goes through the sink.
pub struct VnOverlay<S: EventSink> {
    sink: S,
    registry: ResponseRegistry,
    selection: Selection,
}

impl<S: EventSink> VnOverlay<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            registry: ResponseRegistry::new(),
            selection: Selection::Empty,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selection_changed(&mut self, selection: Selection) {
        self.selection = selection;
    }

    /// Mark every selected node as a path source. Empty selection sends
    /// nothing and flashes nothing.
    pub fn set_source(&self) -> OverlayResult<Vec<String>> {
        let mut flashes = Vec::new();
        for id in self.selection.ids() {
            self.sink.send(OutboundEvent::SetSource { id: id.clone() })?;
            flashes.push(format!("Source node: {id}"));
        }
        Ok(flashes)
    }

    /// Mark every selected node as a path destination.
    pub fn set_destination(&self) -> OverlayResult<Vec<String>> {
        let mut flashes = Vec::new();
        for id in self.selection.ids() {
            self.sink
                .send(OutboundEvent::SetDestination { id: id.clone() })?;
            flashes.push(format!("Destination node: {id}"));
        }
        Ok(flashes)
    }

    /// Ask for the VN list to display paths from.
    pub fn request_query(&mut self) -> OverlayResult<String> {
        self.request_candidates(
            QueryMode::Show,
            InboundKind::QueryCandidates,
            PendingAction::ShowQueryCandidates,
        )?;
        Ok("VN query message".to_string())
    }

    /// Ask for the VN list to remove from.
    pub fn request_removal(&mut self) -> OverlayResult<String> {
        self.request_candidates(
            QueryMode::Remove,
            InboundKind::RemovalCandidates,
            PendingAction::ShowRemovalCandidates,
        )?;
        Ok("remove path message query".to_string())
    }

    /// Ask for the VN list to update.
    pub fn request_update(&mut self) -> OverlayResult<String> {
        self.request_candidates(
            QueryMode::Update,
            InboundKind::UpdateCandidates,
            PendingAction::ShowUpdateCandidates,
        )?;
        Ok("VN update query message".to_string())
    }

    fn request_candidates(
        &mut self,
        mode: QueryMode,
        kind: InboundKind,
        action: PendingAction,
    ) -> OverlayResult<()> {
        self.registry.bind(kind, action);
        self.sink.send(OutboundEvent::Query { mode })
    }

    /// Commit the path-setup dialog.
    pub fn submit_setup(&self, form: &SetupForm) -> OverlayResult<String> {
        self.sink.send(form.to_event())?;
        Ok("create path message".to_string())
    }

    /// Drop all highlighting.
    pub fn clear_highlighting(&self) -> OverlayResult<String> {
        self.sink.send(OutboundEvent::Clear)?;
        Ok("VN clear message".to_string())
    }

    /// Re-highlight the known devices.
    pub fn highlight_devices(&self) -> OverlayResult<String> {
        self.sink.send(OutboundEvent::DeviceHighlight)?;
        Ok("VN device highlight message".to_string())
    }

    /// Resolve an inbound event against the registry.
    ///
    /// Events nothing is waiting for are dropped. A resolved event consumes
    /// its registration and yields the dialog to open.
    pub fn on_inbound(&mut self, event: &InboundEvent) -> OverlayResult<Option<DialogRequest>> {
        let Some(action) = self.registry.take(event.kind) else {
            log::debug!("no pending action for {:?}, dropping", event.kind);
            return Ok(None);
        };

        let request = match action {
            PendingAction::ShowQueryCandidates => DialogRequest::Candidates(CandidateForm::new(
                CandidateFlow::Query,
                buffer_array(&event.payload)?,
            )),
            PendingAction::ShowRemovalCandidates => DialogRequest::Candidates(CandidateForm::new(
                CandidateFlow::Remove,
                buffer_array(&event.payload)?,
            )),
            PendingAction::ShowUpdateCandidates => DialogRequest::Candidates(CandidateForm::new(
                CandidateFlow::Update,
                buffer_array(&event.payload)?,
            )),
            PendingAction::ShowConstraintEditor => {
                let tokens = buffer_array(&event.payload)?;
                let profile = ConstraintProfile::from_tokens(tokens);
                DialogRequest::Constraints(ConstraintForm::from_profile(profile))
            }
        };
        Ok(Some(request))
    }

    /// Commit a candidate dialog: one message per checked id, in list order.
    ///
    /// The update flow re-binds the constraint response before each send, so
    /// with several ids checked only the last reply still finds a
    /// registration.
    pub fn confirm_candidates(&mut self, form: &CandidateForm) -> OverlayResult<Vec<String>> {
        let mut flashes = Vec::new();
        for vnid in form.checked_ids() {
            match form.flow {
                CandidateFlow::Query => {
                    self.sink.send(OutboundEvent::QueryHandle { vnid })?;
                    flashes.push("query VN path message".to_string());
                }
                CandidateFlow::Remove => {
                    self.sink.send(OutboundEvent::RemoveHandle { vnid })?;
                    flashes.push("remove VN path message".to_string());
                }
                CandidateFlow::Update => {
                    self.registry.bind(
                        InboundKind::UpdateConstraints,
                        PendingAction::ShowConstraintEditor,
                    );
                    self.sink.send(OutboundEvent::UpdateHandle { vnid })?;
                    flashes.push("update VN path message".to_string());
                }
            }
        }
        Ok(flashes)
    }

    /// Commit the constraint dialog: endpoint events for every checked row,
    /// then exactly one constraints message.
    pub fn confirm_constraints(&self, form: &ConstraintForm) -> OverlayResult<String> {
        for event in form.to_events() {
            self.sink.send(event)?;
        }
        Ok("update VN path message".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingSink;
    use serde_json::json;

    fn overlay() -> VnOverlay<RecordingSink> {
        VnOverlay::new(RecordingSink::new())
    }

    #[test]
    fn multi_selection_sends_one_source_event_per_node_in_order() {
        let mut vn = overlay();
        vn.selection_changed(Selection::from_ids(vec![
            "RT1".to_string(),
            "RT2".to_string(),
            "RT3".to_string(),
        ]));

        let flashes = vn.set_source().unwrap();
        assert_eq!(
            flashes,
            ["Source node: RT1", "Source node: RT2", "Source node: RT3"]
        );
        assert_eq!(
            vn.sink.taken(),
            [
                OutboundEvent::SetSource {
                    id: "RT1".to_string()
                },
                OutboundEvent::SetSource {
                    id: "RT2".to_string()
                },
                OutboundEvent::SetSource {
                    id: "RT3".to_string()
                },
            ]
        );
    }

    #[test]
    fn empty_selection_sends_nothing() {
        let vn = overlay();
        assert!(vn.set_source().unwrap().is_empty());
        assert!(vn.set_destination().unwrap().is_empty());
        assert!(vn.sink.taken().is_empty());
    }

    #[test]
    fn unregistered_inbound_events_are_dropped() {
        let mut vn = overlay();
        let event = InboundEvent::new(InboundKind::QueryCandidates, json!({ "a": ["1"] }));
        assert!(vn.on_inbound(&event).unwrap().is_none());
    }

    #[test]
    fn query_response_fires_once() {
        let mut vn = overlay();
        vn.request_query().unwrap();

        let event = InboundEvent::new(InboundKind::QueryCandidates, json!({ "a": ["1", "2"] }));
        let first = vn.on_inbound(&event).unwrap();
        assert!(matches!(
            first,
            Some(DialogRequest::Candidates(ref form))
                if form.flow == CandidateFlow::Query && form.entries.len() == 2
        ));
        assert!(vn.on_inbound(&event).unwrap().is_none());
    }

    #[test]
    fn malformed_candidate_payload_is_an_error() {
        let mut vn = overlay();
        vn.request_query().unwrap();

        let event = InboundEvent::new(InboundKind::QueryCandidates, json!({ "b": [] }));
        assert!(vn.on_inbound(&event).is_err());
    }

    #[test]
    fn removal_flow_end_to_end() {
        let mut vn = overlay();
        assert_eq!(vn.request_removal().unwrap(), "remove path message query");
        assert_eq!(
            vn.sink.taken(),
            [OutboundEvent::Query {
                mode: QueryMode::Remove
            }]
        );

        let event = InboundEvent::new(
            InboundKind::RemovalCandidates,
            json!({ "a": ["123", "456", "789"] }),
        );
        let Some(DialogRequest::Candidates(mut form)) = vn.on_inbound(&event).unwrap() else {
            panic!("expected a candidate dialog");
        };
        assert_eq!(form.flow, CandidateFlow::Remove);

        form.toggle_current();
        form.cursor_down();
        form.cursor_down();
        form.toggle_current();

        let flashes = vn.confirm_candidates(&form).unwrap();
        assert_eq!(flashes, ["remove VN path message", "remove VN path message"]);
        assert_eq!(
            vn.sink.taken(),
            [
                OutboundEvent::RemoveHandle {
                    vnid: "123".to_string()
                },
                OutboundEvent::RemoveHandle {
                    vnid: "789".to_string()
                },
            ]
        );
    }

    #[test]
    fn candidate_confirm_with_nothing_checked_is_a_no_op() {
        let mut vn = overlay();
        let form = CandidateForm::new(CandidateFlow::Query, vec!["1".to_string()]);
        assert!(vn.confirm_candidates(&form).unwrap().is_empty());
        assert!(vn.sink.taken().is_empty());
    }

    #[test]
    fn update_flow_rebinds_the_constraint_response_per_send() {
        let mut vn = overlay();
        vn.request_update().unwrap();

        let event = InboundEvent::new(InboundKind::UpdateCandidates, json!({ "a": ["1", "2"] }));
        let Some(DialogRequest::Candidates(mut form)) = vn.on_inbound(&event).unwrap() else {
            panic!("expected a candidate dialog");
        };
        form.toggle_current();
        form.cursor_down();
        form.toggle_current();
        vn.sink.taken();

        vn.confirm_candidates(&form).unwrap();
        assert_eq!(
            vn.sink.taken(),
            [
                OutboundEvent::UpdateHandle {
                    vnid: "1".to_string()
                },
                OutboundEvent::UpdateHandle {
                    vnid: "2".to_string()
                },
            ]
        );

        // Two replies arrive; only one registration exists, so the second
        // reply is dropped.
        let constraints = InboundEvent::new(
            InboundKind::UpdateConstraints,
            json!({ "a": ["VnName", "net1", "BandWidth", "200", "CostType", "TE",
                          "SRC", "RT1", "DST", "RT2"] }),
        );
        let Some(DialogRequest::Constraints(form)) = vn.on_inbound(&constraints).unwrap() else {
            panic!("expected the constraint dialog");
        };
        assert!(vn.on_inbound(&constraints).unwrap().is_none());

        assert_eq!(
            vn.confirm_constraints(&form).unwrap(),
            "update VN path message"
        );
        let sent = vn.sink.taken();
        assert_eq!(sent.len(), 3);
        assert_eq!(
            sent[2],
            OutboundEvent::UpdateConstraints {
                bw: Some("200".to_string()),
                bwtype: Some(crate::types::BandwidthUnit::Kbps),
                ctype: Some(crate::types::CostType::Te),
            }
        );
    }

    #[test]
    fn setup_and_highlight_flashes() {
        let vn = overlay();
        assert_eq!(
            vn.submit_setup(&SetupForm::new()).unwrap(),
            "create path message"
        );
        assert_eq!(vn.clear_highlighting().unwrap(), "VN clear message");
        assert_eq!(
            vn.highlight_devices().unwrap(),
            "VN device highlight message"
        );
        assert_eq!(
            vn.sink
                .taken()
                .iter()
                .map(OutboundEvent::event_type)
                .collect::<Vec<_>>(),
            ["vnSetup", "vnClear", "vnDeviceHighlight"]
        );
    }
}
