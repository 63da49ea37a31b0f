//! Wire-level events exchanged with the backend.
//!
//! Event type names and payload keys follow the backend's message handler
//! and must stay stable. Optional payload fields serialize as explicit
//! `null` values so every message of a given type carries the same key set.

use serde::Serialize;
use serde_json::{json, Value};

use crate::error::{OverlayError, OverlayResult};
use crate::types::{BandwidthUnit, CostType};

/// Key of the candidate/token buffer array in inbound payloads.
const BUFFER_ARRAY: &str = "a";

/// Mode carried by the initial `vnQuerymsg` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryMode {
    Show,
    Remove,
    Update,
}

impl QueryMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Show => "show",
            Self::Remove => "remove",
            Self::Update => "update",
        }
    }
}

/// Outbound event, one per user-triggered action.
#[derive(Debug, Clone, PartialEq)]
pub enum OutboundEvent {
    /// Ask for the candidate VN list for the given mode
    Query { mode: QueryMode },
    /// Display the paths of one VN picked from the query dialog
    QueryHandle { vnid: String },
    /// Remove one VN picked from the removal dialog
    RemoveHandle { vnid: String },
    /// Start the constraint-edit round trip for one VN
    UpdateHandle { vnid: String },
    /// Commit edited constraints (exactly one per constraint dialog)
    UpdateConstraints {
        bw: Option<String>,
        bwtype: Option<BandwidthUnit>,
        ctype: Option<CostType>,
    },
    /// Mark a node as path source
    SetSource { id: String },
    /// Mark a node as path destination
    SetDestination { id: String },
    /// Create a new VN path from the setup dialog
    SetupPath {
        bw: Option<String>,
        bwtype: Option<BandwidthUnit>,
        ctype: Option<CostType>,
        vn_name: String,
    },
    /// Drop all highlighting (fire-and-forget, no payload)
    Clear,
    /// Highlight the known devices (fire-and-forget, no payload)
    DeviceHighlight,
}

impl OutboundEvent {
    /// Wire name of the event.
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Query { .. } => "vnQuerymsg",
            Self::QueryHandle { .. } => "vnQuerymsgHandle",
            Self::RemoveHandle { .. } => "vnRemovemsgHandle",
            Self::UpdateHandle { .. } => "vnUpdatemsgHandle",
            Self::UpdateConstraints { .. } => "vnUpdatemsgHandleConstr",
            Self::SetSource { .. } => "pceTopovSetSrc",
            Self::SetDestination { .. } => "pceTopovSetDst",
            Self::SetupPath { .. } => "vnSetup",
            Self::Clear => "vnClear",
            Self::DeviceHighlight => "vnDeviceHighlight",
        }
    }

    /// JSON payload. Events without one produce an empty object.
    pub fn payload(&self) -> Value {
        match self {
            Self::Query { mode } => json!({ "query": mode }),
            Self::QueryHandle { vnid }
            | Self::RemoveHandle { vnid }
            | Self::UpdateHandle { vnid } => json!({ "vnid": vnid }),
            Self::UpdateConstraints { bw, bwtype, ctype } => json!({
                "bw": bw,
                "bwtype": bwtype,
                "ctype": ctype,
            }),
            Self::SetSource { id } | Self::SetDestination { id } => json!({ "id": id }),
            Self::SetupPath {
                bw,
                bwtype,
                ctype,
                vn_name,
            } => json!({
                "bw": bw,
                "bwtype": bwtype,
                "ctype": ctype,
                "vnName": vn_name,
            }),
            Self::Clear | Self::DeviceHighlight => json!({}),
        }
    }
}

/// Inbound event types, each tied to at most one pending registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InboundKind {
    QueryCandidates,
    RemovalCandidates,
    UpdateCandidates,
    UpdateConstraints,
}

impl InboundKind {
    /// Wire name of the event.
    pub fn event_type(self) -> &'static str {
        match self {
            Self::QueryCandidates => "showVnInfoMsg",
            Self::RemovalCandidates => "showVnInfoMsgRem",
            Self::UpdateCandidates => "showVnInfoMsgUpdate",
            Self::UpdateConstraints => "showVnInfoMsgUpdateCnstrs",
        }
    }

    pub fn from_event_type(name: &str) -> Option<Self> {
        match name {
            "showVnInfoMsg" => Some(Self::QueryCandidates),
            "showVnInfoMsgRem" => Some(Self::RemovalCandidates),
            "showVnInfoMsgUpdate" => Some(Self::UpdateCandidates),
            "showVnInfoMsgUpdateCnstrs" => Some(Self::UpdateConstraints),
            _ => None,
        }
    }
}

/// One event received from the backend.
#[derive(Debug, Clone)]
pub struct InboundEvent {
    pub kind: InboundKind,
    pub payload: Value,
}

impl InboundEvent {
    pub fn new(kind: InboundKind, payload: Value) -> Self {
        Self { kind, payload }
    }
}

/// Extract the buffer array (`"a"`) of an inbound payload as strings.
///
/// Used for both candidate lists and constraint token streams.
pub fn buffer_array(payload: &Value) -> OverlayResult<Vec<String>> {
    let array = payload
        .get(BUFFER_ARRAY)
        .and_then(Value::as_array)
        .ok_or_else(|| OverlayError::MalformedPayload(format!("missing \"{BUFFER_ARRAY}\" array")))?;

    array
        .iter()
        .map(|v| {
            v.as_str().map(ToString::to_string).ok_or_else(|| {
                OverlayError::MalformedPayload(format!("non-string entry in \"{BUFFER_ARRAY}\": {v}"))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_payload_carries_fixed_key_set() {
        // Unchecked groups must surface as nulls, never as missing keys.
        let event = OutboundEvent::SetupPath {
            bw: None,
            bwtype: None,
            ctype: None,
            vn_name: String::new(),
        };
        let payload = event.payload();

        assert!(payload.get("bw").is_some_and(Value::is_null));
        assert!(payload.get("bwtype").is_some_and(Value::is_null));
        assert!(payload.get("ctype").is_some_and(Value::is_null));
        assert_eq!(payload.get("vnName"), Some(&json!("")));
    }

    #[test]
    fn setup_payload_serializes_units_lowercase() {
        let event = OutboundEvent::SetupPath {
            bw: Some("100".to_string()),
            bwtype: Some(BandwidthUnit::Mbps),
            ctype: Some(CostType::Igp),
            vn_name: "net1".to_string(),
        };

        assert_eq!(
            event.payload(),
            json!({ "bw": "100", "bwtype": "mbps", "ctype": "igp", "vnName": "net1" })
        );
    }

    #[test]
    fn query_payload_carries_mode() {
        let event = OutboundEvent::Query {
            mode: QueryMode::Remove,
        };
        assert_eq!(event.event_type(), "vnQuerymsg");
        assert_eq!(event.payload(), json!({ "query": "remove" }));
    }

    #[test]
    fn fire_and_forget_events_have_empty_payload() {
        assert_eq!(OutboundEvent::Clear.payload(), json!({}));
        assert_eq!(OutboundEvent::DeviceHighlight.payload(), json!({}));
    }

    #[test]
    fn inbound_kind_round_trips_event_type() {
        for kind in [
            InboundKind::QueryCandidates,
            InboundKind::RemovalCandidates,
            InboundKind::UpdateCandidates,
            InboundKind::UpdateConstraints,
        ] {
            assert_eq!(InboundKind::from_event_type(kind.event_type()), Some(kind));
        }
        assert_eq!(InboundKind::from_event_type("nope"), None);
    }

    #[test]
    fn buffer_array_reads_strings() {
        let payload = json!({ "a": ["vnA", "vnB"] });
        assert_eq!(buffer_array(&payload).unwrap(), ["vnA", "vnB"]);
    }

    #[test]
    fn buffer_array_rejects_malformed_payloads() {
        assert!(buffer_array(&json!({})).is_err());
        assert!(buffer_array(&json!({ "a": "not-an-array" })).is_err());
        assert!(buffer_array(&json!({ "a": [1, 2] })).is_err());
    }
}
