//! Dialog form state.
//!
//! Each dialog the overlay opens keeps its working state here, away from the
//! rendering layer. Forms convert to outbound events on confirm.

use crate::types::{BandwidthUnit, ConstraintProfile, CostType};
use crate::wire::OutboundEvent;

/// Which candidate-list flow a dialog belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateFlow {
    Query,
    Remove,
    Update,
}

impl CandidateFlow {
    pub fn title(self) -> &'static str {
        match self {
            Self::Query => "Available VNs for query",
            Self::Remove => "Available VNs for remove",
            Self::Update => "Available VNs for update",
        }
    }
}

/// One selectable row in a candidate dialog.
///
/// Rows render as radio-style markers but toggle independently, so several
/// can be checked at once. Confirm acts on every checked row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateEntry {
    pub vnid: String,
    pub checked: bool,
}

/// Candidate-list dialog: pick zero or more VN ids out of a backend list.
#[derive(Debug, Clone)]
pub struct CandidateForm {
    pub flow: CandidateFlow,
    pub entries: Vec<CandidateEntry>,
    pub cursor: usize,
}

impl CandidateForm {
    /// All rows start unchecked.
    pub fn new(flow: CandidateFlow, vnids: Vec<String>) -> Self {
        let entries = vnids
            .into_iter()
            .map(|vnid| CandidateEntry {
                vnid,
                checked: false,
            })
            .collect();
        Self {
            flow,
            entries,
            cursor: 0,
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
        }
    }

    pub fn toggle_current(&mut self) {
        if let Some(entry) = self.entries.get_mut(self.cursor) {
            entry.checked = !entry.checked;
        }
    }

    /// Checked ids in list order.
    pub fn checked_ids(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| e.checked)
            .map(|e| e.vnid.clone())
            .collect()
    }
}

/// Path-setup dialog. Bandwidth and cost groups are off by default and
/// their values only reach the wire while the group checkbox is on.
#[derive(Debug, Clone)]
pub struct SetupForm {
    pub bandwidth_enabled: bool,
    pub bandwidth_value: String,
    pub bandwidth_unit: BandwidthUnit,
    pub cost_enabled: bool,
    pub cost_type: CostType,
    pub name: String,
    // 0 bw checkbox, 1 bw value, 2 bw unit, 3 cost checkbox, 4 cost type, 5 name
    pub focus: usize,
}

impl SetupForm {
    pub const FIELD_COUNT: usize = 6;

    pub fn new() -> Self {
        Self {
            bandwidth_enabled: false,
            bandwidth_value: String::new(),
            bandwidth_unit: BandwidthUnit::default(),
            cost_enabled: false,
            cost_type: CostType::default(),
            name: String::new(),
            focus: 0,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % Self::FIELD_COUNT;
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + Self::FIELD_COUNT - 1) % Self::FIELD_COUNT;
    }

    /// Build the setup event. The name travels even when empty; disabled
    /// groups travel as nulls.
    pub fn to_event(&self) -> OutboundEvent {
        let (bw, bwtype) = if self.bandwidth_enabled {
            (Some(self.bandwidth_value.clone()), Some(self.bandwidth_unit))
        } else {
            (None, None)
        };
        let ctype = self.cost_enabled.then_some(self.cost_type);

        OutboundEvent::SetupPath {
            bw,
            bwtype,
            ctype,
            vn_name: self.name.clone(),
        }
    }
}

impl Default for SetupForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Bandwidth group of the constraint dialog, checked on arrival.
#[derive(Debug, Clone)]
pub struct BandwidthGroup {
    pub enabled: bool,
    pub value: String,
    pub unit: BandwidthUnit,
}

/// Cost group of the constraint dialog, checked on arrival.
#[derive(Debug, Clone)]
pub struct CostGroup {
    pub enabled: bool,
    pub cost_type: CostType,
}

/// Focusable controls of the constraint dialog, in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintField {
    BandwidthToggle,
    BandwidthValue,
    BandwidthUnit,
    CostToggle,
    CostValue,
    Src(usize),
    Dst(usize),
}

/// Constraint-edit dialog, prefilled from a parsed [`ConstraintProfile`].
#[derive(Debug, Clone)]
pub struct ConstraintForm {
    pub vn_name: Option<String>,
    pub bandwidth: Option<BandwidthGroup>,
    pub cost: Option<CostGroup>,
    pub src_entries: Vec<CandidateEntry>,
    pub dst_entries: Vec<CandidateEntry>,
    pub focus: usize,
}

impl ConstraintForm {
    /// Groups the profile carries arrive enabled and every endpoint row
    /// arrives checked.
    pub fn from_profile(profile: ConstraintProfile) -> Self {
        let checked = |ids: Vec<String>| {
            ids.into_iter()
                .map(|vnid| CandidateEntry {
                    vnid,
                    checked: true,
                })
                .collect::<Vec<_>>()
        };

        Self {
            vn_name: profile.vn_name,
            bandwidth: profile.bandwidth.map(|value| BandwidthGroup {
                enabled: true,
                value,
                unit: BandwidthUnit::default(),
            }),
            cost: profile.cost_type.map(|cost_type| CostGroup {
                enabled: true,
                cost_type,
            }),
            src_entries: checked(profile.src_candidates),
            dst_entries: checked(profile.dst_candidates),
            focus: 0,
        }
    }

    /// Focusable controls present in this form, in traversal order.
    pub fn fields(&self) -> Vec<ConstraintField> {
        let mut fields = Vec::new();
        if self.bandwidth.is_some() {
            fields.push(ConstraintField::BandwidthToggle);
            fields.push(ConstraintField::BandwidthValue);
            fields.push(ConstraintField::BandwidthUnit);
        }
        if self.cost.is_some() {
            fields.push(ConstraintField::CostToggle);
            fields.push(ConstraintField::CostValue);
        }
        fields.extend((0..self.src_entries.len()).map(ConstraintField::Src));
        fields.extend((0..self.dst_entries.len()).map(ConstraintField::Dst));
        fields
    }

    pub fn focused_field(&self) -> Option<ConstraintField> {
        self.fields().get(self.focus).copied()
    }

    pub fn focus_next(&mut self) {
        let count = self.fields().len();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
        }
    }

    pub fn focus_prev(&mut self) {
        let count = self.fields().len();
        if count > 0 {
            self.focus = (self.focus + count - 1) % count;
        }
    }

    /// Events produced on confirm: one endpoint event per checked row,
    /// then exactly one constraints message.
    pub fn to_events(&self) -> Vec<OutboundEvent> {
        let mut events = Vec::new();

        for entry in self.src_entries.iter().filter(|e| e.checked) {
            events.push(OutboundEvent::SetSource {
                id: entry.vnid.clone(),
            });
        }
        for entry in self.dst_entries.iter().filter(|e| e.checked) {
            events.push(OutboundEvent::SetDestination {
                id: entry.vnid.clone(),
            });
        }

        let (bw, bwtype) = match &self.bandwidth {
            Some(group) if group.enabled => (Some(group.value.clone()), Some(group.unit)),
            _ => (None, None),
        };
        let ctype = match &self.cost {
            Some(group) if group.enabled => Some(group.cost_type),
            _ => None,
        };
        events.push(OutboundEvent::UpdateConstraints { bw, bwtype, ctype });

        events
    }
}
