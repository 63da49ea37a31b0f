//! Constraint attributes of a VN path and the parse of the backend's
//! marker-delimited constraint token stream.

use serde::{Deserialize, Serialize};

/// Bandwidth unit offered in the bandwidth radio group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandwidthUnit {
    #[default]
    Kbps,
    Mbps,
}

impl BandwidthUnit {
    pub fn label(self) -> &'static str {
        match self {
            Self::Kbps => "kbps",
            Self::Mbps => "mbps",
        }
    }
}

/// Cost-type constraint offered in the cost radio group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostType {
    Igp,
    #[default]
    Te,
}

impl CostType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Igp => "IGP",
            Self::Te => "TE",
        }
    }

    /// Parse a cost-type value token, case-insensitively.
    fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "igp" => Some(Self::Igp),
            "te" => Some(Self::Te),
            _ => None,
        }
    }
}

/// Section marker currently in effect while walking the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    VnName,
    Bandwidth,
    CostType,
    Src,
    Dst,
}

/// Typed view of one VN's editable attributes, parsed out of the flat
/// token stream before anything is rendered.
///
/// Markers (`VnName`, `BandWidth`, `CostType`, `SRC`, `DST`) partition the
/// stream into sections; values following a marker belong to that section
/// until the next marker. A marker with no values still announces its
/// section (a bare `CostType` yields a cost group with the default value).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstraintProfile {
    pub vn_name: Option<String>,
    /// Bandwidth value as sent by the backend. `Some` whenever the
    /// `BandWidth` marker appeared, even with no value token.
    pub bandwidth: Option<String>,
    /// `Some` whenever the `CostType` marker appeared.
    pub cost_type: Option<CostType>,
    pub src_candidates: Vec<String>,
    pub dst_candidates: Vec<String>,
}

impl ConstraintProfile {
    /// Walk the token stream, keeping a running section marker.
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut profile = Self::default();
        let mut section = Section::None;

        for token in tokens {
            match token.as_str() {
                "VnName" => {
                    section = Section::VnName;
                    continue;
                }
                "BandWidth" => {
                    section = Section::Bandwidth;
                    profile.bandwidth.get_or_insert_with(String::new);
                    continue;
                }
                "CostType" => {
                    section = Section::CostType;
                    profile.cost_type.get_or_insert(CostType::default());
                    continue;
                }
                "SRC" => {
                    section = Section::Src;
                    continue;
                }
                "DST" => {
                    section = Section::Dst;
                    continue;
                }
                _ => {}
            }

            match section {
                Section::None => {
                    log::debug!("constraint token {token:?} before any marker, skipped");
                }
                Section::VnName => {
                    profile.vn_name.get_or_insert(token);
                }
                Section::Bandwidth => {
                    profile.bandwidth = Some(token);
                }
                Section::CostType => {
                    if let Some(ct) = CostType::parse(&token) {
                        profile.cost_type = Some(ct);
                    } else {
                        log::debug!("unknown cost-type token {token:?}, keeping default");
                    }
                }
                Section::Src => profile.src_candidates.push(token),
                Section::Dst => profile.dst_candidates.push(token),
            }
        }

        profile
    }
}
