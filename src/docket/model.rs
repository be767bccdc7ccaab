use crate::docket::datetime::TimestampNanos;
use crate::docket::files::BlobHandle;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type IncidentId = u64;
pub type FileId = u64;
pub type DepartmentId = u64;
pub type StalkerProfileId = u64;

/// Opaque textual identity of a user, assigned by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(pub String);

impl Principal {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IncidentStatus {
    Open,
    Closed,
    ClosureRequested,
}

impl fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::ClosureRequested => "closureRequested",
        };
        f.write_str(text)
    }
}

/// Closed set of evidence kinds. `Other` carries the user's free-text label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EvidenceKind {
    Photo,
    Video,
    Audio,
    Document,
    Screenshot,
    Other(String),
}

impl EvidenceKind {
    /// Display label for summaries and list views. `Other` renders its own
    /// label, falling back to "Other" when blank.
    pub fn label(&self) -> &str {
        match self {
            Self::Photo => "Photo",
            Self::Video => "Video",
            Self::Audio => "Audio Recording",
            Self::Document => "Document",
            Self::Screenshot => "Screenshot",
            Self::Other(label) => {
                if label.trim().is_empty() {
                    "Other"
                } else {
                    label
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    pub id: IncidentId,
    pub status: IncidentStatus,
    pub title: String,
    /// Assigned by the backend on creation; never edited client-side.
    #[serde(rename = "criminalActivityReportNumber")]
    pub report_number: String,
    pub description: String,
    pub author: Principal,
    pub timestamp: TimestampNanos,
    pub evidence_ids: Vec<FileId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceFile {
    pub id: FileId,
    pub title: String,
    pub description: String,
    #[serde(rename = "evidenceType")]
    pub kind: EvidenceKind,
    pub file: BlobHandle,
    pub author: Principal,
    pub timestamp: TimestampNanos,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StalkerProfile {
    pub id: StalkerProfileId,
    pub name: String,
    pub description: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoliceDepartment {
    pub id: DepartmentId,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub website: String,
    pub is_verified: bool,
    pub added_by: Principal,
}

/// Fully optional personal record; every field stands on its own and the
/// whole record can be reset to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VictimSurvivorInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
}

impl VictimSurvivorInfo {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.age.is_none()
            && self.gender.is_none()
            && self.contact_info.is_none()
            && self.emergency_contact.is_none()
            && self.additional_notes.is_none()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ToneStyle {
    Balanced,
    AssertiveWomen,
    DirectSafety,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisualTheme {
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "womenSafety")]
    WomenSafety,
    #[serde(rename = "redFeminineBold")]
    RedFeminineBold,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub language: String,
    pub tone_style: ToneStyle,
    pub visual_theme: VisualTheme,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motivational_video: Option<BlobHandle>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            tone_style: ToneStyle::Balanced,
            visual_theme: VisualTheme::Default,
            motivational_video: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UserRole {
    Admin,
    #[default]
    User,
    Guest,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evidence_kind_other_renders_its_label() {
        let kind = EvidenceKind::Other("Diary entry".to_string());
        assert_eq!(kind.label(), "Diary entry");
    }

    #[test]
    fn evidence_kind_other_blank_label_falls_back() {
        let kind = EvidenceKind::Other("   ".to_string());
        assert_eq!(kind.label(), "Other");
    }

    #[test]
    fn evidence_kind_round_trips_export_shape() {
        let json = serde_json::to_string(&EvidenceKind::Photo).expect("serialize");
        assert_eq!(json, "\"photo\"");

        let other: EvidenceKind =
            serde_json::from_str("{\"other\":\"Diary entry\"}").expect("deserialize");
        assert_eq!(other, EvidenceKind::Other("Diary entry".to_string()));
    }

    #[test]
    fn incident_serde_keeps_report_number_key() {
        let incident = Incident {
            id: 1,
            status: IncidentStatus::Open,
            title: "Followed home".to_string(),
            report_number: "CAR-0001".to_string(),
            description: String::new(),
            author: Principal::new("aaaa-bbbb"),
            timestamp: 0,
            evidence_ids: vec![2, 3],
        };
        let json = serde_json::to_value(&incident).expect("serialize");
        assert_eq!(json["criminalActivityReportNumber"], "CAR-0001");
        assert_eq!(json["evidenceIds"][1], 3);
        assert_eq!(json["status"], "open");
    }

    #[test]
    fn victim_survivor_info_resets_to_empty() {
        let mut info = VictimSurvivorInfo {
            name: Some("A".to_string()),
            age: Some(30),
            ..VictimSurvivorInfo::default()
        };
        assert!(!info.is_empty());
        info.reset();
        assert!(info.is_empty());
        assert_eq!(
            serde_json::to_string(&info).expect("serialize"),
            "{}"
        );
    }
}
