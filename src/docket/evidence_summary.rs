use crate::docket::datetime::{format_date_short, format_timestamp, generated_at_now};
use crate::docket::model::EvidenceFile;
use crate::error::DocketError;
use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

const DESCRIPTION_LIMIT: usize = 300;

/// Tones for the evidence summary. Tone changes the wording around the
/// facts, never the facts themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EvidenceTone {
    #[default]
    Plain,
    Formal,
    Urgent,
    UrgentFeminine,
}

pub const ALL_EVIDENCE_TONES: [EvidenceTone; 4] = [
    EvidenceTone::Plain,
    EvidenceTone::Formal,
    EvidenceTone::Urgent,
    EvidenceTone::UrgentFeminine,
];

impl fmt::Display for EvidenceTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Plain => "plain",
            Self::Formal => "formal",
            Self::Urgent => "urgent",
            Self::UrgentFeminine => "urgent-feminine",
        };
        f.write_str(text)
    }
}

impl FromStr for EvidenceTone {
    type Err = DocketError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "formal" => Ok(Self::Formal),
            "urgent" => Ok(Self::Urgent),
            "urgent-feminine" => Ok(Self::UrgentFeminine),
            other => Err(DocketError::Validation(format!(
                "unknown evidence tone \"{other}\": use plain, formal, urgent, or urgent-feminine"
            ))),
        }
    }
}

fn header(tone: EvidenceTone) -> &'static str {
    match tone {
        EvidenceTone::Formal => "FORMAL EVIDENCE DOCUMENTATION REPORT",
        EvidenceTone::Urgent | EvidenceTone::UrgentFeminine => "URGENT EVIDENCE SUMMARY REPORT",
        EvidenceTone::Plain => "EVIDENCE SUMMARY REPORT",
    }
}

fn overview(tone: EvidenceTone, total: usize, first_date: &str, last_date: &str) -> String {
    let plural = if total != 1 { "s" } else { "" };
    match tone {
        EvidenceTone::Formal => format!(
            "This formal documentation comprises {total} evidence item{plural} collected between {first_date} and {last_date}. Each entry has been catalogued with timestamp, classification, and descriptive metadata for official review."
        ),
        EvidenceTone::Urgent => format!(
            "This report documents {total} critical evidence item{plural} spanning {first_date} to {last_date}. This evidence demonstrates a pattern of stalking and harassment behavior that requires immediate law enforcement intervention to ensure victim safety."
        ),
        EvidenceTone::UrgentFeminine => format!(
            "This report documents {total} critical evidence item{plural} collected between {first_date} and {last_date}. The documented pattern of stalking and harassment behavior is deeply alarming and requires immediate attention from authorities to protect the victim from further harm and hold the perpetrator accountable."
        ),
        EvidenceTone::Plain => format!(
            "This summary includes {total} evidence item{plural} collected between {first_date} and {last_date}."
        ),
    }
}

fn timeline_header(tone: EvidenceTone) -> &'static str {
    match tone {
        EvidenceTone::Formal => "CHRONOLOGICAL EVIDENCE LOG",
        EvidenceTone::Urgent | EvidenceTone::UrgentFeminine => "DOCUMENTED EVIDENCE TIMELINE",
        EvidenceTone::Plain => "EVIDENCE TIMELINE",
    }
}

fn closing(tone: EvidenceTone) -> &'static str {
    match tone {
        EvidenceTone::Formal => {
            "This concludes the formal evidence documentation. All entries are available for official review and legal proceedings."
        }
        EvidenceTone::Urgent => {
            "This evidence log demonstrates a documented pattern of stalking and harassment requiring immediate law enforcement intervention. Authorities should review this documentation promptly to assess risk, ensure victim safety, and pursue appropriate criminal charges against the perpetrator."
        }
        EvidenceTone::UrgentFeminine => {
            "The evidence documented here shows a persistent pattern of stalking and harassment behavior that has caused ongoing fear and violation of her safety and well-being. This situation demands immediate attention from law enforcement to ensure her protection and hold the perpetrator accountable under the law. Every entry represents a documented incident that she has courageously recorded. Please act swiftly to investigate and prosecute."
        }
        EvidenceTone::Plain => "",
    }
}

/// Render the evidence summary document for `tone`. Items are listed in
/// ascending timestamp order regardless of input order; ties keep their
/// relative input order.
pub fn generate_evidence_summary(evidence: &[EvidenceFile], tone: EvidenceTone) -> String {
    if evidence.is_empty() {
        return "No evidence to summarize.".to_string();
    }

    let mut sorted: Vec<&EvidenceFile> = evidence.iter().collect();
    sorted.sort_by_key(|item| item.timestamp);

    let first_date = format_date_short(sorted[0].timestamp);
    let last_date = format_date_short(sorted[sorted.len() - 1].timestamp);
    let total = evidence.len();

    let mut summary = String::new();
    let _ = writeln!(summary, "{}", header(tone));
    let _ = writeln!(summary, "Generated: {}", generated_at_now());
    summary.push('\n');
    summary.push_str("OVERVIEW\n");
    summary.push_str("========\n");
    let _ = writeln!(summary, "Total Evidence Items: {total}");
    let _ = writeln!(summary, "Date Range: {first_date} to {last_date}");
    summary.push('\n');
    let _ = writeln!(summary, "{}", overview(tone, total, &first_date, &last_date));
    summary.push('\n');
    let timeline = timeline_header(tone);
    let _ = writeln!(summary, "{timeline}");
    let _ = writeln!(summary, "{}", "=".repeat(timeline.len()));
    summary.push('\n');

    for (index, item) in sorted.iter().enumerate() {
        let _ = writeln!(summary, "{}. {}", index + 1, format_timestamp(item.timestamp));
        let _ = writeln!(summary, "   Type: {}", item.kind.label());
        let _ = writeln!(summary, "   Title: {}", item.title);

        if item.description.trim().is_empty() {
            summary.push_str("   Description: (No description provided)\n");
        } else {
            let truncated: String = item.description.chars().take(DESCRIPTION_LIMIT).collect();
            let marker = if item.description.chars().count() > DESCRIPTION_LIMIT {
                "..."
            } else {
                ""
            };
            let _ = writeln!(summary, "   Description: {truncated}{marker}");
        }

        summary.push('\n');
    }

    let closing_text = closing(tone);
    if !closing_text.is_empty() {
        summary.push_str("SUMMARY\n");
        summary.push_str("=======\n");
        let _ = writeln!(summary, "{closing_text}");
        summary.push('\n');
    }

    summary.push_str("END OF REPORT\n");

    summary
}
