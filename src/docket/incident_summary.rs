use crate::docket::datetime::{format_date_short, format_timestamp, generated_at_now};
use crate::docket::model::Incident;
use std::fmt::Write as _;

const DESCRIPTION_LIMIT: usize = 200;
const MIN_KEYWORD_LEN: usize = 4;
const MAX_KEYWORDS: usize = 5;

/// Recurring title keywords: words longer than 3 characters appearing more
/// than once across lower-cased titles, most frequent first. Ties keep
/// first-seen order.
fn repeated_title_words(incidents: &[Incident]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for incident in incidents {
        let title = incident.title.to_lowercase();
        for word in title.split_whitespace() {
            if word.chars().count() < MIN_KEYWORD_LEN {
                continue;
            }
            match counts.iter_mut().find(|(seen, _)| seen.as_str() == word) {
                Some((_, count)) => *count += 1,
                None => counts.push((word.to_string(), 1)),
            }
        }
    }

    let mut repeated: Vec<(String, usize)> = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .collect();
    repeated.sort_by(|a, b| b.1.cmp(&a.1));
    repeated.truncate(MAX_KEYWORDS);
    repeated
}

/// Render the incident summary document (single fixed tone). Incidents are
/// listed in ascending timestamp order regardless of input order.
pub fn generate_incident_summary(incidents: &[Incident]) -> String {
    if incidents.is_empty() {
        return "No incidents to summarize.".to_string();
    }

    let mut sorted: Vec<&Incident> = incidents.iter().collect();
    sorted.sort_by_key(|incident| incident.timestamp);

    let first_date = format_date_short(sorted[0].timestamp);
    let last_date = format_date_short(sorted[sorted.len() - 1].timestamp);
    let total = incidents.len();
    let total_evidence: usize = incidents
        .iter()
        .map(|incident| incident.evidence_ids.len())
        .sum();

    let mut summary = String::new();
    summary.push_str("INCIDENT SUMMARY REPORT\n");
    let _ = writeln!(summary, "Generated: {}", generated_at_now());
    summary.push('\n');
    summary.push_str("OVERVIEW\n");
    summary.push_str("========\n");
    let _ = writeln!(summary, "Total Incidents: {total}");
    let _ = writeln!(summary, "Date Range: {first_date} to {last_date}");
    let _ = writeln!(summary, "Total Evidence Files: {total_evidence}");
    summary.push('\n');
    summary.push_str("INCIDENT TIMELINE\n");
    summary.push_str("=================\n\n");

    for (index, incident) in sorted.iter().enumerate() {
        let _ = writeln!(
            summary,
            "{}. {}",
            index + 1,
            format_timestamp(incident.timestamp)
        );
        let _ = writeln!(summary, "   Report #: {}", incident.report_number);
        let _ = writeln!(summary, "   Title: {}", incident.title);
        let _ = writeln!(summary, "   Status: {}", incident.status);
        if !incident.evidence_ids.is_empty() {
            let _ = writeln!(summary, "   Evidence: {} file(s)", incident.evidence_ids.len());
        }
        let truncated: String = incident.description.chars().take(DESCRIPTION_LIMIT).collect();
        let marker = if incident.description.chars().count() > DESCRIPTION_LIMIT {
            "..."
        } else {
            ""
        };
        let _ = writeln!(summary, "   Description: {truncated}{marker}");
        summary.push('\n');
    }

    let repeated = repeated_title_words(incidents);
    if !repeated.is_empty() {
        summary.push_str("PATTERN ANALYSIS\n");
        summary.push_str("================\n");
        summary.push_str("Recurring keywords:\n");
        for (word, count) in &repeated {
            let _ = writeln!(summary, "  - \"{word}\" appears {count} times");
        }
        summary.push('\n');
    }

    summary.push_str("END OF REPORT\n");

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docket::model::{IncidentStatus, Principal};

    const HOUR_NS: i64 = 3_600_000_000_000;
    const BASE_NS: i64 = 1_767_625_445_000_000_000;

    fn incident(id: u64, timestamp: i64, title: &str, description: &str) -> Incident {
        Incident {
            id,
            status: IncidentStatus::Open,
            title: title.to_string(),
            report_number: format!("CAR-{id:04}"),
            description: description.to_string(),
            author: Principal::new("aaaa"),
            timestamp,
            evidence_ids: Vec::new(),
        }
    }

    #[test]
    fn empty_list_returns_fixed_sentence() {
        assert_eq!(generate_incident_summary(&[]), "No incidents to summarize.");
    }

    #[test]
    fn incidents_are_listed_in_timestamp_order() {
        let list = vec![
            incident(2, BASE_NS + HOUR_NS, "Second", "b"),
            incident(1, BASE_NS, "First", "a"),
        ];
        let summary = generate_incident_summary(&list);
        let first = summary.find("Title: First").expect("first listed");
        let second = summary.find("Title: Second").expect("second listed");
        assert!(first < second);
    }

    #[test]
    fn evidence_line_appears_only_when_nonzero() {
        let mut with_files = incident(1, BASE_NS, "Has files", "a");
        with_files.evidence_ids = vec![10, 11];
        let without_files = incident(2, BASE_NS + HOUR_NS, "No files", "b");

        let summary = generate_incident_summary(&[with_files, without_files]);
        assert!(summary.contains("Evidence: 2 file(s)"));
        assert_eq!(summary.matches("   Evidence: ").count(), 1);
        assert!(summary.contains("Total Evidence Files: 2"));
    }

    #[test]
    fn description_truncates_only_past_two_hundred_chars() {
        let exact = "y".repeat(200);
        let over = "y".repeat(201);
        let list = vec![
            incident(1, BASE_NS, "Exact", &exact),
            incident(2, BASE_NS + HOUR_NS, "Over", &over),
        ];
        let summary = generate_incident_summary(&list);
        assert!(summary.contains(&format!("Description: {exact}\n")));
        assert!(summary.contains(&format!("Description: {}...\n", "y".repeat(200))));
    }

    #[test]
    fn pattern_analysis_finds_repeated_long_words_only() {
        let list = vec![
            incident(1, BASE_NS, "Stalker followed me home", ""),
            incident(2, BASE_NS + HOUR_NS, "Stalker called repeatedly", ""),
            incident(3, BASE_NS + 2 * HOUR_NS, "He followed me again", ""),
        ];
        let summary = generate_incident_summary(&list);
        assert!(summary.contains("PATTERN ANALYSIS"));
        assert!(summary.contains("\"stalker\" appears 2 times"));
        assert!(summary.contains("\"followed\" appears 2 times"));
        assert!(!summary.contains("\"me\""));
        assert!(!summary.contains("\"he\""));
    }

    #[test]
    fn pattern_analysis_section_is_omitted_without_repeats() {
        let list = vec![
            incident(1, BASE_NS, "Alpha event", ""),
            incident(2, BASE_NS + HOUR_NS, "Beta occurrence", ""),
        ];
        let summary = generate_incident_summary(&list);
        assert!(!summary.contains("PATTERN ANALYSIS"));
        assert!(summary.ends_with("END OF REPORT\n"));
    }

    #[test]
    fn keyword_ties_keep_first_seen_order() {
        let list = vec![
            incident(1, BASE_NS, "gamma delta", ""),
            incident(2, BASE_NS + HOUR_NS, "gamma delta", ""),
        ];
        let summary = generate_incident_summary(&list);
        let gamma = summary.find("\"gamma\"").expect("gamma listed");
        let delta = summary.find("\"delta\"").expect("delta listed");
        assert!(gamma < delta);
    }

    #[test]
    fn status_renders_backend_spelling() {
        let mut closing = incident(1, BASE_NS, "Closure", "");
        closing.status = IncidentStatus::ClosureRequested;
        let summary = generate_incident_summary(&[closing]);
        assert!(summary.contains("Status: closureRequested"));
    }
}
