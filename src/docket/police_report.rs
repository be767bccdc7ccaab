use crate::docket::datetime::generated_at_now;
use crate::docket::evidence_summary::{EvidenceTone, generate_evidence_summary};
use crate::docket::incident_summary::generate_incident_summary;
use crate::docket::model::{EvidenceFile, Incident, PoliceDepartment};
use std::fmt::Write as _;

const RULE_WIDTH: usize = 60;

/// Assemble the full police report: optional department header, incident
/// summary, and evidence summary, separated by rule lines. With no
/// department only the header block is omitted; any gating of report actions
/// on department choice belongs to the caller.
pub fn generate_police_report(
    incidents: &[Incident],
    evidence: &[EvidenceFile],
    evidence_tone: EvidenceTone,
    department: Option<&PoliceDepartment>,
) -> String {
    let mut report = String::new();

    if let Some(dept) = department {
        report.push_str("POLICE REPORT SUBMISSION\n");
        report.push_str("========================\n\n");
        let _ = writeln!(report, "TO: {}", dept.name);

        if !dept.address.is_empty() {
            let _ = writeln!(report, "Address: {}", dept.address);
        }
        if !dept.phone.is_empty() {
            let _ = writeln!(report, "Phone: {}", dept.phone);
        }
        if !dept.website.is_empty() {
            let _ = writeln!(report, "Website: {}", dept.website);
        }

        report.push('\n');
        let _ = writeln!(report, "Report Generated: {}", generated_at_now());
        report.push('\n');
        let _ = writeln!(report, "{}", "=".repeat(RULE_WIDTH));
        report.push('\n');
    }

    report.push_str(&generate_incident_summary(incidents));
    let _ = write!(report, "\n{}\n\n", "=".repeat(RULE_WIDTH));
    report.push_str(&generate_evidence_summary(evidence, evidence_tone));

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docket::files::BlobHandle;
    use crate::docket::model::{EvidenceKind, IncidentStatus, Principal};

    const BASE_NS: i64 = 1_767_625_445_000_000_000;

    fn department() -> PoliceDepartment {
        PoliceDepartment {
            id: 7,
            name: "Springfield PD".to_string(),
            address: "742 Evergreen Terrace".to_string(),
            phone: "555-0100".to_string(),
            website: "https://springfield.example".to_string(),
            is_verified: true,
            added_by: Principal::new("aaaa"),
        }
    }

    fn sample_incident() -> Incident {
        Incident {
            id: 1,
            status: IncidentStatus::Open,
            title: "Followed home".to_string(),
            report_number: "CAR-0001".to_string(),
            description: "He followed me from the station.".to_string(),
            author: Principal::new("aaaa"),
            timestamp: BASE_NS,
            evidence_ids: vec![2],
        }
    }

    fn sample_evidence() -> EvidenceFile {
        EvidenceFile {
            id: 2,
            title: "Photo at the gate".to_string(),
            description: "Shows him waiting outside.".to_string(),
            kind: EvidenceKind::Photo,
            file: BlobHandle::from_url("https://files.example/2"),
            author: Principal::new("aaaa"),
            timestamp: BASE_NS,
        }
    }

    #[test]
    fn department_header_lists_contact_fields() {
        let report = generate_police_report(
            &[sample_incident()],
            &[sample_evidence()],
            EvidenceTone::Formal,
            Some(&department()),
        );
        assert!(report.starts_with("POLICE REPORT SUBMISSION\n========================\n\n"));
        assert!(report.contains("TO: Springfield PD\n"));
        assert!(report.contains("Address: 742 Evergreen Terrace\n"));
        assert!(report.contains("Phone: 555-0100\n"));
        assert!(report.contains("Website: https://springfield.example\n"));
        assert!(report.contains("Report Generated: "));
    }

    #[test]
    fn empty_contact_fields_are_skipped() {
        let mut dept = department();
        dept.address.clear();
        dept.website.clear();
        let report =
            generate_police_report(&[], &[], EvidenceTone::Plain, Some(&dept));
        assert!(!report.contains("Address:"));
        assert!(!report.contains("Website:"));
        assert!(report.contains("Phone: 555-0100\n"));
    }

    #[test]
    fn missing_department_omits_only_the_header() {
        let report = generate_police_report(
            &[sample_incident()],
            &[sample_evidence()],
            EvidenceTone::Urgent,
            None,
        );
        assert!(!report.contains("POLICE REPORT SUBMISSION"));
        assert!(report.starts_with("INCIDENT SUMMARY REPORT\n"));
        assert!(report.contains("URGENT EVIDENCE SUMMARY REPORT"));
    }

    #[test]
    fn sections_are_separated_by_sixty_char_rule() {
        let report = generate_police_report(
            &[sample_incident()],
            &[sample_evidence()],
            EvidenceTone::Plain,
            None,
        );
        let rule = "=".repeat(60);
        assert!(report.contains(&format!("\n{rule}\n\n")));
    }

    #[test]
    fn empty_collections_still_produce_both_sections() {
        let report = generate_police_report(&[], &[], EvidenceTone::Plain, None);
        assert!(report.contains("No incidents to summarize."));
        assert!(report.contains("No evidence to summarize."));
    }
}
