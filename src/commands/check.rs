use crate::backend::snapshot::load_records;
use crate::commands::CommandReport;
use crate::docket::config::load_config;
use crate::docket::datetime::format_date_short;
use crate::docket::model::{EvidenceFile, Incident, PoliceDepartment};
use anyhow::Result;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    pub incidents_path: Option<PathBuf>,
    pub evidence_path: Option<PathBuf>,
    pub departments_path: Option<PathBuf>,
}

/// Sanity-check record snapshots before they are fed to the generators:
/// parseability, counts, and cross-links between incidents and evidence.
pub fn run(opts: &CheckOptions) -> Result<CommandReport> {
    let mut report = CommandReport::new("check");
    report.detail(format!("build={}", env!("BUILD_UUID")));

    match load_config() {
        Ok(cfg) => report.detail(format!(
            "defaults: message_tone={} evidence_tone={}",
            cfg.defaults.message_tone, cfg.defaults.evidence_tone
        )),
        Err(err) => report.issue(format!("config invalid: {err:#}")),
    }

    let mut incidents: Vec<Incident> = Vec::new();
    if let Some(path) = &opts.incidents_path {
        match load_records::<Incident>(path) {
            Ok(records) => {
                report.detail(format!("incidents={}", records.len()));
                if let (Some(first), Some(last)) = (
                    records.iter().map(|i| i.timestamp).min(),
                    records.iter().map(|i| i.timestamp).max(),
                ) {
                    report.detail(format!(
                        "incident range: {} to {}",
                        format_date_short(first),
                        format_date_short(last)
                    ));
                }
                for incident in &records {
                    if incident.title.trim().is_empty() {
                        report.issue(format!("incident {} has an empty title", incident.id));
                    }
                    if incident.report_number.trim().is_empty() {
                        report.issue(format!("incident {} has no report number", incident.id));
                    }
                }
                incidents = records;
            }
            Err(err) => report.issue(format!("incidents snapshot unreadable: {err:#}")),
        }
    }

    if let Some(path) = &opts.evidence_path {
        match load_records::<EvidenceFile>(path) {
            Ok(records) => {
                report.detail(format!("evidence={}", records.len()));
                if !incidents.is_empty() {
                    for item in &records {
                        let linked = incidents
                            .iter()
                            .any(|incident| incident.evidence_ids.contains(&item.id));
                        if !linked {
                            report.issue(format!(
                                "evidence {} is not linked to any incident",
                                item.id
                            ));
                        }
                    }
                }
            }
            Err(err) => report.issue(format!("evidence snapshot unreadable: {err:#}")),
        }
    }

    if let Some(path) = &opts.departments_path {
        match load_records::<PoliceDepartment>(path) {
            Ok(records) => {
                let verified = records.iter().filter(|d| d.is_verified).count();
                report.detail(format!(
                    "departments={} verified={}",
                    records.len(),
                    verified
                ));
                for dept in &records {
                    if dept.name.trim().is_empty() {
                        report.issue(format!("department {} has an empty name", dept.id));
                    }
                }
            }
            Err(err) => report.issue(format!("departments snapshot unreadable: {err:#}")),
        }
    }

    Ok(report)
}
