use crate::backend::SnapshotBackend;
use crate::backend::snapshot::load_records;
use crate::commands::evidence_summary::resolve_tone;
use crate::docket::config::load_config;
use crate::docket::model::PoliceDepartment;
use crate::docket::police_report::generate_police_report;
use crate::docket::store::ClientStore;
use crate::docket::warn;
use anyhow::{Result, bail};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct PoliceReportOptions {
    pub incidents_path: PathBuf,
    pub evidence_path: PathBuf,
    pub tone: Option<String>,
    pub departments_path: Option<PathBuf>,
    pub department_id: Option<u64>,
}

fn resolve_department(opts: &PoliceReportOptions) -> Result<Option<PoliceDepartment>> {
    let Some(path) = &opts.departments_path else {
        return Ok(None);
    };
    let departments: Vec<PoliceDepartment> = load_records(path)?;

    let wanted = match opts.department_id {
        Some(id) => Some(id),
        None => load_config()?.defaults.department_id,
    };
    let Some(id) = wanted else {
        return Ok(None);
    };

    match departments.into_iter().find(|d| d.id == id) {
        Some(dept) => Ok(Some(dept)),
        None => bail!("police department {id} not found in snapshot"),
    }
}

pub fn run(opts: &PoliceReportOptions) -> Result<String> {
    let tone = resolve_tone(opts.tone.as_deref())?;
    let department = resolve_department(opts)?;
    if department.is_none() {
        // In the app, report actions stay disabled until a department is
        // chosen; here the report is still rendered, header-less.
        warn::emit(
            "NO_DEPARTMENT",
            "police_report",
            "",
            "no department selected; report has no submission header",
        );
    }

    let backend = SnapshotBackend::local("snapshot")
        .with_incidents(load_records(&opts.incidents_path)?)
        .with_evidence(load_records(&opts.evidence_path)?);
    let mut store = ClientStore::new(backend);

    let incidents = store.incidents()?.to_vec();
    let evidence = store.evidence()?;

    Ok(generate_police_report(
        &incidents,
        evidence,
        tone,
        department.as_ref(),
    ))
}
