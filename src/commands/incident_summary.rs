use crate::backend::SnapshotBackend;
use crate::backend::snapshot::load_records;
use crate::docket::incident_summary::generate_incident_summary;
use crate::docket::store::ClientStore;
use anyhow::Result;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct IncidentSummaryOptions {
    pub incidents_path: PathBuf,
}

pub fn run(opts: &IncidentSummaryOptions) -> Result<String> {
    let backend =
        SnapshotBackend::local("snapshot").with_incidents(load_records(&opts.incidents_path)?);
    let mut store = ClientStore::new(backend);
    let incidents = store.incidents()?;
    Ok(generate_incident_summary(incidents))
}
