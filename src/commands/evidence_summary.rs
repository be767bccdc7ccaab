use crate::backend::SnapshotBackend;
use crate::backend::snapshot::load_records;
use crate::docket::config::load_config;
use crate::docket::evidence_summary::{EvidenceTone, generate_evidence_summary};
use crate::docket::store::ClientStore;
use anyhow::Result;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct EvidenceSummaryOptions {
    pub evidence_path: PathBuf,
    pub tone: Option<String>,
}

pub fn resolve_tone(raw: Option<&str>) -> Result<EvidenceTone> {
    match raw {
        Some(value) => Ok(value.parse()?),
        None => {
            let cfg = load_config()?;
            Ok(cfg.defaults.evidence_tone.parse()?)
        }
    }
}

pub fn run(opts: &EvidenceSummaryOptions) -> Result<String> {
    let tone = resolve_tone(opts.tone.as_deref())?;
    let backend =
        SnapshotBackend::local("snapshot").with_evidence(load_records(&opts.evidence_path)?);
    let mut store = ClientStore::new(backend);
    let evidence = store.evidence()?;
    Ok(generate_evidence_summary(evidence, tone))
}
