use crate::backend::SnapshotBackend;
use crate::backend::snapshot::{load_record, load_records};
use crate::docket::config::load_config;
use crate::docket::message::{MessageTone, generate_message, tone_for_style};
use crate::docket::model::UserSettings;
use crate::docket::reference::format_incident_reference;
use crate::docket::store::ClientStore;
use anyhow::{Result, bail};
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct MessageOptions {
    pub tone: Option<String>,
    pub reference: Option<String>,
    pub incident_id: Option<u64>,
    pub incidents_path: Option<PathBuf>,
    pub settings_path: Option<PathBuf>,
}

/// Tone precedence: explicit flag, then the saved tone-style preference,
/// then the configured default.
fn resolve_tone(opts: &MessageOptions) -> Result<MessageTone> {
    if let Some(raw) = &opts.tone {
        return Ok(raw.parse()?);
    }
    if let Some(path) = &opts.settings_path {
        let settings: UserSettings = load_record(path)?;
        return Ok(tone_for_style(settings.tone_style));
    }
    let cfg = load_config()?;
    Ok(cfg.defaults.message_tone.parse()?)
}

pub fn run(opts: &MessageOptions) -> Result<String> {
    let tone = resolve_tone(opts)?;

    let reference = match (&opts.reference, opts.incident_id) {
        (Some(text), _) => Some(text.clone()),
        (None, Some(id)) => {
            let Some(path) = &opts.incidents_path else {
                bail!("--incident-id requires --incidents pointing at an incident snapshot");
            };
            let backend = SnapshotBackend::local("snapshot").with_incidents(load_records(path)?);
            let mut store = ClientStore::new(backend);
            let Some(incident) = store.incident(id)? else {
                bail!("incident {id} not found in snapshot");
            };
            Some(format_incident_reference(incident))
        }
        (None, None) => None,
    };

    Ok(generate_message(tone, reference.as_deref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_tone_wins() {
        let opts = MessageOptions {
            tone: Some("severe".to_string()),
            ..MessageOptions::default()
        };
        let text = run(&opts).expect("generate");
        assert!(text.starts_with("CEASE AND DESIST - FINAL WARNING"));
    }

    #[test]
    fn explicit_reference_is_interpolated() {
        let opts = MessageOptions {
            tone: Some("calm".to_string()),
            reference: Some("Incident Report CAR-0001".to_string()),
            ..MessageOptions::default()
        };
        let text = run(&opts).expect("generate");
        assert!(text.contains("Reference: Incident Report CAR-0001"));
    }

    #[test]
    fn incident_id_without_snapshot_is_rejected() {
        let opts = MessageOptions {
            tone: Some("firm".to_string()),
            incident_id: Some(3),
            ..MessageOptions::default()
        };
        let err = run(&opts).expect_err("must fail");
        assert!(err.to_string().contains("--incidents"));
    }
}
