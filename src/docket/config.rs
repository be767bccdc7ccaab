use crate::docket::evidence_summary::EvidenceTone;
use crate::docket::message::MessageTone;
use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub message_tone: String,
    pub evidence_tone: String,
    pub department_id: Option<u64>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            message_tone: "firm".to_string(),
            evidence_tone: "plain".to_string(),
            department_id: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplashConfig {
    pub enabled: bool,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DocketConfig {
    pub defaults: DefaultsConfig,
    pub splash: SplashConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PartialDocketConfig {
    defaults: Option<DefaultsConfig>,
    splash: Option<SplashConfig>,
}

fn env_or_string(var: &str, fallback: &str) -> String {
    match env::var(var) {
        Ok(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => fallback.to_string(),
    }
}

fn env_or_bool(var: &str, fallback: bool) -> bool {
    match env::var(var) {
        Ok(v) => match v.trim() {
            "1" | "true" | "TRUE" | "yes" | "on" => true,
            "0" | "false" | "FALSE" | "no" | "off" => false,
            _ => fallback,
        },
        Err(_) => fallback,
    }
}

fn env_or_opt_u64(var: &str, fallback: Option<u64>) -> Option<u64> {
    match env::var(var) {
        Ok(v) => v.trim().parse::<u64>().ok().or(fallback),
        Err(_) => fallback,
    }
}

fn validate(cfg: &DocketConfig) -> Result<()> {
    cfg.defaults
        .message_tone
        .parse::<MessageTone>()
        .map_err(|err| anyhow!("invalid default message tone: {err}"))?;
    cfg.defaults
        .evidence_tone
        .parse::<EvidenceTone>()
        .map_err(|err| anyhow!("invalid default evidence tone: {err}"))?;
    Ok(())
}

fn resolve_config_path() -> Option<PathBuf> {
    if let Ok(custom) = env::var("T4J_CONFIG_PATH") {
        let trimmed = custom.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }

    let home = dirs::home_dir()?;
    Some(home.join(".time4jail").join("docket.toml"))
}

fn merge_file_config(base: &mut DocketConfig) -> Result<()> {
    let Some(path) = resolve_config_path() else {
        return Ok(());
    };
    if !path.exists() {
        return Ok(());
    }

    let raw = fs::read_to_string(&path)?;
    let parsed: PartialDocketConfig = toml::from_str(&raw)
        .map_err(|err| anyhow!("failed to parse docket config {}: {err}", path.display()))?;
    if let Some(defaults) = parsed.defaults {
        base.defaults = defaults;
    }
    if let Some(splash) = parsed.splash {
        base.splash = splash;
    }
    Ok(())
}

pub fn load_config() -> Result<DocketConfig> {
    let mut cfg = DocketConfig::default();
    merge_file_config(&mut cfg)?;

    cfg.defaults.message_tone = env_or_string("T4J_MESSAGE_TONE", &cfg.defaults.message_tone);
    cfg.defaults.evidence_tone = env_or_string("T4J_EVIDENCE_TONE", &cfg.defaults.evidence_tone);
    cfg.defaults.department_id =
        env_or_opt_u64("T4J_DEPARTMENT_ID", cfg.defaults.department_id);
    cfg.splash.enabled = env_or_bool("T4J_SPLASH_ENABLED", cfg.splash.enabled);

    validate(&cfg)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let cfg = DocketConfig::default();
        assert!(validate(&cfg).is_ok());
        assert_eq!(cfg.defaults.message_tone, "firm");
        assert_eq!(cfg.defaults.evidence_tone, "plain");
        assert!(cfg.splash.enabled);
    }

    #[test]
    fn unknown_tone_fails_validation() {
        let mut cfg = DocketConfig::default();
        cfg.defaults.message_tone = "shouty".to_string();
        assert!(validate(&cfg).is_err());
    }

    #[test]
    fn partial_file_overrides_only_named_sections() {
        let parsed: PartialDocketConfig =
            toml::from_str("[defaults]\nmessage_tone = \"calm\"\nevidence_tone = \"formal\"\n")
                .expect("parse");
        let mut cfg = DocketConfig::default();
        if let Some(defaults) = parsed.defaults {
            cfg.defaults = defaults;
        }
        assert_eq!(cfg.defaults.message_tone, "calm");
        assert!(cfg.splash.enabled);
    }
}
