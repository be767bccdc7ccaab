use crate::docket::config::load_config;
use crate::docket::splash::{random_mugshot_image, random_splash_message};
use anyhow::Result;

/// One random splash message plus the fallback image that would back it.
/// Honors the config switch; disabled means no output.
pub fn run() -> Result<String> {
    let cfg = load_config()?;
    if !cfg.splash.enabled {
        return Ok(String::new());
    }
    Ok(format!(
        "{}\n{}",
        random_splash_message(),
        random_mugshot_image()
    ))
}
