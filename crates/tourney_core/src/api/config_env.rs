use std::env;
use std::path::Path;

use crate::config::{ScoringConfig, TournamentConfig};

pub(crate) const CONFIG_PATH_ENV: &str = "TOURNEY_CONFIG_PATH";

/// Scoring from the file named by `TOURNEY_CONFIG_PATH`, if set.
pub(crate) fn scoring_from_env() -> Result<Option<ScoringConfig>, String> {
    let path = env::var(CONFIG_PATH_ENV).ok();
    load_scoring(path.as_deref())
}

pub(crate) fn load_scoring(path: Option<&str>) -> Result<Option<ScoringConfig>, String> {
    let Some(path) = path.map(str::trim).filter(|p| !p.is_empty()) else {
        return Ok(None);
    };

    let config = TournamentConfig::load_from_path(Path::new(path))
        .map_err(|e| format!("Invalid config from {CONFIG_PATH_ENV}='{path}': {e:#}"))?;
    Ok(Some(config.scoring))
}
