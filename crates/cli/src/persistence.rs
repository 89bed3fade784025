use anyhow::{Context, Result};
use buckshot_core::{GameState, RulesConfig};
use std::fs;
use std::path::{Path, PathBuf};

pub fn default_state_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("BUCKSHOT_SAVE") {
        return Some(PathBuf::from(path));
    }
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".buckshot_state.json"))
}

/// Write the state exactly as its JSON form.
pub fn save_state_file(state: &GameState, path: &Path) -> Result<()> {
    let body = state.to_json().context("serialize game state")?;
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create save directory {}", parent.display()))?;
    }
    fs::write(path, body).with_context(|| format!("write save to {}", path.display()))
}

pub fn load_state_file(path: &Path) -> Result<GameState> {
    let body =
        fs::read_to_string(path).with_context(|| format!("read save from {}", path.display()))?;
    GameState::from_json(&body).with_context(|| format!("parse save {}", path.display()))
}

pub fn load_rules_file(path: &Path) -> Result<RulesConfig> {
    let body =
        fs::read_to_string(path).with_context(|| format!("read rules from {}", path.display()))?;
    serde_json::from_str(&body).with_context(|| format!("parse rules {}", path.display()))
}
