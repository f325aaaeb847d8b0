// HUD configuration, persisted as JSON in localStorage
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const STORAGE_KEY: &str = "hud_config";

/// Ids of the page regions the HUD renders into or listens on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionIds {
    pub unit_holder: String,
    pub ability_holder: String,
    pub item_holder: String,
    pub game_view_proxy: String,
    pub menu_button: String,
    pub resume_button: String,
    pub overlay: String,
    pub pause_menu: String,
}

impl Default for RegionIds {
    fn default() -> Self {
        Self {
            unit_holder: "unit-holder".into(),
            ability_holder: "ability-holder".into(),
            item_holder: "item-holder".into(),
            game_view_proxy: "game-view-proxy".into(),
            menu_button: "menu-button".into(),
            resume_button: "resume-btn".into(),
            overlay: "overlay".into(),
            pause_menu: "pause-menu".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    pub ids: RegionIds,
    /// Duration of the overlay / pause menu fades.
    pub fade_ms: u32,
    pub icon_size_px: u32,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            ids: RegionIds::default(),
            fade_ms: 400,
            icon_size_px: 48,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("localStorage is not available")]
    NoStorage,
    #[error("storage access failed")]
    Storage,
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
}

pub fn parse_config(raw: &str) -> Result<HudConfig, ConfigError> {
    Ok(serde_json::from_str(raw)?)
}

fn storage() -> Result<web_sys::Storage, ConfigError> {
    web_sys::window()
        .and_then(|win| win.local_storage().ok().flatten())
        .ok_or(ConfigError::NoStorage)
}

fn try_load() -> Result<Option<HudConfig>, ConfigError> {
    let store = storage()?;
    match store.get_item(STORAGE_KEY).map_err(|_| ConfigError::Storage)? {
        Some(raw) => parse_config(&raw).map(Some),
        None => Ok(None),
    }
}

/// Load the stored config, falling back to defaults on any failure.
pub fn load_config() -> HudConfig {
    match try_load() {
        Ok(Some(cfg)) => cfg,
        Ok(None) => {
            // seed storage so the defaults can be edited in place
            let cfg = HudConfig::default();
            if let Err(e) = save_config(&cfg) {
                log::warn!("could not store default hud config: {}", e);
            }
            cfg
        }
        Err(e) => {
            log::warn!("using default hud config: {}", e);
            HudConfig::default()
        }
    }
}

pub fn save_config(cfg: &HudConfig) -> Result<(), ConfigError> {
    let raw = serde_json::to_string(cfg)?;
    storage()?
        .set_item(STORAGE_KEY, &raw)
        .map_err(|_| ConfigError::Storage)
}
