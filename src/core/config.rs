//! Page configuration.
//!
//! The host page may embed a JSON object (see `floorplan_web`); every field is
//! optional and falls back to the defaults below.

use serde::Deserialize;
use tracing::Level;

use super::error::FloorplanError;
use super::model::BuildingId;

/// Placeholder replaced by the building id in [`CatalogConfig::floors_url`].
pub const BUILDING_PLACEHOLDER: &str = "{building}";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Id of the element the floor-plan SVG is injected into.
    #[serde(default = "default_container_id")]
    pub container_id: String,
    #[serde(default = "default_buildings_label")]
    pub buildings_label: String,
    #[serde(default = "default_floors_label")]
    pub floors_label: String,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub region_click: RegionClickAction,
    /// `error`, `warn`, `info`, `debug` or `trace`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Backend endpoints. Without `buildings_url` the hardcoded catalog is used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub buildings_url: Option<String>,
    /// URL template containing `{building}`.
    #[serde(default)]
    pub floors_url: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionClickAction {
    /// Blocking `alert()` dialog.
    #[default]
    Alert,
    /// Log the click instead.
    Log,
}

fn default_container_id() -> String {
    "svg-container".to_string()
}

fn default_buildings_label() -> String {
    "Buildings".to_string()
}

fn default_floors_label() -> String {
    "Floors".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            container_id: default_container_id(),
            buildings_label: default_buildings_label(),
            floors_label: default_floors_label(),
            catalog: CatalogConfig::default(),
            region_click: RegionClickAction::default(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, FloorplanError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), FloorplanError> {
        if self.container_id.trim().is_empty() {
            return Err(FloorplanError::InvalidConfig(
                "container_id must not be empty".to_string(),
            ));
        }
        if self.catalog.floors_url.is_some() && self.catalog.buildings_url.is_none() {
            return Err(FloorplanError::InvalidConfig(
                "catalog.floors_url requires catalog.buildings_url".to_string(),
            ));
        }
        if let Some(template) = &self.catalog.floors_url {
            if !template.contains(BUILDING_PLACEHOLDER) {
                return Err(FloorplanError::InvalidConfig(format!(
                    "catalog.floors_url must contain {BUILDING_PLACEHOLDER}"
                )));
            }
        }
        Ok(())
    }

    /// Parsed log level; unknown names fall back to `INFO`.
    pub fn log_level(&self) -> Level {
        self.log_level.trim().parse().unwrap_or(Level::INFO)
    }
}

impl CatalogConfig {
    pub fn floors_url(&self, building: BuildingId) -> Option<String> {
        self.floors_url
            .as_ref()
            .map(|t| t.replace(BUILDING_PLACEHOLDER, &building.to_string()))
    }
}
