use floorplan::catalog::{Catalog, StaticCatalog};
use floorplan::config::CatalogConfig;
use floorplan::error::FloorplanError;
use floorplan::model::{Building, BuildingId, Floor};
use tracing::{debug, info};

use super::fetch::fetch_json;

/// Catalog chosen from the page config.
#[derive(Debug, Clone)]
pub(super) enum PageCatalog {
    Static(StaticCatalog),
    Http(HttpCatalog),
}

impl PageCatalog {
    pub(super) fn from_config(config: &CatalogConfig) -> Self {
        match &config.buildings_url {
            Some(url) => {
                info!(buildings_url = %url, "using HTTP catalog");
                PageCatalog::Http(HttpCatalog {
                    buildings_url: url.clone(),
                    floors: config.clone(),
                })
            }
            None => {
                info!("using built-in building list");
                PageCatalog::Static(StaticCatalog)
            }
        }
    }
}

impl Catalog for PageCatalog {
    async fn buildings(&self) -> Result<Vec<Building>, FloorplanError> {
        match self {
            PageCatalog::Static(c) => c.buildings().await,
            PageCatalog::Http(c) => c.buildings().await,
        }
    }

    async fn floors(&self, building: BuildingId) -> Result<Vec<Floor>, FloorplanError> {
        match self {
            PageCatalog::Static(c) => c.floors(building).await,
            PageCatalog::Http(c) => c.floors(building).await,
        }
    }
}

/// Backend serving `[{id, name}]` and `[{id, name, floorImg}]` lists.
#[derive(Debug, Clone)]
pub(super) struct HttpCatalog {
    buildings_url: String,
    floors: CatalogConfig,
}

impl Catalog for HttpCatalog {
    async fn buildings(&self) -> Result<Vec<Building>, FloorplanError> {
        fetch_json(&self.buildings_url).await
    }

    async fn floors(&self, building: BuildingId) -> Result<Vec<Floor>, FloorplanError> {
        match self.floors.floors_url(building) {
            Some(url) => {
                debug!(%building, %url, "fetching floors");
                fetch_json(&url).await
            }
            // Only buildings are served so far.
            None => StaticCatalog.floors(building).await,
        }
    }
}
