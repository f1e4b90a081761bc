//! Current building/floor selection behind the two dropdowns.

use tracing::{debug, warn};

use super::catalog::Catalog;
use super::error::FloorplanError;
use super::model::{
    parse_option_id, select_options, Building, BuildingId, Floor, FloorId, SelectOption,
};

/// Lists shown in the dropdowns plus what is currently picked.
///
/// An unknown id clears the matching selection instead of failing; callers
/// skip the floor-plan reload when [`Selection::current_floor`] is `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    buildings: Vec<Building>,
    floors: Vec<Floor>,
    building: Option<BuildingId>,
    floor: Option<FloorId>,
}

impl Selection {
    /// Starts on the first building and the first floor.
    pub fn new(buildings: Vec<Building>, floors: Vec<Floor>) -> Self {
        let building = buildings.first().map(|b| b.id);
        let floor = floors.first().map(|f| f.id);
        Self {
            buildings,
            floors,
            building,
            floor,
        }
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    pub fn current_building(&self) -> Option<&Building> {
        let id = self.building?;
        self.buildings.iter().find(|b| b.id == id)
    }

    pub fn current_floor(&self) -> Option<&Floor> {
        let id = self.floor?;
        self.floors.iter().find(|f| f.id == id)
    }

    /// Whether `building` is still what the building dropdown points at.
    ///
    /// Anything loaded for another building is stale, whether it succeeded or
    /// failed.
    pub fn is_current_building(&self, building: BuildingId) -> bool {
        self.building == Some(building)
    }

    /// Applies a building dropdown value.
    pub fn select_building_value(&mut self, raw: &str) -> Option<&Building> {
        self.building = parse_option_id(raw)
            .map(BuildingId)
            .filter(|id| self.buildings.iter().any(|b| b.id == *id));
        if self.building.is_none() {
            warn!(value = raw, "building selection does not match any building");
        }
        self.current_building()
    }

    /// Applies a floor dropdown value.
    pub fn select_floor_value(&mut self, raw: &str) -> Option<&Floor> {
        self.floor = parse_option_id(raw)
            .map(FloorId)
            .filter(|id| self.floors.iter().any(|f| f.id == *id));
        if self.floor.is_none() {
            warn!(value = raw, "floor selection does not match any floor");
        }
        self.current_floor()
    }

    /// Installs the floors loaded for `building` and picks the first one.
    ///
    /// Returns `None` without touching anything when `building` is no longer
    /// the current building: the user switched again while the list loaded.
    pub fn replace_floors_for(
        &mut self,
        building: BuildingId,
        floors: Vec<Floor>,
    ) -> Option<Option<&Floor>> {
        if !self.is_current_building(building) {
            debug!(%building, "discarding floor list for a building no longer selected");
            return None;
        }
        self.floor = floors.first().map(|f| f.id);
        self.floors = floors;
        Some(self.current_floor())
    }

    pub fn building_options(&self) -> Vec<SelectOption> {
        select_options(&self.buildings)
    }

    pub fn floor_options(&self) -> Vec<SelectOption> {
        select_options(&self.floors)
    }

    /// Value the building dropdown should show; empty when nothing matches.
    pub fn building_value(&self) -> String {
        self.building.map(|id| id.to_string()).unwrap_or_default()
    }

    pub fn floor_value(&self) -> String {
        self.floor.map(|id| id.to_string()).unwrap_or_default()
    }
}

/// Loads buildings, then the floors of the first building.
pub async fn initial_selection<C: Catalog>(catalog: &C) -> Result<Selection, FloorplanError> {
    let buildings = catalog.buildings().await?;
    let floors = match buildings.first() {
        Some(first) => catalog.floors(first.id).await?,
        None => {
            warn!("catalog returned no buildings");
            Vec::new()
        }
    };
    debug!(
        buildings = buildings.len(),
        floors = floors.len(),
        "initial selection loaded"
    );
    Ok(Selection::new(buildings, floors))
}
