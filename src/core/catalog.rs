//! Where building and floor lists come from.
//!
//! The page only needs two queries: the list of buildings, and the floors of
//! one building. [`StaticCatalog`] answers both from hardcoded tables until a
//! backend exists; the web front end adds an HTTP implementation.

use tracing::debug;

use super::error::FloorplanError;
use super::model::{Building, BuildingId, Floor, FloorId};

const BUILDINGS: &[(u32, &str)] = &[
    (1, "Building 1"),
    (2, "Building 2"),
    (3, "Building 3"),
    (4, "Building 4"),
    (5, "Building 5"),
    (6, "Building 6"),
    (7, "Building 7"),
    (8, "Building 8"),
    (9, "Building 9"),
    (10, "Building 10"),
    (11, "Building 11"),
];

const FLOORS: &[(u32, &str, &str)] = &[
    (1, "4", "images/floor_4.svg"),
    (2, "1", "images/1.svg"),
    (3, "2", "images/2.svg"),
    (4, "3", "images/3.svg"),
];

/// Source of building and floor lists.
#[allow(async_fn_in_trait)]
pub trait Catalog {
    async fn buildings(&self) -> Result<Vec<Building>, FloorplanError>;

    async fn floors(&self, building: BuildingId) -> Result<Vec<Floor>, FloorplanError>;
}

/// Hardcoded lists. Every building currently shares the same floors.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalog;

impl StaticCatalog {
    pub fn building_list() -> Vec<Building> {
        BUILDINGS
            .iter()
            .map(|&(id, name)| Building {
                id: BuildingId(id),
                name: name.to_string(),
            })
            .collect()
    }

    pub fn floor_list() -> Vec<Floor> {
        FLOORS
            .iter()
            .map(|&(id, name, img)| Floor {
                id: FloorId(id),
                name: name.to_string(),
                floor_img: img.to_string(),
            })
            .collect()
    }
}

impl Catalog for StaticCatalog {
    async fn buildings(&self) -> Result<Vec<Building>, FloorplanError> {
        Ok(Self::building_list())
    }

    async fn floors(&self, building: BuildingId) -> Result<Vec<Floor>, FloorplanError> {
        debug!(%building, "serving static floor list");
        Ok(Self::floor_list())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_buildings_are_numbered_one_to_eleven() {
        let buildings = pollster::block_on(StaticCatalog.buildings()).unwrap();
        assert_eq!(buildings.len(), 11);
        assert_eq!(buildings[0].id, BuildingId(1));
        assert_eq!(buildings[0].name, "Building 1");
        assert_eq!(buildings[10].id, BuildingId(11));
    }

    #[test]
    fn static_floors_ignore_the_building() {
        let a = pollster::block_on(StaticCatalog.floors(BuildingId(1))).unwrap();
        let b = pollster::block_on(StaticCatalog.floors(BuildingId(9))).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 4);
        assert_eq!(a[0].name, "4");
        assert_eq!(a[0].floor_img, "images/floor_4.svg");
    }
}
