//! # floorplan
//!
//! Building and floor selection for an interactive SVG floor-plan page.
//!
//! The page itself lives in the `floorplan_web` crate (WASM). This crate holds
//! everything that does not need a browser, so it can be unit-tested on the
//! host:
//!
//! ```
//! use floorplan::prelude::*;
//!
//! let mut selection = Selection::new(
//!     StaticCatalog::building_list(),
//!     StaticCatalog::floor_list(),
//! );
//! let floor = selection.select_floor_value("2").unwrap();
//! assert_eq!(floor.floor_img, "images/1.svg");
//! ```
//!
//! ## Modules
//!
//! - [`model`]: Buildings, floors and dropdown options
//! - [`catalog`]: Where building/floor lists come from
//! - [`selection`]: What the two dropdowns currently point at
//! - [`regions`]: Click listeners on floor-plan rectangles
//! - [`loads`]: Ordering of overlapping floor-plan loads
//! - [`config`]: Page configuration
//! - [`error`]: Error type

#[path = "core/catalog.rs"]
pub mod catalog;

#[path = "core/config.rs"]
pub mod config;

#[path = "core/error.rs"]
pub mod error;

#[path = "core/loads.rs"]
pub mod loads;

#[path = "core/model.rs"]
pub mod model;

#[path = "core/regions.rs"]
pub mod regions;

#[path = "core/selection.rs"]
pub mod selection;

/// Prelude module for convenient imports.
///
/// ```
/// use floorplan::prelude::*;
/// ```
pub mod prelude {
    pub use crate::catalog::{Catalog, StaticCatalog};
    pub use crate::config::{AppConfig, CatalogConfig, RegionClickAction};
    pub use crate::error::FloorplanError;
    pub use crate::loads::{LoadSequence, LoadTicket};
    pub use crate::model::{Building, BuildingId, Floor, FloorId, SelectOption};
    pub use crate::regions::{FloorPlanView, Region, RegionBindings, RegionClick};
    pub use crate::selection::{initial_selection, Selection};
}
