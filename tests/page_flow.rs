//! Drives the selection and region bookkeeping the way the page does, with a
//! catalog that actually distinguishes buildings.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use floorplan::prelude::*;

struct PerBuildingCatalog {
    floors: HashMap<BuildingId, Vec<Floor>>,
}

impl PerBuildingCatalog {
    fn new() -> Self {
        let mut floors = HashMap::new();
        floors.insert(
            BuildingId(1),
            vec![floor(1, "1", "images/a1.svg"), floor(2, "2", "images/a2.svg")],
        );
        floors.insert(BuildingId(2), vec![floor(7, "Basement", "images/b0.svg")]);
        Self { floors }
    }
}

impl Catalog for PerBuildingCatalog {
    async fn buildings(&self) -> Result<Vec<Building>, FloorplanError> {
        Ok(vec![
            Building {
                id: BuildingId(1),
                name: "North".to_string(),
            },
            Building {
                id: BuildingId(2),
                name: "South".to_string(),
            },
        ])
    }

    async fn floors(&self, building: BuildingId) -> Result<Vec<Floor>, FloorplanError> {
        Ok(self.floors.get(&building).cloned().unwrap_or_default())
    }
}

struct FailingCatalog;

impl Catalog for FailingCatalog {
    async fn buildings(&self) -> Result<Vec<Building>, FloorplanError> {
        Err(FloorplanError::HttpStatus {
            url: "/api/buildings".to_string(),
            status: 503,
        })
    }

    async fn floors(&self, _building: BuildingId) -> Result<Vec<Floor>, FloorplanError> {
        Ok(Vec::new())
    }
}

fn floor(id: u32, name: &str, img: &str) -> Floor {
    Floor {
        id: FloorId(id),
        name: name.to_string(),
        floor_img: img.to_string(),
    }
}

/// A fake page: one listener counter per rect of every floor plan ever shown.
#[derive(Default)]
struct Page {
    listeners: RefCell<HashMap<String, i32>>,
}

struct Rect {
    key: String,
    width: String,
    page: Rc<Page>,
}

impl Region for Rect {
    type Listener = str;

    fn listen(&self, _listener: &str) -> Result<(), FloorplanError> {
        *self.page.listeners.borrow_mut().entry(self.key.clone()).or_default() += 1;
        Ok(())
    }

    fn unlisten(&self, _listener: &str) -> Result<(), FloorplanError> {
        *self.page.listeners.borrow_mut().entry(self.key.clone()).or_default() -= 1;
        Ok(())
    }
}

fn rects_for(page: &Rc<Page>, floor: &Floor, count: usize) -> Vec<Rect> {
    (0..count)
        .map(|i| Rect {
            key: format!("{}#{i}", floor.floor_img),
            width: format!("{}", 10 * (i + 1)),
            page: Rc::clone(page),
        })
        .collect()
}

#[test]
fn selecting_a_building_populates_its_floors() {
    let catalog = PerBuildingCatalog::new();
    let mut selection = pollster::block_on(initial_selection(&catalog)).unwrap();
    assert_eq!(selection.floor_options().len(), 2);

    let building = selection.select_building_value("2").unwrap().id;
    let floors = pollster::block_on(catalog.floors(building)).unwrap();
    let current = selection
        .replace_floors_for(building, floors)
        .unwrap()
        .cloned()
        .unwrap();

    assert_eq!(current.floor_img, "images/b0.svg");
    let options = selection.floor_options();
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].value, "7");
    assert_eq!(options[0].label, "Basement");
    assert_eq!(selection.floor_value(), "7");
}

#[test]
fn floor_switch_moves_listeners_to_the_new_plan() {
    let page = Rc::new(Page::default());
    let catalog = PerBuildingCatalog::new();
    let mut selection = pollster::block_on(initial_selection(&catalog)).unwrap();
    let mut bindings = RegionBindings::new();

    let first = selection.current_floor().cloned().unwrap();
    bindings
        .bind_all(rects_for(&page, &first, 3), "click")
        .unwrap();

    let second = selection.select_floor_value("2").cloned().unwrap();
    bindings
        .bind_all(rects_for(&page, &second, 2), "click")
        .unwrap();

    let listeners = page.listeners.borrow();
    for i in 0..3 {
        assert_eq!(listeners[&format!("images/a1.svg#{i}")], 0);
    }
    for i in 0..2 {
        assert_eq!(listeners[&format!("images/a2.svg#{i}")], 1);
    }
}

#[test]
fn clicked_region_reports_its_width() {
    let page = Rc::new(Page::default());
    let plan = floor(1, "1", "images/a1.svg");
    let mut bindings = RegionBindings::new();
    bindings.bind_all(rects_for(&page, &plan, 2), "click").unwrap();

    let clicked = &bindings.regions()[1];
    let message = RegionClick::new(Some(clicked.width.clone())).message();
    assert_eq!(message, "Click on rect with width = 20");
}

#[test]
fn stale_load_does_not_win() {
    let mut loads = LoadSequence::new();
    let slow = loads.begin();
    let fast = loads.begin();

    assert!(loads.is_current(fast));
    assert!(!loads.is_current(slow));
}

#[test]
fn catalog_failure_aborts_initial_selection() {
    let err = pollster::block_on(initial_selection(&FailingCatalog)).unwrap_err();
    assert!(matches!(err, FloorplanError::HttpStatus { status: 503, .. }));
}
