use floorplan::catalog::Catalog;
use floorplan::config::AppConfig;
use floorplan::error::FloorplanError;
use floorplan::model::Floor;
use floorplan::selection::{initial_selection, Selection};
use leptos::prelude::*;
use tracing::{debug, error, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::ui_model::PanelStatus;

mod catalog;
mod fetch;
mod floor_plan;
mod logging;
mod page_config;
mod panel;

use catalog::PageCatalog;
use fetch::js_message;
use panel::SelectionPanel;

/// Reads the page config, sets up logging and builds the page.
pub fn start() {
    let page_config = page_config::read();
    let config = match &page_config {
        Ok(Some(config)) => config.clone(),
        _ => AppConfig::default(),
    };
    logging::init(config.log_level());
    if let Err(err) = &page_config {
        warn!(error = %err, "ignoring page config, using defaults");
    }

    spawn_local(async move {
        if let Err(err) = run(config).await {
            error!(error = %err, "floor plan page failed to start");
        }
    });
}

async fn run(config: AppConfig) -> Result<(), FloorplanError> {
    let catalog = PageCatalog::from_config(&config.catalog);
    let selection = initial_selection(&catalog).await?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(FloorplanError::NoWindow)?;
    if document.get_element_by_id(&config.container_id).is_none() {
        return Err(FloorplanError::ContainerMissing {
            id: config.container_id,
        });
    }
    let body = document
        .body()
        .ok_or_else(|| FloorplanError::dom("document.body", "page has no <body>"))?;

    // The panel goes above everything else on the page.
    let host = document
        .create_element("div")
        .map_err(|e| FloorplanError::dom("createElement", js_message(&e)))?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| FloorplanError::dom("createElement", "not an HtmlElement"))?;
    body.prepend_with_node_1(&host)
        .map_err(|e| FloorplanError::dom("prepend", js_message(&e)))?;

    floor_plan::install(config.region_click);
    info!(
        buildings = selection.buildings().len(),
        floors = selection.floors().len(),
        "mounting selection panel"
    );
    leptos::mount::mount_to(host, move || {
        view! { <App config=config catalog=catalog selection=selection /> }
    })
    .forget();
    Ok(())
}

#[component]
fn App(config: AppConfig, catalog: PageCatalog, selection: Selection) -> impl IntoView {
    let initial_floor = selection.current_floor().cloned();
    let selection = RwSignal::new(selection);
    let (status, set_status) = signal(PanelStatus::Idle);
    let catalog = StoredValue::new(catalog);
    let container_id = StoredValue::new(config.container_id.clone());

    spawn_local(load_floor(container_id.get_value(), initial_floor, set_status));

    let on_building = Callback::new(move |raw: String| {
        let Some(building) = selection
            .try_update(|s| s.select_building_value(&raw).map(|b| b.id))
            .flatten()
        else {
            return;
        };
        let catalog = catalog.get_value();
        let container_id = container_id.get_value();
        spawn_local(async move {
            let floors = match catalog.floors(building).await {
                Ok(floors) => floors,
                Err(err) => {
                    if !selection.with_untracked(|s| s.is_current_building(building)) {
                        debug!(
                            error = %err,
                            %building,
                            "ignoring failure for a previous building"
                        );
                        return;
                    }
                    error!(error = %err, %building, "failed to load floors");
                    set_status.set(PanelStatus::Failed(err.to_string()));
                    return;
                }
            };
            // None: the user picked another building while this list loaded.
            let Some(floor) = selection
                .try_update(|s| s.replace_floors_for(building, floors).map(|f| f.cloned()))
                .flatten()
            else {
                return;
            };
            load_floor(container_id, floor, set_status).await;
        });
    });

    let on_floor = Callback::new(move |raw: String| {
        let floor = selection
            .try_update(|s| s.select_floor_value(&raw).cloned())
            .flatten();
        spawn_local(load_floor(container_id.get_value(), floor, set_status));
    });

    view! {
        <SelectionPanel
            selection=selection
            status=status
            buildings_label=config.buildings_label
            floors_label=config.floors_label
            on_building=on_building
            on_floor=on_floor
        />
    }
}

async fn load_floor(
    container_id: String,
    floor: Option<Floor>,
    set_status: WriteSignal<PanelStatus>,
) {
    let Some(floor) = floor else {
        warn!("no floor selected, keeping the current floor plan");
        set_status.set(PanelStatus::NoFloor);
        return;
    };

    set_status.set(PanelStatus::Loading {
        floor: floor.name.clone(),
    });
    match floor_plan::load(&container_id, &floor).await {
        Ok(Some(regions)) => set_status.set(PanelStatus::Ready {
            floor: floor.name,
            regions,
        }),
        // A newer load owns the status line.
        Ok(None) => {}
        Err(err) => {
            error!(error = %err, url = %floor.floor_img, "failed to load floor plan");
            set_status.set(PanelStatus::Failed(err.to_string()));
        }
    }
}
