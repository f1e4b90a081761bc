use std::cell::RefCell;

use floorplan::config::RegionClickAction;
use floorplan::error::FloorplanError;
use floorplan::loads::LoadSequence;
use floorplan::model::Floor;
use floorplan::regions::{FloorPlanView, Region, RegionClick};
use tracing::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::fetch::{fetch_text, js_message};

thread_local! {
    static PLAN: RefCell<PlanState> = RefCell::new(PlanState::default());
}

/// The `<svg>` root currently in the container and its rectangles.
#[derive(Default)]
struct PlanState {
    view: FloorPlanView<web_sys::Element, RectRegion>,
    loads: LoadSequence,
    handler: Option<Closure<dyn FnMut(web_sys::MouseEvent)>>,
}

impl PlanState {
    fn release(&mut self) -> Result<usize, FloorplanError> {
        let Some(handler) = &self.handler else {
            return Ok(0);
        };
        self.view.release(handler.as_ref().unchecked_ref())
    }
}

struct RectRegion(web_sys::Element);

impl Region for RectRegion {
    type Listener = js_sys::Function;

    fn listen(&self, listener: &js_sys::Function) -> Result<(), FloorplanError> {
        self.0
            .add_event_listener_with_callback("click", listener)
            .map_err(|e| FloorplanError::dom("addEventListener", js_message(&e)))
    }

    fn unlisten(&self, listener: &js_sys::Function) -> Result<(), FloorplanError> {
        self.0
            .remove_event_listener_with_callback("click", listener)
            .map_err(|e| FloorplanError::dom("removeEventListener", js_message(&e)))
    }
}

/// Creates the shared click handler. Must run before the first [`load`].
pub(super) fn install(action: RegionClickAction) {
    let handler = Closure::wrap(Box::new(move |ev: web_sys::MouseEvent| {
        on_region_click(&ev, action);
    }) as Box<dyn FnMut(_)>);

    PLAN.with_borrow_mut(|plan| {
        // Regions bound to an older handler could not be detached later.
        if let Err(err) = plan.release() {
            warn!(error = %err, "failed to release regions of previous handler");
        }
        plan.handler = Some(handler);
    });
}

fn on_region_click(ev: &web_sys::MouseEvent, action: RegionClickAction) {
    let width = ev
        .current_target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.get_attribute("width"));
    let click = RegionClick::new(width);

    match action {
        RegionClickAction::Alert => {
            let Some(window) = web_sys::window() else {
                return;
            };
            if let Err(e) = window.alert_with_message(&click.message()) {
                warn!(error = %js_message(&e), "alert() failed");
            }
        }
        RegionClickAction::Log => info!(width = ?click.width, "region clicked"),
    }
}

/// Loads `floor`'s SVG into the container and binds its rectangles.
///
/// Listeners of the previous plan are released before the fetch starts.
/// Returns `Ok(None)` when a newer load started while this one was in flight;
/// its markup (or its failure) is dropped.
pub(super) async fn load(
    container_id: &str,
    floor: &Floor,
) -> Result<Option<usize>, FloorplanError> {
    let ticket = PLAN.with_borrow_mut(|plan| {
        let ticket = plan.loads.begin();
        if let Err(err) = plan.release() {
            warn!(error = %err, "failed to release previous floor plan listeners");
        }
        ticket
    });

    info!(floor = %floor.name, url = %floor.floor_img, "loading floor plan");
    let fetched = fetch_text(&floor.floor_img).await;

    if !PLAN.with_borrow(|plan| plan.loads.is_current(ticket)) {
        debug!(url = %floor.floor_img, "discarding stale floor plan");
        return Ok(None);
    }
    let markup = fetched?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(FloorplanError::NoWindow)?;
    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| FloorplanError::ContainerMissing {
            id: container_id.to_string(),
        })?;
    container.set_inner_html(&markup);

    let root = container
        .query_selector("svg")
        .map_err(|e| FloorplanError::dom("querySelector", js_message(&e)))?
        .ok_or_else(|| FloorplanError::MissingSvgRoot {
            url: floor.floor_img.clone(),
        })?;
    let rects = rect_regions(&root)?;

    let bound = PLAN.with_borrow_mut(|plan| {
        let Some(handler) = &plan.handler else {
            return Err(FloorplanError::dom(
                "addEventListener",
                "click handler not installed",
            ));
        };
        plan.view.show(root, rects, handler.as_ref().unchecked_ref())
    })?;

    info!(floor = %floor.name, regions = bound, "floor plan ready");
    Ok(Some(bound))
}

fn rect_regions(root: &web_sys::Element) -> Result<Vec<RectRegion>, FloorplanError> {
    let list = root
        .query_selector_all("rect")
        .map_err(|e| FloorplanError::dom("querySelectorAll", js_message(&e)))?;

    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(el) = list
            .item(i)
            .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
        {
            out.push(RectRegion(el));
        }
    }
    Ok(out)
}
