// Trunk builds this binary; `wasm_start` runs once the module is loaded and
// builds the selection panel above the floor-plan container.

fn main() {}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_start() {
    floorplan_web::start();
}
