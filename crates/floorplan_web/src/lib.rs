//! Floor-plan page: two dropdowns pick a building and a floor, the floor's SVG
//! is fetched into `#svg-container`, and every `<rect>` in it reports its
//! width when clicked.
//!
//! The page only exists in wasm builds with the `web` feature
//! (`trunk serve --features web` from this directory). Native builds compile
//! just [`ui_model`], so the status line can be tested on the host.

pub mod ui_model;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::start;
