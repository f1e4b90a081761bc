use floorplan::config::AppConfig;
use floorplan::error::FloorplanError;

/// Element holding the JSON page config, usually a
/// `<script type="application/json">`.
pub(super) const CONFIG_ELEMENT_ID: &str = "floorplan-config";

/// Reads the page config; `Ok(None)` when the page does not embed one.
pub(super) fn read() -> Result<Option<AppConfig>, FloorplanError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(FloorplanError::NoWindow)?;
    let Some(el) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(None);
    };
    let raw = el.text_content().unwrap_or_default();
    if raw.trim().is_empty() {
        return Ok(None);
    }
    AppConfig::from_json(&raw).map(Some)
}
