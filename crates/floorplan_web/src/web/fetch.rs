use floorplan::error::FloorplanError;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Best-effort text for a thrown JS value.
pub(super) fn js_message(v: &JsValue) -> String {
    if let Some(s) = v.as_string() {
        return s;
    }
    if let Some(err) = v.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{v:?}")
}

/// GET `url` and return the body as text; non-2xx statuses are errors.
pub(super) async fn fetch_text(url: &str) -> Result<String, FloorplanError> {
    let window = web_sys::window().ok_or(FloorplanError::NoWindow)?;
    let fetch_err = |e: JsValue| FloorplanError::Fetch {
        url: url.to_string(),
        message: js_message(&e),
    };

    let v = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(fetch_err)?;
    let resp = v
        .dyn_into::<web_sys::Response>()
        .map_err(|_| FloorplanError::Fetch {
            url: url.to_string(),
            message: "fetch() did not resolve to a Response".to_string(),
        })?;

    if !resp.ok() {
        return Err(FloorplanError::HttpStatus {
            url: url.to_string(),
            status: resp.status(),
        });
    }

    let body = JsFuture::from(resp.text().map_err(fetch_err)?)
        .await
        .map_err(fetch_err)?;
    body.as_string().ok_or_else(|| FloorplanError::Fetch {
        url: url.to_string(),
        message: "response body is not text".to_string(),
    })
}

pub(super) async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FloorplanError> {
    let body = fetch_text(url).await?;
    serde_json::from_str(&body).map_err(|source| FloorplanError::Decode {
        url: url.to_string(),
        source,
    })
}
