//! Error type shared by the core library and the web front end.

use thiserror::Error;

/// Everything that can go wrong while building the page or loading a floor plan.
#[derive(Debug, Error)]
pub enum FloorplanError {
    /// Running outside a browser window (or the window has no document).
    #[error("no browser window available")]
    NoWindow,

    /// The host page lacks the element the floor plan is injected into.
    #[error("container element '#{id}' not found in page")]
    ContainerMissing { id: String },

    /// The fetched markup did not contain an `<svg>` element.
    #[error("floor plan from '{url}' has no <svg> root")]
    MissingSvgRoot { url: String },

    /// The request itself failed (network error, CORS, aborted).
    #[error("request to '{url}' failed: {message}")]
    Fetch { url: String, message: String },

    /// The server answered with a non-2xx status.
    #[error("request to '{url}' returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// A catalog response was not the JSON we expected.
    #[error("failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The page config could not be parsed.
    #[error("invalid page config: {0}")]
    ConfigJson(#[from] serde_json::Error),

    /// The page config parsed but holds an unusable value.
    #[error("invalid page config: {0}")]
    InvalidConfig(String),

    /// A DOM call threw.
    #[error("DOM call {op} failed: {message}")]
    Dom { op: &'static str, message: String },
}

impl FloorplanError {
    pub fn dom(op: &'static str, message: impl Into<String>) -> Self {
        Self::Dom {
            op,
            message: message.into(),
        }
    }
}
