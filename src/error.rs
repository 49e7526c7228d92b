//! Error types for configuration and browser interop.
//!
//! Components never surface these to the visitor: the DOM bindings log them
//! and carry on, so one broken widget cannot stop the others from mounting.

/// Failure while touching the browser environment.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no global window")]
    MissingWindow,
    #[error("window has no document")]
    MissingDocument,
    #[error("element is not a {0}")]
    WrongElementType(&'static str),
    #[error("javascript exception: {0}")]
    Js(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for DomError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// Failure while parsing or validating the embedded page config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown log level: {0}")]
    UnknownLogLevel(String),
    #[error("typing effect needs at least one phrase")]
    EmptyPhrases,
}

/// Failure reading or writing the preference store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage rejected the write: {0}")]
    WriteRejected(String),
}
