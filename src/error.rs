//! Error type for configuration, install and DOM failures.
//!
//! The recompute path itself never returns these to a caller; it logs them.
//! They surface from config loading and from the browser install routine.

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("invalid layout config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
    #[error("invalid layout setting `{field}`: {reason}")]
    InvalidSetting { field: &'static str, reason: &'static str },
    #[error("style property `{property}` was rejected")]
    StyleRejected { property: &'static str },
    #[error("no window in this context")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("could not register `{event}` listener")]
    ListenerRejected { event: &'static str },
    #[error("canvas layout is already installed")]
    AlreadyInstalled,
    #[error("canvas layout is not installed")]
    NotInstalled,
}

#[cfg(feature = "browser")]
impl From<LayoutError> for wasm_bindgen::JsValue {
    fn from(err: LayoutError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
