use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures of the browser APIs a behaviour is installed on.
///
/// Missing page elements are never reported here; those are skipped where
/// they are looked up.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        PageError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type PageResult<T> = Result<T, PageError>;
