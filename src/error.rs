//! Mount Errors
//!
//! Filtering itself cannot fail; only attaching to the page can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MountError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element not found: {0}")]
    MissingElement(String),
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<wasm_bindgen::JsValue> for MountError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        MountError::Js(format!("{:?}", value))
    }
}

pub type MountResult<T> = Result<T, MountError>;
