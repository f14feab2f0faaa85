//! Error types for attaching the page effects to the DOM.

use std::fmt;
use wasm_bindgen::JsValue;

/// Error type for effect setup and DOM wiring
#[derive(Debug, Clone, PartialEq)]
pub enum EffectsError {
    /// No global `window` (not running in a browser)
    NoWindow,
    /// `window.document` is missing
    NoDocument,
    /// The element with the given id exists but is not a `<canvas>`
    NotACanvas(String),
    /// The canvas refused to hand out a 2d context
    NoContext,
    /// The slide selector matched nothing
    NoSlides(String),
    /// The hero selector matched nothing
    NoHero(String),
    /// Configuration could not be parsed or is inconsistent
    Config(String),
    /// A DOM call threw
    Js(String),
}

impl fmt::Display for EffectsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EffectsError::NoWindow => write!(f, "no global window"),
            EffectsError::NoDocument => write!(f, "window has no document"),
            EffectsError::NotACanvas(id) => write!(f, "element '#{}' is not a canvas", id),
            EffectsError::NoContext => write!(f, "canvas has no 2d context"),
            EffectsError::NoSlides(selector) => write!(f, "no slides match '{}'", selector),
            EffectsError::NoHero(selector) => write!(f, "no hero element matches '{}'", selector),
            EffectsError::Config(msg) => write!(f, "invalid configuration: {}", msg),
            EffectsError::Js(msg) => write!(f, "DOM call failed: {}", msg),
        }
    }
}

impl std::error::Error for EffectsError {}

impl From<JsValue> for EffectsError {
    fn from(value: JsValue) -> Self {
        EffectsError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<serde_json::Error> for EffectsError {
    fn from(err: serde_json::Error) -> Self {
        EffectsError::Config(err.to_string())
    }
}

impl From<EffectsError> for JsValue {
    fn from(err: EffectsError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
