use crate::error::EffectsError;
use wasm_bindgen::closure::{Closure, WasmClosure};
use wasm_bindgen::JsCast;
use web_sys::EventTarget;

pub fn set_panic_hook() {
    // When the `console_error_panic_hook` feature is enabled, we can call the
    // `set_panic_hook` function at least once during initialization, and then
    // we will get better error messages if our code ever panics.
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

pub fn init_logging() {
    // a second initialize() keeps the first logger
    console_log::init_with_level(log::Level::Info).ok();
}

pub fn enable_debug_logging() {
    log::set_max_level(log::LevelFilter::Debug);
}

/// Register `handler` on `target` for the lifetime of the page
pub fn listen<T>(target: &EventTarget, event: &str, handler: Closure<T>) -> Result<(), EffectsError>
where
    T: ?Sized + WasmClosure,
{
    target.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}
