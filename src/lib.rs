mod utils;

pub mod animation;
pub mod color;
pub mod config;
pub mod error;
pub mod field;
pub mod input;
pub mod particle;
pub mod renderer;
pub mod slider;
pub mod surface;

use wasm_bindgen::prelude::*;
use web_sys::console;

pub use animation::ContactAnimation;
pub use config::{ParticleConfig, SliderConfig};
pub use error::EffectsError;
pub use slider::HeroSlider;
pub use surface::Surface;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Install the panic hook and the console logger. Call once per page.
#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
    utils::init_logging();
}

/// Start the particle animation on the contact canvas.
///
/// `config_json` may override any field of [`ParticleConfig`]. Resolves to
/// `undefined` when the page has no matching canvas. The animation runs for
/// the lifetime of the page whether or not the returned handle is kept; the
/// handle is only needed to `stop` or `resume` it.
#[wasm_bindgen]
pub fn start_contact_animation(
    config_json: Option<String>,
) -> Result<Option<ContactAnimation>, JsValue> {
    let config = ParticleConfig::resolve(config_json)?;
    if config.debug {
        utils::enable_debug_logging();
    }
    Ok(ContactAnimation::attach(config)?)
}

/// Start the hero slider.
///
/// A page without slides is left alone; the problem is logged and
/// `undefined` is returned. Like the animation, the rotation does not depend
/// on the returned handle staying alive.
#[wasm_bindgen]
pub fn start_hero_slider(config_json: Option<String>) -> Result<Option<HeroSlider>, JsValue> {
    let config = SliderConfig::resolve(config_json)?;
    match HeroSlider::attach(config) {
        Ok(slider) => Ok(Some(slider)),
        Err(EffectsError::NoSlides(selector)) => {
            log::warn!("no elements match '{}', hero slider not started", selector);
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Scoped `console.time` / `console.timeEnd` pair
pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}
