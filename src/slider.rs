//! Hero banner slider.
//!
//! [`SlideRotation`] is the DOM-free state machine: a current index into a
//! fixed number of slides plus a running flag. [`HeroSlider`] drives it from a
//! `setInterval` timer and mirrors every change onto the slides' class lists.
//! The timer and hover listeners hold the slider state themselves, so the
//! rotation keeps going after the JS handle is freed; only `stop` pauses it.

use crate::config::SliderConfig;
use crate::error::EffectsError;
use crate::utils::listen;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

/// A move from one slide to the next
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SlideChange {
    pub previous: usize,
    pub current: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideRotation {
    index: usize,
    len: usize,
    running: bool,
}

impl SlideRotation {
    /// Starts on the first slide, stopped. `None` without any slides.
    pub fn new(len: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        Some(SlideRotation {
            index: 0,
            len,
            running: false,
        })
    }

    pub fn current(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns false if already running
    pub fn start(&mut self) -> bool {
        let was_stopped = !self.running;
        self.running = true;
        was_stopped
    }

    /// Returns false if already stopped
    pub fn stop(&mut self) -> bool {
        let was_running = self.running;
        self.running = false;
        was_running
    }

    /// Step to the next slide, wrapping at the end
    pub fn advance(&mut self) -> SlideChange {
        let previous = self.index;
        self.index = (self.index + 1) % self.len;
        SlideChange {
            previous,
            current: self.index,
        }
    }

    /// Timer tick: advances only while running
    pub fn tick(&mut self) -> Option<SlideChange> {
        if self.running {
            Some(self.advance())
        } else {
            None
        }
    }
}

struct SliderInner {
    window: Window,
    slides: Vec<Element>,
    rotation: RefCell<SlideRotation>,
    timer: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
    config: SliderConfig,
}

impl SliderInner {
    fn apply(&self, change: SlideChange) -> Result<(), EffectsError> {
        self.slides[change.previous]
            .class_list()
            .remove_1(&self.config.active_class)?;
        self.slides[change.current]
            .class_list()
            .add_1(&self.config.active_class)?;
        log::debug!("hero slide {} -> {}", change.previous, change.current);
        Ok(())
    }

    // Exactly the current slide carries the active class
    fn sync(&self) -> Result<(), EffectsError> {
        let current = self.rotation.borrow().current();
        for (i, slide) in self.slides.iter().enumerate() {
            if i == current {
                slide.class_list().add_1(&self.config.active_class)?;
            } else {
                slide.class_list().remove_1(&self.config.active_class)?;
            }
        }
        Ok(())
    }

    fn on_tick(&self) {
        let change = self.rotation.borrow_mut().tick();
        if let Some(change) = change {
            if let Err(e) = self.apply(change) {
                log::error!("hero slider tick failed: {}", e);
            }
        }
    }

    fn start(&self) -> Result<(), EffectsError> {
        if !self.rotation.borrow_mut().start() {
            return Ok(());
        }
        let tick = self.tick.borrow();
        if let Some(tick) = tick.as_ref() {
            let id = self
                .window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    tick.as_ref().unchecked_ref(),
                    self.config.interval_ms,
                )
                .map_err(|e| {
                    self.rotation.borrow_mut().stop();
                    EffectsError::from(e)
                })?;
            self.timer.set(Some(id));
        }
        Ok(())
    }

    fn stop(&self) {
        self.rotation.borrow_mut().stop();
        if let Some(id) = self.timer.take() {
            self.window.clear_interval_with_handle(id);
        }
    }
}

fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, EffectsError> {
    let nodes = document.query_selector_all(selector)?;
    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(element) = nodes.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            elements.push(element);
        }
    }
    Ok(elements)
}

/// Rotating hero banner; one per page.
///
/// Freeing the handle leaves the rotation running; call `stop` to pause it.
#[wasm_bindgen]
#[derive(Clone)]
pub struct HeroSlider {
    inner: Rc<SliderInner>,
}

impl HeroSlider {
    /// Collect the slides, start the timer, and pause on hover if configured
    pub fn attach(config: SliderConfig) -> Result<HeroSlider, EffectsError> {
        let window = web_sys::window().ok_or(EffectsError::NoWindow)?;
        let document = window.document().ok_or(EffectsError::NoDocument)?;
        let slides = query_all(&document, &config.slide_selector)?;
        let rotation = SlideRotation::new(slides.len())
            .ok_or_else(|| EffectsError::NoSlides(config.slide_selector.clone()))?;
        let hero = if config.pause_on_hover {
            Some(
                document
                    .query_selector(&config.hero_selector)?
                    .ok_or_else(|| EffectsError::NoHero(config.hero_selector.clone()))?,
            )
        } else {
            None
        };

        let inner = Rc::new(SliderInner {
            window,
            slides,
            rotation: RefCell::new(rotation),
            timer: Cell::new(None),
            tick: RefCell::new(None),
            config,
        });

        let ticking = inner.clone();
        *inner.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            ticking.on_tick();
        }) as Box<dyn FnMut()>));

        inner.sync()?;
        inner.start()?;

        if let Some(hero) = hero {
            let on_enter = inner.clone();
            listen(
                &hero,
                "mouseenter",
                Closure::wrap(Box::new(move || {
                    on_enter.stop();
                }) as Box<dyn FnMut()>),
            )?;
            let on_leave = inner.clone();
            listen(
                &hero,
                "mouseleave",
                Closure::wrap(Box::new(move || {
                    if let Err(e) = on_leave.start() {
                        log::error!("could not resume hero slider: {}", e);
                    }
                }) as Box<dyn FnMut()>),
            )?;
        }

        log::info!(
            "hero slider with {} slides every {} ms",
            inner.slides.len(),
            inner.config.interval_ms
        );
        Ok(HeroSlider { inner })
    }
}

#[wasm_bindgen]
impl HeroSlider {
    pub fn start(&self) -> Result<(), JsValue> {
        Ok(self.inner.start()?)
    }

    pub fn stop(&self) {
        self.inner.stop();
    }

    /// Show the next slide immediately, running or not
    pub fn advance(&self) -> Result<(), JsValue> {
        let change = self.inner.rotation.borrow_mut().advance();
        Ok(self.inner.apply(change)?)
    }

    pub fn current_index(&self) -> usize {
        self.inner.rotation.borrow().current()
    }

    pub fn slide_count(&self) -> usize {
        self.inner.slides.len()
    }

    pub fn is_running(&self) -> bool {
        self.inner.rotation.borrow().is_running()
    }
}
