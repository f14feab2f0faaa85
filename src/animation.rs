//! Frame scheduling and DOM wiring for the contact-page particle animation.
//!
//! The [`AnimationController`] owns a `requestAnimationFrame` loop guarded by an
//! `active` flag, so the loop can be stopped and resumed. The frame closure
//! keeps itself and the [`Scene`] alive, so the loop outlives every handle to
//! it and only [`AnimationController::stop`] ends it. Pointer and resize
//! listeners feed the shared scene between frames.

use crate::config::ParticleConfig;
use crate::error::EffectsError;
use crate::field::ParticleField;
use crate::input::PointerState;
use crate::renderer::CanvasRenderer;
use crate::surface::Surface;
use crate::utils::listen;
use crate::Timer;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent, Window};

type FrameCallback = RefCell<Option<Closure<dyn FnMut()>>>;

/// Everything a frame touches
pub struct Scene {
    canvas: HtmlCanvasElement,
    renderer: CanvasRenderer,
    field: ParticleField,
    pointer: PointerState,
    profile_frames: bool,
}

impl Scene {
    fn render_frame(&mut self) {
        let _timer = if self.profile_frames {
            Some(Timer::new("ContactAnimation::frame"))
        } else {
            None
        };
        self.field.frame(&self.pointer, &mut self.renderer);
    }

    fn resize(&mut self) {
        let surface = fit_canvas(&self.canvas);
        self.field.resize(surface, &mut rand::thread_rng());
    }
}

// Match the canvas' backing store to its laid-out size
fn fit_canvas(canvas: &HtmlCanvasElement) -> Surface {
    let surface = Surface::from_layout(canvas.offset_width(), canvas.offset_height());
    canvas.set_width(surface.width);
    canvas.set_height(surface.height);
    surface
}

fn schedule(
    window: &Window,
    callback: &FrameCallback,
    pending: &Cell<Option<i32>>,
) -> Result<(), EffectsError> {
    if let Some(callback) = callback.borrow().as_ref() {
        let id = window.request_animation_frame(callback.as_ref().unchecked_ref())?;
        pending.set(Some(id));
    }
    Ok(())
}

#[derive(Clone)]
pub struct AnimationController {
    window: Window,
    scene: Rc<RefCell<Scene>>,
    active: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    callback: Rc<FrameCallback>,
}

impl AnimationController {
    pub fn new(window: Window, scene: Rc<RefCell<Scene>>) -> Self {
        let active = Rc::new(Cell::new(false));
        let pending = Rc::new(Cell::new(None));
        let callback: Rc<FrameCallback> = Rc::new(RefCell::new(None));

        let frame_window = window.clone();
        let frame_scene = scene.clone();
        let frame_active = active.clone();
        let frame_pending = pending.clone();
        let frame_callback = callback.clone();
        let closure = Closure::wrap(Box::new(move || {
            frame_pending.set(None);
            if !frame_active.get() {
                return;
            }
            frame_scene.borrow_mut().render_frame();
            if let Err(e) = schedule(&frame_window, &frame_callback, &frame_pending) {
                log::error!("could not schedule next frame: {}", e);
                frame_active.set(false);
            }
        }) as Box<dyn FnMut()>);
        *callback.borrow_mut() = Some(closure);

        AnimationController {
            window,
            scene,
            active,
            pending,
            callback,
        }
    }

    /// Begin (or resume) the frame loop; no-op while already running
    pub fn start(&self) -> Result<(), EffectsError> {
        if self.active.get() {
            return Ok(());
        }
        self.active.set(true);
        if let Err(e) = schedule(&self.window, &self.callback, &self.pending) {
            self.active.set(false);
            return Err(e);
        }
        log::debug!("particle animation running");
        Ok(())
    }

    /// Halt the loop and drop any frame already requested
    pub fn stop(&self) -> Result<(), EffectsError> {
        self.active.set(false);
        if let Some(id) = self.pending.take() {
            self.window.cancel_animation_frame(id)?;
        }
        log::debug!("particle animation stopped");
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub fn scene(&self) -> &Rc<RefCell<Scene>> {
        &self.scene
    }
}

fn wire_events(
    window: &Window,
    canvas: &HtmlCanvasElement,
    scene: &Rc<RefCell<Scene>>,
) -> Result<(), EffectsError> {
    let on_resize = scene.clone();
    listen(
        window,
        "resize",
        Closure::wrap(Box::new(move || {
            on_resize.borrow_mut().resize();
        }) as Box<dyn FnMut()>),
    )?;

    let on_move = scene.clone();
    let move_canvas = canvas.clone();
    listen(
        canvas,
        "mousemove",
        Closure::wrap(Box::new(move |event: MouseEvent| {
            let rect = move_canvas.get_bounding_client_rect();
            on_move.borrow_mut().pointer.on_move(
                event.client_x() as f64,
                event.client_y() as f64,
                [rect.left(), rect.top()],
            );
        }) as Box<dyn FnMut(MouseEvent)>),
    )?;

    let on_enter = scene.clone();
    listen(
        canvas,
        "mouseenter",
        Closure::wrap(Box::new(move || {
            on_enter.borrow_mut().pointer.on_enter();
        }) as Box<dyn FnMut()>),
    )?;

    let on_leave = scene.clone();
    listen(
        canvas,
        "mouseleave",
        Closure::wrap(Box::new(move || {
            on_leave.borrow_mut().pointer.on_leave();
        }) as Box<dyn FnMut()>),
    )?;

    Ok(())
}

/// Handle to the running contact-page animation.
///
/// Freeing the handle leaves the animation running; call `stop` to end it.
#[wasm_bindgen]
#[derive(Clone)]
pub struct ContactAnimation {
    controller: AnimationController,
}

impl ContactAnimation {
    /// Attach to the configured canvas and start animating.
    ///
    /// Returns `Ok(None)` when the page has no such canvas.
    pub fn attach(config: ParticleConfig) -> Result<Option<ContactAnimation>, EffectsError> {
        let window = web_sys::window().ok_or(EffectsError::NoWindow)?;
        let document = window.document().ok_or(EffectsError::NoDocument)?;
        let element = match document.get_element_by_id(&config.canvas_id) {
            Some(element) => element,
            None => {
                log::debug!("no #{} on this page, animation not started", config.canvas_id);
                return Ok(None);
            }
        };
        let canvas = element
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| EffectsError::NotACanvas(config.canvas_id.clone()))?;

        let renderer = CanvasRenderer::new(&canvas)?;
        let surface = fit_canvas(&canvas);
        let profile_frames = config.profile_frames;
        let field = ParticleField::new(surface, config, &mut rand::thread_rng());
        log::info!(
            "contact animation on {}x{} canvas with {} particles",
            surface.width,
            surface.height,
            field.len()
        );

        let scene = Rc::new(RefCell::new(Scene {
            canvas: canvas.clone(),
            renderer,
            field,
            pointer: PointerState::default(),
            profile_frames,
        }));

        let controller = AnimationController::new(window.clone(), scene.clone());
        controller.start()?;
        wire_events(&window, &canvas, &scene)?;

        Ok(Some(ContactAnimation { controller }))
    }

    /// Pointer state as last reported by the canvas listeners
    pub fn pointer(&self) -> PointerState {
        self.controller.scene().borrow().pointer
    }
}

#[wasm_bindgen]
impl ContactAnimation {
    pub fn stop(&self) -> Result<(), JsValue> {
        Ok(self.controller.stop()?)
    }

    pub fn resume(&self) -> Result<(), JsValue> {
        Ok(self.controller.start()?)
    }

    pub fn is_active(&self) -> bool {
        self.controller.is_active()
    }

    pub fn particle_count(&self) -> usize {
        self.controller.scene().borrow().field.len()
    }

    /// Re-measure the canvas and regenerate the particles
    pub fn resize(&self) {
        self.controller.scene().borrow_mut().resize();
    }
}
