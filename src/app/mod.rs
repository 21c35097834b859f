//! Browser session lifecycle
//!
//! Owns the game loop driver and the input adapter:
//! the `requestAnimationFrame` handle, the click/touch/resize listeners,
//! and the mount/unmount boundary toward the hosting page. All state hangs
//! off one `Rc<RefCell<_>>` shared between the frame closure and the input
//! closures; everything runs on the single browser thread.
//!
//! Motion is stepped once per frame callback with no delta-time scaling,
//! so effective speed follows the host's frame cadence.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlCanvasElement, MouseEvent, TouchEvent};

use crate::config::Settings;
use crate::render::CanvasRenderer;
use crate::sim::{GameSession, collision, motion, starfield};

/// Canvas id the module-load entry auto-mounts onto
const AUTO_CANVAS_ID: &str = "game-canvas";

thread_local! {
    static AUTO_VIEW: RefCell<Option<GameView>> = const { RefCell::new(None) };
}

/// One mounted game: session plus its renderer and scheduling handle
struct App {
    session: GameSession,
    renderer: CanvasRenderer,
    canvas: HtmlCanvasElement,
    raf_id: Option<i32>,
}

impl App {
    /// Run one frame: draw the current state, then step the simulation.
    ///
    /// Order per frame: clear, star twinkle, star/asteroid/ball draw,
    /// collision resolve, seek update, boundary clamp, HUD draw. Returns
    /// the asteroids collected this frame.
    fn frame(&mut self) -> u32 {
        let session = &mut self.session;

        self.renderer.clear();
        starfield::twinkle(session);
        self.renderer.draw_stars(&session.stars);
        self.renderer
            .draw_asteroids(&session.asteroids, session.settings.detailed_asteroids);
        if let Some(ball) = &session.ball {
            self.renderer.draw_ball(ball);
        }

        let collected = collision::resolve(session);
        motion::seek_step(session);
        motion::apply_bounds(session);

        self.renderer.draw_hud(
            session.collected,
            session.width,
            session.settings.mobile_breakpoint,
        );
        collected
    }
}

/// Registered event listeners, kept so unmount can detach them
struct Listeners {
    canvas: HtmlCanvasElement,
    click: Closure<dyn FnMut(MouseEvent)>,
    touchstart: Closure<dyn FnMut(TouchEvent)>,
    resize: Closure<dyn FnMut(Event)>,
}

impl Listeners {
    fn detach(&self) {
        let _ = self
            .canvas
            .remove_event_listener_with_callback("click", self.click.as_ref().unchecked_ref());
        let _ = self.canvas.remove_event_listener_with_callback(
            "touchstart",
            self.touchstart.as_ref().unchecked_ref(),
        );
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("resize", self.resize.as_ref().unchecked_ref());
        }
    }
}

#[derive(Default)]
struct Inner {
    app: Option<App>,
    listeners: Option<Listeners>,
    frame: Option<Closure<dyn FnMut(f64)>>,
    score_cb: Option<js_sys::Function>,
}

/// Handle the hosting page uses to run the game inside a canvas
#[wasm_bindgen]
pub struct GameView {
    inner: Rc<RefCell<Inner>>,
}

#[wasm_bindgen]
impl GameView {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner::default())),
        }
    }

    /// Mount onto the canvas with the given DOM id and start the frame loop
    ///
    /// A missing canvas or 2D context logs a warning and leaves the view
    /// unmounted; the host is responsible for not triggering that.
    pub fn mount(&self, canvas_id: &str) {
        if self.inner.borrow().app.is_some() {
            log::warn!("mount() on an already mounted view");
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(canvas) = window
            .document()
            .and_then(|d| d.get_element_by_id(canvas_id))
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::warn!("no canvas element #{canvas_id}, not mounting");
            return;
        };

        let (width, height) = viewport_size(&window);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let Some(renderer) = CanvasRenderer::from_canvas(canvas.clone()) else {
            log::warn!("2d context unavailable, not mounting");
            return;
        };

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let session = GameSession::new(seed, width, height, settings);
        log::info!(
            "mounted {}x{} with seed {} ({} stars, {} asteroids)",
            width,
            height,
            seed,
            session.stars.len(),
            session.asteroids.len()
        );

        self.inner.borrow_mut().app = Some(App {
            session,
            renderer,
            canvas: canvas.clone(),
            raf_id: None,
        });

        self.attach_listeners(&window, canvas);
        self.start_loop(&window);
    }

    /// Cancel the pending frame and detach all listeners
    ///
    /// Safe to call repeatedly; an unmounted view is a no-op.
    pub fn unmount(&self) {
        let mut guard = self.inner.borrow_mut();
        if let Some(app) = guard.app.take() {
            if let (Some(id), Some(window)) = (app.raf_id, web_sys::window()) {
                let _ = window.cancel_animation_frame(id);
            }
            log::info!("unmounted with {} collected", app.session.collected);
        }
        if let Some(listeners) = guard.listeners.take() {
            listeners.detach();
        }
        guard.frame = None;
    }

    /// Register a host callback invoked with each frame's collected count
    pub fn set_score_callback(&self, callback: js_sys::Function) {
        self.inner.borrow_mut().score_cb = Some(callback);
    }

    /// Cumulative asteroids collected in the current session
    pub fn collected(&self) -> u32 {
        self.inner
            .borrow()
            .app
            .as_ref()
            .map(|app| app.session.collected)
            .unwrap_or(0)
    }
}

impl GameView {
    fn attach_listeners(&self, window: &web_sys::Window, canvas: HtmlCanvasElement) {
        let click = {
            let inner = Rc::clone(&self.inner);
            let canvas = canvas.clone();
            Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                let mut guard = inner.borrow_mut();
                let Some(app) = guard.app.as_mut() else {
                    return;
                };
                let rect = canvas.get_bounding_client_rect();
                let point = Vec2::new(
                    event.client_x() as f32 - rect.left() as f32,
                    event.client_y() as f32 - rect.top() as f32,
                );
                motion::begin_seek(&mut app.session, point);
            })
        };

        let touchstart = {
            let inner = Rc::clone(&self.inner);
            let canvas = canvas.clone();
            Closure::<dyn FnMut(TouchEvent)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let Some(touch) = event.touches().get(0) else {
                    return;
                };
                let mut guard = inner.borrow_mut();
                let Some(app) = guard.app.as_mut() else {
                    return;
                };
                let rect = canvas.get_bounding_client_rect();
                let point = Vec2::new(
                    touch.client_x() as f32 - rect.left() as f32,
                    touch.client_y() as f32 - rect.top() as f32,
                );
                motion::begin_seek(&mut app.session, point);
            })
        };

        let resize = {
            let inner = Rc::clone(&self.inner);
            Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                let Some(window) = web_sys::window() else {
                    return;
                };
                let (width, height) = viewport_size(&window);
                let mut guard = inner.borrow_mut();
                let Some(app) = guard.app.as_mut() else {
                    return;
                };
                app.canvas.set_width(width as u32);
                app.canvas.set_height(height as u32);
                app.session.resize(width, height);
                log::debug!("viewport resized to {width}x{height}");
            })
        };

        let _ = canvas.add_event_listener_with_callback("click", click.as_ref().unchecked_ref());
        let _ = canvas
            .add_event_listener_with_callback("touchstart", touchstart.as_ref().unchecked_ref());
        let _ =
            window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());

        self.inner.borrow_mut().listeners = Some(Listeners {
            canvas,
            click,
            touchstart,
            resize,
        });
    }

    fn start_loop(&self, window: &web_sys::Window) {
        let inner = Rc::clone(&self.inner);
        let frame = Closure::<dyn FnMut(f64)>::new(move |_time: f64| {
            let mut score_event = None;
            {
                let mut guard = inner.borrow_mut();
                let Inner {
                    app,
                    frame,
                    score_cb,
                    ..
                } = &mut *guard;
                let (Some(app), Some(frame)) = (app.as_mut(), frame.as_ref()) else {
                    return;
                };

                let collected = app.frame();
                if collected > 0 {
                    score_event = score_cb.clone().map(|cb| (cb, collected));
                }

                app.raf_id = web_sys::window().and_then(|w| {
                    w.request_animation_frame(frame.as_ref().unchecked_ref()).ok()
                });
            }
            // Invoked outside the borrow so the host may call back into the view
            if let Some((cb, collected)) = score_event {
                let _ = cb.call1(&JsValue::NULL, &JsValue::from_f64(collected as f64));
            }
        });

        let mut guard = self.inner.borrow_mut();
        if let Some(app) = guard.app.as_mut() {
            app.raf_id = window
                .request_animation_frame(frame.as_ref().unchecked_ref())
                .ok();
        }
        guard.frame = Some(frame);
    }
}

fn viewport_size(window: &web_sys::Window) -> (f32, f32) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width as f32, height as f32)
}

/// Module-load entry: set up logging and auto-mount when the default
/// canvas is present. Hosts that manage the lifecycle themselves construct
/// a [`GameView`] instead.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let has_canvas = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(AUTO_CANVAS_ID))
        .is_some();
    if has_canvas {
        let view = GameView::new();
        view.mount(AUTO_CANVAS_ID);
        AUTO_VIEW.with(|slot| *slot.borrow_mut() = Some(view));
    }
}
