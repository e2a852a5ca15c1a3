//! Browser binding: canvas surface, sprite loading, input listeners and the
//! requestAnimationFrame driven loop. Exposed to JS through `#[wasm_bindgen]`.

use std::cell::RefCell;

use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, window};

use crate::config::{JUMP_KEY_CODE, SPRITE_PATHS, SURFACE_HEIGHT, SURFACE_WIDTH};
use crate::frame_loop::{FrameOutcome, FrameScheduler, run_frame};
use crate::render::{Surface, render};
use crate::session::SessionController;

const DEFAULT_CANVAS_ID: &str = "mf-canvas";

#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("no document body")]
    NoBody,
    #[error("canvas has no 2d context")]
    NoContext,
    #[error("game not mounted; call mount_game() first")]
    NotMounted,
    #[error("js error: {0}")]
    Js(String),
}

impl From<JsValue> for WebError {
    fn from(v: JsValue) -> Self {
        WebError::Js(v.as_string().unwrap_or_else(|| format!("{:?}", v)))
    }
}

impl From<WebError> for JsValue {
    fn from(e: WebError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

// --- Canvas surface ----------------------------------------------------------

pub(crate) struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    sprites: Vec<HtmlImageElement>,
}

impl CanvasSurface {
    fn new(ctx: CanvasRenderingContext2d) -> Result<Self, WebError> {
        // Loads proceed in the background; frames check `complete` before drawing.
        let sprites = SPRITE_PATHS
            .iter()
            .map(|path| -> Result<HtmlImageElement, JsValue> {
                let img = HtmlImageElement::new()?;
                img.set_src(path);
                Ok(img)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { ctx, sprites })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.clear_rect(x, y, w, h);
    }

    fn set_fill(&mut self, color: &str) {
        self.ctx.set_fill_style(&JsValue::from_str(color));
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.fill_rect(x, y, w, h);
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.ctx.fill_text(text, x, y).ok();
    }

    fn sprite_ready(&self, index: usize) -> bool {
        // A failed load is also `complete`, but has no natural size.
        self.sprites
            .get(index)
            .map(|img| img.complete() && img.natural_width() > 0)
            .unwrap_or(false)
    }

    fn draw_sprite(&mut self, index: usize, x: f64, y: f64, w: f64, h: f64) {
        if let Some(img) = self.sprites.get(index) {
            if let Err(e) = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(img, x, y, w, h) {
                log::debug!("sprite {} draw failed: {:?}", index, e);
            }
        }
    }
}

// --- Global state -------------------------------------------------------------

struct Game {
    session: SessionController<StdRng>,
    surface: CanvasSurface,
}

thread_local! {
    static GAME: RefCell<Option<Game>> = const { RefCell::new(None) };
    // Single frame callback shared by every run; created once in mount_game().
    static FRAME: RefCell<Option<Closure<dyn FnMut(f64)>>> = const { RefCell::new(None) };
}

fn with_game<T>(f: impl FnOnce(&mut Game) -> T) -> Result<T, WebError> {
    GAME.with(|cell| cell.borrow_mut().as_mut().map(f).ok_or(WebError::NotMounted))
}

/// Schedules the shared frame callback with requestAnimationFrame.
struct RafScheduler;

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) {
        FRAME.with(|cell| {
            let (Some(w), Some(cb)) = (window(), cell.borrow().as_ref().map(|c| c.as_ref().clone()))
            else {
                log::warn!("frame request dropped: no window or frame callback");
                return;
            };
            if let Err(e) = w.request_animation_frame(cb.unchecked_ref()) {
                log::warn!("requestAnimationFrame failed: {:?}", e);
            }
        });
    }
}

fn on_frame(_ts: f64) {
    let outcome = with_game(|g| run_frame(&mut g.session, &mut g.surface, &mut RafScheduler));
    if let Ok(FrameOutcome::Stopped) = outcome {
        log::debug!("frame loop stopped");
    }
}

fn on_jump() {
    // Not mounted or not running: nothing to do.
    let _ = with_game(|g| g.session.jump());
}

// --- Exports ------------------------------------------------------------------

/// Mounts the game on the canvas with `canvas_id` (created if missing), loads
/// sprites, initializes a session and installs input listeners. Listeners are
/// registered exactly once; later calls are ignored.
#[wasm_bindgen]
pub fn mount_game(canvas_id: Option<String>) -> Result<(), JsValue> {
    if GAME.with(|cell| cell.borrow().is_some()) {
        log::warn!("mount_game called twice; keeping existing session");
        return Ok(());
    }
    let win = window().ok_or(WebError::NoWindow)?;
    let doc = win.document().ok_or(WebError::NoDocument)?;
    let id = canvas_id.unwrap_or_else(|| DEFAULT_CANVAS_ID.to_string());

    let canvas: HtmlCanvasElement = if let Some(el) = doc.get_element_by_id(&id) {
        el.dyn_into()?
    } else {
        let c: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
        c.set_id(&id);
        doc.body().ok_or(WebError::NoBody)?.append_child(&c)?;
        c
    };
    canvas.set_width(SURFACE_WIDTH as u32);
    canvas.set_height(SURFACE_HEIGHT as u32);
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or(WebError::NoContext)?
        .dyn_into()?;

    let mut surface = CanvasSurface::new(ctx)?;
    let session = SessionController::new(SPRITE_PATHS.len(), StdRng::from_entropy());
    render(session.state(), &mut surface);

    // Keyboard: jump key anywhere on the page
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
            if evt.code() == JUMP_KEY_CODE {
                on_jump();
            }
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    // Pointer: click on the canvas
    {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            on_jump();
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Mounted only once every fallible step above has succeeded.
    FRAME.with(|cell| cell.replace(Some(Closure::wrap(Box::new(on_frame) as Box<dyn FnMut(f64)>))));
    GAME.with(|cell| cell.replace(Some(Game { session, surface })));
    log::info!("mounted on #{} with {} sprites", id, SPRITE_PATHS.len());
    Ok(())
}

/// Resets the session to its start layout without starting it.
#[wasm_bindgen]
pub fn init_game() -> Result<(), JsValue> {
    with_game(|g| {
        g.session.initialize();
        render(g.session.state(), &mut g.surface);
    })?;
    Ok(())
}

#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    if with_game(|g| g.session.start())? {
        RafScheduler.request_frame();
    }
    Ok(())
}

#[wasm_bindgen]
pub fn restart_game() -> Result<(), JsValue> {
    if with_game(|g| g.session.restart())? {
        RafScheduler.request_frame();
    }
    Ok(())
}

#[wasm_bindgen]
pub fn is_game_running() -> bool {
    with_game(|g| g.session.is_running()).unwrap_or(false)
}

#[wasm_bindgen]
pub fn is_game_over() -> bool {
    with_game(|g| g.session.is_game_over()).unwrap_or(false)
}

#[wasm_bindgen]
pub fn game_score() -> u32 {
    with_game(|g| g.session.score()).unwrap_or(0)
}

/// `{"running":..,"game_over":..,"score":..}` for host UIs that prefer one call.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn game_state_json() -> Result<String, JsValue> {
    Ok(with_game(|g| g.session.snapshot_json())?)
}
