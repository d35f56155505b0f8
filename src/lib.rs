#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use crate::events::EventListener;
use crate::frame::{FrameContext, FrameLoop};
use anyhow::anyhow;
use field_core::{FieldEngine, FieldParams, ResolvedFlag, DEFAULT_TARGET_UTC_MS};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod clock;
mod constants;
mod countdown;
mod dom;
mod events;
mod frame;
mod input;
mod render;

/// Everything a live field owns. Dropping it is the unmount path: the loop is
/// cancelled, the countdown interval cleared and every listener detached.
struct MountedField {
    frame_loop: FrameLoop,
    resolved: ResolvedFlag,
    _listeners: Vec<EventListener>,
    _countdown: Option<countdown::CountdownWatch>,
}

impl Drop for MountedField {
    fn drop(&mut self) {
        self.frame_loop.shutdown();
        log::info!("[mount] field torn down");
    }
}

thread_local! {
    static MOUNTED: RefCell<Option<MountedField>> = const { RefCell::new(None) };
}

struct MountConfig {
    params: FieldParams,
    target_ms: f64,
}

fn read_config(canvas: &web::HtmlCanvasElement) -> MountConfig {
    let mut params = FieldParams::default();
    if let Some(raw) = canvas.get_attribute(ATTR_PARTICLES) {
        match input::parse_particle_count(&raw, MAX_PARTICLES) {
            Some(n) => params = params.with_particle_count(n),
            None => log::warn!("[mount] ignoring {}={:?}", ATTR_PARTICLES, raw),
        }
    }
    let target_ms = canvas
        .get_attribute(ATTR_TARGET_UTC_MS)
        .and_then(|raw| {
            let parsed = input::parse_target_ms(&raw);
            if parsed.is_none() {
                log::warn!("[mount] ignoring {}={:?}", ATTR_TARGET_UTC_MS, raw);
            }
            parsed
        })
        .unwrap_or(DEFAULT_TARGET_UTC_MS);
    MountConfig { params, target_ms }
}

fn mount(canvas_id: &str) -> anyhow::Result<()> {
    unmount();

    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, canvas_id)?;
    let ctx = dom::context_2d(&canvas)?;
    let config = read_config(&canvas);

    let (width, height) = dom::sync_canvas_backing_size(&canvas);
    let engine = FieldEngine::new(width, height, config.params)?;
    let resolved = ResolvedFlag::new();

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        engine,
        surface: render::CanvasSurface::new(ctx),
        resolved: resolved.clone(),
    }));
    let frame_loop = FrameLoop::new(frame_ctx.clone());

    let mut listeners = events::wire_pointer_handlers(events::PointerWiring {
        window: window.clone(),
        canvas: canvas.clone(),
        frame_ctx: frame_ctx.clone(),
        resolved: resolved.clone(),
    })?;
    listeners.push(events::wire_resize(events::ResizeWiring {
        window: window.clone(),
        canvas: canvas.clone(),
        frame_ctx,
        frame_loop: frame_loop.clone(),
    })?);

    let countdown = countdown::watch(&window, config.target_ms, resolved.clone())?;

    frame_loop.request();
    log::info!("[mount] field running on #{}", canvas_id);

    MOUNTED.with(|m| {
        *m.borrow_mut() = Some(MountedField {
            frame_loop,
            resolved,
            _listeners: listeners,
            _countdown: countdown,
        });
    });
    Ok(())
}

fn unmount() -> bool {
    // Take first so the drop runs outside the thread-local borrow.
    let field = MOUNTED.with(|m| m.borrow_mut().take());
    field.is_some()
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("countdown-field starting");

    let has_canvas = dom::window_document()
        .and_then(|d| d.get_element_by_id(DEFAULT_CANVAS_ID))
        .is_some();
    if has_canvas {
        if let Err(e) = mount(DEFAULT_CANVAS_ID) {
            log::error!("[mount] init error: {:?}", e);
        }
    }
    Ok(())
}

/// Mount the field on the canvas with the given id, replacing any field that
/// is already running.
#[wasm_bindgen]
pub fn mount_field(canvas_id: &str) -> Result<(), JsValue> {
    mount(canvas_id).map_err(|e| {
        log::error!("[mount] {:?}", e);
        JsValue::from_str(&e.to_string())
    })
}

/// Switch the mounted field into its resolved formation. Returns `false` when
/// nothing is mounted or it was already resolved.
#[wasm_bindgen]
pub fn resolve_field() -> bool {
    MOUNTED.with(|m| {
        m.borrow()
            .as_ref()
            .map(|field| field.resolved.resolve())
            .unwrap_or(false)
    })
}

/// Tear the field down. Returns whether one was mounted.
#[wasm_bindgen]
pub fn unmount_field() -> bool {
    unmount()
}
