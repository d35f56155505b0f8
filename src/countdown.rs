use crate::clock;
use crate::constants::COUNTDOWN_POLL_MS;
use anyhow::anyhow;
use field_core::{is_reached, time_left, ResolvedFlag};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Polls the countdown once a second and raises the resolved flag when it
/// reaches zero. Dropping the watch clears the interval.
pub struct CountdownWatch {
    window: web::Window,
    handle: Rc<Cell<Option<i32>>>,
    _closure: Closure<dyn FnMut()>,
}

fn check(target_ms: f64, flag: &ResolvedFlag) -> bool {
    if !is_reached(clock::now_ms(), target_ms) {
        return false;
    }
    if flag.resolve() {
        log::info!("[countdown] target reached; resolving field");
    }
    true
}

/// Start watching `target_ms`. Returns `None` when the target has already
/// passed; the flag is resolved immediately in that case.
pub fn watch(
    window: &web::Window,
    target_ms: f64,
    flag: ResolvedFlag,
) -> anyhow::Result<Option<CountdownWatch>> {
    if check(target_ms, &flag) {
        return Ok(None);
    }
    if let Some(left) = time_left(clock::now_ms(), target_ms) {
        log::info!("[countdown] {} until target", left);
    }
    let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let handle_tick = handle.clone();
    let window_tick = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        if check(target_ms, &flag) {
            if let Some(id) = handle_tick.take() {
                window_tick.clear_interval_with_handle(id);
            }
        }
    }) as Box<dyn FnMut()>);
    let id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            COUNTDOWN_POLL_MS,
        )
        .map_err(|e| anyhow!("setInterval failed: {:?}", e))?;
    handle.set(Some(id));
    Ok(Some(CountdownWatch {
        window: window.clone(),
        handle,
        _closure: closure,
    }))
}

impl Drop for CountdownWatch {
    fn drop(&mut self) {
        if let Some(id) = self.handle.take() {
            self.window.clear_interval_with_handle(id);
        }
    }
}
