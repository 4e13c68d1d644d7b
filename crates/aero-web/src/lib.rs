pub mod runner;

pub use runner::SiteRunner;

use std::cell::RefCell;

use aero_engine::{InputEvent, SiteConfig};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<SiteRunner>> = RefCell::new(None);
}

/// Run `f` against the page runner. Calls made before `site_init()` are logged
/// and answered with `None`.
fn with_runner<R>(f: impl FnOnce(&mut SiteRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        match borrow.as_mut() {
            Some(runner) => Some(f(runner)),
            None => {
                log::error!("site not initialized; call site_init() first");
                None
            }
        }
    })
}

#[wasm_bindgen]
pub fn site_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let mut runner = SiteRunner::new(SiteConfig::default());
    runner.init();

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });

    log::info!("aerospace: initialized");
}

#[wasm_bindgen]
pub fn site_load_manifest(json: &str) {
    with_runner(|r| r.load_manifest(json));
}

#[wasm_bindgen]
pub fn site_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

#[wasm_bindgen]
pub fn site_scroll(top_px: f32, viewport_px: f32) {
    with_runner(|r| r.push_input(InputEvent::Scroll { top_px, viewport_px }));
}

#[wasm_bindgen]
pub fn site_set_sound(enabled: bool) {
    with_runner(|r| r.push_input(InputEvent::SetSound { enabled }));
}

#[wasm_bindgen]
pub fn site_set_reduced_motion(enabled: bool) {
    with_runner(|r| r.push_input(InputEvent::SetReducedMotion { enabled }));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_frame_ptr() -> *const f32 {
    with_runner(|r| r.frame_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_frame_len() -> u32 {
    with_runner(|r| r.frame_len()).unwrap_or(0)
}

/// Copy of the current frame, for hosts without shared wasm memory access.
#[wasm_bindgen]
pub fn get_frame() -> js_sys::Float32Array {
    with_runner(|r| js_sys::Float32Array::from(r.frame()))
        .unwrap_or_else(|| js_sys::Float32Array::new_with_length(0))
}

#[wasm_bindgen]
pub fn get_max_events() -> u32 {
    with_runner(|r| r.max_events()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_preload_progress() -> u32 {
    with_runner(|r| r.preload_progress()).unwrap_or(0)
}

/// Sounds the renderer should be playing after the last tick, as a JSON array.
#[wasm_bindgen]
pub fn get_sounds_json() -> Result<String, JsValue> {
    match with_runner(|r| r.sounds_json()) {
        Some(Ok(json)) => Ok(json),
        Some(Err(e)) => Err(JsValue::from_str(&e.to_string())),
        None => Err(JsValue::from_str("site not initialized")),
    }
}

/// Renderer build instructions for the flying object, as JSON.
#[wasm_bindgen]
pub fn get_model_json() -> Result<String, JsValue> {
    match with_runner(|r| r.model_json()) {
        Some(Ok(json)) => Ok(json),
        Some(Err(e)) => Err(JsValue::from_str(&e.to_string())),
        None => Err(JsValue::from_str("site not initialized")),
    }
}
