//! WebAssembly entry points.
//!
//! The host page loads the module (which runs [`boot`]) and then calls
//! [`mount`] or [`mount_preset`] once, typically from an inline script at
//! the end of `<body>`.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::config::ThemeConfig;
use crate::controller::ThemeController;
use crate::direction::DirectionDetector;
use crate::host::HostError;
use crate::host::browser::{BodyText, BrowserControl, BrowserRoot, BrowserStore, system_theme};

/// Install the panic hook and route `log` output to the browser console.
#[wasm_bindgen(start)]
pub fn boot() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if console_log::init_with_level(level).is_err() {
        log::debug!("theme: console logger already installed");
    }
}

/// Mount with a JSON [`ThemeConfig`]. `"{}"` uses the defaults.
///
/// # Errors
///
/// Throws when the configuration is malformed. Page-level problems (no
/// document, blocked storage) are logged and never thrown.
#[wasm_bindgen]
pub fn mount(config_json: &str) -> Result<(), JsValue> {
    let config = ThemeConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    start(&config);
    Ok(())
}

/// Mount with a named preset (`jobboard` or `job-seeker`).
///
/// # Errors
///
/// Throws for an unknown preset name.
#[wasm_bindgen]
pub fn mount_preset(name: &str) -> Result<(), JsValue> {
    let config = ThemeConfig::preset(name).map_err(|e| JsValue::from_str(&e.to_string()))?;
    start(&config);
    Ok(())
}

fn start(config: &ThemeConfig) {
    if let Err(e) = try_start(config) {
        log::warn!("theme: not mounted: {e}");
    }
}

fn try_start(config: &ThemeConfig) -> Result<(), HostError> {
    let window = web_sys::window().ok_or(HostError::MissingElement("window"))?;
    let document = window.document().ok_or(HostError::MissingElement("document"))?;

    let system = if config.follow_system { system_theme(&window) } else { None };
    let controller = ThemeController::new(
        config,
        BrowserStore::local(&window),
        BrowserRoot::of(&document)?,
        BrowserControl::find(&document, &config.control_id),
    )
    .with_system_theme(system);

    // The click listener keeps its own handle on the controller.
    let shared = controller.install();
    log::info!(
        "theme: mounted (key={}, theme={}, control={})",
        config.storage_key,
        shared.borrow().current(),
        shared.borrow().has_control()
    );

    let detector = DirectionDetector::from_config(config);
    if detector.enabled() {
        schedule_detection(detector, document);
    }
    Ok(())
}

/// Run detection now if the DOM is parsed, otherwise on `DOMContentLoaded`.
fn schedule_detection(detector: DirectionDetector, document: Document) {
    if document.ready_state() != "loading" {
        detect(detector, &document);
        return;
    }
    let target = document.clone();
    let cb = Closure::<dyn FnMut()>::new(move || detect(detector, &document));
    if let Err(e) = target.add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref()) {
        log::debug!("direction: could not schedule detection: {e:?}");
        return;
    }
    cb.forget();
}

fn detect(detector: DirectionDetector, document: &Document) {
    let root = match BrowserRoot::of(document) {
        Ok(root) => root,
        Err(e) => {
            log::debug!("direction: detection skipped: {e}");
            return;
        }
    };
    if let Some(direction) = detector.run(&root, &BodyText::new(document.clone())) {
        log::debug!("direction: set dir={direction}");
    }
}
