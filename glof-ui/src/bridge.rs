//! Browser-side collaborators: history routing, telephony intent and the
//! optional `window.__GLOF_CONFIG__` global.

use glof_shell::collaborators::{Router, Telephony};
use glof_shell::ShellConfig;
use js_sys::Reflect;
use leptos::*;
use tracing::{debug, warn};
use wasm_bindgen::JsValue;

fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "window not available".to_string())
}

fn location_path() -> String {
    window()
        .ok()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Reads `window.__GLOF_CONFIG__`, given either as an object or as a JSON
/// string. `Ok(None)` when the global is absent.
pub fn read_config() -> Result<Option<ShellConfig>, String> {
    let window = window()?;
    let raw = Reflect::get(&window, &JsValue::from_str("__GLOF_CONFIG__"))
        .map_err(|_| "failed to access __GLOF_CONFIG__".to_string())?;
    if raw.is_undefined() || raw.is_null() {
        return Ok(None);
    }

    if let Some(text) = raw.as_string() {
        return ShellConfig::from_json(&text)
            .map(Some)
            .map_err(|e| e.to_string());
    }

    let config: ShellConfig = serde_wasm_bindgen::from_value(raw).map_err(|e| e.to_string())?;
    config.validate().map_err(|e| e.to_string())?;
    Ok(Some(config))
}

/// History-API router. The current path lives in a signal so anything that
/// reads it re-renders on navigation.
#[derive(Clone, Copy, Debug)]
pub struct BrowserRouter {
    path: RwSignal<String>,
}

impl BrowserRouter {
    /// Seeds the path from `location` and follows back/forward buttons.
    pub fn install() -> Self {
        let path = create_rw_signal(location_path());
        let listener = window_event_listener(ev::popstate, move |_| path.set(location_path()));
        on_cleanup(move || listener.remove());
        Self { path }
    }
}

impl Router for BrowserRouter {
    fn current_path(&self) -> String {
        self.path.get()
    }

    fn navigate(&self, path: &str) {
        if let Err(err) = push_history(path) {
            warn!(%err, path, "history push failed");
        }
        self.path.set(path.to_string());
    }
}

fn push_history(path: &str) -> Result<(), String> {
    let history = window()?
        .history()
        .map_err(|e| format!("history unavailable: {e:?}"))?;
    history
        .push_state_with_url(&JsValue::NULL, "", Some(path))
        .map_err(|e| format!("pushState rejected: {e:?}"))
}

/// Opens a `tel:` URL in the current browsing context. Hosts without a
/// dialer simply ignore it.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTelephony;

impl Telephony for BrowserTelephony {
    fn dial(&self, number: &str) {
        if let Err(err) = open_tel(number) {
            debug!(%err, number, "dial intent ignored");
        }
    }
}

fn open_tel(number: &str) -> Result<(), String> {
    window()?
        .open_with_url_and_target(&format!("tel:{number}"), "_self")
        .map(|_| ())
        .map_err(|e| format!("open rejected: {e:?}"))
}
