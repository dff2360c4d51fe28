//! Address bar access. The site only ever *replaces* the current history
//! entry: filtering and scrolling never create back-button stops.

use wasm_bindgen::JsValue;

fn location() -> Option<web_sys::Location> {
    web_sys::window().map(|w| w.location())
}

pub fn location_search() -> String {
    location().and_then(|l| l.search().ok()).unwrap_or_default()
}

pub fn location_hash() -> String {
    location().and_then(|l| l.hash().ok()).unwrap_or_default()
}

pub fn location_pathname() -> String {
    location()
        .and_then(|l| l.pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// `history.replaceState(null, "", url)`
pub fn replace_url(url: &str) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        log::warn!("history API unavailable, URL not updated to {}", url);
        return;
    };
    if let Err(err) = history.replace_state_with_url(&JsValue::NULL, "", Some(url)) {
        log::warn!("replaceState({}) failed: {:?}", url, err);
    }
}
