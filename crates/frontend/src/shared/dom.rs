//! Thin selector helpers over `web_sys`.
//!
//! Invalid selectors and elements of an unexpected type count as "not
//! found"; only [`require`] turns absence into an error.

use contracts::shared::error::SiteError;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, DocumentFragment, Element, NodeList, Window};

/// Anything supporting `querySelector` / `querySelectorAll`
pub trait ParentNode {
    fn select(&self, selector: &str) -> Result<Option<Element>, JsValue>;
    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue>;
}

impl ParentNode for Document {
    fn select(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }
    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }
}

impl ParentNode for Element {
    fn select(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }
    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }
}

impl ParentNode for DocumentFragment {
    fn select(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }
    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }
}

pub fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or(SiteError::MissingWindow)
}

pub fn document() -> Result<Document, SiteError> {
    window()?.document().ok_or(SiteError::MissingWindow)
}

/// First match of `selector` in `scope`, cast to `T`
pub fn query<T: JsCast>(scope: &impl ParentNode, selector: &str) -> Option<T> {
    scope
        .select(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// All matches of `selector` in `scope` that are of type `T`
pub fn query_all<T: JsCast>(scope: &impl ParentNode, selector: &str) -> Vec<T> {
    let Ok(list) = scope.select_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// Like [`query`], but a missing element is a markup error
pub fn require<T: JsCast>(scope: &impl ParentNode, selector: &str) -> Result<T, SiteError> {
    query(scope, selector).ok_or_else(|| SiteError::missing(selector))
}

/// Map a `JsValue` error from a DOM call into [`SiteError::Dom`]
pub fn js_err(err: JsValue) -> SiteError {
    SiteError::Dom(format!("{:?}", err))
}
