//! Filter form controls tagged with `data-group="jenis|ukuran|kabko"`.
//!
//! Radios, checkboxes and `<select>`s carry display labels as values; the
//! empty value is the neutral "Semua" choice.

use crate::shared::dom::{query, query_all};
use contracts::catalog::{FilterGroup, FilterState};
use contracts::shared::text::slugify;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement, HtmlOptionElement, HtmlSelectElement};

const GROUP_SELECTOR: &str = "[data-group]";

fn group_selector(group: FilterGroup) -> String {
    format!("[data-group=\"{}\"]", group.name())
}

fn is_toggle(input: &HtmlInputElement) -> bool {
    matches!(input.type_().as_str(), "radio" | "checkbox")
}

/// Current selection of one group, as raw control values
fn selected_values(document: &Document, group: FilterGroup) -> Vec<String> {
    let mut values = Vec::new();
    for el in query_all::<Element>(document, &group_selector(group)) {
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            if is_toggle(input) && input.checked() && !input.value().is_empty() {
                values.push(input.value());
            }
        } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
            if !select.value().is_empty() {
                values.push(select.value());
            }
        }
    }
    values
}

/// Rebuild the whole filter state from the controls; each group is replaced
pub fn read_filters(document: &Document) -> FilterState {
    let mut filters = FilterState::new();
    for group in FilterGroup::all() {
        filters.replace_group(group, selected_values(document, group));
    }
    filters
}

/// Make the controls show `filters` (initial load, back/forward)
pub fn sync_controls(document: &Document, filters: &FilterState) {
    for input in query_all::<HtmlInputElement>(document, "input[data-group]") {
        match input.type_().as_str() {
            "radio" => input.set_checked(input.value().is_empty()),
            "checkbox" => input.set_checked(false),
            _ => {}
        }
    }
    for select in query_all::<HtmlSelectElement>(document, "select[data-group]") {
        select.set_value("");
    }

    for group in FilterGroup::all() {
        let tokens = filters.tokens(group);
        for el in query_all::<Element>(document, &group_selector(group)) {
            if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
                let value = input.value();
                if value.is_empty() {
                    if tokens.is_empty() && input.type_() == "radio" {
                        input.set_checked(true);
                    }
                } else if is_toggle(input) && tokens.contains(&slugify(&value)) {
                    input.set_checked(true);
                }
            } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
                if let Some(option) = matching_option(select, |slug| tokens.contains(slug)) {
                    select.set_value(&option.value());
                }
            }
        }
    }
}

fn matching_option(select: &HtmlSelectElement, wanted: impl Fn(&str) -> bool) -> Option<HtmlOptionElement> {
    (0..select.length())
        .filter_map(|i| select.item(i))
        .filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
        .find(|opt| !opt.value().is_empty() && wanted(&slugify(&opt.value())))
}

/// Call `on_change` with the freshly read filters whenever any control changes
pub fn bind_filter_changes(document: &Document, on_change: impl Fn(FilterState) + 'static) {
    let on_change = Rc::new(on_change);
    for el in query_all::<Element>(document, GROUP_SELECTOR) {
        let on_change = on_change.clone();
        let document = document.clone();
        let listener = Closure::wrap(Box::new(move |_: Event| {
            on_change(read_filters(&document));
        }) as Box<dyn FnMut(Event)>);

        let _ = el.add_event_listener_with_callback("change", listener.as_ref().unchecked_ref());
        listener.forget();
    }
}

/// Put every control back to its neutral value through the normal change path
pub fn reset_controls(document: &Document) {
    for el in query_all::<Element>(document, GROUP_SELECTOR) {
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            match input.type_().as_str() {
                "radio" if input.value().is_empty() && !input.checked() => input.click(),
                "checkbox" if input.checked() => input.click(),
                _ => {}
            }
        } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
            select.set_value("");
            if let Ok(event) = Event::new("change") {
                let _ = select.dispatch_event(&event);
            }
        }
    }
}

/// Wire the optional reset button
pub fn bind_reset(document: &Document, selector: &str) {
    let Some(button) = query::<HtmlElement>(document, selector) else {
        return;
    };
    let document = document.clone();
    let listener = Closure::wrap(Box::new(move |_: Event| {
        log::debug!("Catalog filters reset");
        reset_controls(&document);
    }) as Box<dyn FnMut(Event)>);

    let _ = button.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref());
    listener.forget();
}
