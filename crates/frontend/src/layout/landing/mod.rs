//! Landing page header: scroll spy, hash sync and smooth in-page navigation.
//!
//! Sections are `<section id=..>` elements; the header nav links point at
//! them with `/#/<id>/` hashes. The active link carries `aria-current`, the
//! header carries `data-scrolled` once the page leaves the top.

use crate::shared::dom::{self, js_err, query, query_all, require};
use crate::shared::{history, scroll};
use contracts::navigation::{
    classify_click, header_scrolled, history_url, initial_action, section_url, ClickAction,
    InitialAction, NavLink, NavigationMap, ScrollSpy, ScrollState, SectionBox, HOME_KEY,
};
use contracts::shared::config::NavigationConfig;
use contracts::shared::error::SiteError;
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::request_animation_frame;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, Element, Event, HtmlAnchorElement, HtmlElement, HtmlInputElement,
    MouseEvent,
};

const ACTIVE_ATTR: &str = "aria-current";
const SCROLLED_ATTR: &str = "data-scrolled";

struct LandingNav {
    header: HtmlElement,
    nav_toggle: Option<HtmlInputElement>,
    links: Vec<HtmlAnchorElement>,
    sections: Vec<HtmlElement>,
    map: NavigationMap,
    spy: ScrollSpy,
    config: NavigationConfig,
    state: RefCell<ScrollState>,
    /// Pending release of the scroll-spy suppression; replacing it cancels the old one
    settle_timer: RefCell<Option<Timeout>>,
}

impl LandingNav {
    fn set_link_active(&self, key: Option<&str>) {
        for link in &self.links {
            let _ = link.remove_attribute(ACTIVE_ATTR);
        }
        let Some(idx) = key.and_then(|k| self.map.link_index(k)) else {
            return;
        };
        if let Some(link) = self.links.get(idx) {
            let _ = link.set_attribute(ACTIVE_ATTR, "true");
        }
    }

    fn update_history(&self, hash: &str) {
        if let Some(url) = history_url(
            &history::location_hash(),
            hash,
            &history::location_pathname(),
        ) {
            history::replace_url(&url);
        }
    }

    fn close_mobile_menu(&self) {
        if let Some(toggle) = &self.nav_toggle {
            toggle.set_checked(false);
        }
    }

    fn section_boxes(&self) -> Vec<SectionBox> {
        self.sections
            .iter()
            .map(|s| SectionBox::new(s.id(), s.offset_top() as f64, s.offset_height() as f64))
            .collect()
    }

    /// Header flag always; highlight and hash unless a programmatic scroll runs
    fn determine_active_section(&self) {
        let scroll_y = scroll::scroll_y();
        let _ = self
            .header
            .toggle_attribute_with_force(SCROLLED_ATTR, header_scrolled(scroll_y));

        if self.state.borrow().is_suppressed(js_sys::Date::now()) {
            return;
        }

        let active = self.spy.evaluate(
            scroll_y,
            scroll::viewport_height(),
            &self.section_boxes(),
            &self.map,
        );
        self.set_link_active(active.active_key());
        self.update_history(active.hash());
    }

    /// Run `scroll` with scroll spy suppressed for the settle delay, then
    /// re-evaluate once to correct for drift
    fn with_scroll_spy_ignored(self: &Rc<Self>, scroll: impl FnOnce()) {
        let delay = self.config.settle_delay_ms;
        self.state
            .borrow_mut()
            .suppress(js_sys::Date::now(), delay as f64);
        // Dropping the previous timeout cancels it
        self.settle_timer.borrow_mut().take();

        scroll();

        let nav: Weak<Self> = Rc::downgrade(self);
        let timer = Timeout::new(delay, move || {
            if let Some(nav) = nav.upgrade() {
                nav.state.borrow_mut().release();
                nav.determine_active_section();
            }
        });
        *self.settle_timer.borrow_mut() = Some(timer);
    }

    /// Returns false when no element carries `id`
    fn scroll_to_section(self: &Rc<Self>, id: &str) -> bool {
        let Some(target) = dom::document()
            .ok()
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return false;
        };

        log::debug!("Scrolling to section #{}", id);
        self.with_scroll_spy_ignored(|| {
            scroll::scroll_to_y(target.offset_top() as f64 - self.config.header_offset);
            self.set_link_active(Some(id));
            if let Some(url) = section_url(
                &history::location_hash(),
                id,
                &history::location_pathname(),
                &self.map,
            ) {
                history::replace_url(&url);
            }
        });
        true
    }

    fn scroll_to_top(self: &Rc<Self>) {
        self.with_scroll_spy_ignored(|| {
            scroll::scroll_to_y(0.0);
            self.set_link_active(Some(HOME_KEY));
            self.update_history("");
        });
    }

    /// One evaluation per animation frame, however many scroll events arrive
    fn on_scroll(self: &Rc<Self>) {
        if !self.state.borrow_mut().schedule_frame() {
            return;
        }
        let nav = self.clone();
        request_animation_frame(move || {
            nav.determine_active_section();
            nav.state.borrow_mut().frame_ran();
        });
    }

    fn on_click(self: &Rc<Self>, event: &MouseEvent) {
        let Some(link) = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest("a[href]").ok().flatten())
            .and_then(|el| el.dyn_into::<HtmlAnchorElement>().ok())
        else {
            return;
        };

        let action = classify_click(
            &link.pathname(),
            &link.hash(),
            &history::location_pathname(),
            &self.map,
        );
        match action {
            ClickAction::ScrollToTop => {
                event.prevent_default();
                self.scroll_to_top();
                self.close_mobile_menu();
            }
            ClickAction::ScrollToSection(id) => {
                event.prevent_default();
                self.scroll_to_section(&id);
                self.close_mobile_menu();
            }
            ClickAction::Ignore => {}
        }
    }

    fn init(self: &Rc<Self>) {
        match initial_action(&history::location_hash()) {
            InitialAction::DeepLink(id) => {
                let nav = self.clone();
                let delay = self.config.deep_link_delay_ms;
                wasm_bindgen_futures::spawn_local(async move {
                    // Let layout settle before measuring the target
                    TimeoutFuture::new(delay).await;
                    if !nav.scroll_to_section(&id) {
                        log::debug!("Deep link #{} has no section", id);
                        nav.determine_active_section();
                    }
                });
            }
            InitialAction::Evaluate => self.determine_active_section(),
        }
    }
}

/// Hidden marker proving the landing script already ran in this document
fn insert_sentinel(document: &web_sys::Document, id: &str) -> Result<(), SiteError> {
    let sentinel = document
        .create_element("div")
        .map_err(js_err)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| SiteError::Dom("created div is not an HtmlElement".to_string()))?;
    sentinel.set_id(id);
    sentinel.style().set_property("display", "none").map_err(js_err)?;

    let body = document.body().ok_or_else(|| SiteError::missing("body"))?;
    body.prepend_with_node_1(&sentinel).map_err(js_err)?;
    Ok(())
}

fn bind_listeners(nav: &Rc<LandingNav>) -> Result<(), SiteError> {
    let window = dom::window()?;
    let document = dom::document()?;

    let scroll_nav = nav.clone();
    let on_scroll = Closure::wrap(Box::new(move |_: Event| {
        scroll_nav.on_scroll();
    }) as Box<dyn FnMut(Event)>);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    window
        .add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            on_scroll.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(js_err)?;
    on_scroll.forget();

    let click_nav = nav.clone();
    let on_click = Closure::wrap(Box::new(move |e: MouseEvent| {
        click_nav.on_click(&e);
    }) as Box<dyn FnMut(MouseEvent)>);
    document
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(js_err)?;
    on_click.forget();

    Ok(())
}

/// Start the landing page controller. Fails loudly when required markup
/// is missing or when it already ran in this document.
pub fn mount_landing_nav(config: &NavigationConfig) -> Result<(), SiteError> {
    let document = dom::document()?;

    if document.get_element_by_id(&config.sentinel_id).is_some() {
        return Err(SiteError::AlreadyInitialized {
            sentinel: config.sentinel_id.clone(),
        });
    }

    let header: HtmlElement = require(&document, "header")?;
    let nav_el: Element = require(&*header, "nav")?;
    let nav_toggle = query::<HtmlInputElement>(&*header, "#nav-toggle");
    let links = query_all::<HtmlAnchorElement>(&nav_el, "a[href]");
    let sections = query_all::<HtmlElement>(&document, "section");

    let resolved: Vec<NavLink> = links
        .iter()
        .map(|link| NavLink::new(link.pathname(), link.hash()))
        .collect();
    let map = NavigationMap::from_links(&resolved);

    insert_sentinel(&document, &config.sentinel_id)?;

    log::info!(
        "Landing nav: {} links, {} linked sections, {} sections on page",
        links.len(),
        map.section_count(),
        sections.len()
    );

    let nav = Rc::new(LandingNav {
        header,
        nav_toggle,
        links,
        sections,
        map,
        spy: ScrollSpy::new(config.home_threshold),
        config: config.clone(),
        state: RefCell::new(ScrollState::new()),
        settle_timer: RefCell::new(None),
    });

    bind_listeners(&nav)?;

    let init_nav = nav.clone();
    request_animation_frame(move || init_nav.init());

    Ok(())
}
