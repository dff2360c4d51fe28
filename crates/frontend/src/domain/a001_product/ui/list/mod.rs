//! Product catalog page (`/produk/`): filtering, pagination and URL sync.
//!
//! The page markup is rendered at build time. This controller takes over
//! the grid, the pagination container and the status line; the query
//! string is the source of truth for what they show.

pub mod controls;
pub mod grid;
pub mod pagination;

use self::pagination::CatalogPagination;
use crate::shared::dom::{self, query, require};
use crate::shared::{history, scroll};
use contracts::catalog::{CatalogQuery, CatalogState};
use contracts::domain::a001_product::{parse_catalog_payload, ProductRecord};
use contracts::shared::config::CatalogConfig;
use contracts::shared::error::SiteError;
use leptos::prelude::*;
use web_sys::{HtmlElement, HtmlTemplateElement};

/// Elements the catalog renders into
#[derive(Clone)]
pub struct CatalogDom {
    pub grid: HtmlElement,
    pub pagination: HtmlElement,
    pub template: HtmlTemplateElement,
    pub status: Option<HtmlElement>,
}

impl CatalogDom {
    pub fn locate(document: &web_sys::Document, config: &CatalogConfig) -> Result<Self, SiteError> {
        Ok(Self {
            grid: require(document, &config.grid_selector)?,
            pagination: require(document, &config.pagination_selector)?,
            template: require(document, &config.template_selector)?,
            status: query(document, &config.status_selector),
        })
    }

    pub fn set_status(&self, text: &str) {
        if let Some(status) = &self.status {
            status.set_text_content(Some(text));
        }
    }
}

fn load_items(payload: &HtmlElement) -> Vec<ProductRecord> {
    let text = payload.text_content().unwrap_or_default();
    match parse_catalog_payload(&text) {
        Ok(items) => items,
        Err(err) => {
            log::warn!("{}; showing an empty catalog", err);
            Vec::new()
        }
    }
}

/// Mirror the state into the address bar without a new history entry
fn write_url(state: RwSignal<CatalogState>) {
    let url = state.with_untracked(|s| s.query().to_url(&history::location_pathname()));
    history::replace_url(&url);
}

/// Start the catalog controller if this page carries a product payload
pub fn mount_catalog(config: &CatalogConfig) -> Result<(), SiteError> {
    let document = dom::document()?;

    let Some(payload) = query::<HtmlElement>(&document, &config.data_selector) else {
        log::info!("No {} on this page, catalog not started", config.data_selector);
        return Ok(());
    };

    let config = config
        .clone()
        .with_page_size_override(payload.get_attribute("data-items-per-page").as_deref());
    let items = load_items(&payload);
    let catalog_dom = CatalogDom::locate(&document, &config)?;
    let host = catalog_dom.pagination.clone();

    log::info!(
        "Catalog: {} products, {} per page",
        items.len(),
        config.page_size()
    );

    leptos::mount::mount_to(host, move || {
        view! { <ProductCatalog catalog_dom=catalog_dom items=items config=config /> }
    })
    .forget();

    Ok(())
}

#[component]
pub fn ProductCatalog(
    catalog_dom: CatalogDom,
    items: Vec<ProductRecord>,
    config: CatalogConfig,
) -> impl IntoView {
    let doc = document();

    let url_query = CatalogQuery::parse(&history::location_search());
    let mut initial = CatalogState::new(items, config.page_size());
    let clamped = initial.restore_from_query(&url_query);
    controls::sync_controls(&doc, initial.filters());

    let state = RwSignal::new(initial);
    if clamped {
        write_url(state);
    }

    let view_model = Memo::new(move |_| state.with(|s| s.view()));

    // Grid and status line follow the view model
    Effect::new({
        let catalog_dom = catalog_dom.clone();
        move |_| {
            let view = view_model.get();
            grid::render_grid(&catalog_dom, &view.grid);
            catalog_dom.set_status(&view.status);
        }
    });

    controls::bind_filter_changes(&doc, move |filters| {
        log::debug!("Catalog filters changed: {:?}", filters);
        state.update(|s| s.apply_filters(filters));
        write_url(state);
    });
    controls::bind_reset(&doc, &config.reset_selector);

    // Back/forward: the URL wins
    let _ = window_event_listener(leptos::ev::popstate, move |_| {
        let url_query = CatalogQuery::parse(&history::location_search());
        let mut clamped = false;
        state.update(|s| clamped = s.restore_from_query(&url_query));
        state.with_untracked(|s| controls::sync_controls(&document(), s.filters()));
        if clamped {
            write_url(state);
        }
    });

    let grid_selector = config.grid_selector.clone();
    let on_page = Callback::new(move |page: usize| {
        log::debug!("Catalog page {}", page);
        state.update(|s| s.go_to_page(page));
        write_url(state);
        if let Some(grid) = query::<HtmlElement>(&document(), &grid_selector) {
            scroll::scroll_into_view(&grid);
        }
    });

    view! {
        <CatalogPagination
            buttons=Signal::derive(move || view_model.get().pagination)
            on_page=on_page
        />
    }
}
