use super::CatalogDom;
use crate::shared::dom::{js_err, query};
use contracts::catalog::view::EMPTY_MESSAGE;
use contracts::catalog::{GridView, ProductCard};
use contracts::shared::error::SiteError;
use wasm_bindgen::JsCast;
use web_sys::{DocumentFragment, Element, HtmlAnchorElement, HtmlImageElement};

fn empty_state_html() -> String {
    format!(
        r#"<div class="col-span-full py-12 text-center text-gray-500">
  <p class="text-lg">{}</p>
</div>"#,
        EMPTY_MESSAGE
    )
}

/// Replace the grid contents with `grid`
pub fn render_grid(dom: &CatalogDom, grid: &GridView) {
    dom.grid.set_inner_html("");

    let cards = match grid {
        GridView::Empty => {
            dom.grid.set_inner_html(&empty_state_html());
            return;
        }
        GridView::Items(cards) => cards,
    };

    if let Err(err) = append_cards(dom, cards) {
        log::warn!("Rendering product cards failed: {}", err);
    }
}

fn append_cards(dom: &CatalogDom, cards: &[ProductCard]) -> Result<(), SiteError> {
    let document = crate::shared::dom::document()?;
    let fragment = document.create_document_fragment();
    for card in cards {
        let clone = fill_template(dom, card)?;
        fragment.append_child(&clone).map_err(js_err)?;
    }
    dom.grid.append_child(&fragment).map_err(js_err)?;
    Ok(())
}

/// Clone the card template and fill what it has; missing bind targets
/// are skipped
fn fill_template(dom: &CatalogDom, card: &ProductCard) -> Result<DocumentFragment, SiteError> {
    let clone = dom
        .template
        .content()
        .clone_node_with_deep(true)
        .map_err(js_err)?
        .dyn_into::<DocumentFragment>()
        .map_err(|_| SiteError::Dom("template content is not a fragment".to_string()))?;

    if let Some(link) = query::<HtmlAnchorElement>(&clone, "a") {
        link.set_href(&card.detail_url);
        let _ = link.set_attribute("data-id", &card.id);
    }

    if let Some(img) = query::<HtmlImageElement>(&clone, "img") {
        img.set_src(&card.image_src);
        img.set_alt(&card.image_alt);
        let _ = img.class_list().add_1(&card.image_class);
    }

    for (key, text) in &card.binds {
        if let Some(el) = query::<Element>(&clone, &format!("[data-bind=\"{}\"]", key)) {
            el.set_text_content(Some(text));
        }
    }

    Ok(clone)
}
