//! Declarative render instructions for the catalog page.
//!
//! The frontend turns a [`CatalogView`] into DOM mutations; everything that
//! decides *what* is shown lives here so it can be tested off-browser.

use crate::domain::a001_product::ProductRecord;
use crate::enums::lamp_summary;

pub const PREV_LABEL: &str = "«";
pub const NEXT_LABEL: &str = "»";
pub const EMPTY_MESSAGE: &str = "Tidak ada produk yang sesuai kriteria.";

/// Content of one cloned card template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub id: String,
    pub detail_url: String,
    pub image_src: String,
    pub image_alt: String,
    pub image_class: String,
    /// `data-bind` key -> text content
    pub binds: Vec<(&'static str, String)>,
}

impl From<&ProductRecord> for ProductCard {
    fn from(item: &ProductRecord) -> Self {
        let mut binds = vec![
            ("label", item.label.clone()),
            ("jenis", item.jenis.label().to_string()),
            ("ukuran", item.ukuran.label().to_string()),
            ("alamat", item.alamat.clone()),
            ("kabko", item.kabko.clone()),
            ("provinsi", item.provinsi.clone()),
            ("region", item.region_line()),
        ];
        if let Some(orientasi) = item.orientasi {
            binds.push(("orientasi", orientasi.label().to_string()));
        }
        if let Some(arah) = item.arah {
            binds.push(("arah", arah.label().to_string()));
        }
        if !item.lampu.is_empty() {
            binds.push(("lampu", lamp_summary(&item.lampu)));
        }
        if let Some(sisi) = item.sisi {
            binds.push(("sisi", format!("{} sisi", sisi)));
        }

        Self {
            id: item.id.clone(),
            detail_url: item.detail_url.clone(),
            image_src: item.image_src.clone(),
            image_alt: item.label.clone(),
            image_class: item.view_transition_class(),
            binds,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridView {
    /// Replace the grid with the "no results" placeholder
    Empty,
    Items(Vec<ProductCard>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageButton {
    pub label: String,
    /// Target page; `None` when the target would be page 0
    pub page: Option<usize>,
    pub active: bool,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView {
    pub grid: GridView,
    pub pagination: Vec<PageButton>,
    pub status: String,
}

/// « 1 2 3 ... n » without truncation. Nothing at all for a single page.
pub fn pagination_buttons(current: usize, total_pages: usize) -> Vec<PageButton> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let mut buttons = Vec::with_capacity(total_pages + 2);
    buttons.push(PageButton {
        label: PREV_LABEL.to_string(),
        page: current.checked_sub(1).filter(|p| *p > 0),
        active: false,
        disabled: current == 1,
    });
    buttons.extend((1..=total_pages).map(|page| PageButton {
        label: page.to_string(),
        page: Some(page),
        active: page == current,
        disabled: false,
    }));
    buttons.push(PageButton {
        label: NEXT_LABEL.to_string(),
        page: Some(current + 1),
        active: false,
        disabled: current == total_pages,
    });
    buttons
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_buttons_for_single_page() {
        assert!(pagination_buttons(1, 0).is_empty());
        assert!(pagination_buttons(1, 1).is_empty());
    }

    #[test]
    fn test_prev_next_disabled_at_bounds() {
        let first = pagination_buttons(1, 3);
        assert_eq!(first.len(), 5);
        assert!(first[0].disabled);
        assert_eq!(first[0].page, None);
        assert!(!first[4].disabled);
        assert!(first[1].active);

        let middle = pagination_buttons(2, 3);
        assert!(!middle[0].disabled);
        assert_eq!(middle[0].page, Some(1));
        assert!(!middle[4].disabled);

        let last = pagination_buttons(3, 3);
        assert!(!last[0].disabled);
        assert!(last[4].disabled);
        assert!(last[3].active);
    }

    #[test]
    fn test_every_page_gets_a_button() {
        let buttons = pagination_buttons(7, 40);
        let labels: Vec<_> = buttons[1..buttons.len() - 1].iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels.len(), 40);
        assert_eq!(labels[0], "1");
        assert_eq!(labels[39], "40");
        assert_eq!(buttons.iter().filter(|b| b.active).count(), 1);
    }
}
