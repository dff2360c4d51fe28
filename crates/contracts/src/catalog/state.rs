use super::filter::FilterState;
use super::pagination::Pagination;
use super::query::CatalogQuery;
use super::view::{pagination_buttons, CatalogView, GridView, ProductCard};
use crate::domain::a001_product::ProductRecord;

/// State of the catalog listing: fixed items, selected filters, page cursor.
///
/// `filtered` caches the indices matching `filters` and is recomputed only
/// when the filters change, not on page navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    items: Vec<ProductRecord>,
    filters: FilterState,
    pagination: Pagination,
    filtered: Vec<usize>,
}

impl CatalogState {
    pub fn new(items: Vec<ProductRecord>, page_size: usize) -> Self {
        let filtered = (0..items.len()).collect();
        Self {
            items,
            filters: FilterState::default(),
            pagination: Pagination::new(page_size),
            filtered,
        }
    }

    /// Initial state for a page opened with `query` in the address bar
    pub fn from_query(items: Vec<ProductRecord>, page_size: usize, query: &CatalogQuery) -> Self {
        let mut state = Self::new(items, page_size);
        state.restore_from_query(query);
        state
    }

    /// Adopt the state encoded in the URL (initial load, back/forward).
    ///
    /// The page is clamped into the new result range; returns true when
    /// that changed it, meaning the URL no longer matches the state.
    pub fn restore_from_query(&mut self, query: &CatalogQuery) -> bool {
        self.filters = query.filters.clone();
        self.pagination.go_to(query.page);
        self.recompute();
        self.pagination.clamp(self.filtered.len())
    }

    /// New selection from the filter controls; always back to page 1
    pub fn apply_filters(&mut self, filters: FilterState) {
        self.filters = filters;
        self.pagination.reset();
        self.recompute();
    }

    /// Move the cursor without touching the filtered set
    pub fn go_to_page(&mut self, page: usize) {
        self.pagination.go_to(page);
    }

    fn recompute(&mut self) {
        self.filtered = self.filters.apply(&self.items);
    }

    pub fn query(&self) -> CatalogQuery {
        CatalogQuery::new(self.filters.clone(), self.pagination.current_page)
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages(self.filtered.len())
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn filtered_items(&self) -> impl Iterator<Item = &ProductRecord> + '_ {
        self.filtered.iter().map(move |idx| &self.items[*idx])
    }

    /// Items on the current page
    pub fn page_items(&self) -> impl Iterator<Item = &ProductRecord> + '_ {
        let range = self.pagination.slice_range(self.filtered.len());
        self.filtered[range].iter().map(move |idx| &self.items[*idx])
    }

    pub fn view(&self) -> CatalogView {
        let total = self.filtered.len();
        let grid = if total == 0 {
            GridView::Empty
        } else {
            GridView::Items(self.page_items().map(ProductCard::from).collect())
        };

        CatalogView {
            grid,
            pagination: pagination_buttons(self.pagination.current_page, self.total_pages()),
            status: self.pagination.status_line(total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::filter::tests::product;
    use crate::catalog::filter::FilterGroup;
    use crate::enums::{BoardSize, ProductType};

    /// 20 items: 16 billboards then 4 videotrons
    fn dataset() -> Vec<ProductRecord> {
        (0..20)
            .map(|i| {
                let jenis = if i < 16 {
                    ProductType::Billboard
                } else {
                    ProductType::Videotron
                };
                let kabko = if i % 2 == 0 { "Kab. Sleman" } else { "Kota Yogyakarta" };
                product(i, jenis, BoardSize::S4x8, kabko)
            })
            .collect()
    }

    fn page_labels(view: &CatalogView) -> Vec<String> {
        view.pagination
            .iter()
            .filter(|b| b.label != "«" && b.label != "»")
            .map(|b| b.label.clone())
            .collect()
    }

    #[test]
    fn test_unfiltered_first_page() {
        let state = CatalogState::new(dataset(), 16);
        let view = state.view();

        match &view.grid {
            GridView::Items(cards) => {
                assert_eq!(cards.len(), 16);
                assert_eq!(cards[0].id, "P000");
            }
            GridView::Empty => panic!("expected items"),
        }
        assert_eq!(view.status, "Menampilkan 1-16 dari 20 produk");
        assert_eq!(page_labels(&view), vec!["1", "2"]);
    }

    #[test]
    fn test_filter_without_matches_shows_placeholder() {
        let mut state = CatalogState::new(dataset(), 16);
        state.apply_filters(FilterState::new().with(FilterGroup::Jenis, "Baliho"));
        let view = state.view();

        assert_eq!(view.grid, GridView::Empty);
        assert_eq!(view.status, "");
        assert!(view.pagination.is_empty());
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut state = CatalogState::new(dataset(), 16);
        state.go_to_page(2);
        assert_eq!(state.current_page(), 2);

        state.apply_filters(FilterState::new().with(FilterGroup::Kabko, "kab-sleman"));
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.filtered_count(), 10);
        assert_eq!(state.query().to_url("/produk/"), "/produk/?kabko=kab-sleman");
    }

    #[test]
    fn test_go_to_page_shows_remainder() {
        let mut state = CatalogState::new(dataset(), 16);
        state.go_to_page(2);
        let view = state.view();

        assert_eq!(state.page_items().count(), 4);
        assert_eq!(view.status, "Menampilkan 17-20 dari 20 produk");
        assert!(view.pagination.last().unwrap().disabled);
        assert_eq!(state.query().to_query_string(), "page=2");
    }

    #[test]
    fn test_restore_from_url_clamps_page() {
        let query = CatalogQuery::parse("?jenis=videotron&page=4");
        let mut state = CatalogState::new(dataset(), 16);
        assert!(state.restore_from_query(&query));
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.filtered_count(), 4);
        assert_eq!(state.query().to_query_string(), "jenis=videotron");

        let back = CatalogQuery::parse("?page=2");
        assert!(!state.restore_from_query(&back));
        assert_eq!(state.current_page(), 2);
        assert_eq!(state.filtered_count(), 20);
    }

    #[test]
    fn test_from_query_and_back_to_url() {
        let query = CatalogQuery::parse("?jenis=billboard&kabko=kota-yogyakarta");
        let state = CatalogState::from_query(dataset(), 16, &query);
        assert_eq!(state.filtered_count(), 8);
        assert!(state.filtered_items().all(|p| p.jenis == ProductType::Billboard));
        assert_eq!(state.query(), query);
    }

    #[test]
    fn test_empty_catalog() {
        let state = CatalogState::new(Vec::new(), 16);
        let view = state.view();
        assert_eq!(view.grid, GridView::Empty);
        assert_eq!(view.status, "");
        assert!(view.pagination.is_empty());
    }
}
