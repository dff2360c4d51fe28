//! URL query string <-> catalog state.
//!
//! The query string is the durable, shareable form of the catalog state:
//! `?jenis=billboard&jenis=videotron&ukuran=4x8&kabko=kab-sleman&page=2`.

use super::filter::{FilterGroup, FilterState};
use std::borrow::Cow;

const PAGE_PARAM: &str = "page";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    pub filters: FilterState,
    /// Always >= 1
    pub page: usize,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            filters: FilterState::default(),
            page: 1,
        }
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned(),
    }
}

fn encode_component(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

impl CatalogQuery {
    pub fn new(filters: FilterState, page: usize) -> Self {
        Self {
            filters,
            page: page.max(1),
        }
    }

    /// Parse `location.search`. The leading `?` is optional, unknown
    /// parameters are ignored and only the first valid `page` counts.
    pub fn parse(search: &str) -> Self {
        let mut query = CatalogQuery::default();
        let mut page_seen = false;

        for pair in search.trim_start_matches('?').split('&') {
            if pair.is_empty() {
                continue;
            }
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode_component(key);
            let value = decode_component(value);

            if key == PAGE_PARAM {
                if !page_seen {
                    page_seen = true;
                    if let Some(page) = value.trim().parse::<usize>().ok().filter(|p| *p > 0) {
                        query.page = page;
                    }
                }
            } else if let Some(group) = FilterGroup::from_name(&key) {
                query.filters.insert(group, &value);
            }
        }

        query
    }

    /// Filters in group order, then `page` when it is past the first page.
    /// Empty for the default state.
    pub fn to_query_string(&self) -> String {
        let mut parts = Vec::new();
        for group in FilterGroup::all() {
            for token in self.filters.tokens(group) {
                parts.push(format!("{}={}", group.name(), encode_component(token)));
            }
        }
        if self.page > 1 {
            parts.push(format!("{}={}", PAGE_PARAM, self.page));
        }
        parts.join("&")
    }

    /// Path plus query, without a dangling `?` for the default state
    pub fn to_url(&self, pathname: &str) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            pathname.to_string()
        } else {
            format!("{}?{}", pathname, query)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_repeated_params() {
        let q = CatalogQuery::parse("?jenis=billboard&jenis=videotron&ukuran=4x8&kabko=kab-sleman&page=2");
        assert_eq!(q.page, 2);
        assert_eq!(q.filters.tokens(FilterGroup::Jenis).len(), 2);
        assert!(q.filters.tokens(FilterGroup::Ukuran).contains("4x8"));
        assert!(q.filters.tokens(FilterGroup::Kabko).contains("kab-sleman"));
    }

    #[test]
    fn test_parse_normalizes_raw_values() {
        let q = CatalogQuery::parse("kabko=Kab.+Sleman&jenis=Baliho&kabko=Kota%20Yogyakarta");
        let kabko: Vec<_> = q.filters.tokens(FilterGroup::Kabko).iter().cloned().collect();
        assert_eq!(kabko, vec!["kab-sleman".to_string(), "kota-yogyakarta".to_string()]);
        assert!(q.filters.tokens(FilterGroup::Jenis).contains("baliho"));
    }

    #[test]
    fn test_parse_page_defaults() {
        assert_eq!(CatalogQuery::parse("").page, 1);
        assert_eq!(CatalogQuery::parse("?page=0").page, 1);
        assert_eq!(CatalogQuery::parse("?page=-3").page, 1);
        assert_eq!(CatalogQuery::parse("?page=abc").page, 1);
        assert_eq!(CatalogQuery::parse("?page=3&page=5").page, 3);
    }

    #[test]
    fn test_parse_ignores_unknown_and_empty() {
        let q = CatalogQuery::parse("?utm_source=ig&&jenis=&ukuran");
        assert_eq!(q, CatalogQuery::default());
    }

    #[test]
    fn test_to_url() {
        assert_eq!(CatalogQuery::default().to_url("/produk/"), "/produk/");

        let filters = FilterState::new()
            .with(FilterGroup::Kabko, "Kab. Sleman")
            .with(FilterGroup::Jenis, "Videotron")
            .with(FilterGroup::Jenis, "Billboard");
        assert_eq!(
            CatalogQuery::new(filters.clone(), 1).to_url("/produk/"),
            "/produk/?jenis=billboard&jenis=videotron&kabko=kab-sleman"
        );
        assert_eq!(
            CatalogQuery::new(filters, 3).to_query_string(),
            "jenis=billboard&jenis=videotron&kabko=kab-sleman&page=3"
        );
        assert_eq!(CatalogQuery::new(FilterState::new(), 2).to_url("/produk/"), "/produk/?page=2");
    }

    fn arb_query() -> impl Strategy<Value = CatalogQuery> {
        let tokens = || proptest::collection::vec("[a-z0-9]{1,6}(-[a-z0-9]{1,6}){0,2}", 0..4);
        (tokens(), tokens(), tokens(), 1usize..50).prop_map(|(jenis, ukuran, kabko, page)| {
            let mut filters = FilterState::new();
            filters.replace_group(FilterGroup::Jenis, jenis);
            filters.replace_group(FilterGroup::Ukuran, ukuran);
            filters.replace_group(FilterGroup::Kabko, kabko);
            CatalogQuery::new(filters, page)
        })
    }

    proptest! {
        #[test]
        fn query_string_round_trips(query in arb_query()) {
            let encoded = query.to_query_string();
            prop_assert_eq!(CatalogQuery::parse(&encoded), query.clone());
            prop_assert_eq!(CatalogQuery::parse(&format!("?{}", encoded)), query);
        }
    }
}
