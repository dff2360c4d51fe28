use std::collections::HashMap;

/// Key of the link pointing at the bare site root
pub const HOME_KEY: &str = "home";

/// A resolved `<a href>` from the header navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub pathname: String,
    /// Including the leading `#`, empty when absent
    pub hash: String,
}

impl NavLink {
    pub fn new(pathname: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            hash: hash.into(),
        }
    }
}

/// Section id carried by a nav link hash: `#/kontak/`, `#/kontak` and
/// `#kontak` all give `kontak`.
pub fn section_id_from_hash(hash: &str) -> Option<&str> {
    let rest = hash.strip_prefix('#')?;
    let body = rest.strip_prefix('/').filter(|b| !b.is_empty()).unwrap_or(rest);
    let id = body.strip_suffix('/').filter(|b| !b.is_empty()).unwrap_or(body);
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

/// Section id of a structured in-page hash (`#/<id>/...`), as used by
/// clicks and deep links. Plain `#id` fragments are left to the browser.
pub fn structured_section_id(hash: &str) -> Option<&str> {
    if !hash.starts_with("#/") {
        return None;
    }
    hash.split('/').nth(1).filter(|id| !id.is_empty())
}

/// Section ids <-> URL hashes <-> nav link positions.
///
/// Built once from the header markup and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct NavigationMap {
    /// Key (`home` or section id) -> index into the link list
    links: HashMap<String, usize>,
    /// Section id -> hash as written in the link
    hashes: HashMap<String, String>,
}

impl NavigationMap {
    pub fn from_links(links: &[NavLink]) -> Self {
        let mut map = NavigationMap::default();
        for (idx, link) in links.iter().enumerate() {
            if link.pathname == "/" && link.hash.is_empty() {
                map.links.insert(HOME_KEY.to_string(), idx);
            } else if let Some(id) = section_id_from_hash(&link.hash) {
                map.hashes.insert(id.to_string(), link.hash.clone());
                map.links.insert(id.to_string(), idx);
            }
        }
        map
    }

    pub fn link_index(&self, key: &str) -> Option<usize> {
        self.links.get(key).copied()
    }

    pub fn hash_for(&self, section_id: &str) -> Option<&str> {
        self.hashes.get(section_id).map(String::as_str)
    }

    pub fn has_section(&self, section_id: &str) -> bool {
        self.hashes.contains_key(section_id)
    }

    pub fn section_count(&self) -> usize {
        self.hashes.len()
    }
}
