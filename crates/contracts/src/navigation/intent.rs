use super::nav_map::{structured_section_id, NavigationMap};

/// What a click on an `<a href>` should do on the landing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    ScrollToTop,
    ScrollToSection(String),
    /// Leave the click to the browser
    Ignore,
}

/// Classify a click given the link's resolved path/hash and the current path
pub fn classify_click(
    link_pathname: &str,
    link_hash: &str,
    current_pathname: &str,
    map: &NavigationMap,
) -> ClickAction {
    if link_pathname != current_pathname {
        return ClickAction::Ignore;
    }

    if link_pathname == "/" && link_hash.is_empty() {
        return ClickAction::ScrollToTop;
    }

    match structured_section_id(link_hash) {
        Some(id) if map.has_section(id) => ClickAction::ScrollToSection(id.to_string()),
        _ => ClickAction::Ignore,
    }
}

/// First thing the landing page does once layout is available
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitialAction {
    /// The URL already points at a section; scroll there after a short delay
    DeepLink(String),
    /// Run scroll spy once to sync the highlight and hash
    Evaluate,
}

pub fn initial_action(location_hash: &str) -> InitialAction {
    match structured_section_id(location_hash) {
        Some(id) => InitialAction::DeepLink(id.to_string()),
        None => InitialAction::Evaluate,
    }
}

/// URL for `history.replaceState`, or `None` when the address bar already
/// carries `target_hash`. An empty hash maps to the bare path.
pub fn history_url(current_hash: &str, target_hash: &str, pathname: &str) -> Option<String> {
    if current_hash == target_hash {
        return None;
    }
    if target_hash.is_empty() {
        Some(pathname.to_string())
    } else {
        Some(target_hash.to_string())
    }
}

/// History write after scrolling to section `id`. Sections no nav link
/// points at leave the address bar alone.
pub fn section_url(
    current_hash: &str,
    id: &str,
    pathname: &str,
    map: &NavigationMap,
) -> Option<String> {
    let hash = map.hash_for(id)?;
    history_url(current_hash, hash, pathname)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::nav_map::tests::landing_links;

    fn map() -> NavigationMap {
        NavigationMap::from_links(&landing_links())
    }

    #[test]
    fn test_click_on_home_link() {
        assert_eq!(classify_click("/", "", "/", &map()), ClickAction::ScrollToTop);
    }

    #[test]
    fn test_click_on_known_section() {
        assert_eq!(
            classify_click("/", "#/kontak/", "/", &map()),
            ClickAction::ScrollToSection("kontak".to_string())
        );
    }

    #[test]
    fn test_click_falls_through() {
        // unknown section
        assert_eq!(classify_click("/", "#/karir/", "/", &map()), ClickAction::Ignore);
        // plain fragment
        assert_eq!(classify_click("/", "#kontak", "/", &map()), ClickAction::Ignore);
        // other page
        assert_eq!(classify_click("/produk/", "", "/", &map()), ClickAction::Ignore);
        // home link seen from another page
        assert_eq!(classify_click("/", "", "/produk/", &map()), ClickAction::Ignore);
    }

    #[test]
    fn test_initial_action() {
        assert_eq!(
            initial_action("#/portofolio/"),
            InitialAction::DeepLink("portofolio".to_string())
        );
        assert_eq!(initial_action(""), InitialAction::Evaluate);
        assert_eq!(initial_action("#top"), InitialAction::Evaluate);
    }

    #[test]
    fn test_history_url() {
        assert_eq!(history_url("#/kontak/", "#/kontak/", "/"), None);
        assert_eq!(history_url("", "#/kontak/", "/"), Some("#/kontak/".to_string()));
        assert_eq!(history_url("#/kontak/", "", "/"), Some("/".to_string()));
        assert_eq!(history_url("", "", "/"), None);
    }

    #[test]
    fn test_section_url() {
        assert_eq!(
            section_url("", "layanan", "/", &map()),
            Some("#/layanan/".to_string())
        );
        assert_eq!(section_url("#/layanan/", "layanan", "/", &map()), None);
        // deep link to a section without a nav link keeps its hash
        assert_eq!(section_url("#/testimoni/", "testimoni", "/", &map()), None);
    }
}
