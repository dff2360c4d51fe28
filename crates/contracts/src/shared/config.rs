use super::error::ConfigError;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub catalog: CatalogConfig,
    pub navigation: NavigationConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    pub items_per_page: usize,
    pub data_selector: String,
    pub grid_selector: String,
    pub pagination_selector: String,
    pub template_selector: String,
    pub status_selector: String,
    pub reset_selector: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct NavigationConfig {
    /// Scroll offset (px) below which the page counts as "home"
    pub home_threshold: f64,
    /// How long scroll spy stays suppressed after a programmatic scroll
    pub settle_delay_ms: u32,
    /// Layout settle time before following a deep link on load
    pub deep_link_delay_ms: u32,
    /// Gap kept between the viewport top and a scrolled-to section
    pub header_offset: f64,
    /// Id of the hidden element marking an initialized landing page
    pub sentinel_id: String,
}

/// Default configuration embedded in the wasm bundle
pub const DEFAULT_CONFIG: &str = r##"
[catalog]
items_per_page = 16
data_selector = "#product-data"
grid_selector = "#product-grid"
pagination_selector = "#pagination-container"
template_selector = "#product-template"
status_selector = '[data-role="filter-status"]'
reset_selector = '[data-role="reset-filter"]'

[navigation]
home_threshold = 150.0
settle_delay_ms = 800
deep_link_delay_ms = 50
header_offset = 10.0
sentinel_id = "scroll-sentinel"
"##;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 16;

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            data_selector: "#product-data".to_string(),
            grid_selector: "#product-grid".to_string(),
            pagination_selector: "#pagination-container".to_string(),
            template_selector: "#product-template".to_string(),
            status_selector: r#"[data-role="filter-status"]"#.to_string(),
            reset_selector: r#"[data-role="reset-filter"]"#.to_string(),
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            home_threshold: 150.0,
            settle_delay_ms: 800,
            deep_link_delay_ms: 50,
            header_offset: 10.0,
            sentinel_id: "scroll-sentinel".to_string(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            navigation: NavigationConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) TOML document; absent keys keep their defaults
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml(DEFAULT_CONFIG)
    }
}

impl CatalogConfig {
    /// Page size as used by pagination: zero falls back to the default
    pub fn page_size(&self) -> usize {
        if self.items_per_page == 0 {
            DEFAULT_ITEMS_PER_PAGE
        } else {
            self.items_per_page
        }
    }

    /// Apply the `data-items-per-page` attribute of the payload element
    pub fn with_page_size_override(mut self, attr: Option<&str>) -> Self {
        if let Some(size) = attr
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|size| *size > 0)
        {
            self.items_per_page = size;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = SiteConfig::embedded();
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.catalog.items_per_page, 16);
        assert_eq!(config.navigation.settle_delay_ms, 800);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = SiteConfig::from_toml("[catalog]\nitems_per_page = 8\n").unwrap();
        assert_eq!(config.catalog.items_per_page, 8);
        assert_eq!(config.catalog.grid_selector, "#product-grid");
        assert_eq!(config.navigation, NavigationConfig::default());
    }

    #[test]
    fn test_invalid_config_is_error() {
        assert!(SiteConfig::from_toml("[catalog]\nitems_per_page = \"many\"").is_err());
    }

    #[test]
    fn test_page_size_override() {
        let base = CatalogConfig::default();
        assert_eq!(base.clone().with_page_size_override(Some("12")).page_size(), 12);
        assert_eq!(base.clone().with_page_size_override(Some("0")).page_size(), 16);
        assert_eq!(base.clone().with_page_size_override(Some("abc")).page_size(), 16);
        assert_eq!(base.with_page_size_override(None).page_size(), 16);

        let zero = CatalogConfig {
            items_per_page: 0,
            ..CatalogConfig::default()
        };
        assert_eq!(zero.page_size(), 16);
    }
}
