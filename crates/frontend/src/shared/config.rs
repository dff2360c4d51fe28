use anyhow::Context;
use contracts::shared::config::SiteConfig;

/// Id of the optional inline `<script type="application/toml">` override
pub const CONFIG_SCRIPT_ID: &str = "site-config";

/// Load the site configuration.
///
/// Search order:
/// 1. Inline `#site-config` block rendered into the page
/// 2. Falls back to the embedded default config
pub fn load_site_config() -> anyhow::Result<SiteConfig> {
    let document = super::dom::document()?;

    if let Some(block) = document.get_element_by_id(CONFIG_SCRIPT_ID) {
        log::info!("Loading site config from #{}", CONFIG_SCRIPT_ID);
        let text = block.text_content().unwrap_or_default();
        return SiteConfig::from_toml(&text)
            .with_context(|| format!("parsing #{} block", CONFIG_SCRIPT_ID));
    }

    log::debug!("Using default embedded configuration");
    SiteConfig::embedded().context("parsing embedded default config")
}

/// [`load_site_config`], degrading to defaults on error
pub fn site_config() -> SiteConfig {
    load_site_config().unwrap_or_else(|err| {
        log::warn!("{:#}; using defaults", err);
        SiteConfig::default()
    })
}
