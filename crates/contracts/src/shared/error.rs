use thiserror::Error;

/// Problems with the embedded product payload.
///
/// The catalog page never surfaces these to visitors: the controller logs
/// them and renders an empty catalog instead.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid product payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    #[error("duplicate product id: {0}")]
    DuplicateId(String),

    #[error("product {id}: face count {sisi} outside 1..=5")]
    InvalidFaceCount { id: String, sisi: u8 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Fatal preconditions of the page controllers
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("no global window object")]
    MissingWindow,

    #[error("required element not found: {selector}")]
    MissingElement { selector: String },

    #[error("page script already initialized (found #{sentinel})")]
    AlreadyInitialized { sentinel: String },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl SiteError {
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement {
            selector: selector.into(),
        }
    }
}
