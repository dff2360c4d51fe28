use crate::shared::text::slugify;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Jenis reklame: kind of advertising space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    Baliho,
    Billboard,
    Videotron,
}

impl ProductType {
    /// Label as written in the content files and shown on badges
    pub fn label(&self) -> &'static str {
        match self {
            ProductType::Baliho => "Baliho",
            ProductType::Billboard => "Billboard",
            ProductType::Videotron => "Videotron",
        }
    }

    /// Filter token used in `?jenis=`
    pub fn slug(&self) -> String {
        slugify(self.label())
    }

    pub fn all() -> Vec<ProductType> {
        vec![
            ProductType::Baliho,
            ProductType::Billboard,
            ProductType::Videotron,
        ]
    }

    /// Accepts the label in any casing or its slug
    pub fn from_label(value: &str) -> Option<Self> {
        let slug = slugify(value);
        Self::all().into_iter().find(|t| t.slug() == slug)
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label() {
        assert_eq!(ProductType::from_label("Baliho"), Some(ProductType::Baliho));
        assert_eq!(ProductType::from_label("VIDEOTRON"), Some(ProductType::Videotron));
        assert_eq!(ProductType::from_label("billboard"), Some(ProductType::Billboard));
        assert_eq!(ProductType::from_label("Spanduk"), None);
    }

    #[test]
    fn test_serde_uses_label() {
        let json = serde_json::to_string(&ProductType::Videotron).unwrap();
        assert_eq!(json, "\"Videotron\"");
        let parsed: ProductType = serde_json::from_str("\"Baliho\"").unwrap();
        assert_eq!(parsed, ProductType::Baliho);
    }
}
