use crate::shared::text::slugify;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ukuran: nominal board size in meters (height x width)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardSize {
    #[serde(rename = "4x6")]
    S4x6,
    #[serde(rename = "4x8")]
    S4x8,
    #[serde(rename = "5x10")]
    S5x10,
    #[serde(rename = "6x12")]
    S6x12,
}

impl BoardSize {
    pub fn label(&self) -> &'static str {
        match self {
            BoardSize::S4x6 => "4x6",
            BoardSize::S4x8 => "4x8",
            BoardSize::S5x10 => "5x10",
            BoardSize::S6x12 => "6x12",
        }
    }

    /// Filter token used in `?ukuran=`
    pub fn slug(&self) -> String {
        slugify(self.label())
    }

    pub fn all() -> Vec<BoardSize> {
        vec![
            BoardSize::S4x6,
            BoardSize::S4x8,
            BoardSize::S5x10,
            BoardSize::S6x12,
        ]
    }

    pub fn from_label(value: &str) -> Option<Self> {
        let slug = slugify(value);
        Self::all().into_iter().find(|s| s.slug() == slug)
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_their_own_slugs() {
        for size in BoardSize::all() {
            assert_eq!(size.slug(), size.label());
            assert_eq!(BoardSize::from_label(size.label()), Some(size));
        }
    }

    #[test]
    fn test_serde_uses_label() {
        let parsed: BoardSize = serde_json::from_str("\"5x10\"").unwrap();
        assert_eq!(parsed, BoardSize::S5x10);
        assert!(serde_json::from_str::<BoardSize>("\"3x3\"").is_err());
    }
}
