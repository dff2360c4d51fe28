use crate::enums::{BoardSize, Facing, LampPosition, Orientation, ProductType};
use crate::shared::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One advertising space as embedded in the catalog page (`#product-data`).
///
/// Records are produced at build time from validated content files and are
/// never mutated on the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// Unique within one payload
    pub id: String,
    pub label: String,
    pub image_src: String,
    pub detail_url: String,
    pub jenis: ProductType,
    pub ukuran: BoardSize,
    pub alamat: String,
    /// Kabupaten / kota
    pub kabko: String,
    pub provinsi: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientasi: Option<Orientation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arah: Option<Facing>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lampu: Vec<LampPosition>,
    /// Number of faces, 1..=5
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sisi: Option<u8>,
}

impl ProductRecord {
    /// Class giving the card image a stable view-transition name,
    /// shared with the image on the detail page
    pub fn view_transition_class(&self) -> String {
        format!("[view-transition-name:produk-img-{}]", self.id)
    }

    /// "Kab. Sleman, DI Yogyakarta"
    pub fn region_line(&self) -> String {
        match (self.kabko.is_empty(), self.provinsi.is_empty()) {
            (false, false) => format!("{}, {}", self.kabko, self.provinsi),
            (false, true) => self.kabko.clone(),
            (true, _) => self.provinsi.clone(),
        }
    }

    fn validate(&self) -> Result<(), CatalogError> {
        match self.sisi {
            Some(sisi) if !(1..=5).contains(&sisi) => Err(CatalogError::InvalidFaceCount {
                id: self.id.clone(),
                sisi,
            }),
            _ => Ok(()),
        }
    }
}

/// Parse the JSON array embedded in the catalog page.
///
/// Blank text is an empty catalog. Duplicate ids are rejected.
pub fn parse_catalog_payload(text: &str) -> Result<Vec<ProductRecord>, CatalogError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let items: Vec<ProductRecord> = serde_json::from_str(text)?;

    let mut seen = HashSet::with_capacity(items.len());
    for item in &items {
        item.validate()?;
        if !seen.insert(item.id.as_str()) {
            return Err(CatalogError::DuplicateId(item.id.clone()));
        }
    }

    Ok(items)
}
