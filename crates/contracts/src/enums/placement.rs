use serde::{Deserialize, Serialize};

/// Orientasi papan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertikal,
}

/// Arah hadap papan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Timur,
    Barat,
    Selatan,
    Utara,
}

/// Posisi lampu penerangan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LampPosition {
    Atas,
    Bawah,
    Depan,
    Belakang,
    Samping,
    Dalam,
}

impl Orientation {
    pub fn label(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "Horizontal",
            Orientation::Vertikal => "Vertikal",
        }
    }
}

impl Facing {
    pub fn label(&self) -> &'static str {
        match self {
            Facing::Timur => "Timur",
            Facing::Barat => "Barat",
            Facing::Selatan => "Selatan",
            Facing::Utara => "Utara",
        }
    }
}

impl LampPosition {
    pub fn label(&self) -> &'static str {
        match self {
            LampPosition::Atas => "Atas",
            LampPosition::Bawah => "Bawah",
            LampPosition::Depan => "Depan",
            LampPosition::Belakang => "Belakang",
            LampPosition::Samping => "Samping",
            LampPosition::Dalam => "Dalam",
        }
    }
}

/// "Atas, Samping" style listing for the lamp badge
pub fn lamp_summary(lamps: &[LampPosition]) -> String {
    lamps
        .iter()
        .map(LampPosition::label)
        .collect::<Vec<_>>()
        .join(", ")
}
