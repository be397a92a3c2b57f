//! Color schemes and their immutable color tables.
//!
//! Every scheme owns exactly five keys, ordered from the first gradient step
//! to the last. Domain annotation sources get their own fixed colors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{LayoutError, LayoutResult};
use crate::types::Rgb;

/// A named palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorKey {
    pub name: &'static str,
    pub color: Rgb,
}

const fn key(name: &'static str, r: u8, g: u8, b: u8) -> ColorKey {
    ColorKey { name, color: Rgb::new(r, g, b) }
}

// Hues 0/6..4/6 at saturation 0.75, matching the gradient mapper's anchors
static FIXED_KEYS: [ColorKey; 5] = [
    key("<0.1", 255, 64, 64),
    key("0.1-1", 255, 255, 64),
    key("1-10", 64, 255, 64),
    key("10-100", 64, 255, 255),
    key(">=100", 64, 64, 255),
];

static DYNAMIC_KEYS: [ColorKey; 5] = [
    key("best", 255, 64, 64),
    key("good", 255, 255, 64),
    key("fair", 64, 255, 64),
    key("weak", 64, 255, 255),
    key("poor", 64, 64, 255),
];

static NCBIBLAST_KEYS: [ColorKey; 5] = [
    key("<40", 0x00, 0x00, 0x00),
    key("40-50", 0x00, 0x47, 0xc8),
    key("50-80", 0x77, 0xde, 0x75),
    key("80-200", 0xe9, 0x67, 0xf5),
    key(">=200", 0xe8, 0x3a, 0x2d),
];

static BLASTERJS_KEYS: [ColorKey; 5] = [
    key("<1e-5", 0x5c, 0x6d, 0x7e),
    key("1e-5-1e-2", 0x9b, 0x59, 0xb6),
    key("1e-2-1", 0x5c, 0xac, 0xe2),
    key("1-100", 0x57, 0xd6, 0x8d),
    key(">=100", 0xc0, 0x39, 0x2b),
];

/// Which score an HSP is colored by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreKind {
    EValue,
    BitScore,
}

/// Breakpoint strategy plus palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Fixed,
    #[default]
    Dynamic,
    NcbiBlast,
    BlasterJs,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 4] = [
        ColorScheme::Fixed,
        ColorScheme::Dynamic,
        ColorScheme::NcbiBlast,
        ColorScheme::BlasterJs,
    ];

    pub fn keys(&self) -> &'static [ColorKey] {
        match self {
            ColorScheme::Fixed => &FIXED_KEYS,
            ColorScheme::Dynamic => &DYNAMIC_KEYS,
            ColorScheme::NcbiBlast => &NCBIBLAST_KEYS,
            ColorScheme::BlasterJs => &BLASTERJS_KEYS,
        }
    }

    pub fn first_color(&self) -> Rgb {
        self.keys()[0].color
    }

    pub fn score_kind(&self) -> ScoreKind {
        match self {
            ColorScheme::NcbiBlast => ScoreKind::BitScore,
            ColorScheme::Fixed | ColorScheme::Dynamic | ColorScheme::BlasterJs => ScoreKind::EValue,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ColorScheme::Fixed => "fixed",
            ColorScheme::Dynamic => "dynamic",
            ColorScheme::NcbiBlast => "ncbiblast",
            ColorScheme::BlasterJs => "blasterjs",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorScheme {
    type Err = LayoutError;

    fn from_str(s: &str) -> LayoutResult<Self> {
        let lowered = s.trim().to_ascii_lowercase();
        ColorScheme::ALL
            .into_iter()
            .find(|scheme| scheme.name() == lowered)
            .ok_or_else(|| LayoutError::unknown_scheme(s))
    }
}

/// Source database of a domain annotation.
///
/// Serializes to its lowercase canonical name; deserialization goes through
/// [`DomainDatabase::from_name`], so aliases and unknown sources are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum DomainDatabase {
    Pfam,
    Smart,
    Prosite,
    PrositeProfiles,
    Prints,
    Cdd,
    Gene3d,
    Superfamily,
    Panther,
    Ncbifam,
    Pirsf,
    Hamap,
    Sfld,
    Other,
}

impl DomainDatabase {
    /// Case-insensitive lookup; unknown sources become `Other`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "pfam" => DomainDatabase::Pfam,
            "smart" => DomainDatabase::Smart,
            "prosite" | "prosite_patterns" | "patterns" => DomainDatabase::Prosite,
            "prositeprofiles" | "prosite_profiles" | "profile" | "profiles" => DomainDatabase::PrositeProfiles,
            "prints" => DomainDatabase::Prints,
            "cdd" => DomainDatabase::Cdd,
            "gene3d" | "cathgene3d" => DomainDatabase::Gene3d,
            "superfamily" | "ssf" => DomainDatabase::Superfamily,
            "panther" => DomainDatabase::Panther,
            "ncbifam" | "tigrfams" => DomainDatabase::Ncbifam,
            "pirsf" => DomainDatabase::Pirsf,
            "hamap" => DomainDatabase::Hamap,
            "sfld" => DomainDatabase::Sfld,
            "other" => DomainDatabase::Other,
            other => {
                log::warn!("Unknown domain database '{}', using neutral color", other);
                DomainDatabase::Other
            }
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            DomainDatabase::Pfam => Rgb::new(0x66, 0x99, 0xcc),
            DomainDatabase::Smart => Rgb::new(0xcc, 0x99, 0x33),
            DomainDatabase::Prosite => Rgb::new(0xff, 0xcc, 0x33),
            DomainDatabase::PrositeProfiles => Rgb::new(0xff, 0x99, 0x66),
            DomainDatabase::Prints => Rgb::new(0x66, 0x99, 0x66),
            DomainDatabase::Cdd => Rgb::new(0x99, 0x66, 0xcc),
            DomainDatabase::Gene3d => Rgb::new(0xa8, 0x8c, 0xc3),
            DomainDatabase::Superfamily => Rgb::new(0x33, 0x33, 0x99),
            DomainDatabase::Panther => Rgb::new(0x99, 0x66, 0x33),
            DomainDatabase::Ncbifam => Rgb::new(0x56, 0xb4, 0xe9),
            DomainDatabase::Pirsf => Rgb::new(0xfb, 0xbd, 0xdd),
            DomainDatabase::Hamap => Rgb::new(0x2e, 0x8b, 0x57),
            DomainDatabase::Sfld => Rgb::new(0x00, 0xb1, 0xd3),
            DomainDatabase::Other => Rgb::new(0xa0, 0xa0, 0xa0),
        }
    }
}

impl From<String> for DomainDatabase {
    fn from(name: String) -> Self {
        DomainDatabase::from_name(&name)
    }
}
