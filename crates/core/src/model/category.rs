use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Color used for categories missing from the catalog.
pub const FALLBACK_COLOR: Color = Color::rgb(0x83, 0x8C, 0x8C);

/// Description used for categories missing from the catalog.
pub const FALLBACK_DESCRIPTION: &str = "No description is available for this category yet.";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("invalid color {raw:?}: expected #RRGGBB")]
    InvalidColor { raw: String },

    #[error("unknown category code {raw:?}")]
    UnknownCategory { raw: String },

    #[error("category {id} has an empty display name")]
    EmptyName { id: CategoryId },
}

/// One of the eight fixed classification buckets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CategoryId {
    #[serde(rename = "CatA")]
    A,
    #[serde(rename = "CatB")]
    B,
    #[serde(rename = "CatC")]
    C,
    #[serde(rename = "CatD")]
    D,
    #[serde(rename = "CatE")]
    E,
    #[serde(rename = "CatF")]
    F,
    #[serde(rename = "CatG")]
    G,
    #[serde(rename = "CatH")]
    H,
}

impl CategoryId {
    pub const ALL: [CategoryId; 8] = [
        CategoryId::A,
        CategoryId::B,
        CategoryId::C,
        CategoryId::D,
        CategoryId::E,
        CategoryId::F,
        CategoryId::G,
        CategoryId::H,
    ];

    /// Wire code used by the question bank and the catalog (`"CatA"`..`"CatH"`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            CategoryId::A => "CatA",
            CategoryId::B => "CatB",
            CategoryId::C => "CatC",
            CategoryId::D => "CatD",
            CategoryId::E => "CatE",
            CategoryId::F => "CatF",
            CategoryId::G => "CatG",
            CategoryId::H => "CatH",
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CategoryId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryId::ALL
            .into_iter()
            .find(|id| id.code() == s)
            .ok_or_else(|| CatalogError::UnknownCategory { raw: s.to_owned() })
    }
}

/// An sRGB color parsed from `#RRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` string.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidColor` for anything else.
    pub fn parse_hex(raw: &str) -> Result<Self, CatalogError> {
        let invalid = || CatalogError::InvalidColor {
            raw: raw.to_owned(),
        };
        let hex = raw.trim().strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |at: usize| u8::from_str_radix(&hex[at..at + 2], 16).map_err(|_| invalid());
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Channels as fractions in `0.0..=1.0`.
    #[must_use]
    pub fn to_unit_rgb(self) -> (f32, f32, f32) {
        (
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        )
    }
}

impl TryFrom<String> for Color {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&value)
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.to_hex()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Display data for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    #[serde(rename = "name")]
    pub display_name: String,
    pub color: Color,
    pub description: String,
}

/// Resolved view of a category, either from the catalog or from the fallback policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryView<'a> {
    pub id: CategoryId,
    pub display_name: &'a str,
    pub color: Color,
    pub description: &'a str,
    pub is_fallback: bool,
}

/// Read-only table of display names, colors and descriptions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryCatalog {
    entries: BTreeMap<CategoryId, CategoryInfo>,
}

impl CategoryCatalog {
    /// Build a catalog, rejecting entries without a display name.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::EmptyName` if any entry has a blank name.
    pub fn new(
        entries: impl IntoIterator<Item = (CategoryId, CategoryInfo)>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            entries: entries.into_iter().collect(),
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// # Errors
    ///
    /// Returns `CatalogError::EmptyName` if any entry has a blank name.
    pub fn validate(&self) -> Result<(), CatalogError> {
        match self
            .entries
            .iter()
            .find(|(_, info)| info.display_name.trim().is_empty())
        {
            Some((id, _)) => Err(CatalogError::EmptyName { id: *id }),
            None => Ok(()),
        }
    }

    #[must_use]
    pub fn get(&self, id: CategoryId) -> Option<&CategoryInfo> {
        self.entries.get(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Categories without an entry in this catalog.
    #[must_use]
    pub fn missing(&self) -> Vec<CategoryId> {
        CategoryId::ALL
            .into_iter()
            .filter(|id| !self.entries.contains_key(id))
            .collect()
    }

    /// Look up a category, applying the fallback policy when it is missing:
    /// the wire code as name, a neutral grey and a generic description.
    #[must_use]
    pub fn view(&self, id: CategoryId) -> CategoryView<'_> {
        match self.entries.get(&id) {
            Some(info) => CategoryView {
                id,
                display_name: &info.display_name,
                color: info.color,
                description: &info.description,
                is_fallback: false,
            },
            None => CategoryView {
                id,
                display_name: id.code(),
                color: FALLBACK_COLOR,
                description: FALLBACK_DESCRIPTION,
                is_fallback: true,
            },
        }
    }
}
