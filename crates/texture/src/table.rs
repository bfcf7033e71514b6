//! On-disk layout of a texture classification table.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Descriptive information about the classification system.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableMetadata {
    pub system: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub units: Option<String>,
    #[serde(default)]
    pub fractions: Vec<String>,
}

/// Representative sand/silt/clay percentages of a class.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Centroid {
    pub sand: f64,
    pub silt: f64,
    pub clay: f64,
}

/// Summary statistics of one fraction within a class.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FractionRange {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub std: f64,
}

/// Ranges of the three fractions within a class.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassRanges {
    pub sand: FractionRange,
    pub silt: FractionRange,
    pub clay: FractionRange,
}

/// A complete classification table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct TextureTable {
    pub metadata: TableMetadata,
    pub centroids: BTreeMap<String, Centroid>,
    #[serde(default)]
    pub ranges: BTreeMap<String, ClassRanges>,
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}
