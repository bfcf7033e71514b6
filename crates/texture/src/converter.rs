//! Texture class name → sand/silt/clay percentages.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use soilprof_profile::{ProfileError, TextureClassifier, TextureFractions};
use tracing::debug;

use crate::error::TextureError;
use crate::table::{ClassRanges, TableMetadata, TextureTable};

const USDA_TABLE: &str = include_str!("../data/usda_texture.toml");

/// Which representative value of a class to return.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Method {
    /// Geometric centroid of the class polygon.
    #[default]
    Centroid,
    /// Statistical mean of each fraction over the class.
    Mean,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Centroid => "centroid",
            Method::Mean => "mean",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = TextureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "centroid" => Ok(Method::Centroid),
            "mean" => Ok(Method::Mean),
            _ => Err(TextureError::UnknownMethod {
                name: s.to_string(),
            }),
        }
    }
}

/// Converts texture class names to sand/silt/clay percentages.
///
/// Class names are matched case-insensitively; spaces and hyphens are treated
/// as underscores and aliases (e.g. `"sil"`, `"silty sand"`) are resolved.
///
/// # Example
///
/// ```
/// use soilprof_texture::{Method, TextureConverter};
///
/// let converter = TextureConverter::usda().unwrap();
/// let (sand, silt, clay) = converter
///     .class_to_percentages("loamy sand", Method::Centroid, true)
///     .unwrap();
/// assert_eq!((sand, silt, clay), (82.0, 12.0, 6.0));
/// ```
#[derive(Debug, Clone)]
pub struct TextureConverter {
    table: TextureTable,
}

impl TextureConverter {
    /// Loads the embedded USDA table.
    pub fn usda() -> Result<Self, TextureError> {
        Self::from_toml_str(USDA_TABLE)
    }

    /// Parses a table from a TOML document.
    pub fn from_toml_str(document: &str) -> Result<Self, TextureError> {
        let table: TextureTable = toml::from_str(document).map_err(|e| TextureError::Parse {
            reason: e.to_string(),
        })?;
        validate_table(&table)?;
        debug!(
            system = %table.metadata.system,
            n_classes = table.centroids.len(),
            n_aliases = table.aliases.len(),
            "loaded texture table"
        );
        Ok(Self { table })
    }

    /// Reads and parses a table file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TextureError> {
        let path = path.as_ref();
        let document = std::fs::read_to_string(path).map_err(|e| TextureError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&document)
    }

    /// Normalises a class name to a table key, resolving aliases.
    pub fn normalize_class_name(&self, texture_class: &str) -> String {
        let key = texture_class
            .trim()
            .to_lowercase()
            .replace([' ', '-'], "_");
        match self.table.aliases.get(&key) {
            Some(target) => target.clone(),
            None => key,
        }
    }

    /// Returns `(sand, silt, clay)` percentages of a class.
    ///
    /// With `normalize`, the values are rescaled to sum to 100 when their sum
    /// is positive.
    pub fn class_to_percentages(
        &self,
        texture_class: &str,
        method: Method,
        normalize: bool,
    ) -> Result<(f64, f64, f64), TextureError> {
        let key = self.normalize_class_name(texture_class);
        let (sand, silt, clay) = match method {
            Method::Centroid => {
                let c = self.table.centroids.get(&key).ok_or_else(|| {
                    unknown_class(texture_class, self.table.centroids.keys())
                })?;
                (c.sand, c.silt, c.clay)
            }
            Method::Mean => {
                let r = self
                    .table
                    .ranges
                    .get(&key)
                    .ok_or_else(|| unknown_class(texture_class, self.table.ranges.keys()))?;
                (r.sand.mean, r.silt.mean, r.clay.mean)
            }
        };

        let total = sand + silt + clay;
        if normalize && total > 0.0 {
            let scale = 100.0 / total;
            return Ok((sand * scale, silt * scale, clay * scale));
        }
        Ok((sand, silt, clay))
    }

    /// Returns the statistical ranges of a class.
    pub fn get_ranges(&self, texture_class: &str) -> Result<&ClassRanges, TextureError> {
        let key = self.normalize_class_name(texture_class);
        self.table
            .ranges
            .get(&key)
            .ok_or_else(|| unknown_class(texture_class, self.table.ranges.keys()))
    }

    pub fn metadata(&self) -> &TableMetadata {
        &self.table.metadata
    }

    /// All class names, sorted.
    pub fn list_available_classes(&self) -> Vec<String> {
        self.table.centroids.keys().cloned().collect()
    }
}

impl TextureClassifier for TextureConverter {
    /// Normalised centroid percentages of the class.
    fn classify(&self, texture_class: &str) -> Result<TextureFractions, ProfileError> {
        let (sand, silt, clay) = self
            .class_to_percentages(texture_class, Method::Centroid, true)
            .map_err(|e| match e {
                TextureError::UnknownClass { class, available } => {
                    ProfileError::UnknownTextureClass { class, available }
                }
                _ => ProfileError::UnknownTextureClass {
                    class: texture_class.to_string(),
                    available: self.list_available_classes(),
                },
            })?;
        TextureFractions::new(sand, silt, clay)
    }
}

fn unknown_class<'a>(class: &str, keys: impl Iterator<Item = &'a String>) -> TextureError {
    TextureError::UnknownClass {
        class: class.to_string(),
        available: keys.cloned().collect(),
    }
}

fn validate_table(table: &TextureTable) -> Result<(), TextureError> {
    if table.centroids.is_empty() {
        return Err(TextureError::InvalidTable {
            reason: "no centroids defined".to_string(),
        });
    }
    for (alias, target) in &table.aliases {
        if !table.centroids.contains_key(target) {
            return Err(TextureError::InvalidTable {
                reason: format!("alias {alias:?} points to unknown class {target:?}"),
            });
        }
    }
    for (class, c) in &table.centroids {
        for (name, value) in [("sand", c.sand), ("silt", c.silt), ("clay", c.clay)] {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(TextureError::InvalidTable {
                    reason: format!("{class}: {name} = {value} is outside [0, 100]"),
                });
            }
        }
    }
    Ok(())
}
