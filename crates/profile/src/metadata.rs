//! Provenance of layer parameters.

use std::fmt;

use chrono::NaiveDate;

/// A layer parameter that can carry provenance metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Property {
    ThetaRes,
    ThetaSat,
    Alpha,
    N,
    KSat,
    L,
    TextureClass,
    ClayContent,
    SiltContent,
    SandContent,
    OrganicMatter,
    BulkDensity,
}

impl Property {
    /// The three texture fractions.
    pub const FRACTIONS: [Property; 3] = [
        Property::ClayContent,
        Property::SiltContent,
        Property::SandContent,
    ];

    /// The five parameters set by a pedotransfer prediction.
    pub const PREDICTED: [Property; 5] = [
        Property::ThetaRes,
        Property::ThetaSat,
        Property::Alpha,
        Property::N,
        Property::KSat,
    ];

    /// Returns the parameter's field name.
    pub fn as_str(self) -> &'static str {
        match self {
            Property::ThetaRes => "theta_res",
            Property::ThetaSat => "theta_sat",
            Property::Alpha => "alpha",
            Property::N => "n",
            Property::KSat => "k_sat",
            Property::L => "l",
            Property::TextureClass => "texture_class",
            Property::ClayContent => "clay_content",
            Property::SiltContent => "silt_content",
            Property::SandContent => "sand_content",
            Property::OrganicMatter => "organic_matter",
            Property::BulkDensity => "bulk_density",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a value was obtained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceType {
    Measured,
    Modeled,
    Derived,
    Literature,
    Estimated,
    #[default]
    Unknown,
}

impl SourceType {
    /// Returns the lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            SourceType::Measured => "measured",
            SourceType::Modeled => "modeled",
            SourceType::Derived => "derived",
            SourceType::Literature => "literature",
            SourceType::Estimated => "estimated",
            SourceType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source and quality of a single layer parameter.
///
/// # Example
///
/// ```
/// use soilprof_profile::{LayerMetadata, SourceType};
///
/// let meta = LayerMetadata::new()
///     .with_source("DOV WMS")
///     .with_source_type(SourceType::Modeled)
///     .with_uncertainty(2.5);
/// assert_eq!(meta.source(), Some("DOV WMS"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LayerMetadata {
    source: Option<String>,
    url: Option<String>,
    source_type: SourceType,
    access_date: Option<NaiveDate>,
    uncertainty: Option<f64>,
}

impl LayerMetadata {
    /// Creates metadata with defaults: source `"User-provided"`, type unknown.
    pub fn new() -> Self {
        Self {
            source: Some("User-provided".to_string()),
            url: None,
            source_type: SourceType::Unknown,
            access_date: None,
            uncertainty: None,
        }
    }

    /// Sets the data source description.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the URL of the original data.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the source type.
    pub fn with_source_type(mut self, source_type: SourceType) -> Self {
        self.source_type = source_type;
        self
    }

    /// Sets the date the data was retrieved.
    pub fn with_access_date(mut self, date: NaiveDate) -> Self {
        self.access_date = Some(date);
        self
    }

    /// Sets the measurement uncertainty.
    pub fn with_uncertainty(mut self, uncertainty: f64) -> Self {
        self.uncertainty = Some(uncertainty);
        self
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn source_type(&self) -> SourceType {
        self.source_type
    }

    pub fn access_date(&self) -> Option<NaiveDate> {
        self.access_date
    }

    pub fn uncertainty(&self) -> Option<f64> {
        self.uncertainty
    }
}

impl Default for LayerMetadata {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let m = LayerMetadata::default();
        assert_eq!(m.source(), Some("User-provided"));
        assert_eq!(m.url(), None);
        assert_eq!(m.source_type(), SourceType::Unknown);
        assert_eq!(m.access_date(), None);
        assert_eq!(m.uncertainty(), None);
    }

    #[test]
    fn builder_chaining() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let m = LayerMetadata::new()
            .with_source("lab")
            .with_url("https://example.org/data")
            .with_source_type(SourceType::Measured)
            .with_access_date(date)
            .with_uncertainty(0.5);
        assert_eq!(m.source(), Some("lab"));
        assert_eq!(m.url(), Some("https://example.org/data"));
        assert_eq!(m.source_type(), SourceType::Measured);
        assert_eq!(m.access_date(), Some(date));
        assert_eq!(m.uncertainty(), Some(0.5));
    }

    #[test]
    fn property_names() {
        assert_eq!(Property::KSat.to_string(), "k_sat");
        assert_eq!(Property::SandContent.as_str(), "sand_content");
        assert_eq!(SourceType::Derived.to_string(), "derived");
    }
}
