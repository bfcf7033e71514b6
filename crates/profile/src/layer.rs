//! A single soil horizon with uniform physical properties.

use std::collections::BTreeMap;

use soilprof_discretize::{Discretization, compute_boundaries};
use tracing::debug;

use crate::capability::{HydraulicPrediction, Pedotransfer, TextureClassifier};
use crate::error::ProfileError;
use crate::fractions::{TEXTURE_SUM_TOLERANCE, TextureFractions};
use crate::metadata::{LayerMetadata, Property, SourceType};

/// Default tortuosity parameter.
pub const DEFAULT_L: f64 = 0.5;

/// A soil layer with Van Genuchten parameters and texture information.
///
/// Layers are built through [`SoilLayer::builder`], which validates every
/// parameter range and the cross-field invariants. The mutating operations
/// ([`normalize_soil_fractions`](Self::normalize_soil_fractions),
/// [`infer_fractions_from_texture`](Self::infer_fractions_from_texture),
/// [`predict_van_genuchten`](Self::predict_van_genuchten)) update the layer in
/// place and leave it untouched when they fail.
#[derive(Debug, Clone, PartialEq)]
pub struct SoilLayer {
    name: String,
    description: Option<String>,
    discretization: Option<Discretization>,

    theta_res: Option<f64>,
    theta_sat: Option<f64>,
    alpha: Option<f64>,
    n: Option<f64>,
    k_sat: Option<f64>,
    l: f64,

    texture_class: Option<String>,
    clay_content: Option<f64>,
    silt_content: Option<f64>,
    sand_content: Option<f64>,
    organic_matter: Option<f64>,
    bulk_density: Option<f64>,

    metadata: BTreeMap<Property, LayerMetadata>,
}

impl SoilLayer {
    /// Starts building a layer with the given name.
    pub fn builder(name: impl Into<String>) -> LayerBuilder {
        LayerBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn discretization(&self) -> Option<&Discretization> {
        self.discretization.as_ref()
    }

    /// Residual water content [cm³/cm³].
    pub fn theta_res(&self) -> Option<f64> {
        self.theta_res
    }

    /// Saturated water content [cm³/cm³].
    pub fn theta_sat(&self) -> Option<f64> {
        self.theta_sat
    }

    /// Shape parameter alpha [1/cm].
    pub fn alpha(&self) -> Option<f64> {
        self.alpha
    }

    /// Shape parameter n [-].
    pub fn n(&self) -> Option<f64> {
        self.n
    }

    /// Saturated hydraulic conductivity [cm/day].
    pub fn k_sat(&self) -> Option<f64> {
        self.k_sat
    }

    /// Tortuosity parameter [-].
    pub fn l(&self) -> f64 {
        self.l
    }

    pub fn texture_class(&self) -> Option<&str> {
        self.texture_class.as_deref()
    }

    /// Clay content [%].
    pub fn clay_content(&self) -> Option<f64> {
        self.clay_content
    }

    /// Silt content [%].
    pub fn silt_content(&self) -> Option<f64> {
        self.silt_content
    }

    /// Sand content [%].
    pub fn sand_content(&self) -> Option<f64> {
        self.sand_content
    }

    /// Organic matter content [%].
    pub fn organic_matter(&self) -> Option<f64> {
        self.organic_matter
    }

    /// Bulk density [g/cm³].
    pub fn bulk_density(&self) -> Option<f64> {
        self.bulk_density
    }

    /// Provenance of the parameter, if recorded.
    pub fn metadata(&self, property: Property) -> Option<&LayerMetadata> {
        self.metadata.get(&property)
    }

    /// All recorded provenance, ordered by property.
    pub fn all_metadata(&self) -> &BTreeMap<Property, LayerMetadata> {
        &self.metadata
    }

    /// The three texture fractions, when all are set.
    pub fn fractions(&self) -> Option<TextureFractions> {
        match (self.sand_content, self.silt_content, self.clay_content) {
            (Some(sand), Some(silt), Some(clay)) => Some(TextureFractions { sand, silt, clay }),
            _ => None,
        }
    }

    /// Sum of sand, silt and clay, when all are set.
    pub fn sum_texture(&self) -> Option<f64> {
        self.fractions().map(|f| f.sum())
    }

    /// Sublayer boundaries of this layer over `[top, bottom]`.
    ///
    /// Without a discretization the layer is a single sublayer and the result
    /// is exactly `[top, bottom]`.
    pub fn get_sublayer_boundaries(&self, top: f64, bottom: f64) -> Vec<f64> {
        match &self.discretization {
            Some(policy) => compute_boundaries(top, bottom, policy),
            None => vec![top, bottom],
        }
    }

    /// Rescales the texture fractions in place so they sum to 100%.
    ///
    /// See [`TextureFractions::normalized`] for the tolerance rules.
    pub fn normalize_soil_fractions(&mut self, tolerance: f64) -> Result<(), ProfileError> {
        let fractions = self.fractions().ok_or(ProfileError::MissingFractions)?;
        let normalized = fractions.normalized(tolerance)?;
        self.set_fractions(normalized);
        Ok(())
    }

    /// Replaces the texture fractions with the representative values of the
    /// layer's texture class.
    ///
    /// The description is annotated with the provenance and the fractions are
    /// recorded as derived.
    pub fn infer_fractions_from_texture(
        &mut self,
        classifier: &impl TextureClassifier,
    ) -> Result<(), ProfileError> {
        let class = self
            .texture_class
            .clone()
            .ok_or(ProfileError::MissingTextureClass)?;
        let fractions = classifier.classify(&class)?;

        let mut candidate = self.clone();
        candidate.set_fractions(fractions);
        let note = format!("texture fractions inferred from texture class '{class}'");
        candidate.description = Some(match candidate.description.take() {
            Some(existing) => format!("{existing} ({note})"),
            None => note,
        });
        let source = format!("texture class '{class}'");
        for property in Property::FRACTIONS {
            candidate.metadata.insert(
                property,
                LayerMetadata::new()
                    .with_source(source.clone())
                    .with_source_type(SourceType::Derived),
            );
        }
        candidate.validate()?;

        debug!(layer = %self.name, %class, "inferred texture fractions");
        *self = candidate;
        Ok(())
    }

    /// Populates the Van Genuchten parameters from the texture fractions.
    pub fn predict_van_genuchten(
        &mut self,
        predictor: &impl Pedotransfer,
    ) -> Result<(), ProfileError> {
        let fractions = self.fractions().ok_or(ProfileError::MissingFractions)?;
        let predictions = predictor.predict(&[fractions])?;
        let [prediction] = predictions.as_slice() else {
            return Err(ProfileError::PredictionCount {
                expected: 1,
                got: predictions.len(),
            });
        };
        self.apply_prediction(prediction, predictor.name())
    }

    /// Assigns a prediction, exponentiating the log10-scaled parameters.
    pub fn apply_prediction(
        &mut self,
        prediction: &HydraulicPrediction,
        source: &str,
    ) -> Result<(), ProfileError> {
        let mut candidate = self.clone();
        candidate.theta_res = Some(prediction.theta_res);
        candidate.theta_sat = Some(prediction.theta_sat);
        candidate.alpha = Some(prediction.alpha());
        candidate.n = Some(prediction.n());
        candidate.k_sat = Some(prediction.k_sat());
        for property in Property::PREDICTED {
            candidate.metadata.insert(
                property,
                LayerMetadata::new()
                    .with_source(source)
                    .with_source_type(SourceType::Modeled),
            );
        }
        candidate.validate()?;

        debug!(layer = %self.name, source, "applied pedotransfer prediction");
        *self = candidate;
        Ok(())
    }

    /// Checks parameter ranges and cross-field invariants.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.name.trim().is_empty() {
            return Err(ProfileError::EmptyName { entity: "layer" });
        }

        check_closed("theta_res", self.theta_res, 0.0, 1.0, "[0, 1]")?;
        check_closed("theta_sat", self.theta_sat, 0.0, 1.0, "[0, 1]")?;
        check_above("alpha", self.alpha, 0.0, "(0, inf)")?;
        check_above("n", self.n, 1.0, "(1, inf)")?;
        check_above("k_sat", self.k_sat, 0.0, "(0, inf)")?;
        if !self.l.is_finite() {
            return Err(ProfileError::NonFinite { field: "l" });
        }
        check_closed("clay_content", self.clay_content, 0.0, 100.0, "[0, 100]")?;
        check_closed("silt_content", self.silt_content, 0.0, 100.0, "[0, 100]")?;
        check_closed("sand_content", self.sand_content, 0.0, 100.0, "[0, 100]")?;
        check_closed("organic_matter", self.organic_matter, 0.0, f64::INFINITY, "[0, inf)")?;
        check_above("bulk_density", self.bulk_density, 0.0, "(0, inf)")?;

        if let (Some(theta_res), Some(theta_sat)) = (self.theta_res, self.theta_sat)
            && theta_res >= theta_sat
        {
            return Err(ProfileError::WaterContentOrder {
                theta_res,
                theta_sat,
            });
        }

        if let Some(sum) = self.sum_texture()
            && sum > 100.0 + TEXTURE_SUM_TOLERANCE
        {
            return Err(ProfileError::TextureSumExceeded { sum });
        }

        Ok(())
    }

    fn set_fractions(&mut self, fractions: TextureFractions) {
        self.sand_content = Some(fractions.sand);
        self.silt_content = Some(fractions.silt);
        self.clay_content = Some(fractions.clay);
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<(), ProfileError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ProfileError::NonFinite { field })
    }
}

/// `lo <= value <= hi`, skipped when unset.
fn check_closed(
    field: &'static str,
    value: Option<f64>,
    lo: f64,
    hi: f64,
    bounds: &'static str,
) -> Result<(), ProfileError> {
    let Some(value) = value else {
        return Ok(());
    };
    check_finite(field, value)?;
    if value < lo || value > hi {
        return Err(ProfileError::OutOfRange {
            field,
            value,
            bounds,
        });
    }
    Ok(())
}

/// `value > lo`, skipped when unset.
fn check_above(
    field: &'static str,
    value: Option<f64>,
    lo: f64,
    bounds: &'static str,
) -> Result<(), ProfileError> {
    let Some(value) = value else {
        return Ok(());
    };
    check_finite(field, value)?;
    if value <= lo {
        return Err(ProfileError::OutOfRange {
            field,
            value,
            bounds,
        });
    }
    Ok(())
}

/// Builder for [`SoilLayer`].
///
/// # Example
///
/// ```
/// use soilprof_profile::SoilLayer;
///
/// let layer = SoilLayer::builder("Ap")
///     .with_van_genuchten(0.02, 0.4, 0.02, 1.5, 10.0)
///     .with_fractions(70.0, 20.0, 10.0)
///     .build()
///     .unwrap();
/// assert_eq!(layer.sum_texture(), Some(100.0));
///
/// let invalid = SoilLayer::builder("Bt")
///     .with_van_genuchten(0.5, 0.4, 0.02, 1.5, 10.0)
///     .build();
/// assert!(invalid.is_err());
/// ```
#[derive(Debug, Clone)]
pub struct LayerBuilder {
    layer: SoilLayer,
}

impl LayerBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            layer: SoilLayer {
                name: name.into(),
                description: None,
                discretization: None,
                theta_res: None,
                theta_sat: None,
                alpha: None,
                n: None,
                k_sat: None,
                l: DEFAULT_L,
                texture_class: None,
                clay_content: None,
                silt_content: None,
                sand_content: None,
                organic_matter: None,
                bulk_density: None,
                metadata: BTreeMap::new(),
            },
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.layer.description = Some(description.into());
        self
    }

    pub fn with_discretization(mut self, discretization: Discretization) -> Self {
        self.layer.discretization = Some(discretization);
        self
    }

    /// Sets `theta_res`, `theta_sat`, `alpha`, `n` and `k_sat` together.
    pub fn with_van_genuchten(
        mut self,
        theta_res: f64,
        theta_sat: f64,
        alpha: f64,
        n: f64,
        k_sat: f64,
    ) -> Self {
        self.layer.theta_res = Some(theta_res);
        self.layer.theta_sat = Some(theta_sat);
        self.layer.alpha = Some(alpha);
        self.layer.n = Some(n);
        self.layer.k_sat = Some(k_sat);
        self
    }

    pub fn with_theta_res(mut self, theta_res: f64) -> Self {
        self.layer.theta_res = Some(theta_res);
        self
    }

    pub fn with_theta_sat(mut self, theta_sat: f64) -> Self {
        self.layer.theta_sat = Some(theta_sat);
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.layer.alpha = Some(alpha);
        self
    }

    pub fn with_n(mut self, n: f64) -> Self {
        self.layer.n = Some(n);
        self
    }

    pub fn with_k_sat(mut self, k_sat: f64) -> Self {
        self.layer.k_sat = Some(k_sat);
        self
    }

    pub fn with_l(mut self, l: f64) -> Self {
        self.layer.l = l;
        self
    }

    pub fn with_texture_class(mut self, texture_class: impl Into<String>) -> Self {
        self.layer.texture_class = Some(texture_class.into());
        self
    }

    /// Sets sand, silt and clay content [%].
    pub fn with_fractions(mut self, sand: f64, silt: f64, clay: f64) -> Self {
        self.layer.set_fractions(TextureFractions { sand, silt, clay });
        self
    }

    pub fn with_sand_content(mut self, sand: f64) -> Self {
        self.layer.sand_content = Some(sand);
        self
    }

    pub fn with_silt_content(mut self, silt: f64) -> Self {
        self.layer.silt_content = Some(silt);
        self
    }

    pub fn with_clay_content(mut self, clay: f64) -> Self {
        self.layer.clay_content = Some(clay);
        self
    }

    pub fn with_organic_matter(mut self, organic_matter: f64) -> Self {
        self.layer.organic_matter = Some(organic_matter);
        self
    }

    pub fn with_bulk_density(mut self, bulk_density: f64) -> Self {
        self.layer.bulk_density = Some(bulk_density);
        self
    }

    /// Records provenance for one parameter.
    pub fn with_metadata(mut self, property: Property, metadata: LayerMetadata) -> Self {
        self.layer.metadata.insert(property, metadata);
        self
    }

    /// Validates and returns the layer.
    pub fn build(self) -> Result<SoilLayer, ProfileError> {
        self.layer.validate()?;
        Ok(self.layer)
    }
}
