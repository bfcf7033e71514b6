//! A vertical stack of soil layers.

use tracing::debug;

use crate::capability::Pedotransfer;
use crate::error::ProfileError;
use crate::layer::SoilLayer;

/// A 2-D location in the profile's coordinate reference system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An ordered stack of layers from the surface downward.
///
/// `layer_bottoms[i]` is the bottom depth [cm] of `layers[i]`; the top of the
/// first layer is 0 and every other layer starts at the bottom of the one
/// above it. Depth bounds are derived on demand from the bottoms.
///
/// # Example
///
/// ```
/// use soilprof_profile::{SoilLayer, SoilProfile};
///
/// let top = SoilLayer::builder("Ap").build().unwrap();
/// let sub = SoilLayer::builder("Bt").build().unwrap();
/// let profile = SoilProfile::new("pit 1", vec![top, sub], vec![30.0, 100.0]).unwrap();
///
/// assert_eq!(profile.profile_depth(), 100.0);
/// assert_eq!(profile.layer_bounds(), vec![(0.0, 30.0), (30.0, 100.0)]);
/// assert_eq!(profile.get_layer_at_depth(30.0).unwrap().1, 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SoilProfile {
    name: String,
    description: Option<String>,
    location: Option<Point>,
    elevation: Option<f64>,
    layers: Vec<SoilLayer>,
    layer_bottoms: Vec<f64>,
}

impl SoilProfile {
    /// Creates a profile, validating the depth structure.
    ///
    /// Fails when `layer_bottoms` is empty, its length differs from `layers`,
    /// or any bottom is not strictly greater than the previous one (0 for the
    /// first layer).
    pub fn new(
        name: impl Into<String>,
        layers: Vec<SoilLayer>,
        layer_bottoms: Vec<f64>,
    ) -> Result<Self, ProfileError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ProfileError::EmptyName { entity: "profile" });
        }
        if layer_bottoms.is_empty() {
            return Err(ProfileError::EmptyProfile);
        }
        if layer_bottoms.len() != layers.len() {
            return Err(ProfileError::LengthMismatch {
                layers: layers.len(),
                bottoms: layer_bottoms.len(),
            });
        }

        let mut previous = 0.0;
        for (index, &bottom) in layer_bottoms.iter().enumerate() {
            if !bottom.is_finite() {
                return Err(ProfileError::NonFinite {
                    field: "layer_bottoms",
                });
            }
            if bottom <= previous {
                return Err(ProfileError::NonIncreasingBottom {
                    index,
                    bottom,
                    previous,
                });
            }
            previous = bottom;
        }

        debug!(profile = %name, n_layers = layers.len(), depth = previous, "created profile");
        Ok(Self {
            name,
            description: None,
            location: None,
            elevation: None,
            layers,
            layer_bottoms,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_location(mut self, location: Point) -> Self {
        self.location = Some(location);
        self
    }

    /// Sets the surface elevation [m].
    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = Some(elevation);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn location(&self) -> Option<Point> {
        self.location
    }

    /// Surface elevation [m].
    pub fn elevation(&self) -> Option<f64> {
        self.elevation
    }

    pub fn layers(&self) -> &[SoilLayer] {
        &self.layers
    }

    /// Mutable access to the layers. The stack itself cannot be resized.
    pub fn layers_mut(&mut self) -> &mut [SoilLayer] {
        &mut self.layers
    }

    /// Bottom depth [cm] of each layer.
    pub fn layer_bottoms(&self) -> &[f64] {
        &self.layer_bottoms
    }

    /// `(top, bottom)` of each layer, indexed like [`layers`](Self::layers).
    pub fn layer_bounds(&self) -> Vec<(f64, f64)> {
        let mut top = 0.0;
        self.layer_bottoms
            .iter()
            .map(|&bottom| {
                let bounds = (top, bottom);
                top = bottom;
                bounds
            })
            .collect()
    }

    /// Total depth [cm]: the bottom of the last layer.
    pub fn profile_depth(&self) -> f64 {
        self.layer_bottoms.last().copied().unwrap_or(0.0)
    }

    /// Returns the layer whose closed interval `[top, bottom]` contains `depth`.
    ///
    /// Layers are scanned top to bottom and the first match wins, so a depth on
    /// a shared boundary resolves to the shallower layer.
    pub fn get_layer_at_depth(&self, depth: f64) -> Option<(&SoilLayer, usize)> {
        self.layer_bounds()
            .into_iter()
            .position(|(top, bottom)| top <= depth && depth <= bottom)
            .map(|index| (&self.layers[index], index))
    }

    /// Sublayer boundaries of every layer, indexed like [`layers`](Self::layers).
    #[tracing::instrument(skip_all, fields(profile = %self.name, n_layers = self.layers.len()))]
    pub fn get_sublayer_boundaries(&self) -> Vec<Vec<f64>> {
        self.layers
            .iter()
            .zip(self.layer_bounds())
            .map(|(layer, (top, bottom))| layer.get_sublayer_boundaries(top, bottom))
            .collect()
    }

    /// All sublayer boundary depths of the profile, sorted and deduplicated.
    ///
    /// Adjacent layers share their common boundary, which appears once.
    pub fn get_sublayer_depths(&self) -> Vec<f64> {
        let mut depths: Vec<f64> = self.get_sublayer_boundaries().into_iter().flatten().collect();
        depths.sort_by(f64::total_cmp);
        depths.dedup();
        debug!(n_depths = depths.len(), "merged sublayer depths");
        depths
    }

    /// Normalises the texture fractions of every layer in place.
    ///
    /// Either every layer is normalised or, on the first failure, none is.
    pub fn normalize_soil_fractions(&mut self, tolerance: f64) -> Result<(), ProfileError> {
        let mut updated = self.layers.clone();
        for (index, layer) in updated.iter_mut().enumerate() {
            layer
                .normalize_soil_fractions(tolerance)
                .map_err(|e| e.at_layer(index))?;
        }
        self.layers = updated;
        Ok(())
    }

    /// Predicts Van Genuchten parameters for every layer in one predictor call.
    pub fn predict_van_genuchten(
        &mut self,
        predictor: &impl Pedotransfer,
    ) -> Result<(), ProfileError> {
        let fractions = self
            .layers
            .iter()
            .enumerate()
            .map(|(index, layer)| {
                layer
                    .fractions()
                    .ok_or_else(|| ProfileError::MissingFractions.at_layer(index))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let predictions = predictor.predict(&fractions)?;
        if predictions.len() != self.layers.len() {
            return Err(ProfileError::PredictionCount {
                expected: self.layers.len(),
                got: predictions.len(),
            });
        }

        let mut updated = self.layers.clone();
        for (index, (layer, prediction)) in updated.iter_mut().zip(&predictions).enumerate() {
            layer
                .apply_prediction(prediction, predictor.name())
                .map_err(|e| e.at_layer(index))?;
        }
        self.layers = updated;
        Ok(())
    }
}
