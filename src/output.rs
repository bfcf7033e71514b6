//! Serializable views of profiles for command output.

use std::collections::BTreeMap;

use serde::Serialize;

use soilprof_profile::{LayerMetadata, SoilLayer, SoilProfile};

/// Layer bounds and sublayer boundaries of a profile.
#[derive(Debug, Serialize)]
pub struct BoundariesReport {
    pub profile: String,
    pub depth: f64,
    pub layers: Vec<LayerBoundaries>,
    /// Merged, deduplicated sublayer depths of the whole profile.
    pub depths: Vec<f64>,
}

#[derive(Debug, Serialize)]
pub struct LayerBoundaries {
    pub name: String,
    pub top: f64,
    pub bottom: f64,
    pub kind: Option<String>,
    pub boundaries: Vec<f64>,
}

impl BoundariesReport {
    pub fn from_profile(profile: &SoilProfile) -> Self {
        let layers = profile
            .layers()
            .iter()
            .zip(profile.layer_bounds())
            .zip(profile.get_sublayer_boundaries())
            .map(|((layer, (top, bottom)), boundaries)| LayerBoundaries {
                name: layer.name().to_string(),
                top,
                bottom,
                kind: layer.discretization().map(|d| d.kind().to_string()),
                boundaries,
            })
            .collect();
        Self {
            profile: profile.name().to_string(),
            depth: profile.profile_depth(),
            layers,
            depths: profile.get_sublayer_depths(),
        }
    }
}

/// Full JSON view of a profile.
#[derive(Debug, Serialize)]
pub struct ProfileReport {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f64>,
    pub depth: f64,
    pub layers: Vec<LayerReport>,
}

#[derive(Debug, Serialize)]
pub struct LayerReport {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub top: f64,
    pub bottom: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texture_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sand: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub silt: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clay: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organic_matter: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bulk_density: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theta_res: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theta_sat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub k_sat: Option<f64>,
    pub l: f64,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<&'static str, MetadataReport>,
}

#[derive(Debug, Serialize)]
pub struct MetadataReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub source_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uncertainty: Option<f64>,
}

impl From<&LayerMetadata> for MetadataReport {
    fn from(m: &LayerMetadata) -> Self {
        Self {
            source: m.source().map(str::to_string),
            url: m.url().map(str::to_string),
            source_type: m.source_type().as_str(),
            access_date: m.access_date().map(|d| d.to_string()),
            uncertainty: m.uncertainty(),
        }
    }
}

impl LayerReport {
    fn new(layer: &SoilLayer, top: f64, bottom: f64) -> Self {
        Self {
            name: layer.name().to_string(),
            description: layer.description().map(str::to_string),
            top,
            bottom,
            texture_class: layer.texture_class().map(str::to_string),
            sand: layer.sand_content(),
            silt: layer.silt_content(),
            clay: layer.clay_content(),
            organic_matter: layer.organic_matter(),
            bulk_density: layer.bulk_density(),
            theta_res: layer.theta_res(),
            theta_sat: layer.theta_sat(),
            alpha: layer.alpha(),
            n: layer.n(),
            k_sat: layer.k_sat(),
            l: layer.l(),
            metadata: layer
                .all_metadata()
                .iter()
                .map(|(property, m)| (property.as_str(), MetadataReport::from(m)))
                .collect(),
        }
    }
}

impl ProfileReport {
    pub fn from_profile(profile: &SoilProfile) -> Self {
        Self {
            name: profile.name().to_string(),
            description: profile.description().map(str::to_string),
            location: profile.location().map(|p| [p.x, p.y]),
            elevation: profile.elevation(),
            depth: profile.profile_depth(),
            layers: profile
                .layers()
                .iter()
                .zip(profile.layer_bounds())
                .map(|(layer, (top, bottom))| LayerReport::new(layer, top, bottom))
                .collect(),
        }
    }
}
