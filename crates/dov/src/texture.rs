//! DOV texture responses.
//!
//! The GetFeatureInfo response for the three [`TEXTURE_LAYERS`] is a GeoJSON
//! feature collection with one feature per layer (clay, silt, sand). Each
//! feature's properties map a depth key such as `_0_-_10_cm` to a percentage,
//! and `<key>_betrouwbaarheid` to its uncertainty.

use serde_json::{Map, Value};
use soilprof_profile::{
    DEFAULT_NORMALIZE_TOLERANCE, LayerMetadata, Point, Property, SoilLayer, SoilProfile,
    SourceType, TextureFractions,
};
use tracing::{debug, info};

use crate::error::DovError;
use crate::query::{DOV_WMS_URL, TEXTURE_LAYERS};

const UNCERTAINTY_SUFFIX: &str = "_betrouwbaarheid";

/// A fixed depth interval of the DOV texture maps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthInterval {
    /// Property key in the response.
    pub key: &'static str,
    /// Top depth [cm].
    pub top: f64,
    /// Bottom depth [cm].
    pub bottom: f64,
    /// Name given to the resulting layer.
    pub name: &'static str,
}

/// The depth intervals DOV publishes, from the surface down.
pub const DEPTH_INTERVALS: [DepthInterval; 5] = [
    DepthInterval {
        key: "_0_-_10_cm",
        top: 0.0,
        bottom: 10.0,
        name: "Layer_0-10cm",
    },
    DepthInterval {
        key: "_10_-_30_cm",
        top: 10.0,
        bottom: 30.0,
        name: "Layer_10-30cm",
    },
    DepthInterval {
        key: "_30_-_60_cm",
        top: 30.0,
        bottom: 60.0,
        name: "Layer_30-60cm",
    },
    DepthInterval {
        key: "_60_-_100_cm",
        top: 60.0,
        bottom: 100.0,
        name: "Layer_60-100cm",
    },
    DepthInterval {
        key: "_100_-_150_cm",
        top: 100.0,
        bottom: 150.0,
        name: "Layer_100-150cm",
    },
];

/// Parses a texture response into one layer per depth interval.
///
/// Layers come out ordered by depth regardless of the key order in the
/// payload. The present intervals must be contiguous from the surface down.
/// Fractions are normalized before the layer is built.
pub fn parse_texture_response(json: &str) -> Result<Vec<SoilLayer>, DovError> {
    Ok(parse_intervals(json)?
        .into_iter()
        .map(|(_, layer)| layer)
        .collect())
}

/// Parses a texture response into a profile whose layer bottoms are the
/// interval bottoms.
pub fn profile_from_texture_response(
    name: &str,
    location: Option<Point>,
    elevation: Option<f64>,
    json: &str,
) -> Result<SoilProfile, DovError> {
    let (bottoms, layers): (Vec<f64>, Vec<SoilLayer>) =
        parse_intervals(json)?.into_iter().unzip();
    let mut profile = SoilProfile::new(name, layers, bottoms)?;
    if let Some(location) = location {
        profile = profile.with_location(location);
    }
    if let Some(elevation) = elevation {
        profile = profile.with_elevation(elevation);
    }
    info!(
        profile = %profile.name(),
        n_layers = profile.layers().len(),
        depth = profile.profile_depth(),
        "built profile from DOV texture response"
    );
    Ok(profile)
}

fn parse_intervals(json: &str) -> Result<Vec<(f64, SoilLayer)>, DovError> {
    let properties = feature_properties(json)?;
    let [clay, silt, sand] = [&properties[0], &properties[1], &properties[2]];

    for key in clay.keys().filter(|k| !k.ends_with(UNCERTAINTY_SUFFIX)) {
        if !DEPTH_INTERVALS.iter().any(|interval| interval.key == key.as_str()) {
            return Err(DovError::UnknownDepthKey { key: key.clone() });
        }
    }

    let mut layers = Vec::new();
    let mut previous_bottom = 0.0;
    for interval in DEPTH_INTERVALS
        .iter()
        .filter(|interval| clay.contains_key(interval.key))
    {
        if interval.top != previous_bottom {
            return Err(DovError::NonContiguousDepth {
                key: interval.key.to_string(),
                top: interval.top,
                expected: previous_bottom,
            });
        }
        previous_bottom = interval.bottom;
        let layer = build_layer(interval, [clay, silt, sand])?;
        debug!(layer = interval.name, "parsed DOV depth interval");
        layers.push((interval.bottom, layer));
    }
    Ok(layers)
}

fn feature_properties(json: &str) -> Result<Vec<Map<String, Value>>, DovError> {
    let value: Value = serde_json::from_str(json)?;
    let features = value
        .get("features")
        .and_then(Value::as_array)
        .ok_or_else(|| DovError::Json {
            reason: "missing \"features\" array".to_string(),
        })?;
    if features.len() < TEXTURE_LAYERS.len() {
        return Err(DovError::MissingFeatures {
            expected: TEXTURE_LAYERS.len(),
            got: features.len(),
        });
    }

    features
        .iter()
        .take(TEXTURE_LAYERS.len())
        .enumerate()
        .map(|(i, feature)| {
            feature
                .get("properties")
                .and_then(Value::as_object)
                .cloned()
                .ok_or_else(|| DovError::Json {
                    reason: format!("feature {i} has no \"properties\" object"),
                })
        })
        .collect()
}

fn number(properties: &Map<String, Value>, key: &str) -> Result<f64, DovError> {
    properties
        .get(key)
        .and_then(Value::as_f64)
        .ok_or_else(|| DovError::MissingProperty {
            key: key.to_string(),
        })
}

/// `features` is ordered clay, silt, sand like [`TEXTURE_LAYERS`].
fn build_layer(
    interval: &DepthInterval,
    features: [&Map<String, Value>; 3],
) -> Result<SoilLayer, DovError> {
    let uncertainty_key = format!("{}{UNCERTAINTY_SUFFIX}", interval.key);
    let [clay, silt, sand] = features.map(|props| number(props, interval.key));
    let fractions = TextureFractions::new(sand?, silt?, clay?)?
        .normalized(DEFAULT_NORMALIZE_TOLERANCE)?;

    let mut builder = SoilLayer::builder(interval.name)
        .with_description(format!(
            "Soil layer from {} to {} cm depth",
            interval.top, interval.bottom
        ))
        .with_fractions(fractions.sand, fractions.silt, fractions.clay);

    let properties = [
        Property::ClayContent,
        Property::SiltContent,
        Property::SandContent,
    ];
    for ((property, source_layer), props) in
        properties.into_iter().zip(TEXTURE_LAYERS).zip(features)
    {
        let metadata = LayerMetadata::new()
            .with_source(format!("DOV WMS, {source_layer}"))
            .with_url(DOV_WMS_URL)
            .with_source_type(SourceType::Modeled)
            .with_uncertainty(number(props, &uncertainty_key)?);
        builder = builder.with_metadata(property, metadata);
    }

    Ok(builder.build()?)
}
