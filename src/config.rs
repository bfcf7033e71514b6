use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// A soil profile described in TOML.
///
/// ```toml
/// name = "Field A"
/// location = { x = 247172.56, y = 204590.58 }
///
/// [[layers]]
/// name = "Ap"
/// bottom = 30.0
/// texture_class = "silt loam"
/// discretization = { kind = "log_top", num_sublayers = 5, num_compartments = 2 }
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileToml {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<LocationToml>,
    /// Surface elevation [m].
    #[serde(default)]
    pub elevation: Option<f64>,

    /// Texture handling.
    #[serde(default)]
    pub texture: TextureToml,

    /// Layers from the surface down.
    pub layers: Vec<LayerToml>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationToml {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextureToml {
    /// Fill in missing fractions from the texture class.
    #[serde(default = "default_true")]
    pub infer_fractions: bool,
    /// Rescale fractions to 100% after loading.
    #[serde(default)]
    pub normalize: bool,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Custom classification table instead of USDA.
    #[serde(default)]
    pub table: Option<PathBuf>,
}

impl Default for TextureToml {
    fn default() -> Self {
        Self {
            infer_fractions: true,
            normalize: false,
            tolerance: default_tolerance(),
            table: None,
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_tolerance() -> f64 {
    soilprof_profile::DEFAULT_NORMALIZE_TOLERANCE
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayerToml {
    pub name: String,
    /// Bottom depth [cm].
    pub bottom: f64,
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub theta_res: Option<f64>,
    #[serde(default)]
    pub theta_sat: Option<f64>,
    #[serde(default)]
    pub alpha: Option<f64>,
    #[serde(default)]
    pub n: Option<f64>,
    #[serde(default)]
    pub k_sat: Option<f64>,
    #[serde(default)]
    pub l: Option<f64>,

    #[serde(default)]
    pub texture_class: Option<String>,
    #[serde(default)]
    pub sand: Option<f64>,
    #[serde(default)]
    pub silt: Option<f64>,
    #[serde(default)]
    pub clay: Option<f64>,
    #[serde(default)]
    pub organic_matter: Option<f64>,
    #[serde(default)]
    pub bulk_density: Option<f64>,

    #[serde(default)]
    pub discretization: Option<DiscretizationToml>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiscretizationToml {
    #[serde(default = "default_kind")]
    pub kind: String,
    pub num_sublayers: usize,
    #[serde(default = "default_num_compartments")]
    pub num_compartments: usize,
    #[serde(default = "default_log_density")]
    pub log_density: f64,
}

fn default_kind() -> String {
    "even".to_string()
}
fn default_num_compartments() -> usize {
    1
}
fn default_log_density() -> f64 {
    soilprof_discretize::Discretization::DEFAULT_LOG_DENSITY
}

/// Reads and parses a profile TOML file.
pub fn read_profile_config(path: &Path) -> Result<ProfileToml> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}
