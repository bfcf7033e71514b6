use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Soil profile discretization and export.
#[derive(Parser)]
#[command(
    name = "soilprof",
    version,
    about = "Layered soil profiles: discretization, texture lookup and SWAP export"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print layer bounds and sublayer boundaries of a profile.
    Boundaries(BoundariesArgs),
    /// Write the SWAP soil section of a profile.
    Swap(SwapArgs),
    /// Look up sand/silt/clay percentages of a texture class.
    Texture(TextureArgs),
    /// Build a profile from a saved DOV texture response.
    Dov(DovArgs),
    /// Print the DOV and Geopunt GetFeatureInfo URLs for a location.
    DovQuery(DovQueryArgs),
}

/// Arguments for the `boundaries` subcommand.
#[derive(clap::Args)]
pub struct BoundariesArgs {
    /// Path to profile TOML file.
    #[arg(short, long, default_value = "profile.toml")]
    pub config: PathBuf,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `swap` subcommand.
#[derive(clap::Args)]
pub struct SwapArgs {
    /// Path to profile TOML file.
    #[arg(short, long, default_value = "profile.toml")]
    pub config: PathBuf,

    /// Output path for the soil section.
    #[arg(short, long)]
    pub output: PathBuf,
}

/// Arguments for the `texture` subcommand.
#[derive(clap::Args)]
pub struct TextureArgs {
    /// Texture class name or alias, e.g. "silt loam" or "sil".
    pub class: String,

    /// Representative value: centroid or mean.
    #[arg(short, long, default_value = "centroid")]
    pub method: String,

    /// Print the table values without rescaling to 100%.
    #[arg(long)]
    pub raw: bool,

    /// Also print the class ranges.
    #[arg(long)]
    pub ranges: bool,

    /// Custom classification table (TOML) instead of USDA.
    #[arg(long)]
    pub table: Option<PathBuf>,
}

/// Arguments for the `dov` subcommand.
#[derive(clap::Args)]
pub struct DovArgs {
    /// Saved GetFeatureInfo JSON response for the DOV texture layers.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Profile name (defaults to one derived from the coordinates).
    #[arg(short, long)]
    pub name: Option<String>,

    /// X coordinate of the profile location.
    #[arg(long, requires = "y")]
    pub x: Option<f64>,

    /// Y coordinate of the profile location.
    #[arg(long, requires = "x")]
    pub y: Option<f64>,

    /// Surface elevation [m].
    #[arg(long, conflicts_with = "elevation_response")]
    pub elevation: Option<f64>,

    /// Saved Geopunt plain-text elevation response.
    #[arg(long)]
    pub elevation_response: Option<PathBuf>,
}

/// Arguments for the `dov-query` subcommand.
#[derive(clap::Args)]
pub struct DovQueryArgs {
    /// X coordinate of the location.
    #[arg(long)]
    pub x: f64,

    /// Y coordinate of the location.
    #[arg(long)]
    pub y: f64,

    /// Coordinate reference system of x and y.
    #[arg(long, default_value = soilprof_dov::DEFAULT_CRS)]
    pub crs: String,
}
