//! Flemish soil data services (DOV texture maps, Geopunt elevation).
//!
//! This crate stops at the interface boundary: it describes the WMS
//! GetFeatureInfo requests and turns saved responses into layers and
//! profiles. Fetching is left to the caller.
//!
//! | Request              | Service | Parser                                       |
//! |----------------------|---------|----------------------------------------------|
//! | [`texture_query`]    | DOV     | [`parse_texture_response`], [`profile_from_texture_response`] |
//! | [`elevation_query`]  | Geopunt | [`parse_elevation_response`]                 |
//!
//! # Example
//!
//! ```
//! use soilprof_dov::parse_elevation_response;
//!
//! let text = "@DHMVII_DTM_1m Stretched value;Pixel Value; 32.36;32.36;";
//! assert_eq!(parse_elevation_response(text), Some(32.36));
//! ```

pub mod elevation;
pub mod error;
pub mod query;
pub mod texture;

pub use elevation::parse_elevation_response;
pub use error::DovError;
pub use query::{
    DEFAULT_CRS, DOV_WMS_URL, ELEVATION_LAYER, FeatureInfoQuery, GEOPUNT_WMS_URL, TEXTURE_LAYERS,
    elevation_query, texture_query,
};
pub use texture::{
    DEPTH_INTERVALS, DepthInterval, parse_texture_response, profile_from_texture_response,
};
