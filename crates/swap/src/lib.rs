//! SWAP soil section export.
//!
//! Writes the soil part of a SWAP input file from a
//! [`SoilProfile`](soilprof_profile::SoilProfile): layer count, layer
//! thicknesses, the vertical discretization table built from each layer's
//! sublayer boundaries and compartment counts, and one Van Genuchten block
//! per layer.
//!
//! ```text
//! write_swap_soil_file()
//!   ├─ format_van_genuchten_table()   per layer, fails fast on missing parameters
//!   ├─ layer_bounds()                 HSUBLAY thicknesses
//!   └─ soil_profile_rows()            SOILPROFILE table (compartments.rs)
//! ```

pub mod compartments;
pub mod error;
pub mod writer;

pub use compartments::{SoilProfileRow, soil_profile_rows};
pub use error::SwapError;
pub use writer::{format_van_genuchten_table, swap_table_headers, write_swap_soil_file};
