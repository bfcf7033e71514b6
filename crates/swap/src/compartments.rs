//! Vertical discretization table (SOILPROFILE) for SWAP.

use soilprof_profile::SoilProfile;

/// One sublayer of the SWAP vertical discretization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoilProfileRow {
    /// 1-based soil layer number.
    pub isoillay: usize,
    /// 1-based sublayer number, running over the whole profile.
    pub isublay: usize,
    /// Sublayer thickness [cm].
    pub hsublay: f64,
    /// Compartment height within the sublayer [cm].
    pub hcomp: f64,
    /// Number of compartments in the sublayer.
    pub ncomp: usize,
}

/// Builds the SOILPROFILE rows of a profile.
///
/// A layer without a discretization is one sublayer of one compartment;
/// otherwise every sublayer is split into `num_compartments` compartments.
pub fn soil_profile_rows(profile: &SoilProfile) -> Vec<SoilProfileRow> {
    let mut rows = Vec::new();
    for (index, (layer, boundaries)) in profile
        .layers()
        .iter()
        .zip(profile.get_sublayer_boundaries())
        .enumerate()
    {
        let ncomp = layer
            .discretization()
            .map_or(1, |policy| policy.num_compartments());
        for w in boundaries.windows(2) {
            let hsublay = w[1] - w[0];
            rows.push(SoilProfileRow {
                isoillay: index + 1,
                isublay: rows.len() + 1,
                hsublay,
                hcomp: hsublay / ncomp as f64,
                ncomp,
            });
        }
    }
    rows
}
