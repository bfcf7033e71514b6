//! Sand, silt and clay percentages.

use tracing::warn;

use crate::error::ProfileError;

/// Sums within this distance of 100% are treated as already normalised.
pub const NORMALIZED_EPSILON: f64 = 0.01;

/// Default deviation from 100% beyond which normalisation logs a warning.
pub const DEFAULT_NORMALIZE_TOLERANCE: f64 = 2.0;

/// Largest excess over 100% accepted when a layer is validated.
pub const TEXTURE_SUM_TOLERANCE: f64 = 0.1;

/// Texture composition of a soil sample in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureFractions {
    /// Sand content [%].
    pub sand: f64,
    /// Silt content [%].
    pub silt: f64,
    /// Clay content [%].
    pub clay: f64,
}

impl TextureFractions {
    /// Creates fractions, checking each lies in `[0, 100]`.
    ///
    /// The sum is not checked here; see [`TextureFractions::normalized`].
    pub fn new(sand: f64, silt: f64, clay: f64) -> Result<Self, ProfileError> {
        for (field, value) in [("sand_content", sand), ("silt_content", silt), ("clay_content", clay)]
        {
            if !value.is_finite() {
                return Err(ProfileError::NonFinite { field });
            }
            if !(0.0..=100.0).contains(&value) {
                return Err(ProfileError::OutOfRange {
                    field,
                    value,
                    bounds: "[0, 100]",
                });
            }
        }
        Ok(Self { sand, silt, clay })
    }

    /// Returns `sand + silt + clay`.
    pub fn sum(&self) -> f64 {
        self.sand + self.silt + self.clay
    }

    /// Returns the fractions rescaled to sum to exactly 100%.
    ///
    /// - within [`NORMALIZED_EPSILON`] of 100: returned unchanged
    /// - deviating by more than `tolerance`: a warning is logged, then rescaled
    /// - sum `<= 0`: [`ProfileError::DegenerateFractions`]
    pub fn normalized(&self, tolerance: f64) -> Result<Self, ProfileError> {
        let sum = self.sum();
        let deviation = (sum - 100.0).abs();
        if deviation < NORMALIZED_EPSILON {
            return Ok(*self);
        }
        if deviation > tolerance {
            warn!(
                sum,
                tolerance,
                sand = self.sand,
                silt = self.silt,
                clay = self.clay,
                "texture fractions deviate from 100% by more than the tolerance"
            );
        }
        if sum <= 0.0 {
            return Err(ProfileError::DegenerateFractions { sum });
        }
        let scale = 100.0 / sum;
        Ok(Self {
            sand: self.sand * scale,
            silt: self.silt * scale,
            clay: self.clay * scale,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn new_rejects_out_of_range() {
        assert!(matches!(
            TextureFractions::new(101.0, 0.0, 0.0),
            Err(ProfileError::OutOfRange {
                field: "sand_content",
                ..
            })
        ));
        assert!(matches!(
            TextureFractions::new(10.0, -1.0, 0.0),
            Err(ProfileError::OutOfRange {
                field: "silt_content",
                ..
            })
        ));
        assert!(matches!(
            TextureFractions::new(10.0, 10.0, f64::NAN),
            Err(ProfileError::NonFinite {
                field: "clay_content"
            })
        ));
    }

    #[test]
    fn normalized_identity_near_100() {
        let f = TextureFractions::new(50.0, 30.0, 20.005).unwrap();
        assert_eq!(f.normalized(DEFAULT_NORMALIZE_TOLERANCE).unwrap(), f);
    }

    #[test]
    fn normalized_rescales() {
        let f = TextureFractions::new(72.97, 22.44, 3.61).unwrap();
        let n = f.normalized(DEFAULT_NORMALIZE_TOLERANCE).unwrap();
        assert_relative_eq!(n.sum(), 100.0, epsilon = 1e-6);
        assert_relative_eq!(n.sand / n.silt, 72.97 / 22.44, epsilon = 1e-12);
        assert_relative_eq!(n.silt / n.clay, 22.44 / 3.61, epsilon = 1e-12);
    }

    #[test]
    fn normalized_beyond_tolerance_still_rescales() {
        let f = TextureFractions::new(40.0, 40.0, 10.0).unwrap();
        let n = f.normalized(DEFAULT_NORMALIZE_TOLERANCE).unwrap();
        assert_relative_eq!(n.sum(), 100.0, epsilon = 1e-9);
        assert_relative_eq!(n.clay, 100.0 / 9.0, epsilon = 1e-9);
    }

    #[test]
    fn normalized_zero_sum_fails() {
        let f = TextureFractions::new(0.0, 0.0, 0.0).unwrap();
        assert_eq!(
            f.normalized(DEFAULT_NORMALIZE_TOLERANCE),
            Err(ProfileError::DegenerateFractions { sum: 0.0 })
        );
    }
}
