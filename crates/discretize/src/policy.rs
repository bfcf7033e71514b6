//! Discretization policies: how a layer is split into sublayers.

use std::fmt;
use std::str::FromStr;

use crate::boundaries::{compute_boundaries, sublayer_thicknesses};
use crate::error::DiscretizeError;

/// Spacing rule for sublayer boundaries within a layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DiscretizationKind {
    /// Equally spaced boundaries.
    #[default]
    Even,
    /// Exponential spacing, fine near the top of the layer.
    LogTop,
    /// Exponential spacing, fine near the bottom of the layer.
    LogBottom,
    /// Symmetric exponential spacing, fine at both ends and coarse in the middle.
    LogBoth,
}

impl DiscretizationKind {
    /// All kinds, in declaration order.
    pub const ALL: [DiscretizationKind; 4] = [
        DiscretizationKind::Even,
        DiscretizationKind::LogTop,
        DiscretizationKind::LogBottom,
        DiscretizationKind::LogBoth,
    ];

    /// Returns the canonical name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            DiscretizationKind::Even => "even",
            DiscretizationKind::LogTop => "logarithmic_top",
            DiscretizationKind::LogBottom => "logarithmic_bottom",
            DiscretizationKind::LogBoth => "logarithmic_both",
        }
    }

    /// Returns `true` for the three exponential kinds.
    pub fn is_logarithmic(self) -> bool {
        !matches!(self, DiscretizationKind::Even)
    }
}

impl fmt::Display for DiscretizationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiscretizationKind {
    type Err = DiscretizeError;

    /// Parses canonical names (`"logarithmic_top"`) and short names (`"log_top"`),
    /// case-insensitively. Hyphens are treated as underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace('-', "_");
        match key.as_str() {
            "even" => Ok(DiscretizationKind::Even),
            "logarithmic_top" | "log_top" => Ok(DiscretizationKind::LogTop),
            "logarithmic_bottom" | "log_bottom" => Ok(DiscretizationKind::LogBottom),
            "logarithmic_both" | "log_both" => Ok(DiscretizationKind::LogBoth),
            _ => Err(DiscretizeError::UnknownKind { name: s.to_string() }),
        }
    }
}

/// A validated discretization policy for one layer.
///
/// Construction validates every invariant, so a `Discretization` value can
/// always be passed to [`compute_boundaries`] without further checks.
///
/// # Example
///
/// ```
/// use soilprof_discretize::{Discretization, DiscretizationKind};
///
/// let policy = Discretization::logarithmic(DiscretizationKind::LogTop, 5, 2, 2.0).unwrap();
/// assert_eq!(policy.num_sublayers(), 5);
/// assert!(Discretization::logarithmic(DiscretizationKind::LogTop, 5, 2, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Discretization {
    kind: DiscretizationKind,
    num_sublayers: usize,
    num_compartments: usize,
    log_density: f64,
}

impl Discretization {
    /// Default density of the exponential spacing curve.
    pub const DEFAULT_LOG_DENSITY: f64 = 1.0;

    /// Creates and validates a policy.
    ///
    /// `log_density` is only checked (finite, `> 0`) for logarithmic kinds.
    pub fn new(
        kind: DiscretizationKind,
        num_sublayers: usize,
        num_compartments: usize,
        log_density: f64,
    ) -> Result<Self, DiscretizeError> {
        if num_sublayers < 1 {
            return Err(DiscretizeError::InvalidSublayers { n: num_sublayers });
        }
        if num_compartments < 1 {
            return Err(DiscretizeError::InvalidCompartments {
                n: num_compartments,
            });
        }
        if kind.is_logarithmic() && (!log_density.is_finite() || log_density <= 0.0) {
            return Err(DiscretizeError::InvalidLogDensity {
                kind: kind.as_str(),
                density: log_density,
            });
        }
        Ok(Self {
            kind,
            num_sublayers,
            num_compartments,
            log_density,
        })
    }

    /// Creates an evenly spaced policy.
    pub fn even(num_sublayers: usize, num_compartments: usize) -> Result<Self, DiscretizeError> {
        Self::new(
            DiscretizationKind::Even,
            num_sublayers,
            num_compartments,
            Self::DEFAULT_LOG_DENSITY,
        )
    }

    /// Creates a policy of the given kind with an explicit density.
    pub fn logarithmic(
        kind: DiscretizationKind,
        num_sublayers: usize,
        num_compartments: usize,
        log_density: f64,
    ) -> Result<Self, DiscretizeError> {
        Self::new(kind, num_sublayers, num_compartments, log_density)
    }

    /// Returns the spacing rule.
    pub fn kind(&self) -> DiscretizationKind {
        self.kind
    }

    /// Returns the requested number of sublayers.
    pub fn num_sublayers(&self) -> usize {
        self.num_sublayers
    }

    /// Returns the number of compartments per sublayer.
    pub fn num_compartments(&self) -> usize {
        self.num_compartments
    }

    /// Returns the density of the exponential curve.
    pub fn log_density(&self) -> f64 {
        self.log_density
    }

    /// Relative sublayer thicknesses for a unit layer, ordered top to bottom.
    ///
    /// Multiply by the layer thickness to obtain sublayer heights.
    pub fn compartment_heights(&self) -> Vec<f64> {
        sublayer_thicknesses(&compute_boundaries(0.0, 1.0, self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn kind_names_round_trip() {
        for kind in DiscretizationKind::ALL {
            assert_eq!(kind.as_str().parse::<DiscretizationKind>().unwrap(), kind);
        }
    }

    #[test]
    fn kind_short_names() {
        assert_eq!(
            "log_top".parse::<DiscretizationKind>().unwrap(),
            DiscretizationKind::LogTop
        );
        assert_eq!(
            "LOG-BOTTOM".parse::<DiscretizationKind>().unwrap(),
            DiscretizationKind::LogBottom
        );
        assert_eq!(
            " Log_Both ".parse::<DiscretizationKind>().unwrap(),
            DiscretizationKind::LogBoth
        );
    }

    #[test]
    fn kind_unknown() {
        let err = "spline".parse::<DiscretizationKind>().unwrap_err();
        assert!(matches!(err, DiscretizeError::UnknownKind { ref name } if name == "spline"));
    }

    #[test]
    fn kind_default_is_even() {
        assert_eq!(DiscretizationKind::default(), DiscretizationKind::Even);
        assert!(!DiscretizationKind::Even.is_logarithmic());
        assert!(DiscretizationKind::LogBoth.is_logarithmic());
    }

    #[test]
    fn even_accessors() {
        let d = Discretization::even(4, 3).unwrap();
        assert_eq!(d.kind(), DiscretizationKind::Even);
        assert_eq!(d.num_sublayers(), 4);
        assert_eq!(d.num_compartments(), 3);
        assert_relative_eq!(d.log_density(), 1.0);
    }

    #[test]
    fn zero_sublayers_rejected() {
        let err = Discretization::even(0, 1).unwrap_err();
        assert_eq!(err, DiscretizeError::InvalidSublayers { n: 0 });
    }

    #[test]
    fn zero_compartments_rejected() {
        let err = Discretization::even(2, 0).unwrap_err();
        assert_eq!(err, DiscretizeError::InvalidCompartments { n: 0 });
    }

    #[test]
    fn sublayers_checked_before_compartments() {
        let err = Discretization::even(0, 0).unwrap_err();
        assert_eq!(err, DiscretizeError::InvalidSublayers { n: 0 });
    }

    #[test]
    fn log_density_must_be_positive() {
        for kind in [
            DiscretizationKind::LogTop,
            DiscretizationKind::LogBottom,
            DiscretizationKind::LogBoth,
        ] {
            for density in [0.0, -1.0, f64::NAN, f64::INFINITY] {
                let result = Discretization::logarithmic(kind, 3, 1, density);
                assert!(
                    matches!(result, Err(DiscretizeError::InvalidLogDensity { .. })),
                    "{kind} with density {density} should be rejected"
                );
            }
        }
    }

    #[test]
    fn log_density_ignored_for_even() {
        assert!(Discretization::new(DiscretizationKind::Even, 3, 1, 0.0).is_ok());
    }

    #[test]
    fn compartment_heights_sum_to_one() {
        for kind in DiscretizationKind::ALL {
            for n in 1..=9 {
                let d = Discretization::new(kind, n, 1, 2.5).unwrap();
                let heights = d.compartment_heights();
                assert_eq!(heights.len(), n, "{kind} n={n}");
                assert_relative_eq!(heights.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
                assert!(heights.iter().all(|&h| h > 0.0), "{kind} n={n}: {heights:?}");
            }
        }
    }

    #[test]
    fn compartment_heights_even_are_equal() {
        let heights = Discretization::even(4, 1).unwrap().compartment_heights();
        for h in heights {
            assert_relative_eq!(h, 0.25, epsilon = 1e-12);
        }
    }
}
