//! Sublayer boundary placement.

use crate::policy::{Discretization, DiscretizationKind};

/// Computes the sublayer boundaries of the interval `[top, bottom]`.
///
/// Returns `policy.num_sublayers() + 1` depths in increasing order. The
/// first element is exactly `top` and the last is exactly `bottom`. The
/// caller guarantees `top < bottom`.
///
/// | Kind | Placement |
/// |------|-----------|
/// | `Even` | linear interpolation |
/// | `LogTop` | `exp(linspace(0, d, n+1)) - 1`, normalised to `[0, 1]` |
/// | `LogBottom` | the `LogTop` curve mirrored: `1 - reverse(p)` |
/// | `LogBoth` | `LogTop` over the upper half, mirrored over the lower half; odd counts get a central sublayer across the midpoint |
///
/// # Example
///
/// ```
/// use soilprof_discretize::{Discretization, compute_boundaries};
///
/// let policy = Discretization::even(4, 1).unwrap();
/// assert_eq!(compute_boundaries(0.0, 20.0, &policy), vec![0.0, 5.0, 10.0, 15.0, 20.0]);
/// ```
pub fn compute_boundaries(top: f64, bottom: f64, policy: &Discretization) -> Vec<f64> {
    let n = policy.num_sublayers();
    let density = policy.log_density();

    match policy.kind() {
        DiscretizationKind::Even => linspace(top, bottom, n + 1),
        DiscretizationKind::LogTop => map_positions(top, bottom, &exp_positions(density, n + 1)),
        DiscretizationKind::LogBottom => {
            map_positions(top, bottom, &mirror(&exp_positions(density, n + 1)))
        }
        DiscretizationKind::LogBoth => {
            let centred = n % 2 == 1;
            let half = n / 2 + usize::from(centred);
            let middle = (top + bottom) / 2.0;
            let upper = exp_positions(density, half + 1);

            let mut boundaries = map_positions(top, middle, &upper);
            boundaries.pop();
            let mut lower = map_positions(middle, bottom, &mirror(&upper));
            if centred {
                // the two half-gaps at the midpoint merge into one sublayer
                lower.remove(0);
            }
            boundaries.extend(lower);
            boundaries
        }
    }
}

/// Returns the thicknesses between consecutive boundaries.
pub fn sublayer_thicknesses(boundaries: &[f64]) -> Vec<f64> {
    boundaries.windows(2).map(|w| w[1] - w[0]).collect()
}

/// `count` equally spaced values from `start` to `stop` inclusive.
fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    let step = (stop - start) / (count - 1) as f64;
    let mut values: Vec<f64> = (0..count).map(|i| start + i as f64 * step).collect();
    values[count - 1] = stop;
    values
}

/// Exponential positions `exp(linspace(0, density, count)) - 1`, normalised so
/// the last value is 1. Requires `count >= 2` and `density > 0`.
fn exp_positions(density: f64, count: usize) -> Vec<f64> {
    let raw: Vec<f64> = linspace(0.0, density, count)
        .into_iter()
        .map(f64::exp_m1)
        .collect();
    let last = raw[count - 1];
    raw.into_iter().map(|p| p / last).collect()
}

/// Reverses and inverts normalised positions: `1 - reverse(p)`.
fn mirror(positions: &[f64]) -> Vec<f64> {
    positions.iter().rev().map(|p| 1.0 - p).collect()
}

/// Maps normalised positions onto `[top, bottom]`, pinning both endpoints.
fn map_positions(top: f64, bottom: f64, positions: &[f64]) -> Vec<f64> {
    let thickness = bottom - top;
    let mut boundaries: Vec<f64> = positions.iter().map(|p| top + p * thickness).collect();
    let last = boundaries.len() - 1;
    boundaries[0] = top;
    boundaries[last] = bottom;
    boundaries
}
