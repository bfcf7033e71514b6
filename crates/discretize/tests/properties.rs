//! Boundary properties that hold for every policy kind.

use approx::assert_abs_diff_eq;
use soilprof_discretize::{
    Discretization, DiscretizationKind, compute_boundaries, sublayer_thicknesses,
};

const INTERVALS: [(f64, f64); 5] = [
    (0.0, 1.0),
    (0.0, 50.0),
    (10.0, 30.0),
    (0.1, 0.3),
    (37.5, 152.25),
];

#[test]
fn even_spacing_is_uniform() {
    for &(top, bottom) in &INTERVALS {
        for n in 1..=20 {
            let policy = Discretization::even(n, 1).unwrap();
            let b = compute_boundaries(top, bottom, &policy);
            assert_eq!(b.len(), n + 1);
            let step = (bottom - top) / n as f64;
            for gap in sublayer_thicknesses(&b) {
                assert_abs_diff_eq!(gap, step, epsilon = 1e-9);
            }
        }
    }
}

#[test]
fn endpoints_are_exact_for_every_kind() {
    for kind in DiscretizationKind::ALL {
        for &(top, bottom) in &INTERVALS {
            for n in 1..=12 {
                for density in [0.1, 1.0, 2.5, 6.0] {
                    let policy = Discretization::new(kind, n, 1, density).unwrap();
                    let b = compute_boundaries(top, bottom, &policy);
                    assert_eq!(b[0], top, "{kind} n={n} d={density}");
                    assert_eq!(*b.last().unwrap(), bottom, "{kind} n={n} d={density}");
                }
            }
        }
    }
}

#[test]
fn boundaries_strictly_increase() {
    for kind in DiscretizationKind::ALL {
        for &(top, bottom) in &INTERVALS {
            for n in 1..=12 {
                let policy = Discretization::new(kind, n, 1, 3.0).unwrap();
                let b = compute_boundaries(top, bottom, &policy);
                assert_eq!(b.len(), n + 1, "{kind} n={n}");
                for w in b.windows(2) {
                    assert!(w[0] < w[1], "{kind} n={n}: {b:?}");
                }
            }
        }
    }
}

#[test]
fn log_both_gaps_are_palindromic() {
    for &(top, bottom) in &INTERVALS {
        for n in 1..=16 {
            for density in [0.5, 1.0, 4.0] {
                let policy =
                    Discretization::logarithmic(DiscretizationKind::LogBoth, n, 1, density).unwrap();
                let gaps = sublayer_thicknesses(&compute_boundaries(top, bottom, &policy));
                assert_eq!(gaps.len(), n);
                for i in 0..n {
                    assert_abs_diff_eq!(gaps[i], gaps[n - 1 - i], epsilon = 1e-9);
                }
            }
        }
    }
}

#[test]
fn higher_density_refines_the_top() {
    let coarse = Discretization::logarithmic(DiscretizationKind::LogTop, 10, 1, 0.5).unwrap();
    let fine = Discretization::logarithmic(DiscretizationKind::LogTop, 10, 1, 4.0).unwrap();
    let first_coarse = compute_boundaries(0.0, 100.0, &coarse)[1];
    let first_fine = compute_boundaries(0.0, 100.0, &fine)[1];
    assert!(first_fine < first_coarse);
}

#[test]
fn compartment_heights_scale_to_layer() {
    let policy = Discretization::logarithmic(DiscretizationKind::LogBottom, 5, 2, 2.0).unwrap();
    let heights = policy.compartment_heights();
    let boundaries = compute_boundaries(0.0, 40.0, &policy);
    for (h, gap) in heights.iter().zip(sublayer_thicknesses(&boundaries)) {
        assert_abs_diff_eq!(h * 40.0, gap, epsilon = 1e-9);
    }
}
