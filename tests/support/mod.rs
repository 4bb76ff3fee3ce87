//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use epicyclic::{Spinner, SpinnerSet, float_types::Real};
use nalgebra::Point2;
use rand::Rng;
use rand_pcg::Pcg64;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Same as [`approx_eq`] for points.
pub fn points_close(a: Point2<Real>, b: Point2<Real>, eps: Real) -> bool {
    (a - b).norm() < eps
}

/// A spinner set with parameters drawn from the ranges players can reach.
pub fn random_set(rng: &mut Pcg64, spinners: usize) -> SpinnerSet {
    (0..spinners)
        .map(|_| {
            Spinner::new(
                rng.gen_range(0.0..1.0),
                rng.gen_range(-5..=5),
                rng.gen_range(-10.0..10.0),
            )
        })
        .collect()
}
