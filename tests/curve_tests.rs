mod support;

use epicyclic::{
    EpicycleError, SampleTable, Spinner, SpinnerSet, arc_length,
    float_types::Real,
    sampler::{composed_position, composed_velocity},
};
use nalgebra::Point2;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use support::{approx_eq, points_close, random_set};

#[test]
fn unit_circle_counter_clockwise() {
    let set = [Spinner::new(1.0, 1, 0.0)];
    let expected = [
        (0.0, Point2::new(1.0, 0.0)),
        (0.25, Point2::new(0.0, 1.0)),
        (0.5, Point2::new(-1.0, 0.0)),
        (0.75, Point2::new(0.0, -1.0)),
    ];
    for (p, point) in expected {
        assert!(points_close(composed_position(&set, p), point, 1e-9), "proportion {p}");
    }

    let table = SampleTable::sample(&set, 4);
    for (sample, (p, point)) in table.iter().zip(expected) {
        assert_eq!(sample.proportion, p);
        assert!(points_close(sample.position, point, 1e-9));
    }
}

#[test]
fn composed_curves_are_periodic() {
    let mut rng = Pcg64::seed_from_u64(11);
    for n in 0..6 {
        let set = random_set(&mut rng, n);
        for i in 0..20 {
            let p = i as Real / 20.0 + 0.013;
            let a = composed_position(set.as_slice(), p);
            let b = composed_position(set.as_slice(), p + 1.0);
            assert!(points_close(a, b, 1e-9));
            let va = composed_velocity(set.as_slice(), p);
            let vb = composed_velocity(set.as_slice(), p + 1.0);
            assert!((va - vb).norm() < 1e-9);
        }
    }
}

#[test]
fn order_does_not_change_the_curve() {
    let a = Spinner::new(0.5, 2, 0.3);
    let b = Spinner::new(0.25, -3, 1.2);
    let c = Spinner::new(0.1, 0, 2.0);
    let forward = SampleTable::sample(&[a, b, c], 50);
    let backward = SampleTable::sample(&[c, b, a], 50);
    for (x, y) in forward.iter().zip(backward.iter()) {
        assert!(points_close(x.position, y.position, 1e-12));
    }
}

#[test]
fn static_point_is_degenerate_for_timing() {
    let samples = SampleTable::sample(&[Spinner::new(0.5, 0, 0.0)], 100);
    assert!(samples.velocities().iter().all(|v| v.norm() == 0.0));
    match arc_length::timing_table(&samples) {
        Err(EpicycleError::DegenerateCurve { total_length }) => assert_eq!(total_length, 0.0),
        other => panic!("expected DegenerateCurve, got {other:?}"),
    }
}

#[test]
fn timing_is_monotone_for_moving_curves() {
    let mut rng = Pcg64::seed_from_u64(3);
    for n in 1..6 {
        let set = random_set(&mut rng, n);
        if set.is_stationary() {
            continue;
        }
        let table = arc_length::timing_table(&SampleTable::sample(set.as_slice(), 400)).unwrap();
        let lengths = table.lengths();
        assert!(lengths.windows(2).all(|w| w[1] >= w[0]));
        assert!(approx_eq(*lengths.last().unwrap(), 1.0, 1e-12));
    }
}

#[test]
fn window_splits_at_the_seam() {
    // Length 0.05 of the way round with a 10% window.
    let table = arc_length::normalize(&[0.0, 0.05, 0.6, 1.0]).unwrap();
    let w = arc_length::window(&table, 0.1).unwrap();
    assert!(approx_eq(w.start_wrapped[1], 0.95, 1e-12));
    assert_eq!(w.end_wrapped[1], 1.0);
    assert_eq!(w.start_clamped[1], 0.0);
    assert_eq!(w.end_unclamped[1], 0.05);
}

#[test]
fn window_over_a_real_curve() {
    let set = SpinnerSet::starting_attempt();
    let table = arc_length::timing_table(&SampleTable::sample(set.as_slice(), 1000)).unwrap();
    let w = arc_length::window(&table, 0.1).unwrap();
    assert_eq!(w.len(), table.len());
    for i in 0..w.len() {
        let length = w.end_unclamped[i];
        // head and tail together always cover exactly the window (or less at the start)
        let head = w.end_unclamped[i] - w.start_clamped[i];
        let tail = w.end_wrapped[i] - w.start_wrapped[i];
        if length >= 0.1 {
            assert!(!w.is_split(i));
            assert!(approx_eq(head, 0.1, 1e-9));
        } else {
            assert!(w.is_split(i));
            assert!(approx_eq(head + tail, 0.1, 1e-9));
        }
    }
}

#[cfg(feature = "geo-io")]
#[test]
fn sampled_curve_exports_to_geo() {
    let table = SampleTable::sample(&[Spinner::new(1.0, 1, 0.0)], 720);
    let ring = table.to_line_string();
    assert!(ring.is_closed());
    let perimeter: Real = ring.lines().map(|l| l.dx().hypot(l.dy())).sum();
    assert!(approx_eq(perimeter, epicyclic::float_types::TAU, 1e-3));
}
