use std::f64::consts::{FRAC_PI_2, PI};

use crate::stats::{
    circular_mean, circular_variance, mean_resultant_length, rayleigh_test, CircularSummary,
};

#[test]
fn empty_samples() {
    assert_eq!(circular_mean(&[]), None);
    assert_eq!(circular_variance(&[]), None);
    assert_eq!(rayleigh_test(&[]), None);
    assert_eq!(CircularSummary::from_samples(&[]), None);
}

#[test]
fn mean_of_symmetric_angles() {
    let mean = circular_mean(&[0.1, -0.1, 0.3, -0.3]).unwrap();
    assert!(mean.abs() < 1e-12);
}

#[test]
fn mean_across_branch_cut() {
    // arithmetic mean would be 0, the circular mean is pi
    let mean = circular_mean(&[PI - 0.1, -PI + 0.1]).unwrap();
    assert!((mean.abs() - PI).abs() < 1e-9, "mean {mean}");
}

#[test]
fn variance_extremes() {
    let same = circular_variance(&[0.7; 10]).unwrap();
    assert!(same.abs() < 1e-12);

    let spread = circular_variance(&[0.0, FRAC_PI_2, PI, -FRAC_PI_2]).unwrap();
    assert!((spread - 1.0).abs() < 1e-12);
}

#[test]
fn resultant_length_of_pair() {
    // two unit vectors at right angles
    let r = mean_resultant_length(&[0.0, FRAC_PI_2]).unwrap();
    assert!((r - 0.5f64.sqrt()).abs() < 1e-12);
}

#[test]
fn rayleigh_detects_concentration() {
    let samples = [0.0; 10];
    let test = rayleigh_test(&samples).unwrap();
    assert!((test.statistic - 10.0).abs() < 1e-9);
    assert!(test.rejects_uniformity(0.01), "{test:?}");
}

#[test]
fn rayleigh_accepts_balanced_angles() {
    let samples: Vec<f64> = (0..36).map(|i| -PI + (i as f64 + 0.5) * PI / 18.0).collect();
    let test = rayleigh_test(&samples).unwrap();
    assert!(test.statistic < 1e-9);
    assert!((test.p_value - 1.0).abs() < 1e-6);
    assert!(!test.rejects_uniformity(0.05));
}

#[test]
fn summary_fields_agree() {
    let samples = [0.2, 0.4, 0.1, 0.3];
    let summary = CircularSummary::from_samples(&samples).unwrap();

    assert_eq!(summary.count, 4);
    assert_eq!(summary.mean, circular_mean(&samples).unwrap());
    assert_eq!(summary.variance, circular_variance(&samples).unwrap());
    assert_eq!(summary.rayleigh, rayleigh_test(&samples).unwrap());
}
