//! Utility functions for randomly generating datasets

use std::f64::consts::PI;

use logit::Dataset;
use ndarray::{Array1, Array2, Zip};
use ndarray_rand::{
    rand::Rng,
    rand_distr::{StandardNormal, Uniform},
    RandomExt,
};

/// Generate two point clouds which follow the sine curve `x2 = sin(x1)` shifted down and up by
/// `gap`.
///
/// The first `n_per_class` samples belong to the lower curve and carry the label `0`, the
/// remaining `n_per_class` samples belong to the upper curve and carry the label `1`. `x1` is
/// drawn uniformly from `[0, 2π)` and `x2` is jittered by normal noise with standard deviation
/// `noise`. For `gap > 1` and no noise both classes are separated by the line `x2 = 0`.
pub fn two_curves(n_per_class: usize, gap: f64, noise: f64, rng: &mut impl Rng) -> Dataset<f64> {
    let n = 2 * n_per_class;
    let x1: Array1<f64> = Array1::random_using(n, Uniform::new(0., 2. * PI), rng);
    let jitter: Array1<f64> = Array1::random_using(n, StandardNormal, rng);
    let targets = Array1::from_shape_fn(n, |i| if i < n_per_class { 0. } else { 1. });

    let mut records = Array2::zeros((n, 2));
    Zip::from(records.rows_mut())
        .and(&x1)
        .and(&jitter)
        .and(&targets)
        .for_each(|mut row, &x1, &jitter, &target| {
            let offset = if target > 0. { gap } else { -gap };
            row[0] = x1;
            row[1] = x1.sin() + offset + noise * jitter;
        });

    Dataset::new(records, targets).with_feature_names(vec!["x1", "x2"])
}

/// Generate `n` points on either side of the line `x2 = x1 + 1`.
///
/// `x1` is drawn uniformly from `[-5, 5)`, each point is then placed above or below the line at
/// a vertical distance drawn uniformly from `[margin, margin + 3)`. A point is labelled `1` iff
/// `x2 > x1 + 1`, so the classes are linearly separable.
///
/// # Panics
///
/// If `margin` is not finite.
pub fn separable_line(n: usize, margin: f64, rng: &mut impl Rng) -> Dataset<f64> {
    let mut records = Array2::zeros((n, 2));
    let mut targets = Array1::zeros(n);

    for (mut row, target) in records.rows_mut().into_iter().zip(targets.iter_mut()) {
        let x1 = rng.gen_range(-5.0..5.0);
        let distance = rng.gen_range(margin..margin + 3.0);
        let x2 = if rng.gen_bool(0.5) {
            x1 + 1. + distance
        } else {
            x1 + 1. - distance
        };

        row[0] = x1;
        row[1] = x2;
        *target = if x2 > x1 + 1. { 1. } else { 0. };
    }

    Dataset::new(records, targets).with_feature_names(vec!["x1", "x2"])
}
