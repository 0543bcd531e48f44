//! Evaluation of the decision boundary of a two feature model

use crate::error::{Error, Result};
use crate::float::Float;
use crate::{predict_labels, FittedLogisticRegression};
use ndarray::{Array1, Array2, Zip};

/// Predicted probabilities on a regular grid over the plane of two features
///
/// The grid has `resolution` points along both axes. Entry `(i, j)` of
/// [`probabilities`](DecisionGrid::probabilities) belongs to the point
/// `(x1[j], x2[i])`, so rows walk along the second feature and columns along the first one.
/// The decision boundary is the level set where the probability equals `0.5`.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionGrid<F> {
    x1: Array1<F>,
    x2: Array1<F>,
    probabilities: Array2<F>,
}

impl<F: Float> DecisionGrid<F> {
    /// Grid coordinates along the first feature
    pub fn x1(&self) -> &Array1<F> {
        &self.x1
    }

    /// Grid coordinates along the second feature
    pub fn x2(&self) -> &Array1<F> {
        &self.x2
    }

    pub fn probabilities(&self) -> &Array2<F> {
        &self.probabilities
    }

    /// Predicted `0`/`1` labels, in the layout of the probabilities
    pub fn labels(&self) -> Array2<F> {
        predict_labels(&self.probabilities)
    }

    /// All grid points as a feature matrix of shape `(resolution², 2)`, in the row major order
    /// of the probabilities
    pub fn points(&self) -> Array2<F> {
        grid_points(&self.x1, &self.x2)
    }
}

fn grid_points<F: Float>(x1: &Array1<F>, x2: &Array1<F>) -> Array2<F> {
    let n1 = x1.len();
    Array2::from_shape_fn((x1.len() * x2.len(), 2), |(idx, col)| {
        if col == 0 {
            x1[idx % n1]
        } else {
            x2[idx / n1]
        }
    })
}

impl<F: Float> FittedLogisticRegression<F> {
    /// Evaluate the model on a `resolution × resolution` grid spanning `x1_range` and `x2_range`
    ///
    /// Both ends of a range are part of the grid. Fails if the model was not trained on exactly
    /// two features, if a bound is not finite or if `resolution < 2`.
    pub fn decision_grid(
        &self,
        x1_range: (F, F),
        x2_range: (F, F),
        resolution: usize,
    ) -> Result<DecisionGrid<F>> {
        if self.nfeatures() != 2 {
            return Err(logit::Error::DimensionMismatch {
                what: "number of features",
                expected: 2,
                found: self.nfeatures(),
            }
            .into());
        }
        if resolution < 2 {
            return Err(logit::Error::Parameters(format!(
                "resolution of the decision grid must be at least 2, got {}",
                resolution
            ))
            .into());
        }
        let bounds = [x1_range.0, x1_range.1, x2_range.0, x2_range.1];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(Error::InvalidValues);
        }

        let x1 = Array1::linspace(x1_range.0, x1_range.1, resolution);
        let x2 = Array1::linspace(x2_range.0, x2_range.1, resolution);
        let probabilities = self
            .predict_probabilities(&grid_points(&x1, &x2))?
            .into_shape((resolution, resolution))
            .map_err(logit::Error::from)?;

        Ok(DecisionGrid {
            x1,
            x2,
            probabilities,
        })
    }

    /// Second feature of the decision boundary at the given values of the first feature
    ///
    /// For a two feature model the boundary is the line `θ0 + θ1·x1 + θ2·x2 = 0`. Returns `None`
    /// if the model has a different number of features or if `θ2 = 0`, in which case the
    /// boundary is vertical or does not exist.
    pub fn decision_boundary(&self, x1: &Array1<F>) -> Option<Array1<F>> {
        if self.nfeatures() != 2 {
            return None;
        }
        let theta = self.coefficients();
        if theta[2] == F::zero() {
            return None;
        }

        let mut x2 = Array1::zeros(x1.len());
        Zip::from(&mut x2)
            .and(x1)
            .for_each(|x2, &x1| *x2 = -(theta[0] + theta[1] * x1) / theta[2]);
        Some(x2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    fn diagonal_model() -> FittedLogisticRegression<f64> {
        // p = 0.5 on the line x2 = x1 + 1
        FittedLogisticRegression::from_coefficients(array![-2.0, -2.0, 2.0]).unwrap()
    }

    #[test]
    fn grid_shape_and_layout() {
        let grid = diagonal_model()
            .decision_grid((0., 4.), (-1., 1.), 5)
            .unwrap();

        assert_eq!(grid.probabilities().dim(), (5, 5));
        assert_eq!(grid.labels().dim(), (5, 5));
        assert_eq!(grid.points().dim(), (25, 2));
        assert_abs_diff_eq!(grid.x1(), &array![0., 1., 2., 3., 4.]);
        assert_abs_diff_eq!(grid.x2(), &array![-1., -0.5, 0., 0.5, 1.]);

        let points = grid.points();
        assert_abs_diff_eq!(points.row(7), array![2., -0.5]);

        let expected = diagonal_model().predict_probabilities(&points).unwrap();
        assert_abs_diff_eq!(grid.probabilities()[(1, 2)], expected[7]);
    }

    #[test]
    fn grid_labels_follow_the_boundary() {
        let grid = diagonal_model()
            .decision_grid((-2., 2.), (-2., 2.), 9)
            .unwrap();
        let labels = grid.labels();

        for (i, &x2) in grid.x2().iter().enumerate() {
            for (j, &x1) in grid.x1().iter().enumerate() {
                let expected = if x2 >= x1 + 1. { 1. } else { 0. };
                assert_eq!(labels[(i, j)], expected, "at ({}, {})", x1, x2);
            }
        }
    }

    #[test]
    fn boundary_line() {
        let x2 = diagonal_model()
            .decision_boundary(&array![-1., 0., 3.])
            .unwrap();
        assert_abs_diff_eq!(x2, array![0., 1., 4.], epsilon = 1e-12);

        let flat = FittedLogisticRegression::from_coefficients(array![1.0, 1.0, 0.0]).unwrap();
        assert!(flat.decision_boundary(&array![0.]).is_none());
    }

    #[test]
    fn rejects_invalid_grids() {
        let model = diagonal_model();
        assert!(model.decision_grid((0., 1.), (0., 1.), 1).is_err());
        assert!(matches!(
            model.decision_grid((0., f64::INFINITY), (0., 1.), 3),
            Err(Error::InvalidValues)
        ));

        let one_feature = FittedLogisticRegression::from_coefficients(array![0.0, 1.0]).unwrap();
        assert_eq!(
            one_feature
                .decision_grid((0., 1.), (0., 1.), 3)
                .unwrap_err()
                .to_string(),
            "dimension mismatch in number of features: expected 2, found 1"
        );
        assert!(one_feature.decision_boundary(&array![0.]).is_none());
    }
}
