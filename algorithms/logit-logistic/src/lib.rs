//! # Logistic Regression
//!
//! ## The Big Picture
//!
//! `logit-logistic` is the algorithm crate of the `logit` workspace. It fits a two class
//! logistic regression model by minimizing the mean cross-entropy of the training data with
//! argmin's L-BFGS solver.
//!
//! ## Current state
//! The crate provides
//!
//! * the logistic link function [`sigmoid`](link/fn.sigmoid.html),
//! * the [`cost`](loss/fn.cost.html) and its analytic [`gradient`](loss/fn.gradient.html),
//! * the trainer [`LogisticRegression`](type.LogisticRegression.html), fitted through
//!   `logit::traits::Fit`,
//! * the [fitted model](struct.FittedLogisticRegression.html) which predicts probabilities and
//!   labels and evaluates the decision boundary on a grid.
//!
//! The coefficient vector always stores the intercept at index `0`. Rows with missing values
//! (`NaN`) are removed before fitting and before predicting.
//!
//! ## Examples
//!
//! There is an usage example in the `examples/` directory. To run, use:
//!
//! ```bash
//! $ cargo run --example two_curves
//! ```
//!

pub mod error;

use crate::error::{Error, Result};
use argmin::core::{Executor, State, TerminationReason, TerminationStatus};
use argmin::solver::linesearch::condition::ArmijoCondition;
use argmin::solver::linesearch::BacktrackingLineSearch;
use argmin::solver::quasinewton::LBFGS;
use log::{debug, warn};
use logit::dataset::{add_bias_column, drop_missing_rows, Dataset};
use logit::traits::{Fit, Predict};
use ndarray::{s, Array, Array1, ArrayBase, ArrayView1, Data, Dimension, Ix1, Ix2};
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};
use std::convert::TryFrom;

mod argmin_param;
mod boundary;
mod float;
mod hyperparams;
pub mod link;
pub mod loss;
mod problem;

use argmin_param::ArgminParam;
pub use boundary::DecisionGrid;
pub use float::Float;
pub use hyperparams::{LogisticRegression, LogisticRegressionParams, LogisticRegressionValidParams};
pub use link::sigmoid;
pub use loss::{cost, gradient};
use problem::{LBFGSType, LogisticRegressionProblem};

/// Sufficient decrease parameter of the Armijo condition
const ARMIJO_C: f64 = 1e-4;
/// Factor by which a rejected step is shrunk
const BACKTRACKING_RHO: f64 = 0.5;

impl<F: Float> LogisticRegressionValidParams<F> {
    /// Create the initial parameters, either from a user supplied guess
    /// or a 1-d array of `0`s with room for the intercept.
    fn setup_init_params(&self, n_features: usize) -> Array1<F> {
        match self.initial_params.as_ref() {
            Some(params) => params.clone(),
            None => Array1::zeros(n_features + 1),
        }
    }

    /// Ensure that the cleaned `x` and `y` are usable: at least one sample, only finite values,
    /// binary targets and an initial guess of the right size.
    fn validate_data<A: Data<Elem = F>, B: Data<Elem = F>>(
        &self,
        x: &ArrayBase<A, Ix2>,
        y: &ArrayBase<B, Ix1>,
    ) -> Result<()> {
        if x.nrows() == 0 {
            return Err(logit::Error::EmptyInput.into());
        }
        if x.iter().any(|x| !x.is_finite()) || y.iter().any(|y| !y.is_finite()) {
            return Err(Error::InvalidValues);
        }
        if y
            .iter()
            .any(|&y| y != F::POSITIVE_LABEL && y != F::NEGATIVE_LABEL)
        {
            return Err(logit::Error::InvalidTargets.into());
        }
        if let Some(params) = self.initial_params.as_ref() {
            if params.len() != x.ncols() + 1 {
                return Err(Error::InvalidInitialParametersGuessSize);
            }
        }
        Ok(())
    }

    /// Create the LBFGS solver using a backtracking line search and set gradient
    /// tolerance.
    ///
    /// Every line search starts with a unit step and halves it until the cost decreases
    /// sufficiently. On unscaled or separable data the unit step can saturate the sigmoid of a
    /// misclassified sample, the resulting infinite cost rejects the step instead of aborting.
    fn setup_solver(&self) -> Result<LBFGSType<F>> {
        let condition = ArmijoCondition::new(F::cast(ARMIJO_C))?;
        let linesearch = BacktrackingLineSearch::new(condition).rho(F::cast(BACKTRACKING_RHO))?;
        Ok(LBFGS::new(linesearch, self.history_size).with_tolerance_grad(self.gradient_tolerance)?)
    }

    /// Run the LBFGS solver until it converges or runs out of iterations and return the best
    /// parameter vector it has seen.
    fn run_solver(
        &self,
        problem: LogisticRegressionProblem<'_, F>,
        solver: LBFGSType<F>,
        init_params: ArgminParam<F>,
    ) -> Result<Array1<F>> {
        let mut result = Executor::new(problem, solver)
            .configure(|state| state.param(init_params).max_iters(self.max_iterations))
            .run()?;

        let state = &result.state;
        debug!(
            "solver stopped after {} iterations with cost {}",
            state.get_iter(),
            state.get_best_cost()
        );
        if let TerminationStatus::Terminated(TerminationReason::MaxItersReached) =
            state.get_termination_status()
        {
            warn!(
                "reached the maximum of {} iterations before the gradient fell below {}",
                self.max_iterations, self.gradient_tolerance
            );
        }

        result
            .state
            .take_best_param()
            .map(ArgminParam::into_array)
            .ok_or(Error::MissingSolution)
    }
}

impl<F: Float> Fit<F, Error> for LogisticRegressionValidParams<F> {
    type Object = FittedLogisticRegression<F>;

    /// Given a dataset with a 2-dimensional feature matrix of shape
    /// (n_samples, n_features) and binary targets, create a
    /// `FittedLogisticRegression` object which allows making predictions.
    ///
    /// The targets must be `0` or `1` and there must be exactly as many
    /// targets as there are rows in the feature matrix. Samples with a
    /// missing (`NaN`) feature or target are removed before fitting.
    ///
    /// This method returns an error if any of the preconditions are violated,
    /// i.e. no samples are left after removing missing values, any remaining
    /// value is infinite, the targets are not binary or the initial guess
    /// does not have `n_features + 1` entries. Failures of the solver are
    /// passed through unchanged.
    fn fit(&self, dataset: &Dataset<F>) -> Result<Self::Object> {
        let clean = dataset.drop_missing()?;
        if clean.nsamples() < dataset.nsamples() {
            debug!(
                "removed {} of {} samples with missing values",
                dataset.nsamples() - clean.nsamples(),
                dataset.nsamples()
            );
        }

        let (x, y) = (clean.records(), clean.targets());
        self.validate_data(x, y)?;
        debug!(
            "fitting logistic regression on {} samples with {} features",
            x.nrows(),
            x.ncols()
        );

        let design = add_bias_column(x);
        let problem = LogisticRegressionProblem {
            x: design.view(),
            target: y.view(),
        };
        let solver = self.setup_solver()?;
        let init_params = self.setup_init_params(x.ncols());
        let coefficients = self.run_solver(problem, solver, ArgminParam(init_params))?;

        Ok(FittedLogisticRegression { coefficients })
    }
}

/// Predict the probability of the positive class for every complete row of `x`
///
/// Rows with a missing value are removed, the remaining rows are extended by the bias column and
/// multiplied with `theta`, whose first entry is the intercept. `x` must therefore have exactly
/// `theta.len() - 1` columns.
pub fn predict_probabilities<F, A, D>(
    theta: &ArrayBase<A, Ix1>,
    x: &ArrayBase<D, Ix2>,
) -> Result<Array1<F>>
where
    F: Float,
    A: Data<Elem = F>,
    D: Data<Elem = F>,
{
    if x.ncols() + 1 != theta.len() {
        return Err(logit::Error::DimensionMismatch {
            what: "number of features",
            expected: theta.len().saturating_sub(1),
            found: x.ncols(),
        }
        .into());
    }

    let design = add_bias_column(&drop_missing_rows(x));
    let mut probs = design.dot(theta);
    link::sigmoid_inplace(&mut probs);
    Ok(probs)
}

/// Turn probabilities into `0`/`1` labels by rounding to the nearest integer
///
/// A probability of exactly `0.5` is rounded away from zero and becomes `1`.
pub fn predict_labels<F: Float, A: Data<Elem = F>, D: Dimension>(
    probabilities: &ArrayBase<A, D>,
) -> Array<F, D> {
    probabilities.mapv(num_traits::Float::round)
}

/// A fitted logistic regression which can make predictions
///
/// With the `serde` feature the model is stored as its coefficient vector. Deserialization goes
/// through [`from_coefficients`](FittedLogisticRegression::from_coefficients) and rejects the
/// same vectors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        crate = "serde_crate",
        try_from = "Array1<F>",
        into = "Array1<F>"
    )
)]
pub struct FittedLogisticRegression<F: Float> {
    coefficients: Array1<F>,
}

impl<F: Float> TryFrom<Array1<F>> for FittedLogisticRegression<F> {
    type Error = Error;

    fn try_from(coefficients: Array1<F>) -> Result<Self> {
        FittedLogisticRegression::from_coefficients(coefficients)
    }
}

impl<F: Float> From<FittedLogisticRegression<F>> for Array1<F> {
    fn from(model: FittedLogisticRegression<F>) -> Self {
        model.coefficients
    }
}

impl<F: Float> FittedLogisticRegression<F> {
    /// Wrap an existing coefficient vector, intercept first
    pub fn from_coefficients(coefficients: Array1<F>) -> Result<FittedLogisticRegression<F>> {
        if coefficients.is_empty() {
            return Err(logit::Error::Parameters(
                "the coefficient vector needs at least the intercept".to_string(),
            )
            .into());
        }
        if coefficients.iter().any(|c| !c.is_finite()) {
            return Err(Error::InvalidValues);
        }
        Ok(FittedLogisticRegression { coefficients })
    }

    /// The complete coefficient vector `θ`, index `0` is the intercept
    pub fn coefficients(&self) -> &Array1<F> {
        &self.coefficients
    }

    pub fn intercept(&self) -> F {
        self.coefficients[0]
    }

    /// The coefficients of the features, without the intercept
    pub fn params(&self) -> ArrayView1<'_, F> {
        self.coefficients.slice(s![1..])
    }

    /// Number of features the model was trained with
    pub fn nfeatures(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Given a feature matrix, predict the probabilities that a sample
    /// belongs to the positive class `1`. Rows with missing values are skipped.
    pub fn predict_probabilities<A: Data<Elem = F>>(
        &self,
        x: &ArrayBase<A, Ix2>,
    ) -> Result<Array1<F>> {
        predict_probabilities(&self.coefficients, x)
    }
}

impl<'a, F: Float, D: Data<Elem = F>> Predict<&'a ArrayBase<D, Ix2>, Result<Array1<F>>>
    for FittedLogisticRegression<F>
{
    /// Given a feature matrix, predict the `0`/`1` label of every row without
    /// missing values.
    fn predict(&self, x: &'a ArrayBase<D, Ix2>) -> Result<Array1<F>> {
        let probs = self.predict_probabilities(x)?;
        Ok(predict_labels(&probs))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::{assert_abs_diff_eq, AbsDiffEq};
    use logit::metrics::ToConfusionMatrix;
    use logit::ParamGuard;
    use ndarray::{array, Array2};
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256Plus;

    fn noisy_ten_samples() -> Dataset<f64> {
        let x = Array2::from_shape_fn((10, 1), |(i, _)| i as f64);
        let y = array![0., 0., 0., 1., 0., 1., 0., 1., 1., 1.];
        Dataset::new(x, y)
    }

    #[test]
    fn simple_example_1() {
        let log_reg = LogisticRegression::default();
        let x = array![[-1.0], [-0.01], [0.01], [1.0]];
        let y = array![0., 0., 1., 1.];
        let dataset = Dataset::new(x, y);
        let res = log_reg.fit(&dataset).unwrap();
        assert!(res.params()[0] > 0.0);
        assert_eq!(&res.predict(dataset.records()).unwrap(), dataset.targets());
    }

    #[test]
    fn separable_points_are_recovered() {
        let dataset = Dataset::new(
            array![[1., 1.], [2., 2.], [1., 5.], [2., 6.]],
            array![0., 0., 1., 1.],
        );
        let model = LogisticRegression::default().fit(&dataset).unwrap();

        let probs = model
            .predict_probabilities(&array![[1., 1.], [2., 6.]])
            .unwrap();
        assert_eq!(predict_labels(&probs), array![0., 1.]);
    }

    #[test]
    fn line_boundary_gives_full_training_accuracy() {
        let mut rng = Xoshiro256Plus::seed_from_u64(42);
        let dataset = logit_datasets::generate::separable_line(100, 0.5, &mut rng);

        let model = LogisticRegression::params()
            .max_iterations(500)
            .fit(&dataset)
            .unwrap();
        let cm = model
            .predict(dataset.records())
            .unwrap()
            .confusion_matrix(&dataset)
            .unwrap();
        assert_abs_diff_eq!(cm.accuracy(), 1.0);
    }

    #[test]
    fn separable_points_on_a_large_scale() {
        // a unit step along the first gradient saturates the sigmoid here
        let dataset = Dataset::new(
            array![[10., 10.], [20., 20.], [10., 50.], [20., 60.]],
            array![0., 0., 1., 1.],
        );
        let model = LogisticRegression::default().fit(&dataset).unwrap();

        assert!(model.coefficients().iter().all(|c: &f64| c.is_finite()));
        let probs = model
            .predict_probabilities(&array![[10., 10.], [20., 60.]])
            .unwrap();
        assert_eq!(predict_labels(&probs), array![0., 1.]);
    }

    #[test]
    fn line_boundary_without_margin() {
        let mut rng = Xoshiro256Plus::seed_from_u64(17);
        let dataset = logit_datasets::generate::separable_line(100, 0.0, &mut rng);

        let model = LogisticRegression::params()
            .max_iterations(1000)
            .gradient_tolerance(1e-6)
            .fit(&dataset)
            .unwrap();
        let cm = model
            .predict(dataset.records())
            .unwrap()
            .confusion_matrix(&dataset)
            .unwrap();
        assert_abs_diff_eq!(cm.accuracy(), 1.0);
    }

    #[test]
    fn fits_unscaled_exams_with_missing_values() {
        let dataset = logit_datasets::exams().unwrap();
        let model = LogisticRegression::params()
            .max_iterations(1000)
            .fit(&dataset)
            .unwrap();

        let clean = dataset.drop_missing().unwrap();
        let cm = model
            .predict(clean.records())
            .unwrap()
            .confusion_matrix(&clean)
            .unwrap();
        assert!(cm.accuracy() > 0.8, "accuracy {}", cm.accuracy());
        assert!(model.params().iter().all(|&c| c > 0.0));
    }

    #[test]
    fn fitting_is_deterministic() {
        let dataset = noisy_ten_samples();
        let first = LogisticRegression::default().fit(&dataset).unwrap();
        let second = LogisticRegression::default().fit(&dataset).unwrap();
        assert_abs_diff_eq!(first.coefficients(), second.coefficients(), epsilon = 1e-12);
    }

    #[test]
    fn converges_to_a_stationary_point() {
        let dataset = noisy_ten_samples();
        let model = LogisticRegression::params()
            .gradient_tolerance(1e-8)
            .fit(&dataset)
            .unwrap();

        let design = add_bias_column(dataset.records());
        let grad = gradient(model.coefficients(), &design, dataset.targets()).unwrap();
        assert!(grad.iter().all(|g| g.abs() < 1e-4), "gradient {}", grad);

        let fitted = cost(model.coefficients(), &design, dataset.targets()).unwrap();
        let start = cost(&array![0., 0.], &design, dataset.targets()).unwrap();
        assert!(fitted < start);
        assert!(model.params()[0] > 0.0);
        assert!(model.intercept() < 0.0);
    }

    #[test]
    fn probabilities_use_the_bias_augmented_design() {
        let model = FittedLogisticRegression::from_coefficients(array![-0.3, 1.2, -0.7]).unwrap();
        let x = array![[0.5, 1.0], [-2.0, 3.0], [4.0, -1.0]];

        let direct = add_bias_column(&x)
            .dot(model.coefficients())
            .mapv(sigmoid);
        assert_eq!(model.predict_probabilities(&x).unwrap(), direct);
        assert_eq!(predict_probabilities(model.coefficients(), &x).unwrap(), direct);
    }

    #[test]
    fn labels_are_rounded_probabilities() {
        assert_eq!(
            predict_labels(&array![0.0, 0.2, 0.49, 0.5, 0.51, 1.0]),
            array![0.0, 0.0, 0.0, 1.0, 1.0, 1.0]
        );
        assert_eq!(
            predict_labels(&array![[0.5f32], [0.0]]),
            array![[1.0f32], [0.0]]
        );
    }

    #[test]
    fn missing_rows_are_ignored_when_fitting() {
        let clean = noisy_ten_samples();
        let mut records = Array2::from_elem((12, 1), 3.0);
        records.slice_mut(s![..10, ..]).assign(clean.records());
        records[(10, 0)] = f64::NAN;
        let mut targets = Array1::from_elem(12, 1.0);
        targets.slice_mut(s![..10]).assign(clean.targets());
        targets[11] = f64::NAN;
        let with_missing = Dataset::new(records, targets);

        let expected = LogisticRegression::default().fit(&clean).unwrap();
        let actual = LogisticRegression::default().fit(&with_missing).unwrap();
        assert_abs_diff_eq!(actual.coefficients(), expected.coefficients(), epsilon = 1e-12);
    }

    #[test]
    fn missing_rows_are_skipped_when_predicting() {
        let model = FittedLogisticRegression::from_coefficients(array![0.0, 1.0]).unwrap();
        let probs = model
            .predict_probabilities(&array![[0.0], [f64::NAN], [100.0]])
            .unwrap();
        assert_abs_diff_eq!(probs, array![0.5, 1.0], epsilon = 1e-12);
    }

    #[test]
    fn rejects_mismatching_x_y() {
        let log_reg = LogisticRegression::default();
        let x = array![[-1.0], [-0.01], [0.01]];
        let y = array![0., 0., 1., 1.];
        let res = log_reg.fit(&Dataset::new(x, y));
        assert_eq!(
            res.unwrap_err().to_string(),
            "dimension mismatch in number of targets: expected 3, found 4".to_string()
        );
    }

    #[test]
    fn rejects_empty_input() {
        let x = array![[f64::NAN], [1.0]];
        let y = array![0., f64::NAN];
        let res = LogisticRegression::default().fit(&Dataset::new(x, y));
        assert!(matches!(
            res.unwrap_err(),
            Error::BaseCrate(logit::Error::EmptyInput)
        ));
    }

    #[test]
    fn rejects_inf_values() {
        let infs = vec![f64::INFINITY, f64::NEG_INFINITY];
        let y = array![0., 1.];
        let expected = "Values must be finite and not `Inf`, `-Inf` or `NaN`".to_string();
        for inf in &infs {
            let x = array![[1.0], [*inf]];
            let res = LogisticRegression::default().fit(&Dataset::new(x, y.clone()));
            assert_eq!(res.unwrap_err().to_string(), expected);
        }
    }

    #[test]
    fn rejects_non_binary_targets() {
        let dataset = Dataset::new(array![[1.0], [2.0]], array![0., 2.]);
        let res = LogisticRegression::default().fit(&dataset);
        assert_eq!(
            res.unwrap_err().to_string(),
            "targets must be either 0 or 1".to_string()
        );
    }

    #[test]
    fn rejects_invalid_hyperparameters() {
        let dataset = noisy_ten_samples();
        for tol in &[f64::INFINITY, f64::NAN, -1.0, 0.0] {
            let res = LogisticRegression::params()
                .gradient_tolerance(*tol)
                .fit(&dataset);
            assert_eq!(
                res.unwrap_err().to_string(),
                "gradient_tolerance must be a positive, finite number"
            );
        }
        assert!(matches!(
            LogisticRegression::<f64>::params().max_iterations(0).check(),
            Err(Error::InvalidMaxIterations)
        ));
        assert!(matches!(
            LogisticRegression::<f64>::params().history_size(0).check(),
            Err(Error::InvalidHistorySize)
        ));
    }

    #[test]
    fn validates_initial_params() {
        let dataset = noisy_ten_samples();
        for inf in &[f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let res = LogisticRegression::params()
                .initial_params(array![*inf, 0.0])
                .fit(&dataset);
            assert_eq!(
                res.unwrap_err().to_string(),
                "Initial parameter guess must be finite".to_string()
            );
        }
        let res = LogisticRegression::params()
            .initial_params(array![0.0])
            .fit(&dataset);
        assert!(matches!(
            res.unwrap_err(),
            Error::InvalidInitialParametersGuessSize
        ));
    }

    #[test]
    fn uses_initial_params() {
        let dataset = noisy_ten_samples();
        let reference = LogisticRegression::default().fit(&dataset).unwrap();

        let warm = LogisticRegression::params()
            .initial_params(reference.coefficients().clone())
            .max_iterations(5)
            .fit(&dataset)
            .unwrap();
        assert!(warm
            .coefficients()
            .abs_diff_eq(reference.coefficients(), 1e-2));
    }

    #[test]
    fn rejects_mismatching_prediction_width() {
        let model = FittedLogisticRegression::from_coefficients(array![0.0, 1.0, 1.0]).unwrap();
        let res = model.predict(&array![[1.0, 2.0, 3.0]]);
        assert_eq!(
            res.unwrap_err().to_string(),
            "dimension mismatch in number of features: expected 2, found 3".to_string()
        );
    }

    #[test]
    fn from_coefficients_validates_input() {
        assert!(FittedLogisticRegression::<f64>::from_coefficients(array![]).is_err());
        assert!(matches!(
            FittedLogisticRegression::from_coefficients(array![0.0, f64::NAN]),
            Err(Error::InvalidValues)
        ));
    }

    #[test]
    fn conversion_from_coefficients_is_validated() {
        assert!(FittedLogisticRegression::<f64>::try_from(Array1::zeros(0)).is_err());
        assert!(FittedLogisticRegression::try_from(array![f64::INFINITY]).is_err());

        let model = FittedLogisticRegression::try_from(array![0.5, -1.0]).unwrap();
        assert_eq!(model.nfeatures(), 1);
        assert_eq!(Array1::from(model), array![0.5, -1.0]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialization_rejects_invalid_models() {
        let model = FittedLogisticRegression::from_coefficients(array![-0.3, 1.2]).unwrap();
        let json = serde_json::to_string(&model).unwrap();
        let restored: FittedLogisticRegression<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, model);

        let empty = serde_json::to_string(&Array1::<f64>::zeros(0)).unwrap();
        assert!(serde_json::from_str::<FittedLogisticRegression<f64>>(&empty).is_err());
    }

    #[test]
    fn works_with_f32() {
        let log_reg = LogisticRegression::default();
        let x: Array2<f32> = array![[-1.0], [-0.01], [0.01], [1.0]];
        let y = array![0.0f32, 0., 1., 1.];
        let dataset = Dataset::new(x, y);
        let res = log_reg.fit(&dataset).unwrap();
        assert!(res.params()[0] > 0.0);
        assert_eq!(&res.predict(dataset.records()).unwrap(), dataset.targets());
    }
}
