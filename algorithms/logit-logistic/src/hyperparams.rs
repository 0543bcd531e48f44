use crate::error::{Error, Result};
use crate::float::Float;
use logit::ParamGuard;
use ndarray::Array1;
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// A verified set of hyperparameters for fitting a binary logistic regression.
///
/// The model combines a linear function of the features with the sigmoid function
/// `sigm(x) = 1/(1+exp(-x))` and minimizes the mean cross-entropy of the training data. No
/// regularization term is added. The minimization is delegated to argmin's L-BFGS solver with
/// a More-Thuente line search, which runs until the gradient norm falls below
/// `gradient_tolerance` or `max_iterations` iterations have been performed.
///
/// ## Examples
///
/// ```rust
/// use logit::traits::{Fit, Predict};
/// use logit::Dataset;
/// use logit_logistic::LogisticRegression;
/// use ndarray::array;
///
/// let dataset = Dataset::new(
///     array![[1., 1.], [2., 2.], [1., 5.], [2., 6.]],
///     array![0., 0., 1., 1.],
/// );
/// let model = LogisticRegression::params().max_iterations(200).fit(&dataset).unwrap();
/// let labels = model.predict(&array![[1., 1.], [2., 6.]]).unwrap();
/// assert_eq!(labels, array![0., 1.]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct LogisticRegressionValidParams<F: Float> {
    pub(crate) max_iterations: u64,
    pub(crate) gradient_tolerance: F,
    pub(crate) history_size: usize,
    pub(crate) initial_params: Option<Array1<F>>,
}

impl<F: Float> LogisticRegressionValidParams<F> {
    pub fn max_iterations(&self) -> u64 {
        self.max_iterations
    }

    pub fn gradient_tolerance(&self) -> F {
        self.gradient_tolerance
    }

    pub fn history_size(&self) -> usize {
        self.history_size
    }

    pub fn initial_params(&self) -> Option<&Array1<F>> {
        self.initial_params.as_ref()
    }
}

/// Unverified hyperparameters, see [`LogisticRegressionValidParams`]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct LogisticRegressionParams<F: Float>(LogisticRegressionValidParams<F>);

/// The trainer of the model, fitted with [`logit::traits::Fit`]
pub type LogisticRegression<F> = LogisticRegressionParams<F>;

impl<F: Float> Default for LogisticRegressionParams<F> {
    fn default() -> LogisticRegressionParams<F> {
        LogisticRegressionParams::new()
    }
}

impl<F: Float> LogisticRegressionParams<F> {
    /// Creates a new LogisticRegression with default configuration.
    pub fn new() -> LogisticRegressionParams<F> {
        Self(LogisticRegressionValidParams {
            max_iterations: 100,
            gradient_tolerance: F::cast(1e-4),
            history_size: 10,
            initial_params: None,
        })
    }

    /// Same as [`LogisticRegressionParams::new`]
    pub fn params() -> LogisticRegressionParams<F> {
        Self::new()
    }

    /// Configure the maximum number of iterations that the solver should perform,
    /// defaults to `100`.
    pub fn max_iterations(mut self, max_iterations: u64) -> Self {
        self.0.max_iterations = max_iterations;
        self
    }

    /// Configure the minimum change to the gradient to continue the solver,
    /// defaults to `1e-4`.
    pub fn gradient_tolerance(mut self, gradient_tolerance: F) -> Self {
        self.0.gradient_tolerance = gradient_tolerance;
        self
    }

    /// Number of past updates kept by L-BFGS to approximate the inverse Hessian,
    /// defaults to `10`.
    pub fn history_size(mut self, history_size: usize) -> Self {
        self.0.history_size = history_size;
        self
    }

    /// Configure the initial parameters from where the optimization starts, defaults to all
    /// zeros. The first entry is the intercept, the remaining entries the coefficients of the
    /// features, so `params` must be one element longer than the number of columns of the
    /// feature matrix passed to the `fit` method.
    pub fn initial_params(mut self, params: Array1<F>) -> Self {
        self.0.initial_params = Some(params);
        self
    }
}

impl<F: Float> ParamGuard for LogisticRegressionParams<F> {
    type Checked = LogisticRegressionValidParams<F>;
    type Error = Error;

    fn check_ref(&self) -> Result<&Self::Checked> {
        if !self.0.gradient_tolerance.is_finite() || self.0.gradient_tolerance <= F::zero() {
            return Err(Error::InvalidGradientTolerance);
        }
        if self.0.max_iterations == 0 {
            return Err(Error::InvalidMaxIterations);
        }
        if self.0.history_size == 0 {
            return Err(Error::InvalidHistorySize);
        }
        if let Some(params) = self.0.initial_params.as_ref() {
            if params.iter().any(|p| !p.is_finite()) {
                return Err(Error::InvalidInitialParametersGuess);
            }
        }
        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}
