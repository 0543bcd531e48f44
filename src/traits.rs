//! Provide traits for different classes of algorithms
//!

use crate::dataset::{Dataset, Float};
use crate::param_guard::ParamGuard;
use std::error::Error;

/// Fittable algorithms
///
/// A fittable algorithm takes a dataset and creates a concept of some kind about it. For example
/// in *logistic regression* this would be the coefficient vector separating the two classes.
/// The resulting object is returned by value and does not borrow from the dataset.
pub trait Fit<F: Float, E: Error + From<crate::error::Error>> {
    type Object;

    fn fit(&self, dataset: &Dataset<F>) -> Result<Self::Object, E>;
}

/// Predict with model
///
/// The fitted object owns its parameters and evaluates them on new records of matching width.
pub trait Predict<R, T> {
    fn predict(&self, x: R) -> T;
}

/// Performs checking step and calls `fit` on the checked hyperparameters. If checking failed, the
/// checking error is converted to the original error type of `Fit` and returned.
impl<F, E, P> Fit<F, E> for P
where
    F: Float,
    P: ParamGuard,
    P::Checked: Fit<F, E>,
    E: Error + From<crate::error::Error> + From<P::Error>,
{
    type Object = <P::Checked as Fit<F, E>>::Object;

    fn fit(&self, dataset: &Dataset<F>) -> Result<Self::Object, E> {
        let checked = self.check_ref()?;
        checked.fit(dataset)
    }
}
