//! `logit` is a small toolkit for fitting binary logistic regression models in Rust.
//!
//! The crate is split the same way the model is used:
//!
//! * this core crate holds the [`Dataset`](dataset::Dataset) container, the shared
//!   [`Float`] bound, the error type, hyperparameter checking and binary classification
//!   metrics,
//! * [`logit-logistic`](../logit_logistic/index.html) implements the sigmoid link, the
//!   cross-entropy cost and its gradient, training with L-BFGS and prediction,
//! * [`logit-datasets`](../logit_datasets/index.html) generates and loads example data.
//!
//! Missing values are represented as `NaN`. Rows containing them are removed before
//! fitting or predicting, see [`dataset::drop_missing_rows`].

pub mod dataset;
pub mod error;
mod metrics_classification;
mod param_guard;
pub mod prelude;
pub mod traits;

pub use dataset::{Dataset, Float};
pub use error::Error;
pub use param_guard::ParamGuard;

#[cfg(feature = "benchmarks")]
pub mod benchmarks;

/// Common metrics functions for binary classification
pub mod metrics {
    pub use crate::metrics_classification::{ConfusionMatrix, ToConfusionMatrix};
}
