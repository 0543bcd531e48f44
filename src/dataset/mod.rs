//! Datasets
//!
//! This module implements the dataset struct and the two preparation steps every fit and every
//! prediction goes through: removing rows with missing values and prepending the bias column.
use ndarray::{s, Array1, Array2, ArrayBase, Axis, Data, Ix2, ScalarOperand};

use num_traits::{FromPrimitive, NumAssignOps, NumCast, Signed};
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use std::fmt;
use std::iter::Sum;

mod impl_dataset;

/// Floating point numbers
///
/// This trait bound multiplexes to the most common assumption of floating point number and
/// implement them for 32bit and 64bit floating points. They are used in records and targets of a
/// dataset as well as in the fitted coefficients.
pub trait Float:
    FromPrimitive
    + num_traits::Float
    + PartialOrd
    + Sync
    + Send
    + Default
    + fmt::Display
    + fmt::Debug
    + Signed
    + Sum
    + NumAssignOps
    + ScalarOperand
    + approx::AbsDiffEq<Epsilon = Self>
    + 'static
{
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }
}

impl Float for f32 {}
impl Float for f64 {}

/// Dataset
///
/// A feature matrix of shape `(nsamples, nfeatures)` together with one binary target per row.
/// Missing values in either are encoded as `NaN`.
///
/// # Fields
///
/// * `records`: a two-dimensional matrix with dimensionality (nsamples, nfeatures)
/// * `targets`: a one-dimensional array with dimensionality (nsamples), values `0` or `1`
/// * `feature_names`: optional descriptive feature names with dimensionality (nfeatures)
///
/// The constructor does not check that records and targets agree in length, this is verified
/// when the dataset is consumed by an algorithm.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Dataset<F> {
    records: Array2<F>,
    targets: Array1<F>,
    feature_names: Vec<String>,
}

/// Missing values are encoded as `NaN`
fn is_missing<F: Float>(value: &F) -> bool {
    value.is_nan()
}

/// Remove every row which contains at least one missing value.
///
/// The relative order of the remaining rows is preserved.
pub fn drop_missing_rows<F: Float, D: Data<Elem = F>>(x: &ArrayBase<D, Ix2>) -> Array2<F> {
    let keep = x
        .rows()
        .into_iter()
        .enumerate()
        .filter(|(_, row)| !row.iter().any(is_missing))
        .map(|(idx, _)| idx)
        .collect::<Vec<_>>();

    x.select(Axis(0), &keep)
}

/// Prepend a constant column of ones to the records.
///
/// The result is the design matrix with shape `(nsamples, nfeatures + 1)` in which column `0`
/// corresponds to the intercept coefficient.
pub fn add_bias_column<F: Float, D: Data<Elem = F>>(x: &ArrayBase<D, Ix2>) -> Array2<F> {
    let mut design = Array2::ones((x.nrows(), x.ncols() + 1));
    design.slice_mut(s![.., 1..]).assign(x);
    design
}
