//! `logit-datasets` provides the data used in the tests, benchmarks and examples of the `logit` crates.
//!
//! ## The Big Picture
//!
//! `logit-datasets` is a crate of the `logit` workspace. Its datasets are returned as
//! [`logit::Dataset`] with binary `0`/`1` targets, missing values are encoded as `NaN`.
//!
//! ## Current State
//!
//! The following data is provided:
//!
//! * [`generate::two_curves`]: two noisy sine shaped point clouds, one per class
//! * [`generate::separable_line`]: points on either side of the line `x2 = x1 + 1`
//! * `["exams"]` : two exam scores and the admission decision, with a few missing entries
//!
//! together with CSV loaders which read plain or gzipped tables.
//!
//! ## Using a dataset
//!
//! Bundled datasets are enabled with the corresponding feature:
//! ```ignore
//! logit-datasets = { version = "0.1.0", features = ["exams"] }
//! ```
//! and then used in an example or test as
//! ```ignore
//! let (train, valid) = logit_datasets::exams()?
//!     .drop_missing()?
//!     .split_with_ratio(0.8);
//! ```

mod dataset;
pub mod generate;

pub use dataset::{
    array_from_csv, array_from_gz_csv, dataset_from_csv, dataset_from_gz_csv, ReadError,
};

#[cfg(feature = "exams")]
/// Read in the exams dataset
///
/// 100 applicants with the scores of two exams and whether they were admitted. Five rows
/// contain a missing value.
pub fn exams() -> Result<logit::Dataset<f64>, ReadError> {
    let data = include_bytes!("../data/exams.csv.gz");
    dataset_from_gz_csv(&data[..], true, b',')
}
