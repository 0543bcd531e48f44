//! Common metrics for performance evaluation of binary classifiers
//!
//! Scoring is essential for classification tasks. This module implements a binary confusion
//! matrix for `0`/`1` labels and the scores derived from it: accuracy, precision, recall,
//! f1-score and the Matthews correlation coefficient.
use std::fmt;

use ndarray::prelude::*;
use ndarray::Data;

use crate::dataset::{Dataset, Float};
use crate::error::{Error, Result};

/// Confusion matrix for binary evaluation
///
/// The rows correspond to the predicted class and the columns to the ground truth, with the
/// positive class (`1`) first. The entries are therefore
///
/// ```text
/// | true positives  | false positives |
/// | false negatives | true negatives  |
/// ```
#[derive(Clone, PartialEq)]
pub struct ConfusionMatrix {
    matrix: Array2<usize>,
}

impl ConfusionMatrix {
    pub fn true_positives(&self) -> usize {
        self.matrix[(0, 0)]
    }

    pub fn false_positives(&self) -> usize {
        self.matrix[(0, 1)]
    }

    pub fn false_negatives(&self) -> usize {
        self.matrix[(1, 0)]
    }

    pub fn true_negatives(&self) -> usize {
        self.matrix[(1, 1)]
    }

    /// Total number of evaluated samples
    pub fn nsamples(&self) -> usize {
        self.matrix.sum()
    }

    /// Precision of the positive class
    pub fn precision(&self) -> f32 {
        let predicted_positive = self.matrix.row(0).sum();
        self.true_positives() as f32 / predicted_positive as f32
    }

    /// Recall of the positive class
    pub fn recall(&self) -> f32 {
        let actual_positive = self.matrix.column(0).sum();
        self.true_positives() as f32 / actual_positive as f32
    }

    /// Return the fraction of correctly classified samples
    pub fn accuracy(&self) -> f32 {
        self.matrix.diag().sum() as f32 / self.nsamples() as f32
    }

    /// Return the beta score of the positive class
    pub fn f_score(&self, beta: f32) -> f32 {
        let sb = beta * beta;
        let p = self.precision();
        let r = self.recall();

        (1.0 + sb) * (p * r) / (sb * p + r)
    }

    /// Return the beta=1 score of the positive class
    pub fn f1_score(&self) -> f32 {
        self.f_score(1.0)
    }

    /// Return the Matthew Correlation Coefficient
    ///
    /// Estimates the normalized cross-correlation between target and predicted variable
    pub fn mcc(&self) -> f32 {
        let (tp, fp, fn_, tn) = (
            self.true_positives() as f32,
            self.false_positives() as f32,
            self.false_negatives() as f32,
            self.true_negatives() as f32,
        );

        (tp * tn - fp * fn_) / ((tp + fp) * (tp + fn_) * (tn + fp) * (tn + fn_)).sqrt()
    }
}

/// Print a confusion matrix
impl fmt::Debug for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let width = self
            .matrix
            .iter()
            .map(|count| count.to_string().len())
            .max()
            .unwrap_or(1);
        let rule = "-".repeat(2 * width + 7);

        writeln!(f, "{}", rule)?;
        for row in self.matrix.rows() {
            writeln!(f, "| {:>w$} | {:>w$} |", row[0], row[1], w = width)?;
        }
        write!(f, "{}", rule)
    }
}

/// Build a confusion matrix by comparing a prediction to the ground truth
///
/// Both sides must contain only `0` and `1` labels and have the same length.
pub trait ToConfusionMatrix<T> {
    fn confusion_matrix(&self, ground_truth: T) -> Result<ConfusionMatrix>;
}

/// Map a label to its row/column in the confusion matrix
fn label_index<F: Float>(label: F) -> Result<usize> {
    if label == F::one() {
        Ok(0)
    } else if label == F::zero() {
        Ok(1)
    } else {
        Err(Error::InvalidTargets)
    }
}

impl<F: Float, C: Data<Elem = F>, D: Data<Elem = F>> ToConfusionMatrix<&ArrayBase<D, Ix1>>
    for ArrayBase<C, Ix1>
{
    fn confusion_matrix(&self, ground_truth: &ArrayBase<D, Ix1>) -> Result<ConfusionMatrix> {
        if self.len() != ground_truth.len() {
            return Err(Error::DimensionMismatch {
                what: "number of predictions",
                expected: ground_truth.len(),
                found: self.len(),
            });
        }

        let mut matrix = Array2::zeros((2, 2));
        for (predicted, truth) in self.iter().zip(ground_truth.iter()) {
            matrix[(label_index(*predicted)?, label_index(*truth)?)] += 1;
        }

        Ok(ConfusionMatrix { matrix })
    }
}

impl<F: Float, C: Data<Elem = F>> ToConfusionMatrix<&Dataset<F>> for ArrayBase<C, Ix1> {
    fn confusion_matrix(&self, ground_truth: &Dataset<F>) -> Result<ConfusionMatrix> {
        self.confusion_matrix(ground_truth.targets())
    }
}
