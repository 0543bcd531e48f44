use ndarray::{Array1, Array2, Axis};
use rand::{seq::SliceRandom, Rng};

use super::{is_missing, Dataset, Float};
use crate::error::{Error, Result};

impl<F: Float> Dataset<F> {
    /// Create a new dataset from records and targets
    pub fn new(records: Array2<F>, targets: Array1<F>) -> Dataset<F> {
        Dataset {
            records,
            targets,
            feature_names: Vec::new(),
        }
    }

    /// Return references to the records
    pub fn records(&self) -> &Array2<F> {
        &self.records
    }

    /// Return references to the targets
    pub fn targets(&self) -> &Array1<F> {
        &self.targets
    }

    pub fn nsamples(&self) -> usize {
        self.records.nrows()
    }

    pub fn nfeatures(&self) -> usize {
        self.records.ncols()
    }

    /// Returns feature names
    ///
    /// A feature name gives a human-readable string describing the purpose of a single feature.
    /// This allow the reader to understand its purpose while analysing results, for example
    /// correlation analysis or feature importance.
    pub fn feature_names(&self) -> Vec<String> {
        if !self.feature_names.is_empty() {
            self.feature_names.clone()
        } else {
            (0..self.nfeatures())
                .map(|idx| format!("feature-{}", idx))
                .collect()
        }
    }

    /// Updates the feature names of a dataset
    pub fn with_feature_names<I: Into<String>>(mut self, names: Vec<I>) -> Dataset<F> {
        self.feature_names = names.into_iter().map(|x| x.into()).collect();
        self
    }

    /// Ensure that records and targets describe the same samples
    pub fn check_shapes(&self) -> Result<()> {
        if self.records.nrows() != self.targets.len() {
            return Err(Error::DimensionMismatch {
                what: "number of targets",
                expected: self.records.nrows(),
                found: self.targets.len(),
            });
        }
        Ok(())
    }

    /// Remove all samples with a missing value in their record or their target
    ///
    /// Records and targets are filtered together, a sample is kept only when all of its features
    /// and its target are present. Fails if records and targets do not have the same length.
    pub fn drop_missing(&self) -> Result<Dataset<F>> {
        self.check_shapes()?;

        let keep = self
            .records
            .rows()
            .into_iter()
            .zip(self.targets.iter())
            .enumerate()
            .filter(|(_, (row, target))| !is_missing(*target) && !row.iter().any(is_missing))
            .map(|(idx, _)| idx)
            .collect::<Vec<_>>();

        Ok(Dataset {
            records: self.records.select(Axis(0), &keep),
            targets: self.targets.select(Axis(0), &keep),
            feature_names: self.feature_names.clone(),
        })
    }

    /// Split dataset into two disjoint chunks
    ///
    /// This function splits the observations in a dataset into two disjoint chunks. The splitting
    /// threshold is calculated with the `ratio`. For example a ratio of `0.9` allocates 90% to the
    /// first chunks and 10% to the second. This is often used in training, validation splitting
    /// procedures.
    pub fn split_with_ratio(self, ratio: f32) -> (Dataset<F>, Dataset<F>) {
        let n = (self.nsamples() as f32 * ratio).ceil() as usize;
        let n = n.min(self.nsamples());

        let (first_records, second_records) = self.records.view().split_at(Axis(0), n);
        let (first_targets, second_targets) = self.targets.view().split_at(Axis(0), n);

        let first = Dataset {
            records: first_records.to_owned(),
            targets: first_targets.to_owned(),
            feature_names: self.feature_names.clone(),
        };
        let second = Dataset {
            records: second_records.to_owned(),
            targets: second_targets.to_owned(),
            feature_names: self.feature_names,
        };

        (first, second)
    }

    /// Apply a random permutation to the samples of the dataset
    pub fn shuffle<R: Rng>(&self, rng: &mut R) -> Dataset<F> {
        let mut indices = (0..self.nsamples()).collect::<Vec<_>>();
        indices.shuffle(rng);

        Dataset {
            records: self.records.select(Axis(0), &indices),
            targets: self.targets.select(Axis(0), &indices),
            feature_names: self.feature_names.clone(),
        }
    }
}

impl<F: Float> From<(Array2<F>, Array1<F>)> for Dataset<F> {
    fn from(rec_tar: (Array2<F>, Array1<F>)) -> Self {
        Dataset::new(rec_tar.0, rec_tar.1)
    }
}
