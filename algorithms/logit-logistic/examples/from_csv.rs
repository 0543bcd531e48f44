use logit::prelude::{Fit, ToConfusionMatrix};
use logit_logistic::LogisticRegression;

use std::error::Error;
use std::fs::File;

/// Fit a model on a CSV file whose last column holds the `0`/`1` targets, or on the bundled exams
/// data if no file is given
///
/// ```bash
/// $ cargo run --example from_csv -- data.csv
/// ```
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let dataset = match std::env::args().nth(1) {
        Some(path) => logit_datasets::dataset_from_csv(File::open(&path)?, true, b',')?,
        None => logit_datasets::exams()?,
    };

    // the model skips rows with missing values itself, dropping them here keeps records and
    // targets aligned for the confusion matrix
    let clean = dataset.drop_missing()?;
    println!(
        "{} of {} rows are complete, features {:?}",
        clean.nsamples(),
        dataset.nsamples(),
        clean.feature_names()
    );

    let model = LogisticRegression::default().fit(&clean)?;
    println!("coefficients (intercept first) {:.4}", model.coefficients());

    let probabilities = model.predict_probabilities(clean.records())?;
    let cm = logit_logistic::predict_labels(&probabilities).confusion_matrix(&clean)?;
    println!("{:?}", cm);
    println!("training accuracy {}", cm.accuracy());

    Ok(())
}
