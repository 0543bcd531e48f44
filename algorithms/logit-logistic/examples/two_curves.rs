use logit::prelude::{Fit, Predict, ToConfusionMatrix};
use logit_logistic::LogisticRegression;
use ndarray::s;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;

use std::error::Error;

const RESOLUTION: usize = 32;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // two noisy sine curves, the lower one labelled 0 and the upper one labelled 1
    let mut rng = Xoshiro256Plus::seed_from_u64(42);
    let (train, valid) = logit_datasets::generate::two_curves(200, 1.2, 0.3, &mut rng)
        .shuffle(&mut rng)
        .split_with_ratio(0.8);

    println!(
        "Fit Logistic Regression classifier with #{} training points",
        train.nsamples()
    );

    let model = LogisticRegression::params()
        .max_iterations(200)
        .fit(&train)?;
    println!(
        "intercept {:.4}, coefficients {:.4}",
        model.intercept(),
        model.params()
    );

    // Print the confusion matrix, on the diagonal are the true-positive and true-negative
    // predictions, off the diagonal are false-positive and false-negative
    let cm = model.predict(valid.records())?.confusion_matrix(&valid)?;
    println!("{:?}", cm);
    println!("accuracy {}, MCC {}", cm.accuracy(), cm.mcc());

    // render the predicted labels on a grid, the upper rows hold large values of x2
    let grid = model.decision_grid((0., 2. * std::f64::consts::PI), (-3., 3.), RESOLUTION)?;
    let labels = grid.labels();
    for row in labels.slice(s![..;-1, ..]).rows() {
        let line: String = row
            .iter()
            .map(|&label| if label > 0. { '#' } else { '.' })
            .collect();
        println!("{}", line);
    }

    Ok(())
}
