use thiserror::Error;
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    BaseCrate(#[from] logit::Error),
    #[error(transparent)]
    ArgMinError(#[from] argmin::core::Error),
    #[error("Values must be finite and not `Inf`, `-Inf` or `NaN`")]
    InvalidValues,
    #[error("gradient_tolerance must be a positive, finite number")]
    InvalidGradientTolerance,
    #[error("max_iterations must be larger than zero")]
    InvalidMaxIterations,
    #[error("history_size must be larger than zero")]
    InvalidHistorySize,
    #[error("Size of initial parameter guess must be the number of columns in the feature matrix `x` plus one for the intercept")]
    InvalidInitialParametersGuessSize,
    #[error("Initial parameter guess must be finite")]
    InvalidInitialParametersGuess,
    #[error("the solver terminated without a best parameter vector")]
    MissingSolution,
}
