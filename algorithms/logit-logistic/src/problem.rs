//! Binding of the cost and gradient to the argmin solver

use crate::argmin_param::ArgminParam;
use crate::float::Float;
use crate::loss::{cross_entropy, cross_entropy_grad};
use argmin::core::{CostFunction, Gradient};
use argmin::solver::linesearch::condition::ArmijoCondition;
use argmin::solver::linesearch::BacktrackingLineSearch;
use argmin::solver::quasinewton::LBFGS;
use ndarray::{ArrayView1, ArrayView2};

/// Line search which shrinks its step until the Armijo condition holds. A trial step with an
/// infinite or `NaN` cost never satisfies the condition and is shrunk as well.
pub(crate) type LineSearchType<F> =
    BacktrackingLineSearch<ArgminParam<F>, ArgminParam<F>, ArmijoCondition<F>, F>;

pub(crate) type LBFGSType<F> = LBFGS<LineSearchType<F>, ArgminParam<F>, ArgminParam<F>, F>;

/// Internal representation of a logistic regression problem.
/// This data structure exists to be handed to Argmin.
///
/// `x` is the design matrix including the bias column, its shape has been checked against
/// `target` before the problem is constructed.
pub(crate) struct LogisticRegressionProblem<'a, F: Float> {
    pub x: ArrayView2<'a, F>,
    pub target: ArrayView1<'a, F>,
}

impl<'a, F: Float> CostFunction for LogisticRegressionProblem<'a, F> {
    type Param = ArgminParam<F>;
    type Output = F;

    /// Apply the cost function to a parameter `p`
    fn cost(&self, p: &Self::Param) -> std::result::Result<Self::Output, argmin::core::Error> {
        Ok(cross_entropy(p.as_array(), &self.x, &self.target))
    }
}

impl<'a, F: Float> Gradient for LogisticRegressionProblem<'a, F> {
    type Param = ArgminParam<F>;
    type Gradient = ArgminParam<F>;

    /// Compute the gradient at parameter `p`.
    fn gradient(&self, p: &Self::Param) -> std::result::Result<Self::Param, argmin::core::Error> {
        Ok(ArgminParam(cross_entropy_grad(
            p.as_array(),
            &self.x,
            &self.target,
        )))
    }
}
