//! Cross-entropy cost and its gradient
//!
//! Both functions take the design matrix `x` (bias column included), the coefficient vector
//! `theta` with the intercept at index `0` and the targets `y` with entries `0` or `1`.
//!
//! No clamping is applied: a saturated sigmoid on a misclassified sample produces an infinite cost.

use crate::link::sigmoid_inplace;
use logit::error::{Error, Result};
use logit::Float;
use ndarray::{Array1, ArrayBase, Data, Ix1, Ix2, Zip};

/// Verify that `theta`, `x` and `y` conform and that there is at least one sample
pub(crate) fn check_dimensions<F, A, B, C>(
    theta: &ArrayBase<A, Ix1>,
    x: &ArrayBase<B, Ix2>,
    y: &ArrayBase<C, Ix1>,
) -> Result<()>
where
    F: Float,
    A: Data<Elem = F>,
    B: Data<Elem = F>,
    C: Data<Elem = F>,
{
    if x.ncols() != theta.len() {
        return Err(Error::DimensionMismatch {
            what: "number of coefficients",
            expected: x.ncols(),
            found: theta.len(),
        });
    }
    if x.nrows() != y.len() {
        return Err(Error::DimensionMismatch {
            what: "number of targets",
            expected: x.nrows(),
            found: y.len(),
        });
    }
    if x.nrows() == 0 {
        return Err(Error::EmptyInput);
    }
    Ok(())
}

/// Computes the mean cross-entropy of the predictions `sigmoid(x·θ)`
///
/// $$J = -\frac{1}{m}\sum_{i=1}^{m} y_i \ln h_i + (1 - y_i) \ln(1 - h_i)$$
pub fn cost<F, A, B, C>(
    theta: &ArrayBase<A, Ix1>,
    x: &ArrayBase<B, Ix2>,
    y: &ArrayBase<C, Ix1>,
) -> Result<F>
where
    F: Float,
    A: Data<Elem = F>,
    B: Data<Elem = F>,
    C: Data<Elem = F>,
{
    check_dimensions(theta, x, y)?;
    Ok(cross_entropy(theta, x, y))
}

/// Computes the gradient of the cost with respect to `theta`
///
/// $$\nabla J = \frac{1}{m} X^T (h - y)$$
pub fn gradient<F, A, B, C>(
    theta: &ArrayBase<A, Ix1>,
    x: &ArrayBase<B, Ix2>,
    y: &ArrayBase<C, Ix1>,
) -> Result<Array1<F>>
where
    F: Float,
    A: Data<Elem = F>,
    B: Data<Elem = F>,
    C: Data<Elem = F>,
{
    check_dimensions(theta, x, y)?;
    Ok(cross_entropy_grad(theta, x, y))
}

/// Unchecked version of `cost`, shapes have to be verified by the caller
pub(crate) fn cross_entropy<F, A, B, C>(
    theta: &ArrayBase<A, Ix1>,
    x: &ArrayBase<B, Ix2>,
    y: &ArrayBase<C, Ix1>,
) -> F
where
    F: Float,
    A: Data<Elem = F>,
    B: Data<Elem = F>,
    C: Data<Elem = F>,
{
    let mut h = x.dot(theta);
    sigmoid_inplace(&mut h);

    // terms with a zero weight are skipped, a saturated but correctly classified sample
    // contributes `0` instead of `0 * -inf`
    let log_likelihood = Zip::from(&h).and(y).fold(F::zero(), |mut acc, &h, &y| {
        if y != F::zero() {
            acc += y * h.ln();
        }
        if y != F::one() {
            acc += (F::one() - y) * (F::one() - h).ln();
        }
        acc
    });

    -log_likelihood / F::cast(x.nrows())
}

/// Unchecked version of `gradient`, shapes have to be verified by the caller
pub(crate) fn cross_entropy_grad<F, A, B, C>(
    theta: &ArrayBase<A, Ix1>,
    x: &ArrayBase<B, Ix2>,
    y: &ArrayBase<C, Ix1>,
) -> Array1<F>
where
    F: Float,
    A: Data<Elem = F>,
    B: Data<Elem = F>,
    C: Data<Elem = F>,
{
    let mut residual = x.dot(theta);
    sigmoid_inplace(&mut residual);
    residual -= y;

    let m = F::cast(x.nrows());
    x.t().dot(&residual).mapv_into(|g| g / m)
}
