//! The logistic link function
//!
//! `sigmoid(z) = 1 / (1 + exp(-z))` maps the linear predictor `z = x·θ` to the probability of
//! the positive class. It is the inverse of the logit `ln(p / (1 - p))`.

use logit::Float;
use ndarray::{Array, ArrayBase, Data, DataMut, Dimension};

/// The logistic function
///
/// Total over all finite inputs. Large negative values evaluate to (numerically) `0`, large
/// positive values to `1`.
pub fn sigmoid<F: Float>(z: F) -> F {
    F::one() / (F::one() + (-z).exp())
}

/// Apply the logistic function to every element of `z`
pub fn sigmoid_array<F: Float, A: Data<Elem = F>, D: Dimension>(z: &ArrayBase<A, D>) -> Array<F, D> {
    z.mapv(sigmoid)
}

/// Apply the logistic function to every element of `z` in place
pub fn sigmoid_inplace<F: Float, A: DataMut<Elem = F>, D: Dimension>(z: &mut ArrayBase<A, D>) {
    z.mapv_inplace(sigmoid);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array1};

    #[test]
    fn sigmoid_of_zero_is_one_half() {
        assert_eq!(sigmoid(0.0f64), 0.5);
        assert_eq!(sigmoid(0.0f32), 0.5);
    }

    #[test]
    fn sigmoid_stays_in_open_unit_interval() {
        for z in Array1::linspace(-30.0f64, 30.0, 121).iter() {
            let s = sigmoid(*z);
            assert!(s > 0.0 && s < 1.0, "sigmoid({}) = {}", z, s);
        }
    }

    #[test]
    fn sigmoid_is_point_symmetric() {
        for z in Array1::linspace(-10.0f64, 10.0, 81).iter() {
            assert_abs_diff_eq!(sigmoid(-*z), 1.0 - sigmoid(*z), epsilon = 1e-12);
        }
    }

    #[test]
    fn sigmoid_saturates() {
        assert_abs_diff_eq!(sigmoid(-800.0f64), 0.0);
        assert_abs_diff_eq!(sigmoid(800.0f64), 1.0);
    }

    #[test]
    fn sigmoid_elementwise() {
        let z = array![[0.0, 2.0], [-2.0, 0.0]];
        let expected = array![[0.5, 0.8807970779778823], [0.11920292202211755, 0.5]];

        assert_abs_diff_eq!(sigmoid_array(&z), expected, epsilon = 1e-12);

        let mut z = z;
        sigmoid_inplace(&mut z);
        assert_abs_diff_eq!(z, expected, epsilon = 1e-12);
    }
}
