//! This module defines a newtype for ndarray's Array1.
//!
//! This is necessary to be able to abstract over floats (f32 and f64) so that
//! the logistic regression code can be abstract in the float type it works
//! with.
//!
//! Unfortunately, this requires that we re-implement some traits from Argmin.

use crate::float::Float;
use argmin_math::{
    ArgminAdd, ArgminDot, ArgminL1Norm, ArgminL2Norm, ArgminMinMax, ArgminMul, ArgminSignum,
    ArgminSub, ArgminZeroLike,
};
use ndarray::{Array1, ArrayBase, Data, Ix1, Zip};
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

pub fn elem_dot<F: logit::Float, A1: Data<Elem = F>, A2: Data<Elem = F>>(
    a: &ArrayBase<A1, Ix1>,
    b: &ArrayBase<A2, Ix1>,
) -> F {
    Zip::from(a)
        .and(b)
        .fold(F::zero(), |acc, &a, &b| acc + a * b)
}

/// Coefficient vector as seen by the solver, the bias coefficient is stored at index `0`
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct ArgminParam<F>(pub Array1<F>);

impl<F> ArgminParam<F> {
    #[inline]
    pub fn as_array(&self) -> &Array1<F> {
        &self.0
    }

    #[inline]
    pub fn into_array(self) -> Array1<F> {
        self.0
    }
}

impl<F: Float> ArgminSub<F, ArgminParam<F>> for ArgminParam<F> {
    fn sub(&self, other: &F) -> ArgminParam<F> {
        ArgminParam(&self.0 - *other)
    }
}

impl<F: Float> ArgminSub<ArgminParam<F>, ArgminParam<F>> for ArgminParam<F> {
    fn sub(&self, other: &ArgminParam<F>) -> ArgminParam<F> {
        ArgminParam(&self.0 - &other.0)
    }
}

impl<F: Float> ArgminAdd<F, ArgminParam<F>> for ArgminParam<F> {
    fn add(&self, other: &F) -> ArgminParam<F> {
        ArgminParam(&self.0 + *other)
    }
}

impl<F: Float> ArgminAdd<ArgminParam<F>, ArgminParam<F>> for ArgminParam<F> {
    fn add(&self, other: &ArgminParam<F>) -> ArgminParam<F> {
        ArgminParam(&self.0 + &other.0)
    }
}

impl<F: Float> ArgminDot<ArgminParam<F>, F> for ArgminParam<F> {
    fn dot(&self, other: &ArgminParam<F>) -> F {
        elem_dot(&self.0, &other.0)
    }
}

impl<F: Float> ArgminL1Norm<F> for ArgminParam<F> {
    fn l1_norm(&self) -> F {
        self.0.iter().fold(F::zero(), |acc, &a| acc + num_traits::Float::abs(a))
    }
}

impl<F: Float> ArgminL2Norm<F> for ArgminParam<F> {
    fn l2_norm(&self) -> F {
        num_traits::Float::sqrt(elem_dot(&self.0, &self.0))
    }
}

impl<F: Float> ArgminMul<F, ArgminParam<F>> for ArgminParam<F> {
    fn mul(&self, other: &F) -> ArgminParam<F> {
        ArgminParam(&self.0 * *other)
    }
}

impl<F: Float> ArgminMul<ArgminParam<F>, ArgminParam<F>> for ArgminParam<F> {
    fn mul(&self, other: &ArgminParam<F>) -> ArgminParam<F> {
        ArgminParam(&self.0 * &other.0)
    }
}

impl<F: Float> ArgminSignum for ArgminParam<F> {
    fn signum(self) -> ArgminParam<F> {
        ArgminParam(self.0.mapv_into(num_traits::Float::signum))
    }
}

impl<F: Float> ArgminZeroLike for ArgminParam<F> {
    fn zero_like(&self) -> ArgminParam<F> {
        ArgminParam(Array1::zeros(self.0.len()))
    }
}

impl<F: Float> ArgminMinMax for ArgminParam<F> {
    fn min(x: &Self, y: &Self) -> ArgminParam<F> {
        assert_eq!(x.0.shape(), y.0.shape());
        ArgminParam(Zip::from(&x.0).and(&y.0).map_collect(|&a, &b| num_traits::Float::min(a, b)))
    }

    fn max(x: &Self, y: &Self) -> ArgminParam<F> {
        assert_eq!(x.0.shape(), y.0.shape());
        ArgminParam(Zip::from(&x.0).and(&y.0).map_collect(|&a, &b| num_traits::Float::max(a, b)))
    }
}
