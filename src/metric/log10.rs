//! Mean log10 error metric.

pub use super::*;

use std::f64::consts::LN_10;

/// Computing the mean log10 error between the inputs:
///
/// `mean(abs(log10(value) - log10(target)))`
///
/// ## Details
///
/// The error only depends on the ratio of the inputs,
/// so it is invariant under a common positive scaling.
#[derive(Clone, Copy, Debug, Default)]
pub struct MeanLog10Error;

impl MeanLog10Error {
    #[inline]
    pub fn init() -> Self {
        Self
    }
}

impl<B: Backend> Metric<B> for MeanLog10Error {
    /// ## Returns
    ///
    /// The mean log10 error with shape `[1]`.
    ///
    /// ## Details
    ///
    /// * The arguments should be positive
    #[inline]
    fn evaluate<const D: usize>(
        &self,
        value: Tensor<B, D>,
        target: Tensor<B, D>,
    ) -> Tensor<B, 1> {
        // log10(x) = ln(x) / ln(10)
        value
            .log()
            .sub(target.log())
            .abs()
            .div_scalar(LN_10)
            .mean()
    }
}
