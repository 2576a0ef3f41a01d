//! Threshold accuracy metric.

pub use super::*;

/// Computing the threshold accuracy between the inputs:
///
/// `mean(max(value / target, target / value) < threshold)`
///
/// ## Details
///
/// The threshold is `1.25 ^ exponent`, so the fraction of pixels within the band
/// never decreases as the exponent grows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThresholdAccuracy {
    /// The upper bound (exclusive) of the symmetric ratio.
    pub threshold: f64,
}

impl ThresholdAccuracy {
    pub const BASE: f64 = 1.25;

    /// Initialize the metric with the threshold `1.25 ^ exponent`.
    #[inline]
    pub fn init(exponent: i32) -> Self {
        Self {
            threshold: Self::BASE.powi(exponent),
        }
    }

    /// The symmetric ratio `max(value / target, target / value)`.
    ///
    /// Every element is at least `1.0`.
    pub fn ratio<B: Backend, const D: usize>(
        value: Tensor<B, D>,
        target: Tensor<B, D>,
    ) -> Tensor<B, D> {
        let ratio_0 = target.to_owned().div(value.to_owned());
        let ratio_1 = value.div(target);
        let is_lower = ratio_0.to_owned().lower(ratio_1.to_owned());

        ratio_0.mask_where(is_lower, ratio_1)
    }
}

impl<B: Backend> Metric<B> for ThresholdAccuracy {
    /// ## Arguments
    ///
    /// * `value` - The predicted depths.
    /// * `target` - The true depths.
    ///
    /// ## Returns
    ///
    /// The fraction of elements within the threshold with shape `[1]`.
    fn evaluate<const D: usize>(
        &self,
        value: Tensor<B, D>,
        target: Tensor<B, D>,
    ) -> Tensor<B, 1> {
        Self::ratio(value, target)
            .lower_elem(self.threshold)
            .float()
            .mean()
    }
}

impl Default for ThresholdAccuracy {
    #[inline]
    fn default() -> Self {
        Self::init(1)
    }
}
