pub use super::*;

/// Computing the absolute relative error (AbsRel) between the inputs:
///
/// `mean(abs(target - value) / target)`
///
#[derive(Clone, Copy, Debug, Default)]
pub struct AbsoluteRelativeError;

impl AbsoluteRelativeError {
    #[inline]
    pub fn init() -> Self {
        Self
    }
}

impl<B: Backend> Metric<B> for AbsoluteRelativeError {
    /// ## Arguments
    ///
    /// * `value` - The predicted depths.
    /// * `target` - The true depths, which should be positive.
    ///
    /// ## Returns
    ///
    /// The absolute relative error with shape `[1]`.
    #[inline]
    fn evaluate<const D: usize>(
        &self,
        value: Tensor<B, D>,
        target: Tensor<B, D>,
    ) -> Tensor<B, 1> {
        target.to_owned().sub(value).abs().div(target).mean()
    }
}
