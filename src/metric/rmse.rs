//! Root mean square error (RMSE) metric.

pub use super::*;

/// Computing the root mean square error (RMSE) between the inputs:
///
/// `sqrt(mean((value - target) ^ 2))`
///
/// ## Details
///
/// It relies on [`MSE`](MeanSquareError).
#[derive(Clone, Copy, Debug, Default)]
pub struct RootMeanSquareError {
    /// Inner metric.
    pub mse: MeanSquareError,
}

impl RootMeanSquareError {
    #[inline]
    pub fn init() -> Self {
        Self {
            mse: MeanSquareError::init(),
        }
    }
}

impl<B: Backend> Metric<B> for RootMeanSquareError {
    /// ## Returns
    ///
    /// The root mean square error (RMSE) with shape `[1]`.
    ///
    /// ## Details
    ///
    /// * The result is in the unit of the inputs
    #[inline]
    fn evaluate<const D: usize>(
        &self,
        value: Tensor<B, D>,
        target: Tensor<B, D>,
    ) -> Tensor<B, 1> {
        self.mse.evaluate(value, target).sqrt()
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn evaluate() {
        use super::*;
        use burn::backend::NdArray;

        let device = Default::default();
        let metric = RootMeanSquareError::init();

        let input_0 = Tensor::<NdArray, 3>::full([1, 24, 32], 2.5, &device);
        let input_1 = Tensor::<NdArray, 3>::full([1, 24, 32], 2.5, &device);
        let score = metric.evaluate(input_0, input_1).into_scalar();
        assert_eq!(score, 0.0);

        let input_0 = Tensor::<NdArray, 3>::full([1, 24, 32], 1.0, &device);
        let input_1 = Tensor::<NdArray, 3>::full([1, 24, 32], 4.0, &device);
        let score = metric.evaluate(input_0, input_1).into_scalar();
        assert_eq!(score, 3.0);

        let input_0 = Tensor::<NdArray, 1>::from_floats([1.0, 2.0, 4.0, 8.0], &device);
        let input_1 = Tensor::<NdArray, 1>::from_floats([1.0, 2.0, 4.0, 4.0], &device);
        let score = metric.evaluate(input_0, input_1).into_scalar();
        assert_eq!(score, 2.0);
    }
}
