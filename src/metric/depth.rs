//! Standard accuracy and error metrics for depth estimation.

pub use super::*;
pub use crate::error::Error;

use burn::tensor::ElementConversion;
use serde::{Deserialize, Serialize};

/// The metrics of a predicted depth map against the true depth map.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct DepthMetricReport {
    /// The fraction of elements whose ratio is within `1.25`.
    pub a1: f64,
    /// The fraction of elements whose ratio is within `1.25 ^ 2`.
    pub a2: f64,
    /// The fraction of elements whose ratio is within `1.25 ^ 3`.
    pub a3: f64,
    /// The mean of `|target - value| / target`.
    pub abs_rel: f64,
    /// The root of the mean of `(target - value) ^ 2`.
    pub rmse: f64,
    /// The mean of `|log10(target) - log10(value)|`.
    pub log10_err: f64,
}

/// Computing all the metrics in [`DepthMetricReport`] at once.
#[derive(Clone, Copy, Debug)]
pub struct DepthMetrics {
    pub a1: ThresholdAccuracy,
    pub a2: ThresholdAccuracy,
    pub a3: ThresholdAccuracy,
    pub abs_rel: AbsoluteRelativeError,
    pub rmse: RootMeanSquareError,
    pub log10_err: MeanLog10Error,
}

impl DepthMetrics {
    #[inline]
    pub fn init() -> Self {
        Self {
            a1: ThresholdAccuracy::init(1),
            a2: ThresholdAccuracy::init(2),
            a3: ThresholdAccuracy::init(3),
            abs_rel: AbsoluteRelativeError::init(),
            rmse: RootMeanSquareError::init(),
            log10_err: MeanLog10Error::init(),
        }
    }

    /// ## Arguments
    ///
    /// * `true_depth` - The ground truth depth map with shape `[N?, C?, H, W]`.
    /// * `predicted_depth` - The predicted depth map with the same shape.
    ///
    /// ## Returns
    ///
    /// The metrics reduced over every element.
    ///
    /// ## Errors
    ///
    /// * [`Error::MismatchedShape`] if the shapes differ.
    /// * [`Error::NonPositiveDepth`] if any depth is not positive or is NaN.
    pub fn evaluate<B: Backend, const D: usize>(
        &self,
        true_depth: Tensor<B, D>,
        predicted_depth: Tensor<B, D>,
    ) -> Result<DepthMetricReport, Error> {
        let shape_true = true_depth.dims();
        let shape_predicted = predicted_depth.dims();
        if shape_true != shape_predicted {
            return Err(Error::MismatchedShape(
                shape_true.into(),
                shape_predicted.into(),
            ));
        }

        let target = true_depth.flatten::<1>(0, D - 1);
        let value = predicted_depth.flatten::<1>(0, D - 1);

        // NOTE: Zero and negative depths would otherwise turn into
        // infinities and NaNs silently.
        for depth in [&target, &value] {
            if depth.to_owned().is_nan().any().into_scalar() {
                return Err(Error::NonPositiveDepth(f64::NAN));
            }
            let depth_min = depth.to_owned().min().into_scalar().elem::<f64>();
            if depth_min <= 0.0 {
                return Err(Error::NonPositiveDepth(depth_min));
            }
        }

        let report = DepthMetricReport {
            a1: scalar(self.a1.evaluate(value.to_owned(), target.to_owned())),
            a2: scalar(self.a2.evaluate(value.to_owned(), target.to_owned())),
            a3: scalar(self.a3.evaluate(value.to_owned(), target.to_owned())),
            abs_rel: scalar(
                self.abs_rel.evaluate(value.to_owned(), target.to_owned()),
            ),
            rmse: scalar(self.rmse.evaluate(value.to_owned(), target.to_owned())),
            log10_err: scalar(self.log10_err.evaluate(value, target)),
        };

        #[cfg(debug_assertions)]
        log::debug!(
            target: "densedepth::trainer::metric",
            "DepthMetrics::evaluate > {report:?}",
        );

        Ok(report)
    }
}

impl Default for DepthMetrics {
    #[inline]
    fn default() -> Self {
        Self::init()
    }
}

#[inline]
fn scalar<B: Backend>(tensor: Tensor<B, 1>) -> f64 {
    tensor.into_scalar().elem()
}
