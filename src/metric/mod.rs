pub mod abs_rel;
pub mod depth;
pub mod log10;
pub mod mse;
pub mod rmse;
pub mod threshold;

pub use abs_rel::*;
pub use depth::*;
pub use log10::*;
pub use mse::*;
pub use rmse::*;
pub use threshold::*;

pub use burn::tensor::{backend::Backend, Tensor};

pub trait Metric<B: Backend> {
    /// Evaluate the value against the target.
    ///
    /// ## Returns
    ///
    /// The metric value with shape `[1]`.
    fn evaluate<const D: usize>(
        &self,
        value: Tensor<B, D>,
        target: Tensor<B, D>,
    ) -> Tensor<B, 1>;
}
