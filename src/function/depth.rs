pub use burn::tensor::{backend::Backend, Tensor};

/// The default maximum depth used by [`normalize_depth`].
pub const DEPTH_MAX_DEFAULT: f64 = 1000.0;

/// Normalizing the depths into the inverse-depth target of training:
///
/// `max_depth / depth`
///
/// ## Details
///
/// * The depths should be positive
/// * Applying it twice with the same `max_depth` restores the depths
#[inline]
pub fn normalize_depth<B: Backend, const D: usize>(
    depth: Tensor<B, D>,
    max_depth: f64,
) -> Tensor<B, D> {
    depth.recip().mul_scalar(max_depth)
}
