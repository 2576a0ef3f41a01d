//! Colormaps for visualizing depth maps.

pub use super::convert::*;
pub use burn::config::Config;

use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Colormap {
    Gray,
    #[default]
    Viridis,
}

#[derive(Config, Copy, Debug, PartialEq)]
pub struct ColormapOptions {
    #[config(default = "Colormap::Viridis")]
    pub colormap: Colormap,

    /// The value mapped to the upper end of the colormap.
    #[config(default = "1.0")]
    pub max_value: f64,

    /// The value mapped to the lower end of the colormap.
    #[config(default = "0.0")]
    pub min_value: f64,
}

impl Colormap {
    /// Polynomial fit of the viridis colormap of matplotlib.
    const VIRIDIS_COEFFICIENTS: [[f32; 3]; 7] = [
        [0.2777273272234177, 0.005407344544966578, 0.3340998053353061],
        [0.1050930431085774, 1.404613529898575, 1.384590162594685],
        [-0.3308618287255563, 0.214847559468213, 0.09509516302823659],
        [-4.634230498983486, -5.799100973351585, -19.33244095627987],
        [6.228269936347081, 14.17993336680509, 56.69055260068105],
        [4.776384997670288, -13.74514537774601, -65.35303263337234],
        [-5.435455855934631, 4.645852612178535, 26.3124352495832],
    ];

    /// ## Arguments
    ///
    /// * `value` - The normalized value, which is clamped to `[0.0, 1.0]`.
    ///
    /// ## Returns
    ///
    /// The RGB color with values in `[0.0, 1.0]`.
    pub fn map(
        &self,
        value: f32,
    ) -> [f32; 3] {
        let value = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0)
        };

        match self {
            Self::Gray => [value; 3],
            Self::Viridis => {
                // Horner's method
                let mut color = [0.0; 3];
                Self::VIRIDIS_COEFFICIENTS.iter().rev().for_each(|c| {
                    color.iter_mut().zip(c).for_each(|(color, c)| {
                        *color = *color * value + c;
                    });
                });
                color.map(|color| color.clamp(0.0, 1.0))
            },
        }
    }
}

impl ColormapOptions {
    /// ## Returns
    ///
    /// `(value - min_value) / (max_value - min_value)`,
    /// or `0.0` if the range is empty.
    #[inline]
    pub fn normalize(
        &self,
        value: f32,
    ) -> f32 {
        let range = self.max_value - self.min_value;
        if range == 0.0 {
            return 0.0;
        }
        ((value as f64 - self.min_value) / range) as f32
    }
}

impl Default for ColormapOptions {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Applying the colormap to the depth maps.
///
/// ## Arguments
///
/// * `tensor` - The depth maps with shape `[N, 1, H, W]`.
///
/// ## Returns
///
/// The colored images with shape `[N, 3, H, W]` and values in `[0.0, 1.0]`.
pub fn apply_colormap<B: Backend>(
    tensor: Tensor<B, 4>,
    options: &ColormapOptions,
) -> Result<Tensor<B, 4>, Error> {
    let [batch_size, channel_count, height, width] = tensor.dims();
    if channel_count != 1 {
        return Err(Error::MismatchedShape(
            vec![batch_size, 1, height, width],
            vec![batch_size, channel_count, height, width],
        ));
    }

    let device = tensor.device();
    let colors = tensor
        .into_data()
        .convert::<f32>()
        .to_vec::<f32>()
        .map_err(|err| Error::InvalidTensorData(format!("{err:?}")))?
        .into_iter()
        .flat_map(|value| options.colormap.map(options.normalize(value)))
        .collect::<Vec<_>>();
    let colors = TensorData::new(colors, [batch_size, height, width, 3])
        .convert::<B::FloatElem>();

    // [N, H, W, 3] -> [N, 3, H, W]
    Ok(Tensor::<B, 4>::from_data(colors, &device).permute([0, 3, 1, 2]))
}

/// Saving the depth map with shape `[H, W]` as a colored image.
pub fn save_depth_map<B: Backend>(
    depth: Tensor<B, 2>,
    path: impl AsRef<Path>,
    options: &ColormapOptions,
) -> Result<(), Error> {
    let [height, width] = depth.dims();
    let colors = apply_colormap(depth.reshape([1, 1, height, width]), options)?;
    save_image(colors.reshape([3, height, width]), path)
}

/// Saving the image with shape `[3, H, W]`.
pub fn save_image<B: Backend>(
    image: Tensor<B, 3>,
    path: impl AsRef<Path>,
) -> Result<(), Error> {
    let path = path.as_ref();
    get_rgb_image_from_tensor(image)?.save(path)?;

    #[cfg(debug_assertions)]
    log::debug!(
        target: "densedepth::trainer::function",
        "save_image > {}",
        path.display(),
    );

    Ok(())
}
