//! Loading images from files into tensors.

pub use crate::function::convert::*;

use image::imageops::{self, FilterType};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use std::path::Path;

/// The size `(width, height)` of images loaded by [`load_images`].
pub const IMAGE_SIZE_DEFAULT: (u32, u32) = (640, 480);

/// Loading the image as grayscale.
///
/// ## Returns
///
/// The image tensor with shape `[1, 1, H, W]` and values in `[0.0, 1.0]`.
pub fn load_image<B: Backend>(
    path: impl AsRef<Path>,
    device: &B::Device,
) -> Result<Tensor<B, 4>, Error> {
    let image = image::open(path)?.into_luma8();
    Ok(get_tensor_from_luma_image(&image, device).unsqueeze())
}

/// Loading the color images resized to `size`.
///
/// ## Arguments
///
/// * `paths` - The image file paths, which are decoded in parallel.
/// * `size` - `(width, height)`, see [`IMAGE_SIZE_DEFAULT`].
///
/// ## Returns
///
/// The image tensor with shape `[N, 3, H, W]` and values in `[0.0, 1.0]`.
pub fn load_images<B: Backend, P: AsRef<Path> + Sync>(
    paths: &[P],
    size: (u32, u32),
    device: &B::Device,
) -> Result<Tensor<B, 4>, Error> {
    if paths.is_empty() {
        return Err(Error::InvalidTensorData("No image to load".into()));
    }

    let (width, height) = size;
    let images = paths
        .par_iter()
        .map(|path| {
            let image = image::open(path)?.into_rgb8();
            Ok::<_, Error>(imageops::resize(
                &image,
                width,
                height,
                FilterType::CatmullRom,
            ))
        })
        .collect::<Result<Vec<_>, Error>>()?;

    let images = images
        .iter()
        .map(|image| get_tensor_from_rgb_image(image, device))
        .collect();

    #[cfg(debug_assertions)]
    log::debug!(
        target: "densedepth::trainer::dataset::loader",
        "load_images > {} images",
        paths.len(),
    );

    Ok(Tensor::stack(images, 0))
}
