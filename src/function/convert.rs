pub use crate::error::Error;
pub use burn::tensor::{backend::Backend, Tensor, TensorData};
pub use image::{GrayImage, RgbImage};

/// ## Returns
///
/// The image tensor with shape `[3, H, W]` and values in `[0.0, 1.0]`.
pub fn get_tensor_from_rgb_image<B: Backend>(
    image: &RgbImage,
    device: &B::Device,
) -> Tensor<B, 3> {
    let (width, height) = image.dimensions();
    let data = TensorData::new(
        image.as_raw().iter().map(|&value| value as f32).collect(),
        [height as usize, width as usize, 3],
    )
    .convert::<B::FloatElem>();

    Tensor::<B, 3>::from_data(data, device)
        .div_scalar(255.0)
        .permute([2, 0, 1])
}

/// ## Returns
///
/// The image tensor with shape `[1, H, W]` and values in `[0.0, 1.0]`.
pub fn get_tensor_from_luma_image<B: Backend>(
    image: &GrayImage,
    device: &B::Device,
) -> Tensor<B, 3> {
    let (width, height) = image.dimensions();
    let data = TensorData::new(
        image.as_raw().iter().map(|&value| value as f32).collect(),
        [1, height as usize, width as usize],
    )
    .convert::<B::FloatElem>();

    Tensor::from_data(data, device).div_scalar(255.0)
}

/// ## Arguments
///
/// * `tensor` - The image tensor with shape `[3, H, W]`.
///   Values out of `[0.0, 1.0]` are clamped.
pub fn get_rgb_image_from_tensor<B: Backend>(
    tensor: Tensor<B, 3>
) -> Result<RgbImage, Error> {
    let [channel_count, height, width] = tensor.dims();
    if channel_count != 3 {
        return Err(Error::MismatchedShape(
            vec![3, height, width],
            vec![channel_count, height, width],
        ));
    }

    let values = tensor
        .clamp(0.0, 1.0)
        .mul_scalar(255.0)
        .permute([1, 2, 0])
        .into_data()
        .convert::<f32>()
        .to_vec::<f32>()
        .map_err(|err| Error::InvalidTensorData(format!("{err:?}")))?
        .into_iter()
        .map(|value| value.round() as u8)
        .collect();

    RgbImage::from_raw(width as u32, height as u32, values).ok_or_else(|| {
        Error::InvalidTensorData(format!(
            "The buffer is too small for an image of {width}x{height}"
        ))
    })
}

#[cfg(test)]
mod tests {
    #[test]
    fn get_tensor_from_rgb_image() {
        use super::*;
        use burn::backend::NdArray;

        let device = Default::default();
        let image = RgbImage::from_fn(4, 2, |x, y| {
            image::Rgb([(x * 60) as u8, (y * 255) as u8, 51])
        });

        let tensor = super::get_tensor_from_rgb_image::<NdArray>(&image, &device);
        assert_eq!(tensor.dims(), [3, 2, 4]);

        let output = tensor.into_data();
        let target = TensorData::from([
            [[0.0, 60.0, 120.0, 180.0], [0.0, 60.0, 120.0, 180.0]],
            [[0.0, 0.0, 0.0, 0.0], [255.0, 255.0, 255.0, 255.0]],
            [[51.0, 51.0, 51.0, 51.0], [51.0, 51.0, 51.0, 51.0]],
        ]);
        let target = Tensor::<NdArray, 3>::from_data(target, &device)
            .div_scalar(255.0)
            .into_data();
        output.assert_approx_eq(&target, 6);
    }

    #[test]
    fn get_tensor_from_luma_image() {
        use super::*;
        use burn::backend::NdArray;

        let device = Default::default();
        let image = GrayImage::from_raw(2, 1, vec![0, 255]).unwrap();

        let tensor = super::get_tensor_from_luma_image::<NdArray>(&image, &device);
        assert_eq!(tensor.dims(), [1, 1, 2]);

        let output = tensor.into_data();
        let target = TensorData::from([[[0.0_f32, 1.0]]]);
        output.assert_approx_eq(&target, 6);
    }

    #[test]
    fn get_rgb_image_from_tensor() {
        use super::*;
        use burn::backend::NdArray;

        let device = Default::default();
        let image = RgbImage::from_fn(5, 3, |x, y| {
            image::Rgb([(x * 50) as u8, (y * 100) as u8, 200])
        });

        let tensor = super::get_tensor_from_rgb_image::<NdArray>(&image, &device);
        let output = super::get_rgb_image_from_tensor(tensor).unwrap();
        assert_eq!(output, image);

        let tensor = Tensor::<NdArray, 3>::zeros([1, 3, 5], &device);
        super::get_rgb_image_from_tensor(tensor).unwrap_err();
    }
}
