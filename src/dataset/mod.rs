pub mod archive;
pub mod loader;

pub use archive::*;
pub use loader::*;

use std::fmt;

/// A pair of depth map and image.
#[derive(Clone)]
pub struct DepthSample<B: Backend> {
    /// `[H, W]`
    pub depth: Tensor<B, 2>,
    /// `[3, H, W]`
    pub image: Tensor<B, 3>,
}

impl<B: Backend> DepthSample<B> {
    /// Reading the sample from the first two datasets of the archive.
    ///
    /// ## Details
    ///
    /// * The first dataset is the depth map with shape `[H, W]`
    /// * The second dataset is the image with shape `[3, H, W]`
    pub fn init_from_archive<A: Archive>(
        archive: &mut A,
        device: &B::Device,
    ) -> Result<Self, Error> {
        let keys = archive.keys();
        let key_depth = keys.first().ok_or(Error::MissingDataset(0))?;
        let key_image = keys.get(1).ok_or(Error::MissingDataset(1))?;

        let depth = archive.read(key_depth)?;
        let image = archive.read(key_image)?;

        if depth.shape.len() != 2 {
            return Err(Error::InvalidTensorData(format!(
                "The depth map of {key_depth:?} should have 2 dimensions, \
                but it has the shape {:?}",
                depth.shape
            )));
        }
        if image.shape.len() != 3 || image.shape[0] != 3 {
            return Err(Error::InvalidTensorData(format!(
                "The image of {key_image:?} should have the shape [3, H, W], \
                but it has the shape {:?}",
                image.shape
            )));
        }

        let depth = Tensor::from_data(depth.convert::<B::FloatElem>(), device);
        let image = Tensor::from_data(image.convert::<B::FloatElem>(), device);

        #[cfg(debug_assertions)]
        log::debug!(
            target: "densedepth::trainer::dataset",
            "DepthSample::init_from_archive > {keys:?}",
        );

        Ok(Self { depth, image })
    }

    /// ## Returns
    ///
    /// The image with shape `[H, W, 3]`.
    #[inline]
    pub fn image_hwc(&self) -> Tensor<B, 3> {
        self.image.to_owned().permute([1, 2, 0])
    }

    /// ## Returns
    ///
    /// `(image, depth)` with shapes `([1, 3, H, W], [1, 1, H, W])`.
    #[inline]
    pub fn into_batch(self) -> (Tensor<B, 4>, Tensor<B, 4>) {
        (self.image.unsqueeze(), self.depth.unsqueeze())
    }
}

impl<B: Backend> fmt::Debug for DepthSample<B> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("DepthSample")
            .field("depth.dims()", &self.depth.dims())
            .field("image.dims()", &self.image.dims())
            .finish()
    }
}
