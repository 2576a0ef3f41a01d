//! Keyed archives of depth samples.

pub use crate::error::Error;
pub use burn::tensor::TensorData;

use std::path::PathBuf;

/// A keyed archive of numeric datasets.
///
/// ## Details
///
/// The keys are ordered. By convention, the first dataset is the depth map
/// and the second dataset is the image.
pub trait Archive {
    /// The dataset keys in archive order.
    fn keys(&self) -> Vec<String>;

    /// Reading the dataset of the key.
    fn read(
        &mut self,
        key: &str,
    ) -> Result<TensorData, Error>;
}

/// An archive held in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryArchive {
    pub datasets: Vec<(String, TensorData)>,
}

impl MemoryArchive {
    /// Inserting the dataset, replacing the one with the same key in place.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        data: TensorData,
    ) -> &mut Self {
        let key = key.into();
        match self.datasets.iter_mut().find(|(k, _)| *k == key) {
            Some((_, d)) => *d = data,
            None => self.datasets.push((key, data)),
        }
        self
    }
}

impl Archive for MemoryArchive {
    fn keys(&self) -> Vec<String> {
        self.datasets.iter().map(|(key, _)| key.to_owned()).collect()
    }

    fn read(
        &mut self,
        key: &str,
    ) -> Result<TensorData, Error> {
        self.datasets
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, data)| data.to_owned())
            .ok_or_else(|| Error::UnknownDataset(key.to_owned()))
    }
}

/// An archive of a depth image file and a color image file.
///
/// ## Details
///
/// * `"depth"` - `[H, W]`, the 8-bit or 16-bit luma values multiplied by `depth_scale`
/// * `"rgb"` - `[3, H, W]`, the 8-bit color values
#[derive(Clone, Debug, PartialEq)]
pub struct ImageArchive {
    pub depth_path: PathBuf,
    pub depth_scale: f64,
    pub image_path: PathBuf,
}

impl ImageArchive {
    pub const KEY_DEPTH: &'static str = "depth";
    pub const KEY_IMAGE: &'static str = "rgb";

    #[inline]
    pub fn new(
        depth_path: impl Into<PathBuf>,
        image_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            depth_path: depth_path.into(),
            depth_scale: 1.0,
            image_path: image_path.into(),
        }
    }

    #[inline]
    pub fn with_depth_scale(
        mut self,
        depth_scale: f64,
    ) -> Self {
        self.depth_scale = depth_scale;
        self
    }
}

impl Archive for ImageArchive {
    fn keys(&self) -> Vec<String> {
        vec![Self::KEY_DEPTH.into(), Self::KEY_IMAGE.into()]
    }

    fn read(
        &mut self,
        key: &str,
    ) -> Result<TensorData, Error> {
        match key {
            Self::KEY_DEPTH => {
                let depth = image::open(&self.depth_path)?;
                let (width, height) = (depth.width(), depth.height());
                let color = depth.color();

                // NOTE: 8-bit depths are read as they are, not widened to 16 bits.
                let values: Vec<f64> = if color.bytes_per_pixel() == color.channel_count() {
                    depth.into_luma8().into_raw().into_iter().map(f64::from).collect()
                } else {
                    depth.into_luma16().into_raw().into_iter().map(f64::from).collect()
                };
                let values: Vec<f32> = values
                    .into_iter()
                    .map(|value| (value * self.depth_scale) as f32)
                    .collect();

                Ok(TensorData::new(values, [height as usize, width as usize]))
            },
            Self::KEY_IMAGE => {
                let image = image::open(&self.image_path)?.into_rgb8();
                let (width, height) = image.dimensions();
                let (width, height) = (width as usize, height as usize);

                // [H, W, 3] -> [3, H, W]
                let raw = image.into_raw();
                let values = (0..3)
                    .flat_map(|channel| {
                        raw.iter().skip(channel).step_by(3).map(|&v| v as f32)
                    })
                    .collect();

                Ok(TensorData::new(values, [3, height, width]))
            },
            _ => Err(Error::UnknownDataset(key.to_owned())),
        }
    }
}
