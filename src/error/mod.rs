pub use burn::record::RecorderError;
pub use image::ImageError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Epochs provided: {0}, epochs completed in checkpoint: {1}")]
    EpochsCompleted(usize, usize),

    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    #[error("Invalid tensor data: {0}")]
    InvalidTensorData(String),

    #[error("Mismatched tensor shapes: {0:?} and {1:?}")]
    MismatchedShape(Vec<usize>, Vec<usize>),

    #[error("Missing dataset at index {0} of the archive")]
    MissingDataset(usize),

    #[error("Non-positive or NaN depth value: {0}")]
    NonPositiveDepth(f64),

    #[error("Record error: {0}")]
    Record(#[from] RecorderError),

    #[error("Unknown dataset key: {0}")]
    UnknownDataset(String),
}
