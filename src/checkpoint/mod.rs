//! Training checkpoints.

pub use crate::error::Error;
pub use burn::{
    module::{AutodiffModule, Module},
    optim::Optimizer,
    record::{
        FullPrecisionSettings, NamedMpkFileRecorder, PrecisionSettings, Record,
        Recorder,
    },
    tensor::backend::{AutodiffBackend, Backend},
};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The file recorder of [`TrainingCheckpoint`].
pub type CheckpointRecorder = NamedMpkFileRecorder<FullPrecisionSettings>;

/// A snapshot to resume training from.
///
/// ## Details
///
/// * `model` - The record of the model.
/// * `optimizer` - The record of the optimizer.
/// * `epoch` - The index of the last completed epoch, starting from `0`.
#[derive(Clone, Debug)]
pub struct TrainingCheckpoint<M, O> {
    pub model: M,
    pub optimizer: O,
    pub epoch: usize,
}

/// The serializable item of [`TrainingCheckpoint`].
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TrainingCheckpointItem<M, O> {
    pub model: M,
    pub optimizer: O,
    pub epoch: usize,
}

impl<B: Backend, M: Record<B>, O: Record<B>> Record<B> for TrainingCheckpoint<M, O> {
    type Item<S: PrecisionSettings> =
        TrainingCheckpointItem<M::Item<S>, O::Item<S>>;

    fn into_item<S: PrecisionSettings>(self) -> Self::Item<S> {
        TrainingCheckpointItem {
            model: self.model.into_item(),
            optimizer: self.optimizer.into_item(),
            epoch: self.epoch,
        }
    }

    fn from_item<S: PrecisionSettings>(
        item: Self::Item<S>,
        device: &B::Device,
    ) -> Self {
        Self {
            model: M::from_item(item.model, device),
            optimizer: O::from_item(item.optimizer, device),
            epoch: item.epoch,
        }
    }
}

impl<M, O> TrainingCheckpoint<M, O> {
    /// ## Returns
    ///
    /// The count of epochs completed in the checkpoint, `epoch + 1`,
    /// saturated at [`usize::MAX`].
    #[inline]
    pub fn epochs_completed(&self) -> usize {
        self.epoch.saturating_add(1)
    }

    /// ## Arguments
    ///
    /// * `epochs` - The target count of epochs in total.
    ///
    /// ## Returns
    ///
    /// The count of epochs remaining, `epochs - (epoch + 1)`.
    ///
    /// ## Errors
    ///
    /// [`Error::EpochsCompleted`] if no epoch remains.
    pub fn epochs_remaining(
        &self,
        epochs: usize,
    ) -> Result<usize, Error> {
        let epochs_remaining = epochs as i128 - (self.epoch as i128 + 1);
        if epochs_remaining <= 0 {
            return Err(Error::EpochsCompleted(epochs, self.epochs_completed()));
        }

        Ok(epochs_remaining as usize)
    }

    /// Restoring the model and the optimizer from the checkpoint.
    ///
    /// ## Returns
    ///
    /// `(model, optimizer, epochs_remaining)`
    ///
    /// ## Errors
    ///
    /// [`Error::EpochsCompleted`] if no epoch remains,
    /// in which case nothing is restored.
    pub fn resume<AB, MM, OO>(
        self,
        model: MM,
        optimizer: OO,
        epochs: usize,
    ) -> Result<(MM, OO, usize), Error>
    where
        AB: AutodiffBackend,
        MM: AutodiffModule<AB> + Module<AB, Record = M>,
        OO: Optimizer<MM, AB, Record = O>,
    {
        let epochs_remaining = self.epochs_remaining(epochs)?;
        let model = model.load_record(self.model);
        let optimizer = optimizer.load_record(self.optimizer);

        #[cfg(debug_assertions)]
        log::debug!(
            target: "densedepth::trainer::checkpoint",
            "TrainingCheckpoint::resume > epoch {} of {epochs}",
            self.epoch,
        );

        Ok((model, optimizer, epochs_remaining))
    }

    /// Loading the checkpoint from the file.
    ///
    /// ## Details
    ///
    /// The file extension is always replaced with `mpk`.
    pub fn load<B: Backend>(
        path: impl Into<PathBuf>,
        device: &B::Device,
    ) -> Result<Self, Error>
    where
        Self: Record<B>,
    {
        let path = path.into();
        let checkpoint =
            Recorder::<B>::load(&CheckpointRecorder::new(), path.to_owned(), device)?;

        #[cfg(debug_assertions)]
        log::debug!(
            target: "densedepth::trainer::checkpoint",
            "TrainingCheckpoint::load > {}",
            path.display(),
        );

        Ok(checkpoint)
    }

    /// Saving the checkpoint to the file.
    ///
    /// ## Details
    ///
    /// The file extension is always replaced with `mpk`.
    pub fn save<B: Backend>(
        self,
        path: impl Into<PathBuf>,
    ) -> Result<(), Error>
    where
        Self: Record<B>,
    {
        let path = path.into();

        #[cfg(debug_assertions)]
        log::debug!(
            target: "densedepth::trainer::checkpoint",
            "TrainingCheckpoint::save > {}",
            path.display(),
        );

        Recorder::<B>::record(&CheckpointRecorder::new(), self, path)?;

        Ok(())
    }
}
