pub use super::*;
pub use burn::{config::Config, optim::AdamConfig};

use std::path::Path;

#[derive(Config, Debug)]
pub struct DepthTrainerConfig {
    /// The target count of epochs in total.
    pub epochs: usize,

    #[config(default = "1e-4")]
    pub learning_rate: f64,

    #[config(default = "AdamConfig::new()")]
    pub optimizer_adam: AdamConfig,
}

impl DepthTrainerConfig {
    /// Initializing the trainer to start from the first epoch.
    pub fn init<AB: AutodiffBackend, M: AutodiffModule<AB>>(
        &self,
        model: M,
    ) -> DepthTrainer<AB, M> {
        DepthTrainer {
            config: self.to_owned(),
            epoch_start: 0,
            loss_meter: Default::default(),
            model,
            optimizer: self.optimizer_adam.init(),
        }
    }

    /// Initializing the trainer, or resuming it from the checkpoint if any.
    ///
    /// ## Arguments
    ///
    /// * `model` - The initialized model.
    /// * `checkpoint` - The path to the checkpoint file.
    ///
    /// ## Returns
    ///
    /// The trainer whose `epoch_start` is `0` or
    /// the count of epochs completed in the checkpoint.
    ///
    /// ## Errors
    ///
    /// * [`Error::Record`] if the checkpoint cannot be loaded.
    /// * [`Error::EpochsCompleted`] if the checkpoint has completed
    ///   [`DepthTrainerConfig::epochs`].
    pub fn init_or_load<AB: AutodiffBackend, M: AutodiffModule<AB>>(
        &self,
        model: M,
        checkpoint: Option<&Path>,
        device: &AB::Device,
    ) -> Result<DepthTrainer<AB, M>, Error> {
        let trainer = self.init(model);
        let Some(path) = checkpoint else {
            return Ok(trainer);
        };

        let checkpoint = DepthCheckpoint::<AB, M>::load::<AB>(path, device)?;
        let epoch_start = checkpoint.epochs_completed();
        let (model, optimizer, _) = checkpoint
            .resume::<AB, M, AdamOptimizer<AB, M>>(
                trainer.model,
                trainer.optimizer,
                self.epochs,
            )?;

        #[cfg(debug_assertions)]
        log::debug!(
            target: "densedepth::trainer::train",
            "DepthTrainerConfig::init_or_load > epoch_start {epoch_start}",
        );

        Ok(DepthTrainer {
            epoch_start,
            model,
            optimizer,
            ..trainer
        })
    }
}
