pub mod config;
pub mod meter;

pub use crate::checkpoint::{
    AutodiffBackend, AutodiffModule, Error, Module, Optimizer, TrainingCheckpoint,
};
pub use burn::tensor::Tensor;
pub use config::*;
pub use meter::*;

use burn::{
    optim::{adaptor::OptimizerAdaptor, Adam, GradientsParams},
    tensor::ElementConversion,
};
use std::{fmt, path::PathBuf};

pub type AdamOptimizer<AB, M> =
    OptimizerAdaptor<Adam<<AB as AutodiffBackend>::InnerBackend>, M, AB>;

/// The checkpoint of [`DepthTrainer`].
pub type DepthCheckpoint<AB, M> = TrainingCheckpoint<
    <M as Module<AB>>::Record,
    <AdamOptimizer<AB, M> as Optimizer<M, AB>>::Record,
>;

pub struct DepthTrainer<AB: AutodiffBackend, M: AutodiffModule<AB>> {
    pub config: DepthTrainerConfig,
    /// The index of the first epoch to run.
    pub epoch_start: usize,
    pub loss_meter: AverageMeter,
    pub model: M,
    pub optimizer: AdamOptimizer<AB, M>,
}

impl<AB: AutodiffBackend, M: AutodiffModule<AB>> DepthTrainer<AB, M> {
    #[inline]
    pub fn epochs_remaining(&self) -> usize {
        self.config.epochs.saturating_sub(self.epoch_start)
    }

    /// Stepping the optimizer with the gradients of the loss.
    ///
    /// ## Arguments
    ///
    /// * `loss` - The loss of the batch with shape `[1]`.
    /// * `batch_size` - The weight of the loss in [`DepthTrainer::loss_meter`].
    pub fn optimize(
        &mut self,
        loss: Tensor<AB, 1>,
        batch_size: usize,
    ) -> &mut Self {
        let loss_value = loss.to_owned().into_scalar().elem::<f64>();
        let grads = GradientsParams::from_grads(loss.backward(), &self.model);
        self.model = self.optimizer.step(
            self.config.learning_rate,
            self.model.to_owned(),
            grads,
        );
        self.loss_meter.update(loss_value, batch_size as u64);

        #[cfg(debug_assertions)]
        log::debug!(
            target: "densedepth::trainer::train",
            "DepthTrainer::optimize > loss {loss_value}",
        );

        self
    }

    /// ## Arguments
    ///
    /// * `epoch` - The index of the last completed epoch.
    pub fn checkpoint(
        &self,
        epoch: usize,
    ) -> DepthCheckpoint<AB, M> {
        TrainingCheckpoint {
            model: self.model.to_owned().into_record(),
            optimizer: self.optimizer.to_record(),
            epoch,
        }
    }

    /// Saving the checkpoint of `epoch` to the file.
    ///
    /// ## Details
    ///
    /// The file extension is always replaced with `mpk`.
    pub fn save_checkpoint(
        &self,
        epoch: usize,
        path: impl Into<PathBuf>,
    ) -> Result<(), Error> {
        self.checkpoint(epoch).save::<AB>(path)
    }
}

impl<AB: AutodiffBackend, M: AutodiffModule<AB>> fmt::Debug for DepthTrainer<AB, M> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("DepthTrainer")
            .field("config", &self.config)
            .field("epoch_start", &self.epoch_start)
            .field("loss_meter", &self.loss_meter)
            .field("model.num_params()", &self.model.num_params())
            .field("optimizer", &format!("Adam<{}>", AB::name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::{
        backend::{Autodiff, NdArray},
        nn::{Initializer, Linear, LinearConfig},
    };

    type AB = Autodiff<NdArray>;

    fn model() -> Linear<AB> {
        LinearConfig::new(3, 1)
            .with_initializer(Initializer::Constant { value: 1.0 })
            .init(&Default::default())
    }

    #[test]
    fn init() {
        let trainer = DepthTrainerConfig::new(10).init::<AB, _>(model());
        assert_eq!(trainer.epoch_start, 0);
        assert_eq!(trainer.epochs_remaining(), 10);
        assert_eq!(trainer.config.learning_rate, 1e-4);
        assert_eq!(trainer.loss_meter, AverageMeter::default());
    }

    #[test]
    fn init_or_load_without_checkpoint() {
        let device = Default::default();

        let trainer = DepthTrainerConfig::new(10)
            .init_or_load::<AB, _>(model(), None, &device)
            .unwrap();
        assert_eq!(trainer.epoch_start, 0);
    }

    #[test]
    fn optimize() {
        let device = Default::default();

        let mut trainer = DepthTrainerConfig::new(1)
            .with_learning_rate(1e-2)
            .init::<AB, _>(model());
        let weight = trainer.model.weight.val().into_data();

        let input = Tensor::<AB, 2>::ones([4, 3], &device);
        let loss = trainer.model.forward(input).powf_scalar(2.0).mean();
        trainer.optimize(loss, 4);

        assert_eq!(trainer.loss_meter.count, 4);
        assert!(trainer.loss_meter.value >= 0.0);
        assert_ne!(
            trainer.model.weight.val().into_data().to_vec::<f32>().unwrap(),
            weight.to_vec::<f32>().unwrap(),
        );
    }

    #[test]
    fn save_checkpoint_and_resume() {
        let device = Default::default();
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("checkpoint");

        let config = DepthTrainerConfig::new(10).with_learning_rate(1e-2);
        let input = Tensor::<AB, 2>::ones([4, 3], &device);

        let mut trainer = config.init::<AB, _>(model());
        let loss = trainer
            .model
            .forward(input.to_owned())
            .powf_scalar(2.0)
            .mean();
        trainer.optimize(loss, 4);
        trainer.save_checkpoint(3, &path).unwrap();

        let mut trainer_resumed = config
            .init_or_load::<AB, _>(model(), Some(path.as_path()), &device)
            .unwrap();
        assert_eq!(trainer_resumed.epoch_start, 4);
        assert_eq!(trainer_resumed.epochs_remaining(), 6);
        assert_eq!(trainer_resumed.optimizer.to_record().len(), 2);
        trainer_resumed
            .model
            .weight
            .val()
            .into_data()
            .assert_approx_eq(&trainer.model.weight.val().into_data(), 6);

        // Without the moments, the next step of Adam moves the weights differently
        let mut trainer_fresh = config.init::<AB, _>(trainer.model.to_owned());

        [&mut trainer, &mut trainer_resumed, &mut trainer_fresh]
            .into_iter()
            .for_each(|trainer| {
                let loss = trainer.model.forward(input.to_owned()).mean().neg();
                trainer.optimize(loss, 4);
            });

        let weight = trainer.model.weight.val().into_data();
        trainer_resumed
            .model
            .weight
            .val()
            .into_data()
            .assert_approx_eq(&weight, 6);

        let weight = weight.to_vec::<f32>().unwrap();
        let weight_fresh = trainer_fresh
            .model
            .weight
            .val()
            .into_data()
            .to_vec::<f32>()
            .unwrap();
        let difference = weight
            .iter()
            .zip(weight_fresh)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0_f32, f32::max);
        assert!(difference > 1e-4, "{difference}");
    }

    #[test]
    fn resume_completed() {
        let device = Default::default();
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("checkpoint");

        let config = DepthTrainerConfig::new(4);
        config
            .init::<AB, _>(model())
            .save_checkpoint(3, &path)
            .unwrap();

        let error = config
            .init_or_load::<AB, _>(model(), Some(path.as_path()), &device)
            .err()
            .unwrap();
        assert!(matches!(error, Error::EpochsCompleted(4, 4)), "{error:?}");
    }

    #[test]
    fn debug() {
        let trainer = DepthTrainerConfig::new(2).init::<AB, _>(model());
        let output = format!("{trainer:?}");
        assert!(output.contains("model.num_params(): 4"), "{output}");
    }
}
