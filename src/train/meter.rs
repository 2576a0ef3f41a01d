/// A running average of values, such as the losses of batches.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AverageMeter {
    pub average: f64,
    pub count: u64,
    pub sum: f64,
    /// The last value.
    pub value: f64,
}

impl AverageMeter {
    #[inline]
    pub fn reset(&mut self) -> &mut Self {
        *self = Self::default();
        self
    }

    /// Updating the meter with the value weighted by `count`.
    pub fn update(
        &mut self,
        value: f64,
        count: u64,
    ) -> &mut Self {
        self.value = value;
        self.sum += value * count as f64;
        self.count += count;
        if self.count != 0 {
            self.average = self.sum / self.count as f64;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn update() {
        use super::*;

        let mut meter = AverageMeter::default();
        meter.update(2.0, 1).update(4.0, 3);

        assert_eq!(meter.value, 4.0);
        assert_eq!(meter.sum, 14.0);
        assert_eq!(meter.count, 4);
        assert_eq!(meter.average, 3.5);

        meter.update(1.0, 0);
        assert_eq!(meter.value, 1.0);
        assert_eq!(meter.average, 3.5);
    }

    #[test]
    fn reset() {
        use super::*;

        let mut meter = AverageMeter::default();
        meter.update(0.5, 8).reset();
        assert_eq!(meter, AverageMeter::default());

        let mut meter = AverageMeter::default();
        meter.update(0.0, 0);
        assert_eq!(meter.average, 0.0);
    }
}
