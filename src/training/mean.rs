use super::*;
use crate::Value;
use crate::frame::Frame;
use std::sync::Arc;

/// Predicts the mean response of the segment.
#[derive(Default)]
pub struct MeanTrainer {
    parms: Option<Blueprint>,
    train: Option<Arc<Frame>>,
    valid: Option<Arc<Frame>>,
}

impl MeanTrainer {
    pub const ALGO: &'static str = "mean";
}

impl Trainer for MeanTrainer {
    fn configure(&mut self, parms: &Blueprint, train: Arc<Frame>, valid: Option<Arc<Frame>>) {
        self.parms = Some(parms.clone());
        self.train = Some(train);
        self.valid = valid;
    }
    fn validate(&mut self) -> Vec<Message> {
        match &self.parms {
            None => vec![Message::error("parms", "trainer was not configured")],
            Some(parms) => check_response(parms, self.train.as_deref(), self.valid.as_deref(), &[]),
        }
    }
    fn train(&mut self) -> anyhow::Result<Model> {
        let parms = self.parms.as_ref().ok_or_else(|| anyhow::anyhow!("trainer was not configured"))?;
        let train = self.train.as_ref().ok_or_else(|| anyhow::anyhow!("trainer was not configured"))?;
        let y = train
            .vec(&parms.response)
            .ok_or_else(|| anyhow::anyhow!("response {:?} not found", parms.response))?;
        let (n, sum) = y
            .values()
            .iter()
            .filter(|v| !v.is_nan())
            .fold((0usize, 0.0), |(n, s), v| (n + 1, s + v));
        match n {
            0 => Err(anyhow::anyhow!("response {:?} has no values", parms.response)),
            n => Ok(Model::constant(Self::ALGO, train, &parms.response, sum / n as Value, n)
                .scored(train, self.valid.as_deref())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Column;

    #[test]
    fn fits_mean() {
        let train = Arc::new(Frame::new("t", vec![Column::real("y", vec![1.0, Value::NAN, 5.0])]));
        let valid = Arc::new(Frame::new("v", vec![Column::real("y", vec![4.0])]));
        let ref mut trainer = MeanTrainer::default();
        trainer.configure(&Blueprint::new("mean", "t", "y"), train, Some(valid));
        assert!(trainer.validate().is_empty());
        let model = trainer.train().unwrap();
        assert_eq!(model.intercept(), 3.0);
        assert_eq!(model.nobs(), 2);
        assert_eq!(model.train_mse(), Some(4.0));
        assert_eq!(model.valid_mse(), Some(1.0));
    }

    #[test]
    fn empty_segment_fails_validation() {
        let train = Arc::new(Frame::new("t", vec![Column::real("y", vec![])]));
        let ref mut trainer = MeanTrainer::default();
        trainer.configure(&Blueprint::new("mean", "t", "y"), train, None);
        assert_eq!(error_count(&trainer.validate()), 1);
        assert!(trainer.train().is_err());
    }
}
