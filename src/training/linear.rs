use super::*;
use crate::Value;
use crate::frame::Frame;
use std::sync::Arc;

/// Ridge-regularized least squares of the response on a single `predictor`
/// column. `lambda` (default 0) shrinks the slope towards zero.
#[derive(Default)]
pub struct LinearTrainer {
    parms: Option<Blueprint>,
    train: Option<Arc<Frame>>,
    valid: Option<Arc<Frame>>,
}

impl LinearTrainer {
    pub const ALGO: &'static str = "linear";
}

impl Trainer for LinearTrainer {
    fn configure(&mut self, parms: &Blueprint, train: Arc<Frame>, valid: Option<Arc<Frame>>) {
        self.parms = Some(parms.clone());
        self.train = Some(train);
        self.valid = valid;
    }
    fn validate(&mut self) -> Vec<Message> {
        let Some(parms) = &self.parms else {
            return vec![Message::error("parms", "trainer was not configured")];
        };
        let Some(predictor) = parms.text("predictor") else {
            return vec![Message::error("predictor", "linear models need a predictor column")];
        };
        let mut messages = check_response(parms, self.train.as_deref(), self.valid.as_deref(), &[predictor]);
        match parms.float("lambda") {
            Some(l) if l < 0.0 || l.is_nan() => messages.push(Message::error("lambda", "must be non-negative")),
            None if parms.hyper.contains_key("lambda") => messages.push(Message::error("lambda", "must be a number")),
            _ => {}
        }
        messages
    }
    fn train(&mut self) -> anyhow::Result<Model> {
        let parms = self.parms.as_ref().ok_or_else(|| anyhow::anyhow!("trainer was not configured"))?;
        let train = self.train.as_ref().ok_or_else(|| anyhow::anyhow!("trainer was not configured"))?;
        let name = parms
            .text("predictor")
            .ok_or_else(|| anyhow::anyhow!("linear models need a predictor column"))?;
        let lambda = parms.float("lambda").unwrap_or(0.0);
        let x = train.vec(name).ok_or_else(|| anyhow::anyhow!("predictor {:?} not found", name))?;
        let y = train
            .vec(&parms.response)
            .ok_or_else(|| anyhow::anyhow!("response {:?} not found", parms.response))?;
        let points = x
            .values()
            .iter()
            .zip(y.values())
            .filter(|(x, y)| !x.is_nan() && !y.is_nan())
            .map(|(x, y)| (*x, *y))
            .collect::<Vec<(Value, Value)>>();
        let n = points.len() as Value;
        let xbar = points.iter().map(|(x, _)| x).sum::<Value>() / n;
        let ybar = points.iter().map(|(_, y)| y).sum::<Value>() / n;
        let sxx = points.iter().map(|(x, _)| (x - xbar).powi(2)).sum::<Value>() + lambda;
        let sxy = points.iter().map(|(x, y)| (x - xbar) * (y - ybar)).sum::<Value>();
        match (points.len(), sxx > 0.0) {
            (0, _) => Err(anyhow::anyhow!("no rows with both {:?} and {:?}", name, parms.response)),
            (_, false) => Err(anyhow::anyhow!("predictor {:?} is constant within the segment", name)),
            (nobs, true) => {
                let slope = sxy / sxx;
                let intercept = ybar - slope * xbar;
                Ok(Model::affine(Self::ALGO, train, &parms.response, name, (intercept, slope), nobs)
                    .scored(train, self.valid.as_deref()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Column;

    fn frame(xs: Vec<Value>) -> Arc<Frame> {
        let ys = xs.iter().map(|x| 3.0 * x - 1.0).collect();
        Arc::new(Frame::new("t", vec![Column::real("x", xs), Column::real("y", ys)]))
    }

    #[test]
    fn recovers_line() {
        let ref mut trainer = LinearTrainer::default();
        let parms = Blueprint::new("linear", "t", "y").with("predictor", "x");
        trainer.configure(&parms, frame(vec![0.0, 1.0, 2.0, 3.0]), None);
        assert!(trainer.validate().is_empty());
        let model = trainer.train().unwrap();
        assert!((model.slope() - 3.0).abs() < 1e-9);
        assert!((model.intercept() + 1.0).abs() < 1e-9);
        assert!(model.train_mse().unwrap() < 1e-12);
    }

    #[test]
    fn ridge_shrinks_slope() {
        let ref mut trainer = LinearTrainer::default();
        let parms = Blueprint::new("linear", "t", "y").with("predictor", "x").with("lambda", 5.0);
        trainer.configure(&parms, frame(vec![0.0, 1.0, 2.0, 3.0]), None);
        let model = trainer.train().unwrap();
        assert!(model.slope() < 3.0 && model.slope() > 0.0);
    }

    #[test]
    fn constant_predictor_fails_training() {
        let ref mut trainer = LinearTrainer::default();
        let parms = Blueprint::new("linear", "t", "y").with("predictor", "x");
        trainer.configure(&parms, frame(vec![2.0, 2.0]), None);
        assert!(trainer.validate().is_empty());
        assert!(trainer.train().is_err());
    }

    #[test]
    fn configuration_errors() {
        let ref mut trainer = LinearTrainer::default();
        trainer.configure(&Blueprint::new("linear", "t", "y"), frame(vec![1.0]), None);
        assert_eq!(error_count(&trainer.validate()), 1);
        let parms = Blueprint::new("linear", "t", "y").with("predictor", "x").with("lambda", -1.0);
        trainer.configure(&parms, frame(vec![1.0]), None);
        assert_eq!(error_count(&trainer.validate()), 1);
        let parms = Blueprint::new("linear", "t", "y").with("predictor", "z");
        trainer.configure(&parms, frame(vec![1.0]), None);
        assert_eq!(error_count(&trainer.validate()), 1);
    }
}
