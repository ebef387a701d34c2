use crate::ID;
use crate::Row;
use crate::Value;
use crate::frame::Frame;
use crate::frame::FrameKey;
use serde::Serialize;

/// A fitted affine predictor `intercept + slope * predictor` of the response.
/// Constant models have no predictor.
#[derive(Debug, Clone, Serialize)]
pub struct Model {
    id: ID<Model>,
    algo: String,
    train: FrameKey,
    response: String,
    predictor: Option<String>,
    intercept: Value,
    slope: Value,
    nobs: usize,
    train_mse: Option<Value>,
    valid_mse: Option<Value>,
}

impl Model {
    pub fn constant(algo: &str, train: &Frame, response: &str, intercept: Value, nobs: usize) -> Self {
        Self {
            id: ID::default(),
            algo: algo.to_string(),
            train: train.key().clone(),
            response: response.to_string(),
            predictor: None,
            intercept,
            slope: 0.0,
            nobs,
            train_mse: None,
            valid_mse: None,
        }
    }
    pub fn affine(
        algo: &str,
        train: &Frame,
        response: &str,
        predictor: &str,
        (intercept, slope): (Value, Value),
        nobs: usize,
    ) -> Self {
        Self {
            id: ID::default(),
            algo: algo.to_string(),
            train: train.key().clone(),
            response: response.to_string(),
            predictor: Some(predictor.to_string()),
            intercept,
            slope,
            nobs,
            train_mse: None,
            valid_mse: None,
        }
    }
    /// Attach the mean squared error on the training and validation frames.
    pub fn scored(mut self, train: &Frame, valid: Option<&Frame>) -> Self {
        self.train_mse = self.mse(train);
        self.valid_mse = valid.and_then(|v| self.mse(v));
        self
    }

    pub fn id(&self) -> ID<Model> {
        self.id
    }
    pub fn algo(&self) -> &str {
        &self.algo
    }
    pub fn train(&self) -> &FrameKey {
        &self.train
    }
    pub fn intercept(&self) -> Value {
        self.intercept
    }
    pub fn slope(&self) -> Value {
        self.slope
    }
    pub fn nobs(&self) -> usize {
        self.nobs
    }
    pub fn train_mse(&self) -> Option<Value> {
        self.train_mse
    }
    pub fn valid_mse(&self) -> Option<Value> {
        self.valid_mse
    }

    /// Prediction for one row, NaN when an input is missing or absent.
    pub fn predict(&self, frame: &Frame, row: Row) -> Value {
        match &self.predictor {
            None => self.intercept,
            Some(name) => frame
                .vec(name)
                .map_or(Value::NAN, |x| self.intercept + self.slope * x.at(row)),
        }
    }
    /// Mean squared error over rows with a response and a prediction.
    pub fn mse(&self, frame: &Frame) -> Option<Value> {
        let y = frame.vec(&self.response)?;
        let (n, sse) = (0..frame.nrows())
            .map(|r| (y.at(r), self.predict(frame, r)))
            .filter(|(y, p)| !y.is_nan() && !p.is_nan())
            .fold((0usize, 0.0), |(n, sse), (y, p)| (n + 1, sse + (y - p).powi(2)));
        match n {
            0 => None,
            n => Some(sse / n as Value),
        }
    }
}
