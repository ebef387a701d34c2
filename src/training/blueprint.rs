use crate::frame::FrameKey;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value as Json;

/// Template training configuration shared by every segment. Only the frame
/// references change from one segment to the next.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blueprint {
    pub algo: String,
    pub train: FrameKey,
    #[serde(default)]
    pub valid: Option<FrameKey>,
    pub response: String,
    #[serde(default)]
    pub hyper: Map<String, Json>,
}

impl Blueprint {
    pub fn new(algo: &str, train: impl Into<FrameKey>, response: &str) -> Self {
        Self {
            algo: algo.to_string(),
            train: train.into(),
            valid: None,
            response: response.to_string(),
            hyper: Map::new(),
        }
    }
    pub fn with_valid(mut self, valid: impl Into<FrameKey>) -> Self {
        self.valid = Some(valid.into());
        self
    }
    pub fn with(mut self, name: &str, value: impl Into<Json>) -> Self {
        self.hyper.insert(name.to_string(), value.into());
        self
    }
    /// Frames the blueprint reads from: train, then valid if any.
    pub fn frames(&self) -> Vec<FrameKey> {
        std::iter::once(self.train.clone())
            .chain(self.valid.clone())
            .collect()
    }
    /// Copy pointing at other frames.
    pub fn substitute(&self, train: FrameKey, valid: Option<FrameKey>) -> Self {
        Self {
            train,
            valid,
            ..self.clone()
        }
    }
    pub fn float(&self, name: &str) -> Option<f64> {
        self.hyper.get(name).and_then(Json::as_f64)
    }
    pub fn count(&self, name: &str) -> Option<usize> {
        self.hyper.get(name).and_then(Json::as_u64).map(|n| n as usize)
    }
    pub fn text(&self, name: &str) -> Option<&str> {
        self.hyper.get(name).and_then(Json::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitute_keeps_hyper() {
        let parms = Blueprint::new("linear", "train", "y")
            .with_valid("valid")
            .with("predictor", "x")
            .with("lambda", 0.5);
        let seg = parms.substitute("train_segment_1".into(), None);
        assert_eq!(seg.train.as_str(), "train_segment_1");
        assert!(seg.valid.is_none());
        assert_eq!(seg.text("predictor"), Some("x"));
        assert_eq!(seg.float("lambda"), Some(0.5));
        assert_eq!(parms.frames().len(), 2);
        assert_eq!(seg.frames().len(), 1);
    }

    #[test]
    fn parse_json() {
        let parms = serde_json::from_str::<Blueprint>(
            r#"{"algo":"mean","train":"t","response":"y","hyper":{"min_rows":3}}"#,
        )
        .unwrap();
        assert_eq!(parms.count("min_rows"), Some(3));
        assert!(parms.valid.is_none());
        assert_eq!(parms.count("missing"), None);
    }
}
