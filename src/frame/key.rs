use crate::Segment;
use serde::Deserialize;
use serde::Serialize;

/// Name addressing a frame in the [`Catalog`](super::Catalog).
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameKey(String);

impl FrameKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
    /// Deterministic name of this frame's partition for one segment.
    pub fn segment(&self, index: Segment) -> Self {
        Self(format!("{}{}{}", self.0, crate::SEGMENT_SUFFIX, index))
    }
}

impl From<&str> for FrameKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
impl From<String> for FrameKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}
impl From<&FrameKey> for FrameKey {
    fn from(k: &FrameKey) -> Self {
        k.clone()
    }
}

impl std::fmt::Display for FrameKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_names_are_distinct() {
        let key = FrameKey::from("train");
        assert_eq!(key.segment(0).as_str(), "train_segment_0");
        assert_eq!(key.segment(12).as_str(), "train_segment_12");
        assert!(key.segment(1) != key.segment(11));
    }
}
