use super::*;
use crate::Segment;
use crate::SegmentError;
use crate::SegmentResult;
use crate::Value;
use crate::frame::Frame;
use crate::frame::Kind;
use serde_json::Value as Json;

/// The validated key frame: one row per segment, every column categorical
/// or integer-valued. Duplicate rows are kept as separate segments.
#[derive(Debug, Clone)]
pub struct SegmentKeys {
    frame: Frame,
}

impl SegmentKeys {
    pub fn new(frame: Frame) -> SegmentResult<Self> {
        let invalid = frame
            .columns()
            .iter()
            .filter(|c| !c.is_categorical() && !c.is_int())
            .map(|c| c.name().to_string())
            .collect::<Vec<_>>();
        match invalid.is_empty() {
            true => Ok(Self { frame }),
            false => Err(SegmentError::Validation(invalid)),
        }
    }
    pub fn frame(&self) -> &Frame {
        &self.frame
    }
    pub fn names(&self) -> Vec<&str> {
        self.frame.names()
    }
    /// Number of segments.
    pub fn len(&self) -> usize {
        self.frame.nrows()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn row(&self, segment: Segment) -> KeyRow {
        KeyRow::from(self.frame.row(segment))
    }

    /// Key row of `segment` expressed in the coordinates of `target`, whose
    /// leading columns are the key columns. Categorical components are
    /// translated through their label; `None` when a label is absent from
    /// the target's domain, so no target row can match.
    pub fn probe(&self, segment: Segment, target: &Frame) -> Option<KeyRow> {
        self.frame
            .columns()
            .iter()
            .zip(target.columns())
            .map(|(key, column)| {
                let value = key.at(segment);
                match (value.is_nan(), key.is_categorical(), column.is_categorical()) {
                    (true, _, _) => Some(Value::NAN),
                    (false, true, true) => key.label(segment).and_then(|l| column.code(l)),
                    _ => Some(value),
                }
            })
            .collect::<Option<Vec<_>>>()
            .map(KeyRow::from)
    }

    /// Caller-facing key values: labels, numbers, or null when missing.
    pub fn describe(&self, segment: Segment) -> Vec<Json> {
        self.frame
            .columns()
            .iter()
            .map(|c| match (c.is_na(segment), c.kind()) {
                (true, _) => Json::Null,
                (false, Kind::Categorical) => c.label(segment).map_or(Json::Null, Json::from),
                (false, _) => Json::from(c.at(segment) as i64),
            })
            .collect()
    }
}
