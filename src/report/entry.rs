use super::*;
use crate::Segment;
use crate::segment::SegmentKeys;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value as Json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Succeeded,
    Failed,
}

/// One row of the caller-facing report.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    pub segment: Segment,
    pub key: Map<String, Json>,
    pub model: Option<String>,
    pub status: Status,
    pub errors: Option<String>,
    pub warnings: Option<String>,
}

impl From<(&SegmentKeys, Segment, &Outcome)> for Entry {
    fn from((keys, segment, outcome): (&SegmentKeys, Segment, &Outcome)) -> Self {
        let warnings = outcome
            .warnings()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        Self {
            segment,
            key: keys
                .names()
                .into_iter()
                .map(str::to_string)
                .zip(keys.describe(segment))
                .collect(),
            model: outcome.model().map(|m| m.id().to_string()),
            status: match outcome.is_trained() {
                true => Status::Succeeded,
                false => Status::Failed,
            },
            errors: outcome.failure().map(ToString::to_string),
            warnings: match warnings.is_empty() {
                true => None,
                false => Some(warnings.join("; ")),
            },
        }
    }
}
