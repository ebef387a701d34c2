use crate::Segment;
use crate::frame::FrameKey;

/// Run-level faults of a segment job.
///
/// Per-segment problems never show up here; they are recorded in the
/// [`Report`](crate::report::Report) as a [`Failure`](crate::report::Failure).
#[derive(Debug, thiserror::Error)]
pub enum SegmentError {
    #[error("columns to segment by can only be categorical or integer, invalid columns: {0:?}")]
    Validation(Vec<String>),
    #[error("no trainer registered for algorithm {0:?}")]
    UnknownAlgorithm(String),
    #[error("key {0} doesn't point to an existing frame")]
    Resolution(FrameKey),
    #[error("frame {frame} has no column {column:?}")]
    MissingColumn { frame: FrameKey, column: String },
    #[error("job cancelled after {processed} of {total} segments")]
    Cancelled { processed: usize, total: usize },
    #[error("frame {0} is read-locked")]
    Locked(FrameKey),
    #[error("frame {key} is not read-locked by job {job}")]
    NotLocked { key: FrameKey, job: String },
    #[error("frame {0} already exists")]
    Occupied(FrameKey),
    #[error("segment {0} was already recorded")]
    Rerecorded(Segment),
    #[error("segment job aborted: {0}")]
    Aborted(String),
}

impl SegmentError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}

pub type SegmentResult<T> = Result<T, SegmentError>;
