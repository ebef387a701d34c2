/// Where a segment job currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Inputs validated, not started yet.
    Validating,
    Locking,
    Iterating,
    Extracting,
    Training,
    Recording,
    Releasing,
    Unlocking,
    Done,
    Cancelled,
    /// Ended by a run-level fault.
    Failed,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Cancelled | Self::Failed)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validating => write!(f, "validating"),
            Self::Locking => write!(f, "locking"),
            Self::Iterating => write!(f, "iterating"),
            Self::Extracting => write!(f, "extracting"),
            Self::Training => write!(f, "training"),
            Self::Recording => write!(f, "recording"),
            Self::Releasing => write!(f, "releasing"),
            Self::Unlocking => write!(f, "unlocking"),
            Self::Done => write!(f, "done"),
            Self::Cancelled => write!(f, "cancelled"),
            Self::Failed => write!(f, "failed"),
        }
    }
}
