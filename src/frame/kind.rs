use serde::Deserialize;
use serde::Serialize;

/// Storage type of a column.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Domain index into a sorted list of labels.
    Categorical,
    Integer,
    Real,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Categorical => write!(f, "categorical"),
            Self::Integer => write!(f, "integer"),
            Self::Real => write!(f, "real"),
        }
    }
}
