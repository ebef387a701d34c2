use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warn,
    Error,
}

/// A validation finding about one field of a trainer's configuration.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub severity: Severity,
    pub field: String,
    pub text: String,
}

impl Message {
    pub fn error(field: &str, text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field: field.to_string(),
            text: text.into(),
        }
    }
    pub fn warn(field: &str, text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warn,
            field: field.to_string(),
            text: text.into(),
        }
    }
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.text)
    }
}
