use crate::training::Message;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FailureKind {
    /// The trainer rejected the segment's configuration; no training ran.
    Configuration,
    /// Training ran and returned an error or panicked.
    Training,
}

/// Why one segment has no model.
#[derive(Debug, Clone, Serialize)]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
}

impl Failure {
    pub fn configuration(messages: &[Message]) -> Self {
        Self {
            kind: FailureKind::Configuration,
            message: messages
                .iter()
                .filter(|m| m.is_error())
                .map(Message::to_string)
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
    pub fn training(error: &anyhow::Error) -> Self {
        Self {
            kind: FailureKind::Training,
            message: format!("{:#}", error),
        }
    }
    /// From the payload of a caught panic.
    pub fn panic(payload: &(dyn std::any::Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "trainer panicked".to_string());
        Self {
            kind: FailureKind::Training,
            message,
        }
    }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_lists_errors_only() {
        let failure = Failure::configuration(&[
            Message::error("response", "missing"),
            Message::warn("valid", "empty"),
            Message::error("min_rows", "too few"),
        ]);
        assert_eq!(failure.kind, FailureKind::Configuration);
        assert_eq!(failure.message, "response: missing; min_rows: too few");
    }

    #[test]
    fn training_keeps_context() {
        let error = anyhow::anyhow!("singular").context("fitting segment");
        let failure = Failure::training(&error);
        assert_eq!(failure.message, "fitting segment: singular");
    }

    #[test]
    fn panic_payloads() {
        let caught = std::panic::catch_unwind(|| panic!("boom {}", 1)).unwrap_err();
        assert_eq!(Failure::panic(caught.as_ref()).message, "boom 1");
        let caught = std::panic::catch_unwind(|| panic!("static")).unwrap_err();
        assert_eq!(Failure::panic(caught.as_ref()).message, "static");
    }
}
