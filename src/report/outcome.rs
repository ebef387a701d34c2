use super::*;
use crate::training::Message;
use crate::training::Model;
use std::sync::Arc;

/// Result of one segment: a trained model or a failure, with any warnings
/// the trainer raised while validating.
#[derive(Debug, Clone)]
pub enum Outcome {
    Trained { model: Arc<Model>, warnings: Vec<Message> },
    Failed { failure: Failure, warnings: Vec<Message> },
}

impl Outcome {
    pub fn trained(model: Model) -> Self {
        Self::Trained {
            model: Arc::new(model),
            warnings: Vec::new(),
        }
    }
    pub fn failed(failure: Failure) -> Self {
        Self::Failed {
            failure,
            warnings: Vec::new(),
        }
    }
    /// Attach the warning-level messages, dropping errors.
    pub fn warned(self, messages: &[Message]) -> Self {
        let warned = messages.iter().filter(|m| !m.is_error()).cloned().collect();
        match self {
            Self::Trained { model, .. } => Self::Trained { model, warnings: warned },
            Self::Failed { failure, .. } => Self::Failed { failure, warnings: warned },
        }
    }
    pub fn model(&self) -> Option<&Arc<Model>> {
        match self {
            Self::Trained { model, .. } => Some(model),
            Self::Failed { .. } => None,
        }
    }
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Trained { .. } => None,
            Self::Failed { failure, .. } => Some(failure),
        }
    }
    pub fn warnings(&self) -> &[Message] {
        match self {
            Self::Trained { warnings, .. } => warnings,
            Self::Failed { warnings, .. } => warnings,
        }
    }
    pub fn is_trained(&self) -> bool {
        matches!(self, Self::Trained { .. })
    }
}
