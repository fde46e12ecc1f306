use thiserror::Error;

/// Contract violations by caller-supplied task code.
///
/// A task must report through its completion handle exactly once. Breaking
/// that contract is a programming error, not a domain error: it is never
/// delivered through the normal completion path. Coordinators panic with
/// one of these as the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// A completion handle was fired more than once.
    #[error("task {task} reported completion more than once")]
    DoubleReport { task: String },

    /// A task dropped its completion handle without reporting.
    #[error("task {task} was dropped without reporting completion")]
    Abandoned { task: String },
}

impl Violation {
    pub fn double_report<S: Into<String>>(task: S) -> Self {
        Self::DoubleReport { task: task.into() }
    }

    pub fn abandoned<S: Into<String>>(task: S) -> Self {
        Self::Abandoned { task: task.into() }
    }

    /// Violation kind for logging.
    pub fn category(&self) -> &'static str {
        match self {
            Self::DoubleReport { .. } => "double_report",
            Self::Abandoned { .. } => "abandoned",
        }
    }
}
