//! One-line operation feedback.

use std::fmt;

/// Severity of an [`OperationStatus`] line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Success,
    Warning,
    Error,
}

impl StatusLevel {
    fn label(&self) -> &'static str {
        match self {
            StatusLevel::Success => "Success:",
            StatusLevel::Warning => "Warning:",
            StatusLevel::Error => "Error:",
        }
    }
}

/// A labelled feedback message, e.g. after clearing a session or when a
/// generation result was superseded.
pub struct OperationStatus {
    pub message: String,
    pub level: StatusLevel,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: StatusLevel::Success,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: StatusLevel::Warning,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: StatusLevel::Error,
        }
    }

    pub fn is_success(&self) -> bool {
        self.level == StatusLevel::Success
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.level.label(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Session cleared");
        assert_eq!(success.to_string(), "Success: Session cleared\n");
        assert!(success.is_success());

        let warning = OperationStatus::warning("Result superseded");
        assert!(warning.to_string().starts_with("Warning:"));

        let failure = OperationStatus::failure("Generation failed");
        assert!(failure.to_string().starts_with("Error:"));
        assert!(!failure.is_success());
    }
}
