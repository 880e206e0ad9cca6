use crate::domain::model::ValueType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LessonError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Step {step}: variable '{name}' is not declared")]
    UndeclaredVariable { step: usize, name: String },

    #[error("Step {step}: variable '{name}' is already declared")]
    DuplicateVariable { step: usize, name: String },

    #[error("Step {step}: cannot assign {found} to '{name}' of type {expected}")]
    TypeMismatch {
        step: usize,
        name: String,
        expected: ValueType,
        found: ValueType,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    TypeCheck,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LessonError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LessonError::IoError(_) | LessonError::TomlSerializeError(_) => ErrorCategory::Output,
            LessonError::ConfigValidationError { .. }
            | LessonError::InvalidConfigValueError { .. }
            | LessonError::MissingConfigError { .. } => ErrorCategory::Configuration,
            LessonError::UndeclaredVariable { .. }
            | LessonError::DuplicateVariable { .. }
            | LessonError::TypeMismatch { .. } => ErrorCategory::TypeCheck,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // A closed stdout pipe (e.g. `| head`) is not worth a failing exit code.
            LessonError::IoError(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                ErrorSeverity::Low
            }
            LessonError::IoError(_) => ErrorSeverity::Critical,
            LessonError::TomlSerializeError(_) => ErrorSeverity::Critical,
            LessonError::ConfigValidationError { .. }
            | LessonError::InvalidConfigValueError { .. }
            | LessonError::MissingConfigError { .. } => ErrorSeverity::High,
            LessonError::UndeclaredVariable { .. }
            | LessonError::DuplicateVariable { .. }
            | LessonError::TypeMismatch { .. } => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            LessonError::IoError(_) => {
                "Check that the lesson file exists and that standard output is writable".to_string()
            }
            LessonError::TomlSerializeError(_) => {
                "The lesson could not be rendered as TOML; report it with the lesson file attached"
                    .to_string()
            }
            LessonError::ConfigValidationError { field, .. } => {
                format!("Fix the '{}' section of the lesson file", field)
            }
            LessonError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
            LessonError::MissingConfigError { field } => {
                format!("Add the required '{}' entry", field)
            }
            LessonError::UndeclaredVariable { name, .. } => {
                format!("Add a `declare` step for '{}' before it is used", name)
            }
            LessonError::DuplicateVariable { name, .. } => {
                format!("Use an `assign` step to change '{}' instead of declaring it again", name)
            }
            LessonError::TypeMismatch { name, expected, .. } => {
                format!("Assign a {} value to '{}'", expected, name)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Lesson configuration problem: {}", self),
            ErrorCategory::TypeCheck => format!("Lesson does not type-check: {}", self),
            ErrorCategory::Output => format!("Could not read or write: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, LessonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_errors_are_high_severity() {
        let err = LessonError::TypeMismatch {
            step: 3,
            name: "a".to_string(),
            expected: ValueType::Int,
            found: ValueType::Text,
        };
        assert_eq!(err.category(), ErrorCategory::TypeCheck);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(
            err.to_string(),
            "Step 3: cannot assign text to 'a' of type int"
        );
        assert!(err.recovery_suggestion().contains("int"));
    }

    #[test]
    fn test_broken_pipe_is_low_severity() {
        let err = LessonError::from(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        assert_eq!(err.severity(), ErrorSeverity::Low);

        let err = LessonError::from(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.category(), ErrorCategory::Output);
    }

    #[test]
    fn test_user_friendly_message_mentions_category() {
        let err = LessonError::MissingConfigError {
            field: "steps".to_string(),
        };
        assert!(err
            .user_friendly_message()
            .starts_with("Lesson configuration problem"));
    }
}
