use crate::domain::model::{Operand, Step};
use crate::utils::error::{LessonError, Result};
use regex::Regex;
use std::sync::OnceLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn identifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern is valid")
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LessonError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_identifier(field_name: &str, name: &str) -> Result<()> {
    if !identifier_pattern().is_match(name) {
        return Err(LessonError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Variable names must start with a letter or '_' and contain only letters, digits and '_'"
                .to_string(),
        });
    }
    Ok(())
}

pub fn validate_steps(steps: &[Step]) -> Result<()> {
    if steps.is_empty() {
        return Err(LessonError::MissingConfigError {
            field: "steps".to_string(),
        });
    }

    for (idx, step) in steps.iter().enumerate() {
        let field = format!("steps[{}]", idx + 1);
        if let Some(name) = step.target() {
            validate_identifier(&field, name)?;
        }
        let parts: &[Operand] = match step {
            Step::Print { parts, .. } | Step::Concat { parts, .. } => parts,
            Step::Declare { .. } | Step::Assign { .. } => &[],
        };
        for part in parts {
            if let Operand::Var(name) = part {
                validate_identifier(&field, name)?;
            }
        }
    }

    Ok(())
}
