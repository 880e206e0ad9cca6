use crate::core::{Operand, Result, Step};
use crate::domain::model::ValueType;
use crate::utils::error::LessonError;
use std::collections::HashMap;

/// Names visible after a checked run, with their declared types.
pub type SymbolTable = HashMap<String, ValueType>;

/// Type-checks a lesson before anything runs.
///
/// Steps are numbered from 1 in errors. The first problem found is returned.
pub fn check(steps: &[Step]) -> Result<SymbolTable> {
    let mut symbols = SymbolTable::new();

    for (idx, step) in steps.iter().enumerate() {
        let step_no = idx + 1;
        match step {
            Step::Print { parts, .. } => check_operands(&symbols, step_no, parts)?,
            Step::Declare { name, value, .. } => {
                declare(&mut symbols, step_no, name, value.value_type())?;
            }
            Step::Assign { name, value, .. } => {
                let expected = *symbols.get(name).ok_or_else(|| LessonError::UndeclaredVariable {
                    step: step_no,
                    name: name.clone(),
                })?;
                let found = value.value_type();
                if expected != found {
                    return Err(LessonError::TypeMismatch {
                        step: step_no,
                        name: name.clone(),
                        expected,
                        found,
                    });
                }
            }
            Step::Concat { name, parts, .. } => {
                // The operands are checked first so `x = x + ...` is rejected.
                check_operands(&symbols, step_no, parts)?;
                declare(&mut symbols, step_no, name, ValueType::Text)?;
            }
        }
        tracing::trace!("Checked step {} ({})", step_no, step.kind());
    }

    Ok(symbols)
}

fn declare(symbols: &mut SymbolTable, step: usize, name: &str, ty: ValueType) -> Result<()> {
    if symbols.contains_key(name) {
        return Err(LessonError::DuplicateVariable {
            step,
            name: name.to_string(),
        });
    }
    symbols.insert(name.to_string(), ty);
    Ok(())
}

fn check_operands(symbols: &SymbolTable, step: usize, parts: &[Operand]) -> Result<()> {
    for part in parts {
        if let Operand::Var(name) = part {
            if !symbols.contains_key(name) {
                return Err(LessonError::UndeclaredVariable {
                    step,
                    name: name.clone(),
                });
            }
        }
    }
    Ok(())
}
