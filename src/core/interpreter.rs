use crate::core::{Console, Operand, Result, Step, Value};
use crate::utils::error::LessonError;
use std::collections::HashMap;

pub struct Interpreter<C: Console> {
    console: C,
    frame: HashMap<String, Value>,
    explain: bool,
    lines_written: usize,
}

impl<C: Console> Interpreter<C> {
    pub fn new(console: C) -> Self {
        Self {
            console,
            frame: HashMap::new(),
            explain: false,
            lines_written: 0,
        }
    }

    pub fn with_explain(mut self, explain: bool) -> Self {
        self.explain = explain;
        self
    }

    /// Executes one step. `step_no` is only used for error reporting.
    pub fn execute(&mut self, step_no: usize, step: &Step) -> Result<()> {
        match step {
            Step::Print { parts, .. } => {
                let line = self.render(step_no, parts)?;
                self.emit(&line)?;
            }
            Step::Declare { name, value, .. } => {
                tracing::debug!("declare {} = {}", name, value);
                self.frame.insert(name.clone(), value.clone());
            }
            Step::Assign { name, value, .. } => {
                let slot = self
                    .frame
                    .get_mut(name)
                    .ok_or_else(|| LessonError::UndeclaredVariable {
                        step: step_no,
                        name: name.clone(),
                    })?;
                tracing::debug!("assign {} = {} (was {})", name, value, slot);
                *slot = value.clone();
            }
            Step::Concat { name, parts, .. } => {
                let text = self.render(step_no, parts)?;
                tracing::debug!("concat {} = {:?}", name, text);
                self.frame.insert(name.clone(), Value::Text(text));
            }
        }

        if self.explain {
            if let Some(note) = step.note() {
                self.emit(&format!("  // {}", note))?;
            }
        }

        Ok(())
    }

    pub fn run(&mut self, steps: &[Step]) -> Result<()> {
        for (idx, step) in steps.iter().enumerate() {
            tracing::debug!("Step {}: {}", idx + 1, step.kind());
            self.execute(idx + 1, step)?;
        }
        self.console.flush()
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.frame.get(name)
    }

    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    pub fn variable_count(&self) -> usize {
        self.frame.len()
    }

    pub fn into_console(self) -> C {
        self.console
    }

    fn render(&self, step_no: usize, parts: &[Operand]) -> Result<String> {
        let mut out = String::new();
        for part in parts {
            match part {
                Operand::Text(text) => out.push_str(text),
                Operand::Var(name) => {
                    let value = self
                        .frame
                        .get(name)
                        .ok_or_else(|| LessonError::UndeclaredVariable {
                            step: step_no,
                            name: name.clone(),
                        })?;
                    out.push_str(&value.to_string());
                }
            }
        }
        Ok(out)
    }

    fn emit(&mut self, line: &str) -> Result<()> {
        self.console.write_line(line)?;
        self.lines_written += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::console::MemoryConsole;

    #[test]
    fn test_reassignment_is_visible() {
        let steps = vec![
            Step::declare("a", 10),
            Step::print(vec![Operand::text("a="), Operand::var("a")]),
            Step::assign("a", 15),
            Step::print(vec![Operand::text("a="), Operand::var("a")]),
        ];
        let mut interp = Interpreter::new(MemoryConsole::new());
        interp.run(&steps).unwrap();

        assert_eq!(interp.value("a"), Some(&Value::Int(15)));
        assert_eq!(interp.lines_written(), 2);
        assert_eq!(interp.into_console().lines(), &["a=10", "a=15"]);
    }

    #[test]
    fn test_concat_mixes_types() {
        let steps = vec![
            Step::declare("n", 3),
            Step::declare("ok", true),
            Step::concat(
                "s",
                vec![
                    Operand::text("n is "),
                    Operand::var("n"),
                    Operand::text(", ok is "),
                    Operand::var("ok"),
                ],
            ),
        ];
        let mut interp = Interpreter::new(MemoryConsole::new());
        interp.run(&steps).unwrap();

        assert_eq!(
            interp.value("s"),
            Some(&Value::Text("n is 3, ok is true".to_string()))
        );
        assert_eq!(interp.lines_written(), 0);
        assert_eq!(interp.variable_count(), 3);
    }

    #[test]
    fn test_explain_writes_notes() {
        let steps = vec![
            Step::print_text("Hello").with_note("greets"),
            Step::declare("a", 1).with_note("integer variable"),
            Step::print_text("Bye"),
        ];
        let mut interp = Interpreter::new(MemoryConsole::new()).with_explain(true);
        interp.run(&steps).unwrap();

        assert_eq!(
            interp.into_console().lines(),
            &["Hello", "  // greets", "  // integer variable", "Bye"]
        );
    }

    #[test]
    fn test_unknown_variable_at_runtime() {
        let mut interp = Interpreter::new(MemoryConsole::new());
        let err = interp
            .execute(4, &Step::print(vec![Operand::var("ghost")]))
            .unwrap_err();
        assert!(matches!(
            err,
            LessonError::UndeclaredVariable { step: 4, .. }
        ));
    }
}
