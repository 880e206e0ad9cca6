use crate::core::checker;
use crate::core::interpreter::Interpreter;
use crate::core::{Console, LessonProvider, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub lesson: String,
    pub steps_executed: usize,
    pub lines_written: usize,
    pub variables: usize,
}

pub struct LessonRunner<L: LessonProvider, C: Console> {
    lesson: L,
    console: C,
    explain: bool,
}

impl<L: LessonProvider, C: Console> LessonRunner<L, C> {
    pub fn new(lesson: L, console: C) -> Self {
        Self {
            lesson,
            console,
            explain: false,
        }
    }

    pub fn with_explain(mut self, explain: bool) -> Self {
        self.explain = explain;
        self
    }

    pub fn run(self) -> Result<RunSummary> {
        let name = self.lesson.lesson_name().to_string();
        let steps = self.lesson.steps();
        tracing::info!("Starting lesson '{}' ({} steps)", name, steps.len());

        let symbols = checker::check(steps)?;
        tracing::debug!("Type check passed, {} variables declared", symbols.len());

        let mut interpreter = Interpreter::new(self.console).with_explain(self.explain);
        interpreter.run(steps)?;

        let summary = RunSummary {
            lesson: name,
            steps_executed: steps.len(),
            lines_written: interpreter.lines_written(),
            variables: interpreter.variable_count(),
        };

        tracing::info!(
            "Lesson '{}' finished: {} lines written",
            summary.lesson,
            summary.lines_written
        );
        Ok(summary)
    }
}
