use crate::domain::model::{Lesson, Step};
use crate::utils::error::Result;

/// Line-oriented output sink the interpreter writes lesson output to.
pub trait Console {
    fn write_line(&mut self, line: &str) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<C: Console + ?Sized> Console for &mut C {
    fn write_line(&mut self, line: &str) -> Result<()> {
        (**self).write_line(line)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}

pub trait LessonProvider {
    fn lesson_name(&self) -> &str;
    fn steps(&self) -> &[Step];
}

impl LessonProvider for Lesson {
    fn lesson_name(&self) -> &str {
        &self.name
    }

    fn steps(&self) -> &[Step] {
        &self.steps
    }
}
