pub mod checker;
pub mod interpreter;
pub mod lesson;
pub mod runner;

pub use crate::domain::model::{Lesson, Operand, Step, Value};
pub use crate::domain::ports::{Console, LessonProvider};
pub use crate::utils::error::Result;
