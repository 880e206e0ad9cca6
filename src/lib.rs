pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::console::{MemoryConsole, WriterConsole};
pub use config::LessonConfig;
pub use core::runner::{LessonRunner, RunSummary};
pub use domain::model::Lesson;
pub use utils::error::{LessonError, Result};
