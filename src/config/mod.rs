#[cfg(feature = "cli")]
pub mod cli;
pub mod lesson_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use lesson_config::LessonConfig;
