use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "first-steps")]
#[command(about = "Prints a first programming lesson: text, variables and concatenation")]
pub struct CliConfig {
    /// Run a TOML lesson file instead of the built-in lesson
    #[arg(short, long)]
    pub lesson: Option<String>,

    /// Print the selected lesson as TOML and exit
    #[arg(long, conflicts_with = "check")]
    pub dump_lesson: bool,

    /// Type-check the lesson without running it
    #[arg(long)]
    pub check: bool,

    /// Print the explanatory note after each step that has one
    #[arg(long)]
    pub explain: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Log format for diagnostics on stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.lesson {
            validation::validate_non_empty_string("lesson", path)?;
        }
        Ok(())
    }
}
