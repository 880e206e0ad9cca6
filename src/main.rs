use clap::Parser;
use first_steps::core::checker;
use first_steps::utils::error::ErrorSeverity;
use first_steps::utils::{logger, validation::Validate};
use first_steps::{CliConfig, Lesson, LessonConfig, LessonRunner, Result, WriterConsole};
use std::io::Write;

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose, config.log_format);

    tracing::info!("Starting first-steps");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(&config) {
        if e.severity() == ErrorSeverity::Low {
            tracing::debug!("Stopped early: {}", e);
            return;
        }

        tracing::error!(
            "Lesson failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(exit_code(e.severity()));
    }
}

fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn run(config: &CliConfig) -> Result<()> {
    let lesson = match &config.lesson {
        Some(path) => {
            tracing::info!("Loading lesson from: {}", path);
            let lesson_config = LessonConfig::from_file(path)?;
            lesson_config.validate()?;
            lesson_config.into_lesson()
        }
        None => Lesson::basics(),
    };

    if config.dump_lesson {
        let text = LessonConfig::from_lesson(&lesson).to_toml_string()?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    if config.check {
        let symbols = checker::check(&lesson.steps)?;
        tracing::info!(
            "Lesson '{}' type-checks ({} variables)",
            lesson.name,
            symbols.len()
        );
        return Ok(());
    }

    let summary = LessonRunner::new(lesson, WriterConsole::stdout())
        .with_explain(config.explain)
        .run()?;
    tracing::debug!(
        "{} steps executed, {} variables in scope at exit",
        summary.steps_executed,
        summary.variables
    );

    Ok(())
}
