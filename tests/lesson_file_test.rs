use anyhow::Result;
use first_steps::utils::validation::Validate;
use first_steps::{LessonConfig, LessonError, LessonRunner, MemoryConsole};
use tempfile::TempDir;

#[test]
fn test_run_lesson_from_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("scalars.toml");
    std::fs::write(
        &path,
        r#"
[lesson]
name = "scalars"
description = "every scalar kind once"

[[steps]]
kind = "declare"
name = "count"
value = { type = "int", value = 3 }

[[steps]]
kind = "declare"
name = "ratio"
value = { type = "double", value = 2 }

[[steps]]
kind = "declare"
name = "flag"
value = { type = "bool", value = false }

[[steps]]
kind = "declare"
name = "grade"
value = { type = "char", value = "C" }

[[steps]]
kind = "concat"
name = "line"
parts = [{ var = "count" }, { text = " " }, { var = "ratio" }, { text = " " }, { var = "flag" }, { text = " " }, { var = "grade" }]

[[steps]]
kind = "print"
parts = [{ var = "line" }]
"#,
    )?;

    let config = LessonConfig::from_file(&path)?;
    config.validate()?;

    let mut console = MemoryConsole::new();
    let summary = LessonRunner::new(config, &mut console).run()?;

    assert_eq!(console.lines(), &["3 2.0 false C"]);
    assert_eq!(summary.lesson, "scalars");
    assert_eq!(summary.variables, 5);
    Ok(())
}

#[test]
fn test_invalid_variable_name_is_rejected() -> Result<()> {
    let config = LessonConfig::from_toml_str(
        r#"
[lesson]
name = "bad names"

[[steps]]
kind = "declare"
name = "2fast"
value = { type = "int", value = 1 }
"#,
    )?;

    match config.validate() {
        Err(LessonError::InvalidConfigValueError { field, value, .. }) => {
            assert_eq!(field, "steps[1]");
            assert_eq!(value, "2fast");
        }
        other => panic!("expected invalid variable name, got {:?}", other),
    }
    Ok(())
}
