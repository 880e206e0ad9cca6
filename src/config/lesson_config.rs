use crate::domain::model::{Lesson, Step};
use crate::domain::ports::LessonProvider;
use crate::utils::error::{LessonError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// On-disk form of a lesson: a `[lesson]` header followed by `[[steps]]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonConfig {
    pub lesson: LessonMeta,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonMeta {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl LessonConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| LessonError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${NAME}` with the environment variable's value. Unset
    /// variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let re = PATTERN
            .get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn from_lesson(lesson: &Lesson) -> Self {
        Self {
            lesson: LessonMeta {
                name: lesson.name.clone(),
                description: lesson.description.clone(),
            },
            steps: lesson.steps.clone(),
        }
    }

    pub fn into_lesson(self) -> Lesson {
        Lesson {
            name: self.lesson.name,
            description: self.lesson.description,
            steps: self.steps,
        }
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl LessonProvider for LessonConfig {
    fn lesson_name(&self) -> &str {
        &self.lesson.name
    }

    fn steps(&self) -> &[Step] {
        &self.steps
    }
}

impl Validate for LessonConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("lesson.name", &self.lesson.name)?;
        validation::validate_steps(&self.steps)
    }
}
