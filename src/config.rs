use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::ticket::{Priority, ProjectId};
use crate::error::{AppError, AppResult};

pub const CONFIG_PATH_VAR: &str = "HELPDESK_CONFIG";
pub const OUTPUT_VAR: &str = "HELPDESK_OUTPUT";
pub const PRIORITY_VAR: &str = "HELPDESK_DEFAULT_PRIORITY";
pub const PROJECT_VAR: &str = "HELPDESK_PROJECT_ID";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Raw contents of the optional JSON config file. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredConfig {
    pub output: Option<String>,
    pub default_priority: Option<String>,
    pub project_id: Option<ProjectId>,
}

impl StoredConfig {
    pub fn load(path: &Path) -> AppResult<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).map_err(|err| {
                AppError::Configuration(format!("invalid config file {}: {err}", path.display()))
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(AppError::Io(err)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub output: OutputFormat,
    pub default_priority: Priority,
    pub project_id: ProjectId,
    pub source: Option<PathBuf>,
}

impl AppConfig {
    /// Reads the file named by `HELPDESK_CONFIG`, then lets individual
    /// environment variables override it.
    pub fn load() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let source = lookup(CONFIG_PATH_VAR)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);
        let mut stored = match &source {
            Some(path) if !path.exists() => {
                return Err(AppError::Configuration(format!(
                    "config file {} not found",
                    path.display()
                )));
            }
            Some(path) => StoredConfig::load(path)?,
            None => StoredConfig::default(),
        };

        if let Some(output) = lookup(OUTPUT_VAR) {
            stored.output = Some(output);
        }
        if let Some(priority) = lookup(PRIORITY_VAR) {
            stored.default_priority = Some(priority);
        }
        if let Some(project) = lookup(PROJECT_VAR) {
            let parsed = project.trim().parse().map_err(|_| {
                AppError::Configuration(format!("{PROJECT_VAR} must be a number, got {project:?}"))
            })?;
            stored.project_id = Some(parsed);
        }

        let output = match stored.output.as_deref() {
            Some(value) => OutputFormat::from_str(value).ok_or_else(|| {
                AppError::Configuration(format!("unknown output format {value:?}"))
            })?,
            None => OutputFormat::default(),
        };
        let default_priority = match stored.default_priority.as_deref() {
            Some(value) => Priority::from_str(value)
                .ok_or_else(|| AppError::Configuration(format!("unknown priority {value:?}")))?,
            None => Priority::default(),
        };

        Ok(Self {
            output,
            default_priority,
            project_id: stored.project_id.unwrap_or_default(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn reads_environment_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            (OUTPUT_VAR, "JSON"),
            (PRIORITY_VAR, "high"),
            (PROJECT_VAR, "42"),
        ]))
        .unwrap();

        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.default_priority, Priority::High);
        assert_eq!(config.project_id, 42);
    }

    #[test]
    fn rejects_bad_values() {
        let err = AppConfig::from_lookup(lookup(&[(PRIORITY_VAR, "urgent")])).unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));

        let err = AppConfig::from_lookup(lookup(&[(PROJECT_VAR, "abc")])).unwrap_err();
        assert!(err.to_string().contains(PROJECT_VAR));
    }

    #[test]
    fn missing_config_file_falls_back_to_defaults() {
        let path = env::temp_dir().join("helpdesk-config-that-does-not-exist.json");
        let stored = StoredConfig::load(&path).unwrap();
        assert_eq!(stored, StoredConfig::default());
    }

    #[test]
    fn named_config_file_must_exist() {
        let err = AppConfig::from_lookup(lookup(&[(
            CONFIG_PATH_VAR,
            "/nonexistent/helpdesk-typo.json",
        )]))
        .unwrap_err();

        assert!(matches!(err, AppError::Configuration(_)));
        assert_eq!(
            err.to_string(),
            "configuration error: config file /nonexistent/helpdesk-typo.json not found"
        );
    }

    #[test]
    fn environment_overrides_file() {
        let path = env::temp_dir().join(format!("helpdesk-config-{}.json", std::process::id()));
        fs::write(
            &path,
            r#"{ "output": "json", "default_priority": "medium", "project_id": 7 }"#,
        )
        .unwrap();

        let path_str = path.to_string_lossy().to_string();
        let config = AppConfig::from_lookup(lookup(&[
            (CONFIG_PATH_VAR, path_str.as_str()),
            (PRIORITY_VAR, "low"),
        ]))
        .unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.default_priority, Priority::Low);
        assert_eq!(config.project_id, 7);
        assert_eq!(config.source, Some(path));
    }
}
