use super::task_parser::{DocumentMap, Value, filter_comments, parse_document};
use simplelog::LevelFilter;
use std::fmt;
use std::fs;

/// env var holding the path of an optional settings document
pub const SETTINGS_ENV: &str = "MIDPOINT_SETTINGS";
/// env var overriding the log level
pub const LOG_LEVEL_ENV: &str = "MIDPOINT_LOG";
/// env var overriding the log file
pub const LOG_FILE_ENV: &str = "MIDPOINT_LOG_FILE";

#[derive(Debug)]
pub enum SettingsError {
    Io(String, std::io::Error),
    Malformed(String),
    InvalidValue {
        section: String,
        key: String,
        value: String,
    },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SettingsError::Io(path, error) => {
                write!(f, "cannot read settings file {}: {}", path, error)
            }
            SettingsError::Malformed(rest) => {
                write!(f, "malformed settings document near: {:?}", rest)
            }
            SettingsError::InvalidValue {
                section,
                key,
                value,
            } => write!(f, "invalid value {:?} for {}.{}", value, section, key),
        }
    }
}

impl std::error::Error for SettingsError {}

/// Run settings: logging and reporting. Nothing here affects the integration itself.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub log_level: LevelFilter,
    /// log file path; "auto" picks a time-stamped name
    pub log_file: Option<String>,
    pub timing_table: bool,
}

impl Default for RunSettings {
    fn default() -> Self {
        RunSettings {
            log_level: LevelFilter::Off,
            log_file: None,
            timing_table: false,
        }
    }
}

/// "off"/"none", "error", "warn", "info", "debug", "trace", case-insensitive
pub fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.trim().to_lowercase().as_str() {
        "off" | "none" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" | "warning" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

fn single_value<'a>(document: &'a DocumentMap, section: &str, key: &str) -> Option<&'a Value> {
    document
        .get(section)
        .and_then(|s| s.get(key))
        .and_then(|values| values.first())
}

fn invalid(section: &str, key: &str, value: &Value) -> SettingsError {
    SettingsError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
    }
}

impl RunSettings {
    /// Overlay values found in a parsed document; absent keys keep their current value
    pub fn apply_document(&mut self, document: &DocumentMap) -> Result<(), SettingsError> {
        if let Some(value) = single_value(document, "logging", "level") {
            self.log_level = value
                .as_string()
                .and_then(|s| parse_level(s))
                .ok_or_else(|| invalid("logging", "level", value))?;
        }
        if let Some(value) = single_value(document, "logging", "file") {
            self.log_file = Some(value.to_string());
        }
        if let Some(value) = single_value(document, "report", "timing_table") {
            self.timing_table = value
                .as_boolean()
                .ok_or_else(|| invalid("report", "timing_table", value))?;
        }
        Ok(())
    }

    pub fn apply_str(&mut self, input: &str) -> Result<(), SettingsError> {
        let filtered = filter_comments(input);
        if filtered.trim().is_empty() {
            return Ok(());
        }
        let (rest, document) = parse_document(&filtered)
            .map_err(|_| SettingsError::Malformed(filtered.chars().take(40).collect()))?;
        if !rest.trim().is_empty() {
            return Err(SettingsError::Malformed(rest.chars().take(40).collect()));
        }
        self.apply_document(&document)
    }

    pub fn apply_file(&mut self, path: &str) -> Result<(), SettingsError> {
        let content =
            fs::read_to_string(path).map_err(|error| SettingsError::Io(path.to_string(), error))?;
        self.apply_str(&content)
    }

    /// Overlay environment overrides; `lookup` is std::env::var in production.
    /// An unknown level is an error, an empty file name disables file logging.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(LOG_LEVEL_ENV) {
            self.log_level = parse_level(&level).ok_or_else(|| SettingsError::InvalidValue {
                section: "env".to_string(),
                key: LOG_LEVEL_ENV.to_string(),
                value: level.clone(),
            })?;
        }
        if let Some(file) = lookup(LOG_FILE_ENV) {
            self.log_file = if file.trim().is_empty() { None } else { Some(file) };
        }
        Ok(())
    }

    /// defaults < settings file < environment. Problems are collected, never fatal:
    /// whatever could be applied is kept.
    pub fn load<F>(lookup: F) -> (RunSettings, Vec<SettingsError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = RunSettings::default();
        let mut problems = Vec::new();
        if let Some(path) = lookup(SETTINGS_ENV) {
            let mut from_file = settings.clone();
            match from_file.apply_file(&path) {
                Ok(()) => settings = from_file,
                Err(e) => problems.push(e),
            }
        }
        if let Err(e) = settings.apply_env(&lookup) {
            problems.push(e);
        }
        (settings, problems)
    }
}
