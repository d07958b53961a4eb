// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,

    // Problems found while loading, logged once a logger exists
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Warnings only, so the console transcript stays clean
            log_level: LevelFilter::Warn,
            log_file: None,
            warnings: Vec::new(),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(level) = lookup("PASSGEN_LOG_LEVEL") {
            match parse_level(&level) {
                Some(filter) => config.log_level = filter,
                None => config
                    .warnings
                    .push(format!("Unknown log level '{}', using {}", level, config.log_level)),
            }
        }

        if let Some(file) = lookup("PASSGEN_LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config
    }
}

fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.trim().to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        assert_eq!(load(&[]), Config::default());
    }

    #[test]
    fn reads_level_and_file() {
        let config = load(&[("PASSGEN_LOG_LEVEL", " Debug "), ("PASSGEN_LOG_FILE", "/tmp/passgen.log")]);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/passgen.log")));
    }

    #[test]
    fn unknown_level_keeps_default() {
        let config = load(&[("PASSGEN_LOG_LEVEL", "loud"), ("PASSGEN_LOG_FILE", "  ")]);
        assert_eq!(config.log_level, LevelFilter::Warn);
        assert_eq!(config.log_file, None);
        assert_eq!(config.warnings, vec!["Unknown log level 'loud', using WARN".to_string()]);
    }

    #[test]
    fn valid_settings_produce_no_warnings() {
        let config = load(&[("PASSGEN_LOG_LEVEL", "trace")]);
        assert_eq!(config.log_level, LevelFilter::Trace);
        assert!(config.warnings.is_empty());
    }
}
