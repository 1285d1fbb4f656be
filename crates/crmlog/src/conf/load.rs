//! Load — config loading from file and environment variables.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::model::CrmLogConfig;
use crate::error::{CrmLogError, Result};

pub const CONFIG_FILE_ENV: &str = "CRMLOG_CONFIG_FILE";
pub const DEFAULT_CONFIG_FILE: &str = "crmlog.toml";

impl CrmLogConfig {
    /// Load configuration from file and environment variables
    /// Priority: Environment Variables > Config File > Defaults
    pub fn load() -> Result<Self> {
        let config_path = std::env::var(CONFIG_FILE_ENV)
            .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        let mut config = if Path::new(&config_path).exists() {
            tracing::info!("Loading configuration from: {}", config_path);
            Self::from_file(&config_path)?
        } else {
            tracing::debug!("Config file not found at {}, using defaults", config_path);
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file(path: &str) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: CrmLogConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Apply `CRMLOG_*` overrides read through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(input) = lookup("CRMLOG_INPUT") {
            self.input_path = Some(input);
        }
        if let Some(output) = lookup("CRMLOG_OUTPUT") {
            self.output = output.parse().map_err(CrmLogError::InvalidConfig)?;
        }
        if let Some(entry) = lookup("CRMLOG_ENTRY") {
            let index = entry.trim().parse().map_err(|_| {
                CrmLogError::InvalidConfig(format!("CRMLOG_ENTRY must be an index, got {:?}", entry))
            })?;
            self.entry = Some(index);
        }
        if let Some(summary) = lookup("CRMLOG_SUMMARY") {
            self.summary = summary.trim().parse().map_err(|_| {
                CrmLogError::InvalidConfig(format!("CRMLOG_SUMMARY must be true or false, got {:?}", summary))
            })?;
        }
        Ok(())
    }

    /// Validate that the input file is configured and exists
    pub fn validate(&self) -> Result<()> {
        let path = match self.input_path.as_deref() {
            Some(p) if !p.trim().is_empty() => p,
            _ => return Err(CrmLogError::InvalidConfig("input_path is not configured".to_string())),
        };
        if !Path::new(path).is_file() {
            return Err(CrmLogError::InvalidConfig(format!("input file not found at: {}", path)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conf::OutputFormat;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    // ── Overrides ───────────────────────────────────────────────

    #[test]
    fn test_overrides_apply() {
        let mut config = CrmLogConfig::default();
        config
            .apply_overrides(lookup_from(&[
                ("CRMLOG_INPUT", "/var/log/crm.log"),
                ("CRMLOG_OUTPUT", "json"),
                ("CRMLOG_ENTRY", "3"),
                ("CRMLOG_SUMMARY", "false"),
            ]))
            .unwrap();

        assert_eq!(config.input_path.as_deref(), Some("/var/log/crm.log"));
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.entry, Some(3));
        assert!(!config.summary);
    }

    #[test]
    fn test_no_overrides_keeps_values() {
        let mut config = CrmLogConfig::default();
        config.apply_overrides(lookup_from(&[])).unwrap();
        assert_eq!(config, CrmLogConfig::default());
    }

    #[test]
    fn test_invalid_overrides_rejected() {
        let mut config = CrmLogConfig::default();
        assert!(config.apply_overrides(lookup_from(&[("CRMLOG_OUTPUT", "xml")])).is_err());
        assert!(config.apply_overrides(lookup_from(&[("CRMLOG_ENTRY", "-1")])).is_err());
        assert!(config.apply_overrides(lookup_from(&[("CRMLOG_SUMMARY", "maybe")])).is_err());
    }

    // ── File loading ────────────────────────────────────────────

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "input_path = \"crm.log\"\noutput = \"json\"\nentry = 1").unwrap();

        let config = CrmLogConfig::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.input_path.as_deref(), Some("crm.log"));
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.entry, Some(1));
        assert!(config.summary);
    }

    #[test]
    fn test_from_file_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "output = [").unwrap();

        let result = CrmLogConfig::from_file(file.path().to_str().unwrap());
        assert!(matches!(result, Err(CrmLogError::ConfigParse(_))));
    }

    // ── Validation ──────────────────────────────────────────────

    #[test]
    fn test_validate_missing_input() {
        let config = CrmLogConfig::default();
        assert!(config.validate().is_err());

        let config = CrmLogConfig {
            input_path: Some("  ".to_string()),
            ..CrmLogConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_nonexistent_input() {
        let config = CrmLogConfig {
            input_path: Some("/definitely/not/here.log".to_string()),
            ..CrmLogConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_validate_existing_input() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = CrmLogConfig {
            input_path: Some(file.path().to_string_lossy().into_owned()),
            ..CrmLogConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
