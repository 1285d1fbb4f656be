//! Error — failures of the surfaces around the parser (files, config, output).
//!
//! Parsing itself never fails; see `parser`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrmLogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Entry {index} out of range ({count} entries parsed)")]
    EntryOutOfRange { index: usize, count: usize },
}

pub type Result<T> = std::result::Result<T, CrmLogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = CrmLogError::InvalidConfig("input_path must not be empty".to_string());
        assert_eq!(err.to_string(), "Invalid configuration: input_path must not be empty");

        let err = CrmLogError::EntryOutOfRange { index: 5, count: 2 };
        assert_eq!(err.to_string(), "Entry 5 out of range (2 entries parsed)");
    }

    #[test]
    fn test_io_error_converts() {
        fn open_missing() -> Result<std::fs::File> {
            Ok(std::fs::File::open("/definitely/not/here.log")?)
        }
        assert!(matches!(open_missing(), Err(CrmLogError::Io(_))));
    }
}
