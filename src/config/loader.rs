//! Wage table loading.
//!
//! This module provides the [`ConfigLoader`] type for loading a wage table
//! from a YAML file.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::{PayrollError, PayrollResult};

use super::types::{WageTable, WageTableConfig};

/// Loads and provides access to the wage table.
///
/// # File Format
///
/// ```text
/// weekend_surcharge: "5"
/// bands:
///   - name: Early Morning
///     from: 0
///     to: 540
///     hourly_rate: "25"
///   - ...
/// ```
///
/// # Example
///
/// ```no_run
/// use weekly_payroll::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/wage_table.yaml")?;
/// println!("{} bands", loader.table().bands().len());
/// # Ok::<(), weekly_payroll::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    table: WageTable,
}

impl ConfigLoader {
    /// Loads a wage table from the specified YAML file.
    ///
    /// # Errors
    ///
    /// - [`PayrollError::ConfigNotFound`] if the file does not exist
    /// - [`PayrollError::ConfigUnreadable`] if it exists but cannot be read
    /// - [`PayrollError::ConfigParseError`] if it is not a valid wage table document
    /// - [`PayrollError::InvalidWageTable`] if the bands are inconsistent
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => PayrollError::ConfigNotFound {
                path: path_str.clone(),
            },
            _ => PayrollError::ConfigUnreadable {
                path: path_str.clone(),
                message: err.to_string(),
            },
        })?;

        let table = Self::parse(&content).map_err(|err| match err {
            PayrollError::ConfigParseError { message, .. } => PayrollError::ConfigParseError {
                path: path_str.clone(),
                message,
            },
            other => other,
        })?;

        debug!(path = %path_str, bands = table.bands().len(), "Loaded wage table");
        Ok(Self { table })
    }

    /// Parses a wage table from YAML text.
    pub fn parse(content: &str) -> PayrollResult<WageTable> {
        let config: WageTableConfig =
            serde_yaml::from_str(content).map_err(|e| PayrollError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;
        WageTable::try_from(config)
    }

    /// Wraps an already-built table.
    pub fn from_table(table: WageTable) -> Self {
        Self { table }
    }

    /// Loads from `path` if given, otherwise uses the built-in table.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> PayrollResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Returns the loaded wage table.
    pub fn table(&self) -> &WageTable {
        &self.table
    }

    /// Consumes the loader, returning the wage table.
    pub fn into_table(self) -> WageTable {
        self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::io::Write;

    fn config_path() -> &'static str {
        "./config/wage_table.yaml"
    }

    #[test]
    fn test_load_shipped_configuration() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.table(), &WageTable::default());
    }

    #[test]
    fn test_missing_file_returns_config_not_found() {
        let err = ConfigLoader::load("./config/does_not_exist.yaml").unwrap_err();
        match err {
            PayrollError::ConfigNotFound { path } => {
                assert!(path.contains("does_not_exist.yaml"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_directory_returns_config_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConfigLoader::load(dir.path()).unwrap_err();
        assert!(matches!(err, PayrollError::ConfigUnreadable { .. }), "got {:?}", err);
    }

    #[test]
    fn test_non_utf8_file_returns_config_unreadable() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00, 0x41]).unwrap();

        match ConfigLoader::load(file.path()).unwrap_err() {
            PayrollError::ConfigUnreadable { path, .. } => {
                assert_eq!(path, file.path().display().to_string());
            }
            other => panic!("Expected ConfigUnreadable, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error_with_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bands: [this is: not valid").unwrap();

        let err = ConfigLoader::load(file.path()).unwrap_err();
        match err {
            PayrollError::ConfigParseError { path, .. } => {
                assert_eq!(path, file.path().display().to_string());
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_field_returns_parse_error() {
        let err = ConfigLoader::parse("bands: []\n").unwrap_err();
        assert!(matches!(err, PayrollError::ConfigParseError { .. }));
    }

    #[test]
    fn test_inconsistent_bands_return_invalid_table() {
        let yaml = r#"
weekend_surcharge: "5"
bands:
  - name: Day
    from: 0
    to: 700
    hourly_rate: "10"
"#;
        let err = ConfigLoader::parse(yaml).unwrap_err();
        assert!(matches!(err, PayrollError::InvalidWageTable { .. }));
    }

    #[test]
    fn test_custom_table_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
weekend_surcharge: "2.5"
bands:
  - name: Day
    from: 0
    to: 720
    hourly_rate: "12"
  - name: Evening
    from: 721
    to: 1440
    hourly_rate: "18"
"#
        )
        .unwrap();

        let loader = ConfigLoader::load(file.path()).unwrap();
        let table = loader.table();
        assert_eq!(table.bands().len(), 2);
        assert_eq!(table.band_ceiling(100), Some(720));
        assert_eq!(table.weekend_surcharge_hourly(), Decimal::new(25, 1));
    }

    #[test]
    fn test_load_or_default_without_path_uses_builtin_table() {
        let loader = ConfigLoader::load_or_default(None::<&str>).unwrap();
        assert_eq!(loader.into_table(), WageTable::default());
    }
}
