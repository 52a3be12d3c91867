//! Command configuration.
//!
//! Every field has a default, so a partial JSON document is enough.

use crate::core::{Error, Result};
use crate::report::table::MIN_TABLE_WIDTH;
use crate::report::{PaginationSettings, ReportFormatter, TableWriter};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Plugin command configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandConfig {
    /// Prefix the host uses for chat commands
    pub specifier: String,
    /// Name the command is registered under
    pub command_name: String,
    /// Console table width
    pub table_width: usize,
    /// Lines per page for interactive receivers
    pub lines_per_page: usize,
    /// Maximum characters per paged line
    pub max_chars_per_line: usize,
}

impl CommandConfig {
    /// Parse a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CommandConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Check the values are usable.
    pub fn validate(&self) -> Result<()> {
        if self.command_name.trim().is_empty() {
            return Err(Error::Config("command_name must not be empty".to_string()));
        }
        if self.lines_per_page == 0 {
            return Err(Error::Config("lines_per_page must be at least 1".to_string()));
        }
        if self.table_width < MIN_TABLE_WIDTH {
            return Err(Error::Config(format!(
                "table_width must be at least {}",
                MIN_TABLE_WIDTH
            )));
        }
        Ok(())
    }

    /// Full command as typed by a user, e.g. `/plugin`.
    pub fn command_prefix(&self) -> String {
        format!("{}{}", self.specifier, self.command_name)
    }

    /// Build the report formatter these settings describe.
    pub fn formatter(&self) -> ReportFormatter {
        let paging = PaginationSettings::plugin_list(&self.specifier, &self.command_name)
            .with_lines_per_page(self.lines_per_page)
            .with_max_chars_per_line(self.max_chars_per_line);
        ReportFormatter::new(TableWriter::new(self.table_width), paging)
    }
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            specifier: "/".to_string(),
            command_name: "plugin".to_string(),
            table_width: crate::report::table::TABLE_WIDTH,
            lines_per_page: 4,
            max_chars_per_line: 80,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CommandConfig::default();
        assert_eq!(config.command_prefix(), "/plugin");
        assert_eq!(config.table_width, 77);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config = CommandConfig::from_json(r#"{"specifier": "."}"#).unwrap();
        assert_eq!(config.specifier, ".");
        assert_eq!(config.lines_per_page, 4);
        assert_eq!(config.command_prefix(), ".plugin");
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            CommandConfig::from_json(r#"{"lines_per_page": 0}"#),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            CommandConfig::from_json("{"),
            Err(Error::SerializationError(_))
        ));
    }

    #[test]
    fn test_table_width_must_fit_four_columns() {
        assert!(matches!(
            CommandConfig::from_json(r#"{"table_width": 19}"#),
            Err(Error::Config(_))
        ));
        assert!(CommandConfig::from_json(r#"{"table_width": 20}"#).is_ok());
    }
}
