use crate::dialect::LineTerminator;
use crate::error::{Result, SnifferError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Maximum number of lines (or data rows) inspected by any detection.
pub const DEFAULT_SAMPLE_LINES: usize = 50;

/// Maximum number of bytes read while looking for the first line terminator.
pub const DEFAULT_ENDLINE_BYTE_CAP: usize = 10_000;

/// Sampling bounds and fallbacks used by the detectors.
///
/// ```toml
/// sample_lines = 50
/// endline_byte_cap = 10000
/// default_line_terminator = "\n"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnifferConfig {
    pub sample_lines: usize,
    pub endline_byte_cap: usize,
    /// Returned by endline detection when the file has no terminator to inspect.
    pub default_line_terminator: LineTerminator,
}

impl Default for SnifferConfig {
    fn default() -> Self {
        Self {
            sample_lines: DEFAULT_SAMPLE_LINES,
            endline_byte_cap: DEFAULT_ENDLINE_BYTE_CAP,
            default_line_terminator: LineTerminator::platform_default(),
        }
    }
}

impl SnifferConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SnifferConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SnifferError::io(path, e))?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.sample_lines == 0 {
            return Err(SnifferError::InvalidConfig(
                "sample_lines must be greater than zero".to_string(),
            ));
        }
        if self.endline_byte_cap == 0 {
            return Err(SnifferError::InvalidConfig(
                "endline_byte_cap must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = SnifferConfig::from_toml_str("").unwrap();
        assert_eq!(config, SnifferConfig::default());
        assert_eq!(config.sample_lines, 50);
        assert_eq!(config.endline_byte_cap, 10_000);
    }

    #[test]
    fn partial_document_overrides_fields() {
        let config = SnifferConfig::from_toml_str(
            "sample_lines = 5\ndefault_line_terminator = \"\\r\\n\"\n",
        )
        .unwrap();
        assert_eq!(config.sample_lines, 5);
        assert_eq!(config.endline_byte_cap, DEFAULT_ENDLINE_BYTE_CAP);
        assert_eq!(config.default_line_terminator, LineTerminator::CrLf);
    }

    #[test]
    fn zero_sample_is_rejected() {
        let err = SnifferConfig::from_toml_str("sample_lines = 0").unwrap_err();
        assert!(matches!(err, SnifferError::InvalidConfig(_)));
    }

    #[test]
    fn zero_byte_cap_is_rejected() {
        let err = SnifferConfig::from_toml_str("endline_byte_cap = 0").unwrap_err();
        match err {
            SnifferError::InvalidConfig(msg) => assert!(msg.contains("endline_byte_cap")),
            other => panic!("expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn unknown_terminator_is_rejected() {
        let err = SnifferConfig::from_toml_str("default_line_terminator = \";\"").unwrap_err();
        assert!(matches!(err, SnifferError::ConfigParse(_)));
    }
}
