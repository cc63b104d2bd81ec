//! Password generation settings.

mod file;

use serde::Deserialize;

/// How the configured `length_value` is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum LengthMode {
    /// `length_value` is the number of characters.
    #[default]
    #[serde(alias = "length", alias = "fixed")]
    FixedLength,
    /// `length_value` is the minimum entropy in bits.
    #[serde(alias = "entropy")]
    TargetEntropy,
}

/// Character classes and length selection for one generation call.
///
/// Missing fields take the defaults below; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub number: bool,
    pub lowercase: bool,
    pub uppercase: bool,
    pub symbol: bool,
    pub space: bool,
    pub custom: Option<String>,
    #[serde(alias = "lengthType")]
    pub length_mode: LengthMode,
    #[serde(alias = "length")]
    pub length_value: f64,
}

impl Config {
    /// Read a JSON settings file.
    pub fn load(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        file::load(path.as_ref())
    }

    pub fn from_json(json: &str) -> crate::Result<Self> {
        file::parse(json)
    }

    pub fn fixed_length(length: usize) -> Self {
        Self {
            length_mode: LengthMode::FixedLength,
            length_value: length as f64,
            ..Default::default()
        }
    }

    pub fn target_entropy(bits: f64) -> Self {
        Self {
            length_mode: LengthMode::TargetEntropy,
            length_value: bits,
            ..Default::default()
        }
    }

    /// Disable every built-in class.
    pub fn without_classes(mut self) -> Self {
        self.number = false;
        self.lowercase = false;
        self.uppercase = false;
        self.symbol = false;
        self.space = false;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            number: true,
            lowercase: true,
            uppercase: true,
            symbol: false,
            space: false,
            custom: None,
            length_mode: LengthMode::FixedLength,
            length_value: 12.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert!(config.number && config.lowercase && config.uppercase);
        assert!(!config.symbol && !config.space);
        assert_eq!(config.custom, None);
        assert_eq!(config.length_mode, LengthMode::FixedLength);
        assert_eq!(config.length_value, 12.0);
    }

    #[test]
    fn without_classes_keeps_length() {
        let config = Config::fixed_length(5).without_classes();
        assert!(!config.number && !config.lowercase && !config.uppercase);
        assert_eq!(config.length_value, 5.0);
    }
}
