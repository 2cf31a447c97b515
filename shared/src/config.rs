use serde::{Deserialize, Serialize};

use crate::presets::QuickSelect;

/// Configuration for a date-range picker instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Log every transition to the console
    pub enable_logging: bool,
    /// Quick-select buttons, in display order
    pub presets: Vec<QuickSelect>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            enable_logging: false, // Disable by default for production
            presets: QuickSelect::ALL.to_vec(),
        }
    }
}

impl PickerConfig {
    /// Default presets with logging on
    pub fn debug() -> Self {
        Self::default().with_logging(true)
    }

    pub fn with_logging(mut self, enabled: bool) -> Self {
        self.enable_logging = enabled;
        self
    }

    pub fn with_presets(mut self, presets: impl IntoIterator<Item = QuickSelect>) -> Self {
        self.presets = presets.into_iter().collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = PickerConfig::default();
        assert!(!config.enable_logging);
        assert_eq!(config.presets, QuickSelect::ALL.to_vec());
    }

    #[test]
    fn test_config_debug() {
        let config = PickerConfig::debug();
        assert!(config.enable_logging);
        assert_eq!(config.presets.len(), 3);
    }

    #[test]
    fn test_config_custom_presets() {
        let config = PickerConfig::default().with_presets([QuickSelect::Last30Days, QuickSelect::Today]);
        assert_eq!(config.presets, vec![QuickSelect::Last30Days, QuickSelect::Today]);
    }
}
