//! Runtime configuration for the converter.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default length of the simulated conversion.
pub const DEFAULT_DELAY_MS: u64 = 2000;

/// Options that shape a converter session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Duration of the simulated conversion, in milliseconds
    pub conversion_delay_ms: u64,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            conversion_delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

impl ConverterConfig {
    pub fn with_delay_ms(conversion_delay_ms: u64) -> Self {
        Self { conversion_delay_ms }
    }

    pub fn conversion_delay(&self) -> Duration {
        Duration::from_millis(self.conversion_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delay_is_two_seconds() {
        assert_eq!(ConverterConfig::default().conversion_delay(), Duration::from_secs(2));
    }

    #[test]
    fn test_json_round_trip() {
        let config = ConverterConfig::with_delay_ms(250);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"conversion_delay_ms":250}"#);
        assert_eq!(serde_json::from_str::<ConverterConfig>(&json).unwrap(), config);
    }
}
