//! Site Configuration
//!
//! Timing and layout constants. Every field defaults on its own, so a
//! partial JSON document only overrides what it names.

use serde::{Deserialize, Serialize};

const BUILTIN_CONFIG: &str = include_str!("../data/config.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Widths at or below this are treated as mobile
    pub mobile_breakpoint: f64,
    /// Fixed header height subtracted from scroll targets
    pub header_offset: f64,
    /// Scroll distance after which the header turns solid
    pub scroll_threshold: f64,
    /// Currency label shown in the purchase prompt
    pub currency: String,
    pub preloader_delay_ms: u32,
    pub content_reveal_delay_ms: u32,
    pub preloader_remove_delay_ms: u32,
    pub submit_delay_ms: u32,
    /// Probability that the simulated contact submission fails
    pub submit_failure_rate: f64,
    pub message_hide_ms: u32,
    pub counter_steps: u32,
    pub counter_tick_ms: u32,
    /// Fraction of viewport height the stats block must rise above
    pub stats_trigger_ratio: f64,
    pub stats_initial_check_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 425.0,
            header_offset: 80.0,
            scroll_threshold: 100.0,
            currency: "GHC".to_string(),
            preloader_delay_ms: 2000,
            content_reveal_delay_ms: 100,
            preloader_remove_delay_ms: 600,
            submit_delay_ms: 2000,
            submit_failure_rate: 0.1,
            message_hide_ms: 5000,
            counter_steps: 50,
            counter_tick_ms: 30,
            stats_trigger_ratio: 0.7,
            stats_initial_check_ms: 100,
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Bundled config, falling back to defaults if it fails to parse
    pub fn builtin() -> Self {
        Self::from_json(BUILTIN_CONFIG).unwrap_or_else(|e| {
            log::warn!("bundled config invalid, using defaults: {}", e);
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_matches_defaults() {
        assert_eq!(SiteConfig::builtin(), SiteConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = SiteConfig::from_json(r#"{"mobile_breakpoint": 600.0}"#).unwrap();
        assert_eq!(config.mobile_breakpoint, 600.0);
        assert_eq!(config.submit_delay_ms, 2000);
        assert_eq!(config.currency, "GHC");
    }
}
