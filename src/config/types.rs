use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::catalog::{default_catalog, Slide};
use crate::ui::carousel::CarouselSettings;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Slides in display order.
    #[serde(default = "default_catalog")]
    pub slides: Vec<Slide>,
}

/// Playback and input settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Autoplay interval in milliseconds (default: 2000).
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Slide shown first; any integer, wrapped into range (default: 0).
    #[serde(default)]
    pub start_slide: i64,
    /// Start playing (default: true).
    #[serde(default = "default_autoplay")]
    pub autoplay: bool,
    /// Minimum drag distance for a swipe (default: 100).
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: u32,
    /// Currency symbol in price text (default: "€").
    #[serde(default = "default_currency")]
    pub currency: String,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directives, overridden by `RUST_LOG` (default: "info").
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Log file. Defaults to `<cache_dir>/carousel/carousel.log`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_interval_ms() -> u64 {
    2000
}

fn default_autoplay() -> bool {
    true
}

fn default_swipe_threshold() -> u32 {
    100
}

fn default_currency() -> String {
    "€".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl CarouselConfig {
    pub fn to_settings(&self) -> CarouselSettings {
        CarouselSettings {
            interval: Duration::from_millis(self.interval_ms),
            start_index: self.start_slide,
            autoplay: self.autoplay,
            swipe_threshold: self.swipe_threshold,
            currency: self.currency.clone(),
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            start_slide: 0,
            autoplay: default_autoplay(),
            swipe_threshold: default_swipe_threshold(),
            currency: default_currency(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            file: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            carousel: CarouselConfig::default(),
            logging: LoggingConfig::default(),
            slides: default_catalog(),
        }
    }
}
