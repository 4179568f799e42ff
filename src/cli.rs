use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

/// Terminal product carousel with autoplay, swipe and quantity selection.
#[derive(Debug, Parser)]
#[command(name = "carousel", version, about)]
pub struct Cli {
    /// Path to config file (default: <config_dir>/carousel/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Autoplay interval in milliseconds
    #[arg(long, value_name = "MS")]
    pub interval_ms: Option<u64>,

    /// Slide to open on; any integer, wrapped into range
    #[arg(long, value_name = "INDEX", allow_negative_numbers = true)]
    pub start: Option<i64>,

    /// Start with autoplay paused
    #[arg(long)]
    pub paused: bool,

    /// Minimum horizontal drag distance that counts as a swipe
    #[arg(long, value_name = "DISTANCE")]
    pub swipe_threshold: Option<u32>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// Load the config file, apply flag overrides, then validate the result.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Flags take precedence over the file.
    pub fn apply(&self, config: &mut Config) {
        if let Some(interval_ms) = self.interval_ms {
            config.carousel.interval_ms = interval_ms;
        }
        if let Some(start) = self.start {
            config.carousel.start_slide = start;
        }
        if self.paused {
            config.carousel.autoplay = false;
        }
        if let Some(threshold) = self.swipe_threshold {
            config.carousel.swipe_threshold = threshold;
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_leave_config_untouched() {
        let cli = Cli::try_parse_from(["carousel"]).expect("parse");
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from([
            "carousel",
            "--interval-ms",
            "500",
            "--start",
            "-1",
            "--paused",
            "--swipe-threshold",
            "40",
            "--log-file",
            "/tmp/carousel.log",
        ])
        .expect("parse");
        let mut config = Config::default();
        cli.apply(&mut config);

        assert_eq!(config.carousel.interval_ms, 500);
        assert_eq!(config.carousel.start_slide, -1);
        assert!(!config.carousel.autoplay);
        assert_eq!(config.carousel.swipe_threshold, 40);
        assert_eq!(
            config.logging.file,
            Some(PathBuf::from("/tmp/carousel.log"))
        );
    }

    #[test]
    fn rejects_non_numeric_interval() {
        assert!(Cli::try_parse_from(["carousel", "--interval-ms", "soon"]).is_err());
    }
}
