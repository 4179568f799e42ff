//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::path::PathBuf;
use std::time::Duration;

use carousel::catalog::Slide;
use carousel::timer::ManualScheduler;
use carousel::ui::carousel::{Carousel, CarouselSettings, CarouselView};
use tempfile::TempDir;

/// View that records every render call.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub slides: Vec<usize>,
    pub indicators: Vec<usize>,
    pub titles: Vec<String>,
    pub prices: Vec<String>,
    pub quantities: Vec<u64>,
    pub play_icons: Vec<bool>,
}

impl RecordingView {
    pub fn last_price(&self) -> Option<&str> {
        self.prices.last().map(String::as_str)
    }

    pub fn last_play_icon(&self) -> Option<bool> {
        self.play_icons.last().copied()
    }
}

impl CarouselView for RecordingView {
    fn render_slide(&mut self, index: usize) {
        self.slides.push(index);
    }

    fn render_indicator(&mut self, index: usize) {
        self.indicators.push(index);
    }

    fn render_title(&mut self, text: &str) {
        self.titles.push(text.to_string());
    }

    fn render_price(&mut self, text: &str) {
        self.prices.push(text.to_string());
    }

    fn render_quantity(&mut self, quantity: u64) {
        self.quantities.push(quantity);
    }

    fn render_play_icon(&mut self, is_playing: bool) {
        self.play_icons.push(is_playing);
    }
}

/// `count` slides named "Slide 1".."Slide N" priced 10, 20, ...
pub fn make_slides(count: usize) -> Vec<Slide> {
    (1..=count)
        .map(|n| Slide::new(format!("Slide {n}"), format!("slide-{n}.png"), n as u64 * 10))
        .collect()
}

pub fn settings(interval_ms: u64) -> CarouselSettings {
    CarouselSettings {
        interval: Duration::from_millis(interval_ms),
        ..CarouselSettings::default()
    }
}

pub fn manual_carousel(
    count: usize,
    settings: CarouselSettings,
) -> Carousel<RecordingView, ManualScheduler> {
    Carousel::new(
        make_slides(count),
        settings,
        RecordingView::default(),
        ManualScheduler::new(),
    )
    .expect("valid carousel")
}

/// Create a temporary config file with the given content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
