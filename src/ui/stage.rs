//! Retained view model the terminal renderer reads from.

use crate::ui::carousel::CarouselView;

/// Everything the carousel last told the view to show.
///
/// Keeps one active flag per slide and per indicator so the render pass and
/// tests can check that exactly one of each is lit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    slides: Vec<bool>,
    indicators: Vec<bool>,
    title: String,
    price: String,
    quantity: u64,
    playing: bool,
}

impl Stage {
    pub fn new(slide_count: usize) -> Self {
        Self {
            slides: vec![false; slide_count],
            indicators: vec![false; slide_count],
            title: String::new(),
            price: String::new(),
            quantity: 1,
            playing: false,
        }
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn active_slides(&self) -> Vec<usize> {
        active(&self.slides)
    }

    pub fn active_indicators(&self) -> Vec<usize> {
        active(&self.indicators)
    }

    pub fn is_indicator_active(&self, index: usize) -> bool {
        self.indicators.get(index).copied().unwrap_or(false)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// True while autoplay runs, i.e. the control shows a pause icon.
    pub fn shows_pause_icon(&self) -> bool {
        self.playing
    }
}

fn active(flags: &[bool]) -> Vec<usize> {
    flags
        .iter()
        .enumerate()
        .filter_map(|(index, on)| on.then_some(index))
        .collect()
}

fn activate(flags: &mut [bool], index: usize) {
    for (i, flag) in flags.iter_mut().enumerate() {
        *flag = i == index;
    }
}

impl CarouselView for Stage {
    fn render_slide(&mut self, index: usize) {
        activate(&mut self.slides, index);
    }

    fn render_indicator(&mut self, index: usize) {
        activate(&mut self.indicators, index);
    }

    fn render_title(&mut self, text: &str) {
        self.title = text.to_string();
    }

    fn render_price(&mut self, text: &str) {
        self.price = text.to_string();
    }

    fn render_quantity(&mut self, quantity: u64) {
        self.quantity = quantity;
    }

    fn render_play_icon(&mut self, is_playing: bool) {
        self.playing = is_playing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_nothing_active() {
        let stage = Stage::new(3);
        assert!(stage.active_slides().is_empty());
        assert!(stage.active_indicators().is_empty());
    }

    #[test]
    fn rendering_a_slide_deactivates_the_previous_one() {
        let mut stage = Stage::new(3);
        stage.render_slide(0);
        stage.render_slide(2);
        assert_eq!(stage.active_slides(), vec![2]);
    }

    #[test]
    fn indicator_lookup_out_of_range_is_inactive() {
        let mut stage = Stage::new(2);
        stage.render_indicator(1);
        assert!(stage.is_indicator_active(1));
        assert!(!stage.is_indicator_active(5));
    }
}
