//! Rendering capabilities the carousel drives.

/// Presentation callbacks invoked after every state change.
///
/// The carousel decides *what* is shown; implementors decide how it is drawn.
/// `render_slide` and `render_indicator` mark one position as active, so an
/// implementor must clear the previously active one.
pub trait CarouselView {
    fn render_slide(&mut self, index: usize);
    fn render_indicator(&mut self, index: usize);
    fn render_title(&mut self, text: &str);
    fn render_price(&mut self, text: &str);
    fn render_quantity(&mut self, quantity: u64);
    fn render_play_icon(&mut self, is_playing: bool);
}
