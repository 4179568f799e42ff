//! Carousel controller: the reducer plus timer and view effects.

use std::time::Duration;

use thiserror::Error;

use crate::catalog::{PriceFormat, Purchase, Slide};
use crate::timer::{ManualScheduler, Scheduler, TimerHandle};
use crate::ui::mvi::Reducer;

use super::gesture::{GestureKind, SwipeDirection, SwipeTracker};
use super::intent::CarouselIntent;
use super::keys::{Key, KeyResponse};
use super::reducer::CarouselReducer;
use super::state::CarouselState;
use super::view::CarouselView;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Errors raised while building a carousel.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    #[error("Carousel needs at least one slide")]
    NoSlides,

    #[error("Autoplay interval must be greater than zero")]
    ZeroInterval,

    #[error("Swipe threshold must be greater than zero")]
    ZeroThreshold,
}

/// Construction-time options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselSettings {
    /// Delay between automatic advances.
    pub interval: Duration,
    /// Initial slide; normalized into range like any `go_to`.
    pub start_index: i64,
    /// Start in the playing state.
    pub autoplay: bool,
    /// Minimum horizontal travel, in input units, for a drag to count as a swipe.
    pub swipe_threshold: u32,
    /// Currency symbol used in price text.
    pub currency: String,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(2000),
            start_index: 0,
            autoplay: true,
            swipe_threshold: 100,
            currency: "€".to_string(),
        }
    }
}

/// Every input the carousel reacts to, whatever surface produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    NextRequested,
    PrevRequested,
    ToggleRequested,
    IndicatorSelected(usize),
    KeyDown(Key),
    GestureStart { kind: GestureKind, x: i32 },
    GestureEnd { kind: GestureKind, x: i32 },
    /// Pointer left the slide area while pressed.
    GestureLeave { x: i32 },
    QuantityChanged(i64),
    QuantityIncreased,
    QuantityDecreased,
    QuantityReset,
    BuyRequested,
    TimerFired(TimerHandle),
}

/// Result of [`Carousel::handle`] the host may need to act on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// The host must suppress its default action for the triggering event.
    pub default_prevented: bool,
    /// Set when the event completed a purchase.
    pub purchase: Option<Purchase>,
}

/// Single owner of slide position, autoplay and quantity.
///
/// All inputs funnel through `&mut self`, so transitions are serialized.
/// After every public call `is_playing()` holds exactly when one autoplay
/// timer is armed: each path that touches the timer cancels the old handle
/// before arming a new one.
pub struct Carousel<V, S> {
    slides: Vec<Slide>,
    settings: CarouselSettings,
    price_format: PriceFormat,
    state: CarouselState,
    timer: Option<TimerHandle>,
    swipe: SwipeTracker,
    view: V,
    scheduler: S,
}

impl<V: CarouselView, S: Scheduler> Carousel<V, S> {
    /// Build the carousel and render its initial state. Arms autoplay when
    /// `settings.autoplay` is set.
    pub fn new(
        slides: Vec<Slide>,
        settings: CarouselSettings,
        view: V,
        scheduler: S,
    ) -> Result<Self, CarouselError> {
        if slides.is_empty() {
            return Err(CarouselError::NoSlides);
        }
        if settings.interval.is_zero() {
            return Err(CarouselError::ZeroInterval);
        }
        if settings.swipe_threshold == 0 {
            return Err(CarouselError::ZeroThreshold);
        }

        let state = CarouselState::new(slides.len(), settings.start_index, settings.autoplay);
        let mut carousel = Self {
            swipe: SwipeTracker::new(settings.swipe_threshold),
            price_format: PriceFormat::new(settings.currency.clone()),
            slides,
            settings,
            state,
            timer: None,
            view,
            scheduler,
        };
        carousel.mount();
        Ok(carousel)
    }

    fn mount(&mut self) {
        tracing::info!(
            slides = self.slides.len(),
            start = self.state.current_index,
            autoplay = self.state.is_playing,
            "carousel mounted"
        );
        self.render_position();
        self.view.render_play_icon(self.state.is_playing);
        if self.state.is_playing {
            self.arm_timer();
        }
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    pub fn quantity(&self) -> u64 {
        self.state.quantity
    }

    pub fn is_quantity_dirty(&self) -> bool {
        self.state.quantity_dirty
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn current_slide(&self) -> &Slide {
        &self.slides[self.state.current_index]
    }

    pub fn price_format(&self) -> &PriceFormat {
        &self.price_format
    }

    /// Handle of the armed autoplay timer, if any.
    pub fn timer(&self) -> Option<TimerHandle> {
        self.timer
    }

    pub fn is_swiping(&self) -> bool {
        self.swipe.is_tracking()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Show slide `n`, wrapping any integer into range.
    pub fn go_to(&mut self, n: i64) {
        let from = self.state.current_index;
        self.dispatch(CarouselIntent::GoTo { index: n });
        self.after_navigation(from);
    }

    pub fn next(&mut self) {
        let from = self.state.current_index;
        self.dispatch(CarouselIntent::Next);
        self.after_navigation(from);
    }

    pub fn previous(&mut self) {
        let from = self.state.current_index;
        self.dispatch(CarouselIntent::Previous);
        self.after_navigation(from);
    }

    fn after_navigation(&mut self, from: usize) {
        tracing::debug!(from, to = self.state.current_index, "slide changed");
        self.render_position();
        if self.state.is_playing {
            self.arm_timer();
        }
    }

    // ========================================================================
    // Playback
    // ========================================================================

    pub fn pause(&mut self) {
        if !self.state.is_playing {
            return;
        }
        self.cancel_timer();
        self.dispatch(CarouselIntent::Pause);
        tracing::debug!(index = self.state.current_index, "autoplay paused");
        self.view.render_play_icon(false);
    }

    pub fn resume(&mut self) {
        if self.state.is_playing {
            return;
        }
        self.dispatch(CarouselIntent::Resume);
        tracing::debug!(index = self.state.current_index, "autoplay resumed");
        self.view.render_play_icon(true);
        self.arm_timer();
    }

    pub fn toggle(&mut self) {
        self.dispatch(CarouselIntent::Toggle);
        if self.state.is_playing {
            tracing::debug!(index = self.state.current_index, "autoplay resumed");
            self.arm_timer();
        } else {
            tracing::debug!(index = self.state.current_index, "autoplay paused");
            self.cancel_timer();
        }
        self.view.render_play_icon(self.state.is_playing);
    }

    /// Advance on an autoplay tick. Returns false for a handle that is no
    /// longer the armed one.
    pub fn on_timer_fired(&mut self, handle: TimerHandle) -> bool {
        if self.timer != Some(handle) {
            tracing::trace!(timer = handle.id(), "ignoring stale timer");
            return false;
        }
        tracing::trace!(timer = handle.id(), "autoplay tick");
        self.next();
        true
    }

    /// Deliver every timer the scheduler reports as due.
    pub fn poll_timers(&mut self) {
        while let Some(handle) = self.scheduler.take_due() {
            self.on_timer_fired(handle);
        }
    }

    fn arm_timer(&mut self) {
        self.cancel_timer();
        self.timer = Some(self.scheduler.arm(self.settings.interval));
    }

    fn cancel_timer(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.scheduler.cancel(handle);
        }
    }

    // ========================================================================
    // Quantity & price
    // ========================================================================

    /// Manual quantity entry, clamped to at least 1.
    pub fn set_quantity(&mut self, value: i64) {
        self.dispatch(CarouselIntent::SetQuantity { value });
        self.render_quantity();
    }

    /// Add one item. Also pauses autoplay so the next tick does not throw the
    /// selection away.
    pub fn increase_quantity(&mut self) {
        self.pause();
        self.dispatch(CarouselIntent::IncreaseQuantity);
        self.render_quantity();
    }

    pub fn decrease_quantity(&mut self) {
        self.dispatch(CarouselIntent::DecreaseQuantity);
        self.render_quantity();
    }

    pub fn reset_quantity(&mut self) {
        self.dispatch(CarouselIntent::ResetQuantity);
        self.render_quantity();
    }

    /// Price text for the current slide and quantity.
    pub fn compute_price(&self) -> String {
        self.price_format
            .quote(self.current_slide().price, self.state.quantity)
    }

    /// Buy the current slide at the current quantity, then reset the quantity.
    pub fn buy(&mut self) -> Purchase {
        let purchase = Purchase::new(self.current_slide(), self.state.quantity);
        tracing::info!(
            item = %purchase.name,
            quantity = purchase.quantity,
            total = purchase.total,
            "purchase"
        );
        self.reset_quantity();
        purchase
    }

    // ========================================================================
    // Keyboard & gestures
    // ========================================================================

    pub fn on_key_down(&mut self, key: Key) -> KeyResponse {
        match key {
            Key::Space => {
                self.toggle();
                KeyResponse::DefaultPrevented
            }
            Key::ArrowLeft => {
                self.previous();
                KeyResponse::Handled
            }
            Key::ArrowRight => {
                self.next();
                KeyResponse::Handled
            }
            Key::Other => KeyResponse::Ignored,
        }
    }

    pub fn on_gesture_start(&mut self, kind: GestureKind, x: i32) {
        self.swipe.begin(kind, x);
    }

    pub fn on_gesture_end(&mut self, kind: GestureKind, x: i32) -> Option<SwipeDirection> {
        let direction = self.swipe.finish(kind, x);
        self.apply_swipe(direction);
        direction
    }

    pub fn on_gesture_leave(&mut self, x: i32) -> Option<SwipeDirection> {
        let direction = self.swipe.leave(x);
        self.apply_swipe(direction);
        direction
    }

    fn apply_swipe(&mut self, direction: Option<SwipeDirection>) {
        if let Some(direction) = direction {
            tracing::debug!(?direction, threshold = self.swipe.threshold(), "swipe");
        }
        match direction {
            Some(SwipeDirection::Previous) => self.previous(),
            Some(SwipeDirection::Next) => self.next(),
            None => {}
        }
    }

    /// Route one input event to the matching command.
    pub fn handle(&mut self, event: InputEvent) -> Outcome {
        let mut outcome = Outcome::default();
        match event {
            InputEvent::NextRequested => self.next(),
            InputEvent::PrevRequested => self.previous(),
            InputEvent::ToggleRequested => self.toggle(),
            InputEvent::IndicatorSelected(index) => {
                self.go_to(i64::try_from(index).unwrap_or(i64::MAX))
            }
            InputEvent::KeyDown(key) => {
                outcome.default_prevented = self.on_key_down(key).default_prevented();
            }
            InputEvent::GestureStart { kind, x } => self.on_gesture_start(kind, x),
            InputEvent::GestureEnd { kind, x } => {
                self.on_gesture_end(kind, x);
            }
            InputEvent::GestureLeave { x } => {
                self.on_gesture_leave(x);
            }
            InputEvent::QuantityChanged(value) => self.set_quantity(value),
            InputEvent::QuantityIncreased => self.increase_quantity(),
            InputEvent::QuantityDecreased => self.decrease_quantity(),
            InputEvent::QuantityReset => self.reset_quantity(),
            InputEvent::BuyRequested => outcome.purchase = Some(self.buy()),
            InputEvent::TimerFired(handle) => {
                self.on_timer_fired(handle);
            }
        }
        outcome
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn dispatch(&mut self, intent: CarouselIntent) {
        dispatch_mvi!(self, state, CarouselReducer, intent);
    }

    fn render_position(&mut self) {
        let index = self.state.current_index;
        self.view.render_slide(index);
        self.view.render_indicator(index);
        let title = self.slides[index].name.clone();
        self.view.render_title(&title);
        self.render_quantity();
    }

    fn render_quantity(&mut self) {
        self.view.render_quantity(self.state.quantity);
        let price = self.compute_price();
        self.view.render_price(&price);
    }
}

impl<V: CarouselView> Carousel<V, ManualScheduler> {
    /// Move virtual time forward, firing every autoplay tick that falls due
    /// along the way in order.
    pub fn advance(&mut self, by: Duration) {
        let target = self.scheduler.now() + by;
        while self.scheduler.step_toward(target) {
            self.poll_timers();
        }
    }
}
