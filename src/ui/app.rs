use std::time::Duration;

use ratatui::layout::Rect;

use crate::catalog::Slide;
use crate::timer::{Scheduler, SystemScheduler};
use crate::ui::carousel::{Carousel, CarouselError, CarouselSettings, InputEvent, Outcome};
use crate::ui::layout::{layout_regions, Regions};
use crate::ui::stage::Stage;

/// Terminal application state: the carousel plus what only the terminal
/// front-end needs (screen size, status line, quit flag).
pub struct App<S = SystemScheduler> {
    should_quit: bool,
    size: Option<(u16, u16)>,
    status: Option<String>,
    carousel: Carousel<Stage, S>,
}

impl<S: Scheduler> App<S> {
    pub fn new(
        slides: Vec<Slide>,
        settings: CarouselSettings,
        scheduler: S,
    ) -> Result<Self, CarouselError> {
        let stage = Stage::new(slides.len());
        let carousel = Carousel::new(slides, settings, stage, scheduler)?;
        Ok(Self {
            should_quit: false,
            size: None,
            status: None,
            carousel,
        })
    }

    pub fn carousel(&self) -> &Carousel<Stage, S> {
        &self.carousel
    }

    pub fn stage(&self) -> &Stage {
        self.carousel.view()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        tracing::info!("quit requested");
        self.should_quit = true;
    }

    /// Last purchase confirmation, cleared when the slide changes.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Forward an input to the carousel and keep the status line current.
    pub fn dispatch(&mut self, event: InputEvent) -> Outcome {
        let before = self.carousel.current_index();
        let outcome = self.carousel.handle(event);
        if let Some(purchase) = &outcome.purchase {
            self.status = Some(purchase.summary(self.carousel.price_format()));
        } else if self.carousel.current_index() != before {
            self.status = None;
        }
        outcome
    }

    /// Deliver due autoplay ticks.
    pub fn on_tick(&mut self) {
        let before = self.carousel.current_index();
        self.carousel.poll_timers();
        if self.carousel.current_index() != before {
            self.status = None;
        }
    }

    /// How long the event loop may sleep before the next autoplay tick.
    pub fn until_next_timer(&self) -> Option<Duration> {
        self.carousel.scheduler().until_next()
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    /// Screen regions for the last known terminal size.
    pub fn regions(&self) -> Option<Regions> {
        self.size.map(|(width, height)| {
            layout_regions(Rect {
                x: 0,
                y: 0,
                width,
                height,
            })
        })
    }
}
