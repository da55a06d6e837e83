use super::constants::{AUTOPLAY_PERIOD, SLIDE_OFFSET_STEP_PERCENT};
use super::schedule::{IntervalScheduler, ScheduleError};
use std::time::Duration;
use thiserror::Error;

/// Horizontal strip of slides that can be shifted by a percentage of one
/// slide's width.
pub trait SlideTrack {
    fn set_offset_percent(&mut self, percent: f64);
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AutoplayError {
    #[error("carousel has no slides")]
    NoSlides,
    #[error("autoplay is already running")]
    AlreadyRunning,
    #[error(transparent)]
    Timer(#[from] ScheduleError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AutoplayState {
    Running,
    Paused,
}

pub struct Carousel<T: SlideTrack, S: IntervalScheduler> {
    track: T,
    scheduler: S,
    timer: Option<S::Handle>,
    slide_count: usize,
    current: usize,
    period: Duration,
}

impl<T: SlideTrack, S: IntervalScheduler> Carousel<T, S> {
    /// Build the carousel and begin autoplay immediately.
    pub fn new(track: T, scheduler: S, slide_count: usize) -> Result<Self, AutoplayError> {
        Self::with_period(track, scheduler, slide_count, AUTOPLAY_PERIOD)
    }

    pub fn with_period(
        track: T,
        scheduler: S,
        slide_count: usize,
        period: Duration,
    ) -> Result<Self, AutoplayError> {
        if slide_count == 0 {
            return Err(AutoplayError::NoSlides);
        }
        let mut carousel = Self {
            track,
            scheduler,
            timer: None,
            slide_count,
            current: 0,
            period,
        };
        carousel.start()?;
        Ok(carousel)
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn state(&self) -> AutoplayState {
        if self.timer.is_some() {
            AutoplayState::Running
        } else {
            AutoplayState::Paused
        }
    }

    pub fn track(&self) -> &T {
        &self.track
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Callers pass an index already wrapped into `[0, slide_count)`.
    pub fn go_to(&mut self, index: usize) {
        self.track
            .set_offset_percent(-(index as f64) * SLIDE_OFFSET_STEP_PERCENT);
        self.current = index;
    }

    pub fn advance(&mut self) {
        let next = (self.current + 1) % self.slide_count;
        self.go_to(next);
    }

    pub fn start(&mut self) -> Result<(), AutoplayError> {
        if self.timer.is_some() {
            return Err(AutoplayError::AlreadyRunning);
        }
        // Stays paused if the host refuses the timer.
        self.timer = Some(self.scheduler.schedule(self.period)?);
        Ok(())
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.scheduler.cancel(handle);
        }
    }

    /// Timer callback. Firings that race a cancel are dropped.
    pub fn on_interval(&mut self) {
        if self.state() == AutoplayState::Running {
            self.advance();
        }
    }

    pub fn pointer_enter(&mut self) {
        self.stop();
    }

    pub fn pointer_leave(&mut self) {
        match self.start() {
            Ok(()) => {}
            Err(AutoplayError::AlreadyRunning) => {
                log::debug!("[carousel] pointer leave while already running");
            }
            Err(e) => log::warn!("[carousel] autoplay not resumed: {}", e),
        }
    }
}
