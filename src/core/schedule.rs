use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("could not schedule interval: {0}")]
pub struct ScheduleError(pub String);

/// Host timer service: something that can fire a callback on a fixed period
/// until told to stop. The callback target is bound when the scheduler is
/// built, so the trait only deals in handles.
pub trait IntervalScheduler {
    type Handle;

    fn schedule(&mut self, period: Duration) -> Result<Self::Handle, ScheduleError>;
    fn cancel(&mut self, handle: Self::Handle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// One step of a self-rescheduling loop (e.g. an animation frame).
pub trait FrameLoop {
    fn frame(&mut self) -> LoopControl;
}

/// Shared cancellation flag for a running frame loop. Drivers check it
/// before every frame; once cancelled a loop never runs again.
#[derive(Clone, Debug, Default)]
pub struct LoopHandle {
    cancelled: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Step `target` synchronously until it stops, the handle is cancelled, or
/// `max_frames` have run. Returns the number of frames executed.
pub fn run_frames<L: FrameLoop + ?Sized>(
    target: &mut L,
    handle: &LoopHandle,
    max_frames: usize,
) -> usize {
    let mut ran = 0;
    while ran < max_frames && !handle.is_cancelled() {
        ran += 1;
        if target.frame() == LoopControl::Stop {
            break;
        }
    }
    ran
}
