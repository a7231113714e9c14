//! Self-rearming frame loop with an injectable scheduler.
//!
//! In the browser the scheduler is `requestAnimationFrame`; tests use
//! [`ManualScheduler`] and step frames by hand. There is no stop: once
//! started, the loop re-arms after every frame.

use crate::engine::AuraEngine;
use crate::surface::DrawSurface;

/// "Invoke the frame callback once before the next repaint."
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

/// Scheduler that only remembers whether a frame is armed.
#[derive(Default, Debug)]
pub struct ManualScheduler {
    pending: bool,
    requests: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the armed frame, if any.
    pub fn take_pending(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Total number of `request_frame` calls so far.
    pub fn requests(&self) -> u64 {
        self.requests
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) {
        self.pending = true;
        self.requests += 1;
    }
}

pub struct FrameLoop<S: FrameScheduler> {
    scheduler: S,
    frames: u64,
}

impl<S: FrameScheduler> FrameLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            frames: 0,
        }
    }

    /// Start the engine and arm the first frame. Idempotent: a second call
    /// neither respawns particles nor arms a second callback chain.
    pub fn start(&mut self, engine: &mut AuraEngine) -> bool {
        let started = engine.start();
        if started {
            self.scheduler.request_frame();
        }
        started
    }

    /// Render one frame and re-arm. The next frame is requested even when
    /// the surface reported an error, so a transient failure never ends
    /// the animation.
    pub fn tick<D: DrawSurface>(
        &mut self,
        engine: &mut AuraEngine,
        surface: &mut D,
    ) -> Result<(), D::Error> {
        let result = engine.render_frame(surface);
        self.frames += 1;
        self.scheduler.request_frame();
        result
    }

    /// Number of completed ticks.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

impl FrameLoop<ManualScheduler> {
    /// Run armed frames until none is pending or `max_frames` have run.
    /// Returns the number of frames rendered.
    pub fn run_pending<D: DrawSurface>(
        &mut self,
        engine: &mut AuraEngine,
        surface: &mut D,
        max_frames: u64,
    ) -> Result<u64, D::Error> {
        let mut ran = 0;
        while ran < max_frames && self.scheduler.take_pending() {
            self.tick(engine, surface)?;
            ran += 1;
        }
        Ok(ran)
    }
}
