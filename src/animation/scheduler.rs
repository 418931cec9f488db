use crate::foundation::core::{Fps, FrameIndex};

/// Something advanced once per host repaint.
pub trait FrameClient {
    /// Run one frame. `dt_secs` is the nominal frame duration.
    fn on_frame(&mut self, frame: FrameIndex, dt_secs: f64);
}

/// Lifecycle of a [`FrameScheduler`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerState {
    /// Created, no frame requested yet.
    Idle,
    /// A frame is requested and each tick re-arms the next one.
    Running,
    /// Torn down. Terminal: no further frames run.
    Stopped,
}

/// Explicit stand-in for the host's "request next frame" chain.
///
/// The host calls [`FrameScheduler::tick`] once per repaint. A tick runs the client only while a
/// frame is armed, and re-arms at the end of the frame, so the loop continues for as long as the
/// owner keeps the scheduler running.
#[derive(Clone, Debug)]
pub struct FrameScheduler {
    fps: Fps,
    state: SchedulerState,
    armed: bool,
    next: FrameIndex,
}

impl FrameScheduler {
    pub fn new(fps: Fps) -> Self {
        Self {
            fps,
            state: SchedulerState::Idle,
            armed: false,
            next: FrameIndex(0),
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn fps(&self) -> Fps {
        self.fps
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Frames run so far.
    pub fn frames_run(&self) -> u64 {
        self.next.0
    }

    /// Request the first frame. Returns `false` once the scheduler has been stopped.
    pub fn start(&mut self) -> bool {
        match self.state {
            SchedulerState::Stopped => {
                tracing::warn!("start requested on a stopped frame scheduler");
                false
            }
            SchedulerState::Idle | SchedulerState::Running => {
                self.state = SchedulerState::Running;
                self.armed = true;
                true
            }
        }
    }

    /// Cancel the pending frame and refuse to run any more.
    pub fn stop(&mut self) {
        if self.state != SchedulerState::Stopped {
            tracing::debug!(frames = self.next.0, "frame scheduler stopped");
        }
        self.state = SchedulerState::Stopped;
        self.armed = false;
    }

    /// Run the armed frame, if any, and re-arm. Returns the index of the frame that ran.
    pub fn tick(&mut self, client: &mut dyn FrameClient) -> Option<FrameIndex> {
        if self.state != SchedulerState::Running || !self.armed {
            return None;
        }
        self.armed = false;
        let frame = self.next;
        client.on_frame(frame, self.fps.frame_duration_secs());
        self.next = frame.next();
        self.armed = self.state == SchedulerState::Running;
        Some(frame)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/scheduler.rs"]
mod tests;
