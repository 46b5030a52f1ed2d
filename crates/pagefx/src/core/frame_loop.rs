/// Handle returned by a frame scheduler (the `requestAnimationFrame` id in the browser).
pub type FrameHandle = i32;

/// Something that can run a callback on the next display refresh.
///
/// The scheduler owns the callback itself; `FrameLoop` only tracks whether a
/// frame is pending.
pub trait FrameScheduler {
    type Error;

    /// Schedule the callback for the next frame.
    fn request_frame(&self) -> Result<FrameHandle, Self::Error>;

    /// Withdraw a previously scheduled frame.
    fn cancel_frame(&self, handle: FrameHandle);
}

/// Start/stop handle for a repeating per-frame task.
///
/// At most one frame is pending at any time. The owner calls `begin_frame` at
/// the top of the frame callback and `end_frame` after doing its work; the loop
/// reschedules itself only if it was not stopped in between. A `start` issued
/// during a frame always schedules the next one, even if the step reports it
/// is finished.
#[derive(Debug, Default)]
pub struct FrameLoop {
    pending: Option<FrameHandle>,
    in_frame: bool,
    stopped_in_frame: bool,
    started_in_frame: bool,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a frame is scheduled or currently running.
    pub fn is_running(&self) -> bool {
        self.pending.is_some() || (self.in_frame && !self.stopped_in_frame)
    }

    /// Schedule the first frame. Returns `Ok(false)` if already running.
    pub fn start<S: FrameScheduler>(&mut self, scheduler: &S) -> Result<bool, S::Error> {
        if self.in_frame {
            // end_frame does the scheduling.
            let was_stopped = self.stopped_in_frame;
            self.stopped_in_frame = false;
            self.started_in_frame = true;
            return Ok(was_stopped);
        }
        if self.pending.is_some() {
            return Ok(false);
        }
        self.pending = Some(scheduler.request_frame()?);
        Ok(true)
    }

    /// Cancel the pending frame. Returns false if nothing was running.
    pub fn stop<S: FrameScheduler>(&mut self, scheduler: &S) -> bool {
        if self.in_frame && !self.stopped_in_frame {
            self.stopped_in_frame = true;
            self.started_in_frame = false;
            return true;
        }
        match self.pending.take() {
            Some(handle) => {
                scheduler.cancel_frame(handle);
                true
            }
            None => false,
        }
    }

    /// Mark the start of a frame callback. Returns false for a stale callback
    /// that should do nothing (the loop was stopped after it was scheduled).
    pub fn begin_frame(&mut self) -> bool {
        if self.pending.take().is_none() {
            return false;
        }
        self.in_frame = true;
        self.stopped_in_frame = false;
        self.started_in_frame = false;
        true
    }

    /// Finish the current frame. The next one is scheduled when `keep_going` is
    /// set or `start` was called during the frame, unless `stop` came last.
    pub fn end_frame<S: FrameScheduler>(
        &mut self,
        scheduler: &S,
        keep_going: bool,
    ) -> Result<(), S::Error> {
        let reschedule =
            self.in_frame && !self.stopped_in_frame && (keep_going || self.started_in_frame);
        self.in_frame = false;
        self.stopped_in_frame = false;
        self.started_in_frame = false;
        if reschedule {
            self.pending = Some(scheduler.request_frame()?);
        }
        Ok(())
    }
}
