/// Guards a requestAnimationFrame chain so that pausing and resuming never
/// leaves two chains running.
///
/// - `running`: whether frames should render and reschedule.
/// - `scheduled`: whether a frame request is currently outstanding.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrameGate {
    running: bool,
    scheduled: bool,
}

impl FrameGate {
    /// Start or resume. Returns true when the caller must request a frame.
    pub fn resume(&mut self) -> bool {
        self.running = true;
        if self.scheduled {
            return false;
        }
        self.scheduled = true;
        true
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Called at the top of each frame callback. Returns true when the frame
    /// should render and request its successor.
    pub fn begin_frame(&mut self) -> bool {
        self.scheduled = self.running;
        self.running
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[cfg(test)]
    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }
}
