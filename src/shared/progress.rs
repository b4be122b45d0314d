pub const COMPLETE: f64 = 100.0;
/// Highest progress reported while still processing.
pub const MAX_RUNNING_PROGRESS: u8 = 99;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressStep {
    Running(u8),
    Done,
}

/// Accumulates random increments until the total reaches 100.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressTracker {
    accumulated: f64,
}

impl ProgressTracker {
    pub fn advance(&mut self, increment: f64) -> ProgressStep {
        self.accumulated += increment.max(0.0);
        if self.accumulated >= COMPLETE {
            ProgressStep::Done
        } else {
            ProgressStep::Running((self.accumulated as u8).min(MAX_RUNNING_PROGRESS))
        }
    }
}
