/// Per-recipe preparation countdown
///
/// A small state machine driven by an external one-second tick (the UI
/// subscribes to a repeating timer only while the engine is running, so
/// a paused or stopped engine never receives a tick — and even a late
/// tick is a no-op outside the running phase). Each detail screen owns
/// its own engine; instances are plain values and fully independent.

/// What the engine is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Not counting; `remaining` holds the target (or 0 after running out)
    Idle,
    /// An external tick decrements `remaining` once per second
    Running,
    /// Counting suspended; `remaining` retained for resume
    Paused,
}

/// Countdown state machine for one detail screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerEngine {
    /// Configured countdown length in seconds
    target: u32,
    /// Seconds left on the clock
    remaining: u32,
    /// The value `remaining` had when the user last pressed stop
    last_recorded: u32,
    phase: Phase,
}

impl TimerEngine {
    /// Create an idle engine with the given countdown length
    pub fn new(target: u32) -> Self {
        Self {
            target,
            remaining: target,
            last_recorded: 0,
            phase: Phase::Idle,
        }
    }

    /// Begin (or restart an exhausted) countdown.
    ///
    /// If the previous run counted all the way down, the clock reloads
    /// from the target first. Starting while already running is a no-op;
    /// there is only ever one tick source per engine.
    pub fn start(&mut self) {
        if self.remaining == 0 {
            self.remaining = self.target;
        }
        self.phase = Phase::Running;
    }

    /// Advance the clock by one second. Only meaningful while running;
    /// reaching zero stops the countdown without user action.
    pub fn tick(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.phase = Phase::Idle;
        }
    }

    /// Suspend the countdown, keeping the current remaining time
    pub fn pause(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Paused;
        }
    }

    /// Continue a suspended countdown from where it left off.
    ///
    /// Does nothing while running or when there is no time left to count;
    /// it never reloads the clock from the target.
    pub fn resume(&mut self) {
        if self.phase != Phase::Running && self.remaining > 0 {
            self.phase = Phase::Running;
        }
    }

    /// Stop the countdown: remember the current remaining time for
    /// display, reset the clock to the target, and go idle.
    pub fn stop(&mut self) {
        self.last_recorded = self.remaining;
        self.remaining = self.target;
        self.phase = Phase::Idle;
    }

    /// Change the countdown length and reset the clock to it.
    /// Ignored while running.
    pub fn set_target(&mut self, target: u32) {
        if self.phase == Phase::Running {
            return;
        }
        self.target = target;
        self.remaining = target;
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Remaining time the engine had when stop was last pressed
    pub fn last_recorded(&self) -> u32 {
        self.last_recorded
    }

    /// Fraction of the countdown already elapsed, for a progress bar
    pub fn progress(&self) -> f32 {
        if self.target == 0 {
            0.0
        } else {
            1.0 - self.remaining as f32 / self.target as f32
        }
    }
}

/// Render a second count as MM:SS
pub fn format_mmss(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
