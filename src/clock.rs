/// Gates how often the simulation advances, independent of frame rate.
///
/// Elapsed time is fed in from the host loop via `advance`; `should_step`
/// grants at most one step per call and resets the accumulator to zero when
/// it does. The accumulator keeps advancing while paused, so unpausing after
/// a long pause steps once immediately.
#[derive(Debug)]
pub struct TickScheduler {
    tick_interval_ms: f64,
    accumulated_ms: f64,
    running: bool,
}

pub const DEFAULT_TICK_INTERVAL_MS: f64 = 40.0;

impl TickScheduler {
    pub fn new(tick_interval_ms: f64) -> Self {
        Self {
            tick_interval_ms,
            accumulated_ms: 0.0,
            running: false,
        }
    }

    pub fn advance(&mut self, delta_ms: f64) {
        self.accumulated_ms += delta_ms;
    }

    /// True exactly when running and a full interval has accumulated.
    /// Consuming: a true result resets the accumulator.
    pub fn should_step(&mut self) -> bool {
        if self.running && self.accumulated_ms >= self.tick_interval_ms {
            self.accumulated_ms = 0.0;
            true
        } else {
            false
        }
    }

    pub fn toggle_running(&mut self) {
        self.running = !self.running;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_step_below_interval() {
        let mut clock = TickScheduler::new(40.0);
        clock.toggle_running();
        clock.advance(39.9);
        assert!(!clock.should_step());
    }

    #[test]
    fn one_step_per_interval_crossing() {
        let mut clock = TickScheduler::new(40.0);
        clock.toggle_running();
        clock.advance(45.0);
        assert!(clock.should_step());
        // accumulator was reset, not decremented
        assert!(!clock.should_step());
        clock.advance(39.0);
        assert!(!clock.should_step());
        clock.advance(1.0);
        assert!(clock.should_step());
    }

    #[test]
    fn never_steps_while_paused() {
        let mut clock = TickScheduler::new(40.0);
        clock.advance(1000.0);
        assert!(!clock.should_step());
        // time kept accumulating while paused
        clock.toggle_running();
        assert!(clock.should_step());
    }

    #[test]
    fn toggle_flips_run_state() {
        let mut clock = TickScheduler::new(40.0);
        assert!(!clock.is_running());
        clock.toggle_running();
        assert!(clock.is_running());
        clock.toggle_running();
        assert!(!clock.is_running());
    }
}
