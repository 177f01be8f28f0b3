use std::time::{Duration, Instant};

/// Fixed-rate tick scheduler for the event loop.
///
/// Time is always passed in, so the driver never sleeps or reads a clock.
#[derive(Debug, Clone, Copy)]
pub struct TickDriver {
    interval: Duration,
    next_due: Option<Instant>,
}

impl TickDriver {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    /// Starts ticking one interval after `now`. No effect when already
    /// running.
    pub fn start(&mut self, now: Instant) {
        if self.next_due.is_none() {
            self.next_due = Some(now + self.interval);
        }
    }

    /// Stops ticking. No effect when already stopped.
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    /// Starts or stops the driver to match `should_run`.
    pub fn sync(&mut self, should_run: bool, now: Instant) {
        if should_run {
            self.start(now);
        } else {
            self.stop();
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Returns true when a tick is due at `now` and schedules the next one.
    ///
    /// Overdue ticks are not replayed; the schedule restarts from `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    /// Time until the next tick, or `None` while stopped.
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::TickDriver;

    const INTERVAL: Duration = Duration::from_millis(100);

    #[test]
    fn stopped_driver_never_ticks() {
        let mut driver = TickDriver::new(INTERVAL);
        let now = Instant::now();

        assert!(!driver.is_running());
        assert!(!driver.poll(now + INTERVAL * 5));
        assert_eq!(driver.time_until_due(now), None);
    }

    #[test]
    fn running_driver_ticks_once_per_interval() {
        let mut driver = TickDriver::new(INTERVAL);
        let start = Instant::now();
        driver.start(start);

        assert!(!driver.poll(start + Duration::from_millis(50)));
        assert!(driver.poll(start + INTERVAL));
        assert!(!driver.poll(start + INTERVAL + Duration::from_millis(10)));
        assert!(driver.poll(start + INTERVAL * 2));
    }

    #[test]
    fn start_and_stop_are_idempotent() {
        let mut driver = TickDriver::new(INTERVAL);
        let start = Instant::now();

        driver.start(start);
        driver.start(start + Duration::from_millis(90));
        assert!(driver.poll(start + INTERVAL));

        driver.stop();
        driver.stop();
        assert!(!driver.is_running());
        assert!(!driver.poll(start + INTERVAL * 3));
    }

    #[test]
    fn sync_follows_requested_state() {
        let mut driver = TickDriver::new(INTERVAL);
        let now = Instant::now();

        driver.sync(true, now);
        assert!(driver.is_running());
        assert_eq!(driver.time_until_due(now), Some(INTERVAL));

        driver.sync(false, now);
        assert!(!driver.is_running());
    }
}
