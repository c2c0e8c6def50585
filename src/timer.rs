use std::time::Duration;

use crate::scheduler::{IntervalId, Scheduler, Task};

/// Restartable periodic callback.
///
/// A stopped timer holds no scheduler entry; `start` always schedules from a
/// fresh interval, so elapsed time never carries over a pause.
#[derive(Debug)]
pub struct Timer {
    delay: Duration,
    routine: Task,
    interval: Option<IntervalId>,
}

impl Timer {
    pub fn new(delay: Duration, routine: Task) -> Self {
        Self {
            delay,
            routine,
            interval: None,
        }
    }

    pub fn start(&mut self, scheduler: &mut Scheduler) {
        if self.interval.is_none() {
            self.interval = Some(scheduler.set_interval(self.delay, self.routine));
        }
    }

    pub fn stop(&mut self, scheduler: &mut Scheduler) {
        if let Some(id) = self.interval.take() {
            scheduler.clear_interval(id);
        }
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    /// Fires `routine` once after `duration`. Cannot be cancelled.
    pub fn once(scheduler: &mut Scheduler, duration: Duration, routine: Task) {
        scheduler.set_timeout(duration, routine);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ElementId;

    fn count(scheduler: &mut Scheduler, elapsed: u64) -> usize {
        scheduler.advance(Duration::from_millis(elapsed));
        std::iter::from_fn(|| scheduler.pop_due()).count()
    }

    const TICK: Task = Task::Tick {
        container: ElementId(7),
    };

    fn timer() -> Timer {
        Timer::new(Duration::from_millis(2000), TICK)
    }

    #[test]
    fn stop_is_safe_before_start_and_repeated() {
        let mut scheduler = Scheduler::new();
        let mut timer = timer();
        timer.stop(&mut scheduler);
        timer.start(&mut scheduler);
        timer.stop(&mut scheduler);
        timer.stop(&mut scheduler);
        assert!(!timer.is_running());
        assert_eq!(count(&mut scheduler, 10_000), 0);
    }

    #[test]
    fn repeated_start_does_not_double_schedule() {
        let mut scheduler = Scheduler::new();
        let mut timer = timer();
        timer.start(&mut scheduler);
        timer.start(&mut scheduler);
        assert_eq!(count(&mut scheduler, 4000), 2);
    }

    #[test]
    fn restart_begins_a_fresh_interval() {
        let mut scheduler = Scheduler::new();
        let mut timer = timer();
        timer.start(&mut scheduler);
        assert_eq!(count(&mut scheduler, 1500), 0);
        timer.stop(&mut scheduler);
        timer.start(&mut scheduler);
        // 1500 ms already elapsed before the restart must not count
        assert_eq!(count(&mut scheduler, 1000), 0);
        assert_eq!(count(&mut scheduler, 1000), 1);
    }

    #[test]
    fn once_fires_a_single_time() {
        let mut scheduler = Scheduler::new();
        Timer::once(&mut scheduler, Duration::from_millis(500), TICK);
        assert_eq!(count(&mut scheduler, 400), 0);
        assert_eq!(count(&mut scheduler, 5000), 1);
    }
}
