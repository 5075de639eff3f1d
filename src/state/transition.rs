// Transition timing - lock timeout fallback and animation clock
use crate::model::Section;
use crate::state::navigation::{Direction, NavigationObserver, NavigationSnapshot};
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionTiming {
    /// Length of the section rotation.
    pub duration: Duration,
    /// Delay before the incoming section starts moving.
    pub enter_delay: Duration,
}

impl TransitionTiming {
    /// Full visual length of a transition, delay included.
    pub fn total(&self) -> Duration {
        self.duration + self.enter_delay
    }
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(800),
            enter_delay: Duration::from_millis(100),
        }
    }
}

/// Safety net for the transition lock: armed when a command is accepted,
/// disarmed by an explicit completion, fires exactly once otherwise.
#[derive(Debug)]
pub struct LockTimer {
    timeout: Duration,
    deadline: Option<Instant>,
}

impl LockTimer {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            deadline: None,
        }
    }

    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.timeout);
    }

    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    #[cfg(test)]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    #[cfg(test)]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }

    /// Returns `true` once when the deadline has passed, then disarms.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Records when the last committed transition started so the deck view can
/// derive animation progress.
#[derive(Debug, Default)]
pub struct TransitionClock {
    timing: TransitionTiming,
    started: Option<Instant>,
    direction: Direction,
    from: usize,
    to: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionProgress {
    pub direction: Direction,
    pub from: usize,
    pub to: usize,
    /// Outgoing section progress, `0.0..=1.0`.
    pub exit: f32,
    /// Incoming section progress, `0.0..=1.0`, delayed by `enter_delay`.
    pub enter: f32,
}

impl TransitionProgress {
    pub fn is_finished(&self) -> bool {
        self.exit >= 1.0 && self.enter >= 1.0
    }
}

impl TransitionClock {
    pub fn new(timing: TransitionTiming) -> Self {
        Self {
            timing,
            ..Self::default()
        }
    }

    pub fn start(&mut self, from: usize, to: usize, direction: Direction, now: Instant) {
        self.started = Some(now);
        self.from = from;
        self.to = to;
        self.direction = direction;
    }

    pub fn progress(&self, now: Instant) -> Option<TransitionProgress> {
        let started = self.started?;
        let elapsed = now.saturating_duration_since(started);
        let duration = self.timing.duration.as_secs_f32().max(f32::EPSILON);
        let exit = (elapsed.as_secs_f32() / duration).clamp(0.0, 1.0);
        let enter = (elapsed.saturating_sub(self.timing.enter_delay).as_secs_f32() / duration)
            .clamp(0.0, 1.0);
        Some(TransitionProgress {
            direction: self.direction,
            from: self.from,
            to: self.to,
            exit,
            enter,
        })
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }
}

impl NavigationObserver for TransitionClock {
    fn on_navigate(&mut self, snapshot: &NavigationSnapshot, _sections: &[Section]) {
        self.start(
            snapshot.previous,
            snapshot.current,
            snapshot.direction,
            Instant::now(),
        );
    }

    fn on_settle(&mut self, _snapshot: &NavigationSnapshot) {
        self.started = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_timing_total() {
        assert_eq!(TransitionTiming::default().total(), ms(900));
    }

    #[test]
    fn test_lock_timer_fires_once() {
        let mut timer = LockTimer::new(ms(800));
        let t0 = Instant::now();
        assert!(!timer.poll(t0));

        timer.arm(t0);
        assert!(timer.is_armed());
        assert!(!timer.poll(t0 + ms(799)));
        assert_eq!(timer.remaining(t0 + ms(300)), Some(ms(500)));
        assert!(timer.poll(t0 + ms(800)));
        assert!(!timer.poll(t0 + ms(900)));
        assert!(!timer.is_armed());
    }

    #[test]
    fn test_lock_timer_disarm_wins() {
        let mut timer = LockTimer::new(ms(800));
        let t0 = Instant::now();
        timer.arm(t0);
        timer.disarm();
        assert!(!timer.poll(t0 + ms(2000)));
    }

    #[test]
    fn test_rearm_extends_deadline() {
        let mut timer = LockTimer::new(ms(800));
        let t0 = Instant::now();
        timer.arm(t0);
        timer.arm(t0 + ms(500));
        assert!(!timer.poll(t0 + ms(900)));
        assert!(timer.poll(t0 + ms(1300)));
    }

    #[test]
    fn test_clock_progress() {
        let mut clock = TransitionClock::new(TransitionTiming::default());
        let t0 = Instant::now();
        assert_eq!(clock.progress(t0), None);

        clock.start(0, 1, Direction::Forward, t0);
        let p = clock.progress(t0 + ms(400)).expect("clock started");
        assert!((p.exit - 0.5).abs() < 1e-6);
        assert!((p.enter - 0.375).abs() < 1e-6);
        assert!(!p.is_finished());

        let p = clock.progress(t0 + ms(50)).expect("clock started");
        assert_eq!(p.enter, 0.0);

        let p = clock.progress(t0 + ms(900)).expect("clock started");
        assert!(p.is_finished());
        assert_eq!((p.from, p.to, p.direction), (0, 1, Direction::Forward));
    }

    #[test]
    fn test_clock_follows_store() {
        let snapshot = NavigationSnapshot {
            current: 2,
            previous: 1,
            direction: Direction::Forward,
            locked: true,
            total: 4,
        };
        let mut clock = TransitionClock::default();
        clock.on_navigate(&snapshot, &[]);
        assert!(clock.is_running());
        clock.on_settle(&snapshot);
        assert!(!clock.is_running());
    }
}
