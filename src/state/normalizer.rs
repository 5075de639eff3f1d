// Input normalization - wheel, touch and key input folded into intents
//
// The normalizer knows nothing about the deck. Whether an intent has any
// effect is decided by the navigation store's bounds and lock checks.
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Advance,
    Retreat,
    First,
    Last,
}

/// Keys the deck listens to, independent of the windowing backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    ArrowDown,
    ArrowUp,
    PageDown,
    PageUp,
    Space,
    Home,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizerSettings {
    /// Accumulated wheel magnitude required before an intent is emitted.
    pub wheel_threshold: f32,
    /// Minimum time between two accepted wheel intents.
    pub debounce: Duration,
    /// Minimum vertical swipe distance.
    pub touch_threshold: f32,
    pub enable_keyboard: bool,
    pub enable_touch: bool,
}

impl Default for NormalizerSettings {
    fn default() -> Self {
        Self {
            wheel_threshold: 50.0,
            debounce: Duration::from_millis(150),
            touch_threshold: 50.0,
            enable_keyboard: true,
            enable_touch: true,
        }
    }
}

#[derive(Debug)]
pub struct InputNormalizer {
    settings: NormalizerSettings,
    wheel_accum: f32,
    last_wheel_intent: Option<Instant>,
    touch_start: Option<(f32, f32)>,
}

impl InputNormalizer {
    pub fn new(settings: NormalizerSettings) -> Self {
        Self {
            settings,
            wheel_accum: 0.0,
            last_wheel_intent: None,
            touch_start: None,
        }
    }

    /// Feeds one wheel event. `delta_y` is positive when scrolling down the
    /// page, which advances.
    pub fn wheel(&mut self, delta_y: f32, now: Instant) -> Option<Intent> {
        self.wheel_accum += delta_y;

        let window_open = match self.last_wheel_intent {
            Some(last) => now.saturating_duration_since(last) > self.settings.debounce,
            None => true,
        };
        if !window_open || self.wheel_accum.abs() <= self.settings.wheel_threshold {
            return None;
        }

        let intent = if self.wheel_accum > 0.0 {
            Intent::Advance
        } else {
            Intent::Retreat
        };
        debug!(accumulated = self.wheel_accum, ?intent, "wheel intent");
        self.wheel_accum = 0.0;
        self.last_wheel_intent = Some(now);
        Some(intent)
    }

    /// Drops wheel input that arrives while a transition runs, so a long
    /// scroll cannot queue up a second move behind the lock.
    pub fn discard_wheel(&mut self) {
        self.wheel_accum = 0.0;
    }

    pub fn touch_start(&mut self, x: f32, y: f32) {
        if self.settings.enable_touch {
            self.touch_start = Some((x, y));
        }
    }

    /// Ends a touch gesture. A swipe up (finger moving toward the top of the
    /// screen) advances; horizontal-dominant gestures are ignored.
    pub fn touch_end(&mut self, x: f32, y: f32) -> Option<Intent> {
        let (start_x, start_y) = self.touch_start.take()?;
        if !self.settings.enable_touch {
            return None;
        }

        let delta_y = start_y - y;
        let delta_x = (start_x - x).abs();
        if delta_y.abs() <= delta_x || delta_y.abs() <= self.settings.touch_threshold {
            return None;
        }

        let intent = if delta_y > 0.0 {
            Intent::Advance
        } else {
            Intent::Retreat
        };
        debug!(delta_y, delta_x, ?intent, "swipe intent");
        Some(intent)
    }

    pub fn touch_cancel(&mut self) {
        self.touch_start = None;
    }

    pub fn key(&self, key: NavKey) -> Option<Intent> {
        if !self.settings.enable_keyboard {
            return None;
        }
        Some(match key {
            NavKey::ArrowDown | NavKey::PageDown | NavKey::Space => Intent::Advance,
            NavKey::ArrowUp | NavKey::PageUp => Intent::Retreat,
            NavKey::Home => Intent::First,
            NavKey::End => Intent::Last,
        })
    }
}

impl Default for InputNormalizer {
    fn default() -> Self {
        Self::new(NormalizerSettings::default())
    }
}
