// UI state - presentation settings, transient messages and nav rail visibility
use crate::state::Page;
use crate::style::Theme;
use std::time::{Duration, Instant};

pub struct UIState {
    pub theme: Theme,
    pub page: Page,
    pub error_message: Option<(String, Instant)>,
    pub info_message: Option<(String, Instant)>,
    pub nav_rail: RailVisibility,
}

impl UIState {
    pub fn new(theme: Theme, auto_hide: Duration) -> Self {
        Self {
            theme,
            page: Page::Deck,
            error_message: None,
            info_message: None,
            nav_rail: RailVisibility::new(auto_hide, Instant::now()),
        }
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some((message, Instant::now()));
    }

    pub fn set_info(&mut self, message: String) {
        self.info_message = Some((message, Instant::now()));
    }

    pub fn clear_expired_messages(&mut self, timeout_secs: u64) {
        if let Some((_, time)) = &self.error_message {
            if time.elapsed().as_secs() >= timeout_secs {
                self.error_message = None;
            }
        }
        if let Some((_, time)) = &self.info_message {
            if time.elapsed().as_secs() >= timeout_secs {
                self.info_message = None;
            }
        }
    }
}

/// The nav dot rail hides after a stretch without pointer, wheel or touch
/// activity. A zero timeout keeps it visible.
#[derive(Debug, Clone, Copy)]
pub struct RailVisibility {
    auto_hide: Duration,
    last_activity: Instant,
}

impl RailVisibility {
    pub fn new(auto_hide: Duration, now: Instant) -> Self {
        Self {
            auto_hide,
            last_activity: now,
        }
    }

    pub fn record_activity(&mut self, now: Instant) {
        self.last_activity = now;
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        self.auto_hide.is_zero() || now.saturating_duration_since(self.last_activity) < self.auto_hide
    }

    /// Time until the rail hides, for scheduling a repaint.
    pub fn hides_in(&self, now: Instant) -> Option<Duration> {
        if !self.is_visible(now) || self.auto_hide.is_zero() {
            return None;
        }
        Some(self.auto_hide - now.saturating_duration_since(self.last_activity))
    }
}
