// Input handling for SnapDeck
// Raw egui keyboard, wheel and touch input turned into navigation intents

use crate::app::SnapDeck;
use crate::state::{AppMode, Intent, NavKey, Page};
use eframe::egui;
use std::time::Instant;

const NAV_KEYS: [(egui::Key, NavKey); 7] = [
    (egui::Key::ArrowDown, NavKey::ArrowDown),
    (egui::Key::ArrowUp, NavKey::ArrowUp),
    (egui::Key::PageDown, NavKey::PageDown),
    (egui::Key::PageUp, NavKey::PageUp),
    (egui::Key::Space, NavKey::Space),
    (egui::Key::Home, NavKey::Home),
    (egui::Key::End, NavKey::End),
];

/// Raw input gathered for one frame.
#[derive(Default)]
struct FrameInput {
    keys: Vec<NavKey>,
    scroll_y: f32,
    touches: Vec<(egui::TouchPhase, egui::Pos2)>,
    pointer_moved: bool,
}

impl FrameInput {
    fn collect(i: &egui::InputState) -> Self {
        let keys = NAV_KEYS
            .iter()
            .filter(|(key, _)| i.key_pressed(*key))
            .map(|(_, nav)| *nav)
            .collect();
        let touches = i
            .events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Touch { phase, pos, .. } => Some((*phase, *pos)),
                _ => None,
            })
            .collect();
        Self {
            keys,
            scroll_y: i.raw_scroll_delta.y,
            touches,
            pointer_moved: i.pointer.is_moving(),
        }
    }

    fn has_activity(&self) -> bool {
        self.pointer_moved || self.scroll_y != 0.0 || !self.touches.is_empty()
    }
}

impl SnapDeck {
    pub fn handle_input(&mut self, ctx: &egui::Context) {
        // 1. Help overlay: only closing keys get through
        if self.mode == AppMode::Help {
            if ctx.input(|i| {
                i.key_pressed(egui::Key::Escape) || i.key_pressed(egui::Key::Questionmark)
            }) {
                self.mode = AppMode::Normal;
            }
            return;
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Questionmark)) {
            self.mode.toggle_help();
            return;
        }

        // 2. Home and Shop pages: Escape closes the detail window
        if self.ui.page != Page::Deck {
            if self.detail.is_some() && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
                self.detail = None;
            }
            return;
        }

        // 3. Deck navigation
        let now = Instant::now();
        let frame = ctx.input(FrameInput::collect);
        if frame.has_activity() {
            self.ui.nav_rail.record_activity(now);
        }

        let mut intents: Vec<Intent> = Vec::new();
        if !ctx.wants_keyboard_input() {
            intents.extend(frame.keys.iter().filter_map(|key| self.normalizer.key(*key)));
        }
        if self.store.is_locked() {
            self.normalizer.discard_wheel();
        } else if frame.scroll_y != 0.0 {
            // egui reports scrolling down as a negative delta
            intents.extend(self.normalizer.wheel(-frame.scroll_y, now));
        }
        for (phase, pos) in frame.touches {
            match phase {
                egui::TouchPhase::Start => self.normalizer.touch_start(pos.x, pos.y),
                egui::TouchPhase::End => intents.extend(self.normalizer.touch_end(pos.x, pos.y)),
                egui::TouchPhase::Cancel => self.normalizer.touch_cancel(),
                egui::TouchPhase::Move => {}
            }
        }

        for intent in intents {
            self.dispatch(intent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn app() -> SnapDeck {
        SnapDeck::new(Config::default()).expect("default deck")
    }

    fn key_event(key: egui::Key) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    fn run_frame(app: &mut SnapDeck, ctx: &egui::Context, events: Vec<egui::Event>) {
        let raw = egui::RawInput {
            events,
            ..Default::default()
        };
        let _ = ctx.run(raw, |ctx| app.handle_input(ctx));
    }

    #[test]
    fn test_arrow_down_advances() {
        let ctx = egui::Context::default();
        let mut app = app();
        run_frame(&mut app, &ctx, vec![key_event(egui::Key::ArrowDown)]);
        assert_eq!(app.store.current(), 1);
        assert!(app.store.is_locked());
    }

    #[test]
    fn test_end_jumps_to_last() {
        let ctx = egui::Context::default();
        let mut app = app();
        run_frame(&mut app, &ctx, vec![key_event(egui::Key::End)]);
        assert_eq!(app.store.current(), app.store.total() - 1);
    }

    fn wheel_event(delta_y: f32) -> egui::Event {
        egui::Event::MouseWheel {
            unit: egui::MouseWheelUnit::Point,
            delta: egui::vec2(0.0, delta_y),
            modifiers: egui::Modifiers::NONE,
        }
    }

    fn touch_event(phase: egui::TouchPhase, y: f32) -> egui::Event {
        egui::Event::Touch {
            device_id: egui::TouchDeviceId(0),
            id: egui::TouchId(0),
            phase,
            pos: egui::pos2(100.0, y),
            force: None,
        }
    }

    #[test]
    fn test_wheel_down_advances() {
        let ctx = egui::Context::default();
        let mut app = app();
        run_frame(&mut app, &ctx, vec![wheel_event(-120.0)]);
        assert_eq!(app.store.current(), 1);
    }

    #[test]
    fn test_wheel_up_on_first_section_stays() {
        let ctx = egui::Context::default();
        let mut app = app();
        run_frame(&mut app, &ctx, vec![wheel_event(120.0)]);
        assert_eq!(app.store.current(), 0);
        assert!(!app.store.is_locked());
    }

    #[test]
    fn test_swipe_up_advances() {
        let ctx = egui::Context::default();
        let mut app = app();
        run_frame(
            &mut app,
            &ctx,
            vec![touch_event(egui::TouchPhase::Start, 400.0)],
        );
        run_frame(&mut app, &ctx, vec![touch_event(egui::TouchPhase::End, 200.0)]);
        assert_eq!(app.store.current(), 1);
    }

    #[test]
    fn test_wheel_during_transition_is_dropped() {
        let ctx = egui::Context::default();
        let mut app = app();
        app.dispatch(Intent::Advance);
        run_frame(&mut app, &ctx, vec![wheel_event(-40.0)]);
        app.complete_transition();

        // The partial scroll from the locked frame does not count
        run_frame(&mut app, &ctx, vec![wheel_event(-30.0)]);
        assert_eq!(app.store.current(), 1);
        assert!(!app.store.is_locked());
    }

    #[test]
    fn test_help_overlay_blocks_navigation() {
        let ctx = egui::Context::default();
        let mut app = app();
        run_frame(&mut app, &ctx, vec![key_event(egui::Key::Questionmark)]);
        assert_eq!(app.mode, AppMode::Help);

        run_frame(&mut app, &ctx, vec![key_event(egui::Key::ArrowDown)]);
        assert_eq!(app.store.current(), 0);

        run_frame(&mut app, &ctx, vec![key_event(egui::Key::Escape)]);
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_shop_page_ignores_deck_keys() {
        let ctx = egui::Context::default();
        let mut app = app();
        app.ui.page = Page::Shop;
        app.open_detail(1);
        run_frame(&mut app, &ctx, vec![key_event(egui::Key::ArrowDown)]);
        assert_eq!(app.store.current(), 0);

        run_frame(&mut app, &ctx, vec![key_event(egui::Key::Escape)]);
        assert!(app.detail.is_none());
    }

    #[test]
    fn test_escape_closes_detail_on_home() {
        let ctx = egui::Context::default();
        let mut app = app();
        app.ui.page = Page::Home;
        app.open_detail(2);
        run_frame(&mut app, &ctx, vec![key_event(egui::Key::Escape)]);
        assert!(app.detail.is_none());
        assert_eq!(app.store.current(), 0);
    }
}
