// Deck chrome: progress bar, nav dot rail, scroll indicators and the
// transition badge. All of it reads the store snapshot; clicks go back
// through the same commands as keyboard input.

use crate::app::SnapDeck;
use crate::config::RailPosition;
use crate::motion::{self, lerp, SNAPPY};
use crate::state::{Direction, Intent, NavigationSnapshot};
use crate::style::{self, Theme};
use eframe::egui;
use std::time::Instant;

/// What the user clicked in the chrome this frame.
enum ChromeAction {
    GoTo(usize),
    Intent(Intent),
}

impl SnapDeck {
    pub(crate) fn render_chrome(&mut self, ctx: &egui::Context, deck_rect: egui::Rect, now: Instant) {
        let snapshot = self.store.snapshot();
        let theme = self.ui.theme;
        let mut action = None;

        self.render_progress_bar(ctx, deck_rect, &snapshot, theme);

        let rail_visible = self.ui.nav_rail.is_visible(now);
        let rail_opacity = SNAPPY.ease(ctx.animate_bool_with_time(
            egui::Id::new("nav_rail_visible"),
            rail_visible,
            motion::FAST,
        ));
        if rail_opacity > 0.0 {
            if let Some(index) = self.render_nav_rail(ctx, deck_rect, &snapshot, theme, rail_opacity)
            {
                action = Some(ChromeAction::GoTo(index));
            }
        }

        if let Some(intent) = render_scroll_indicators(ctx, deck_rect, &snapshot) {
            action = Some(ChromeAction::Intent(intent));
        }

        if snapshot.locked {
            let text = transition_label(
                self.store.direction(),
                &self.store.previous_section().title,
                &self.store.current_section().title,
            );
            render_transition_badge(ctx, deck_rect, theme, &text);
        }

        match action {
            Some(ChromeAction::GoTo(index)) => {
                self.go_to(index);
            }
            Some(ChromeAction::Intent(intent)) => {
                self.dispatch(intent);
            }
            None => {}
        }
    }

    fn render_progress_bar(
        &self,
        ctx: &egui::Context,
        deck_rect: egui::Rect,
        snapshot: &NavigationSnapshot,
        theme: Theme,
    ) {
        let fraction = ctx.animate_value_with_time(
            egui::Id::new("deck_progress"),
            snapshot.progress(),
            motion::PROGRESS,
        );
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("deck_progress_layer"),
        ));
        let track = egui::Rect::from_min_size(
            deck_rect.left_top(),
            egui::vec2(deck_rect.width(), style::PROGRESS_BAR_HEIGHT),
        );
        painter.rect_filled(track, 0.0, egui::Color32::from_white_alpha(20));
        let mut fill = track;
        fill.set_width(track.width() * fraction.clamp(0.0, 1.0));
        painter.rect_filled(fill, 0.0, theme.accent());
    }

    /// Dot rail with a vertical progress line. Returns the index of a
    /// clicked dot.
    fn render_nav_rail(
        &self,
        ctx: &egui::Context,
        deck_rect: egui::Rect,
        snapshot: &NavigationSnapshot,
        theme: Theme,
        opacity: f32,
    ) -> Option<usize> {
        let nav = &self.config.nav;
        let (anchor, x) = match nav.position {
            RailPosition::Right => (egui::Align2::RIGHT_CENTER, deck_rect.right() - style::RAIL_MARGIN),
            RailPosition::Left => (egui::Align2::LEFT_CENTER, deck_rect.left() + style::RAIL_MARGIN),
        };
        let mut clicked = None;

        egui::Area::new(egui::Id::new("nav_rail"))
            .order(egui::Order::Foreground)
            .pivot(anchor)
            .fixed_pos(egui::pos2(x, deck_rect.center().y))
            .show(ctx, |ui| {
                ui.set_opacity(opacity);
                let height = style::DOT_SPACING * snapshot.total as f32;
                let (rect, _) = ui.allocate_exact_size(
                    egui::vec2(style::DOT_ACTIVE_RADIUS * 2.0 + 6.0, height),
                    egui::Sense::hover(),
                );

                let line_x = match nav.position {
                    RailPosition::Right => rect.right() - 1.0,
                    RailPosition::Left => rect.left() + 1.0,
                };
                let painter = ui.painter();
                painter.line_segment(
                    [egui::pos2(line_x, rect.top()), egui::pos2(line_x, rect.bottom())],
                    egui::Stroke::new(2.0, egui::Color32::from_white_alpha(30)),
                );
                painter.line_segment(
                    [
                        egui::pos2(line_x, rect.top()),
                        egui::pos2(line_x, rect.top() + rect.height() * snapshot.progress()),
                    ],
                    egui::Stroke::new(2.0, theme.accent()),
                );

                for (index, section) in self.store.sections().iter().enumerate() {
                    let center = egui::pos2(
                        rect.center().x - 3.0,
                        rect.top() + style::DOT_SPACING * (index as f32 + 0.5),
                    );
                    let hit = egui::Rect::from_center_size(
                        center,
                        egui::Vec2::splat(style::DOT_SPACING),
                    );
                    let id = ui.id().with(("nav_dot", index));
                    let mut response = ui.interact(hit, id, egui::Sense::click());

                    let active = index == snapshot.current;
                    let grow = SNAPPY.ease(ctx.animate_bool_with_time(id, active, motion::NORMAL));
                    let radius = lerp(style::DOT_RADIUS, style::DOT_ACTIVE_RADIUS, grow);
                    let color = if active {
                        theme.accent()
                    } else if response.hovered() {
                        theme.text()
                    } else {
                        theme.text().gamma_multiply(0.5)
                    };
                    ui.painter().circle_filled(center, radius, color);

                    if nav.show_labels {
                        response = response.on_hover_text(&section.title);
                    }
                    if response.clicked() && !active && !snapshot.locked {
                        clicked = Some(index);
                    }
                }
            });

        clicked
    }
}

/// Previous/next buttons along the bottom edge, shown only when a neighbour
/// exists and disabled while a transition runs.
fn render_scroll_indicators(
    ctx: &egui::Context,
    deck_rect: egui::Rect,
    snapshot: &NavigationSnapshot,
) -> Option<Intent> {
    let mut intent = None;
    egui::Area::new(egui::Id::new("scroll_indicators"))
        .order(egui::Order::Foreground)
        .pivot(egui::Align2::CENTER_BOTTOM)
        .fixed_pos(egui::pos2(
            deck_rect.center().x,
            deck_rect.bottom() - style::INDICATOR_MARGIN,
        ))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if !snapshot.is_first()
                    && ui
                        .add_enabled(!snapshot.locked, egui::Button::new("▲ Previous"))
                        .clicked()
                {
                    intent = Some(Intent::Retreat);
                }
                if !snapshot.is_last()
                    && ui
                        .add_enabled(!snapshot.locked, egui::Button::new("▼ Next"))
                        .clicked()
                {
                    intent = Some(Intent::Advance);
                }
            });
        });
    intent
}

/// Badge text for a running transition, e.g. `▼ Hero → Services`.
fn transition_label(direction: Direction, from: &str, to: &str) -> String {
    let arrow = match direction {
        Direction::Forward => "▼",
        Direction::Backward => "▲",
        Direction::None => "•",
    };
    format!("{arrow} {from} → {to}")
}

fn render_transition_badge(ctx: &egui::Context, deck_rect: egui::Rect, theme: Theme, text: &str) {
    egui::Area::new(egui::Id::new("transition_badge"))
        .order(egui::Order::Foreground)
        .interactable(false)
        .fixed_pos(deck_rect.left_top() + egui::vec2(16.0, 16.0))
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.label(egui::RichText::new(text).color(theme.accent()));
            });
        });
}
