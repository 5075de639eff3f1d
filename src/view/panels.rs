// Top and bottom bars shared by both pages

use crate::app::SnapDeck;
use crate::state::{AppMode, Page, Politeness};
use crate::style;
use eframe::egui;

/// Marks `response` as a live region so screen readers speak its text
/// when it changes.
fn announce(ctx: &egui::Context, response: &egui::Response, politeness: Politeness) {
    ctx.accesskit_node_builder(response.id, |node| node.set_live(politeness.live()));
}

impl SnapDeck {
    pub(crate) fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("SnapDeck")
                        .strong()
                        .color(self.ui.theme.accent()),
                );
                ui.separator();
                for page in Page::ALL {
                    ui.selectable_value(&mut self.ui.page, page, page.label());
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("?").on_hover_text("Keyboard shortcuts").clicked() {
                        self.mode.toggle_help();
                    }
                    let theme_icon = match self.ui.theme {
                        style::Theme::Dark => "☀",
                        style::Theme::Light => "🌙",
                    };
                    if ui.button(theme_icon).on_hover_text("Toggle theme").clicked() {
                        self.toggle_theme();
                    }
                });
            });
            ui.add_space(4.0);
        });
    }

    pub(crate) fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                match self.ui.page {
                    Page::Deck => {
                        ui.label(format!(
                            "{} / {}  {}",
                            self.store.current() + 1,
                            self.store.total(),
                            self.store.current_section().title
                        ));
                        if let Some(announcement) = self.live_region.borrow().latest() {
                            ui.separator();
                            let response = style::truncated_label(ui, announcement.text.as_str());
                            announce(ctx, &response, announcement.politeness);
                        }
                    }
                    Page::Home | Page::Shop => {
                        let visible = self.query.apply(&self.catalog).len();
                        ui.label(format!("{} of {} products", visible, self.catalog.len()));
                    }
                }

                if let Some((err, _)) = &self.ui.error_message {
                    let response = ui.colored_label(egui::Color32::RED, format!(" | {}", err));
                    announce(ctx, &response, Politeness::Assertive);
                } else if let Some((info, _)) = &self.ui.info_message {
                    let response = ui.colored_label(egui::Color32::GREEN, format!(" | {}", info));
                    announce(ctx, &response, Politeness::Polite);
                }

                if self.mode == AppMode::Normal {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.weak("? for help");
                    });
                }
            });
        });
    }
}
