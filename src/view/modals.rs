// Help overlay listing the keyboard shortcuts

use crate::app::SnapDeck;
use crate::state::AppMode;
use crate::style;
use eframe::egui;

const SHORTCUTS: [(&str, &str); 8] = [
    ("↓ / Page Down / Space", "Next section"),
    ("↑ / Page Up", "Previous section"),
    ("Home", "First section"),
    ("End", "Last section"),
    ("Mouse wheel", "Next / previous section"),
    ("Swipe up / down", "Next / previous section"),
    ("?", "Toggle help"),
    ("Esc", "Close help or product details"),
];

impl SnapDeck {
    pub(crate) fn render_help_modal(&mut self, ctx: &egui::Context) {
        if self.mode == AppMode::Help {
            egui::Window::new("Help")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .default_width(style::modal_width(ctx))
                .show(ctx, |ui| {
                    ui.set_max_height(style::modal_max_height(ctx));
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        ui.heading("Keyboard Shortcuts");
                        ui.separator();
                        egui::Grid::new("help_grid").striped(true).show(ui, |ui| {
                            for (keys, action) in SHORTCUTS {
                                ui.label(egui::RichText::new(keys).monospace());
                                ui.label(action);
                                ui.end_row();
                            }
                        });
                        ui.add_space(10.0);
                        if ui.button("Close").clicked() {
                            self.mode = AppMode::Normal;
                        }
                    });
                });
        }
    }
}
