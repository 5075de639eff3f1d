// Home page: hero banner, popular products, category tiles and testimonials

use crate::app::SnapDeck;
use crate::model::{star_line, testimonials, Category};
use crate::state::catalog::{popular_products, POPULAR_LIMIT};
use crate::state::Page;
use crate::style;
use crate::view::shop::product_card;
use eframe::egui;

const TILE_SIZE: egui::Vec2 = egui::vec2(160.0, 110.0);

/// What the user clicked on the home page this frame.
enum HomeAction {
    ShopAll,
    Product(u32),
    Category(Category),
}

fn tile_style(category: Category) -> (&'static str, egui::Color32) {
    match category {
        Category::Tent => ("⛺", style::WARM_ORANGE),
        Category::Sleeping => ("🛏", style::FOREST_GREEN),
        Category::Cooking => ("🍳", style::SAND_BEIGE),
        Category::Lighting => ("💡", style::WARM_ORANGE),
    }
}

impl SnapDeck {
    pub(crate) fn render_home(&mut self, ctx: &egui::Context) {
        let mut action = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("home_page")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(16.0);
                        ui.heading(
                            egui::RichText::new("Gear up for your next adventure")
                                .size(style::TITLE_SIZE * 0.6)
                                .strong(),
                        );
                        ui.label("Quality camping gear, picked by people who camp.");
                        ui.add_space(8.0);
                        let shop_all = egui::Button::new(
                            egui::RichText::new("Shop all").color(style::DARK_BG),
                        )
                        .fill(self.ui.theme.accent());
                        if ui.add(shop_all).clicked() {
                            action = Some(HomeAction::ShopAll);
                        }
                    });

                    ui.add_space(24.0);
                    ui.heading("Popular products");
                    ui.horizontal_wrapped(|ui| {
                        ui.spacing_mut().item_spacing = egui::Vec2::splat(style::CARD_SPACING);
                        for product in popular_products(&self.catalog, POPULAR_LIMIT) {
                            if product_card(ui, product).clicked() {
                                action = Some(HomeAction::Product(product.id));
                            }
                        }
                    });

                    ui.add_space(24.0);
                    ui.heading("Shop by category");
                    ui.horizontal_wrapped(|ui| {
                        for category in Category::ALL {
                            if category_tile(ui, category).clicked() {
                                action = Some(HomeAction::Category(category));
                            }
                        }
                    });

                    ui.add_space(24.0);
                    ui.heading("What campers say");
                    ui.horizontal_wrapped(|ui| {
                        for testimonial in testimonials() {
                            egui::Frame::group(ui.style()).show(ui, |ui| {
                                ui.set_width(style::CARD_WIDTH);
                                ui.label(
                                    egui::RichText::new(star_line(testimonial.rating))
                                        .color(style::SAND_BEIGE),
                                );
                                ui.label(format!("\"{}\"", testimonial.comment));
                                ui.weak(testimonial.author);
                            });
                        }
                    });
                });
        });

        match action {
            Some(HomeAction::ShopAll) => self.ui.page = Page::Shop,
            Some(HomeAction::Product(id)) => self.open_detail(id),
            Some(HomeAction::Category(category)) => self.browse_category(category),
            None => {}
        }
    }
}

fn category_tile(ui: &mut egui::Ui, category: Category) -> egui::Response {
    let (icon, color) = tile_style(category);
    egui::Frame::new()
        .fill(color.gamma_multiply(0.35))
        .corner_radius(8.0)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.set_min_size(TILE_SIZE);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(icon).size(36.0));
                ui.label(egui::RichText::new(category.label()).strong());
            });
        })
        .response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
}
