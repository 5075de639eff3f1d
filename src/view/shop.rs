// Shop page: filter panel, product grid and the product detail window

use crate::app::SnapDeck;
use crate::model::{
    average_rating, details_for, format_yen, mock_reviews, star_line, Category, Product,
};
use crate::state::catalog::{related_products, RELATED_LIMIT};
use crate::state::{CategoryFilter, DetailTab, ProductQuery, SortBy};
use crate::style;
use eframe::egui;

impl SnapDeck {
    pub(crate) fn render_shop(&mut self, ctx: &egui::Context) {
        self.render_filter_panel(ctx);

        let mut selected = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            let visible = self.query.apply(&self.catalog);
            if visible.is_empty() {
                ui.centered_and_justified(|ui| {
                    ui.label("No products match the current filters");
                });
                return;
            }

            egui::ScrollArea::vertical()
                .id_salt("product_grid")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let columns = ((ui.available_width() + style::CARD_SPACING)
                        / (style::CARD_WIDTH + style::CARD_SPACING))
                        .floor()
                        .max(1.0) as usize;
                    egui::Grid::new("product_cards")
                        .spacing(egui::Vec2::splat(style::CARD_SPACING))
                        .show(ui, |ui| {
                            for (i, product) in visible.iter().enumerate() {
                                if product_card(ui, product).clicked() {
                                    selected = Some(product.id);
                                }
                                if (i + 1) % columns == 0 {
                                    ui.end_row();
                                }
                            }
                        });
                });
        });

        if let Some(id) = selected {
            self.open_detail(id);
        }
    }

    fn render_filter_panel(&mut self, ctx: &egui::Context) {
        let max_price = self.config.catalog.max_price;
        let step = f64::from(self.config.catalog.price_step.max(1));

        egui::SidePanel::left("filter_panel")
            .resizable(false)
            .exact_width(style::FILTER_PANEL_WIDTH)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                ui.heading("Filters");
                ui.separator();

                ui.label(egui::RichText::new("Category").strong());
                ui.radio_value(
                    &mut self.query.category,
                    CategoryFilter::All,
                    CategoryFilter::All.label(),
                );
                for category in Category::ALL {
                    let filter = CategoryFilter::Only(category);
                    ui.radio_value(&mut self.query.category, filter, filter.label());
                }

                ui.add_space(8.0);
                ui.label(egui::RichText::new("Price").strong());
                let price = &mut self.query.price;
                ui.horizontal(|ui| {
                    ui.label("Min");
                    let min = ui.add(
                        egui::DragValue::new(&mut price.min)
                            .range(0..=max_price)
                            .speed(step)
                            .custom_formatter(|v, _| format_yen(v as u32)),
                    );
                    if min.changed() {
                        price.normalize_after_min_edit();
                    }
                });
                ui.horizontal(|ui| {
                    ui.label("Max");
                    let max = ui.add(
                        egui::DragValue::new(&mut price.max)
                            .range(0..=max_price)
                            .speed(step)
                            .custom_formatter(|v, _| format_yen(v as u32)),
                    );
                    if max.changed() {
                        price.normalize_after_max_edit();
                    }
                });

                ui.add_space(8.0);
                ui.label(egui::RichText::new("Sort by").strong());
                egui::ComboBox::from_id_salt("sort_by")
                    .selected_text(self.query.sort_by.label())
                    .show_ui(ui, |ui| {
                        for sort_by in SortBy::ALL {
                            ui.selectable_value(&mut self.query.sort_by, sort_by, sort_by.label());
                        }
                    });

                ui.add_space(12.0);
                if ui.button("Reset filters").clicked() {
                    self.query = ProductQuery::new(max_price);
                }
            });
    }

    pub(crate) fn render_product_detail(&mut self, ctx: &egui::Context) {
        let Some(detail) = self.detail.as_mut() else {
            return;
        };
        let Some(product) = self.catalog.iter().find(|p| p.id == detail.product_id) else {
            self.detail = None;
            return;
        };

        let mut open = true;
        let mut add_to_cart = false;
        let mut next_product = None;

        egui::Window::new(product.name.as_str())
            .id(egui::Id::new("product_detail"))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .default_width(style::modal_width(ctx))
            .show(ctx, |ui| {
                ui.set_max_height(style::modal_max_height(ctx));
                ui.add(
                    egui::Image::new(product.image.as_str())
                        .max_height(style::CARD_IMAGE_HEIGHT * 2.0)
                        .corner_radius(4.0),
                );
                ui.add_space(8.0);
                ui.label(category_chip(product.category));
                ui.heading(product.display_price());
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    ui.label("Quantity");
                    if ui.button("−").clicked() {
                        detail.decrement();
                    }
                    ui.label(egui::RichText::new(detail.quantity.to_string()).strong());
                    if ui.button("+").clicked() {
                        detail.increment();
                    }
                    ui.weak(format!("Total {}", format_yen(product.price * detail.quantity)));
                });

                ui.add_space(8.0);
                if ui.button("Add to cart").clicked() {
                    add_to_cart = true;
                }

                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    for tab in DetailTab::ALL {
                        ui.selectable_value(&mut detail.tab, tab, tab.label());
                    }
                });
                ui.separator();
                render_detail_tab(ui, product, detail.tab);

                ui.add_space(12.0);
                ui.separator();
                ui.label(egui::RichText::new("Related products").strong());
                ui.horizontal(|ui| {
                    for related in related_products(&self.catalog, product.id, RELATED_LIMIT) {
                        let response = ui
                            .vertical(|ui| {
                                ui.set_width(style::RELATED_THUMB_SIZE);
                                ui.add(
                                    egui::Image::new(related.image.as_str())
                                        .fit_to_exact_size(egui::Vec2::splat(
                                            style::RELATED_THUMB_SIZE,
                                        ))
                                        .corner_radius(4.0),
                                );
                                style::truncated_label(ui, related.name.as_str());
                                ui.weak(related.display_price());
                            })
                            .response
                            .interact(egui::Sense::click());
                        if response.clicked() {
                            next_product = Some(related.id);
                        }
                    }
                });
            });

        if add_to_cart {
            self.add_to_cart();
        } else if let Some(id) = next_product {
            self.open_detail(id);
        } else if !open {
            self.detail = None;
        }
    }
}

fn render_detail_tab(ui: &mut egui::Ui, product: &Product, tab: DetailTab) {
    let details = details_for(product.category);
    match tab {
        DetailTab::Description => {
            ui.label(details.description);
            ui.add_space(4.0);
            for feature in details.features {
                ui.label(format!("✔ {feature}"));
            }
        }
        DetailTab::Specifications => {
            egui::Grid::new("product_specs")
                .num_columns(2)
                .striped(true)
                .show(ui, |ui| {
                    for (name, value) in details.specifications {
                        ui.strong(*name);
                        ui.label(*value);
                        ui.end_row();
                    }
                });
        }
        DetailTab::Reviews => {
            let reviews = mock_reviews();
            if let Some(average) = average_rating(&reviews) {
                ui.label(format!("{average:.1} out of 5 ({} reviews)", reviews.len()));
            }
            for review in &reviews {
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(star_line(review.rating)).color(style::SAND_BEIGE));
                    ui.strong(review.author);
                    ui.weak(review.date);
                });
                ui.label(review.comment);
            }
        }
    }
}

pub(crate) fn category_chip(category: Category) -> egui::RichText {
    egui::RichText::new(category.label())
        .small()
        .color(style::SAND_BEIGE)
}

pub(crate) fn product_card(ui: &mut egui::Ui, product: &Product) -> egui::Response {
    egui::Frame::group(ui.style())
        .show(ui, |ui| {
            ui.set_width(style::CARD_WIDTH);
            ui.add(
                egui::Image::new(product.image.as_str())
                    .fit_to_exact_size(egui::vec2(style::CARD_WIDTH, style::CARD_IMAGE_HEIGHT))
                    .corner_radius(4.0),
            );
            ui.label(category_chip(product.category));
            style::truncated_label(ui, egui::RichText::new(&product.name).strong());
            ui.label(egui::RichText::new(product.display_price()).color(style::FOREST_GREEN));
        })
        .response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
}
