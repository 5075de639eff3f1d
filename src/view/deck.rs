// Section deck rendering
// Paints every visible section with its role transform, back to front

use crate::app::SnapDeck;
use crate::model::Section;
use crate::state::role::{section_transform, stacking_order, SectionTransform};
use crate::style::{self, Theme};
use eframe::egui;
use std::time::Instant;

impl SnapDeck {
    /// Paints the deck into the central panel. Returns `true` once the running
    /// transition has visually finished so the lock can be released.
    pub(crate) fn render_deck(&mut self, ctx: &egui::Context, now: Instant) -> bool {
        let snapshot = self.store.snapshot();
        let progress = self.clock.borrow().progress(now);
        let theme = self.ui.theme;
        let mut clicked_cta: Option<String> = None;

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(theme.background()))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let sections = self.store.sections();

                let mut order: Vec<usize> = (0..sections.len()).collect();
                order.sort_by_key(|&index| stacking_order(snapshot.current, index));

                for index in order {
                    let Some(transform) = section_transform(&snapshot, index, progress.as_ref())
                    else {
                        continue;
                    };
                    let interactive = index == snapshot.current && !snapshot.locked;
                    if let Some(url) =
                        paint_section(ui, rect, &sections[index], transform, theme, interactive)
                    {
                        clicked_cta = Some(url);
                    }
                }
            });

        if let Some(url) = clicked_cta {
            self.open_cta(&url);
        }

        snapshot.locked && progress.is_some_and(|p| p.is_finished())
    }
}

/// Screen rectangle a section occupies under `transform`.
fn projected_rect(rect: egui::Rect, transform: SectionTransform) -> egui::Rect {
    let perspective = style::PERSPECTIVE / (style::PERSPECTIVE - transform.depth);
    let width = rect.width() * transform.width_factor() * perspective;
    let height = rect.height() * transform.scale * perspective;
    // Rotating away swings the section toward the edge it turns around.
    let shift = transform.rotate_y.to_radians().sin() * (rect.width() - width) * 0.5;
    let center = egui::pos2(rect.center().x + shift, rect.center().y);
    egui::Rect::from_center_size(center, egui::vec2(width, height))
}

fn paint_section(
    ui: &mut egui::Ui,
    rect: egui::Rect,
    section: &Section,
    transform: SectionTransform,
    theme: Theme,
    interactive: bool,
) -> Option<String> {
    let area = projected_rect(rect, transform);
    if area.width() < 1.0 || transform.opacity <= 0.0 {
        return None;
    }
    let opacity = transform.opacity;
    let painter = ui.painter_at(rect);

    painter.rect_filled(area, 0.0, style::faded(theme.surface(), opacity));
    if let Some(uri) = &section.background {
        egui::Image::new(uri.as_str())
            .tint(style::faded(egui::Color32::WHITE, opacity))
            .paint_at(ui, area);
    }
    painter.rect_filled(
        area,
        0.0,
        style::faded(egui::Color32::from_black_alpha(style::SCRIM_ALPHA), opacity),
    );

    let scale = transform.width_factor().max(0.1);
    let text_color = style::faded(style::LIGHT_TEXT, opacity);
    let title_pos = area.center() - egui::vec2(0.0, style::TITLE_SIZE * 0.5);
    painter.text(
        title_pos,
        egui::Align2::CENTER_CENTER,
        &section.title,
        egui::FontId::proportional(style::TITLE_SIZE * scale),
        text_color,
    );
    if !section.tagline.is_empty() {
        painter.text(
            title_pos + egui::vec2(0.0, style::TITLE_SIZE),
            egui::Align2::CENTER_CENTER,
            &section.tagline,
            egui::FontId::proportional(style::TAGLINE_SIZE * scale),
            text_color,
        );
    }

    let cta = section.cta.as_ref()?;
    if !interactive {
        return None;
    }
    let button_rect = egui::Rect::from_center_size(
        area.center() + egui::vec2(0.0, style::TITLE_SIZE * 1.5),
        egui::vec2(180.0, 44.0),
    );
    let button = egui::Button::new(
        egui::RichText::new(&cta.label)
            .size(style::TAGLINE_SIZE)
            .color(style::DARK_BG),
    )
    .fill(theme.accent());
    ui.put(button_rect, button)
        .on_hover_text(&cta.url)
        .clicked()
        .then(|| cta.url.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Direction;

    fn screen() -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1000.0, 800.0))
    }

    #[test]
    fn test_rest_fills_the_deck() {
        let rect = projected_rect(screen(), SectionTransform::REST);
        assert_eq!(rect, screen());
    }

    #[test]
    fn test_exit_pose_collapses() {
        let rect = projected_rect(screen(), SectionTransform::exit(Direction::Forward));
        assert!(rect.width() < 1.0);
        assert!(rect.height() < screen().height());
    }

    #[test]
    fn test_half_turn_swings_to_an_edge() {
        let half = SectionTransform::lerp(
            SectionTransform::REST,
            SectionTransform::exit(Direction::Forward),
            0.5,
        );
        let rect = projected_rect(screen(), half);
        assert!(rect.center().x < screen().center().x);

        let half = SectionTransform::lerp(
            SectionTransform::REST,
            SectionTransform::exit(Direction::Backward),
            0.5,
        );
        let rect = projected_rect(screen(), half);
        assert!(rect.center().x > screen().center().x);
    }
}
