use crate::config::ThemeMode;
use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl From<ThemeMode> for Theme {
    fn from(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Theme::Dark,
            ThemeMode::Light => Theme::Light,
        }
    }
}

impl Theme {
    pub fn toggle(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = match self {
            Theme::Dark => egui::Visuals::dark(),
            Theme::Light => egui::Visuals::light(),
        };
        visuals.panel_fill = self.background();
        visuals.window_fill = self.surface();
        visuals.hyperlink_color = self.accent();
        visuals.selection.bg_fill = self.accent().gamma_multiply(0.6);
        ctx.set_visuals(visuals);
    }

    pub fn background(&self) -> egui::Color32 {
        match self {
            Theme::Dark => DARK_BG,
            Theme::Light => OFF_WHITE,
        }
    }

    pub fn surface(&self) -> egui::Color32 {
        match self {
            Theme::Dark => egui::Color32::from_rgb(0x1a, 0x1b, 0x16),
            Theme::Light => egui::Color32::WHITE,
        }
    }

    pub fn text(&self) -> egui::Color32 {
        match self {
            Theme::Dark => LIGHT_TEXT,
            Theme::Light => FOREST_GREEN,
        }
    }

    pub fn accent(&self) -> egui::Color32 {
        match self {
            Theme::Dark => ACCENT_CYAN,
            Theme::Light => WARM_ORANGE,
        }
    }
}

// --- Palette ---
pub const DARK_BG: egui::Color32 = egui::Color32::from_rgb(0x0d, 0x0e, 0x0a);
pub const LIGHT_TEXT: egui::Color32 = egui::Color32::from_rgb(0xc5, 0xc4, 0xc4);
pub const ACCENT_CYAN: egui::Color32 = egui::Color32::from_rgb(0x00, 0xe6, 0xe6);
pub const FOREST_GREEN: egui::Color32 = egui::Color32::from_rgb(0x2d, 0x50, 0x16);
pub const SAND_BEIGE: egui::Color32 = egui::Color32::from_rgb(0xd4, 0xa5, 0x74);
pub const WARM_ORANGE: egui::Color32 = egui::Color32::from_rgb(0xe7, 0x6f, 0x51);
pub const OFF_WHITE: egui::Color32 = egui::Color32::from_rgb(0xfa, 0xf8, 0xf3);

// --- Deck sizing ---
pub const DOT_RADIUS: f32 = 5.0;
pub const DOT_ACTIVE_RADIUS: f32 = 7.0;
pub const DOT_SPACING: f32 = 28.0;
pub const RAIL_MARGIN: f32 = 24.0;
pub const PROGRESS_BAR_HEIGHT: f32 = 3.0;
pub const TITLE_SIZE: f32 = 56.0;
pub const TAGLINE_SIZE: f32 = 20.0;
pub const INDICATOR_MARGIN: f32 = 32.0;
/// Viewer distance used to turn section depth into apparent size.
pub const PERSPECTIVE: f32 = 1000.0;
/// Darkening laid over section backgrounds so titles stay legible.
pub const SCRIM_ALPHA: u8 = 140;

// --- Shop sizing ---
pub const FILTER_PANEL_WIDTH: f32 = 220.0;
pub const CARD_WIDTH: f32 = 200.0;
pub const CARD_IMAGE_HEIGHT: f32 = 140.0;
pub const CARD_SPACING: f32 = 16.0;
pub const RELATED_THUMB_SIZE: f32 = 80.0;

// --- Modals ---
pub const MODAL_MIN_WIDTH: f32 = 300.0;
pub const MODAL_MAX_WIDTH: f32 = 500.0;
pub const MODAL_WIDTH_RATIO: f32 = 0.6;
pub const MODAL_HEIGHT_RATIO: f32 = 0.8;

// --- Timing ---
pub const MESSAGE_TIMEOUT_SECS: u64 = 5;

// --- Helper functions ---

pub fn modal_width(ctx: &egui::Context) -> f32 {
    let width = ctx.input(|i| {
        i.viewport()
            .inner_rect
            .map(|r| r.width())
            .unwrap_or(800.0)
    });
    (width * MODAL_WIDTH_RATIO).clamp(MODAL_MIN_WIDTH, MODAL_MAX_WIDTH)
}

pub fn modal_max_height(ctx: &egui::Context) -> f32 {
    let height = ctx.input(|i| {
        i.viewport()
            .inner_rect
            .map(|r| r.height())
            .unwrap_or(600.0)
    });
    height * MODAL_HEIGHT_RATIO
}

pub fn truncated_label(
    ui: &mut egui::Ui,
    text: impl Into<egui::WidgetText>,
) -> egui::Response {
    ui.add(egui::Label::new(text).truncate())
}

/// Scale a color's alpha, used to fade sections in and out.
pub fn faded(color: egui::Color32, opacity: f32) -> egui::Color32 {
    color.gamma_multiply(opacity.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_config() {
        assert_eq!(Theme::from(ThemeMode::Dark), Theme::Dark);
        assert_eq!(Theme::from(ThemeMode::Light), Theme::Light);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
    }

    #[test]
    fn test_faded_clamps() {
        assert_eq!(faded(ACCENT_CYAN, 1.5), ACCENT_CYAN);
        assert_eq!(faded(ACCENT_CYAN, -1.0).a(), 0);
    }
}
