mod app;
mod config;
mod error;
mod input;
mod logging;
mod model;
mod motion;
mod state;
mod style;
mod view;

use app::SnapDeck;
use config::Config;
use eframe::egui;

fn main() -> eframe::Result<()> {
    logging::init_logging();

    if let Err(e) = Config::create_default() {
        tracing::warn!(error = %e, "could not write default config");
    }
    let config = Config::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("SnapDeck"),
        ..Default::default()
    };

    eframe::run_native(
        "SnapDeck",
        options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(SnapDeck::new(config)?))
        }),
    )
}
