mod app;
mod controller;
mod error;
mod i18n;
mod image_ops;
mod matcher;
mod presenter;
mod screens;

use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([500.0, 350.0]),
        ..Default::default()
    };
    eframe::run_native(
        i18n::strings(i18n::Language::En).title,
        native_options,
        Box::new(|cc| Box::new(app::PresenterApp::new(cc))),
    )?;
    Ok(())
}
