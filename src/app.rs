use eframe::egui::{self, Color32, FontData, FontDefinitions, FontFamily, RichText, TextureHandle};
use eframe::CreationContext;
use rfd::{MessageButtons, MessageDialog, MessageLevel};

use crate::controller::{Controller, ScreenTarget};
use crate::error::AppError;
use crate::i18n::{self, strings, Language};
use crate::image_ops::{LoadedImage, SUPPORTED_EXTENSIONS};
use crate::matcher::MatchStatus;
use crate::presenter::{PresenterWindow, WindowState};
use crate::screens::SystemScreens;

pub struct PresenterApp {
    controller: Controller<SystemScreens>,
    language: Language,
    preview: Option<TextureHandle>,
    presenter: Option<PresenterWindow>,
}

/// Widget actions, collected during layout and handled once per frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Action {
    SelectImage,
    Present(ScreenTarget),
    RefreshScreens,
}

impl PresenterApp {
    pub fn new(cc: &CreationContext<'_>) -> Self {
        configure_fonts(&cc.egui_ctx);
        let mut controller = Controller::new(SystemScreens);
        controller.refresh_screens();
        Self {
            controller,
            language: Language::En,
            preview: None,
            presenter: None,
        }
    }

    pub fn ui(&mut self, ctx: &egui::Context) {
        let t = strings(self.language);
        let mut action = None;

        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(RichText::new(t.title).strong());
                ui.separator();
                ui.label(t.language);
                let before = self.language;
                egui::ComboBox::from_id_source("language_combo")
                    .selected_text(self.language.label())
                    .show_ui(ui, |ui| {
                        for language in Language::ALL {
                            ui.selectable_value(&mut self.language, language, language.label());
                        }
                    });
                if self.language != before {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Title(
                        strings(self.language).title.to_string(),
                    ));
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| match &self.preview {
                Some(texture) => {
                    ui.image((texture.id(), texture.size_vec2()));
                }
                None => {
                    ui.label(t.no_image);
                }
            });

            ui.separator();
            ui.label(self.screen_summary());

            let matches = self.controller.matches();
            let color = match matches.status() {
                MatchStatus::Mismatch => Color32::RED,
                MatchStatus::AllMatched => Color32::GREEN,
                MatchStatus::Neutral => ui.visuals().text_color(),
            };
            let per_screen = matches
                .screens()
                .iter()
                .map(|s| s.message(self.language))
                .collect::<Vec<_>>()
                .join("\n");
            let status = ui.label(RichText::new(matches.message(self.language)).color(color));
            if !per_screen.is_empty() {
                status.on_hover_text(per_screen);
            }

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button(t.select_image).clicked() {
                    action = Some(Action::SelectImage);
                }
                for (target, label) in [
                    (ScreenTarget::Primary, t.show_primary),
                    (ScreenTarget::Secondary, t.show_secondary),
                ] {
                    let enabled = self.controller.can_present(target);
                    if ui.add_enabled(enabled, egui::Button::new(label)).clicked() {
                        action = Some(Action::Present(target));
                    }
                }
                if ui.button(t.refresh_screens).clicked() {
                    action = Some(Action::RefreshScreens);
                }
            });

            if self.presenter.is_some() {
                ui.label(RichText::new(t.presenter_hint).weak());
            }
        });

        if let Some(action) = action {
            self.dispatch(ctx, action);
        }

        if let Some(window) = &mut self.presenter {
            if window.show(ctx, t.presenter_title) == WindowState::Closed {
                self.presenter = None;
            }
        }
    }

    fn dispatch(&mut self, ctx: &egui::Context, action: Action) {
        log::debug!("action {action:?}");
        match action {
            Action::SelectImage => self.select_image(ctx),
            Action::Present(target) => self.present(ctx, target),
            Action::RefreshScreens => self.controller.refresh_screens(),
        }
    }

    fn select_image(&mut self, ctx: &egui::Context) {
        let t = strings(self.language);
        let Some(path) = rfd::FileDialog::new()
            .set_title(t.select_image)
            .add_filter(t.image_filter, &SUPPORTED_EXTENSIONS)
            .pick_file()
        else {
            return;
        };
        match self.controller.select_image(&path) {
            Ok(()) => {
                self.preview = self.controller.image().map(|image| load_preview(ctx, image));
            }
            Err(err) => self.report(&err),
        }
    }

    fn present(&mut self, ctx: &egui::Context, target: ScreenTarget) {
        let plan = match self.controller.present(target) {
            Ok(plan) => plan,
            Err(err) => {
                self.report(&err);
                return;
            }
        };
        if let Some(oversize) = plan.oversize {
            let t = strings(self.language);
            show_dialog(
                MessageLevel::Warning,
                t.warning_title,
                &i18n::oversize_warning(self.language, target, oversize.image, oversize.screen),
            );
        }
        let Some(image) = self.controller.image() else {
            return;
        };
        match PresenterWindow::open(ctx, image, plan.placement) {
            Ok(window) => self.presenter = Some(window),
            Err(err) => self.report(&err),
        }
    }

    /// Turn an error into a blocking dialog in the current language.
    fn report(&self, err: &AppError) {
        let t = strings(self.language);
        let (level, title, text) = match err {
            AppError::DecodeFailure { .. } => {
                (MessageLevel::Warning, t.error_title, t.load_failed.to_string())
            }
            AppError::NoSecondaryScreen => {
                (MessageLevel::Info, t.info_title, t.no_secondary_screen.to_string())
            }
            AppError::NoImageLoaded => {
                (MessageLevel::Info, t.info_title, t.no_image_loaded.to_string())
            }
            AppError::TextureTooLarge {
                width,
                height,
                max_side,
            } => (
                MessageLevel::Error,
                t.error_title,
                i18n::texture_too_large(self.language, (*width, *height), *max_side),
            ),
        };
        show_dialog(level, title, &text);
    }

    /// `Screen 0: 1920x1080 | Screen 1: 2560x1440`
    fn screen_summary(&self) -> String {
        let screens = self.controller.screens();
        if screens.is_empty() {
            return strings(self.language).no_screens.to_string();
        }
        screens
            .iter()
            .map(|s| i18n::screen_entry(self.language, s.index, s.width, s.height))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

impl eframe::App for PresenterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}

fn show_dialog(level: MessageLevel, title: &str, description: &str) {
    let _ = MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::Ok)
        .show();
}

fn load_preview(ctx: &egui::Context, image: &LoadedImage) -> TextureHandle {
    let preview = image.preview();
    let color_image = egui::ColorImage::from_rgba_unmultiplied(
        [preview.width() as usize, preview.height() as usize],
        preview.as_raw(),
    );
    ctx.load_texture("preview", color_image, egui::TextureOptions::LINEAR)
}

/// Install the first CJK-capable system font found so Chinese labels render.
fn configure_fonts(ctx: &egui::Context) {
    let candidates = [
        r"C:\Windows\Fonts\msyh.ttc",
        r"C:\Windows\Fonts\simhei.ttf",
        r"C:\Windows\Fonts\NotoSansSC-VF.ttf",
        "/System/Library/Fonts/PingFang.ttc",
        "/System/Library/Fonts/STHeiti Medium.ttc",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    ];
    let Some(data) = candidates.iter().find_map(|path| std::fs::read(path).ok()) else {
        log::debug!("no CJK font found, Chinese labels may not render");
        return;
    };
    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert("cjk".to_string(), FontData::from_owned(data));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        // After the default fonts so Latin text keeps its usual look.
        fonts.families.entry(family).or_default().push("cjk".to_string());
    }
    ctx.set_fonts(fonts);
}
