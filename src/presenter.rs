//! Borderless window that shows an image one image pixel per screen pixel.
//!
//! With a known target screen the window is placed at the screen origin and
//! sized to the image instead of going OS fullscreen. Areas the image does not
//! cover stay visible and larger images run off the screen edge.

use eframe::egui::{
    self, Color32, CursorIcon, Key, Pos2, Rect, TextureHandle, TextureOptions, ViewportBuilder,
    ViewportClass, ViewportId,
};

use crate::error::AppError;
use crate::image_ops::LoadedImage;
use crate::screens::DisplayDescriptor;

/// Where and how large the presenter window opens. Origin and size are in
/// physical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement {
    Screen {
        index: usize,
        origin: (i32, i32),
        size: (u32, u32),
        /// Scale factor of the primary monitor. egui-winit multiplies initial
        /// viewport geometry by it, whichever monitor the window lands on.
        primary_scale_factor: f32,
    },
    /// Ask the platform for fullscreen on whichever screen hosts the window.
    PlatformFullscreen { size: (u32, u32) },
}

impl Placement {
    pub fn on_screen(
        screen: &DisplayDescriptor,
        image_size: (u32, u32),
        primary_scale_factor: f32,
    ) -> Self {
        Placement::Screen {
            index: screen.index,
            origin: (screen.x, screen.y),
            size: image_size,
            primary_scale_factor,
        }
    }

    pub fn window_size(&self) -> (u32, u32) {
        match *self {
            Placement::Screen { size, .. } | Placement::PlatformFullscreen { size } => size,
        }
    }

    pub fn viewport_builder(&self, title: &str) -> ViewportBuilder {
        let builder = ViewportBuilder::default()
            .with_title(title)
            .with_decorations(false)
            .with_resizable(false)
            .with_taskbar(false)
            .with_always_on_top();
        match *self {
            Placement::Screen {
                origin: (x, y),
                size: (w, h),
                primary_scale_factor: scale,
                ..
            } => builder
                .with_position(egui::pos2(x as f32 / scale, y as f32 / scale))
                .with_inner_size(egui::vec2(w as f32 / scale, h as f32 / scale)),
            Placement::PlatformFullscreen { .. } => builder.with_fullscreen(true),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowState {
    Displayed,
    Closed,
}

/// Presenter window state without any rendering resources.
#[derive(Clone, Debug)]
pub struct Presentation {
    placement: Placement,
    state: WindowState,
}

impl Presentation {
    pub fn new(placement: Placement) -> Self {
        Self {
            placement,
            state: WindowState::Displayed,
        }
    }

    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    pub fn state(&self) -> WindowState {
        self.state
    }

    /// Escape closes; every other key is ignored.
    pub fn handle_key(&mut self, key: Key) -> WindowState {
        if key == Key::Escape {
            self.state = WindowState::Closed;
        }
        self.state
    }

    pub fn handle_close_request(&mut self) -> WindowState {
        self.state = WindowState::Closed;
        self.state
    }
}

pub struct PresenterWindow {
    presentation: Presentation,
    texture: TextureHandle,
}

impl PresenterWindow {
    pub fn open(
        ctx: &egui::Context,
        image: &LoadedImage,
        placement: Placement,
    ) -> Result<Self, AppError> {
        let (width, height) = image.size();
        let max_side = ctx.input(|i| i.max_texture_side);
        if width.max(height) as usize > max_side {
            return Err(AppError::TextureTooLarge {
                width,
                height,
                max_side,
            });
        }

        let color_image = egui::ColorImage::from_rgba_unmultiplied(
            [width as usize, height as usize],
            image.pixels.as_raw(),
        );
        // Nearest sampling: the texture is drawn at exactly its own size.
        let texture = ctx.load_texture("presented_image", color_image, TextureOptions::NEAREST);
        log::info!(
            "presenting {} ({}x{}) with {:?}",
            image.path.display(),
            width,
            height,
            placement
        );
        Ok(Self {
            presentation: Presentation::new(placement),
            texture,
        })
    }

    pub fn show(&mut self, ctx: &egui::Context, title: &str) -> WindowState {
        let builder = self.presentation.placement().viewport_builder(title);
        let presentation = &mut self.presentation;
        let texture = &self.texture;

        ctx.show_viewport_immediate(
            ViewportId::from_hash_of("pixel_presenter_window"),
            builder,
            |ctx, class| {
                if class == ViewportClass::Embedded {
                    // Backend without multi-window support.
                    egui::Window::new(title)
                        .frame(egui::Frame::none().fill(Color32::BLACK))
                        .show(ctx, |ui| paint_pixels(ui, texture));
                } else {
                    egui::CentralPanel::default()
                        .frame(egui::Frame::none().fill(Color32::BLACK))
                        .show(ctx, |ui| paint_pixels(ui, texture));
                    ctx.set_cursor_icon(CursorIcon::None);
                }

                let (pressed, close_requested) = ctx.input(|i| {
                    let pressed: Vec<Key> = i
                        .events
                        .iter()
                        .filter_map(|event| match event {
                            egui::Event::Key {
                                key, pressed: true, ..
                            } => Some(*key),
                            _ => None,
                        })
                        .collect();
                    (pressed, i.viewport().close_requested())
                });
                for key in pressed {
                    presentation.handle_key(key);
                }
                if close_requested {
                    presentation.handle_close_request();
                }
            },
        );

        if self.presentation.state() == WindowState::Closed {
            log::info!("presenter window closed");
        }
        self.presentation.state()
    }
}

/// Paint the texture at one texel per physical pixel from the top-left.
fn paint_pixels(ui: &mut egui::Ui, texture: &TextureHandle) {
    let pixels_per_point = ui.ctx().pixels_per_point();
    let [w, h] = texture.size();
    let size = egui::vec2(w as f32 / pixels_per_point, h as f32 / pixels_per_point);
    let rect = Rect::from_min_size(ui.max_rect().min, size);
    ui.allocate_rect(rect, egui::Sense::hover());
    ui.painter().image(
        texture.id(),
        rect,
        Rect::from_min_max(Pos2::ZERO, egui::pos2(1.0, 1.0)),
        Color32::WHITE,
    );
}
