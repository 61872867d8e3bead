//! Application state owned by the main window: the loaded image and the most
//! recent screen inventory.

use std::path::Path;

use crate::error::AppError;
use crate::image_ops::LoadedImage;
use crate::matcher::{match_screens, MatchResult};
use crate::presenter::Placement;
use crate::screens::{DisplayDescriptor, ScreenSource, SystemScreens};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScreenTarget {
    Primary,
    Secondary,
}

impl ScreenTarget {
    fn index(self) -> usize {
        match self {
            ScreenTarget::Primary => 0,
            ScreenTarget::Secondary => 1,
        }
    }
}

/// Image larger than its target screen in at least one dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Oversize {
    pub image: (u32, u32),
    pub screen: (u32, u32),
}

#[derive(Clone, Debug, PartialEq)]
pub struct PresentPlan {
    pub target: ScreenTarget,
    pub placement: Placement,
    pub oversize: Option<Oversize>,
}

pub struct Controller<S = SystemScreens> {
    source: S,
    image: Option<LoadedImage>,
    screens: Vec<DisplayDescriptor>,
    matches: MatchResult,
}

impl<S: ScreenSource> Controller<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            image: None,
            screens: Vec::new(),
            matches: MatchResult::default(),
        }
    }

    pub fn image(&self) -> Option<&LoadedImage> {
        self.image.as_ref()
    }

    pub fn screens(&self) -> &[DisplayDescriptor] {
        &self.screens
    }

    pub fn matches(&self) -> &MatchResult {
        &self.matches
    }

    pub fn refresh_screens(&mut self) {
        self.screens = self.source.list_screens();
        self.recompute_matches();
    }

    /// Decode `path` and make it the current image.
    ///
    /// On failure the previous image, screen snapshot and match result are
    /// left exactly as they were.
    pub fn select_image(&mut self, path: &Path) -> Result<(), AppError> {
        let image = match LoadedImage::open(path) {
            Ok(image) => image,
            Err(err) => {
                log::warn!("{err}");
                return Err(err);
            }
        };
        log::info!(
            "loaded {} ({}x{})",
            image.path.display(),
            image.width(),
            image.height()
        );
        self.image = Some(image);
        self.refresh_screens();
        Ok(())
    }

    pub fn can_present(&self, target: ScreenTarget) -> bool {
        match target {
            ScreenTarget::Primary => self.image.is_some(),
            ScreenTarget::Secondary => self.image.is_some() && self.screens.len() > 1,
        }
    }

    /// Resolve `target` against a fresh screen list and plan the window.
    ///
    /// The primary target falls back to platform fullscreen when no screen
    /// is reported at all.
    pub fn present(&mut self, target: ScreenTarget) -> Result<PresentPlan, AppError> {
        let size = self.image.as_ref().ok_or(AppError::NoImageLoaded)?.size();
        self.refresh_screens();

        let Some(screen) = self.screens.get(target.index()) else {
            return match target {
                ScreenTarget::Primary => Ok(PresentPlan {
                    target,
                    placement: Placement::PlatformFullscreen { size },
                    oversize: None,
                }),
                ScreenTarget::Secondary => Err(AppError::NoSecondaryScreen),
            };
        };

        let oversize = (size.0 > screen.width || size.1 > screen.height).then(|| Oversize {
            image: size,
            screen: screen.size(),
        });
        let primary_scale_factor = self.screens[0].scale_factor;
        if let Some(oversize) = oversize {
            log::warn!(
                "image {}x{} is larger than screen {} ({}x{})",
                size.0,
                size.1,
                screen.index,
                oversize.screen.0,
                oversize.screen.1
            );
        }
        Ok(PresentPlan {
            target,
            placement: Placement::on_screen(screen, size, primary_scale_factor),
            oversize,
        })
    }

    fn recompute_matches(&mut self) {
        self.matches = match_screens(self.image.as_ref().map(LoadedImage::size), &self.screens);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::path::PathBuf;
    use std::rc::Rc;

    use image::RgbaImage;

    use super::*;
    use crate::matcher::MatchStatus;

    /// Screen source whose answer can be changed between calls.
    #[derive(Clone, Default)]
    struct FakeScreens(Rc<RefCell<Vec<(u32, u32)>>>);

    impl FakeScreens {
        fn set(&self, sizes: &[(u32, u32)]) {
            *self.0.borrow_mut() = sizes.to_vec();
        }
    }

    impl ScreenSource for FakeScreens {
        fn list_screens(&self) -> Vec<DisplayDescriptor> {
            let mut x = 0;
            self.0
                .borrow()
                .iter()
                .enumerate()
                .map(|(index, &(width, height))| {
                    let screen = DisplayDescriptor {
                        index,
                        x,
                        y: 0,
                        width,
                        height,
                        scale_factor: 1.0,
                    };
                    x += width as i32;
                    screen
                })
                .collect()
        }
    }

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        RgbaImage::new(width, height).save(&path).unwrap();
        path
    }

    fn write_garbage(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, b"not an image").unwrap();
        path
    }

    fn controller(sizes: &[(u32, u32)]) -> (Controller<FakeScreens>, FakeScreens) {
        let screens = FakeScreens::default();
        screens.set(sizes);
        (Controller::new(screens.clone()), screens)
    }

    #[test]
    fn nothing_is_enabled_without_an_image() {
        let (mut controller, _) = controller(&[(1920, 1080), (1920, 1080)]);
        controller.refresh_screens();

        assert!(!controller.can_present(ScreenTarget::Primary));
        assert!(!controller.can_present(ScreenTarget::Secondary));
        assert_eq!(controller.matches().status(), MatchStatus::Neutral);
        assert!(matches!(
            controller.present(ScreenTarget::Primary),
            Err(AppError::NoImageLoaded)
        ));
    }

    #[test]
    fn selecting_an_image_refreshes_screens_and_matches() {
        let dir = tempfile::tempdir().unwrap();
        let (mut controller, _) = controller(&[(64, 48), (128, 96)]);

        controller
            .select_image(&write_png(dir.path(), "a.png", 64, 48))
            .unwrap();

        assert_eq!(controller.screens().len(), 2);
        assert_eq!(controller.matches().status(), MatchStatus::Mismatch);
        let mismatched: Vec<_> = controller.matches().mismatches().map(|m| m.index).collect();
        assert_eq!(mismatched, vec![1]);
        assert!(controller.can_present(ScreenTarget::Primary));
        assert!(controller.can_present(ScreenTarget::Secondary));
    }

    #[test]
    fn secondary_is_disabled_with_one_screen() {
        let dir = tempfile::tempdir().unwrap();
        let (mut controller, _) = controller(&[(64, 48)]);
        controller
            .select_image(&write_png(dir.path(), "a.png", 64, 48))
            .unwrap();

        assert!(controller.can_present(ScreenTarget::Primary));
        assert!(!controller.can_present(ScreenTarget::Secondary));
        assert_eq!(controller.matches().status(), MatchStatus::AllMatched);
    }

    #[test]
    fn decode_failure_keeps_previous_state() {
        let dir = tempfile::tempdir().unwrap();
        let (mut controller, _) = controller(&[(64, 48), (64, 48)]);
        let good = write_png(dir.path(), "good.png", 64, 48);
        controller.select_image(&good).unwrap();
        let matches_before = controller.matches().clone();

        let err = controller
            .select_image(&write_garbage(dir.path(), "bad.png"))
            .unwrap_err();

        assert!(matches!(err, AppError::DecodeFailure { .. }));
        assert_eq!(controller.image().map(|i| i.path.clone()), Some(good));
        assert_eq!(controller.matches(), &matches_before);
        assert!(controller.can_present(ScreenTarget::Primary));
        assert!(controller.can_present(ScreenTarget::Secondary));
    }

    #[test]
    fn decode_failure_with_no_prior_image_stays_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let (mut controller, _) = controller(&[(64, 48), (64, 48)]);

        assert!(controller
            .select_image(&write_garbage(dir.path(), "bad.jpg"))
            .is_err());
        assert!(controller.image().is_none());
        assert!(!controller.can_present(ScreenTarget::Primary));
        assert!(!controller.can_present(ScreenTarget::Secondary));
    }

    #[test]
    fn present_on_matching_secondary_screen() {
        let dir = tempfile::tempdir().unwrap();
        let (mut controller, _) = controller(&[(1920, 1080), (1920, 1080)]);
        controller
            .select_image(&write_png(dir.path(), "full.png", 1920, 1080))
            .unwrap();

        let plan = controller.present(ScreenTarget::Secondary).unwrap();

        assert_eq!(plan.oversize, None);
        assert_eq!(
            plan.placement,
            Placement::Screen {
                index: 1,
                origin: (1920, 0),
                size: (1920, 1080),
                primary_scale_factor: 1.0,
            }
        );
    }

    #[test]
    fn oversized_image_warns_but_keeps_native_size() {
        let dir = tempfile::tempdir().unwrap();
        let (mut controller, _) = controller(&[(64, 48)]);
        controller
            .select_image(&write_png(dir.path(), "big.png", 100, 40))
            .unwrap();

        let plan = controller.present(ScreenTarget::Primary).unwrap();

        assert_eq!(
            plan.oversize,
            Some(Oversize {
                image: (100, 40),
                screen: (64, 48),
            })
        );
        assert_eq!(plan.placement.window_size(), (100, 40));
    }

    #[test]
    fn secondary_with_one_screen_is_no_secondary_screen() {
        let dir = tempfile::tempdir().unwrap();
        let (mut controller, _) = controller(&[(64, 48)]);
        controller
            .select_image(&write_png(dir.path(), "a.png", 64, 48))
            .unwrap();

        assert!(matches!(
            controller.present(ScreenTarget::Secondary),
            Err(AppError::NoSecondaryScreen)
        ));
        assert_eq!(controller.screens().len(), 1);
    }

    #[test]
    fn present_uses_current_screen_geometry() {
        let dir = tempfile::tempdir().unwrap();
        let (mut controller, screens) = controller(&[(64, 48), (64, 48)]);
        controller
            .select_image(&write_png(dir.path(), "a.png", 64, 48))
            .unwrap();

        screens.set(&[(64, 48)]);

        assert!(matches!(
            controller.present(ScreenTarget::Secondary),
            Err(AppError::NoSecondaryScreen)
        ));
        assert!(!controller.can_present(ScreenTarget::Secondary));
    }

    #[test]
    fn primary_without_screens_falls_back_to_platform_fullscreen() {
        let dir = tempfile::tempdir().unwrap();
        let (mut controller, _) = controller(&[]);
        controller
            .select_image(&write_png(dir.path(), "a.png", 10, 10))
            .unwrap();

        assert_eq!(controller.matches().status(), MatchStatus::Neutral);
        let plan = controller.present(ScreenTarget::Primary).unwrap();
        assert_eq!(
            plan.placement,
            Placement::PlatformFullscreen { size: (10, 10) }
        );
    }
}
