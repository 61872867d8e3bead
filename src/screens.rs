//! Screen inventory backed by the platform display list.

use display_info::DisplayInfo;

/// Snapshot of one monitor taken at query time.
///
/// Geometry is in physical pixels on every platform. The descriptor goes
/// stale when monitors are reconnected; callers re-query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayDescriptor {
    /// Position in the inventory, 0 is the primary screen.
    pub index: usize,
    /// Left edge of the screen on the virtual desktop.
    pub x: i32,
    /// Top edge of the screen on the virtual desktop.
    pub y: i32,
    pub width: u32,
    pub height: u32,
    /// Physical pixels per logical point.
    pub scale_factor: f32,
}

impl DisplayDescriptor {
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Anything able to enumerate attached screens.
pub trait ScreenSource {
    /// Return the attached screens, primary first. An empty list is valid.
    fn list_screens(&self) -> Vec<DisplayDescriptor>;
}

/// display-info reports points on macOS and Linux and physical pixels on Windows.
const REPORTS_LOGICAL_UNITS: bool = !cfg!(target_os = "windows");

/// Screen source that asks the operating system on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemScreens;

impl ScreenSource for SystemScreens {
    fn list_screens(&self) -> Vec<DisplayDescriptor> {
        match DisplayInfo::all() {
            Ok(displays) => {
                let screens = build_descriptors(
                    displays
                        .iter()
                        .map(|d| (d.is_primary, d.x, d.y, d.width, d.height, d.scale_factor)),
                    REPORTS_LOGICAL_UNITS,
                );
                log::info!("detected {} screen(s): {}", screens.len(), describe(&screens));
                screens
            }
            Err(err) => {
                log::warn!("failed to enumerate screens: {err}");
                Vec::new()
            }
        }
    }
}

/// Build descriptors from raw display rows, moving the primary display to the
/// front while keeping enumeration order otherwise. `logical` rows are scaled
/// up to physical pixels.
fn build_descriptors(
    rows: impl IntoIterator<Item = (bool, i32, i32, u32, u32, f32)>,
    logical: bool,
) -> Vec<DisplayDescriptor> {
    let mut rows: Vec<_> = rows.into_iter().collect();
    // Stable sort keeps the platform order among non-primary screens.
    rows.sort_by_key(|row| !row.0);
    rows.into_iter()
        .enumerate()
        .map(|(index, (_, x, y, width, height, scale_factor))| {
            let scale_factor = if scale_factor > 0.0 { scale_factor } else { 1.0 };
            let factor = if logical { scale_factor } else { 1.0 };
            DisplayDescriptor {
                index,
                x: (x as f32 * factor).round() as i32,
                y: (y as f32 * factor).round() as i32,
                width: (width as f32 * factor).round() as u32,
                height: (height as f32 * factor).round() as u32,
                scale_factor,
            }
        })
        .collect()
}

/// Compact `0: 1920x1080 @ (0, 0)` listing for logs.
fn describe(screens: &[DisplayDescriptor]) -> String {
    screens
        .iter()
        .map(|s| format!("{}: {}x{} @ ({}, {})", s.index, s.width, s.height, s.x, s.y))
        .collect::<Vec<_>>()
        .join(", ")
}
