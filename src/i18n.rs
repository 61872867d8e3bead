//! UI strings for the supported languages.

use crate::controller::ScreenTarget;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Language {
    En,
    Zh,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Zh];

    /// Name of the language in its own script.
    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Zh => "简体中文",
        }
    }
}

/// Static labels used by the main window and dialogs.
pub struct Strings {
    pub title: &'static str,
    pub language: &'static str,
    pub no_image: &'static str,
    pub select_image: &'static str,
    pub image_filter: &'static str,
    pub show_primary: &'static str,
    pub show_secondary: &'static str,
    pub refresh_screens: &'static str,
    pub no_screens: &'static str,
    pub all_screens_match: &'static str,
    pub error_title: &'static str,
    pub warning_title: &'static str,
    pub info_title: &'static str,
    pub load_failed: &'static str,
    pub no_secondary_screen: &'static str,
    pub no_image_loaded: &'static str,
    pub presenter_title: &'static str,
    pub presenter_hint: &'static str,
}

const EN: Strings = Strings {
    title: "Pixel Presenter",
    language: "Language",
    no_image: "No image selected",
    select_image: "Select image",
    image_filter: "Images",
    show_primary: "Show on primary screen",
    show_secondary: "Show on secondary screen",
    refresh_screens: "Refresh screens",
    no_screens: "No screens detected",
    all_screens_match: "Image resolution matches every screen pixel for pixel",
    error_title: "Error",
    warning_title: "Warning",
    info_title: "Notice",
    load_failed: "Unable to load image",
    no_secondary_screen: "No secondary screen detected",
    no_image_loaded: "Select an image first",
    presenter_title: "Pixel Presenter - fullscreen",
    presenter_hint: "Press Esc to close",
};

const ZH: Strings = Strings {
    title: "图片全屏展示",
    language: "语言",
    no_image: "未选择图片",
    select_image: "选择图片",
    image_filter: "图片",
    show_primary: "主屏全屏展示",
    show_secondary: "扩展屏全屏展示",
    refresh_screens: "刷新屏幕",
    no_screens: "未检测到屏幕",
    all_screens_match: "图片分辨率与所有屏幕点对点匹配",
    error_title: "错误",
    warning_title: "警告",
    info_title: "提示",
    load_failed: "无法加载图片",
    no_secondary_screen: "未检测到扩展屏",
    no_image_loaded: "请先选择图片",
    presenter_title: "图片全屏展示 - 全屏",
    presenter_hint: "按 Esc 关闭",
};

pub fn strings(language: Language) -> &'static Strings {
    match language {
        Language::En => &EN,
        Language::Zh => &ZH,
    }
}

/// One entry of the screen inventory line.
pub fn screen_entry(language: Language, index: usize, width: u32, height: u32) -> String {
    match language {
        Language::En => format!("Screen {index}: {width}x{height}"),
        Language::Zh => format!("屏幕{index}: {width}x{height}"),
    }
}

pub fn match_line(language: Language, index: usize, screen: (u32, u32)) -> String {
    let (sw, sh) = screen;
    match language {
        Language::En => format!("Image matches screen {index}: {sw}x{sh}"),
        Language::Zh => format!("图片与屏幕{index}分辨率匹配: {sw}x{sh}"),
    }
}

/// Diagnostic for one screen whose resolution differs from the image.
pub fn mismatch_line(
    language: Language,
    index: usize,
    image: (u32, u32),
    screen: (u32, u32),
) -> String {
    let (iw, ih) = image;
    let (sw, sh) = screen;
    match language {
        Language::En => format!(
            "Image does not match screen {index}: image {iw}x{ih}, screen {sw}x{sh}"
        ),
        Language::Zh => format!("图片与屏幕{index}分辨率不匹配: 图片{iw}x{ih} 屏幕{sw}x{sh}"),
    }
}

/// Warning shown before presenting an image larger than its target screen.
pub fn oversize_warning(
    language: Language,
    target: ScreenTarget,
    image: (u32, u32),
    screen: (u32, u32),
) -> String {
    let (iw, ih) = image;
    let (sw, sh) = screen;
    match (language, target) {
        (Language::En, ScreenTarget::Primary) => format!(
            "Image resolution ({iw}x{ih}) is larger than the primary screen ({sw}x{sh}) and may not display completely"
        ),
        (Language::En, ScreenTarget::Secondary) => format!(
            "Image resolution ({iw}x{ih}) is larger than the secondary screen ({sw}x{sh}) and may not display completely"
        ),
        (Language::Zh, ScreenTarget::Primary) => {
            format!("图片分辨率({iw}x{ih})大于主屏({sw}x{sh})，可能无法完整显示")
        }
        (Language::Zh, ScreenTarget::Secondary) => {
            format!("图片分辨率({iw}x{ih})大于扩展屏({sw}x{sh})，可能无法完整显示")
        }
    }
}

pub fn texture_too_large(language: Language, image: (u32, u32), max_side: usize) -> String {
    let (iw, ih) = image;
    match language {
        Language::En => format!(
            "Image resolution ({iw}x{ih}) exceeds the largest texture the renderer supports ({max_side}px per side)"
        ),
        Language::Zh => format!("图片分辨率({iw}x{ih})超过渲染器支持的最大纹理尺寸(每边{max_side}像素)"),
    }
}
