//! Exact resolution matching between an image and the screen inventory.

use crate::i18n::{self, Language};
use crate::screens::DisplayDescriptor;

/// Per-screen comparison outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenMatch {
    pub index: usize,
    pub matched: bool,
    pub image: (u32, u32),
    pub screen: (u32, u32),
}

impl ScreenMatch {
    pub fn message(&self, language: Language) -> String {
        if self.matched {
            i18n::match_line(language, self.index, self.screen)
        } else {
            i18n::mismatch_line(language, self.index, self.image, self.screen)
        }
    }
}

/// Aggregate classification used to colour the status line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchStatus {
    /// No image loaded or no screens known; nothing to report.
    Neutral,
    AllMatched,
    Mismatch,
}

/// Result of comparing one image against every known screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchResult {
    image: Option<(u32, u32)>,
    screens: Vec<ScreenMatch>,
}

/// Compare image dimensions to each screen. Exact equality, no tolerance.
pub fn match_screens(image: Option<(u32, u32)>, screens: &[DisplayDescriptor]) -> MatchResult {
    let Some(size) = image else {
        return MatchResult::default();
    };
    MatchResult {
        image: Some(size),
        screens: screens
            .iter()
            .map(|screen| ScreenMatch {
                index: screen.index,
                matched: screen.size() == size,
                image: size,
                screen: screen.size(),
            })
            .collect(),
    }
}

impl MatchResult {
    pub fn status(&self) -> MatchStatus {
        if self.image.is_none() || self.screens.is_empty() {
            MatchStatus::Neutral
        } else if self.screens.iter().all(|s| s.matched) {
            MatchStatus::AllMatched
        } else {
            MatchStatus::Mismatch
        }
    }

    /// Every screen in inventory order.
    pub fn screens(&self) -> &[ScreenMatch] {
        &self.screens
    }

    /// Mismatching screens in inventory order.
    pub fn mismatches(&self) -> impl Iterator<Item = &ScreenMatch> {
        self.screens.iter().filter(|s| !s.matched)
    }

    /// Human-readable status: one line per mismatch joined by `"; "`, a
    /// single affirmative sentence, or an empty string when neutral.
    pub fn message(&self, language: Language) -> String {
        match self.status() {
            MatchStatus::Neutral => String::new(),
            MatchStatus::AllMatched => i18n::strings(language).all_screens_match.to_string(),
            MatchStatus::Mismatch => self
                .mismatches()
                .map(|s| s.message(language))
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}
