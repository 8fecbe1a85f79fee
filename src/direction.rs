//! Right-to-left auto-detection.
//!
//! Counts Arabic-block characters (U+0600..=U+06FF, which also covers
//! Persian and Urdu) in the visible page text and sets `dir` on the root
//! element when the author has not set one.
//!
//! Detection is optional. Every failure stops at [`DirectionDetector::run`]
//! and leaves `dir` unset.

use std::ops::RangeInclusive;

use crate::config::{DirectionPolicy, ThemeConfig};
use crate::host::{DocumentRoot, HostError, TextSource};
use crate::theme::Direction;

#[cfg(test)]
#[path = "direction_test.rs"]
mod direction_test;

pub const DIR_ATTRIBUTE: &str = "dir";

const ARABIC_BLOCK: RangeInclusive<char> = '\u{0600}'..='\u{06FF}';

/// Number of Arabic-block characters in `text`.
#[must_use]
pub fn count_rtl_chars(text: &str) -> usize {
    text.chars().filter(|c| ARABIC_BLOCK.contains(c)).count()
}

/// Direction for `text` under `threshold`. Strictly more than `threshold`
/// characters is RTL.
#[must_use]
pub fn classify(text: &str, threshold: usize) -> Direction {
    if count_rtl_chars(text) > threshold {
        Direction::Rtl
    } else {
        Direction::Ltr
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirectionDetector {
    policy: DirectionPolicy,
    threshold: usize,
}

impl DirectionDetector {
    #[must_use]
    pub fn new(policy: DirectionPolicy, threshold: usize) -> Self {
        Self { policy, threshold }
    }

    #[must_use]
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self::new(config.direction, config.rtl_threshold)
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.policy != DirectionPolicy::Off
    }

    /// Detect and apply. Returns the direction written, if any.
    ///
    /// An existing `dir` attribute (any value, even empty) is never touched.
    pub fn run(&self, root: &impl DocumentRoot, text: &impl TextSource) -> Option<Direction> {
        if !self.enabled() {
            return None;
        }
        if root.attribute(DIR_ATTRIBUTE).is_some() {
            log::debug!("direction: dir already set, skipping detection");
            return None;
        }
        match self.try_run(root, text) {
            Ok(written) => written,
            Err(e) => {
                log::debug!("direction: detection skipped: {e}");
                None
            }
        }
    }

    fn try_run(&self, root: &impl DocumentRoot, text: &impl TextSource) -> Result<Option<Direction>, HostError> {
        let visible = text.visible_text()?;
        let direction = classify(&visible, self.threshold);
        if direction == Direction::Ltr && self.policy == DirectionPolicy::RtlOnly {
            return Ok(None);
        }
        root.set_attribute(DIR_ATTRIBUTE, direction.as_str())?;
        Ok(Some(direction))
    }
}
