// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of erd-canvas and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use smol_str::SmolStr;
use unicode_width::UnicodeWidthStr;

use super::{SIZE_FONT, SIZE_MIN_WIDTH};

#[derive(Debug, Clone, PartialEq)]
pub struct FontConfig {
    pub family: SmolStr,
    pub size_px: f64,
    /// Horizontal advance of one terminal cell, as a fraction of `size_px`.
    pub advance_ratio: f64,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: SmolStr::new_inline("Noto Sans"),
            size_px: SIZE_FONT,
            advance_ratio: 0.6,
        }
    }
}

/// Text measurement backend.
///
/// Implementations must be deterministic for a given font and return a finite,
/// non-negative width.
pub trait TextMeasure {
    fn measure(&self, text: &str, font: &FontConfig) -> f64;
}

impl<F> TextMeasure for F
where
    F: Fn(&str, &FontConfig) -> f64,
{
    fn measure(&self, text: &str, font: &FontConfig) -> f64 {
        self(text, font)
    }
}

/// Cell-width approximation: wide (CJK) characters count as two cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonospaceMeasure;

impl TextMeasure for MonospaceMeasure {
    fn measure(&self, text: &str, font: &FontConfig) -> f64 {
        UnicodeWidthStr::width(text) as f64 * font.size_px * font.advance_ratio
    }
}

/// Sizes name/comment cells from their text.
///
/// Built once with a fixed font; every width it returns is reproducible for the same input.
pub struct Helper {
    measure: Box<dyn TextMeasure>,
    font: FontConfig,
    min_width: f64,
}

impl Helper {
    pub fn new(measure: impl TextMeasure + 'static, font: FontConfig) -> Self {
        Self {
            measure: Box::new(measure),
            font,
            min_width: SIZE_MIN_WIDTH,
        }
    }

    pub fn with_min_width(mut self, min_width: f64) -> Self {
        self.min_width = min_width;
        self
    }

    pub fn font(&self) -> &FontConfig {
        &self.font
    }

    pub fn min_width(&self) -> f64 {
        self.min_width
    }

    pub fn text_width(&self, text: &str) -> f64 {
        let width = self.measure.measure(text, &self.font);
        assert!(
            width.is_finite() && width >= 0.0,
            "text measurement returned {width} for {text:?}"
        );
        width
    }

    /// Measured width, raised to the configured minimum.
    pub fn cell_width(&self, text: &str) -> f64 {
        self.text_width(text).max(self.min_width)
    }
}

impl Default for Helper {
    fn default() -> Self {
        Self::new(MonospaceMeasure, FontConfig::default())
    }
}

impl fmt::Debug for Helper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Helper")
            .field("font", &self.font)
            .field("min_width", &self.min_width)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::{FontConfig, Helper, MonospaceMeasure, TextMeasure};

    #[test]
    fn monospace_counts_wide_chars_twice() {
        let font = FontConfig {
            size_px: 10.0,
            advance_ratio: 1.0,
            ..FontConfig::default()
        };
        assert_eq!(MonospaceMeasure.measure("User", &font), 40.0);
        assert_eq!(MonospaceMeasure.measure("ユーザー", &font), 80.0);
    }

    #[test]
    fn cell_width_is_clamped_to_minimum() {
        let helper = Helper::new(|_: &str, _: &FontConfig| 45.0, FontConfig::default());
        assert_eq!(helper.text_width("users"), 45.0);
        assert_eq!(helper.cell_width("users"), 60.0);

        let wide = Helper::new(|_: &str, _: &FontConfig| 140.0, FontConfig::default());
        assert_eq!(wide.cell_width("a_rather_long_table_name"), 140.0);
    }

    #[test]
    fn measurement_is_deterministic() {
        let helper = Helper::default();
        assert_eq!(helper.text_width("orders"), helper.text_width("orders"));
    }

    #[test]
    #[should_panic(expected = "text measurement returned")]
    fn non_finite_measurement_is_a_contract_breach() {
        let helper = Helper::new(|_: &str, _: &FontConfig| f64::NAN, FontConfig::default());
        helper.text_width("x");
    }
}
