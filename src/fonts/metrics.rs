// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Glyph and face metrics

use crate::Rect;
use std::collections::BTreeMap;

/// Metrics of a single glyph
///
/// All values are in pixels at the font's reference size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlyphMetrics {
    /// Left edge of the glyph in the atlas
    pub x: f32,
    /// Top edge of the glyph in the atlas
    pub y: f32,
    /// Width of the glyph in the atlas
    pub w: f32,
    /// Height of the glyph in the atlas
    pub h: f32,
    /// Horizontal offset from the pen position to the left edge
    pub dx: f32,
    /// Vertical offset from the top of the line to the top edge
    pub dy: f32,
    /// Horizontal advance to the next pen position
    pub d: f32,
}

impl GlyphMetrics {
    /// Ink box relative to the pen position, at reference size
    #[inline]
    pub fn ink_bounds(&self) -> Rect {
        Rect::new(self.dx, self.dy, self.dx + self.w, self.dy + self.h)
    }

    /// Region of the atlas covered by this glyph, in pixels
    #[inline]
    pub fn atlas_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.w, self.y + self.h)
    }

    /// True if the glyph draws anything (whitespace does not)
    #[inline]
    pub fn has_ink(&self) -> bool {
        self.w > 0.0 && self.h > 0.0
    }
}

/// Map from UTF-16 code unit to glyph metrics
///
/// Ordered so that serialised fonts are deterministic.
pub type MetricsMap = BTreeMap<u16, GlyphMetrics>;

/// Vertical metrics and space width of a face
///
/// All values besides `size` are in pixels at the reference `size`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FaceMetrics {
    /// Reference size at which all metrics were measured
    pub size: f32,
    /// Distance between consecutive baselines
    pub leading: f32,
    /// Distance from the top of the line to the baseline
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the line
    pub descent: f32,
    /// Advance used for spaces and for characters missing from the font
    pub space_width: f32,
}

impl FaceMetrics {
    /// True if `size` is usable as a scaling reference
    #[inline]
    pub fn has_valid_size(&self) -> bool {
        self.size.is_finite() && self.size > 0.0
    }
}
