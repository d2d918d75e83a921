// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Type conversion utilities
//!
//! Glyph counts and atlas dimensions are represented as `u32` on disk; these
//! helpers convert to and from `usize` with checks on debug builds.

use crate::{Rect, Vec2};
use easy_cast::Cast;

/// Convert `usize` → `u32`
///
/// This is a "safer" wrapper around `as` ensuring (on debug builds) that the
/// input value may be represented correctly by `u32`.
#[inline]
pub fn to_u32(x: usize) -> u32 {
    x.cast()
}

/// Convert `u32` → `usize`
///
/// This is a "safer" wrapper around `as` ensuring that the operation is
/// zero-extension.
#[inline]
pub fn to_usize(x: u32) -> usize {
    x.cast()
}

/// Scale factor: requested size per reference size
///
/// All stored font metrics are measured at the font's reference size. A query
/// at some other size multiplies each metric by this ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale(pub f32);

impl Scale {
    /// Ratio `target / reference`
    #[inline]
    pub fn new(target: f32, reference: f32) -> Self {
        Scale(target / reference)
    }

    /// Scale a single length
    #[inline]
    pub fn px(self, x: f32) -> f32 {
        x * self.0
    }

    /// Scale a vector
    #[inline]
    pub fn vec(self, v: Vec2) -> Vec2 {
        v * self.0
    }

    /// Scale a rect about the origin
    #[inline]
    pub fn rect(self, r: Rect) -> Rect {
        r.scale(self.0)
    }
}

impl Default for Scale {
    fn default() -> Self {
        Scale(1.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn scale_is_linear() {
        let s = Scale::new(24.0, 12.0);
        assert_eq!(s.px(3.0), 6.0);
        assert_eq!(s.vec(Vec2(1.0, -2.0)), Vec2(2.0, -4.0));
        assert_eq!(
            s.rect(Rect::new(1.0, 2.0, 3.0, 4.0)),
            Rect::new(2.0, 4.0, 6.0, 8.0)
        );
    }

    #[test]
    fn scale_inverts() {
        let up = Scale::new(36.0, 12.0);
        let down = Scale::new(12.0, 36.0);
        assert!((down.px(up.px(7.5)) - 7.5).abs() < 1e-6);
    }

    #[test]
    fn casts() {
        assert_eq!(to_u32(17), 17u32);
        assert_eq!(to_usize(17), 17usize);
    }
}
