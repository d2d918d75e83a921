// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Simple data types

use std::ops::{Add, AddAssign, Mul, Sub};

/// 2D vector
///
/// Used both as a position and as a size. Coordinates are in pixels with the
/// y axis pointing down.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2(pub f32, pub f32);

impl Vec2 {
    /// Zero
    pub const ZERO: Vec2 = Vec2(0.0, 0.0);

    /// Take the minimum component-wise
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Vec2(self.0.min(other.0), self.1.min(other.1))
    }

    /// Take the maximum component-wise
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Vec2(self.0.max(other.0), self.1.max(other.1))
    }
}

impl Add for Vec2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Vec2(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
        self.1 += rhs.1;
    }
}

impl Sub for Vec2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Vec2(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Vec2(self.0 * rhs, self.1 * rhs)
    }
}

/// Axis-aligned rectangle
///
/// Defined by its `min` (top-left) and `max` (bottom-right) corners.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// The zero-sized rect at the origin
    pub const ZERO: Rect = Rect {
        min: Vec2::ZERO,
        max: Vec2::ZERO,
    };

    /// Construct from corner coordinates
    #[inline]
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Rect {
            min: Vec2(x1, y1),
            max: Vec2(x2, y2),
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.0 - self.min.0
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.1 - self.min.1
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// True if the rect covers no area
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width() > 0.0 && self.height() > 0.0)
    }

    /// Translate by `v`
    #[inline]
    pub fn offset(self, v: Vec2) -> Self {
        Rect {
            min: self.min + v,
            max: self.max + v,
        }
    }

    /// Scale both corners about the origin
    #[inline]
    pub fn scale(self, factor: f32) -> Self {
        Rect {
            min: self.min * factor,
            max: self.max * factor,
        }
    }

    /// Smallest rect enclosing both `self` and `other`
    #[inline]
    pub fn union(self, other: Self) -> Self {
        Rect {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn union_encloses_both() {
        let a = Rect::new(0.0, 0.0, 2.0, 2.0);
        let b = Rect::new(1.0, -1.0, 5.0, 1.0);
        assert_eq!(a.union(b), Rect::new(0.0, -1.0, 5.0, 2.0));
    }

    #[test]
    fn empty() {
        assert!(Rect::ZERO.is_empty());
        assert!(Rect::new(0.0, 0.0, 3.0, 0.0).is_empty());
        assert!(!Rect::new(0.0, 0.0, 3.0, 1.0).is_empty());
    }

    #[test]
    fn offset_and_size() {
        let r = Rect::new(1.0, 2.0, 4.0, 6.0).offset(Vec2(10.0, 0.5));
        assert_eq!(r, Rect::new(11.0, 2.5, 14.0, 6.5));
        assert_eq!(r.size(), Vec2(3.0, 4.0));
    }
}
