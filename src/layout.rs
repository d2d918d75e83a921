// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Glyph quads
//!
//! The simplest possible layout: glyphs are placed one after another along
//! the pen, without kerning, shaping or wrapping. Each quad pairs a screen
//! rect with the matching atlas rect, ready for a vertex buffer.

use crate::{Font, Rect, Vec2};

/// A glyph positioned for drawing
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphQuad {
    /// UTF-16 code unit
    pub code: u16,
    /// Screen-space rect
    pub position: Rect,
    /// Normalized atlas rect
    pub tex_coords: Rect,
}

impl Font {
    /// Lay out `text` at `size` from `origin`
    ///
    /// `origin` is the top-left of the first line. A quad is generated for
    /// each glyph with ink; whitespace and missing characters only advance
    /// the pen (the latter by the space width). `\n` starts a new line,
    /// [`Font::leading`] below the previous one.
    ///
    /// Returns the quads and the final pen position.
    pub fn quads(&self, text: &str, size: f32, origin: Vec2) -> (Vec<GlyphQuad>, Vec2) {
        let scale = self.scale(size);
        let line_height = scale.px(self.face.leading);
        let mut pen = origin;
        let mut quads = Vec::with_capacity(text.len());

        for code in text.encode_utf16() {
            if code == u16::from(b'\n') {
                pen = Vec2(origin.0, pen.1 + line_height);
                continue;
            }

            match self.metrics.get(&code) {
                Some(m) => {
                    if m.has_ink() {
                        quads.push(GlyphQuad {
                            code,
                            position: scale.rect(m.ink_bounds()).offset(pen),
                            tex_coords: self.tex_coords(code),
                        });
                    }
                    pen.0 += scale.px(m.d);
                }
                None => pen.0 += scale.px(self.face.space_width),
            }
        }

        (quads, pen)
    }
}
