// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! The font type

use super::{FaceMetrics, FontError, GlyphMetrics, MetricsMap, SourceError, TargetError};
use crate::conv::Scale;
use crate::parser::{binary, sdfont};
use crate::texture::AtlasTexture;
use crate::{Config, Rect, Vec2};
use image::{DynamicImage, GenericImageView};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Conventional size for queries with no preferred size
pub const DEFAULT_SIZE: f32 = 12.0;

/// A font atlas with glyph metrics
///
/// A `Font` is loaded once, then queried at any size: every metric is stored
/// at the reference size ([`Font::size`]) and scaled linearly by
/// `size / reference` on access.
///
/// Character codes are UTF-16 code units. Characters outside the Basic
/// Multilingual Plane are therefore looked up per surrogate and, unless the
/// font defines glyphs for surrogates, measured as spaces.
pub struct Font {
    pub(crate) family: String,
    pub(crate) face: FaceMetrics,
    pub(crate) atlas: Option<DynamicImage>,
    pub(crate) texture: Option<Box<dyn AtlasTexture>>,
    pub(crate) metrics: MetricsMap,
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Font")
            .field("family", &self.family)
            .field("face", &self.face)
            .field("atlas", &self.atlas_size())
            .field("texture", &self.texture.is_some())
            .field("glyphs", &self.metrics.len())
            .finish()
    }
}

impl Default for Font {
    fn default() -> Self {
        Font {
            family: String::new(),
            face: FaceMetrics {
                size: DEFAULT_SIZE,
                ..Default::default()
            },
            atlas: None,
            texture: None,
            metrics: MetricsMap::new(),
        }
    }
}

impl Font {
    /// Construct an empty font
    ///
    /// The font has no glyphs and a reference size of [`DEFAULT_SIZE`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct from metrics
    ///
    /// The font has no atlas image; [`Font::tex_coords`] yields `Rect::ZERO`
    /// until one is set with [`Font::set_atlas`].
    pub fn from_parts(
        family: impl Into<String>,
        face: FaceMetrics,
        metrics: MetricsMap,
    ) -> Result<Self, FontError> {
        if !face.has_valid_size() {
            return Err(FontError::InvalidSize(face.size));
        }
        Ok(Font {
            family: family.into(),
            face,
            atlas: None,
            texture: None,
            metrics,
        })
    }

    /// Create from an atlas image and SDFont metrics file
    ///
    /// `png` supplies the encoded atlas image, `txt` the text metrics written
    /// alongside it by SDFont (or any AngelCode BMFont text exporter).
    pub fn create(png: impl Read, txt: impl Read) -> Result<Self, FontError> {
        Self::create_with(&Config::default(), png, txt)
    }

    /// Create from an atlas image and SDFont metrics file, with configuration
    pub fn create_with(
        config: &Config,
        mut png: impl Read,
        mut txt: impl Read,
    ) -> Result<Self, FontError> {
        let mut text = String::new();
        txt.read_to_string(&mut text).map_err(SourceError::from)?;
        let parsed = sdfont::parse(&text, config)?;

        let mut bytes = Vec::new();
        png.read_to_end(&mut bytes).map_err(SourceError::from)?;
        let image = image::load_from_memory(&bytes).map_err(SourceError::from)?;
        let atlas = config.atlas_format().convert(image);

        if let Some(scale) = parsed.scale {
            if scale != atlas.dimensions() {
                log::warn!(
                    "Font::create: metrics expect a {}x{} atlas but image is {}x{}",
                    scale.0,
                    scale.1,
                    atlas.width(),
                    atlas.height()
                );
            }
        }

        let font = Font {
            family: parsed.family,
            face: parsed.face,
            atlas: Some(atlas),
            texture: None,
            metrics: parsed.metrics,
        };
        font.log_loaded("create");
        Ok(font)
    }

    /// Create from an atlas image file and SDFont metrics file
    pub fn create_from_paths(
        png: impl AsRef<Path>,
        txt: impl AsRef<Path>,
    ) -> Result<Self, FontError> {
        let png = File::open(png).map_err(SourceError::from)?;
        let txt = File::open(txt).map_err(SourceError::from)?;
        Self::create(BufReader::new(png), BufReader::new(txt))
    }

    /// Read a binary font as written by [`Font::write`]
    pub fn read(source: impl Read) -> Result<Self, FontError> {
        Self::read_with(&Config::default(), source)
    }

    /// Read a binary font, with configuration
    pub fn read_with(config: &Config, source: impl Read) -> Result<Self, FontError> {
        let font = binary::read(source, config)?;
        font.log_loaded("read");
        Ok(font)
    }

    /// Read a binary font file
    pub fn read_file(path: impl AsRef<Path>) -> Result<Self, FontError> {
        let file = File::open(path).map_err(SourceError::from)?;
        Self::read(BufReader::new(file))
    }

    /// Write as a binary font
    ///
    /// The atlas image (if any) is embedded as PNG.
    pub fn write(&self, target: impl Write) -> Result<(), FontError> {
        binary::write(self, target)?;
        Ok(())
    }

    /// Write a binary font file
    pub fn write_file(&self, path: impl AsRef<Path>) -> Result<(), FontError> {
        let file = File::create(path).map_err(TargetError::from)?;
        self.write(BufWriter::new(file))
    }

    fn log_loaded(&self, op: &str) {
        log::info!(
            "Font::{op}: loaded \"{}\" at {}px with {} glyphs",
            self.family,
            self.face.size,
            self.metrics.len()
        );
    }

    /// Family name
    #[inline]
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Reference size
    ///
    /// This is the size at which stored metrics were measured.
    #[inline]
    pub fn size(&self) -> f32 {
        self.face.size
    }

    /// Face metrics at reference size
    #[inline]
    pub fn face_metrics(&self) -> &FaceMetrics {
        &self.face
    }

    /// Scale from reference size to `size`
    #[inline]
    pub fn scale(&self, size: f32) -> Scale {
        Scale::new(size, self.face.size)
    }

    /// Ascent at `size`
    #[inline]
    pub fn ascent(&self, size: f32) -> f32 {
        self.scale(size).px(self.face.ascent)
    }

    /// Descent at `size`
    #[inline]
    pub fn descent(&self, size: f32) -> f32 {
        self.scale(size).px(self.face.descent)
    }

    /// Line spacing at `size`
    #[inline]
    pub fn leading(&self, size: f32) -> f32 {
        self.scale(size).px(self.face.leading)
    }

    /// Width of a space at `size`
    #[inline]
    pub fn space_width(&self, size: f32) -> f32 {
        self.scale(size).px(self.face.space_width)
    }

    /// True if a glyph exists for `code`
    #[inline]
    pub fn contains(&self, code: u16) -> bool {
        self.metrics.contains_key(&code)
    }

    /// Metrics for `code`, at reference size
    #[inline]
    pub fn glyph(&self, code: u16) -> Option<&GlyphMetrics> {
        self.metrics.get(&code)
    }

    /// Iterate over all glyphs in order of character code
    pub fn glyphs(&self) -> impl ExactSizeIterator<Item = (u16, &GlyphMetrics)> + '_ {
        self.metrics.iter().map(|(code, m)| (*code, m))
    }

    /// Number of glyphs
    #[inline]
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    /// True if the font has no glyphs
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// Ink box of `code` relative to the pen position at `size`
    ///
    /// The y axis points down from the top of the line. Returns `Rect::ZERO`
    /// if `code` is not in the font.
    pub fn bounds(&self, code: u16, size: f32) -> Rect {
        match self.metrics.get(&code) {
            Some(m) => self.scale(size).rect(m.ink_bounds()),
            None => Rect::ZERO,
        }
    }

    /// Normalized texture coordinates of `code` within the atlas
    ///
    /// Returns `Rect::ZERO` if `code` is not in the font or no atlas is
    /// loaded.
    pub fn tex_coords(&self, code: u16) -> Rect {
        let (Some(m), Some((w, h))) = (self.metrics.get(&code), self.atlas_size()) else {
            return Rect::ZERO;
        };
        if w == 0 || h == 0 {
            return Rect::ZERO;
        }
        let r = m.atlas_rect();
        let (w, h) = (w as f32, h as f32);
        Rect::new(r.min.0 / w, r.min.1 / h, r.max.0 / w, r.max.1 / h)
    }

    /// Horizontal advance after `code` at `size`
    ///
    /// Characters not in the font advance by the space width.
    pub fn advance(&self, code: u16, size: f32) -> f32 {
        let d = match self.metrics.get(&code) {
            Some(m) => m.d,
            None => self.face.space_width,
        };
        self.scale(size).px(d)
    }

    /// Bounding box of the ink of `text` at `size`
    ///
    /// The pen starts at the origin on the top of the line. Whitespace and
    /// characters missing from the font only advance the pen. If no glyph
    /// draws anything (including for empty text) the result is `Rect::ZERO`.
    pub fn measure(&self, text: &str, size: f32) -> Rect {
        self.measure_units(text.encode_utf16(), size)
    }

    /// As [`Font::measure`], over UTF-16 code units
    pub fn measure_utf16(&self, text: &[u16], size: f32) -> Rect {
        self.measure_units(text.iter().copied(), size)
    }

    fn measure_units(&self, units: impl Iterator<Item = u16>, size: f32) -> Rect {
        let mut pen = 0.0;
        let mut ink: Option<Rect> = None;
        for code in units {
            match self.metrics.get(&code) {
                Some(m) => {
                    if m.has_ink() {
                        let r = m.ink_bounds().offset(Vec2(pen, 0.0));
                        ink = Some(ink.map_or(r, |ink| ink.union(r)));
                    }
                    pen += m.d;
                }
                None => pen += self.face.space_width,
            }
        }
        ink.map(|r| self.scale(size).rect(r)).unwrap_or(Rect::ZERO)
    }

    /// Width of `text` at `size`
    ///
    /// This is the sum of advances. If `precise`, the last character counts
    /// by the right edge of its ink instead of its advance, which excludes
    /// trailing side bearing.
    pub fn measure_width(&self, text: &str, size: f32, precise: bool) -> f32 {
        self.measure_width_units(text.encode_utf16(), size, precise)
    }

    /// As [`Font::measure_width`], over UTF-16 code units
    pub fn measure_width_utf16(&self, text: &[u16], size: f32, precise: bool) -> f32 {
        self.measure_width_units(text.iter().copied(), size, precise)
    }

    fn measure_width_units(&self, units: impl Iterator<Item = u16>, size: f32, precise: bool) -> f32 {
        let mut pen = 0.0;
        let mut adjust = 0.0;
        for code in units {
            match self.metrics.get(&code) {
                Some(m) => {
                    pen += m.d;
                    adjust = if precise && m.has_ink() {
                        m.dx + m.w - m.d
                    } else {
                        0.0
                    };
                }
                None => {
                    pen += self.face.space_width;
                    adjust = 0.0;
                }
            }
        }
        self.scale(size).px(pen + adjust)
    }

    /// Atlas image, if loaded
    #[inline]
    pub fn atlas(&self) -> Option<&DynamicImage> {
        self.atlas.as_ref()
    }

    /// Atlas dimensions in pixels, if loaded
    #[inline]
    pub fn atlas_size(&self) -> Option<(u32, u32)> {
        self.atlas.as_ref().map(|a| a.dimensions())
    }

    /// Replace the atlas image
    ///
    /// Any existing texture is dropped since it no longer matches.
    pub fn set_atlas(&mut self, atlas: DynamicImage) {
        self.texture = None;
        self.atlas = Some(atlas);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn glyph(x: f32, w: f32, h: f32, dx: f32, dy: f32, d: f32) -> GlyphMetrics {
        GlyphMetrics {
            x,
            y: 0.0,
            w,
            h,
            dx,
            dy,
            d,
        }
    }

    fn font() -> Font {
        let mut metrics = MetricsMap::new();
        metrics.insert(u16::from(b' '), glyph(0.0, 0.0, 0.0, 0.0, 0.0, 4.0));
        metrics.insert(u16::from(b'A'), glyph(0.0, 8.0, 10.0, 1.0, 2.0, 10.0));
        metrics.insert(u16::from(b'j'), glyph(8.0, 4.0, 14.0, -1.0, 4.0, 5.0));
        let face = FaceMetrics {
            size: 16.0,
            leading: 20.0,
            ascent: 12.0,
            descent: 8.0,
            space_width: 4.0,
        };
        Font::from_parts("Test", face, metrics).unwrap()
    }

    #[test]
    fn empty_font() {
        let font = Font::new();
        assert!(font.is_empty());
        assert_eq!(font.size(), DEFAULT_SIZE);
        assert_eq!(font.measure("abc", 24.0), Rect::ZERO);
        assert_eq!(font.measure_width("abc", 24.0, true), 0.0);
    }

    #[test]
    fn rejects_bad_size() {
        let face = FaceMetrics::default();
        assert!(matches!(
            Font::from_parts("x", face, MetricsMap::new()),
            Err(FontError::InvalidSize(_))
        ));
    }

    #[test]
    fn face_metrics_scale() {
        let font = font();
        assert_eq!(font.ascent(16.0), 12.0);
        assert_eq!(font.ascent(32.0), 24.0);
        assert_eq!(font.descent(8.0), 4.0);
        assert_eq!(font.leading(32.0), 40.0);
        assert_eq!(font.space_width(48.0), 12.0);
    }

    #[test]
    fn contains_matches_keys() {
        let font = font();
        for code in 0..=u16::MAX {
            assert_eq!(font.contains(code), font.glyph(code).is_some());
        }
        assert_eq!(font.glyphs().map(|(c, _)| c).collect::<Vec<_>>(), vec![32, 65, 106]);
    }

    #[test]
    fn bounds_and_advance() {
        let font = font();
        let a = u16::from(b'A');
        assert_eq!(font.bounds(a, 16.0), Rect::new(1.0, 2.0, 9.0, 12.0));
        assert_eq!(font.bounds(a, 32.0), Rect::new(2.0, 4.0, 18.0, 24.0));
        assert_eq!(font.bounds(u16::from(b'?'), 32.0), Rect::ZERO);
        assert_eq!(font.advance(a, 8.0), 5.0);
        // missing characters advance as space
        assert_eq!(font.advance(u16::from(b'?'), 32.0), 8.0);
    }

    #[test]
    fn tex_coords_need_atlas() {
        let mut font = font();
        let j = u16::from(b'j');
        assert_eq!(font.tex_coords(j), Rect::ZERO);
        font.set_atlas(DynamicImage::new_luma8(16, 28));
        assert_eq!(font.tex_coords(j), Rect::new(0.5, 0.0, 0.75, 0.5));
        assert_eq!(font.tex_coords(u16::from(b'?')), Rect::ZERO);
    }

    #[test]
    fn measure_text() {
        let font = font();
        assert_eq!(font.measure("", 16.0), Rect::ZERO);
        assert_eq!(font.measure("   ", 16.0), Rect::ZERO);
        assert_eq!(font.measure("A", 16.0), Rect::new(1.0, 2.0, 9.0, 12.0));
        // "Aj": j is at pen 10 with ink from 9 to 13, 4 to 18
        assert_eq!(font.measure("Aj", 16.0), Rect::new(1.0, 2.0, 13.0, 18.0));
        // unknown char advances like a space
        assert_eq!(font.measure("?A", 16.0), Rect::new(5.0, 2.0, 13.0, 12.0));
        assert_eq!(font.measure("Aj", 32.0), font.measure("Aj", 16.0).scale(2.0));
    }

    #[test]
    fn measure_utf16_matches_str() {
        let font = font();
        let units: Vec<u16> = "A jA".encode_utf16().collect();
        assert_eq!(font.measure_utf16(&units, 20.0), font.measure("A jA", 20.0));
        assert_eq!(
            font.measure_width_utf16(&units, 20.0, true),
            font.measure_width("A jA", 20.0, true)
        );
    }

    #[test]
    fn measure_width_precise() {
        let font = font();
        assert_eq!(font.measure_width("", 16.0, true), 0.0);
        assert_eq!(font.measure_width("AA", 16.0, false), 20.0);
        // last 'A' counts by ink right edge: 10 + 1 + 8
        assert_eq!(font.measure_width("AA", 16.0, true), 19.0);
        // trailing space keeps its advance
        assert_eq!(font.measure_width("A ", 16.0, true), 14.0);
        assert_eq!(font.measure_width("A?", 32.0, true), 28.0);
    }
}
