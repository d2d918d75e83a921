// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Binary font format
//!
//! A packed font holds metrics and atlas in a single stream. All integers and
//! floats are little-endian:
//!
//! ```none
//! magic         4 bytes   "SDFF"
//! version       u16       1
//! family        u16 length, then UTF-8 bytes
//! face          5 × f32   size, leading, ascent, descent, space_width
//! glyph_count   u32       at most 65536
//! glyphs        glyph_count × (u16 code, 7 × f32 x y w h dx dy d)
//! atlas_len     u32       0 if there is no atlas
//! atlas         atlas_len bytes of PNG
//! ```

use crate::conv::{to_u32, to_usize};
use crate::fonts::{FaceMetrics, Font, GlyphMetrics, MetricsMap, SourceError, TargetError};
use crate::Config;
use image::ImageOutputFormat;
use std::io::{self, Cursor, Read, Write};

/// File magic
pub const MAGIC: [u8; 4] = *b"SDFF";
/// Current format version
pub const VERSION: u16 = 1;

const MAX_GLYPHS: u32 = 1 << 16;

struct Reader<R> {
    inner: R,
}

impl<R: Read> Reader<R> {
    fn bytes<const N: usize>(&mut self) -> io::Result<[u8; N]> {
        let mut buf = [0; N];
        self.inner.read_exact(&mut buf)?;
        Ok(buf)
    }

    fn u16(&mut self) -> io::Result<u16> {
        self.bytes().map(u16::from_le_bytes)
    }

    fn u32(&mut self) -> io::Result<u32> {
        self.bytes().map(u32::from_le_bytes)
    }

    fn f32(&mut self) -> io::Result<f32> {
        self.bytes().map(f32::from_le_bytes)
    }

    /// Read exactly `len` bytes without trusting `len` for the allocation
    fn vec(&mut self, len: u32) -> Result<Vec<u8>, SourceError> {
        let mut buf = Vec::new();
        (&mut self.inner).take(len.into()).read_to_end(&mut buf)?;
        if buf.len() != to_usize(len) {
            return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
        }
        Ok(buf)
    }
}

/// Read a font
pub(crate) fn read(source: impl Read, config: &Config) -> Result<Font, SourceError> {
    let mut r = Reader { inner: source };

    if r.bytes::<4>()? != MAGIC {
        return Err(SourceError::Format("not a binary font (bad magic)"));
    }
    if r.u16()? != VERSION {
        return Err(SourceError::Format("unsupported binary font version"));
    }

    let len = r.u16()?;
    let family = String::from_utf8(r.vec(len.into())?)
        .map_err(|_| SourceError::Format("family name is not valid UTF-8"))?;

    let face = FaceMetrics {
        size: r.f32()?,
        leading: r.f32()?,
        ascent: r.f32()?,
        descent: r.f32()?,
        space_width: r.f32()?,
    };
    if !face.has_valid_size() {
        return Err(SourceError::Format("reference size must be positive"));
    }

    let count = r.u32()?;
    if count > MAX_GLYPHS {
        return Err(SourceError::Format("glyph count exceeds 65536"));
    }
    let mut metrics = MetricsMap::new();
    for _ in 0..count {
        let code = r.u16()?;
        let glyph = GlyphMetrics {
            x: r.f32()?,
            y: r.f32()?,
            w: r.f32()?,
            h: r.f32()?,
            dx: r.f32()?,
            dy: r.f32()?,
            d: r.f32()?,
        };
        if metrics.insert(code, glyph).is_some() {
            return Err(SourceError::Format("duplicate character code"));
        }
    }

    let atlas_len = r.u32()?;
    let atlas = if atlas_len == 0 {
        None
    } else {
        let png = r.vec(atlas_len)?;
        let image = image::load_from_memory_with_format(&png, image::ImageFormat::Png)?;
        Some(config.atlas_format().convert(image))
    };

    Ok(Font {
        family,
        face,
        atlas,
        texture: None,
        metrics,
    })
}

/// Write a font
pub(crate) fn write(font: &Font, mut target: impl Write) -> Result<(), TargetError> {
    let family = font.family().as_bytes();
    let family_len =
        u16::try_from(family.len()).map_err(|_| TargetError::Format("family name too long"))?;

    target.write_all(&MAGIC)?;
    target.write_all(&VERSION.to_le_bytes())?;
    target.write_all(&family_len.to_le_bytes())?;
    target.write_all(family)?;

    let face = font.face_metrics();
    for x in [
        face.size,
        face.leading,
        face.ascent,
        face.descent,
        face.space_width,
    ] {
        target.write_all(&x.to_le_bytes())?;
    }

    target.write_all(&to_u32(font.len()).to_le_bytes())?;
    for (code, m) in font.glyphs() {
        target.write_all(&code.to_le_bytes())?;
        for x in [m.x, m.y, m.w, m.h, m.dx, m.dy, m.d] {
            target.write_all(&x.to_le_bytes())?;
        }
    }

    match font.atlas() {
        None => target.write_all(&0u32.to_le_bytes())?,
        Some(atlas) => {
            let mut png = Cursor::new(Vec::new());
            atlas.write_to(&mut png, ImageOutputFormat::Png)?;
            let png = png.into_inner();
            let len = u32::try_from(png.len())
                .map_err(|_| TargetError::Format("atlas image too large"))?;
            target.write_all(&len.to_le_bytes())?;
            target.write_all(&png)?;
        }
    }

    target.flush()?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn header(family: &str, size: f32) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&MAGIC);
        out.extend_from_slice(&VERSION.to_le_bytes());
        out.extend_from_slice(&(family.len() as u16).to_le_bytes());
        out.extend_from_slice(family.as_bytes());
        for x in [size, 20.0f32, 15.0, 5.0, 4.0] {
            out.extend_from_slice(&x.to_le_bytes());
        }
        out
    }

    fn push_glyph(out: &mut Vec<u8>, code: u16, d: f32) {
        out.extend_from_slice(&code.to_le_bytes());
        for x in [0.0f32, 0.0, 2.0, 3.0, 0.0, 1.0, d] {
            out.extend_from_slice(&x.to_le_bytes());
        }
    }

    #[test]
    fn read_without_atlas() {
        let mut data = header("Mono", 16.0);
        data.extend_from_slice(&2u32.to_le_bytes());
        push_glyph(&mut data, 65, 9.0);
        push_glyph(&mut data, 66, 8.0);
        data.extend_from_slice(&0u32.to_le_bytes());

        let font = read(data.as_slice(), &Config::default()).unwrap();
        assert_eq!(font.family(), "Mono");
        assert_eq!(font.size(), 16.0);
        assert_eq!(font.face_metrics().descent, 5.0);
        assert_eq!(font.len(), 2);
        assert_eq!(font.glyph(66).map(|m| m.d), Some(8.0));
        assert!(font.atlas().is_none());
    }

    #[test]
    fn bad_magic() {
        let mut data = header("Mono", 16.0);
        data[0] = b'X';
        assert!(matches!(
            read(data.as_slice(), &Config::default()),
            Err(SourceError::Format(_))
        ));
    }

    #[test]
    fn truncated() {
        let mut data = header("Mono", 16.0);
        data.extend_from_slice(&2u32.to_le_bytes());
        push_glyph(&mut data, 65, 9.0);
        assert!(matches!(
            read(data.as_slice(), &Config::default()),
            Err(SourceError::Io(_))
        ));
    }

    #[test]
    fn truncated_atlas() {
        let mut data = header("Mono", 16.0);
        data.extend_from_slice(&0u32.to_le_bytes());
        data.extend_from_slice(&1000u32.to_le_bytes());
        data.extend_from_slice(&[0; 10]);
        assert!(matches!(
            read(data.as_slice(), &Config::default()),
            Err(SourceError::Io(_))
        ));
    }

    #[test]
    fn duplicate_code() {
        let mut data = header("Mono", 16.0);
        data.extend_from_slice(&2u32.to_le_bytes());
        push_glyph(&mut data, 65, 9.0);
        push_glyph(&mut data, 65, 8.0);
        data.extend_from_slice(&0u32.to_le_bytes());
        assert!(matches!(
            read(data.as_slice(), &Config::default()),
            Err(SourceError::Format(_))
        ));
    }

    #[test]
    fn invalid_size() {
        let mut data = header("Mono", 0.0);
        data.extend_from_slice(&0u32.to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());
        assert!(matches!(
            read(data.as_slice(), &Config::default()),
            Err(SourceError::Format(_))
        ));
    }

    #[test]
    fn layout_of_written_header() {
        let font = Font::new();
        let mut out = Vec::new();
        write(&font, &mut out).unwrap();
        // magic, version, empty family, 5 floats, zero glyphs, zero atlas
        assert_eq!(out.len(), 4 + 2 + 2 + 20 + 4 + 4);
        assert_eq!(&out[..4], b"SDFF");
        assert_eq!(&out[8..12], &12.0f32.to_le_bytes());
    }
}
