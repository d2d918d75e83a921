// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! SDFont text metrics
//!
//! SDFont writes glyph metrics in the AngelCode BMFont text format: one record
//! per line, a tag followed by `key=value` pairs, e.g.
//!
//! ```none
//! info face="Open Sans" size=32 bold=0 italic=0
//! common lineHeight=44 base=35 scaleW=512 scaleH=512 pages=1
//! page id=0 file="OpenSans.png"
//! chars count=2
//! char id=32 x=0 y=0 width=0 height=0 xoffset=0 yoffset=35 xadvance=8 page=0 chnl=0
//! char id=65 x=2 y=2 width=22 height=26 xoffset=-1 yoffset=9 xadvance=20 page=0 chnl=0
//! ```
//!
//! Kerning records are ignored.

use crate::fonts::{FaceMetrics, GlyphMetrics, MetricsMap, SourceError};
use crate::Config;
use std::str::FromStr;

/// Result of parsing a metrics file
#[derive(Debug)]
pub(crate) struct SdFont {
    pub family: String,
    pub face: FaceMetrics,
    pub metrics: MetricsMap,
    /// Atlas dimensions declared by the `common` record
    pub scale: Option<(u32, u32)>,
}

/// A single `tag key=value ...` line
struct Record<'a> {
    line: usize,
    tag: &'a str,
    pairs: Vec<(&'a str, &'a str)>,
}

impl<'a> Record<'a> {
    fn split(line: usize, text: &'a str) -> Result<Option<Self>, SourceError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let (tag, mut rest) = match text.find(char::is_whitespace) {
            Some(i) => text.split_at(i),
            None => (text, ""),
        };

        let mut pairs = Vec::new();
        loop {
            rest = rest.trim_start();
            if rest.is_empty() {
                break;
            }

            let Some(eq) = rest.find('=') else {
                return Err(parse_err(line, format!("expected key=value, found `{rest}`")));
            };
            let key = &rest[..eq];
            if key.is_empty() || key.contains(char::is_whitespace) {
                return Err(parse_err(line, format!("malformed key `{key}`")));
            }
            rest = &rest[eq + 1..];

            let value;
            if let Some(quoted) = rest.strip_prefix('"') {
                let Some(end) = quoted.find('"') else {
                    return Err(parse_err(line, format!("unterminated quote in `{key}`")));
                };
                value = &quoted[..end];
                rest = &quoted[end + 1..];
            } else {
                let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
                value = &rest[..end];
                rest = &rest[end..];
            }
            pairs.push((key, value));
        }

        Ok(Some(Record { line, tag, pairs }))
    }

    fn get(&self, key: &str) -> Option<&'a str> {
        self.pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }

    fn parse<T: FromStr>(&self, key: &str) -> Result<Option<T>, SourceError> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => value.parse().map(Some).map_err(|_| {
                parse_err(self.line, format!("invalid value `{value}` for `{key}`"))
            }),
        }
    }

    fn require<T: FromStr>(&self, key: &str) -> Result<T, SourceError> {
        self.parse(key)?.ok_or_else(|| {
            parse_err(self.line, format!("`{}` record is missing `{key}`", self.tag))
        })
    }
}

fn parse_err(line: usize, message: String) -> SourceError {
    SourceError::Parse { line, message }
}

/// Parse SDFont / BMFont text metrics
pub(crate) fn parse(text: &str, config: &Config) -> Result<SdFont, SourceError> {
    let mut family = None;
    let mut size = None;
    let mut common = None;
    let mut scale = None;
    let mut metrics = MetricsMap::new();

    for (index, line) in text.lines().enumerate() {
        let Some(record) = Record::split(index + 1, line)? else {
            continue;
        };

        match record.tag {
            "info" => {
                family = Some(record.get("face").unwrap_or_default().to_string());
                // BMFont writes a negative size when matching character height
                size = Some(record.require::<f32>("size")?.abs());
            }
            "common" => {
                let leading: f32 = record.require("lineHeight")?;
                let base: f32 = record.require("base")?;
                common = Some((leading, base));
                let w = record.parse::<u32>("scaleW")?;
                let h = record.parse::<u32>("scaleH")?;
                if let (Some(w), Some(h)) = (w, h) {
                    scale = Some((w, h));
                }
            }
            "char" => {
                let id: u32 = record.require("id")?;
                let glyph = GlyphMetrics {
                    x: record.require("x")?,
                    y: record.require("y")?,
                    w: record.require("width")?,
                    h: record.require("height")?,
                    dx: record.require("xoffset")?,
                    dy: record.require("yoffset")?,
                    d: record.require("xadvance")?,
                };
                let Ok(code) = u16::try_from(id) else {
                    log::warn!("sdfont: line {}: skipping char id {id} outside BMP", record.line);
                    continue;
                };
                if metrics.insert(code, glyph).is_some() {
                    log::warn!("sdfont: line {}: duplicate char id {id}", record.line);
                }
            }
            "page" | "chars" | "kernings" | "kerning" => (),
            tag => log::debug!("sdfont: line {}: ignoring `{tag}` record", record.line),
        }
    }

    let family = family.ok_or(SourceError::Format("missing `info` record"))?;
    let size = size.ok_or(SourceError::Format("missing `info` record"))?;
    let (leading, ascent) = common.ok_or(SourceError::Format("missing `common` record"))?;

    let space_width = match metrics.get(&u16::from(b' ')) {
        Some(m) => m.d,
        None => config.space_fallback() * size,
    };

    let face = FaceMetrics {
        size,
        leading,
        ascent,
        descent: leading - ascent,
        space_width,
    };
    if !face.has_valid_size() {
        return Err(SourceError::Format("reference size must be positive"));
    }

    Ok(SdFont {
        family,
        face,
        metrics,
        scale,
    })
}
