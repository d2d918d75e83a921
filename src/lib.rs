// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Signed-distance-field font atlases
//!
//! Loads a glyph atlas together with its per-character metrics and answers
//! layout queries at any size:
//!
//! ```
//! use sdf_font::{Font, Rect};
//!
//! let png = std::io::Cursor::new({
//!     let mut png = Vec::new();
//!     image::DynamicImage::new_luma8(32, 32)
//!         .write_to(&mut std::io::Cursor::new(&mut png), image::ImageOutputFormat::Png)
//!         .unwrap();
//!     png
//! });
//! let txt = "info face=\"Demo\" size=16
//! common lineHeight=20 base=15 scaleW=32 scaleH=32
//! char id=32 x=0 y=0 width=0 height=0 xoffset=0 yoffset=0 xadvance=4
//! char id=65 x=0 y=0 width=10 height=12 xoffset=1 yoffset=3 xadvance=11
//! ";
//!
//! let font = Font::create(png, txt.as_bytes()).unwrap();
//! assert!(font.contains('A' as u16));
//! assert_eq!(font.advance('A' as u16, 32.0), 22.0);
//! assert_eq!(font.measure("A", 16.0), Rect::new(1.0, 3.0, 11.0, 15.0));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod conv;

mod config;
pub use config::{AtlasFormat, Config};

mod data;
pub use data::*;

pub mod fonts;
pub use fonts::{Font, FontError, DEFAULT_SIZE};

mod layout;
pub use layout::GlyphQuad;

pub mod parser;
pub mod texture;
