// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Font loading and glyph metrics
//!
//! A [`Font`] pairs a glyph atlas image with a table of per-character
//! [`GlyphMetrics`].
//!
//! ### Font sizes
//!
//! An atlas is rendered once, at a fixed *reference size*: the number of
//! pixels per em with which the generator rastered its glyphs. Every metric
//! stored in the font (glyph offsets and advances, ascent, descent, leading
//! and space width) is measured in pixels at this size.
//!
//! Queries take a requested `size` in the same unit and scale linearly:
//!
//! ```none
//! value(size) = value(reference) × size / reference
//! ```
//!
//! This is exact for signed-distance-field atlases, which are designed to be
//! drawn at any scale. Plain bitmap atlases will blur or alias when drawn far
//! from their reference size, but their metrics scale the same way.
//!
//! Texture coordinates ([`Font::tex_coords`]) do not depend on size.

mod error;
mod font;
mod metrics;

pub use error::{FontError, SourceError, TargetError};
pub use font::{Font, DEFAULT_SIZE};
pub use metrics::{FaceMetrics, GlyphMetrics, MetricsMap};
