// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Load configuration

use image::DynamicImage;

/// Pixel format in which the atlas image is stored after decoding
///
/// Signed-distance-field atlases carry a single channel, so the default is
/// [`AtlasFormat::Luma`]. Coloured bitmap fonts should use
/// [`AtlasFormat::Rgba`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AtlasFormat {
    /// 8-bit single channel
    #[default]
    Luma,
    /// 8-bit luminance plus alpha
    LumaAlpha,
    /// 8-bit RGBA
    Rgba,
}

impl AtlasFormat {
    /// Convert a decoded image to this format
    pub fn convert(self, image: DynamicImage) -> DynamicImage {
        match (self, image) {
            (AtlasFormat::Luma, image @ DynamicImage::ImageLuma8(_)) => image,
            (AtlasFormat::Luma, image) => DynamicImage::ImageLuma8(image.to_luma8()),
            (AtlasFormat::LumaAlpha, image @ DynamicImage::ImageLumaA8(_)) => image,
            (AtlasFormat::LumaAlpha, image) => DynamicImage::ImageLumaA8(image.to_luma_alpha8()),
            (AtlasFormat::Rgba, image @ DynamicImage::ImageRgba8(_)) => image,
            (AtlasFormat::Rgba, image) => DynamicImage::ImageRgba8(image.to_rgba8()),
        }
    }

    /// Bytes per pixel
    pub fn channels(self) -> u8 {
        match self {
            AtlasFormat::Luma => 1,
            AtlasFormat::LumaAlpha => 2,
            AtlasFormat::Rgba => 4,
        }
    }
}

/// Font loading configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    pub(crate) atlas_format: AtlasFormat,
    pub(crate) space_fallback: f32,
}

impl Config {
    /// Construct configuration
    ///
    /// The atlas image is converted to `atlas_format` after decoding.
    ///
    /// If a metrics source does not define a glyph for U+0020 (space), the
    /// space width is taken as `space_fallback × size` where `size` is the
    /// reference size of the font. The default is `0.25`.
    pub fn new(atlas_format: AtlasFormat, space_fallback: f32) -> Self {
        Config {
            atlas_format,
            space_fallback,
        }
    }

    /// Pixel format of loaded atlases
    pub fn atlas_format(&self) -> AtlasFormat {
        self.atlas_format
    }

    /// Space width (relative to the reference size) used when no space glyph exists
    pub fn space_fallback(&self) -> f32 {
        self.space_fallback
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(AtlasFormat::Luma, 0.25)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use image::{GenericImageView, GrayImage, RgbaImage};

    #[test]
    fn convert_to_luma() {
        let rgba = DynamicImage::ImageRgba8(RgbaImage::new(4, 2));
        let luma = AtlasFormat::Luma.convert(rgba);
        assert!(matches!(luma, DynamicImage::ImageLuma8(_)));
        assert_eq!(luma.dimensions(), (4, 2));
    }

    #[test]
    fn convert_to_rgba() {
        let gray = DynamicImage::ImageLuma8(GrayImage::new(3, 3));
        let rgba = AtlasFormat::Rgba.convert(gray);
        assert!(matches!(rgba, DynamicImage::ImageRgba8(_)));
        assert_eq!(AtlasFormat::Rgba.channels(), 4);
    }
}
