// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Atlas textures
//!
//! A [`Font`] may own a GPU texture created from its atlas image. This module
//! does not manage GPU resources beyond that: the texture is created by a
//! caller-supplied uploader and bound around draw calls.
//!
//! # Example
//!
//! ```
//! use sdf_font::Font;
//! use sdf_font::texture::AtlasTexture;
//!
//! struct Nop;
//! impl AtlasTexture for Nop {
//!     fn bind(&self, _unit: u32) {}
//!     fn unbind(&self, _unit: u32) {}
//! }
//!
//! let mut font = Font::new();
//! font.set_atlas(image::DynamicImage::new_luma8(64, 64));
//! font.upload_texture(|_atlas| Ok(Box::new(Nop))).unwrap();
//!
//! {
//!     let _binding = font.bind_scoped(0);
//!     // draw here ...
//! } // unbound here
//! ```

use crate::fonts::{Font, FontError};
use image::{DynamicImage, GenericImageView};

/// A texture holding a font atlas
pub trait AtlasTexture {
    /// Bind to texture `unit`
    fn bind(&self, unit: u32);

    /// Unbind from texture `unit`
    fn unbind(&self, unit: u32);

    /// Enable texturing and bind to unit 0
    ///
    /// Only meaningful for fixed-function pipelines; by default this just
    /// binds.
    fn enable_and_bind(&self) {
        self.bind(0);
    }
}

/// A scoped texture binding
///
/// Returned by [`Font::bind_scoped`]. The texture is unbound from the same
/// unit when this is dropped.
#[must_use = "the texture is unbound when the binding is dropped"]
pub struct Binding<'a> {
    texture: Option<&'a dyn AtlasTexture>,
    unit: u32,
}

impl<'a> Binding<'a> {
    /// Texture unit
    #[inline]
    pub fn unit(&self) -> u32 {
        self.unit
    }

    /// True if a texture was bound
    #[inline]
    pub fn is_bound(&self) -> bool {
        self.texture.is_some()
    }
}

impl<'a> Drop for Binding<'a> {
    fn drop(&mut self) {
        if let Some(texture) = self.texture {
            texture.unbind(self.unit);
        }
    }
}

impl Font {
    /// Set the atlas texture
    #[inline]
    pub fn set_texture(&mut self, texture: Box<dyn AtlasTexture>) {
        self.texture = Some(texture);
    }

    /// Remove and return the atlas texture
    #[inline]
    pub fn take_texture(&mut self) -> Option<Box<dyn AtlasTexture>> {
        self.texture.take()
    }

    /// True if a texture is set
    #[inline]
    pub fn has_texture(&self) -> bool {
        self.texture.is_some()
    }

    /// Access the atlas texture
    #[inline]
    pub fn texture(&self) -> Option<&dyn AtlasTexture> {
        self.texture.as_deref()
    }

    /// Create the atlas texture
    ///
    /// `upload` is called with the atlas image. Fails with
    /// [`FontError::NoAtlas`] if no atlas is loaded, in which case `upload` is
    /// not called.
    pub fn upload_texture<F>(&mut self, upload: F) -> Result<(), FontError>
    where
        F: FnOnce(&DynamicImage) -> Result<Box<dyn AtlasTexture>, FontError>,
    {
        let atlas = self.atlas.as_ref().ok_or(FontError::NoAtlas)?;
        let texture = upload(atlas)?;
        log::debug!(
            "Font::upload_texture: uploaded {}x{} atlas for \"{}\"",
            atlas.width(),
            atlas.height(),
            self.family
        );
        self.texture = Some(texture);
        Ok(())
    }

    /// Enable texturing and bind the atlas texture, if any
    #[inline]
    pub fn enable_and_bind(&self) {
        if let Some(texture) = self.texture() {
            texture.enable_and_bind();
        }
    }

    /// Bind the atlas texture to `unit`, if any
    #[inline]
    pub fn bind(&self, unit: u32) {
        if let Some(texture) = self.texture() {
            texture.bind(unit);
        }
    }

    /// Unbind the atlas texture from `unit`, if any
    #[inline]
    pub fn unbind(&self, unit: u32) {
        if let Some(texture) = self.texture() {
            texture.unbind(unit);
        }
    }

    /// Bind the atlas texture to `unit` until the returned guard is dropped
    ///
    /// With no texture this does nothing.
    pub fn bind_scoped(&self, unit: u32) -> Binding<'_> {
        let texture = self.texture();
        if let Some(texture) = texture {
            texture.bind(unit);
        }
        Binding { texture, unit }
    }
}

#[cfg(feature = "glow")]
pub use glow_texture::GlowTexture;

#[cfg(feature = "glow")]
mod glow_texture {
    use super::AtlasTexture;
    use crate::fonts::{Font, FontError};
    use easy_cast::Conv;
    use glow::HasContext;
    use image::{DynamicImage, GenericImageView};
    use std::rc::Rc;

    /// An OpenGL atlas texture
    ///
    /// The texture is deleted on drop; the context must still be current.
    pub struct GlowTexture {
        gl: Rc<glow::Context>,
        texture: glow::Texture,
    }

    impl GlowTexture {
        /// Upload `atlas` as a new `TEXTURE_2D`
        ///
        /// Luma atlases are uploaded as `R8`, luma-alpha as `RG8` and RGBA as
        /// `RGBA8`. Other pixel formats are rejected; load with a suitable
        /// [`crate::AtlasFormat`].
        pub fn upload(gl: Rc<glow::Context>, atlas: &DynamicImage) -> Result<Self, FontError> {
            let (internal, format, data) = match atlas {
                DynamicImage::ImageLuma8(img) => (glow::R8, glow::RED, img.as_raw()),
                DynamicImage::ImageLumaA8(img) => (glow::RG8, glow::RG, img.as_raw()),
                DynamicImage::ImageRgba8(img) => (glow::RGBA8, glow::RGBA, img.as_raw()),
                _ => return Err(FontError::Texture("unsupported atlas pixel format".into())),
            };
            let width = i32::conv(atlas.width());
            let height = i32::conv(atlas.height());

            let texture = unsafe {
                let texture = gl.create_texture().map_err(FontError::Texture)?;
                gl.bind_texture(glow::TEXTURE_2D, Some(texture));

                // Rows of R8 and RG8 data are not 4-byte aligned
                gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 1);
                gl.tex_image_2d(
                    glow::TEXTURE_2D,
                    0,
                    i32::conv(internal),
                    width,
                    height,
                    0,
                    format,
                    glow::UNSIGNED_BYTE,
                    Some(data.as_slice()),
                );
                gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 4);

                // Distance fields interpolate linearly
                gl.tex_parameter_i32(
                    glow::TEXTURE_2D,
                    glow::TEXTURE_MIN_FILTER,
                    i32::conv(glow::LINEAR),
                );
                gl.tex_parameter_i32(
                    glow::TEXTURE_2D,
                    glow::TEXTURE_MAG_FILTER,
                    i32::conv(glow::LINEAR),
                );
                gl.tex_parameter_i32(
                    glow::TEXTURE_2D,
                    glow::TEXTURE_WRAP_S,
                    i32::conv(glow::CLAMP_TO_EDGE),
                );
                gl.tex_parameter_i32(
                    glow::TEXTURE_2D,
                    glow::TEXTURE_WRAP_T,
                    i32::conv(glow::CLAMP_TO_EDGE),
                );

                gl.bind_texture(glow::TEXTURE_2D, None);
                texture
            };

            log::debug!("GlowTexture::upload: {width}x{height}, internal format {internal:#x}");
            Ok(GlowTexture { gl, texture })
        }

        /// The raw texture handle
        #[inline]
        pub fn raw(&self) -> glow::Texture {
            self.texture
        }
    }

    impl AtlasTexture for GlowTexture {
        fn bind(&self, unit: u32) {
            unsafe {
                self.gl.active_texture(glow::TEXTURE0 + unit);
                self.gl.bind_texture(glow::TEXTURE_2D, Some(self.texture));
            }
        }

        fn unbind(&self, unit: u32) {
            unsafe {
                self.gl.active_texture(glow::TEXTURE0 + unit);
                self.gl.bind_texture(glow::TEXTURE_2D, None);
            }
        }

        fn enable_and_bind(&self) {
            unsafe {
                // Compatibility profiles only; core profiles flag GL_INVALID_ENUM
                self.gl.enable(glow::TEXTURE_2D);
            }
            self.bind(0);
        }
    }

    impl Drop for GlowTexture {
        fn drop(&mut self) {
            unsafe {
                self.gl.delete_texture(self.texture);
            }
        }
    }

    impl Font {
        /// Create the atlas texture with OpenGL
        ///
        /// See [`GlowTexture::upload`].
        pub fn upload_glow(&mut self, gl: Rc<glow::Context>) -> Result<(), FontError> {
            self.upload_texture(|atlas| Ok(Box::new(GlowTexture::upload(gl, atlas)?)))
        }
    }
}
