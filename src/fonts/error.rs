// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Font errors

use thiserror::Error;

/// Cause of a failure to load a font
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("I/O error")]
    Io(#[from] std::io::Error),
    #[error("atlas image decode error")]
    Image(#[from] image::ImageError),
    /// Malformed text metrics
    ///
    /// `line` is 1-based.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    /// Structurally invalid data
    #[error("{0}")]
    Format(&'static str),
}

/// Cause of a failure to write a font
#[derive(Error, Debug)]
pub enum TargetError {
    #[error("I/O error")]
    Io(#[from] std::io::Error),
    #[error("atlas image encode error")]
    Image(#[from] image::ImageError),
    /// The font cannot be represented in the binary format
    #[error("{0}")]
    Format(&'static str),
}

/// Font error
#[derive(Error, Debug)]
pub enum FontError {
    /// Loading failed
    #[error("font error: could not load from the specified source")]
    InvalidSource(#[source] SourceError),
    /// Writing failed
    #[error("font error: could not write to the specified target")]
    InvalidTarget(#[source] TargetError),
    /// Reference size must be finite and positive
    #[error("font error: invalid reference size {0}")]
    InvalidSize(f32),
    /// The operation requires an atlas image but none is loaded
    #[error("font error: no atlas image")]
    NoAtlas,
    /// Texture creation failed
    #[error("font error: texture: {0}")]
    Texture(String),
}

impl From<SourceError> for FontError {
    fn from(err: SourceError) -> Self {
        FontError::InvalidSource(err)
    }
}

impl From<TargetError> for FontError {
    fn from(err: TargetError) -> Self {
        FontError::InvalidTarget(err)
    }
}
