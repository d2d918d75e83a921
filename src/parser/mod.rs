// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Font file formats
//!
//! Fonts are loaded either from a pair of files, an atlas image plus
//! [`sdfont`] text metrics, or from a single [`binary`] file. Both are
//! usually accessed through [`crate::Font`].

pub mod binary;
pub mod sdfont;
