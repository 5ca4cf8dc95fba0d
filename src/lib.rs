//! swatch provides immutable color values in the RGB, RGBA, HSL, HSLA, CMYK,
//! hexadecimal, CIE-XYZ and CIE-Lab notations, with parsing and serialization
//! of the `hsla()` notation and conversions from HSLA to every other model.
//!
//! ```rust
//! use swatch::Hsla;
//! let hsla = Hsla::from_string("hsla(55, 55%, 67%, 0.5)")?;
//! assert_eq!(hsla.to_rgb().to_string(), "rgb(217,209,125)");
//! assert_eq!(hsla.to_hex().to_string(), "#d9d17d80");
//! # Ok::<(), swatch::InvalidColorValue>(())
//! ```

#![deny(missing_docs)]

mod color;
pub mod convert;
mod error;
mod math;
mod models;
mod parse;


pub use color::{Channels, Component, Components, HasSpace, Space};
pub use error::InvalidColorValue;
pub use models::{CIELab, Cmyk, Hex, Hsl, Hsla, Rgb, Rgba, Xyz, D65};
