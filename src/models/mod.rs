//! Models are immutable value types that represent a color in one notation.
//! Each validates its channels on construction and converts to the other
//! models through the methods in [`crate::convert`].

mod cmyk;
mod hex;
mod hsl;
mod hsla;
mod lab;
mod rgb;
mod xyz;

pub use cmyk::Cmyk;
pub use hex::Hex;
pub use hsl::Hsl;
pub use hsla::Hsla;
pub use lab::CIELab;
pub use rgb::{Rgb, Rgba};
pub use xyz::{Xyz, D65};
