//! Model a color in the sRGB color space with 8-bit channels.

use std::fmt;

use crate::{
    color::{Channels, Component, HasSpace, Space},
    error::{InvalidColorValue, Validator},
};

swatch_macros::gen_model! {
    /// A color specified with 8-bit red, green and blue channels.
    #[derive(Eq, Hash)]
    pub struct Rgb {
        red: u8,
        green: u8,
        blue: u8,
    }
}

impl HasSpace for Rgb {
    const SPACE: Space = Space::Rgb;
}

impl Rgb {
    /// Create a new color. Every `u8` is a valid channel.
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self::new_unchecked(red, green, blue)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.red, self.green, self.blue)
    }
}

swatch_macros::gen_model! {
    /// A color specified with 8-bit red, green and blue channels and an alpha
    /// channel within `[0, 1]`.
    pub struct Rgba {
        red: u8,
        green: u8,
        blue: u8,
        alpha: Component,
    }
}

impl HasSpace for Rgba {
    const SPACE: Space = Space::Rgba;
}

impl Rgba {
    /// Create a new color, failing if alpha is outside `[0, 1]`.
    pub fn new(
        red: u8,
        green: u8,
        blue: u8,
        alpha: impl Into<Component>,
    ) -> Result<Self, InvalidColorValue> {
        let alpha = alpha.into();

        Validator::new::<Self>()
            .check(Channels::C3, alpha, 0.0..=1.0)
            .finish()?;

        Ok(Self::new_unchecked(red, green, blue, alpha))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({},{},{},{})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_rgb_colors() {
        let rgb = Rgb::new(217, 209, 125);
        assert_eq!(rgb.red(), 217);
        assert_eq!(rgb.green(), 209);
        assert_eq!(rgb.blue(), 125);
        assert_eq!(rgb.to_string(), "rgb(217,209,125)");
    }

    #[test]
    fn rgba_validates_alpha() {
        let rgba = Rgba::new(1, 2, 3, 0.6).unwrap();
        assert_eq!(rgba.alpha(), 0.6);
        assert_eq!(rgba.to_string(), "rgba(1,2,3,0.6)");

        assert_eq!(
            Rgba::new(1, 2, 3, 1.1).unwrap_err(),
            InvalidColorValue::OutOfRange {
                space: Space::Rgba,
                channels: Channels::C3,
            }
        );
    }
}
