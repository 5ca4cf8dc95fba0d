//! Types shared by every color model: the numeric [`Component`], a triple of
//! [`Components`], the [`Space`] a model belongs to and the [`Channels`] bit
//! set used to report invalid channels.

use std::fmt;

use bitflags::bitflags;

/// A 64-bit floating point value that all channels are stored as.
pub type Component = f64;

/// Represent the three components that describe a color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

bitflags! {
    /// Positions of the channels of a color model. Used to report which
    /// channels failed validation.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Channels : u8 {
        /// The first channel (red, hue, cyan, x or l).
        const C0 = 1 << 0;
        /// The second channel (green, saturation, magenta, y or a).
        const C1 = 1 << 1;
        /// The third channel (blue, lightness, yellow, z or b).
        const C2 = 1 << 2;
        /// The fourth channel (alpha or key).
        const C3 = 1 << 3;
    }
}

/// The color models supported by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Space {
    /// 8-bit red, green and blue.
    Rgb = 0,
    /// 8-bit red, green and blue with an alpha channel.
    Rgba = 1,
    /// Hue, saturation and lightness.
    Hsl = 2,
    /// Hue, saturation and lightness with an alpha channel.
    Hsla = 3,
    /// Cyan, magenta, yellow and key in percent.
    Cmyk = 4,
    /// Two-digit hexadecimal red, green, blue and alpha.
    Hex = 5,
    /// CIE-XYZ tristimulus values with a D65 white point.
    Xyz = 6,
    /// CIE-Lab with a D65 white point.
    CIELab = 7,
}

impl Space {
    /// The name of the notation used when serializing the model.
    pub fn name(&self) -> &'static str {
        match self {
            Space::Rgb => "rgb",
            Space::Rgba => "rgba",
            Space::Hsl => "hsl",
            Space::Hsla => "hsla",
            Space::Cmyk => "cmyk",
            Space::Hex => "hex",
            Space::Xyz => "xyz",
            Space::CIELab => "CIELab",
        }
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Implemented by every model to tie it to its [`Space`].
pub trait HasSpace {
    /// The space the model belongs to.
    const SPACE: Space;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_applies_to_every_component() {
        let c = Components(0.5, 1.0, 1.5).map(|v| v * 2.0);
        assert_eq!(c, Components(1.0, 2.0, 3.0));
    }

    #[test]
    fn space_names() {
        assert_eq!(Space::Hsla.to_string(), "hsla");
        assert_eq!(Space::CIELab.to_string(), "CIELab");
    }

    #[test]
    fn channels_combine() {
        let channels = Channels::C0 | Channels::C3;
        assert!(channels.contains(Channels::C0));
        assert!(!channels.contains(Channels::C1));
        assert!(channels.contains(Channels::C3));
    }
}
