//! Model a color with the HSL notation.

use std::fmt;

use crate::{
    color::{Channels, Component, HasSpace, Space},
    error::{InvalidColorValue, Validator},
};

swatch_macros::gen_model! {
    /// A color specified with hue, saturation and lightness.
    pub struct Hsl {
        hue: Component,
        saturation: Component,
        lightness: Component,
    }
}

impl HasSpace for Hsl {
    const SPACE: Space = Space::Hsl;
}

impl Hsl {
    /// Create a new color. Hue must be within `[0, 360]`, saturation and
    /// lightness within `[0, 100]`.
    pub fn new(
        hue: impl Into<Component>,
        saturation: impl Into<Component>,
        lightness: impl Into<Component>,
    ) -> Result<Self, InvalidColorValue> {
        let (hue, saturation, lightness) = (hue.into(), saturation.into(), lightness.into());

        Validator::new::<Self>()
            .check(Channels::C0, hue, 0.0..=360.0)
            .check(Channels::C1, saturation, 0.0..=100.0)
            .check(Channels::C2, lightness, 0.0..=100.0)
            .finish()?;

        Ok(Self::new_unchecked(hue, saturation, lightness))
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({},{}%,{}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_channels() {
        assert!(Hsl::new(360, 100, 0).is_ok());
        assert_eq!(
            Hsl::new(400, 50, 101).unwrap_err(),
            InvalidColorValue::OutOfRange {
                space: Space::Hsl,
                channels: Channels::C0 | Channels::C2,
            }
        );
    }

    #[test]
    fn display() {
        assert_eq!(Hsl::new(55, 55.5, 67).unwrap().to_string(), "hsl(55,55.5%,67%)");
    }
}
