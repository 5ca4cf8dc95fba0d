//! Model a color in the CIE-Lab color space.

use std::fmt;

use crate::{
    color::{Channels, Component, HasSpace, Space},
    error::{InvalidColorValue, Validator},
};

swatch_macros::gen_model! {
    /// A color in the CIE-Lab color space relative to the D65 white point.
    /// Lightness is within `[0, 100]`, `a` and `b` within `[-128, 127]`.
    pub struct CIELab {
        l: Component,
        a: Component,
        b: Component,
    }
}

impl HasSpace for CIELab {
    const SPACE: Space = Space::CIELab;
}

impl CIELab {
    /// Create a new color, failing if any channel is outside its domain.
    pub fn new(
        l: impl Into<Component>,
        a: impl Into<Component>,
        b: impl Into<Component>,
    ) -> Result<Self, InvalidColorValue> {
        let (l, a, b) = (l.into(), a.into(), b.into());

        Validator::new::<Self>()
            .check(Channels::C0, l, 0.0..=100.0)
            .check(Channels::C1, a, -128.0..=127.0)
            .check(Channels::C2, b, -128.0..=127.0)
            .finish()?;

        Ok(Self::new_unchecked(l, a, b))
    }
}

impl fmt::Display for CIELab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CIELab({},{},{})", self.l, self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_channels() {
        assert!(CIELab::new(100, -128, 127).is_ok());
        assert_eq!(
            CIELab::new(100.5, 0, 130).unwrap_err(),
            InvalidColorValue::OutOfRange {
                space: Space::CIELab,
                channels: Channels::C0 | Channels::C2,
            }
        );
    }

    #[test]
    fn display() {
        let lab = CIELab::new(30.2, -3.07, 10.98).unwrap();
        assert_eq!(lab.to_string(), "CIELab(30.2,-3.07,10.98)");
    }
}
