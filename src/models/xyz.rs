//! Model a color in the CIE-XYZ color space.

use std::fmt;

use crate::{
    color::{Channels, Component, Components, HasSpace, Space},
    error::{InvalidColorValue, Validator},
};

/// The D65 reference white, scaled so that Y is 100.
#[derive(Clone, Debug)]
pub struct D65;

impl D65 {
    /// The tristimulus values of the reference white.
    pub const WHITE_POINT: Components = Components(95.047, 100.0, 108.883);
}

swatch_macros::gen_model! {
    /// A color in the CIE-XYZ color space with a D65 white point, where Y of
    /// the reference white is 100.
    pub struct Xyz {
        x: Component,
        y: Component,
        z: Component,
    }
}

impl HasSpace for Xyz {
    const SPACE: Space = Space::Xyz;
}

fn is_tristimulus(value: Component) -> bool {
    value.is_finite() && value >= 0.0
}

impl Xyz {
    /// Create a new color, failing if any value is negative or not finite.
    pub fn new(
        x: impl Into<Component>,
        y: impl Into<Component>,
        z: impl Into<Component>,
    ) -> Result<Self, InvalidColorValue> {
        let (x, y, z) = (x.into(), y.into(), z.into());

        Validator::new::<Self>()
            .check_that(Channels::C0, is_tristimulus(x))
            .check_that(Channels::C1, is_tristimulus(y))
            .check_that(Channels::C2, is_tristimulus(z))
            .finish()?;

        Ok(Self::new_unchecked(x, y, z))
    }

    /// Return the three values as generic components.
    pub fn to_components(&self) -> Components {
        Components(self.x, self.y, self.z)
    }
}

impl fmt::Display for Xyz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "xyz({},{},{})", self.x, self.y, self.z)
    }
}
