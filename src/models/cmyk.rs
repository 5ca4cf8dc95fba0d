//! Model a color with the CMYK notation.

use std::fmt;

use crate::{
    color::{Channels, Component, HasSpace, Space},
    error::{InvalidColorValue, Validator},
};

swatch_macros::gen_model! {
    /// A color specified with cyan, magenta, yellow and key (black) channels,
    /// each a percentage within `[0, 100]`.
    pub struct Cmyk {
        cyan: Component,
        magenta: Component,
        yellow: Component,
        key: Component,
    }
}

impl HasSpace for Cmyk {
    const SPACE: Space = Space::Cmyk;
}

impl Cmyk {
    /// Create a new color, failing if any channel is outside `[0, 100]`.
    pub fn new(
        cyan: impl Into<Component>,
        magenta: impl Into<Component>,
        yellow: impl Into<Component>,
        key: impl Into<Component>,
    ) -> Result<Self, InvalidColorValue> {
        let (cyan, magenta, yellow, key) = (cyan.into(), magenta.into(), yellow.into(), key.into());

        Validator::new::<Self>()
            .check(Channels::C0, cyan, 0.0..=100.0)
            .check(Channels::C1, magenta, 0.0..=100.0)
            .check(Channels::C2, yellow, 0.0..=100.0)
            .check(Channels::C3, key, 0.0..=100.0)
            .finish()?;

        Ok(Self::new_unchecked(cyan, magenta, yellow, key))
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cmyk({}%,{}%,{}%,{}%)",
            self.cyan, self.magenta, self.yellow, self.key
        )
    }
}
