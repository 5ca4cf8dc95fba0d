//! Model a color as hexadecimal channel strings.

use std::fmt;

use crate::{
    color::{Channels, HasSpace, Space},
    error::{InvalidColorValue, Validator},
};

swatch_macros::gen_model! {
    /// A color specified with red, green, blue and alpha channels, each held
    /// as a two digit hexadecimal string. The case of the digits is kept as
    /// given.
    #[derive(Eq, Hash)]
    pub struct Hex {
        red: String,
        green: String,
        blue: String,
        alpha: String,
    }
}

impl HasSpace for Hex {
    const SPACE: Space = Space::Hex;
}

fn is_hex_channel(value: &str) -> bool {
    value.len() == 2 && value.bytes().all(|b| b.is_ascii_hexdigit())
}

impl Hex {
    /// Create a new color, failing if any channel is not exactly two
    /// hexadecimal digits.
    pub fn new(red: &str, green: &str, blue: &str, alpha: &str) -> Result<Self, InvalidColorValue> {
        Validator::new::<Self>()
            .check_that(Channels::C0, is_hex_channel(red))
            .check_that(Channels::C1, is_hex_channel(green))
            .check_that(Channels::C2, is_hex_channel(blue))
            .check_that(Channels::C3, is_hex_channel(alpha))
            .finish()?;

        Ok(Self::new_unchecked(
            red.to_owned(),
            green.to_owned(),
            blue.to_owned(),
            alpha.to_owned(),
        ))
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}{}{}{}", self.red, self.green, self.blue, self.alpha)
    }
}
