//! Model a color with the HSL notation and an alpha channel.

use std::{fmt, str::FromStr};

use crate::{
    color::{Channels, Component, HasSpace, Space},
    error::{InvalidColorValue, Validator},
    parse::parse_hsla,
};

swatch_macros::gen_model! {
    /// A color specified with hue, saturation, lightness and alpha.
    ///
    /// Hue is in degrees within `[0, 360]`, saturation and lightness are
    /// percentages within `[0, 100]` and alpha is within `[0, 1]`. Values
    /// outside these domains are rejected, hue is never wrapped.
    ///
    /// ```rust
    /// use swatch::Hsla;
    /// let hsla: Hsla = "hsla(205, 35%, 17%, 0.78)".parse().unwrap();
    /// assert_eq!(hsla.to_string(), "hsla(205,35%,17%,0.78)");
    /// ```
    pub struct Hsla {
        hue: Component,
        saturation: Component,
        lightness: Component,
        alpha: Component,
    }
}

impl HasSpace for Hsla {
    const SPACE: Space = Space::Hsla;
}

impl Hsla {
    /// Create a new color, failing if any channel is outside its domain.
    pub fn new(
        hue: impl Into<Component>,
        saturation: impl Into<Component>,
        lightness: impl Into<Component>,
        alpha: impl Into<Component>,
    ) -> Result<Self, InvalidColorValue> {
        let (hue, saturation, lightness, alpha) =
            (hue.into(), saturation.into(), lightness.into(), alpha.into());

        Validator::new::<Self>()
            .check(Channels::C0, hue, 0.0..=360.0)
            .check(Channels::C1, saturation, 0.0..=100.0)
            .check(Channels::C2, lightness, 0.0..=100.0)
            .check(Channels::C3, alpha, 0.0..=1.0)
            .finish()?;

        Ok(Self::new_unchecked(hue, saturation, lightness, alpha))
    }

    /// Create a new, fully opaque color.
    pub fn opaque(
        hue: impl Into<Component>,
        saturation: impl Into<Component>,
        lightness: impl Into<Component>,
    ) -> Result<Self, InvalidColorValue> {
        Self::new(hue, saturation, lightness, 1.0)
    }

    /// Parse a color from the `hsla(h,s%,l%,a)` notation. Surrounding
    /// whitespace, whitespace around the numbers and missing percent signs are
    /// tolerated, anything else is rejected.
    pub fn from_string(value: &str) -> Result<Self, InvalidColorValue> {
        let [hue, saturation, lightness, alpha] = parse_hsla(value)?;
        Self::new(hue, saturation, lightness, alpha)
    }
}

impl FromStr for Hsla {
    type Err = InvalidColorValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl TryFrom<&str> for Hsla {
    type Error = InvalidColorValue;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_string(value)
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({},{}%,{}%,{})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn out_of_range(result: Result<Hsla, InvalidColorValue>) -> Channels {
        match result {
            Err(InvalidColorValue::OutOfRange { space, channels }) => {
                assert_eq!(space, Space::Hsla);
                channels
            }
            other => panic!("expected an out of range error, got {other:?}"),
        }
    }

    #[test]
    fn is_initializable() {
        let hsla = Hsla::new(55, 55, 67, 0.5).unwrap();
        assert_eq!(hsla.hue(), 55.0);
        assert_eq!(hsla.saturation(), 55.0);
        assert_eq!(hsla.lightness(), 67.0);
        assert_eq!(hsla.alpha(), 0.5);
    }

    #[test]
    fn opaque_defaults_alpha_to_one() {
        let hsla = Hsla::opaque(55, 55, 67).unwrap();
        assert_eq!(hsla.alpha(), 1.0);
        assert_eq!(hsla, Hsla::new(55, 55, 67, 1).unwrap());
    }

    #[test]
    fn domain_bounds_are_inclusive() {
        assert!(Hsla::new(0, 0, 0, 0).is_ok());
        assert!(Hsla::new(360, 100, 100, 1).is_ok());
    }

    #[test]
    fn rejects_out_of_range_hue() {
        assert_eq!(out_of_range(Hsla::opaque(-5, 55, 67)), Channels::C0);
        assert_eq!(out_of_range(Hsla::opaque(360.5, 55, 67)), Channels::C0);
    }

    #[test]
    fn rejects_out_of_range_saturation() {
        assert_eq!(out_of_range(Hsla::opaque(5, -1, 67)), Channels::C1);
        assert_eq!(out_of_range(Hsla::opaque(5, 108, 67)), Channels::C1);
    }

    #[test]
    fn rejects_out_of_range_lightness() {
        assert_eq!(out_of_range(Hsla::opaque(5, 55, -67)), Channels::C2);
        assert_eq!(out_of_range(Hsla::opaque(5, 55, 102)), Channels::C2);
    }

    #[test]
    fn rejects_out_of_range_alpha() {
        assert_eq!(out_of_range(Hsla::new(255, 55, 25, -1)), Channels::C3);
        assert_eq!(out_of_range(Hsla::new(255, 0.25, 55, 1.5)), Channels::C3);
    }

    #[test]
    fn reports_every_invalid_channel() {
        assert_eq!(
            out_of_range(Hsla::new(-5, -1, 67, 2)),
            Channels::C0 | Channels::C1 | Channels::C3
        );
    }

    #[test]
    fn rejects_nan() {
        assert_eq!(
            out_of_range(Hsla::new(Component::NAN, 10, 10, Component::NAN)),
            Channels::C0 | Channels::C3
        );
    }

    #[test]
    fn can_be_created_from_a_string() {
        let hsla = Hsla::from_string("hsla(205,35%,17%,0.78)").unwrap();
        assert_eq!(hsla.hue(), 205.0);
        assert_eq!(hsla.saturation(), 35.0);
        assert_eq!(hsla.lightness(), 17.0);
        assert_eq!(hsla.alpha(), 0.78);
    }

    #[test]
    fn can_be_created_from_a_string_without_percentages() {
        let hsla = Hsla::from_string("hsla(205,35,17,0.78)").unwrap();
        assert_eq!(hsla, Hsla::new(205, 35, 17, 0.78).unwrap());
    }

    #[test]
    fn can_be_created_from_a_string_with_spaces() {
        let hsla = Hsla::from_string("  hsla(  205  ,  35%  ,  17%  ,  0.89  )  ").unwrap();
        assert_eq!(hsla, Hsla::new(205, 35, 17, 0.89).unwrap());
    }

    #[test]
    fn cant_be_created_from_a_malformed_string() {
        assert!(matches!(
            Hsla::from_string("hsla(205,0.35,0.17,0.78"),
            Err(InvalidColorValue::Malformed { .. })
        ));
    }

    #[test]
    fn cant_be_created_from_a_string_with_text_around() {
        assert!(matches!(
            Hsla::from_string("abc hsla(205,0.35,0.17,0.78) abc"),
            Err(InvalidColorValue::Malformed { .. })
        ));
    }

    #[test]
    fn parsed_values_are_validated() {
        assert_eq!(
            out_of_range(Hsla::from_string("hsla(361,35%,17%,0.78)")),
            Channels::C0
        );
        assert_eq!(
            out_of_range(Hsla::from_string("hsla(205,35%,17%,1.5)")),
            Channels::C3
        );
    }

    #[test]
    fn from_str_and_try_from() {
        let parsed: Hsla = "hsla(10,20%,30%,0.4)".parse().unwrap();
        assert_eq!(parsed, Hsla::try_from("hsla(10,20,30,0.4)").unwrap());
        assert!("rgb(1,2,3)".parse::<Hsla>().is_err());
    }

    #[test]
    fn can_be_cast_to_a_string() {
        let hsla = Hsla::new(55, 15, 25, 0.4).unwrap();
        assert_eq!(hsla.to_string(), "hsla(55,15%,25%,0.4)");

        let hsla = Hsla::new(205.5, 35.25, 17, 1).unwrap();
        assert_eq!(hsla.to_string(), "hsla(205.5,35.25%,17%,1)");
    }

    #[test]
    fn string_round_trip() {
        for (h, s, l, a) in [
            (0.0, 0.0, 0.0, 0.0),
            (360.0, 100.0, 100.0, 1.0),
            (55.0, 15.0, 25.0, 0.4),
            (123.456, 78.9, 0.001, 0.333),
            (1.0 / 3.0, 200.0 / 3.0, 0.1 + 0.2, 0.78),
        ] {
            let hsla = Hsla::new(h, s, l, a).unwrap();
            assert_eq!(Hsla::from_string(&hsla.to_string()).unwrap(), hsla);
        }
    }
}
