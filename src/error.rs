//! The error returned when a color can not be constructed or parsed.

use std::ops::RangeInclusive;

use crate::color::{Channels, Component, HasSpace, Space};

/// Raised when a color value is out of its domain or a string does not hold a
/// valid color notation. Construction either fully succeeds or fails with this
/// error; partial colors are never returned.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum InvalidColorValue {
    /// One or more channels are outside the domain of the model.
    #[error("{space} channels out of range: {channels:?}")]
    OutOfRange {
        /// The model that rejected the values.
        space: Space,
        /// Every channel that was out of range.
        channels: Channels,
    },

    /// The input string does not match the notation of the model.
    #[error("malformed {space} string: {input:?}")]
    Malformed {
        /// The model whose notation was expected.
        space: Space,
        /// The rejected input.
        input: String,
    },
}

impl InvalidColorValue {
    pub(crate) fn malformed<M: HasSpace>(input: &str) -> Self {
        log::debug!("rejecting malformed {} string: {:?}", M::SPACE, input);
        Self::Malformed {
            space: M::SPACE,
            input: input.to_owned(),
        }
    }
}

/// Collects the channels of a model that fall outside their domain so that
/// all of them can be reported in one error.
pub(crate) struct Validator {
    space: Space,
    invalid: Channels,
}

impl Validator {
    pub fn new<M: HasSpace>() -> Self {
        Self {
            space: M::SPACE,
            invalid: Channels::empty(),
        }
    }

    /// Mark `channel` as invalid unless `value` is within `range`. NaN is
    /// never within range.
    pub fn check(
        self,
        channel: Channels,
        value: Component,
        range: RangeInclusive<Component>,
    ) -> Self {
        let valid = range.contains(&value);
        self.check_that(channel, valid)
    }

    /// Mark `channel` as invalid unless `valid` holds.
    pub fn check_that(mut self, channel: Channels, valid: bool) -> Self {
        if !valid {
            self.invalid |= channel;
        }
        self
    }

    pub fn finish(self) -> Result<(), InvalidColorValue> {
        if self.invalid.is_empty() {
            return Ok(());
        }

        log::trace!(
            "{} channels out of range: {:?}",
            self.space,
            self.invalid
        );

        Err(InvalidColorValue::OutOfRange {
            space: self.space,
            channels: self.invalid,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe;

    impl HasSpace for Probe {
        const SPACE: Space = Space::Hsla;
    }

    #[test]
    fn all_invalid_channels_are_reported() {
        let err = Validator::new::<Probe>()
            .check(Channels::C0, -1.0, 0.0..=360.0)
            .check(Channels::C1, 50.0, 0.0..=100.0)
            .check(Channels::C2, 101.0, 0.0..=100.0)
            .check(Channels::C3, Component::NAN, 0.0..=1.0)
            .finish()
            .unwrap_err();

        assert_eq!(
            err,
            InvalidColorValue::OutOfRange {
                space: Space::Hsla,
                channels: Channels::C0 | Channels::C2 | Channels::C3,
            }
        );
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(Validator::new::<Probe>()
            .check(Channels::C0, 0.0, 0.0..=360.0)
            .check(Channels::C0, 360.0, 0.0..=360.0)
            .finish()
            .is_ok());
    }

    #[test]
    fn malformed_keeps_the_input() {
        let err = InvalidColorValue::malformed::<Probe>("hsla(1,2,3");
        assert_eq!(err.to_string(), "malformed hsla string: \"hsla(1,2,3\"");
    }
}
