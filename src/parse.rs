//! Parsing of the `hsla(h,s%,l%,a)` notation.

use std::sync::LazyLock;

use regex::Regex;

use crate::{color::Component, error::InvalidColorValue, models::Hsla};

/// Matches a full `hsla()` notation. Whitespace is allowed around every
/// number and the percent signs on saturation and lightness are optional.
static HSLA: LazyLock<Regex> = LazyLock::new(|| {
    const NUMBER: &str = r"([+-]?(?:\d+(?:\.\d*)?|\.\d+))";
    let pattern = format!(
        r"(?i)^hsla\(\s*{n}\s*,\s*{n}%?\s*,\s*{n}%?\s*,\s*{n}\s*\)$",
        n = NUMBER
    );
    Regex::new(&pattern).expect("valid regex")
});

/// Extract the hue, saturation, lightness and alpha from a `hsla()` string,
/// in that order. The numbers are not validated against their domains.
pub fn parse_hsla(input: &str) -> Result<[Component; 4], InvalidColorValue> {
    let caps = HSLA
        .captures(input.trim())
        .ok_or_else(|| InvalidColorValue::malformed::<Hsla>(input))?;

    let mut channels = [0.0; 4];
    for (channel, group) in channels.iter_mut().zip(1..=4) {
        *channel = caps[group]
            .parse()
            .map_err(|_| InvalidColorValue::malformed::<Hsla>(input))?;
    }

    Ok(channels)
}
