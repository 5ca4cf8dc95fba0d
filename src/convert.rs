//! Each notation is modeled with its own type. Conversions are implemented
//! pairwise on the models that need them, and the longer chains are composed
//! from those hops:
//!
//! ```text
//! Hsla -> Hsl -> Rgb -> Xyz -> CIELab
//!                 |
//!                 +--> Cmyk, Hex, Rgba
//! ```
//!
//! The numeric work is done by the free functions in this module, which
//! operate on normalized [`Components`]. Rounding to the precision of each
//! model happens only when a model is built from the result.
//!
//! ```rust
//! use swatch::Hsla;
//! let lab = Hsla::new(55, 15, 25, 0.4)?.to_cielab();
//! assert_eq!((lab.l(), lab.a(), lab.b()), (30.2, -3.07, 10.98));
//! # Ok::<(), swatch::InvalidColorValue>(())
//! ```

use crate::{
    color::{Component, Components},
    error::InvalidColorValue,
    math::{round_to, transform, transform_3x3},
    models::{CIELab, Cmyk, Hex, Hsl, Hsla, Rgb, Rgba, Xyz, D65},
};

/// Convert normalized HSL (hue, saturation and lightness all in `[0, 1]`) to
/// normalized RGB.
pub fn hsl_to_rgb(from: &Components) -> Components {
    let Components(hue, saturation, lightness) = *from;

    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let hue = hue * 6.0;
    let x = chroma * (1.0 - (hue % 2.0 - 1.0).abs());
    let m = lightness - chroma / 2.0;

    // A full turn lands back in the first sector.
    let (red, green, blue) = match hue.floor() as u8 % 6 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    Components(red + m, green + m, blue + m)
}

/// Remove the sRGB gamma encoding from a single normalized channel.
pub fn srgb_to_linear_light(value: Component) -> Component {
    if value <= 0.04045 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert normalized, gamma encoded sRGB to CIE-XYZ where Y of the reference
/// white is 100.
pub fn rgb_to_xyz(from: &Components) -> Components {
    #[rustfmt::skip]
    let to_xyz = transform_3x3(
        0.4124, 0.2126, 0.0193,
        0.3576, 0.7152, 0.1192,
        0.1805, 0.0722, 0.9505,
    );

    let linear = from.map(|v| srgb_to_linear_light(v) * 100.0);
    transform(&to_xyz, linear)
}

/// Convert CIE-XYZ to CIE-Lab using the D65 reference white.
pub fn xyz_to_lab(from: &Components) -> Components {
    const DELTA: Component = 6.0 / 29.0;

    let f = |t: Component| {
        if t > DELTA * DELTA * DELTA {
            t.cbrt()
        } else {
            t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
        }
    };

    let white = D65::WHITE_POINT;
    let fx = f(from.0 / white.0);
    let fy = f(from.1 / white.1);
    let fz = f(from.2 / white.2);

    Components(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
}

/// Convert normalized RGB to normalized cyan, magenta and yellow, returned
/// along with the key.
pub fn rgb_to_cmyk(from: &Components) -> (Components, Component) {
    let complement = from.map(|v| 1.0 - v);
    let key = complement.0.min(complement.1).min(complement.2);

    if key >= 1.0 {
        return (Components(0.0, 0.0, 0.0), 1.0);
    }

    (complement.map(|v| (v - key) / (1.0 - key)), key)
}

/// Scale a normalized channel to 8 bits, rounding halves away from zero.
fn to_8_bit(value: Component) -> u8 {
    (value * 255.0).round() as u8
}

fn to_hex_channel(value: u8) -> String {
    format!("{:02x}", value)
}

impl Hsla {
    /// Return a copy of this color.
    pub fn to_hsla(&self) -> Hsla {
        self.clone()
    }

    /// Return a copy of this color with only the alpha channel replaced.
    pub fn to_hsla_with_alpha(
        &self,
        alpha: impl Into<Component>,
    ) -> Result<Hsla, InvalidColorValue> {
        Hsla::new(self.hue(), self.saturation(), self.lightness(), alpha)
    }

    /// Drop the alpha channel.
    pub fn to_hsl(&self) -> Hsl {
        Hsl::new_unchecked(self.hue(), self.saturation(), self.lightness())
    }

    /// Convert to 8-bit sRGB, dropping the alpha channel.
    pub fn to_rgb(&self) -> Rgb {
        self.to_hsl().to_rgb()
    }

    /// Convert to 8-bit sRGB, keeping the alpha channel.
    pub fn to_rgba(&self) -> Rgba {
        let rgb = self.to_rgb();
        Rgba::new_unchecked(rgb.red(), rgb.green(), rgb.blue(), self.alpha())
    }

    /// Convert to 8-bit sRGB with the alpha channel replaced.
    pub fn to_rgba_with_alpha(
        &self,
        alpha: impl Into<Component>,
    ) -> Result<Rgba, InvalidColorValue> {
        self.to_rgb().to_rgba(alpha)
    }

    /// The red channel of [`Hsla::to_rgb`].
    pub fn red(&self) -> u8 {
        self.to_rgb().red()
    }

    /// The green channel of [`Hsla::to_rgb`].
    pub fn green(&self) -> u8 {
        self.to_rgb().green()
    }

    /// The blue channel of [`Hsla::to_rgb`].
    pub fn blue(&self) -> u8 {
        self.to_rgb().blue()
    }

    /// Convert to CMYK through sRGB. The alpha channel is dropped.
    pub fn to_cmyk(&self) -> Cmyk {
        self.to_rgb().to_cmyk()
    }

    /// Convert to hexadecimal channels through sRGB. Alpha is scaled to 8 bits.
    pub fn to_hex(&self) -> Hex {
        let rgb = self.to_rgb();
        Hex::new_unchecked(
            to_hex_channel(rgb.red()),
            to_hex_channel(rgb.green()),
            to_hex_channel(rgb.blue()),
            to_hex_channel(to_8_bit(self.alpha())),
        )
    }

    /// Convert to hexadecimal channels through sRGB, using `alpha` verbatim as
    /// the alpha channel.
    pub fn to_hex_with_alpha(&self, alpha: &str) -> Result<Hex, InvalidColorValue> {
        self.to_rgb().to_hex_with_alpha(alpha)
    }

    /// Convert to CIE-XYZ through sRGB. The alpha channel is dropped.
    pub fn to_xyz(&self) -> Xyz {
        self.to_rgb().to_xyz()
    }

    /// Convert to CIE-Lab through sRGB and CIE-XYZ. The alpha channel is
    /// dropped.
    pub fn to_cielab(&self) -> CIELab {
        let Components(l, a, b) = self.to_xyz().lab_components();
        log::trace!("{} -> CIELab({},{},{})", self, l, a, b);
        // Every sRGB color is within the Lab domain.
        CIELab::new_unchecked(l, a, b)
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to 8-bit sRGB.
    pub fn to_rgb(&self) -> Rgb {
        let normalized = Components(
            self.hue() / 360.0,
            self.saturation() / 100.0,
            self.lightness() / 100.0,
        );
        let Components(red, green, blue) = hsl_to_rgb(&normalized);
        Rgb::new(to_8_bit(red), to_8_bit(green), to_8_bit(blue))
    }

    /// Add an alpha channel.
    pub fn to_hsla(&self, alpha: impl Into<Component>) -> Result<Hsla, InvalidColorValue> {
        Hsla::new(self.hue(), self.saturation(), self.lightness(), alpha)
    }
}

impl Rgb {
    fn normalized(&self) -> Components {
        Components(
            Component::from(self.red()),
            Component::from(self.green()),
            Component::from(self.blue()),
        )
        .map(|v| v / 255.0)
    }

    /// Add an alpha channel.
    pub fn to_rgba(&self, alpha: impl Into<Component>) -> Result<Rgba, InvalidColorValue> {
        Rgba::new(self.red(), self.green(), self.blue(), alpha)
    }

    /// Convert to CMYK with every channel rounded to a whole percent.
    pub fn to_cmyk(&self) -> Cmyk {
        let (Components(cyan, magenta, yellow), key) = rgb_to_cmyk(&self.normalized());
        let percent = |v: Component| (v * 100.0).round();
        Cmyk::new_unchecked(percent(cyan), percent(magenta), percent(yellow), percent(key))
    }

    /// Convert to lowercase hexadecimal channels with an opaque alpha channel.
    pub fn to_hex(&self) -> Hex {
        Hex::new_unchecked(
            to_hex_channel(self.red()),
            to_hex_channel(self.green()),
            to_hex_channel(self.blue()),
            to_hex_channel(u8::MAX),
        )
    }

    /// Convert to lowercase hexadecimal channels, using `alpha` verbatim as
    /// the alpha channel.
    pub fn to_hex_with_alpha(&self, alpha: &str) -> Result<Hex, InvalidColorValue> {
        Hex::new(
            &to_hex_channel(self.red()),
            &to_hex_channel(self.green()),
            &to_hex_channel(self.blue()),
            alpha,
        )
    }

    /// Convert to CIE-XYZ, rounded to 4 decimal places.
    pub fn to_xyz(&self) -> Xyz {
        let Components(x, y, z) = rgb_to_xyz(&self.normalized()).map(|v| round_to(v, 4));
        // Gamma decoding and the matrix keep every channel non-negative.
        Xyz::new_unchecked(x, y, z)
    }
}

impl Rgba {
    /// Drop the alpha channel.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::new(self.red(), self.green(), self.blue())
    }
}

impl Cmyk {
    /// Convert to 8-bit sRGB.
    pub fn to_rgb(&self) -> Rgb {
        let key = 1.0 - self.key() / 100.0;
        let channel = |v: Component| to_8_bit((1.0 - v / 100.0) * key);
        Rgb::new(
            channel(self.cyan()),
            channel(self.magenta()),
            channel(self.yellow()),
        )
    }

    /// The red channel of [`Cmyk::to_rgb`].
    pub fn red(&self) -> u8 {
        self.to_rgb().red()
    }

    /// The green channel of [`Cmyk::to_rgb`].
    pub fn green(&self) -> u8 {
        self.to_rgb().green()
    }

    /// The blue channel of [`Cmyk::to_rgb`].
    pub fn blue(&self) -> u8 {
        self.to_rgb().blue()
    }
}

impl Xyz {
    fn lab_components(&self) -> Components {
        xyz_to_lab(&self.to_components()).map(|v| round_to(v, 2))
    }

    /// Convert to CIE-Lab, rounded to 2 decimal places. Fails when the values
    /// are outside the gamut CIE-Lab can represent.
    pub fn to_cielab(&self) -> Result<CIELab, InvalidColorValue> {
        let Components(l, a, b) = self.lab_components();
        CIELab::new(l, a, b)
    }
}
