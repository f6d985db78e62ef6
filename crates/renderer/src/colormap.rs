//! Value-to-color mapping for heat maps.
//!
//! Values are expected in `[0, 1]`. The default map walks the hue circle
//! from blue (0.0) through green (0.5) to red (1.0); the gray map goes from
//! white (0.0) to black (1.0).

use std::fmt;

use heatman_common::ColorMode;

/// Color value in RGBA format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully transparent black, used for cells with no data.
    pub fn transparent() -> Self {
        Self { r: 0, g: 0, b: 0, a: 0 }
    }

    /// Fully transparent white, used for separator lines.
    pub fn separator() -> Self {
        Self {
            r: 0xff,
            g: 0xff,
            b: 0xff,
            a: 0,
        }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// A color as hue, saturation and brightness, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsb {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
}

impl Hsb {
    pub fn new(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self {
            hue,
            saturation,
            brightness,
        }
    }

    /// Heat map color for a value: hue runs from 240° at 0.0 down to 0° at 1.0.
    pub fn from_value(value: f64) -> Self {
        Self::new((1.0 - value) * 240.0 / 360.0, 1.0, 1.0)
    }

    /// Convert to 8-bit RGBA.
    ///
    /// Same arithmetic as `java.awt.Color.HSBtoRGB`: channels are rounded
    /// half-up and alpha is always opaque.
    pub fn to_rgba(&self) -> Color {
        let brightness = self.brightness;
        if self.saturation == 0.0 {
            let v = channel(brightness);
            return Color::new(v, v, v, 0xff);
        }

        let h = (self.hue - self.hue.floor()) * 6.0;
        let f = h - h.floor();
        let p = brightness * (1.0 - self.saturation);
        let q = brightness * (1.0 - self.saturation * f);
        let t = brightness * (1.0 - self.saturation * (1.0 - f));

        let (r, g, b) = match (h.floor() as i64).rem_euclid(6) {
            0 => (brightness, t, p),
            1 => (q, brightness, p),
            2 => (p, brightness, t),
            3 => (p, q, brightness),
            4 => (t, p, brightness),
            _ => (brightness, p, q),
        };

        Color::new(channel(r), channel(g), channel(b), 0xff)
    }
}

impl fmt::Display for Hsb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hue: {:.6}, saturation: {:.6}, brightness: {:.6}",
            self.hue, self.saturation, self.brightness
        )
    }
}

/// Scale a unit component to a byte, rounding half-up.
#[inline]
fn channel(component: f64) -> u8 {
    (component * 255.0 + 0.5) as u8
}

/// Maps a cell value to a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMapper {
    /// Hue ramp at full saturation and brightness.
    #[default]
    Hsb,
    /// Linear gray ramp.
    Gray,
}

impl ColorMapper {
    pub fn convert(&self, value: f64) -> Color {
        match self {
            ColorMapper::Hsb => Hsb::from_value(value).to_rgba(),
            ColorMapper::Gray => {
                let gray = ((1.0 - value) * 255.0 + 0.5) as u8;
                Color::new(gray, gray, gray, 0xff)
            }
        }
    }
}

impl From<ColorMode> for ColorMapper {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Hsb => ColorMapper::Hsb,
            ColorMode::Gray => ColorMapper::Gray,
        }
    }
}
