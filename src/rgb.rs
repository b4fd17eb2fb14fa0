//! Model a color with red, green and blue channels in the sRGB color space.

use crate::color::{Component, Components};

/// A color specified with red, green and blue channels, each within
/// [0, 255].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// The red channel of the color.
    pub red: u8,
    /// The green channel of the color.
    pub green: u8,
    /// The blue channel of the color.
    pub blue: u8,
    /// The alpha component of the color, within [0, 1].
    pub alpha: Component,
}

impl Rgb {
    /// Create a new fully opaque color with the given red, green and blue
    /// channels.
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 1.0,
        }
    }

    /// Return this color with its alpha component replaced.
    pub fn with_alpha(self, alpha: Component) -> Self {
        Self { alpha, ..self }
    }

    /// The hexadecimal representation of this color: `#` followed by the
    /// three channels as uppercase, zero padded pairs of hex digits. The
    /// alpha component is not encoded.
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Euclidean distance between this color and `other` over the channel
    /// values. Channel space is not perceptually uniform, so this is a
    /// coarse metric: equal distances are not equally visible.
    pub fn distance(&self, other: &Self) -> Component {
        let dr = self.red as Component - other.red as Component;
        let dg = self.green as Component - other.green as Component;
        let db = self.blue as Component - other.blue as Component;
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// The channels of this color normalized to the unit interval.
    pub(crate) fn components(&self) -> Components {
        Components(
            self.red as Component / 255.0,
            self.green as Component / 255.0,
            self.blue as Component / 255.0,
        )
    }

    /// Build a fully opaque color from unit interval channel values,
    /// rounding each to the nearest 8 bit channel value.
    pub(crate) fn from_components(components: Components) -> Self {
        Self::new(
            (components.0 * 255.0).round() as u8,
            (components.1 * 255.0).round() as u8,
            (components.2 * 255.0).round() as u8,
        )
    }
}

#[cfg(feature = "bevy")]
impl From<Rgb> for bevy_color::Srgba {
    fn from(value: Rgb) -> Self {
        Self::new(
            value.red as f32 / 255.0,
            value.green as f32 / 255.0,
            value.blue as f32 / 255.0,
            value.alpha as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_colors_are_fully_opaque() {
        let rgb = Rgb::new(24, 120, 65);
        assert_eq!(rgb.red, 24);
        assert_eq!(rgb.green, 120);
        assert_eq!(rgb.blue, 65);
        assert_eq!(rgb.alpha, 1.0);
        assert_eq!(rgb.with_alpha(0.5).alpha, 0.5);
    }

    #[test]
    fn hex_is_uppercase_and_zero_padded() {
        assert_eq!(Rgb::new(24, 120, 65).hex(), "#187841");
        assert_eq!(Rgb::new(8, 0, 255).hex(), "#0800FF");
        assert_eq!(Rgb::new(0, 0, 0).hex(), "#000000");
    }

    #[test]
    fn distance_is_euclidean_over_channels() {
        let black = Rgb::new(0, 0, 0);
        assert_eq!(black.distance(&black), 0.0);
        assert_eq!(black.distance(&Rgb::new(255, 0, 0)), 255.0);
        assert_eq!(black.distance(&Rgb::new(3, 4, 0)), 5.0);
    }

    #[test]
    fn distance_ignores_alpha() {
        let left = Rgb::new(10, 20, 30);
        let right = Rgb::new(10, 20, 30).with_alpha(0.25);
        assert_eq!(left.distance(&right), 0.0);
    }
}
