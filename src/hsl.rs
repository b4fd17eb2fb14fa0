//! Model a color with the HSL notation in the sRGB color space.

use crate::color::Component;
use crate::math::circle_bound;

/// A color specified with hue, saturation and lightness.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    /// The hue angle of the color in whole degrees, within [0, 360).
    pub hue: i32,
    /// The saturation component of the color, within [0, 1].
    pub saturation: Component,
    /// The lightness component of the color, within [0, 1].
    pub lightness: Component,
    /// The alpha component of the color, within [0, 1].
    pub alpha: Component,
}

impl Hsl {
    /// Create a new fully opaque color with the given hue, saturation and
    /// lightness. The hue is wrapped onto the color wheel, so rotations may
    /// pass angles outside [0, 360).
    pub fn new(hue: i32, saturation: Component, lightness: Component) -> Self {
        Self {
            hue: circle_bound(hue),
            saturation,
            lightness,
            alpha: 1.0,
        }
    }

    /// Return this color with its alpha component replaced.
    pub fn with_alpha(self, alpha: Component) -> Self {
        Self { alpha, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_hue_is_wrapped_onto_the_color_wheel() {
        assert_eq!(Hsl::new(370, 0.5, 0.5).hue, 10);
        assert_eq!(Hsl::new(-10, 0.5, 0.5).hue, 350);
        assert_eq!(Hsl::new(146, 0.5, 0.5).hue, 146);
    }

    #[test]
    fn new_colors_are_fully_opaque() {
        let hsl = Hsl::new(146, 0.667, 0.282);
        assert_eq!(hsl.alpha, 1.0);
        assert_eq!(hsl.with_alpha(0.25).alpha, 0.25);
    }
}
