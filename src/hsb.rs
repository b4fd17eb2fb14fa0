//! Model a color with the HSB (also called HSV) notation in the sRGB color
//! space.

use crate::color::Component;
use crate::math::circle_bound;

/// A color specified with hue, saturation and brightness.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsb {
    /// The hue angle of the color in whole degrees, within [0, 360).
    pub hue: i32,
    /// The saturation component of the color, within [0, 1].
    pub saturation: Component,
    /// The brightness component of the color, within [0, 1].
    pub brightness: Component,
    /// The alpha component of the color, within [0, 1].
    pub alpha: Component,
}

impl Hsb {
    /// Create a new fully opaque color with the given hue, saturation and
    /// brightness. The hue is wrapped onto the color wheel, so rotations may
    /// pass angles outside [0, 360).
    pub fn new(hue: i32, saturation: Component, brightness: Component) -> Self {
        Self {
            hue: circle_bound(hue),
            saturation,
            brightness,
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
        assert_eq!(Hsb::new(420, 0.8, 0.471).hue, 60);
        assert_eq!(Hsb::new(-60, 0.8, 0.471).hue, 300);
    }

    #[test]
    fn new_colors_are_fully_opaque() {
        let hsb = Hsb::new(146, 0.8, 0.471);
        assert_eq!(hsb.alpha, 1.0);
        assert_eq!(hsb.with_alpha(0.75).alpha, 0.75);
    }
}
