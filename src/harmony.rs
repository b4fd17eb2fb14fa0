//! Hue rotation based color harmony schemes.
//!
//! Every scheme is a set of fixed hue rotations around the color wheel with
//! saturation, lightness and alpha held fixed. The schemes are implemented
//! once, on [`Hsl`], and every other space derives its palette by converting
//! to HSL, rotating there and converting back, so results always come back
//! in the receiver's own space.

use crate::color::Component;
use crate::math::{circle_bound, normalize_unit};
use crate::{Cmyk, Hsb, Hsl, Rgb};

impl Hsl {
    /// This color rotated around the color wheel by `degrees`.
    fn rotated(&self, degrees: i32) -> Self {
        Self {
            hue: circle_bound(self.hue + degrees),
            ..*self
        }
    }

    /// The color directly opposite this one on the color wheel.
    pub fn complementary(&self) -> Self {
        self.rotated(180)
    }

    /// The two colors adjacent to this color's complement.
    pub fn split_complementary(&self) -> [Self; 2] {
        [self.rotated(150), self.rotated(210)]
    }

    /// The two colors adjacent to this one on the color wheel.
    pub fn analogous(&self) -> [Self; 2] {
        [self.rotated(30), self.rotated(-30)]
    }

    /// The two other colors forming an equilateral triangle with this one.
    pub fn triadic(&self) -> [Self; 2] {
        [self.rotated(120), self.rotated(-120)]
    }

    /// The three other colors forming a square with this one: the evenly
    /// spaced tetrad at 90 degree steps.
    pub fn tetradic(&self) -> [Self; 3] {
        [self.rotated(90), self.rotated(180), self.rotated(270)]
    }

    /// A color of the same hue with saturation and lightness scaled by the
    /// given factors. Each product is wrapped back onto the unit interval by
    /// a single step, so the factors must keep it within [-1, 2].
    pub fn monochromatic(&self, saturation_scale: Component, lightness_scale: Component) -> Self {
        Self {
            saturation: normalize_unit(self.saturation * saturation_scale),
            lightness: normalize_unit(self.lightness * lightness_scale),
            ..*self
        }
    }
}

macro_rules! harmony_via_hsl {
    ($model:ident, $back:ident) => {
        impl $model {
            /// The color directly opposite this one on the color wheel.
            pub fn complementary(&self) -> Self {
                self.to_hsl().complementary().$back()
            }

            /// The two colors adjacent to this color's complement.
            pub fn split_complementary(&self) -> [Self; 2] {
                self.to_hsl().split_complementary().map(|c| c.$back())
            }

            /// The two colors adjacent to this one on the color wheel.
            pub fn analogous(&self) -> [Self; 2] {
                self.to_hsl().analogous().map(|c| c.$back())
            }

            /// The two other colors forming an equilateral triangle with this
            /// one.
            pub fn triadic(&self) -> [Self; 2] {
                self.to_hsl().triadic().map(|c| c.$back())
            }

            /// The three other colors forming a square with this one: the
            /// evenly spaced tetrad at 90 degree steps.
            pub fn tetradic(&self) -> [Self; 3] {
                self.to_hsl().tetradic().map(|c| c.$back())
            }

            /// A color of the same hue with the saturation and lightness of
            /// its HSL representation scaled by the given factors, then
            /// wrapped back onto the unit interval.
            pub fn monochromatic(
                &self,
                saturation_scale: Component,
                lightness_scale: Component,
            ) -> Self {
                self.to_hsl()
                    .monochromatic(saturation_scale, lightness_scale)
                    .$back()
            }
        }
    };
}

harmony_via_hsl!(Rgb, to_rgb);
harmony_via_hsl!(Hsb, to_hsb);
harmony_via_hsl!(Cmyk, to_cmyk);

#[cfg(test)]
mod tests {
    use crate::assert_component_eq;
    use crate::{Cmyk, Component, Hsb, Hsl, Rgb};

    #[test]
    fn rotations_hold_everything_but_the_hue_fixed() {
        let hsl = Hsl::new(146, 0.667, 0.282).with_alpha(0.5);
        let complement = hsl.complementary();
        assert_eq!(complement.hue, 326);
        assert_eq!(complement.saturation, hsl.saturation);
        assert_eq!(complement.lightness, hsl.lightness);
        assert_eq!(complement.alpha, 0.5);
    }

    #[test]
    fn complementary_is_an_involution_on_the_hue() {
        for hue in [0, 26, 146, 180, 326, 359] {
            let hsl = Hsl::new(hue, 0.667, 0.282);
            assert_eq!(hsl.complementary().complementary().hue, hsl.hue);
        }
    }

    #[test]
    fn hsl_schemes_rotate_by_the_documented_offsets() {
        let hsl = Hsl::new(146, 0.667, 0.282);
        assert_eq!(hsl.split_complementary().map(|c| c.hue), [296, 356]);
        assert_eq!(hsl.analogous().map(|c| c.hue), [176, 116]);
        assert_eq!(hsl.triadic().map(|c| c.hue), [266, 26]);
        assert_eq!(hsl.tetradic().map(|c| c.hue), [236, 326, 56]);
    }

    #[test]
    fn rgb_schemes_match_the_reference_palette() {
        let rgb = Rgb::new(24, 120, 65);
        assert_eq!(rgb.complementary().hex(), "#78184E");
        assert_eq!(
            rgb.split_complementary().map(|c| c.hex()),
            ["#721878", "#78181E"]
        );
        assert_eq!(rgb.analogous().map(|c| c.hex()), ["#187872", "#1E7818"]);
        assert_eq!(rgb.triadic().map(|c| c.hex()), ["#421878", "#784218"]);
        assert_eq!(
            rgb.tetradic().map(|c| c.hex()),
            ["#181E78", "#78184E", "#787218"]
        );
    }

    #[test]
    fn rgb_complementary_twice_lands_back_within_rounding() {
        let rgb = Rgb::new(24, 120, 65);
        let back = rgb.complementary().complementary();
        assert!((back.red as i32 - 24).abs() <= 1);
        assert!((back.green as i32 - 120).abs() <= 1);
        assert!((back.blue as i32 - 65).abs() <= 1);
    }

    #[test]
    fn gray_is_its_own_complement() {
        let gray = Rgb::new(128, 128, 128);
        assert_eq!(gray.complementary(), gray);
    }

    #[test]
    fn hsb_schemes_stay_in_hsb() {
        let complement = Hsb::new(146, 0.8, 0.471).complementary();
        assert_eq!(complement.hue, 326);
        assert_component_eq!(complement.saturation, 0.8);
        assert_component_eq!(complement.brightness, 0.470588);
    }

    #[test]
    fn cmyk_schemes_stay_in_cmyk() {
        let complement = Cmyk::new(0.8, 0.0, 0.458333, 0.529412).complementary();
        assert_component_eq!(complement.cyan, 0.0);
        assert_component_eq!(complement.magenta, 0.8);
        assert_component_eq!(complement.yellow, 0.35);
        assert_component_eq!(complement.black, 0.529412);
    }

    #[test]
    fn monochromatic_scales_saturation_and_lightness() {
        let scaled = Hsl::new(146, 0.6, 0.4).monochromatic(1.5, 2.0);
        assert_eq!(scaled.hue, 146);
        assert_component_eq!(scaled.saturation, 0.9);
        assert_component_eq!(scaled.lightness, 0.8);
    }

    #[test]
    fn monochromatic_wraps_products_outside_the_unit_interval() {
        let scaled = Hsl::new(146, 0.8, 0.9).monochromatic(1.5, 1.3);
        assert_component_eq!(scaled.saturation, 0.2);
        assert_component_eq!(scaled.lightness, 0.17);
    }

    #[test]
    fn harmony_preserves_alpha() {
        let rgb = Rgb::new(24, 120, 65).with_alpha(0.5);
        assert_eq!(rgb.complementary().alpha, 0.5);
        assert_eq!(rgb.triadic().map(|c| c.alpha), [0.5, 0.5]);
    }
}
