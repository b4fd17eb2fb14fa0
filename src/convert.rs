//! Conversions between the RGB, HSL, HSB and CMYK color spaces.
//!
//! Each color space is modeled with its own type and RGB is the hub: the
//! cylindrical and ink models convert directly to and from RGB, and every
//! cross conversion (HSL to HSB, CMYK to HSL, ...) routes through it.
//!
//! Conversions operate on the three color components only; alpha is carried
//! over unchanged, except for CMYK which does not have one.

use crate::color::{Component, Components};
use crate::{Cmyk, Hsb, Hsl, Rgb};

impl Rgb {
    /// Convert this color to the HSL notation. Achromatic colors come back
    /// with a hue and saturation of zero.
    pub fn to_hsl(&self) -> Hsl {
        let Components(hue, saturation, lightness) = util::rgb_to_hsl(&self.components());
        Hsl::new(hue.round() as i32, saturation, lightness).with_alpha(self.alpha)
    }

    /// Convert this color to the HSB notation. Achromatic colors come back
    /// with a hue and saturation of zero.
    pub fn to_hsb(&self) -> Hsb {
        let Components(hue, saturation, brightness) = util::rgb_to_hsb(&self.components());
        Hsb::new(hue.round() as i32, saturation, brightness).with_alpha(self.alpha)
    }

    /// Convert this color to CMYK ink coverage. The alpha component has no
    /// CMYK counterpart and is discarded.
    pub fn to_cmyk(&self) -> Cmyk {
        let [cyan, magenta, yellow, black] = util::rgb_to_cmyk(&self.components());
        Cmyk::new(cyan, magenta, yellow, black)
    }
}

impl Hsl {
    /// Convert this color to the RGB color space.
    pub fn to_rgb(&self) -> Rgb {
        let components = util::hsl_to_rgb(&Components(
            self.hue as Component,
            self.saturation,
            self.lightness,
        ));
        Rgb::from_components(components).with_alpha(self.alpha)
    }

    /// Convert this color to the HSB notation, through RGB.
    pub fn to_hsb(&self) -> Hsb {
        self.to_rgb().to_hsb()
    }

    /// Convert this color to CMYK ink coverage, through RGB. The alpha
    /// component has no CMYK counterpart and is discarded.
    pub fn to_cmyk(&self) -> Cmyk {
        self.to_rgb().to_cmyk()
    }

    /// The hexadecimal representation of the RGB equivalent of this color.
    pub fn hex(&self) -> String {
        self.to_rgb().hex()
    }
}

impl Hsb {
    /// Convert this color to the RGB color space.
    pub fn to_rgb(&self) -> Rgb {
        let components = util::hsb_to_rgb(&Components(
            self.hue as Component,
            self.saturation,
            self.brightness,
        ));
        Rgb::from_components(components).with_alpha(self.alpha)
    }

    /// Convert this color to the HSL notation, through RGB.
    pub fn to_hsl(&self) -> Hsl {
        self.to_rgb().to_hsl()
    }

    /// Convert this color to CMYK ink coverage, through RGB. The alpha
    /// component has no CMYK counterpart and is discarded.
    pub fn to_cmyk(&self) -> Cmyk {
        self.to_rgb().to_cmyk()
    }

    /// The hexadecimal representation of the RGB equivalent of this color.
    pub fn hex(&self) -> String {
        self.to_rgb().hex()
    }
}

impl Cmyk {
    /// Convert this color to the RGB color space. CMYK carries no alpha, so
    /// the result is fully opaque.
    pub fn to_rgb(&self) -> Rgb {
        let components =
            util::cmyk_to_rgb(&[self.cyan, self.magenta, self.yellow, self.black]);
        Rgb::from_components(components)
    }

    /// Convert this color to the HSL notation, through RGB.
    pub fn to_hsl(&self) -> Hsl {
        self.to_rgb().to_hsl()
    }

    /// Convert this color to the HSB notation, through RGB.
    pub fn to_hsb(&self) -> Hsb {
        self.to_rgb().to_hsb()
    }

    /// The hexadecimal representation of the RGB equivalent of this color.
    pub fn hex(&self) -> String {
        self.to_rgb().hex()
    }
}

mod util {
    use crate::color::{Component, Components};
    use crate::math::{float_mod, nan_safe, normalize_unit, safe_div};

    /// Convert unit RGB channels to HSL components. The returned hue is in
    /// degrees and not yet rounded.
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;
        let lightness = (max + min) / 2.0;

        // Achromatic: hue and saturation are zero by convention.
        if delta == 0.0 {
            return Components(0.0, 0.0, lightness);
        }

        let saturation = if lightness < 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };

        let mut hue = 60.0
            * if max == red {
                (green - blue) / delta
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            };
        if hue < 0.0 {
            hue += 360.0;
        }

        Components(nan_safe(hue), saturation, lightness)
    }

    /// Convert HSL components to unit RGB channels. The hue is taken in
    /// degrees.
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, lightness) = *from;

        if saturation == 0.0 {
            return Components(lightness, lightness, lightness);
        }

        let tmp1 = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let tmp2 = 2.0 * lightness - tmp1;
        let hue = hue / 360.0;

        let align = |offset: Component| -> Component {
            let channel = normalize_unit(hue + offset);
            if channel * 6.0 < 1.0 {
                tmp2 + (tmp1 - tmp2) * 6.0 * channel
            } else if channel * 2.0 < 1.0 {
                tmp1
            } else if channel * 3.0 < 2.0 {
                tmp2 + (tmp1 - tmp2) * (2.0 / 3.0 - channel) * 6.0
            } else {
                tmp2
            }
        };

        Components(align(1.0 / 3.0), align(0.0), align(-1.0 / 3.0))
    }

    /// Convert unit RGB channels to HSB components. The returned hue is in
    /// degrees and not yet rounded.
    pub fn rgb_to_hsb(from: &Components) -> Components {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        let brightness = max;
        let saturation = safe_div(delta, max);

        let hue = if delta == 0.0 {
            0.0
        } else if max == red {
            60.0 * float_mod((green - blue) / delta, 6.0)
        } else if max == green {
            60.0 * ((blue - red) / delta + 2.0)
        } else {
            60.0 * ((red - green) / delta + 4.0)
        };

        Components(nan_safe(hue), saturation, brightness)
    }

    /// Convert HSB components to unit RGB channels. The hue is taken in
    /// degrees, within [0, 360).
    pub fn hsb_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, brightness) = *from;

        let chroma = brightness * saturation;
        let x = chroma * (1.0 - (float_mod(hue / 60.0, 2.0) - 1.0).abs());

        let (red, green, blue) = match (hue / 60.0).floor() as i32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        let m = brightness - chroma;
        Components(red, green, blue).map(|v| v + m)
    }

    /// Convert unit RGB channels to CMYK ink coverage. Pure black would
    /// divide by zero; the guard maps it to zero ink on the color plates.
    pub fn rgb_to_cmyk(from: &Components) -> [Component; 4] {
        let Components(red, green, blue) = *from;

        let black = 1.0 - red.max(green).max(blue);
        let cyan = safe_div(1.0 - red - black, 1.0 - black);
        let magenta = safe_div(1.0 - green - black, 1.0 - black);
        let yellow = safe_div(1.0 - blue - black, 1.0 - black);

        [cyan, magenta, yellow, black]
    }

    /// Convert CMYK ink coverage to unit RGB channels.
    pub fn cmyk_to_rgb(from: &[Component; 4]) -> Components {
        let [cyan, magenta, yellow, black] = *from;
        Components(cyan, magenta, yellow).map(|ink| (1.0 - ink) * (1.0 - black))
    }
}
