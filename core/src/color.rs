use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A color in CIE L*a*b* space, D65 reference white.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// An sRGB triple on the nominal 0-255 scale.
///
/// Channels are kept exactly as parsed. Values outside [0, 255] are passed
/// through to the conversion math unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

// --- Constants for XYZ/Lab Conversion ---
const WHITE_X: f64 = 95.047;
const WHITE_Y: f64 = 100.000;
const WHITE_Z: f64 = 108.883;
const EPSILON: f64 = 0.008856;
const GAMMA_THRESHOLD: f64 = 0.04045;

impl FromStr for Rgb {
    type Err = Error;

    /// Parse a `"R,G,B"` triple. Exactly three comma-separated numeric
    /// fields are required; surrounding whitespace per field is allowed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split(',').collect();
        if tokens.len() != 3 {
            return Err(Error::ChannelCount {
                input: s.to_owned(),
                count: tokens.len(),
            });
        }

        let mut channels = [0.0f64; 3];
        for (slot, token) in channels.iter_mut().zip(&tokens) {
            *slot = token
                .trim()
                .parse()
                .map_err(|source| Error::InvalidChannel {
                    token: (*token).to_owned(),
                    source,
                })?;
        }

        Ok(Rgb {
            r: channels[0],
            g: channels[1],
            b: channels[2],
        })
    }
}

#[inline]
fn linearize(channel: f64) -> f64 {
    let c = channel / 255.0;
    let lin = if c > GAMMA_THRESHOLD {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    };
    lin * 100.0
}

// Direct power, not f64::cbrt: a negative operand must yield NaN here, not
// a signed real root.
#[inline]
fn pivot_xyz(t: f64) -> f64 {
    if t > EPSILON {
        t.powf(1.0 / 3.0)
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

impl Rgb {
    /// Convert to CIE L*a*b* via linear RGB and XYZ (sRGB primaries, D65).
    ///
    /// Pure and total over finite channels; non-finite channels propagate
    /// through the arithmetic per IEEE semantics.
    pub fn to_lab(self) -> Lab {
        let r = linearize(self.r);
        let g = linearize(self.g);
        let b = linearize(self.b);

        let x = r * 0.4124 + g * 0.3576 + b * 0.1805;
        let y = r * 0.2126 + g * 0.7152 + b * 0.0722;
        let z = r * 0.0193 + g * 0.1192 + b * 0.9505;

        let fx = pivot_xyz(x / WHITE_X);
        let fy = pivot_xyz(y / WHITE_Y);
        let fz = pivot_xyz(z / WHITE_Z);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integer_triple() {
        let rgb: Rgb = "255,128,0".parse().unwrap();
        assert_eq!(rgb, Rgb { r: 255.0, g: 128.0, b: 0.0 });
    }

    #[test]
    fn parses_fractional_and_padded_channels() {
        let rgb: Rgb = " 127.5, 0.25 ,10".parse().unwrap();
        assert_eq!(rgb, Rgb { r: 127.5, g: 0.25, b: 10.0 });
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert!(matches!(
            "255,0".parse::<Rgb>(),
            Err(Error::ChannelCount { count: 2, .. })
        ));
        assert!(matches!(
            "1,2,3,4".parse::<Rgb>(),
            Err(Error::ChannelCount { count: 4, .. })
        ));
        assert!(matches!(
            "".parse::<Rgb>(),
            Err(Error::ChannelCount { count: 1, .. })
        ));
    }

    #[test]
    fn rejects_non_numeric_channel() {
        assert!(matches!(
            "red,0,0".parse::<Rgb>(),
            Err(Error::InvalidChannel { .. })
        ));
        assert!(matches!(
            "255,,0".parse::<Rgb>(),
            Err(Error::InvalidChannel { .. })
        ));
    }

    #[test]
    fn lab_of_gray_has_no_chroma() {
        let lab = Rgb { r: 128.0, g: 128.0, b: 128.0 }.to_lab();
        assert!(lab.a.abs() < 0.1);
        assert!(lab.b.abs() < 0.1);
    }

    #[test]
    fn lab_of_red_matches_reference() {
        let lab = Rgb { r: 255.0, g: 0.0, b: 0.0 }.to_lab();
        // sRGB red is approximately L=53, a=80, b=67
        assert!(lab.l > 53.0 && lab.l < 54.0);
        assert!(lab.a > 79.0 && lab.a < 81.0);
        assert!(lab.b > 66.0 && lab.b < 68.0);
    }
}
