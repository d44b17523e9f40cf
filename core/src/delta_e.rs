use crate::color::{Lab, Rgb};
use crate::error::Result;

/// CIE76 color difference: Euclidean distance between two Lab points.
pub fn cie76(color1: &Lab, color2: &Lab) -> f64 {
    let dl = color1.l - color2.l;
    let da = color1.a - color2.a;
    let db = color1.b - color2.b;
    (dl * dl + da * da + db * db).sqrt()
}

/// ΔE* (CIE76) between two comma-delimited sRGB strings.
///
/// Fails only when either input does not parse as an RGB triple. Numeric
/// anomalies (non-finite channel values) propagate through as NaN or
/// infinity rather than raising an error.
pub fn color_delta(rgb1: &str, rgb2: &str) -> Result<f64> {
    let lab1 = rgb1.parse::<Rgb>()?.to_lab();
    let lab2 = rgb2.parse::<Rgb>()?.to_lab();
    log::trace!("'{}' -> {:?}, '{}' -> {:?}", rgb1, lab1, rgb2, lab2);
    Ok(cie76(&lab1, &lab2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_lightness_difference() {
        let black = Lab { l: 0.0, a: 0.0, b: 0.0 };
        let white = Lab { l: 100.0, a: 0.0, b: 0.0 };
        assert_eq!(cie76(&black, &white), 100.0);
    }
}
