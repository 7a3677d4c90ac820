//! HSL kernel: hue / saturation / lightness.
//!
//! The forward direction uses the m1/m2 luminosity bounds and a continuous
//! piecewise-linear hue ramp sampled at three offsets 120 degrees apart,
//! instead of HSV's sector switch. The inverse shares HSV's hue branch and
//! differs only in how lightness and saturation fall out of min/max.

use crate::gamut::GamutPolicy;
use crate::srgb::quantize;

/// Piecewise-linear map from a hue angle (degrees, pre-wrapped into
/// [0, 360)) to a channel level between the m1/m2 bounds.
#[inline]
fn ramp(h: f32, m1: f32, m2: f32) -> f32 {
    if h < 60.0 {
        m1 + (m2 - m1) * h / 60.0
    } else if h < 180.0 {
        m2
    } else if h < 240.0 {
        m1 + (m2 - m1) * (240.0 - h) / 60.0
    } else {
        m1
    }
}

/// Writes an HSL triple as sRGB bytes at `buf[i..i + 3]`.
#[inline]
pub fn write(buf: &mut [u8], i: usize, h: f32, s: f32, l: f32, _policy: GamutPolicy) {
    let h2 = h * 360.0;
    let m2 = l + (if l < 0.5 { l } else { 1.0 - l }) * s;
    let m1 = 2.0 * l - m2;

    // Red and blue sample the ramp at +-120 degrees, wrapped by hand so the
    // ramp itself never sees an angle outside [0, 360).
    let h1 = if h2 >= 240.0 { h2 - 240.0 } else { h2 + 120.0 };
    let h3 = if h2 < 120.0 { h2 + 240.0 } else { h2 - 120.0 };

    buf[i] = quantize(255.0 * ramp(h1, m1, m2));
    buf[i + 1] = quantize(255.0 * ramp(h2, m1, m2));
    buf[i + 2] = quantize(255.0 * ramp(h3, m1, m2));
}

/// Returns a byte triple as normalized HSL.
#[inline]
pub fn from_rgb(r: u8, g: u8, b: u8) -> [f32; 3] {
    let rgb = crate::rgb::from_rgb(r, g, b);
    let min = rgb[0].min(rgb[1]).min(rgb[2]);
    let max = rgb[0].max(rgb[1]).max(rgb[2]);
    let delta = max - min;
    let l = (max + min) / 2.0;

    if delta == 0.0 {
        return [0.0, 0.0, l];
    }

    let s = delta / (if l < 0.5 { max + min } else { 2.0 - max - min });

    [crate::hsv::hue(rgb, max, delta), s, l]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fwd(h: f32, s: f32, l: f32) -> [u8; 3] {
        let mut buf = [0u8; 3];
        write(&mut buf, 0, h, s, l, GamutPolicy::Clamp);
        buf
    }

    #[test]
    fn test_mid_lightness_gray() {
        for h in [0.0, 0.4, 0.9] {
            assert_eq!(fwd(h, 0.0, 0.5), [128, 128, 128]);
        }
    }

    #[test]
    fn test_full_saturation_primaries() {
        assert_eq!(fwd(0.0, 1.0, 0.5), [255, 0, 0]);
        assert_eq!(fwd(1.0 / 3.0, 1.0, 0.5), [0, 255, 0]);
        assert_eq!(fwd(2.0 / 3.0, 1.0, 0.5), [0, 0, 255]);
    }

    #[test]
    fn test_lightness_extremes() {
        assert_eq!(fwd(0.1, 0.8, 0.0), [0, 0, 0]);
        assert_eq!(fwd(0.1, 0.8, 1.0), [255, 255, 255]);
    }

    #[test]
    fn test_inverse_of_gray() {
        let [h, s, l] = from_rgb(64, 64, 64);
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
        assert!((l - 64.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_roundtrip_sampled() {
        for r in (0..=255).step_by(51) {
            for g in (0..=255).step_by(51) {
                for b in (0..=255).step_by(51) {
                    let [h, s, l] = from_rgb(r, g, b);
                    let out = fwd(h, s, l);
                    assert_eq!(out, [r, g, b], "hsl roundtrip of {:?}", (r, g, b));
                }
            }
        }
    }
}
