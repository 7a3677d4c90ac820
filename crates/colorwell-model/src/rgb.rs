//! RGB kernel: identity scaling between normalized axes and bytes.

use crate::gamut::GamutPolicy;
use crate::srgb::quantize;

/// Writes normalized RGB axes as bytes at `buf[i..i + 3]`.
///
/// RGB cannot leave its own gamut; the policy is accepted for signature
/// uniformity and ignored.
#[inline]
pub fn write(buf: &mut [u8], i: usize, r: f32, g: f32, b: f32, _policy: GamutPolicy) {
    buf[i] = quantize(r * 255.0);
    buf[i + 1] = quantize(g * 255.0);
    buf[i + 2] = quantize(b * 255.0);
}

/// Returns a byte triple as normalized [0, 1] axes.
#[inline]
pub fn from_rgb(r: u8, g: u8, b: u8) -> [f32; 3] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0]
}
