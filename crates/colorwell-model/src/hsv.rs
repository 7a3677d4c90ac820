//! HSV kernel: hue / saturation / value via 60-degree sector decomposition.
//!
//! # Range
//!
//! - Normalized [0, 1] on both sides; hue wraps (1.0 reads as 0.0).
//!
//! # Reference
//!
//! The classic hexagon dispatch: the hue circle splits into six sectors and
//! each sector assigns the peak, rising, falling and floor levels to fixed
//! channels.

use crate::gamut::GamutPolicy;
use crate::srgb::quantize;

/// Writes an HSV triple as sRGB bytes at `buf[i..i + 3]`.
///
/// Zero saturation short-circuits to gray without touching the hue, so the
/// gray axis is exactly hue-independent.
#[inline]
pub fn write(buf: &mut [u8], i: usize, h: f32, s: f32, v: f32, _policy: GamutPolicy) {
    if s == 0.0 {
        let gray = quantize(v * 255.0);
        buf[i] = gray;
        buf[i + 1] = gray;
        buf[i + 2] = gray;
        return;
    }

    let value = v * 255.0;
    let hh = if h == 1.0 { 0.0 } else { h * 6.0 };
    let sector = hh.floor();
    let frac = hh - sector;

    let floor = value * (1.0 - s);
    let falling = value * (1.0 - s * frac);
    let rising = value * (1.0 - s * (1.0 - frac));

    let (r, g, b) = match sector as i32 {
        0 => (value, rising, floor),
        1 => (falling, value, floor),
        2 => (floor, value, rising),
        3 => (floor, falling, value),
        4 => (rising, floor, value),
        _ => (value, floor, falling),
    };

    buf[i] = quantize(r);
    buf[i + 1] = quantize(g);
    buf[i + 2] = quantize(b);
}

/// Returns a byte triple as normalized HSV.
///
/// Hue comes from the min/max/delta decomposition: the channel holding the
/// maximum selects one of three 120-degree arcs, offset by 0, 1/3 or 2/3,
/// then the result wraps back into [0, 1).
#[inline]
pub fn from_rgb(r: u8, g: u8, b: u8) -> [f32; 3] {
    let rgb = crate::rgb::from_rgb(r, g, b);
    let min = rgb[0].min(rgb[1]).min(rgb[2]);
    let max = rgb[0].max(rgb[1]).max(rgb[2]);
    let delta = max - min;

    if delta == 0.0 {
        return [0.0, 0.0, max];
    }

    [hue(rgb, max, delta), delta / max, max]
}

/// Shared hue branch for the HSV and HSL inverses.
#[inline]
pub(crate) fn hue(rgb: [f32; 3], max: f32, delta: f32) -> f32 {
    const THIRD: f32 = 1.0 / 3.0;

    let arc = |n: f32| ((max - n) / 6.0 + delta / 2.0) / delta;
    let (dr, dg, db) = (arc(rgb[0]), arc(rgb[1]), arc(rgb[2]));

    let h = if rgb[0] == max {
        db - dg
    } else if rgb[1] == max {
        THIRD + dr - db
    } else {
        THIRD + THIRD + dg - dr
    };

    if h < 0.0 {
        h + 1.0
    } else if h > 1.0 {
        h - 1.0
    } else {
        h
    }
}
