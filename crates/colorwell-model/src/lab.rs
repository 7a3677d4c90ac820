//! CIE L*a*b* kernel (D65).
//!
//! # Range
//!
//! Normalized [0, 1] at the boundary; internally L spans 0-100 and the a/b
//! opponent axes span -110..110 (`t * 220 - 110`). Those bounds cover the
//! whole sRGB gamut with a little headroom, so every representable color
//! normalizes into [0, 1].
//!
//! # Pipeline
//!
//! forward: Lab -> XYZ (cube-or-linear branch) -> linear sRGB (3x3 matrix)
//! -> gamma encode -> bytes. Inverse runs the same pipe backwards.
//!
//! Out-of-range L/a/b combinations describe "imaginary" colors; what gets
//! painted is decided by the caller's [`GamutPolicy`].

use crate::cie;
use crate::gamut::GamutPolicy;
use crate::srgb;

/// Scale of the normalized a/b axes.
const AB_MAX: f32 = 220.0;

/// Offset of the normalized a/b axes.
const AB_OFF: f32 = 110.0;

/// Writes Lab components in their natural domains (L 0-100, a/b signed)
/// as sRGB bytes at `buf[i..i + 3]`.
///
/// A NaN opponent component is treated as a zero contribution rather than
/// letting it poison the output: a neutral gray has no defined hue, and the
/// polar front-end can hand us NaN for exactly that point.
#[inline]
pub(crate) fn write_components(
    buf: &mut [u8],
    i: usize,
    l: f32,
    a: f32,
    b: f32,
    policy: GamutPolicy,
) {
    let y = (l + 16.0) / 116.0;
    let x = if a.is_nan() { y } else { y + a / 500.0 };
    let z = if b.is_nan() { y } else { y - b / 200.0 };

    let yy = cie::finv(y);
    let xx = cie::XN * cie::finv(x);
    let zz = cie::ZN * cie::finv(z);

    let m = &cie::XYZ_TO_SRGB;
    let r = 255.0 * srgb::oetf(m[0][0] * xx + m[0][1] * yy + m[0][2] * zz);
    let g = 255.0 * srgb::oetf(m[1][0] * xx + m[1][1] * yy + m[1][2] * zz);
    let v = 255.0 * srgb::oetf(m[2][0] * xx + m[2][1] * yy + m[2][2] * zz);

    if policy.blackens(r, g, v) {
        buf[i] = 0;
        buf[i + 1] = 0;
        buf[i + 2] = 0;
        return;
    }

    buf[i] = srgb::quantize(r);
    buf[i + 1] = srgb::quantize(g);
    buf[i + 2] = srgb::quantize(v);
}

/// Returns a byte triple as Lab components in their natural domains.
#[inline]
pub(crate) fn components_from_rgb(r: u8, g: u8, b: u8) -> [f32; 3] {
    let rl = srgb::eotf(r as f32 / 255.0);
    let gl = srgb::eotf(g as f32 / 255.0);
    let bl = srgb::eotf(b as f32 / 255.0);

    let m = &cie::SRGB_TO_XYZ;
    let x = (m[0][0] * rl + m[0][1] * gl + m[0][2] * bl) / cie::XN;
    let y = m[1][0] * rl + m[1][1] * gl + m[1][2] * bl;
    let z = (m[2][0] * rl + m[2][1] * gl + m[2][2] * bl) / cie::ZN;

    let fx = cie::f(x);
    let fy = cie::f(y);
    let fz = cie::f(z);

    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Writes a normalized Lab triple as sRGB bytes at `buf[i..i + 3]`.
#[inline]
pub fn write(buf: &mut [u8], i: usize, l: f32, a: f32, b: f32, policy: GamutPolicy) {
    write_components(
        buf,
        i,
        l * 100.0,
        a * AB_MAX - AB_OFF,
        b * AB_MAX - AB_OFF,
        policy,
    );
}

/// Returns a byte triple as normalized Lab.
#[inline]
pub fn from_rgb(r: u8, g: u8, b: u8) -> [f32; 3] {
    let [l, a, bb] = components_from_rgb(r, g, b);
    [l / 100.0, (a + AB_OFF) / AB_MAX, (bb + AB_OFF) / AB_MAX]
}
