//! CIE constants shared by the LAB and HCL kernels.
//!
//! L*a*b* is defined relative to a reference white; the picker renders for
//! sRGB displays, so everything here is D65. The matrices are the standard
//! sRGB <-> XYZ pair.

/// Linear sRGB to XYZ (D65), rows = X, Y, Z.
pub(crate) const SRGB_TO_XYZ: [[f32; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

/// XYZ (D65) to linear sRGB, rows = R, G, B.
pub(crate) const XYZ_TO_SRGB: [[f32; 3]; 3] = [
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
];

/// D65 white point X, normalized to Y = 1.
pub(crate) const XN: f32 = 0.950470;

/// D65 white point Z, normalized to Y = 1.
pub(crate) const ZN: f32 = 1.088830;

/// Lab transfer breakpoint, 4/29.
pub(crate) const T0: f32 = 4.0 / 29.0;

/// Lab transfer threshold, 6/29.
pub(crate) const T1: f32 = 6.0 / 29.0;

/// Slope of the linear segment, 3 * (6/29)^2.
pub(crate) const T2: f32 = 3.0 * T1 * T1;

/// Cube of the threshold, (6/29)^3.
pub(crate) const T3: f32 = T1 * T1 * T1;

/// Inverse Lab transfer: f^-1 maps an f(t) component back to a ratio of the
/// white point (cube above the threshold, linear below).
#[inline]
pub(crate) fn finv(t: f32) -> f32 {
    if t > T1 { t * t * t } else { T2 * (t - T0) }
}

/// Forward Lab transfer: cube root above (6/29)^3, linear ramp below.
#[inline]
pub(crate) fn f(t: f32) -> f32 {
    if t > T3 { t.cbrt() } else { t / T2 + T0 }
}
