//! # colorwell-render
//!
//! Pixel fills for the picker's two surfaces: the 2D plane spanned by a
//! model's first two axes, and the 1D slider for its third.
//!
//! Both fills write RGBA (alpha forced opaque) into a caller-owned buffer,
//! invoking the model's forward kernel once per pixel. Rows of the plane
//! are independent, so with the default `rayon` feature the plane fill
//! fans rows out across threads; each row is a disjoint sub-slice, no
//! synchronization needed.
//!
//! # Example
//!
//! ```rust
//! use colorwell_model::{lookup, GamutPolicy};
//! use colorwell_render::{fill_plane, PlaneOptions};
//!
//! let model = lookup("hsv");
//! let mut buf = vec![0u8; 64 * 64 * 4];
//! fill_plane(&mut buf, 64, 64, model, 1.0, PlaneOptions::default()).unwrap();
//! ```

#![warn(missing_docs)]

use colorwell_model::{ColorModel, GamutPolicy};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use thiserror::Error;

/// Result type alias using [`RenderError`].
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors from buffer-shape validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The plane buffer does not hold `width * height` RGBA pixels.
    #[error("buffer holds {actual} bytes, need {expected} for {width}x{height} RGBA")]
    PlaneSize {
        /// Required length in bytes.
        expected: usize,
        /// Provided length in bytes.
        actual: usize,
        /// Requested plane width in pixels.
        width: u32,
        /// Requested plane height in pixels.
        height: u32,
    },
    /// The slider buffer length is not a multiple of 4 bytes.
    #[error("slider buffer length {0} is not a whole number of RGBA pixels")]
    SliderStride(usize),
}

/// Orientation and gamut options for [`fill_plane`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaneOptions {
    /// Sweep the first axis right-to-left instead of left-to-right.
    pub flip_x: bool,
    /// Sweep the second axis top-to-bottom instead of bottom-to-top.
    pub flip_y: bool,
    /// Out-of-gamut handling for every pixel.
    pub policy: GamutPolicy,
}

/// Fraction of the way through `count` samples, 0 when there is only one.
#[inline]
fn fraction(index: usize, count: usize) -> f32 {
    if count <= 1 {
        0.0
    } else {
        index as f32 / (count - 1) as f32
    }
}

#[inline]
fn fill_row(
    row: &mut [u8],
    y: f32,
    width: usize,
    model: &ColorModel,
    z: f32,
    opts: PlaneOptions,
) {
    for (c, px) in row.chunks_exact_mut(4).enumerate() {
        let mut x = fraction(c, width);
        if opts.flip_x {
            x = 1.0 - x;
        }
        model.write(px, 0, x, y, z, opts.policy);
        px[3] = 0xFF;
    }
}

/// Fills an RGBA plane: the model's first axis sweeps left-to-right, the
/// second bottom-to-top, the third is fixed at `z`.
///
/// `buf` must hold exactly `width * height` RGBA pixels. Zero-sized planes
/// are a no-op; a 1-pixel-wide or -tall plane samples axis value 0 along
/// the degenerate direction.
///
/// # Errors
///
/// [`RenderError::PlaneSize`] when the buffer length does not match.
pub fn fill_plane(
    buf: &mut [u8],
    width: u32,
    height: u32,
    model: &ColorModel,
    z: f32,
    opts: PlaneOptions,
) -> Result<()> {
    let (w, h) = (width as usize, height as usize);
    let expected = w * h * 4;
    if buf.len() != expected {
        return Err(RenderError::PlaneSize {
            expected,
            actual: buf.len(),
            width,
            height,
        });
    }
    if w == 0 || h == 0 {
        return Ok(());
    }

    let row_y = |r: usize| {
        let t = fraction(r, h);
        if opts.flip_y { t } else { 1.0 - t }
    };

    #[cfg(feature = "rayon")]
    buf.par_chunks_exact_mut(w * 4)
        .enumerate()
        .for_each(|(r, row)| fill_row(row, row_y(r), w, model, z, opts));

    #[cfg(not(feature = "rayon"))]
    for (r, row) in buf.chunks_exact_mut(w * 4).enumerate() {
        fill_row(row, row_y(r), w, model, z, opts);
    }

    Ok(())
}

/// Fills an RGBA strip sweeping the model's third axis while the first two
/// stay fixed at `(x, y)`.
///
/// `reversed` runs the sweep high-to-low, for sliders rendered with their
/// maximum at the top or left.
///
/// # Errors
///
/// [`RenderError::SliderStride`] when `buf` is not whole RGBA pixels.
pub fn fill_slider(
    buf: &mut [u8],
    model: &ColorModel,
    x: f32,
    y: f32,
    reversed: bool,
    policy: GamutPolicy,
) -> Result<()> {
    if buf.len() % 4 != 0 {
        return Err(RenderError::SliderStride(buf.len()));
    }

    let count = buf.len() / 4;
    for (k, px) in buf.chunks_exact_mut(4).enumerate() {
        let mut z = fraction(k, count);
        if reversed {
            z = 1.0 - z;
        }
        model.write(px, 0, x, y, z, policy);
        px[3] = 0xFF;
    }

    Ok(())
}

/// Renders a single selection to its sRGB byte triple.
pub fn selection_to_rgb(model: &ColorModel, x: f32, y: f32, z: f32) -> [u8; 3] {
    let mut buf = [0u8; 3];
    model.write(&mut buf, 0, x, y, z, GamutPolicy::Clamp);
    buf
}
