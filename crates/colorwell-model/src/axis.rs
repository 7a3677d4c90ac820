//! Per-axis numeric ranges.
//!
//! Kernels always compute in normalized [0, 1] space; the ranges here only
//! feed the public accessor layer, where "chroma" reads as 0-134 and a Lab
//! axis as -110..110 instead of a unitless fraction.

/// Natural numeric range of one model axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    /// Lower bound in the axis's natural unit.
    pub min: f32,
    /// Upper bound in the axis's natural unit.
    pub max: f32,
}

impl AxisRange {
    /// Creates a range.
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Width of the range.
    #[inline]
    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// Maps a normalized [0, 1] value into the natural unit.
    #[inline]
    pub fn denormalize(&self, t: f32) -> f32 {
        self.min + t * self.span()
    }

    /// Maps a natural-unit value into [0, 1].
    ///
    /// The input is clamped into the range first; non-finite input maps to
    /// the range minimum.
    #[inline]
    pub fn normalize(&self, value: f32) -> f32 {
        let v = if value.is_finite() { value } else { self.min };
        (v.clamp(self.min, self.max) - self.min) / self.span()
    }
}
