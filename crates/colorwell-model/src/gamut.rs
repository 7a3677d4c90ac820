//! Out-of-gamut handling for the perceptual kernels.
//!
//! HCL and LAB can describe colors with no sRGB representation (large chroma
//! at low luminance, for instance). What the picker paints there is a
//! product decision, so the choice travels with every forward call instead
//! of being baked into the kernels.

/// Policy for axis triples that map outside the sRGB gamut.
///
/// Only the HCL and LAB forward kernels can produce out-of-range channels;
/// the other kernels accept and ignore the policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GamutPolicy {
    /// Clamp each channel independently into [0, 255].
    #[default]
    Clamp,
    /// If any channel falls outside [0, 255], paint black instead.
    ///
    /// All-or-nothing: a triple is either faithfully representable or it is
    /// replaced wholesale, never partially clamped.
    Blacken,
}

impl GamutPolicy {
    /// True when the three pre-quantization channel values (in the 0-255
    /// domain) should be replaced by black under this policy.
    #[inline]
    pub(crate) fn blackens(self, r: f32, g: f32, b: f32) -> bool {
        const RANGE: std::ops::RangeInclusive<f32> = 0.0..=255.0;
        self == GamutPolicy::Blacken
            && !(RANGE.contains(&r) && RANGE.contains(&g) && RANGE.contains(&b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_never_blackens() {
        assert!(!GamutPolicy::Clamp.blackens(-20.0, 0.0, 300.0));
    }

    #[test]
    fn test_blacken_detects_each_channel() {
        assert!(GamutPolicy::Blacken.blackens(-0.5, 10.0, 10.0));
        assert!(GamutPolicy::Blacken.blackens(10.0, 255.5, 10.0));
        assert!(GamutPolicy::Blacken.blackens(10.0, 10.0, -1.0));
        assert!(!GamutPolicy::Blacken.blackens(0.0, 128.0, 255.0));
    }

    #[test]
    fn test_default_is_clamp() {
        assert_eq!(GamutPolicy::default(), GamutPolicy::Clamp);
    }
}
