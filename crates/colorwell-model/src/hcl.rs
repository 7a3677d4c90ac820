//! HCL kernel: the cylindrical form of L*a*b* (also known as LCh).
//!
//! Hue and chroma are the polar coordinates of the a/b plane; everything
//! past that conversion is the Lab pipeline in [`crate::lab`].

use crate::gamut::GamutPolicy;
use crate::lab;

/// Scale of the normalized chroma axis. Slightly above the largest chroma
/// any sRGB color reaches, so the whole gamut normalizes into [0, 1].
const CHROMA_MAX: f32 = 134.0;

/// Writes an HCL triple as sRGB bytes at `buf[i..i + 3]`.
#[inline]
pub fn write(buf: &mut [u8], i: usize, h: f32, c: f32, l: f32, policy: GamutPolicy) {
    let angle = (h * 360.0).to_radians();
    let chroma = c * CHROMA_MAX;
    lab::write_components(
        buf,
        i,
        l * 100.0,
        angle.cos() * chroma,
        angle.sin() * chroma,
        policy,
    );
}

/// Returns a byte triple as normalized HCL.
///
/// Hue is `atan2(b, a)` folded into [0, 360); for a neutral color both
/// opponents vanish and the hue is arbitrary, which is fine because chroma
/// vanishes with them.
#[inline]
pub fn from_rgb(r: u8, g: u8, b: u8) -> [f32; 3] {
    let [l, a, bb] = lab::components_from_rgb(r, g, b);

    let degrees = bb.atan2(a).to_degrees();
    let h = if degrees < 0.0 { degrees + 360.0 } else { degrees };
    let c = (a * a + bb * bb).sqrt();

    [h / 360.0, c / CHROMA_MAX, l / 100.0]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fwd(h: f32, c: f32, l: f32, policy: GamutPolicy) -> [u8; 3] {
        let mut buf = [0u8; 3];
        write(&mut buf, 0, h, c, l, policy);
        buf
    }

    #[test]
    fn test_zero_chroma_matches_lab_neutral() {
        let mut lab_out = [0u8; 3];
        lab::write(&mut lab_out, 0, 0.6, 0.5, 0.5, GamutPolicy::Clamp);
        for h in [0.0, 0.3, 0.8] {
            assert_eq!(fwd(h, 0.0, 0.6, GamutPolicy::Clamp), lab_out);
        }
    }

    #[test]
    fn test_hue_is_modular() {
        let a = fwd(0.0, 0.4, 0.6, GamutPolicy::Clamp);
        let b = fwd(1.0, 0.4, 0.6, GamutPolicy::Clamp);
        for (x, y) in a.iter().zip(b) {
            assert!((*x as i16 - y as i16).abs() <= 1, "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn test_out_of_gamut_policies() {
        // Maximum chroma at near-zero luminance is far outside sRGB.
        let clamped = fwd(0.0, 1.0, 0.01, GamutPolicy::Clamp);
        assert_ne!(clamped, [0, 0, 0]);
        assert_eq!(fwd(0.0, 1.0, 0.01, GamutPolicy::Blacken), [0, 0, 0]);
    }

    #[test]
    fn test_inverse_hue_in_range() {
        for (r, g, b) in [(255, 0, 0), (0, 255, 0), (0, 0, 255), (10, 200, 180)] {
            let [h, c, l] = from_rgb(r, g, b);
            assert!((0.0..1.0).contains(&h), "h = {h}");
            assert!(c > 0.0 && c <= 1.0, "c = {c}");
            assert!(l > 0.0 && l < 1.0, "l = {l}");
        }
    }

    #[test]
    fn test_roundtrip_sampled() {
        let mut buf = [0u8; 3];
        for r in (0..=255).step_by(51) {
            for g in (0..=255).step_by(51) {
                for b in (0..=255).step_by(51) {
                    let [h, c, l] = from_rgb(r, g, b);
                    write(&mut buf, 0, h, c, l, GamutPolicy::Clamp);
                    for (got, want) in buf.iter().zip([r, g, b]) {
                        assert!(
                            (*got as i16 - want as i16).abs() <= 1,
                            "hcl roundtrip of {:?} gave {:?}",
                            (r, g, b),
                            buf
                        );
                    }
                }
            }
        }
    }
}
