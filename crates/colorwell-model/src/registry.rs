//! Model registry: 5 base kernels fanned out into 30 named variants.
//!
//! # Architecture
//!
//! The registry is a process-wide singleton built on first use. Each entry
//! is plain data: metadata plus a pair of kernel function pointers and the
//! two index maps that express its axis order — no trait objects, since all
//! 30 variants are known statically.
//!
//! # Example
//!
//! ```rust
//! use colorwell_model::{lookup, models, GamutPolicy};
//!
//! // Case-insensitive; unknown names fall back to the default model.
//! assert_eq!(lookup("HCL").name(), "hcl");
//! assert_eq!(lookup("no-such-model").name(), "hlc");
//! assert_eq!(models().count(), 30);
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::axis::AxisRange;
use crate::gamut::GamutPolicy;
use crate::permute::PERMUTATIONS;
use crate::{hcl, hsl, hsv, lab, rgb};

/// Forward kernel: writes 3 bytes at an offset into a caller-owned buffer.
pub type WriteFn = fn(&mut [u8], usize, f32, f32, f32, GamutPolicy);

/// Inverse kernel: bytes back to normalized axis values in base order.
pub type FromRgbFn = fn(u8, u8, u8) -> [f32; 3];

/// Number of registered models.
pub const MODEL_COUNT: usize = 30;

/// Name of the model unknown lookups fall back to.
pub const DEFAULT_MODEL: &str = "hlc";

/// A base model before permutation fan-out.
struct BaseModel {
    name: &'static str,
    labels: [&'static str; 3],
    ranges: [AxisRange; 3],
    write: WriteFn,
    from_rgb: FromRgbFn,
}

const BASES: [BaseModel; 5] = [
    BaseModel {
        name: "hcl",
        labels: ["hue", "chroma", "luminance"],
        ranges: [
            AxisRange::new(0.0, 360.0),
            AxisRange::new(0.0, 134.0),
            AxisRange::new(0.0, 100.0),
        ],
        write: hcl::write,
        from_rgb: hcl::from_rgb,
    },
    BaseModel {
        name: "hsl",
        labels: ["hue", "saturation", "luminosity"],
        ranges: [
            AxisRange::new(0.0, 360.0),
            AxisRange::new(0.0, 100.0),
            AxisRange::new(0.0, 100.0),
        ],
        write: hsl::write,
        from_rgb: hsl::from_rgb,
    },
    BaseModel {
        name: "hsv",
        labels: ["hue", "saturation", "value"],
        ranges: [
            AxisRange::new(0.0, 360.0),
            AxisRange::new(0.0, 100.0),
            AxisRange::new(0.0, 100.0),
        ],
        write: hsv::write,
        from_rgb: hsv::from_rgb,
    },
    BaseModel {
        name: "lab",
        labels: ["lightness", "red to green", "blue to yellow"],
        ranges: [
            AxisRange::new(0.0, 100.0),
            AxisRange::new(-110.0, 110.0),
            AxisRange::new(-110.0, 110.0),
        ],
        write: lab::write,
        from_rgb: lab::from_rgb,
    },
    BaseModel {
        name: "rgb",
        labels: ["red", "green", "blue"],
        ranges: [
            AxisRange::new(0.0, 255.0),
            AxisRange::new(0.0, 255.0),
            AxisRange::new(0.0, 255.0),
        ],
        write: rgb::write,
        from_rgb: rgb::from_rgb,
    },
];

/// One named, immutable color model variant.
///
/// Created once at registry initialization and never mutated; handed out as
/// `&'static` references.
pub struct ColorModel {
    name: String,
    labels: [&'static str; 3],
    ranges: [AxisRange; 3],
    write_fn: WriteFn,
    from_rgb_fn: FromRgbFn,
    arg_map: [usize; 3],
    out_map: [usize; 3],
}

impl ColorModel {
    /// The 3-letter lowercase model name, e.g. `"hlc"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Semantic axis names in this variant's order, for UI captions.
    pub fn labels(&self) -> [&'static str; 3] {
        self.labels
    }

    /// Natural numeric ranges in this variant's order.
    pub fn ranges(&self) -> [AxisRange; 3] {
        self.ranges
    }

    /// Writes the color at `(x, y, z)` (normalized axes in this variant's
    /// order) as 3 sRGB bytes at `buf[i..i + 3]`.
    #[inline]
    pub fn write(&self, buf: &mut [u8], i: usize, x: f32, y: f32, z: f32, policy: GamutPolicy) {
        let args = [x, y, z];
        (self.write_fn)(
            buf,
            i,
            args[self.arg_map[0]],
            args[self.arg_map[1]],
            args[self.arg_map[2]],
            policy,
        );
    }

    /// Returns an sRGB byte triple as normalized axes in this variant's
    /// order.
    #[inline]
    pub fn from_rgb(&self, r: u8, g: u8, b: u8) -> [f32; 3] {
        let v = (self.from_rgb_fn)(r, g, b);
        [v[self.out_map[0]], v[self.out_map[1]], v[self.out_map[2]]]
    }

    /// Reads one axis of a color in its natural unit (degrees of hue,
    /// chroma 0-134, and so on).
    ///
    /// `axis` indexes into this variant's order and must be 0, 1 or 2.
    pub fn axis_value(&self, axis: usize, r: u8, g: u8, b: u8) -> f32 {
        self.ranges[axis].denormalize(self.from_rgb(r, g, b)[axis])
    }

    /// Replaces one axis of a color with a natural-unit value, keeping the
    /// other two axes as derived from the current bytes.
    ///
    /// The value is clamped into the axis range; non-finite input maps to
    /// the range minimum. Out-of-gamut results clamp per channel.
    pub fn with_axis_value(&self, axis: usize, value: f32, r: u8, g: u8, b: u8) -> [u8; 3] {
        let mut axes = self.from_rgb(r, g, b);
        axes[axis] = self.ranges[axis].normalize(value);

        let mut out = [0u8; 3];
        self.write(&mut out, 0, axes[0], axes[1], axes[2], GamutPolicy::Clamp);
        out
    }
}

struct ModelRegistry {
    models: HashMap<String, ColorModel>,
}

impl ModelRegistry {
    fn global() -> &'static ModelRegistry {
        static INSTANCE: OnceLock<ModelRegistry> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let mut models = HashMap::with_capacity(MODEL_COUNT);
            for base in &BASES {
                let letters = base.name.as_bytes();
                for perm in &PERMUTATIONS {
                    let name: String =
                        perm.order.iter().map(|&k| letters[k] as char).collect();
                    let model = ColorModel {
                        name: name.clone(),
                        labels: perm.order.map(|k| base.labels[k]),
                        ranges: perm.order.map(|k| base.ranges[k]),
                        write_fn: base.write,
                        from_rgb_fn: base.from_rgb,
                        arg_map: perm.forward,
                        out_map: perm.inverse,
                    };
                    models.insert(name, model);
                }
            }
            ModelRegistry { models }
        })
    }
}

/// Looks up a model by name, case-insensitively.
///
/// Unknown names resolve to the default model ([`DEFAULT_MODEL`]) rather
/// than an error, so a stale or misspelled attribute value still yields a
/// working picker.
pub fn lookup(name: &str) -> &'static ColorModel {
    let models = &ModelRegistry::global().models;
    models
        .get(name.to_ascii_lowercase().as_str())
        .or_else(|| models.get(DEFAULT_MODEL))
        .expect("registry always contains the default model")
}

/// The model unknown lookups resolve to.
pub fn default_model() -> &'static ColorModel {
    lookup(DEFAULT_MODEL)
}

/// Iterates over all registered models in unspecified order.
pub fn models() -> impl Iterator<Item = &'static ColorModel> {
    ModelRegistry::global().models.values()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thirty_models() {
        assert_eq!(models().count(), MODEL_COUNT);
    }

    #[test]
    fn test_every_base_has_six_variants() {
        for base in ["hcl", "hsl", "hsv", "lab", "rgb"] {
            let count = models()
                .filter(|m| {
                    let mut chars: Vec<char> = m.name().chars().collect();
                    chars.sort_unstable();
                    let mut want: Vec<char> = base.chars().collect();
                    want.sort_unstable();
                    chars == want
                })
                .count();
            assert_eq!(count, 6, "variants of {base}");
        }
    }

    #[test]
    fn test_lookup_case_insensitive() {
        let lower = lookup("hcl");
        let upper = lookup("HCL");
        assert!(std::ptr::eq(lower, upper));
    }

    #[test]
    fn test_lookup_unknown_falls_back() {
        assert_eq!(lookup("bogus").name(), DEFAULT_MODEL);
        assert_eq!(lookup("").name(), DEFAULT_MODEL);
        assert!(std::ptr::eq(lookup("bogus"), default_model()));
    }

    #[test]
    fn test_metadata_follows_name_order() {
        let lch = lookup("lch");
        assert_eq!(lch.labels(), ["luminance", "chroma", "hue"]);
        assert_eq!(lch.ranges()[0], AxisRange::new(0.0, 100.0));
        assert_eq!(lch.ranges()[1], AxisRange::new(0.0, 134.0));
        assert_eq!(lch.ranges()[2], AxisRange::new(0.0, 360.0));
    }

    #[test]
    fn test_permuted_write_dispatches_to_base_slots() {
        let (h, c, l) = (0.25, 0.4, 0.6);
        let mut want = [0u8; 3];
        lookup("hcl").write(&mut want, 0, h, c, l, GamutPolicy::Clamp);

        // Each variant receives the same axes in its own order and must
        // produce the identical pixel.
        let mut got = [0u8; 3];
        lookup("hlc").write(&mut got, 0, h, l, c, GamutPolicy::Clamp);
        assert_eq!(got, want, "hlc");
        lookup("chl").write(&mut got, 0, c, h, l, GamutPolicy::Clamp);
        assert_eq!(got, want, "chl");
        lookup("clh").write(&mut got, 0, c, l, h, GamutPolicy::Clamp);
        assert_eq!(got, want, "clh");
        lookup("lhc").write(&mut got, 0, l, h, c, GamutPolicy::Clamp);
        assert_eq!(got, want, "lhc");
        lookup("lch").write(&mut got, 0, l, c, h, GamutPolicy::Clamp);
        assert_eq!(got, want, "lch");
    }

    #[test]
    fn test_permuted_inverse_reorders_output() {
        let (r, g, b) = (30, 180, 90);
        let [h, c, l] = lookup("hcl").from_rgb(r, g, b);
        assert_eq!(lookup("clh").from_rgb(r, g, b), [c, l, h]);
        assert_eq!(lookup("lhc").from_rgb(r, g, b), [l, h, c]);
        assert_eq!(lookup("hlc").from_rgb(r, g, b), [h, l, c]);
    }

    #[test]
    fn test_axis_value_natural_units() {
        // Pure green in rgb: the middle axis reads 255.
        assert_eq!(lookup("rgb").axis_value(1, 0, 255, 0), 255.0);

        // Hue of pure red in hsv degrees.
        let hue = lookup("hsv").axis_value(0, 255, 0, 0);
        assert!(hue.abs() < 0.5, "hue = {hue}");
    }

    #[test]
    fn test_with_axis_value_replaces_one_axis() {
        // Raise value to 100% on a half-bright red.
        let out = lookup("hsv").with_axis_value(2, 100.0, 128, 0, 0);
        assert_eq!(out, [255, 0, 0]);

        // Out-of-range input clamps to the axis bound.
        let clamped = lookup("hsv").with_axis_value(2, 900.0, 128, 0, 0);
        assert_eq!(clamped, [255, 0, 0]);
    }
}
