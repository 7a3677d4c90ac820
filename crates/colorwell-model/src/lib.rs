//! # colorwell-model
//!
//! Color-space conversion engine for the colorwell picker.
//!
//! The picker presents a color as three normalized axes: two spanning a 2D
//! plane and one on a slider. This crate defines the 30 named color models
//! behind that surface: 5 conversion kernels (RGB, HSV, HSL, HCL, LAB), each
//! exposed under all 6 permutations of its axis order (`"hcl"`, `"hlc"`,
//! `"chl"`, ...).
//!
//! Every model is a bidirectional mapping:
//!
//! - **forward**: three axis values in `[0, 1]` written as an 8-bit sRGB
//!   triple straight into a caller-owned byte buffer — no allocation, since
//!   plane rendering calls this once per pixel;
//! - **inverse**: an 8-bit sRGB triple back to normalized axis values, used
//!   for one-off lookups (seeding from a value, switching models, axis
//!   accessors).
//!
//! # Example
//!
//! ```rust
//! use colorwell_model::{lookup, GamutPolicy};
//!
//! let hcl = lookup("hcl");
//! let mut px = [0u8; 3];
//! hcl.write(&mut px, 0, 0.3, 0.5, 0.7, GamutPolicy::Clamp);
//! let axes = hcl.from_rgb(px[0], px[1], px[2]);
//! assert!((axes[2] - 0.7).abs() < 0.01);
//! ```
//!
//! # Crate Structure
//!
//! ```text
//! colorwell-model (this crate)
//!    ^
//!    |
//!    +-- colorwell-render (plane / slider pixel fills)
//!    +-- colorwell-parse  (hex value strings)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod axis;
mod cie;
pub mod gamut;
pub mod hcl;
pub mod hsl;
pub mod hsv;
pub mod lab;
mod permute;
pub mod registry;
pub mod rgb;
pub mod srgb;

pub use axis::AxisRange;
pub use gamut::GamutPolicy;
pub use registry::{default_model, lookup, models, ColorModel, DEFAULT_MODEL, MODEL_COUNT};
