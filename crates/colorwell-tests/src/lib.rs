//! Shared helpers for the colorwell integration suite.

/// Byte sample grid: every 15th value plus the 255 endpoint.
pub fn byte_grid() -> Vec<u8> {
    let mut v: Vec<u8> = (0..=255).step_by(15).collect();
    if v.last() != Some(&255) {
        v.push(255);
    }
    v
}

/// Normalized sample grid over [0, 1] with `n` points.
pub fn unit_grid(n: usize) -> Vec<f32> {
    (0..n).map(|i| i as f32 / (n - 1) as f32).collect()
}

/// The five base model names.
pub const BASE_MODELS: [&str; 5] = ["hcl", "hsl", "hsv", "lab", "rgb"];

/// All six orderings of a 3-letter name, identity first.
pub fn name_variants(base: &str) -> [String; 6] {
    let b: Vec<char> = base.chars().collect();
    let order: [[usize; 3]; 6] =
        [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];
    order.map(|o| o.iter().map(|&k| b[k]).collect())
}
