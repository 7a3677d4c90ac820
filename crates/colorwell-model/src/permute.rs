//! Axis-order permutations.
//!
//! Every base model ("hcl", "hsv", ...) is also exposed under the other five
//! orderings of its axis letters. A variant never gets its own math: it
//! remaps arguments into the base kernel on the way in and reorders the
//! base inverse's output on the way out.

/// One axis-order variant of a base model.
pub(crate) struct Permutation {
    /// Positions of the base axis letters in the variant's name:
    /// `name[k] = base_name[order[k]]`.
    pub order: [usize; 3],
    /// Forward argument dispatch: base kernel slot `k` receives the
    /// variant's argument `forward[k]`.
    pub forward: [usize; 3],
    /// Inverse output reorder: variant output `k` is the base inverse's
    /// component `inverse[k]`.
    pub inverse: [usize; 3],
}

/// The six orderings, identity first.
///
/// For the transpositions the two maps coincide with `order`. The two
/// 3-cycles do not: each dispatches forward arguments through the opposite
/// cycle. Taking base "hcl", the variant "clh" (order y,z,x) receives
/// `(c, l, h)` and the base expects hue first, so its third argument must
/// land in the base's first slot. Changing either 3-cycle to the "obvious"
/// symmetric map scrambles the axes; the registry tests pin this down.
pub(crate) const PERMUTATIONS: [Permutation; 6] = [
    Permutation { order: [0, 1, 2], forward: [0, 1, 2], inverse: [0, 1, 2] },
    Permutation { order: [0, 2, 1], forward: [0, 2, 1], inverse: [0, 2, 1] },
    Permutation { order: [1, 0, 2], forward: [1, 0, 2], inverse: [1, 0, 2] },
    Permutation { order: [1, 2, 0], forward: [2, 0, 1], inverse: [1, 2, 0] },
    Permutation { order: [2, 0, 1], forward: [1, 2, 0], inverse: [2, 0, 1] },
    Permutation { order: [2, 1, 0], forward: [2, 1, 0], inverse: [2, 1, 0] },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orders_are_all_distinct_permutations() {
        for p in &PERMUTATIONS {
            let mut seen = [false; 3];
            for &k in &p.order {
                assert!(!seen[k]);
                seen[k] = true;
            }
        }
        for (i, a) in PERMUTATIONS.iter().enumerate() {
            for b in &PERMUTATIONS[i + 1..] {
                assert_ne!(a.order, b.order);
            }
        }
    }

    #[test]
    fn test_forward_inverts_order() {
        // Dispatching through `forward` must hand the base kernel its axes
        // in canonical positions: forward is the inverse permutation of
        // order, which only differs from order itself for the 3-cycles.
        for p in &PERMUTATIONS {
            for k in 0..3 {
                assert_eq!(p.order[p.forward[k]], k, "order {:?}", p.order);
            }
        }
    }

    #[test]
    fn test_inverse_matches_order() {
        for p in &PERMUTATIONS {
            assert_eq!(p.inverse, p.order);
        }
    }
}
