//! Encoding-specific crossover and mutation operators.
//!
//! Bit-vector operators work on `&[bool]`; permutation operators work on
//! `&[usize]` index vectors and always produce valid permutations.
//!
//! # Crossover Operators
//!
//! - [`uniform_crossover`]: per-gene coin flip between parents (bits)
//! - [`multi_point_crossover`]: alternate parents at k cut points (bits)
//! - [`order_crossover`] (OX): Davis (1985) — preserves relative order
//!   (permutations)
//!
//! # Mutation Operators
//!
//! - [`bit_flip_mutation`]: independent per-bit flip at a given rate
//! - [`swap_mutation`]: exchange two random positions — O(1)

use rand::Rng;

// ============================================================================
// Bit-vector crossover
// ============================================================================

/// Uniform crossover: each gene comes from either parent with probability
/// one half, mirrored across the two children.
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn uniform_crossover<R: Rng>(
    parent1: &[bool],
    parent2: &[bool],
    rng: &mut R,
) -> (Vec<bool>, Vec<bool>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    let mut child1 = Vec::with_capacity(n);
    let mut child2 = Vec::with_capacity(n);
    for i in 0..n {
        if rng.random_bool(0.5) {
            child1.push(parent1[i]);
            child2.push(parent2[i]);
        } else {
            child1.push(parent2[i]);
            child2.push(parent1[i]);
        }
    }
    (child1, child2)
}

/// Multi-point crossover: pick `points` distinct cut positions and alternate
/// the source parent between consecutive cuts.
///
/// `points` is clamped to `n - 1`, the number of distinct interior cut
/// positions.
///
/// # Panics
/// Panics if parents have different lengths or are empty, or if `points` is
/// zero.
pub fn multi_point_crossover<R: Rng>(
    parent1: &[bool],
    parent2: &[bool],
    points: usize,
    rng: &mut R,
) -> (Vec<bool>, Vec<bool>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");
    assert!(points > 0, "at least one cut point required");

    if n == 1 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let k = points.min(n - 1);
    let mut cuts: Vec<usize> = rand::seq::index::sample(rng, n - 1, k)
        .iter()
        .map(|c| c + 1)
        .collect();
    cuts.sort_unstable();

    let mut child1 = Vec::with_capacity(n);
    let mut child2 = Vec::with_capacity(n);
    let mut from_first = true;
    let mut next_cut = 0;
    for i in 0..n {
        if next_cut < cuts.len() && cuts[next_cut] == i {
            from_first = !from_first;
            next_cut += 1;
        }
        if from_first {
            child1.push(parent1[i]);
            child2.push(parent2[i]);
        } else {
            child1.push(parent2[i]);
            child2.push(parent1[i]);
        }
    }
    (child1, child2)
}

// ============================================================================
// Permutation crossover
// ============================================================================

/// Order Crossover (OX) for permutations.
///
/// Preserves the **relative order** of elements from both parents.
///
/// # Algorithm (Davis, 1985)
///
/// 1. Select a random half-open segment `[start, end)` from parent1
/// 2. Copy segment to child at the same positions
/// 3. Fill remaining positions with elements from parent2, in their original
///    cyclic order starting after the segment, skipping elements already
///    present in the child
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn order_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    if n == 1 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let (start, end) = random_segment(n, rng);
    let child1 = ox_build_child(parent1, parent2, start, end);
    let child2 = ox_build_child(parent2, parent1, start, end);
    (child1, child2)
}

/// Build one OX child: copy `[start, end)` from `template`, fill from
/// `donor`.
fn ox_build_child(template: &[usize], donor: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = template.len();
    let mut child = vec![usize::MAX; n];
    let mut in_segment = vec![false; n];

    for i in start..end {
        child[i] = template[i];
        in_segment[template[i]] = true;
    }

    // Fill from donor starting after the segment, wrapping around.
    let mut pos = end % n;
    for offset in 0..n {
        let val = donor[(end + offset) % n];
        if !in_segment[val] {
            child[pos] = val;
            pos = (pos + 1) % n;
        }
    }
    child
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Bit-flip mutation: each bit flips independently with probability `rate`.
pub fn bit_flip_mutation<R: Rng>(bits: &mut [bool], rate: f64, rng: &mut R) {
    for bit in bits.iter_mut() {
        if rng.random_bool(rate) {
            *bit = !*bit;
        }
    }
}

/// Swap mutation: exchange two random positions.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    perm.swap(i, j);
}

// ============================================================================
// Helpers
// ============================================================================

/// Pick a random half-open segment `[start, end)` with at least one element.
fn random_segment<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    if a <= b {
        (a, b + 1)
    } else {
        (b, a + 1)
    }
}

// ============================================================================
// Tests
// ============================================================================
