use crate::{core::body::Body, utils::math::distance};

/// Indices `(i, j)` with `i < j` of two overlapping bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlapPair {
    pub a: usize,
    pub b: usize,
}

/// Brute-force O(n²) sphere overlap pass.
///
/// Pairs are visited `i` ascending, then `j` ascending. A resolved pair swaps
/// the two velocity vectors outright, so when three or more bodies overlap in
/// the same step later pairs see velocities already swapped by earlier ones.
/// Positions are never corrected.
#[derive(Debug, Default, Clone, Copy)]
pub struct CollisionResolver;

impl CollisionResolver {
    pub fn new() -> Self {
        Self
    }

    pub fn overlaps(a: &Body, b: &Body) -> bool {
        distance(a.position, b.position) <= a.radius() + b.radius()
    }

    /// Lists overlapping pairs without touching the bodies.
    pub fn find_overlaps(&self, bodies: &[Body]) -> Vec<OverlapPair> {
        let mut pairs = Vec::new();
        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                if Self::overlaps(&bodies[i], &bodies[j]) {
                    pairs.push(OverlapPair { a: i, b: j });
                }
            }
        }
        pairs
    }

    /// Swaps the velocities of every overlapping pair. Returns the number of swaps.
    pub fn resolve(&self, bodies: &mut [Body]) -> usize {
        let mut swaps = 0;
        for i in 0..bodies.len() {
            // body i is the last element of `head`, every j > i lives in `tail`.
            let (head, tail) = bodies.split_at_mut(i + 1);
            let body_i = &mut head[i];
            for body_j in tail.iter_mut() {
                if Self::overlaps(body_i, body_j) {
                    std::mem::swap(&mut body_i.velocity, &mut body_j.velocity);
                    swaps += 1;
                }
            }
        }
        swaps
    }
}
