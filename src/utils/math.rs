//! Vector helpers layered on top of `glam`.
//!
//! `glam` already provides component-wise add/sub; the norm here differs from
//! [`Vec3::length`] by the epsilon added under the square root, which the
//! collision test and the settling rule depend on.

use glam::Vec3;

use crate::config::NORM_EPSILON;

/// `sqrt(x² + y² + z² + ε)`. Never zero, even for the zero vector.
#[inline]
pub fn norm(v: Vec3) -> f32 {
    (v.length_squared() + NORM_EPSILON).sqrt()
}

#[inline]
pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    a + b
}

#[inline]
pub fn sub(a: Vec3, b: Vec3) -> Vec3 {
    a - b
}

/// Distance between two points, measured with [`norm`].
#[inline]
pub fn distance(a: Vec3, b: Vec3) -> f32 {
    norm(sub(a, b))
}
