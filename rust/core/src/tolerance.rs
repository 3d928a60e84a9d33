// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tolerant vertex comparisons.
//!
//! Face identity is recorded by the configuration UI as a list of vertex
//! positions. Those positions go through JSON and placement arithmetic before
//! they are compared again, so exact float equality is useless here. Each
//! axis is compared independently (a box, not a sphere).

use nalgebra::Point3;

/// Per-component tolerance for vertex comparisons, in model length units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance(pub f64);

impl Tolerance {
    /// Default matching tolerance (0.01 length units).
    pub const DEFAULT: Self = Self(0.01);

    /// Check if two points are equal on every axis within tolerance.
    #[inline]
    pub fn points_equal(&self, a: &Point3<f64>, b: &Point3<f64>) -> bool {
        (a.x - b.x).abs() <= self.0 && (a.y - b.y).abs() <= self.0 && (a.z - b.z).abs() <= self.0
    }

    /// Check if two point lists are equal as unordered sets.
    ///
    /// Both lists must have the same length and every point of `a` must have a
    /// counterpart in `b`. Counterparts are consumed so two close points in `a`
    /// cannot both pair with a single point of `b`.
    ///
    /// Pairing is greedy: each point of `a` takes the first free match in `b`.
    /// When points of one set lie within twice the tolerance of each other
    /// their boxes overlap, and an early pick can leave a later point without
    /// a partner even though a valid pairing exists. Face corners are far
    /// apart compared to the default tolerance, so this does not arise there.
    pub fn point_sets_equal(&self, a: &[Point3<f64>], b: &[Point3<f64>]) -> bool {
        if a.len() != b.len() {
            return false;
        }

        let mut used = vec![false; b.len()];
        a.iter().all(|pa| {
            let found = b
                .iter()
                .enumerate()
                .position(|(i, pb)| !used[i] && self.points_equal(pa, pb));
            match found {
                Some(i) => {
                    used[i] = true;
                    true
                }
                None => false,
            }
        })
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
