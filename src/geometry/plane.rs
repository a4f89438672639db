// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Local 2D frame for a face plane

use super::Point;
use crate::utils::math::{axis, least_aligned_axis};
use nalgebra::{Point2, Unit, Vector3};

/// Orthonormal frame `(u, v, normal)` anchored at `origin`.
///
/// `u × v = normal`, so a ring wound counter-clockwise about `normal`
/// projects to a counter-clockwise 2D ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneFrame {
    pub origin: Point,
    pub u: Vector3<f64>,
    pub v: Vector3<f64>,
    pub normal: Vector3<f64>,
}

impl PlaneFrame {
    pub fn from_normal(origin: Point, normal: Vector3<f64>) -> Self {
        let normal = Unit::new_normalize(normal).into_inner();
        let helper = axis(least_aligned_axis(&normal));
        let u = normal.cross(&helper).normalize();
        let v = normal.cross(&u);
        Self {
            origin,
            u,
            v,
            normal,
        }
    }

    /// Coordinates of `point` in the frame, dropping the normal component
    pub fn project(&self, point: &Point) -> Point2<f64> {
        let d = point - self.origin;
        Point2::new(d.dot(&self.u), d.dot(&self.v))
    }

    pub fn lift(&self, point: &Point2<f64>) -> Point {
        self.origin + self.u * point.x + self.v * point.y
    }
}
