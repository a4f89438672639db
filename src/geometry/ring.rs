// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Closed boundary loops

use super::{BoundingBox, Edge};
use crate::error::{GeometryError, Result};
use crate::utils::math::is_finite_point;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Face boundary point
pub type Point = Point3<f64>;

/// Direction a ring is traversed in its local frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winding {
    /// Positive signed area
    CounterClockwise,
    /// Negative signed area
    Clockwise,
}

impl Winding {
    pub fn from_signed_area(signed_area: f64) -> Self {
        if signed_area > 0.0 {
            Winding::CounterClockwise
        } else {
            Winding::Clockwise
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Winding::CounterClockwise => Winding::Clockwise,
            Winding::Clockwise => Winding::CounterClockwise,
        }
    }
}

/// Ordered, implicitly closed sequence of boundary points.
///
/// The last point connects back to the first; the closing point is never
/// repeated. A `Ring` always holds at least three finite points and no two
/// consecutive points are equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>", into = "Vec<Point>")]
pub struct Ring {
    points: Vec<Point>,
}

impl Ring {
    /// Minimum number of points in a ring
    pub const MIN_POINTS: usize = 3;

    /// Build a ring, rejecting short, non-finite or repeated-vertex input
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.len() < Self::MIN_POINTS {
            return Err(GeometryError::invalid_ring(format!(
                "ring needs at least {} points, got {}",
                Self::MIN_POINTS,
                points.len()
            )));
        }

        if let Some(index) = points.iter().position(|p| !is_finite_point(p)) {
            return Err(GeometryError::invalid_ring(format!(
                "point {} has a non-finite coordinate",
                index
            )));
        }

        let n = points.len();
        for i in 0..n {
            let next = (i + 1) % n;
            if points[i] == points[next] {
                return Err(GeometryError::invalid_ring(format!(
                    "points {} and {} are identical",
                    i, next
                )));
            }
        }

        Ok(Self { points })
    }

    /// Build a ring from planar (x, y) pairs at the given height
    pub fn from_xy(coords: &[(f64, f64)], z: f64) -> Result<Self> {
        Self::new(coords.iter().map(|&(x, y)| Point::new(x, y, z)).collect())
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Never true for a constructed ring
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> &Point {
        &self.points[0]
    }

    /// Consecutive point pairs, wrapping from the last point to the first
    pub fn pairs(&self) -> impl Iterator<Item = (&Point, &Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (&self.points[i], &self.points[(i + 1) % n]))
    }

    /// Boundary edges in traversal order, the last one closing the ring
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.pairs().map(|(a, b)| Edge::new(*a, *b))
    }

    /// Total boundary length
    pub fn perimeter(&self) -> f64 {
        self.edges().map(|e| e.length()).sum()
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(&self.points)
    }

    /// Same ring traversed in the opposite direction
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }

    /// Same ring moved by `offset`
    pub fn translated(&self, offset: &Vector3<f64>) -> Self {
        Self {
            points: self.points.iter().map(|p| p + offset).collect(),
        }
    }
}

impl TryFrom<Vec<Point>> for Ring {
    type Error = GeometryError;

    fn try_from(points: Vec<Point>) -> Result<Self> {
        Ring::new(points)
    }
}

impl From<Ring> for Vec<Point> {
    fn from(ring: Ring) -> Self {
        ring.points
    }
}
