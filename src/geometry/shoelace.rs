// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Signed area, centroid and normal of a single ring
//!
//! The shoelace functions work on the x/y coordinates of a ring and carry z
//! through from the first vertex. Rings in any other plane go through
//! [`compute_planar_centroid`], which projects into the ring's own frame
//! first.

use super::{PlaneFrame, Point, Ring, Winding};
use crate::config::Tolerances;
use crate::error::{GeometryError, Result};
use nalgebra::{Point2, Vector2, Vector3};

/// Running sums of one shoelace pass
#[derive(Debug, Clone, Copy, Default)]
struct ShoelaceSums {
    /// Twice the signed area
    double_area: f64,
    x_numerator: f64,
    y_numerator: f64,
}

impl ShoelaceSums {
    fn accumulate<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = ((f64, f64), (f64, f64))>,
    {
        let mut sums = Self::default();
        for ((x0, y0), (x1, y1)) in pairs {
            let a = x0 * y1 - x1 * y0;
            sums.double_area += a;
            sums.x_numerator += (x0 + x1) * a;
            sums.y_numerator += (y0 + y1) * a;
        }
        sums
    }

    fn signed_area(&self) -> f64 {
        self.double_area * 0.5
    }

    /// Divide the numerators by `6 * signed_area`, refusing degenerate input
    fn centroid(&self, extent: f64, tolerances: &Tolerances) -> Result<(f64, f64)> {
        let signed_area = self.signed_area();
        ensure_area(signed_area, extent, tolerances)?;

        let cx = self.x_numerator / (6.0 * signed_area);
        let cy = self.y_numerator / (6.0 * signed_area);
        if !cx.is_finite() || !cy.is_finite() {
            tracing::warn!(signed_area, "centroid overflowed");
            return Err(GeometryError::DegenerateGeometry { signed_area });
        }
        Ok((cx, cy))
    }
}

fn xy_sums(ring: &Ring) -> ShoelaceSums {
    ShoelaceSums::accumulate(ring.pairs().map(|(a, b)| ((a.x, a.y), (b.x, b.y))))
}

fn xy_extent(ring: &Ring) -> f64 {
    let size = ring.bounding_box().size();
    size.x.max(size.y)
}

/// Reject areas that are zero, non-finite, or small relative to `extent²`
pub(crate) fn ensure_area(signed_area: f64, extent: f64, tolerances: &Tolerances) -> Result<()> {
    let threshold = tolerances.area_epsilon * extent * extent;
    if signed_area == 0.0 || !signed_area.is_finite() || signed_area.abs() <= threshold {
        tracing::warn!(signed_area, threshold, "rejecting degenerate ring");
        return Err(GeometryError::DegenerateGeometry { signed_area });
    }
    Ok(())
}

/// Shoelace signed area on x/y; positive for counter-clockwise rings
pub fn signed_area(ring: &Ring) -> f64 {
    xy_sums(ring).signed_area()
}

/// Enclosed x/y area, zero for collinear rings
pub fn compute_area(ring: &Ring) -> f64 {
    signed_area(ring).abs()
}

/// Winding of the ring on x/y
pub fn winding(ring: &Ring) -> Result<Winding> {
    winding_with(ring, &Tolerances::default())
}

pub fn winding_with(ring: &Ring, tolerances: &Tolerances) -> Result<Winding> {
    let area = signed_area(ring);
    ensure_area(area, xy_extent(ring), tolerances)?;
    Ok(Winding::from_signed_area(area))
}

/// Centroid of the ring on x/y, with z taken from the first vertex.
///
/// Fails with [`GeometryError::DegenerateGeometry`] instead of dividing by a
/// zero or near-zero signed area.
pub fn compute_centroid(ring: &Ring) -> Result<Point> {
    compute_centroid_with(ring, &Tolerances::default())
}

pub fn compute_centroid_with(ring: &Ring, tolerances: &Tolerances) -> Result<Point> {
    let sums = xy_sums(ring);
    let (cx, cy) = sums.centroid(xy_extent(ring), tolerances)?;
    let centroid = Point::new(cx, cy, ring.first().z);

    tracing::debug!(
        vertices = ring.len(),
        signed_area = sums.signed_area(),
        x = cx,
        y = cy,
        "computed ring centroid"
    );
    Ok(centroid)
}

/// Newell vector halved: its direction is the ring normal by the right-hand
/// rule and its length is the enclosed area, in any plane
pub fn vector_area(ring: &Ring) -> Vector3<f64> {
    let mut n = Vector3::zeros();
    for (a, b) in ring.pairs() {
        n.x += (a.y - b.y) * (a.z + b.z);
        n.y += (a.z - b.z) * (a.x + b.x);
        n.z += (a.x - b.x) * (a.y + b.y);
    }
    n * 0.5
}

/// Unit normal of the ring's plane (Newell's method)
pub fn compute_normal(ring: &Ring) -> Result<Vector3<f64>> {
    compute_normal_with(ring, &Tolerances::default())
}

pub fn compute_normal_with(ring: &Ring, tolerances: &Tolerances) -> Result<Vector3<f64>> {
    let area = vector_area(ring);
    let magnitude = area.norm();
    let extent = ring.bounding_box().extent();

    if magnitude == 0.0
        || !magnitude.is_finite()
        || magnitude <= tolerances.normal_epsilon * extent * extent
    {
        tracing::warn!(magnitude, "ring has no usable normal");
        return Err(GeometryError::DegenerateGeometry {
            signed_area: magnitude,
        });
    }

    Ok(area / magnitude)
}

/// Centroid of a ring lying in an arbitrary plane.
///
/// The ring is projected into a frame built from its own normal, so the
/// result does not depend on how the plane is oriented in world space.
pub fn compute_planar_centroid(ring: &Ring) -> Result<Point> {
    compute_planar_centroid_with(ring, &Tolerances::default())
}

pub fn compute_planar_centroid_with(ring: &Ring, tolerances: &Tolerances) -> Result<Point> {
    let normal = compute_normal_with(ring, tolerances)?;
    let frame = PlaneFrame::from_normal(*ring.first(), normal);
    let (moment, area) = planar_moment(ring, &frame);
    moment_centroid(moment, area, ring.bounding_box().extent(), &frame, tolerances)
}

/// Signed area and first moment of a ring in `frame`.
///
/// Returns `(area * centroid, area)` without dividing, so rings with no area
/// contribute nothing and several rings can be combined by summing. The area
/// is signed with respect to the frame normal.
pub(crate) fn planar_moment(ring: &Ring, frame: &PlaneFrame) -> (Vector2<f64>, f64) {
    let projected: Vec<Point2<f64>> = ring.points().iter().map(|p| frame.project(p)).collect();
    let n = projected.len();
    let sums = ShoelaceSums::accumulate((0..n).map(|i| {
        let a = projected[i];
        let b = projected[(i + 1) % n];
        ((a.x, a.y), (b.x, b.y))
    }));

    let moment = Vector2::new(sums.x_numerator, sums.y_numerator) / 6.0;
    (moment, sums.signed_area())
}

/// Divide a summed moment by its area and lift the result out of `frame`
pub(crate) fn moment_centroid(
    moment: Vector2<f64>,
    area: f64,
    extent: f64,
    frame: &PlaneFrame,
    tolerances: &Tolerances,
) -> Result<Point> {
    ensure_area(area, extent, tolerances)?;
    let centroid = moment / area;
    if !centroid.x.is_finite() || !centroid.y.is_finite() {
        tracing::warn!(area, "planar centroid overflowed");
        return Err(GeometryError::DegenerateGeometry { signed_area: area });
    }
    Ok(frame.lift(&Point2::from(centroid)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> Ring {
        Ring::from_xy(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)], 0.0).unwrap()
    }

    #[test]
    fn test_square_centroid_and_area() {
        let ring = square();
        assert_eq!(compute_centroid(&ring).unwrap(), Point::new(2.0, 2.0, 0.0));
        assert_eq!(signed_area(&ring), 16.0);
        assert_eq!(compute_area(&ring), 16.0);
        assert_eq!(winding(&ring).unwrap(), Winding::CounterClockwise);
    }

    #[test]
    fn test_reversed_square() {
        let ring = square().reversed();
        assert_eq!(signed_area(&ring), -16.0);
        assert_eq!(compute_area(&ring), 16.0);
        assert_eq!(winding(&ring).unwrap(), Winding::Clockwise);
        assert_eq!(compute_centroid(&ring).unwrap(), Point::new(2.0, 2.0, 0.0));
    }

    #[test]
    fn test_triangle_centroid() {
        let ring = Ring::from_xy(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)], 0.0).unwrap();
        let c = compute_centroid(&ring).unwrap();
        assert_relative_eq!(c.x, 1.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(c.y, 1.0 / 3.0, epsilon = 1e-12);
        assert_eq!(compute_area(&ring), 0.5);
    }

    #[test]
    fn test_collinear_is_degenerate() {
        let ring = Ring::from_xy(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)], 0.0).unwrap();
        let err = compute_centroid(&ring).unwrap_err();
        assert!(err.is_degenerate());
        assert!(winding(&ring).is_err());
        assert!(compute_normal(&ring).is_err());
        assert_eq!(compute_area(&ring), 0.0);
    }

    #[test]
    fn test_near_zero_area_is_degenerate() {
        let ring = Ring::from_xy(&[(0.0, 0.0), (1.0e6, 0.0), (2.0e6, 1.0e-9)], 0.0).unwrap();
        assert!(compute_centroid(&ring).unwrap_err().is_degenerate());

        let loose = Tolerances {
            area_epsilon: 0.0,
            ..Tolerances::default()
        };
        assert!(compute_centroid_with(&ring, &loose).is_ok());
    }

    #[test]
    fn test_z_carried_from_first_vertex() {
        let ring = Ring::from_xy(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)], 7.5).unwrap();
        assert_eq!(compute_centroid(&ring).unwrap().z, 7.5);
    }

    #[test]
    fn test_normal_follows_winding() {
        let ring = square();
        assert_eq!(compute_normal(&ring).unwrap(), Vector3::z());
        assert_eq!(compute_normal(&ring.reversed()).unwrap(), -Vector3::z());
        assert_relative_eq!(vector_area(&ring).norm(), 16.0);
    }

    #[test]
    fn test_concave_ring() {
        // L-shape: 2x2 square with the top-right 1x1 quadrant removed
        let ring = Ring::from_xy(
            &[(0.0, 0.0), (2.0, 0.0), (2.0, 1.0), (1.0, 1.0), (1.0, 2.0), (0.0, 2.0)],
            0.0,
        )
        .unwrap();
        assert_eq!(compute_area(&ring), 3.0);
        let c = compute_centroid(&ring).unwrap();
        assert_relative_eq!(c.x, 5.0 / 6.0, epsilon = 1e-12);
        assert_relative_eq!(c.y, 5.0 / 6.0, epsilon = 1e-12);
        assert_eq!(compute_normal(&ring).unwrap(), Vector3::z());
    }

    #[test]
    fn test_planar_centroid_vertical_ring() {
        // Square standing in the x/z plane, invisible to the x/y shoelace
        let ring = Ring::new(vec![
            Point::new(0.0, 3.0, 0.0),
            Point::new(4.0, 3.0, 0.0),
            Point::new(4.0, 3.0, 4.0),
            Point::new(0.0, 3.0, 4.0),
        ])
        .unwrap();

        assert!(compute_centroid(&ring).is_err());

        let c = compute_planar_centroid(&ring).unwrap();
        assert_relative_eq!(c, Point::new(2.0, 3.0, 2.0), epsilon = 1e-12);
        assert_relative_eq!(vector_area(&ring).norm(), 16.0, epsilon = 1e-12);
    }
}
