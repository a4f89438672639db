// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Polyloop
//!
//! Geometry of planar CAD faces: boundary rings with holes, shoelace
//! signed area and centroid, Newell normals and per-face statistics.
//! Rings come from an external modeler; this crate only measures them.

pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod utils;

pub use config::Tolerances;
pub use error::{GeometryError, Result};
pub use geometry::{
    analyze, analyze_batch, compute_area, compute_centroid, compute_normal, FaceStats, Point,
    Polygon, Ring, Winding,
};

/// Measure a face given as an outer ring and holes of raw points
pub fn measure(outer: Vec<Point>, holes: Vec<Vec<Point>>) -> Result<FaceStats> {
    let outer = Ring::new(outer)?;
    let inner = holes.into_iter().map(Ring::new).collect::<Result<Vec<_>>>()?;
    analyze(&Polygon::new(outer, inner)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_square() {
        let outer = vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(4.0, 0.0, 0.0),
            Point::new(4.0, 4.0, 0.0),
            Point::new(0.0, 4.0, 0.0),
        ];
        let stats = measure(outer, Vec::new()).unwrap();
        assert_eq!(stats.area, 16.0);
    }

    #[test]
    fn test_measure_rejects_short_hole() {
        let outer = vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(4.0, 0.0, 0.0),
            Point::new(4.0, 4.0, 0.0),
        ];
        let hole = vec![Point::new(1.0, 1.0, 0.0)];
        assert!(matches!(
            measure(outer, vec![hole]),
            Err(GeometryError::InvalidRing { .. })
        ));
    }
}
