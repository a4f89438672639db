// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Face analytics and statistics

use super::{Polygon, Winding};
use crate::config::Tolerances;
use crate::error::Result;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Face statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceStats {
    /// Net area (outer minus holes) in square units
    pub area: f64,
    /// Area of the outer ring, signed about the face normal
    pub signed_area: f64,
    /// Area-weighted centroid [x, y, z]
    pub centroid: [f64; 3],
    /// Unit normal [x, y, z]
    pub normal: [f64; 3],
    /// Total boundary length, holes included
    pub perimeter: f64,
    /// Bounding box [min_x, min_y, min_z, max_x, max_y, max_z]
    pub bbox: [f64; 6],
    pub vertex_count: usize,
    pub edge_count: usize,
    pub hole_count: usize,
    /// Winding of the outer ring about the face normal
    pub winding: Winding,
    pub layer: String,
}

impl FaceStats {
    /// Pretty print statistics
    pub fn print(&self) {
        println!("╔══════════════════════════════════════════════════════════╗");
        println!("║                  FACE ANALYTICS                          ║");
        println!("╠══════════════════════════════════════════════════════════╣");
        println!("║ Area:            {:>10.4} units²                   ║", self.area);
        println!("║ Signed Area:     {:>10.4} units²                   ║", self.signed_area);
        println!("║ Perimeter:       {:>10.4} units                    ║", self.perimeter);
        println!(
            "║ Centroid:        ({:>7.2}, {:>7.2}, {:>7.2})            ║",
            self.centroid[0], self.centroid[1], self.centroid[2]
        );
        println!(
            "║ Normal:          ({:>7.3}, {:>7.3}, {:>7.3})            ║",
            self.normal[0], self.normal[1], self.normal[2]
        );
        println!("║                                                          ║");
        println!("║ Bounding Box:                                            ║");
        println!(
            "║   Min: ({:>7.2}, {:>7.2}, {:>7.2})                      ║",
            self.bbox[0], self.bbox[1], self.bbox[2]
        );
        println!(
            "║   Max: ({:>7.2}, {:>7.2}, {:>7.2})                      ║",
            self.bbox[3], self.bbox[4], self.bbox[5]
        );
        println!("║                                                          ║");
        println!("║ Vertices:        {:>10}                              ║", self.vertex_count);
        println!("║ Edges:           {:>10}                              ║", self.edge_count);
        println!("║ Holes:           {:>10}                              ║", self.hole_count);
        println!(
            "║ Winding:         {:>10}                              ║",
            match self.winding {
                Winding::CounterClockwise => "CCW",
                Winding::Clockwise => "CW",
            }
        );
        if !self.layer.is_empty() {
            println!("║ Layer:           {:>10}                              ║", self.layer);
        }
        println!("╚══════════════════════════════════════════════════════════╝");
    }
}

/// Analyze a face and compute statistics
pub fn analyze(polygon: &Polygon) -> Result<FaceStats> {
    analyze_with(polygon, &Tolerances::default())
}

pub fn analyze_with(polygon: &Polygon, tolerances: &Tolerances) -> Result<FaceStats> {
    let centroid = polygon.centroid_with(tolerances)?;
    let normal = polygon.normal();
    let signed_area = polygon.signed_area();

    Ok(FaceStats {
        area: polygon.area(),
        signed_area,
        centroid: [centroid.x, centroid.y, centroid.z],
        normal: [normal.x, normal.y, normal.z],
        perimeter: polygon.perimeter(),
        bbox: polygon.bounding_box().to_array(),
        vertex_count: polygon.vertex_count(),
        edge_count: polygon.edges().count(),
        hole_count: polygon.hole_count(),
        winding: Winding::from_signed_area(signed_area),
        layer: polygon.layer().to_string(),
    })
}

/// Analyze independent faces in parallel; results keep input order
pub fn analyze_batch(polygons: &[Polygon]) -> Vec<Result<FaceStats>> {
    analyze_batch_with(polygons, &Tolerances::default())
}

pub fn analyze_batch_with(polygons: &[Polygon], tolerances: &Tolerances) -> Vec<Result<FaceStats>> {
    let results: Vec<Result<FaceStats>> = polygons
        .par_iter()
        .map(|polygon| analyze_with(polygon, tolerances))
        .collect();

    let failed = results.iter().filter(|r| r.is_err()).count();
    tracing::debug!(faces = polygons.len(), failed, "batch analysis finished");
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Ring};

    fn square(size: f64) -> Polygon {
        let ring = Ring::from_xy(&[(0.0, 0.0), (size, 0.0), (size, size), (0.0, size)], 0.0).unwrap();
        Polygon::new(ring, Vec::new()).unwrap()
    }

    #[test]
    fn test_analyze_square() {
        let stats = analyze(&square(4.0).with_layer("Floor")).unwrap();

        assert_eq!(stats.area, 16.0);
        assert_eq!(stats.signed_area, 16.0);
        assert_eq!(stats.perimeter, 16.0);
        assert_eq!(stats.normal, [0.0, 0.0, 1.0]);
        assert_eq!(stats.bbox, [0.0, 0.0, 0.0, 4.0, 4.0, 0.0]);
        assert_eq!(stats.vertex_count, 4);
        assert_eq!(stats.edge_count, 4);
        assert_eq!(stats.hole_count, 0);
        assert_eq!(stats.winding, Winding::CounterClockwise);
        assert_eq!(stats.layer, "Floor");
        assert!((stats.centroid[0] - 2.0).abs() < 1e-9);
        assert!((stats.centroid[1] - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_vertical_face_signed_area() {
        // Square standing in the x/z plane
        let ring = Ring::new(vec![
            Point::new(0.0, 3.0, 0.0),
            Point::new(4.0, 3.0, 0.0),
            Point::new(4.0, 3.0, 4.0),
            Point::new(0.0, 3.0, 4.0),
        ])
        .unwrap();
        let stats = analyze(&Polygon::new(ring, Vec::new()).unwrap()).unwrap();

        assert!((stats.signed_area - 16.0).abs() < 1e-9);
        assert_eq!(stats.winding, Winding::CounterClockwise);
        assert_eq!(stats.normal, [0.0, -1.0, 0.0]);
    }

    #[test]
    fn test_analyze_batch_keeps_order() {
        let polygons: Vec<Polygon> = (1..=16).map(|i| square(i as f64)).collect();
        let results = analyze_batch(&polygons);

        assert_eq!(results.len(), 16);
        for (i, result) in results.iter().enumerate() {
            let size = (i + 1) as f64;
            assert_eq!(result.as_ref().unwrap().area, size * size);
        }
    }
}
