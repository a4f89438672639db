// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Planar faces bounded by an outer ring and optional holes

use super::shoelace::{compute_normal_with, ensure_area, moment_centroid, planar_moment, vector_area};
use super::{BoundingBox, Edge, PlaneFrame, Point, Ring, Winding};
use crate::config::Tolerances;
use crate::error::{GeometryError, Result};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Planar face: outer boundary, holes, unit normal, net area and layer name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PolygonParts")]
pub struct Polygon {
    outer: Ring,
    inner: Vec<Ring>,
    normal: Vector3<f64>,
    area: f64,
    layer: String,
}

/// Serialized form, checked by [`Polygon::from_parts`] on the way in
#[derive(Deserialize)]
struct PolygonParts {
    outer: Ring,
    #[serde(default)]
    inner: Vec<Ring>,
    normal: Vector3<f64>,
    area: f64,
    #[serde(default)]
    layer: String,
}

impl TryFrom<PolygonParts> for Polygon {
    type Error = GeometryError;

    fn try_from(parts: PolygonParts) -> Result<Self> {
        Polygon::from_parts(parts.outer, parts.inner, parts.normal, parts.area, parts.layer)
    }
}

/// Total hole area, rejecting holes with no area or holes covering the face
fn hole_area(outer: &Ring, inner: &[Ring], tolerances: &Tolerances) -> Result<f64> {
    let mut total = 0.0;
    for (index, ring) in inner.iter().enumerate() {
        let area = vector_area(ring).norm();
        let extent = ring.bounding_box().extent();
        if area == 0.0 || area <= tolerances.normal_epsilon * extent * extent {
            return Err(GeometryError::invalid_polygon(format!(
                "hole {} encloses no area",
                index + 1
            )));
        }
        total += area;
    }

    let outer_area = vector_area(outer).norm();
    if !inner.is_empty() && total >= outer_area {
        return Err(GeometryError::invalid_polygon(format!(
            "holes cover {} of an outer area of {}",
            total, outer_area
        )));
    }
    Ok(total)
}

impl Polygon {
    /// Build a face, deriving the normal from the outer ring and the area
    /// as outer area minus hole areas
    pub fn new(outer: Ring, inner: Vec<Ring>) -> Result<Self> {
        Self::with_tolerances(outer, inner, &Tolerances::default())
    }

    pub fn with_tolerances(outer: Ring, inner: Vec<Ring>, tolerances: &Tolerances) -> Result<Self> {
        let normal = compute_normal_with(&outer, tolerances)?;
        let holes = hole_area(&outer, &inner, tolerances)?;
        let area = vector_area(&outer).norm() - holes;

        tracing::debug!(
            vertices = outer.len(),
            holes = inner.len(),
            area,
            "built polygon"
        );

        Ok(Self {
            outer,
            inner,
            normal,
            area,
            layer: String::new(),
        })
    }

    /// Build a face from values reported by an external modeler
    pub fn from_parts(
        outer: Ring,
        inner: Vec<Ring>,
        normal: Vector3<f64>,
        area: f64,
        layer: impl Into<String>,
    ) -> Result<Self> {
        let length = normal.norm();
        if length == 0.0 || !length.is_finite() {
            return Err(GeometryError::invalid_polygon(format!(
                "normal {:?} has no direction",
                normal.as_slice()
            )));
        }
        if !area.is_finite() || area < 0.0 {
            return Err(GeometryError::invalid_polygon(format!(
                "area must be finite and non-negative, got {}",
                area
            )));
        }
        hole_area(&outer, &inner, &Tolerances::default())?;

        Ok(Self {
            outer,
            inner,
            normal: normal / length,
            area,
            layer: layer.into(),
        })
    }

    pub fn with_layer(mut self, layer: impl Into<String>) -> Self {
        self.layer = layer.into();
        self
    }

    pub fn outer(&self) -> &Ring {
        &self.outer
    }

    pub fn inner(&self) -> &[Ring] {
        &self.inner
    }

    pub fn normal(&self) -> Vector3<f64> {
        self.normal
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn layer(&self) -> &str {
        &self.layer
    }

    pub fn hole_count(&self) -> usize {
        self.inner.len()
    }

    /// Every ring, outer first
    pub fn rings(&self) -> impl Iterator<Item = &Ring> + '_ {
        std::iter::once(&self.outer).chain(self.inner.iter())
    }

    /// All boundary points, outer ring first
    pub fn vertices(&self) -> impl Iterator<Item = &Point> + '_ {
        self.rings().flat_map(|ring| ring.points().iter())
    }

    pub fn vertex_count(&self) -> usize {
        self.rings().map(Ring::len).sum()
    }

    /// All boundary edges, outer ring first
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.rings().flat_map(|ring| ring.edges())
    }

    /// Length of the outer boundary plus every hole boundary
    pub fn perimeter(&self) -> f64 {
        self.rings().map(Ring::perimeter).sum()
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.outer.bounding_box()
    }

    /// Area of the outer ring, signed about the face normal
    pub fn signed_area(&self) -> f64 {
        vector_area(&self.outer).dot(&self.normal)
    }

    /// Frame in the face plane, anchored at the first outer vertex
    pub fn frame(&self) -> PlaneFrame {
        PlaneFrame::from_normal(*self.outer.first(), self.normal)
    }

    /// Area-weighted centroid with holes subtracted
    pub fn centroid(&self) -> Result<Point> {
        self.centroid_with(&Tolerances::default())
    }

    pub fn centroid_with(&self, tolerances: &Tolerances) -> Result<Point> {
        let frame = self.frame();
        let extent = self.bounding_box().extent();

        let (outer_moment, outer_area) = planar_moment(&self.outer, &frame);
        ensure_area(outer_area, extent, tolerances)?;
        let mut moment = outer_moment * outer_area.signum();
        let mut area = outer_area.abs();

        for ring in &self.inner {
            let (hole_moment, hole_area) = planar_moment(ring, &frame);
            moment -= hole_moment * hole_area.signum();
            area -= hole_area.abs();
        }

        moment_centroid(moment, area, extent, &frame, tolerances)
    }

    /// Require a counter-clockwise outer ring about the normal and holes
    /// wound the other way
    pub fn check_winding(&self) -> Result<()> {
        let outer = Winding::from_signed_area(self.signed_area());
        if outer != Winding::CounterClockwise {
            tracing::warn!("outer ring winds against the face normal");
            return Err(GeometryError::InconsistentWinding { hole: 0 });
        }

        for (index, ring) in self.inner.iter().enumerate() {
            let hole = Winding::from_signed_area(vector_area(ring).dot(&self.normal));
            if hole != outer.reversed() {
                tracing::warn!(hole = index + 1, "hole winds with the outer ring");
                return Err(GeometryError::InconsistentWinding { hole: index + 1 });
            }
        }
        Ok(())
    }

    /// Same face moved by `offset`; area and normal are unchanged
    pub fn translated(&self, offset: &Vector3<f64>) -> Self {
        Self {
            outer: self.outer.translated(offset),
            inner: self.inner.iter().map(|ring| ring.translated(offset)).collect(),
            normal: self.normal,
            area: self.area,
            layer: self.layer.clone(),
        }
    }
}
