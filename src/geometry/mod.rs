// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - boundary rings, planar faces and their measures

mod analytics;
mod bbox;
mod edge;
mod plane;
mod polygon;
mod ring;
pub mod shoelace;

pub use analytics::{analyze, analyze_batch, analyze_batch_with, analyze_with, FaceStats};
pub use bbox::BoundingBox;
pub use edge::Edge;
pub use plane::PlaneFrame;
pub use polygon::Polygon;
pub use ring::{Point, Ring, Winding};
pub use shoelace::{
    compute_area, compute_centroid, compute_centroid_with, compute_normal, compute_planar_centroid,
    signed_area, vector_area, winding,
};
