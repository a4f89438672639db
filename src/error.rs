// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types for face geometry

use thiserror::Error;

/// Errors raised while building or measuring rings and polygons
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Ring rejected before any computation
    #[error("Invalid ring: {reason}")]
    InvalidRing { reason: String },

    /// Enclosed area is zero or too small to divide by
    #[error("Degenerate geometry: signed area {signed_area:e} encloses no usable region")]
    DegenerateGeometry { signed_area: f64 },

    /// Ring `hole` (1-based; 0 is the outer ring) winds the wrong way
    #[error("Inconsistent winding at ring {hole} (0 is the outer ring)")]
    InconsistentWinding { hole: usize },

    /// Externally supplied normal or area is unusable
    #[error("Invalid polygon: {reason}")]
    InvalidPolygon { reason: String },
}

impl GeometryError {
    pub(crate) fn invalid_ring(reason: impl Into<String>) -> Self {
        Self::InvalidRing {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_polygon(reason: impl Into<String>) -> Self {
        Self::InvalidPolygon {
            reason: reason.into(),
        }
    }

    /// True for errors caused by zero-area input
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::DegenerateGeometry { .. })
    }
}

/// Result alias used across the geometry modules
pub type Result<T> = std::result::Result<T, GeometryError>;
