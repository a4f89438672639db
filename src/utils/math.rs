// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Math utilities

use nalgebra::{Point3, Vector3};

/// Check that every coordinate of a point is finite
pub fn is_finite_point(p: &Point3<f64>) -> bool {
    p.x.is_finite() && p.y.is_finite() && p.z.is_finite()
}

/// Index (0 = x, 1 = y, 2 = z) of the axis least aligned with `v`
pub fn least_aligned_axis(v: &Vector3<f64>) -> usize {
    let a = v.abs();
    if a.x <= a.y && a.x <= a.z {
        0
    } else if a.y <= a.z {
        1
    } else {
        2
    }
}

/// Unit vector along the given world axis
pub fn axis(index: usize) -> Vector3<f64> {
    match index {
        0 => Vector3::x(),
        1 => Vector3::y(),
        _ => Vector3::z(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_finite_point() {
        assert!(is_finite_point(&Point3::new(1.0, -2.0, 0.0)));
        assert!(!is_finite_point(&Point3::new(f64::NAN, 0.0, 0.0)));
        assert!(!is_finite_point(&Point3::new(0.0, 0.0, f64::INFINITY)));
    }

    #[test]
    fn test_least_aligned_axis() {
        assert_eq!(least_aligned_axis(&Vector3::new(0.0, 0.0, 1.0)), 0);
        assert_eq!(least_aligned_axis(&Vector3::new(1.0, 0.1, 1.0)), 1);
        assert_eq!(least_aligned_axis(&Vector3::new(1.0, 1.0, 0.0)), 2);
        assert_eq!(axis(2), Vector3::z());
    }
}
