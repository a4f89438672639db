// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use crate::error::GeometryError;
use crate::geometry::{FaceStats, Point};
use colored::*;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Report a ring centroid
    pub fn report_centroid(centroid: &Point, signed_area: f64) {
        println!("\n{}", "━".repeat(60).bright_black());
        println!(
            "  {} {}",
            "Centroid:".bright_black(),
            Self::format_point(centroid).cyan()
        );
        println!(
            "  {} {}",
            "Signed area:".bright_black(),
            format!("{:.6}", signed_area).yellow()
        );
        println!("{}", "━".repeat(60).bright_black());
    }

    /// Report face statistics as a boxed table, with a winding check line
    pub fn report_face(stats: &FaceStats, winding: &Result<(), GeometryError>) {
        stats.print();
        match winding {
            Ok(()) => Self::success("Hole winding is consistent"),
            Err(err) => Self::report_warning(&err.to_string()),
        }
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    /// Report warning
    pub fn report_warning(message: &str) {
        println!("\n{} {}", "⚠️  Warning:".yellow().bold(), message);
    }

    /// Print success message
    pub fn success(message: &str) {
        println!("{} {}", "✅".green(), message.green());
    }

    fn format_point(point: &Point) -> String {
        format!("({:.6}, {:.6}, {:.6})", point.x, point.y, point.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_point() {
        assert_eq!(
            Reporter::format_point(&Point::new(2.0, 0.5, -1.0)),
            "(2.000000, 0.500000, -1.000000)"
        );
    }
}
