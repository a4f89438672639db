// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Point lists given on the command line

use crate::geometry::Point;
use anyhow::{bail, Context, Result};

/// Parse `"x,y[,z];x,y[,z];..."` into points; a missing z is 0
pub fn parse_points(text: &str) -> Result<Vec<Point>> {
    text.split(';')
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .enumerate()
        .map(|(index, chunk)| {
            parse_point(chunk).with_context(|| format!("Invalid point {}: '{}'", index, chunk))
        })
        .collect()
}

fn parse_point(chunk: &str) -> Result<Point> {
    let coords = chunk
        .split(',')
        .map(|c| c.trim().parse::<f64>().context("coordinate is not a number"))
        .collect::<Result<Vec<f64>>>()?;

    match coords.as_slice() {
        [x, y] => Ok(Point::new(*x, *y, 0.0)),
        [x, y, z] => Ok(Point::new(*x, *y, *z)),
        _ => bail!("expected 2 or 3 coordinates, got {}", coords.len()),
    }
}
