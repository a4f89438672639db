// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Numeric tolerance configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file looked up by [`Tolerances::load`]
pub const CONFIG_FILE: &str = "polyloop.toml";

/// Tolerances used to decide when geometry is degenerate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerances {
    /// Signed area at or below `area_epsilon * extent²` counts as zero,
    /// where `extent` is the largest side of the ring's bounding box
    pub area_epsilon: f64,
    /// Newell vectors at or below `normal_epsilon * extent²` have no direction
    pub normal_epsilon: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            area_epsilon: 1e-12,
            normal_epsilon: 1e-12,
        }
    }
}

impl Tolerances {
    /// Parse tolerances from TOML text; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let tolerances: Tolerances =
            toml::from_str(content).context("Failed to parse tolerance config")?;
        tolerances.validate()?;
        Ok(tolerances)
    }

    /// Load tolerances from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))
    }

    /// Load tolerances with environment variable overrides
    pub fn load() -> Result<Self> {
        let mut tolerances = if PathBuf::from(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };

        if let Ok(value) = std::env::var("POLYLOOP_AREA_EPSILON") {
            tolerances.area_epsilon = value
                .parse()
                .with_context(|| format!("POLYLOOP_AREA_EPSILON is not a number: {}", value))?;
        }

        if let Ok(value) = std::env::var("POLYLOOP_NORMAL_EPSILON") {
            tolerances.normal_epsilon = value
                .parse()
                .with_context(|| format!("POLYLOOP_NORMAL_EPSILON is not a number: {}", value))?;
        }

        tolerances.validate()?;
        Ok(tolerances)
    }

    /// Save tolerances to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("area_epsilon", self.area_epsilon),
            ("normal_epsilon", self.normal_epsilon),
        ] {
            if !value.is_finite() || value < 0.0 {
                anyhow::bail!("{} must be a finite non-negative number, got {}", name, value);
            }
        }
        Ok(())
    }
}
