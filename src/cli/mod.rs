// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI subsystem for Polyloop

pub mod points;
pub mod reporter;

pub use points::parse_points;
pub use reporter::Reporter;
