// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Artproof — core types, errors, and configuration shared across all crates.

pub mod config;
pub mod error;
pub mod remediation;
pub mod types;

pub use config::{AppConfig, ArtworkRequirements};
pub use error::ArtproofError;
pub use types::*;
