// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use serde::{Deserialize, Serialize};

/// Print-production minimums an artwork must meet.
///
/// Passed into the orchestrator on every call so test suites can exercise
/// other thresholds without touching engine internals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkRequirements {
    /// Minimum artwork width in pixels.
    pub min_width_px: u32,
    /// Minimum artwork height in pixels.
    pub min_height_px: u32,
    /// Target print resolution in dots per inch. Vector page sizes are
    /// translated to pixels at this resolution.
    pub required_dpi: u32,
}

impl Default for ArtworkRequirements {
    fn default() -> Self {
        Self {
            min_width_px: 1200,
            min_height_px: 1050,
            required_dpi: 300,
        }
    }
}

/// Settings for the validation server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// TCP port for the HTTP server.
    pub server_port: u16,
    /// Upper bound on accepted upload size in bytes.
    pub max_upload_bytes: usize,
    /// Thresholds applied to every validation.
    pub requirements: ArtworkRequirements,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_port: 3000,
            max_upload_bytes: 64 * 1024 * 1024, // 64 MiB
            requirements: ArtworkRequirements::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_requirements_match_production_thresholds() {
        let req = ArtworkRequirements::default();
        assert_eq!(req.min_width_px, 1200);
        assert_eq!(req.min_height_px, 1050);
        assert_eq!(req.required_dpi, 300);
    }
}
