// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// artproof-document — the artwork validation engine.
//
// Classifies an upload by declared media type and filename, extracts
// intrinsic width/height/resolution per format (lopdf for PDF-compatible
// vector documents, header parsing for PSD, the `image` crate for common
// rasters), and compares the result against print-production minimums.

pub mod classify;
pub mod evaluate;
pub mod extract;
pub mod units;
pub mod validate;

// Re-export the entry points so callers can use `artproof_document::validate_artwork`.
pub use classify::classify;
pub use evaluate::evaluate;
pub use units::points_to_pixels;
pub use validate::validate_artwork;
