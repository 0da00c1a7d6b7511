// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Artproof.

use thiserror::Error;

/// Top-level error type for all Artproof operations.
#[derive(Debug, Error)]
pub enum ArtproofError {
    // -- Classification --
    #[error("unsupported artwork format: {0}")]
    UnsupportedFormat(String),

    // -- Vector document extraction --
    #[error("document has no pages")]
    NoPages,

    #[error("could not read first page: {0}")]
    UnreadablePage(String),

    // -- Raster extraction --
    #[error("could not read raster metadata: {0}")]
    UnreadableMetadata(String),

    #[error("raster decode failed: {0}")]
    Processing(String),

    // -- Plumbing --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ArtproofError>;
