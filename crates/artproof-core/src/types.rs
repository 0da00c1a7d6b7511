// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for artwork preflight validation.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A single uploaded artwork file as handed over by the HTTP layer.
///
/// The caller owns the file for the duration of one validation call; the
/// engine never retains the bytes beyond that call.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Declared media type (e.g. `application/pdf`). Empty when the upload
    /// client sent none.
    pub media_type: String,
    /// Original filename, if the client sent one.
    pub name: Option<String>,
    /// Raw file contents.
    pub bytes: Bytes,
}

impl UploadedFile {
    pub fn new(media_type: impl Into<String>, name: Option<String>, bytes: Bytes) -> Self {
        Self {
            media_type: media_type.into(),
            name,
            bytes,
        }
    }

    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// Lowercased filename extension, if any.
    pub fn extension(&self) -> Option<String> {
        let name = self.name.as_deref()?;
        std::path::Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
    }
}

/// How an uploaded file will be handled, derived deterministically from its
/// declared media type and filename. Recomputed per call, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlingClass {
    /// PDF-compatible page description (PDF, Illustrator, PostScript).
    VectorDocument,
    /// Adobe Photoshop raster document (.psd).
    PhotoshopRaster,
    /// Common raster image (JPEG, PNG, WEBP, TIFF).
    GenericRasterImage,
    /// Not a supported artwork format.
    Rejected,
}

/// Intrinsic dimensions and resolution read from a file's metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedMetadata {
    pub width_px: u32,
    pub height_px: u32,
    /// Embedded resolution in DPI. `None` for vector documents (resolution
    /// is not a meaningful concept for vector content) and for rasters that
    /// carry no density metadata.
    pub resolution_dpi: Option<u32>,
    /// Short label echoed back to the uploader ("AI", "PSD", "PNG", ...).
    pub format_label: String,
}

/// The verdict returned for one validation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: String,
    pub details: ResultDetails,
}

/// Measured values, thresholds, and remediation suggestions.
///
/// Wire contract: consumers depend on the camelCase field names
/// byte-for-byte, so the serde renames here must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_resolution: Option<u32>,
    pub required_width: u32,
    pub required_height: u32,
    pub required_resolution: u32,
    pub file_type: String,
    /// Never empty: at least one actionable or confirmatory line.
    pub suggestions: Vec<String>,
}
