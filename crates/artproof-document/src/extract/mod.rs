// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Per-format metadata extraction. One extractor per handling class; all of
// them read headers and structure only, never pixel data.

pub mod psd;
pub mod raster;
pub mod vector;

use std::io::{Cursor, Read};

use artproof_core::error::{ArtproofError, Result};
use artproof_core::{ExtractedMetadata, HandlingClass, UploadedFile};

/// Extract intrinsic metadata for a classified upload.
///
/// `Rejected` inputs never reach this point in practice — the orchestrator
/// short-circuits them with a format-rejection result before extraction.
pub fn extract_metadata(
    file: &UploadedFile,
    class: HandlingClass,
    required_dpi: u32,
) -> Result<ExtractedMetadata> {
    match class {
        HandlingClass::VectorDocument => vector::extract(file, required_dpi),
        HandlingClass::PhotoshopRaster => psd::extract(&file.bytes),
        HandlingClass::GenericRasterImage => raster::extract(file),
        HandlingClass::Rejected => Err(ArtproofError::UnsupportedFormat(
            file.media_type.clone(),
        )),
    }
}

// -- Big-endian cursor helpers shared by the PSD and raster density parsers --

pub(crate) fn read_u8(cursor: &mut Cursor<&[u8]>) -> Option<u8> {
    let mut buf = [0u8; 1];
    cursor.read_exact(&mut buf).ok()?;
    Some(buf[0])
}

pub(crate) fn read_u16_be(cursor: &mut Cursor<&[u8]>) -> Option<u16> {
    let mut buf = [0u8; 2];
    cursor.read_exact(&mut buf).ok()?;
    Some(u16::from_be_bytes(buf))
}

pub(crate) fn read_u32_be(cursor: &mut Cursor<&[u8]>) -> Option<u32> {
    let mut buf = [0u8; 4];
    cursor.read_exact(&mut buf).ok()?;
    Some(u32::from_be_bytes(buf))
}

// -- In-memory file fixtures shared across the engine's test modules --


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_class_yields_unsupported_format() {
        let file = fixtures::upload("text/plain", Some("notes.txt"), b"hello".to_vec());
        let err = extract_metadata(&file, HandlingClass::Rejected, 300).unwrap_err();
        assert!(matches!(err, ArtproofError::UnsupportedFormat(_)));
    }
}
