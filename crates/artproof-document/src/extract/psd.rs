// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Photoshop document (PSD) metadata extraction.
//
// Reads the fixed 26-byte file header for the canvas size and walks the
// image resource section for the embedded resolution (resource 1005,
// ResolutionInfo). Layer and pixel data are never touched.
//
// Layout reference: Adobe Photoshop File Formats Specification.

use std::io::{Cursor, Seek, SeekFrom};

use artproof_core::ExtractedMetadata;
use artproof_core::error::{ArtproofError, Result};
use tracing::{debug, instrument};

use super::{read_u8, read_u16_be, read_u32_be};

/// PSD file signature.
const SIGNATURE: &[u8; 4] = b"8BPS";

/// Image resource block signature.
const RESOURCE_SIGNATURE: &[u8; 4] = b"8BIM";

/// Image resource ID of the ResolutionInfo structure.
const RESOLUTION_INFO_ID: u16 = 1005;

/// Total length of the PSD file header, including the signature.
const HEADER_LEN: u64 = 26;

#[instrument(skip_all, fields(bytes_len = data.len()))]
pub fn extract(data: &[u8]) -> Result<ExtractedMetadata> {
    let (width, height) = parse_header(data).ok_or_else(|| {
        ArtproofError::UnreadableMetadata("truncated or malformed PSD header".to_string())
    })?;
    if width == 0 || height == 0 {
        return Err(ArtproofError::UnreadableMetadata(
            "zero canvas size in PSD header".to_string(),
        ));
    }

    // A missing or unreadable resolution is not an error: the document may
    // simply have no ResolutionInfo resource.
    let resolution_dpi = parse_resolution(data);
    debug!(width, height, ?resolution_dpi, "PSD header read");

    Ok(ExtractedMetadata {
        width_px: width,
        height_px: height,
        resolution_dpi,
        format_label: "PSD".to_string(),
    })
}

/// Canvas (width, height) from the file header.
///
/// Header layout: signature(4) version(2) reserved(6) channels(2)
/// height(4) width(4) depth(2) colorMode(2), all big-endian.
fn parse_header(data: &[u8]) -> Option<(u32, u32)> {
    if data.len() < HEADER_LEN as usize || &data[..4] != SIGNATURE {
        return None;
    }
    let mut cursor = Cursor::new(data);
    cursor.seek(SeekFrom::Start(14)).ok()?;
    let height = read_u32_be(&mut cursor)?;
    let width = read_u32_be(&mut cursor)?;
    Some((width, height))
}

/// Horizontal DPI from the ResolutionInfo image resource, if present.
fn parse_resolution(data: &[u8]) -> Option<u32> {
    let mut cursor = Cursor::new(data);
    cursor.seek(SeekFrom::Start(HEADER_LEN)).ok()?;

    // Color mode data section: length-prefixed, skipped whole.
    let color_mode_len = read_u32_be(&mut cursor)?;
    cursor
        .seek(SeekFrom::Current(i64::from(color_mode_len)))
        .ok()?;

    let resources_len = read_u32_be(&mut cursor)?;
    let resources_end = cursor.position() + u64::from(resources_len);

    while cursor.position() < resources_end {
        let block_start = cursor.position();

        let mut signature = [0u8; 4];
        std::io::Read::read_exact(&mut cursor, &mut signature).ok()?;
        if &signature != RESOURCE_SIGNATURE {
            return None;
        }
        let id = read_u16_be(&mut cursor)?;

        // Pascal-string resource name, padded to an even total length.
        let name_len = read_u8(&mut cursor)?;
        let padded_name = if name_len % 2 == 0 {
            i64::from(name_len) + 1
        } else {
            i64::from(name_len)
        };
        cursor.seek(SeekFrom::Current(padded_name)).ok()?;

        let size = read_u32_be(&mut cursor)?;

        if id == RESOLUTION_INFO_ID {
            // hRes is dots per unit as 16.16 fixed point; hResUnit 1 means
            // per inch, 2 means per centimetre.
            let fixed = read_u32_be(&mut cursor)?;
            let unit = read_u16_be(&mut cursor)?;
            let dots_per_unit = f64::from(fixed) / 65_536.0;
            let dpi = match unit {
                1 => dots_per_unit,
                2 => dots_per_unit * 2.54,
                _ => return None,
            };
            let dpi = dpi.round() as u32;
            return (dpi > 0).then_some(dpi);
        }

        // Resource data is padded to an even byte boundary.
        let padded_size = u64::from(size) + u64::from(size % 2);
        cursor.seek(SeekFrom::Current(padded_size as i64)).ok()?;

        // A malformed block that doesn't advance would loop forever.
        if cursor.position() <= block_start {
            return None;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::fixtures::psd_bytes;

    #[test]
    fn header_dimensions_are_read() {
        let meta = extract(&psd_bytes(1200, 1050, None)).unwrap();
        assert_eq!(meta.width_px, 1200);
        assert_eq!(meta.height_px, 1050);
        assert_eq!(meta.format_label, "PSD");
    }

    #[test]
    fn resolution_info_resource_yields_dpi() {
        let meta = extract(&psd_bytes(1200, 1050, Some(300))).unwrap();
        assert_eq!(meta.resolution_dpi, Some(300));
    }

    #[test]
    fn missing_resolution_info_is_none() {
        let meta = extract(&psd_bytes(800, 600, None)).unwrap();
        assert_eq!(meta.resolution_dpi, None);
    }

    #[test]
    fn per_centimetre_resolution_converts_to_dpi() {
        // Build the fixture by hand: 118 dots per cm is ~300 DPI.
        let mut data = psd_bytes(100, 100, Some(118));
        // Patch hResUnit from 1 (ppi) to 2 (ppcm). The 16-byte payload is
        // the last thing in the fixture; hResUnit's low byte follows the
        // 4-byte fixed-point hRes value.
        let unit_offset = data.len() - 16 + 4 + 1;
        data[unit_offset] = 2;
        let meta = extract(&data).unwrap();
        assert_eq!(meta.resolution_dpi, Some(300));
    }

    #[test]
    fn wrong_signature_is_unreadable_metadata() {
        let mut data = psd_bytes(100, 100, None);
        data[..4].copy_from_slice(b"8BPX");
        let err = extract(&data).unwrap_err();
        assert!(matches!(err, ArtproofError::UnreadableMetadata(_)));
    }

    #[test]
    fn truncated_header_is_unreadable_metadata() {
        let err = extract(b"8BPS\x00\x01").unwrap_err();
        assert!(matches!(err, ArtproofError::UnreadableMetadata(_)));
    }

    #[test]
    fn zero_canvas_is_unreadable_metadata() {
        let err = extract(&psd_bytes(0, 100, None)).unwrap_err();
        assert!(matches!(err, ArtproofError::UnreadableMetadata(_)));
    }
}
