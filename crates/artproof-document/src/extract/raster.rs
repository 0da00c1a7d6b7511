// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Generic raster image metadata extraction.
//
// Dimensions come from the `image` crate's header probe — no pixel decode.
// Embedded density is format-specific: the JFIF APP0 segment for JPEG, the
// pHYs chunk for PNG, and EXIF resolution tags for TIFF (and for JPEGs
// whose JFIF segment carries no density).

use std::io::{Cursor, Read, Seek, SeekFrom};

use artproof_core::ExtractedMetadata;
use artproof_core::error::{ArtproofError, Result};
use image::ImageReader;
use tracing::{debug, instrument};

use super::{read_u8, read_u16_be, read_u32_be};

const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

#[instrument(skip_all, fields(bytes_len = file.byte_len(), media_type = %file.media_type))]
pub fn extract(file: &artproof_core::UploadedFile) -> Result<ExtractedMetadata> {
    let reader = ImageReader::new(Cursor::new(file.bytes.as_ref()))
        .with_guessed_format()
        .map_err(|err| ArtproofError::Processing(format!("could not sniff image format: {err}")))?;

    let (width_px, height_px) = reader.into_dimensions().map_err(|err| {
        ArtproofError::Processing(format!("could not decode image header: {err}"))
    })?;

    let resolution_dpi = density_dpi(&file.bytes);
    let format_label = format_label(file);
    debug!(width_px, height_px, ?resolution_dpi, %format_label, "raster header read");

    Ok(ExtractedMetadata {
        width_px,
        height_px,
        resolution_dpi,
        format_label,
    })
}

/// Media type stripped of its `image/` prefix, uppercased; falls back to
/// the filename extension when the declared type is absent or unrecognized.
pub(crate) fn format_label(file: &artproof_core::UploadedFile) -> String {
    if let Some(subtype) = file.media_type.strip_prefix("image/") {
        if !subtype.is_empty() {
            return subtype.to_ascii_uppercase();
        }
    }
    file.extension()
        .map(|ext| ext.to_ascii_uppercase())
        .unwrap_or_else(|| "UNKNOWN".to_string())
}

/// Embedded density in DPI, if the file carries any.
fn density_dpi(data: &[u8]) -> Option<u32> {
    if data.starts_with(&[0xFF, 0xD8]) {
        return jfif_density(data).or_else(|| exif_density(data));
    }
    if data.starts_with(PNG_MAGIC) {
        return phys_density(data);
    }
    if data.starts_with(b"II*\0") || data.starts_with(b"MM\0*") {
        return exif_density(data);
    }
    None
}

/// Density from the JPEG JFIF APP0 segment.
///
/// Walks the marker segments up to start-of-scan. JFIF units: 0 is aspect
/// ratio only (no physical density), 1 is dots per inch, 2 is dots per cm.
fn jfif_density(data: &[u8]) -> Option<u32> {
    let mut cursor = Cursor::new(data);
    cursor.seek(SeekFrom::Start(2)).ok()?; // past SOI

    loop {
        if read_u8(&mut cursor)? != 0xFF {
            return None;
        }
        // 0xFF fill bytes may pad between segments.
        let mut kind = read_u8(&mut cursor)?;
        while kind == 0xFF {
            kind = read_u8(&mut cursor)?;
        }
        if kind == 0xDA || kind == 0xD9 {
            return None; // start-of-scan / end-of-image
        }

        let len = read_u16_be(&mut cursor)?;
        if len < 2 {
            return None;
        }
        let body_start = cursor.position();

        if kind == 0xE0 {
            let mut ident = [0u8; 5];
            cursor.read_exact(&mut ident).ok()?;
            if &ident == b"JFIF\0" {
                cursor.seek(SeekFrom::Current(2)).ok()?; // version
                let units = read_u8(&mut cursor)?;
                let x_density = read_u16_be(&mut cursor)?;
                return match units {
                    1 => (x_density > 0).then_some(u32::from(x_density)),
                    2 => Some((f64::from(x_density) * 2.54).round() as u32),
                    _ => None,
                };
            }
        }

        cursor
            .seek(SeekFrom::Start(body_start + u64::from(len) - 2))
            .ok()?;
    }
}

/// Density from the PNG pHYs chunk (pixels per metre, unit flag 1).
fn phys_density(data: &[u8]) -> Option<u32> {
    let mut cursor = Cursor::new(data);
    cursor.seek(SeekFrom::Start(8)).ok()?; // past magic

    loop {
        let len = read_u32_be(&mut cursor)?;
        let mut chunk_type = [0u8; 4];
        cursor.read_exact(&mut chunk_type).ok()?;

        match &chunk_type {
            b"pHYs" => {
                let x_ppm = read_u32_be(&mut cursor)?;
                let _y_ppm = read_u32_be(&mut cursor)?;
                let unit = read_u8(&mut cursor)?;
                return (unit == 1).then(|| (f64::from(x_ppm) * 0.0254).round() as u32);
            }
            // Metadata chunks all precede the image data.
            b"IDAT" | b"IEND" => return None,
            _ => {
                cursor
                    .seek(SeekFrom::Current(i64::from(len) + 4)) // data + CRC
                    .ok()?;
            }
        }
    }
}

/// Density from EXIF XResolution/ResolutionUnit (TIFF, or JPEG EXIF).
fn exif_density(data: &[u8]) -> Option<u32> {
    let exif = exif::Reader::new()
        .read_from_container(&mut Cursor::new(data))
        .ok()?;

    let resolution = exif.get_field(exif::Tag::XResolution, exif::In::PRIMARY)?;
    let value = match &resolution.value {
        exif::Value::Rational(rationals) => rationals.first()?.to_f64(),
        _ => return None,
    };

    // ResolutionUnit 3 is centimetres; 2 (or absent) is inches.
    let unit = exif
        .get_field(exif::Tag::ResolutionUnit, exif::In::PRIMARY)
        .and_then(|field| field.value.get_uint(0));
    let dpi = match unit {
        Some(3) => value * 2.54,
        _ => value,
    };

    (dpi > 0.0).then(|| dpi.round() as u32)
}
