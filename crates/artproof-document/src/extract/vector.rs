// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Vector document (PDF/AI) metadata extraction using the `lopdf` crate.
//
// Only the first page's physical size matters: vector content renders at
// any resolution without quality loss, so the page size in points is
// translated to a pixel-equivalent at the target DPI for the dimension
// check and no resolution check is ever performed.

use artproof_core::error::{ArtproofError, Result};
use artproof_core::{ExtractedMetadata, UploadedFile};
use lopdf::{Document, Object, ObjectId};
use tracing::{debug, instrument};

use crate::units::points_to_pixels;

/// Read the first page's size in points and convert it to pixels at `dpi`.
#[instrument(skip_all, fields(bytes_len = file.byte_len()))]
pub fn extract(file: &UploadedFile, dpi: u32) -> Result<ExtractedMetadata> {
    let document = Document::load_mem(&file.bytes).map_err(|err| {
        ArtproofError::UnreadablePage(format!("failed to load document: {err}"))
    })?;

    let pages = document.get_pages();
    if pages.is_empty() {
        return Err(ArtproofError::NoPages);
    }

    // lopdf pages are keyed by 1-indexed page number; the BTreeMap keeps
    // them ordered, so the first value is the first page.
    let first_page_id = *pages.values().next().ok_or(ArtproofError::NoPages)?;
    let (width_pt, height_pt) = page_size_points(&document, first_page_id)?;

    let width_px = points_to_pixels(width_pt, dpi);
    let height_px = points_to_pixels(height_pt, dpi);
    debug!(width_pt, height_pt, width_px, height_px, "page size read");

    Ok(ExtractedMetadata {
        width_px,
        height_px,
        resolution_dpi: None,
        format_label: format_label(file),
    })
}

/// "AI" for Illustrator uploads; otherwise the declared media type, which
/// is what upload clients expect to see echoed back.
pub(crate) fn format_label(file: &UploadedFile) -> String {
    let is_ai = file.media_type.eq_ignore_ascii_case("application/illustrator")
        || file
            .name
            .as_deref()
            .is_some_and(|n| n.to_ascii_lowercase().ends_with(".ai"));
    if is_ai {
        "AI".to_string()
    } else {
        file.media_type.clone()
    }
}

/// Resolve the page's MediaBox, following the Parent chain for inherited
/// page attributes (PDF 32000-1 §7.7.3.4).
fn page_size_points(document: &Document, page_id: ObjectId) -> Result<(f64, f64)> {
    let mut node_id = page_id;
    loop {
        let dict = document
            .get_object(node_id)
            .and_then(Object::as_dict)
            .map_err(|err| {
                ArtproofError::UnreadablePage(format!("page object {node_id:?}: {err}"))
            })?;

        if let Ok(media_box) = dict.get(b"MediaBox") {
            return media_box_size(document, media_box);
        }

        match dict.get(b"Parent").and_then(Object::as_reference) {
            Ok(parent_id) => node_id = parent_id,
            Err(_) => {
                return Err(ArtproofError::UnreadablePage(
                    "page has no MediaBox".to_string(),
                ));
            }
        }
    }
}

/// Width and height of a `[x1 y1 x2 y2]` MediaBox rectangle in points.
fn media_box_size(document: &Document, media_box: &Object) -> Result<(f64, f64)> {
    let media_box = match media_box.as_reference() {
        Ok(id) => document.get_object(id).map_err(|err| {
            ArtproofError::UnreadablePage(format!("dangling MediaBox reference: {err}"))
        })?,
        Err(_) => media_box,
    };

    let rect = media_box.as_array().map_err(|err| {
        ArtproofError::UnreadablePage(format!("MediaBox is not an array: {err}"))
    })?;
    if rect.len() != 4 {
        return Err(ArtproofError::UnreadablePage(format!(
            "MediaBox has {} entries, expected 4",
            rect.len()
        )));
    }

    let mut corners = [0f64; 4];
    for (slot, entry) in corners.iter_mut().zip(rect) {
        *slot = number(entry).ok_or_else(|| {
            ArtproofError::UnreadablePage("non-numeric MediaBox entry".to_string())
        })?;
    }

    Ok(((corners[2] - corners[0]).abs(), (corners[3] - corners[1]).abs()))
}

fn number(object: &Object) -> Option<f64> {
    match object {
        Object::Integer(value) => Some(*value as f64),
        Object::Real(value) => Some(f64::from(*value)),
        _ => None,
    }
}
