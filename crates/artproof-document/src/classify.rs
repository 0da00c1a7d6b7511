// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Format classification — assigns an upload to a handling class from its
// declared media type and filename.

use artproof_core::{HandlingClass, UploadedFile};

/// Declared media types handled as PDF-compatible page descriptions.
const VECTOR_TYPES: [&str; 3] = [
    "application/pdf",
    "application/illustrator",
    "application/postscript",
];

/// The Adobe Photoshop media type. Shares the `image/` prefix with the
/// generic raster set but needs its own header parser.
const PHOTOSHOP_TYPE: &str = "image/vnd.adobe.photoshop";

/// Declared media types handled as generic raster images.
const RASTER_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/webp", "image/tiff"];

/// Filename extensions treated as raster uploads when the declared media
/// type is generic or absent.
const RASTER_EXTENSIONS: [&str; 6] = [".jpg", ".jpeg", ".png", ".webp", ".tiff", ".tif"];

/// Classify an upload. Pure function of `media_type` and `name`.
///
/// The tie-break order matters: Illustrator files frequently arrive
/// declared as plain PostScript, so the `.ai` extension is checked before
/// accepted-type membership.
pub fn classify(file: &UploadedFile) -> HandlingClass {
    let media_type = file.media_type.to_ascii_lowercase();
    let name = file.name.as_deref().map(str::to_ascii_lowercase);

    if media_type == "application/postscript"
        && name.as_deref().is_some_and(|n| n.ends_with(".ai"))
    {
        return HandlingClass::VectorDocument;
    }

    if VECTOR_TYPES.contains(&media_type.as_str()) {
        return HandlingClass::VectorDocument;
    }

    if media_type == PHOTOSHOP_TYPE {
        return HandlingClass::PhotoshopRaster;
    }

    if RASTER_TYPES.contains(&media_type.as_str()) {
        return HandlingClass::GenericRasterImage;
    }

    if let Some(name) = name.as_deref() {
        if RASTER_EXTENSIONS.iter().any(|ext| name.ends_with(ext)) {
            return HandlingClass::GenericRasterImage;
        }
    }

    HandlingClass::Rejected
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn file(media_type: &str, name: Option<&str>) -> UploadedFile {
        UploadedFile::new(media_type, name.map(str::to_string), Bytes::new())
    }

    #[test]
    fn postscript_with_ai_extension_is_vector() {
        let class = classify(&file("application/postscript", Some("deck-art.AI")));
        assert_eq!(class, HandlingClass::VectorDocument);
    }

    #[test]
    fn pdf_and_illustrator_are_vector() {
        assert_eq!(
            classify(&file("application/pdf", None)),
            HandlingClass::VectorDocument
        );
        assert_eq!(
            classify(&file("application/illustrator", Some("art.ai"))),
            HandlingClass::VectorDocument
        );
    }

    #[test]
    fn photoshop_type_is_never_generic_raster() {
        let class = classify(&file("image/vnd.adobe.photoshop", Some("art.psd")));
        assert_eq!(class, HandlingClass::PhotoshopRaster);
    }

    #[test]
    fn accepted_raster_types_without_extension_are_generic() {
        for media_type in ["image/jpeg", "image/png", "image/webp", "image/tiff"] {
            assert_eq!(
                classify(&file(media_type, None)),
                HandlingClass::GenericRasterImage,
                "{media_type}"
            );
        }
    }

    #[test]
    fn raster_extension_overrides_generic_media_type() {
        let class = classify(&file("application/octet-stream", Some("photo.JPG")));
        assert_eq!(class, HandlingClass::GenericRasterImage);

        let class = classify(&file("", Some("scan.tif")));
        assert_eq!(class, HandlingClass::GenericRasterImage);
    }

    #[test]
    fn unknown_type_without_recognized_extension_is_rejected() {
        assert_eq!(
            classify(&file("text/plain", Some("notes.txt"))),
            HandlingClass::Rejected
        );
        assert_eq!(classify(&file("", None)), HandlingClass::Rejected);
    }

    #[test]
    fn classification_ignores_case_of_media_type() {
        assert_eq!(
            classify(&file("IMAGE/PNG", None)),
            HandlingClass::GenericRasterImage
        );
    }
}
