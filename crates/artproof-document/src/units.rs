// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unit conversion between document points and pixels.

/// Points per inch in PDF/PostScript page geometry.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Convert a page dimension in points to pixels at the given resolution.
///
/// Page sizes are non-negative, so `f64::round` (half away from zero)
/// behaves as round-half-up for every input this ever sees.
pub fn points_to_pixels(value_pt: f64, dpi: u32) -> u32 {
    (value_pt / POINTS_PER_INCH * f64::from(dpi)).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_inch_at_target_dpi() {
        assert_eq!(points_to_pixels(72.0, 300), 300);
    }

    #[test]
    fn us_letter_width_at_300_dpi() {
        assert_eq!(points_to_pixels(612.0, 300), 2550);
    }

    #[test]
    fn us_letter_height_at_300_dpi() {
        assert_eq!(points_to_pixels(792.0, 300), 3300);
    }

    #[test]
    fn small_page_rounds_to_nearest_pixel() {
        // 200pt at 300 DPI is 833.33px.
        assert_eq!(points_to_pixels(200.0, 300), 833);
    }

    #[test]
    fn zero_is_zero() {
        assert_eq!(points_to_pixels(0.0, 300), 0);
    }
}
