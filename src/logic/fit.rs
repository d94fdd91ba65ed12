//! Viewer image scaling math
//!
//! Pure functions for fitting an image inside the viewer area.

/// Fraction of the viewport the displayed image may occupy
pub const VIEWPORT_FRACTION: f32 = 0.7;

/// Fit natural pixel dimensions within a viewport
///
/// Shrinks by the width ratio first, then re-checks the already
/// width-adjusted height against the height bound. Images that fit both
/// bounds keep their natural size; nothing is ever upscaled.
///
/// # Arguments
/// * `natural` - Natural (width, height) of the decoded image in px
/// * `viewport` - Full viewport (width, height) in px; the image is
///   held to `VIEWPORT_FRACTION` of each side
///
/// # Examples
/// ```
/// use galtui::logic::fit::fit_within;
///
/// // Wider than 70% of the viewport: width ratio drives the shrink
/// assert_eq!(fit_within((2000, 1000), (1000, 1000)), (700, 350));
///
/// // Already inside the bounds: untouched
/// assert_eq!(fit_within((100, 50), (1000, 1000)), (100, 50));
/// ```
pub fn fit_within(natural: (u32, u32), viewport: (u32, u32)) -> (u32, u32) {
    let max_width = viewport.0 as f32 * VIEWPORT_FRACTION;
    let max_height = viewport.1 as f32 * VIEWPORT_FRACTION;

    let mut width = natural.0 as f32;
    let mut height = natural.1 as f32;

    if width > max_width {
        height = height * max_width / width;
        width = max_width;
    }

    if height > max_height {
        width = width * max_height / height;
        height = max_height;
    }

    (width.round() as u32, height.round() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_image_shrinks_by_width_first() {
        // maxWidth = 700, ratio 0.35 applies to both sides
        assert_eq!(fit_within((2000, 1000), (1000, 1000)), (700, 350));
    }

    #[test]
    fn test_tall_image_shrinks_by_height() {
        // Width passes the first check, height drives the shrink
        assert_eq!(fit_within((500, 2000), (1000, 1000)), (175, 700));
    }

    #[test]
    fn test_oversized_both_ways_rechecks_height() {
        // Width pass scales 3000x2000 down to 700x466.7, which already
        // clears the height bound, so no second shrink happens
        assert_eq!(fit_within((3000, 2000), (1000, 1000)), (700, 467));
    }

    #[test]
    fn test_extreme_aspect_needs_both_passes() {
        // After the width pass (700x2333.3) the height is still over the
        // bound and shrinks again
        let (width, height) = fit_within((3000, 10000), (1000, 1000));
        assert_eq!(height, 700);
        assert!(width < 700);
    }

    #[test]
    fn test_small_image_is_never_upscaled() {
        assert_eq!(fit_within((100, 50), (1000, 1000)), (100, 50));
        assert_eq!(fit_within((700, 700), (1000, 1000)), (700, 700));
    }

    #[test]
    fn test_zero_dimensions_pass_through() {
        assert_eq!(fit_within((0, 0), (1000, 1000)), (0, 0));
    }

    #[test]
    fn test_result_respects_both_bounds() {
        let cases = [
            ((4096, 16), (800, 600)),
            ((16, 4096), (800, 600)),
            ((1920, 1080), (80, 24)),
            ((333, 777), (1234, 567)),
        ];

        for (natural, viewport) in cases {
            let (width, height) = fit_within(natural, viewport);
            let max_width = (viewport.0 as f32 * VIEWPORT_FRACTION).round() as u32;
            let max_height = (viewport.1 as f32 * VIEWPORT_FRACTION).round() as u32;
            assert!(width <= max_width, "width {} exceeds bound {}", width, max_width);
            assert!(height <= max_height, "height {} exceeds bound {}", height, max_height);
        }
    }
}
