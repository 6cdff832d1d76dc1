//! Monochrome binarization of icon pixel buffers.
//!
//! Some symbols are drawn in color; the widget renders every icon
//! black-and-white. Per pixel, all three of R/G/B are forced to 255 when
//! the pixel's *original red channel* exceeds the threshold, else to 0.
//! Alpha passes through unchanged.
//!
//! Only the red channel is inspected. It is not a luminance threshold
//! and must not be replaced with one; shape colors are chosen against
//! this exact rule.

/// Red-channel cutoff: strictly greater maps to white.
pub const MONO_THRESHOLD: u8 = 200;

/// Binarize an RGBA8 buffer in place.
///
/// Trailing bytes that do not form a whole pixel are left untouched.
pub fn apply(data: &mut [u8]) {
    for pixel in data.chunks_exact_mut(4) {
        let level = if pixel[0] > MONO_THRESHOLD { 255 } else { 0 };
        pixel[0] = level;
        pixel[1] = level;
        pixel[2] = level;
        // pixel[3] (alpha) untouched
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_red_above_threshold_is_white() {
        let mut data = [201, 0, 0, 128];
        apply(&mut data);
        assert_eq!(data, [255, 255, 255, 128]);
    }

    #[test]
    fn test_red_at_threshold_is_black() {
        let mut data = [200, 255, 255, 64];
        apply(&mut data);
        assert_eq!(data, [0, 0, 0, 64]);
    }

    #[test]
    fn test_only_red_channel_is_inspected() {
        // Bright green/blue but dark red: still black
        let mut data = [10, 255, 255, 255];
        apply(&mut data);
        assert_eq!(data, [0, 0, 0, 255]);
    }

    #[test]
    fn test_channels_equal_and_binary_for_all_pixels() {
        let mut data: Vec<u8> = (0..=255u8)
            .flat_map(|level| [level, 255 - level, level / 2, level])
            .collect();
        apply(&mut data);

        for pixel in data.chunks_exact(4) {
            assert_eq!(pixel[0], pixel[1]);
            assert_eq!(pixel[1], pixel[2]);
            assert!(pixel[0] == 0 || pixel[0] == 255);
        }
    }

    #[test]
    fn test_alpha_unchanged() {
        let mut data = [255, 255, 255, 42, 0, 0, 0, 7];
        apply(&mut data);
        assert_eq!(data[3], 42);
        assert_eq!(data[7], 7);
    }
}
