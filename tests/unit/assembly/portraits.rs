//! Tests for character portrait cropping and scaling

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use woodsheet::PipelineError;
    use woodsheet::assembly::portraits::{build_portrait, leader_portrait, scout_portrait};

    // Two frames side by side: frame 0 is a red/blue checker of 8px cells, frame 1 is green
    fn two_frame_sheet(frame: u32) -> RgbaImage {
        RgbaImage::from_fn(frame * 2, frame, |x, y| {
            if x >= frame {
                Rgba([0, 255, 0, 255])
            } else if (x / 8 + y / 8) % 2 == 0 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 0, 255, 255])
            }
        })
    }

    // Tests leader portrait downsizes the first player frame to 32px
    // Verified by cropping the full sheet width before scaling
    #[test]
    fn test_leader_portrait() {
        let portrait = leader_portrait(&two_frame_sheet(48)).unwrap();

        assert_eq!(portrait.dimensions(), (32, 32));
        assert_eq!(portrait.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert!(portrait.pixels().all(|p| p.0 != [0, 255, 0, 255]));
    }

    // Tests nearest sampling keeps only source colors
    // Verified by switching to a smoothing filter
    #[test]
    fn test_nearest_sampling() {
        let portrait = leader_portrait(&two_frame_sheet(48)).unwrap();

        assert!(
            portrait
                .pixels()
                .all(|p| p.0 == [255, 0, 0, 255] || p.0 == [0, 0, 255, 255])
        );
    }

    // Tests scout portrait is the first slime frame unchanged
    // Verified by resizing even when sizes already match
    #[test]
    fn test_scout_portrait() {
        let sheet = two_frame_sheet(32);
        let portrait = scout_portrait(&sheet).unwrap();

        assert_eq!(portrait.dimensions(), (32, 32));
        for (x, y, pixel) in portrait.enumerate_pixels() {
            assert_eq!(pixel, sheet.get_pixel(x, y));
        }
    }

    // Tests sheets smaller than one frame are rejected
    // Verified by letting the crop clamp to the sheet bounds
    #[test]
    fn test_sheet_too_small() {
        let result = leader_portrait(&RgbaImage::new(40, 48));

        assert!(matches!(result, Err(PipelineError::InvalidSourceData { .. })));
    }

    // Tests zero frame and portrait sizes are rejected
    // Verified by removing the size checks
    #[test]
    fn test_zero_sizes() {
        let sheet = RgbaImage::new(16, 16);

        assert!(build_portrait(&sheet, 0, 8).is_err());
        assert!(build_portrait(&sheet, 8, 0).is_err());
        assert_eq!(build_portrait(&sheet, 16, 4).unwrap().dimensions(), (4, 4));
    }
}
