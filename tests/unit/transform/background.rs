//! Tests for corner-seeded background clearing

#[cfg(test)]
mod tests {
    use crate::solid_tile;
    use image::{Rgba, RgbaImage};
    use woodsheet::transform::clear_corner_background;

    const MATTE: [u8; 4] = [60, 60, 60, 255];
    const SUBJECT: [u8; 4] = [200, 40, 40, 255];

    // 8x8 matte with a red ring (x,y in 2..=5) enclosing matte-colored pixels at 3..=4
    fn ringed_tile() -> RgbaImage {
        RgbaImage::from_fn(8, 8, |x, y| {
            let in_outer = (2..=5).contains(&x) && (2..=5).contains(&y);
            let in_inner = (3..=4).contains(&x) && (3..=4).contains(&y);
            if in_outer && !in_inner {
                Rgba(SUBJECT)
            } else {
                Rgba(MATTE)
            }
        })
    }

    // Tests matte connected to the corners is cleared with RGB preserved
    // Verified by clearing RGB along with alpha
    #[test]
    fn test_clears_connected_matte() {
        let cleared = clear_corner_background(&ringed_tile(), 8);

        for (x, y) in [(0, 0), (7, 0), (0, 7), (7, 7), (1, 4), (6, 3)] {
            assert_eq!(cleared.get_pixel(x, y).0, [60, 60, 60, 0], "pixel ({x}, {y})");
        }
        assert_eq!(cleared.get_pixel(2, 2).0, SUBJECT);
    }

    // Tests matte-colored pixels enclosed by a barrier keep their alpha
    // Verified by keying the seed color globally instead of flood filling
    #[test]
    fn test_enclosed_region_preserved() {
        let cleared = clear_corner_background(&ringed_tile(), 8);

        for (x, y) in [(3, 3), (3, 4), (4, 3), (4, 4)] {
            assert_eq!(cleared.get_pixel(x, y).0, MATTE, "pixel ({x}, {y})");
        }
    }

    // Tests tolerance is measured against the seed color, not the neighbouring pixel
    // Verified by comparing each pixel with the one it was reached from
    #[test]
    fn test_tolerance_anchored_to_seed() {
        // A horizontal gradient stepping by 5 per column; adjacent pixels always within 8
        let tile = RgbaImage::from_fn(6, 1, |x, _| {
            let v = 100 + 5 * x as u8;
            Rgba([v, v, v, 255])
        });
        let cleared = clear_corner_background(&tile, 8);

        // (0,0) seeds at 100: 100 and 105 join; right-hand corner seeds at 125: 125 and 120 join
        let alphas: Vec<u8> = (0..6).map(|x| cleared.get_pixel(x, 0).0[3]).collect();
        assert_eq!(alphas, vec![0, 0, 255, 255, 0, 0]);
    }

    // Tests tolerance boundary is inclusive per channel
    // Verified by using strict less-than for the channel distance
    #[test]
    fn test_tolerance_inclusive() {
        let row = [
            [60, 60, 60, 255],
            [52, 68, 60, 255],
            [60, 69, 60, 255],
            [60, 60, 60, 0],
        ];
        let tile = RgbaImage::from_fn(4, 1, |x, _| Rgba(row[x as usize]));
        let cleared = clear_corner_background(&tile, 8);

        let alphas: Vec<u8> = (0..4).map(|x| cleared.get_pixel(x, 0).0[3]).collect();
        assert_eq!(alphas, vec![0, 0, 255, 0]);
    }

    // Tests transparent corners seed nothing and non-opaque pixels block the fill
    // Verified by lowering the opacity threshold to the solid threshold
    #[test]
    fn test_non_opaque_pixels_block() {
        let tile = RgbaImage::from_fn(4, 4, |x, _| {
            if x == 1 {
                Rgba([60, 60, 60, 249])
            } else {
                Rgba(MATTE)
            }
        });
        let cleared = clear_corner_background(&tile, 8);

        assert_eq!(cleared.get_pixel(0, 2).0[3], 0);
        assert_eq!(cleared.get_pixel(1, 2).0[3], 249);
        assert_eq!(cleared.get_pixel(2, 2).0[3], 0);
        assert_eq!(cleared.get_pixel(3, 3).0[3], 0);
    }

    // Tests a second pass over an already cleared tile changes nothing
    // Verified by seeding corners regardless of their alpha
    #[test]
    fn test_idempotent_on_cleared_tile() {
        let once = clear_corner_background(&ringed_tile(), 8);
        let twice = clear_corner_background(&once, 8);

        assert_eq!(once, twice);
    }

    // Tests pixels rejected by one corner's fill are not reconsidered by another
    // Verified by giving each corner its own visited mask
    #[test]
    fn test_shared_visited_mask() {
        // Top-left corner is red, the rest of the tile is gray
        let tile = RgbaImage::from_fn(3, 3, |x, y| {
            if (x, y) == (0, 0) {
                Rgba(SUBJECT)
            } else {
                Rgba(MATTE)
            }
        });
        let cleared = clear_corner_background(&tile, 8);

        // The red fill visits and rejects (1,0) and (0,1); the gray fills cannot reclaim them
        assert_eq!(cleared.get_pixel(0, 0).0[3], 0);
        assert_eq!(cleared.get_pixel(1, 0).0[3], 255);
        assert_eq!(cleared.get_pixel(0, 1).0[3], 255);
        assert_eq!(cleared.get_pixel(2, 2).0[3], 0);
        assert_eq!(cleared.get_pixel(1, 1).0[3], 0);
    }

    // Tests the input tile is not mutated
    // Verified by clearing in place
    #[test]
    fn test_input_untouched() {
        let tile = solid_tile(4, MATTE);
        let cleared = clear_corner_background(&tile, 8);

        assert!(cleared.pixels().all(|p| p.0[3] == 0));
        assert!(tile.pixels().all(|p| p.0 == MATTE));
    }
}
