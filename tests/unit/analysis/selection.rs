//! Tests for predicate-filtered best candidate selection

#[cfg(test)]
mod tests {
    use crate::grid_sheet;
    use woodsheet::PipelineError;
    use woodsheet::analysis::select_best;
    use woodsheet::spatial::{SheetId, SpriteSheet};

    // Tests empty eligible set reports how many candidates were inspected
    // Verified by returning the first candidate when none pass
    #[test]
    fn test_no_eligible_candidate() {
        let result = select_best(vec![1, 2, 3], |&v| v > 10, |&v| v);

        match result {
            Err(PipelineError::NoEligibleCandidate { considered, .. }) => {
                assert_eq!(considered, 3);
            }
            other => unreachable!("Expected NoEligibleCandidate, got {other:?}"),
        }
    }

    // Tests an empty candidate pool is an error too
    // Verified by defaulting to zero on an empty pool
    #[test]
    fn test_empty_pool() {
        let result = select_best(Vec::<f64>::new(), |_| true, |&v| v);

        assert!(result.is_err());
    }

    // Tests the only eligible element is returned even when others score higher
    // Verified by applying the score before the predicate
    #[test]
    fn test_single_match_wins() {
        let best = select_best(vec![5, 100, 7], |&v| v < 6, |&v| v).unwrap();

        assert_eq!(best, 5);
    }

    // Tests ties keep the first encountered candidate
    // Verified by replacing on greater-or-equal scores
    #[test]
    fn test_ties_keep_first() {
        let candidates = vec![("a", 2.0), ("b", 3.0), ("c", 3.0)];
        let best = select_best(candidates, |_| true, |&(_, s)| s).unwrap();

        assert_eq!(best.0, "b");
    }

    // Tests tuple keys rank lexicographically
    // Verified by ranking on the second component only
    #[test]
    fn test_tuple_keys() {
        let candidates = vec![(90.0, 10.0), (95.0, 1.0), (95.0, 5.0), (80.0, 200.0)];
        let best = select_best(candidates, |_| true, |&(gray, bright)| (gray, bright)).unwrap();

        assert_eq!(best, (95.0, 5.0));
    }

    // Tests NaN scores never displace an earlier candidate
    // Verified by replacing on any non-less comparison
    #[test]
    fn test_nan_scores_ignored() {
        let candidates = vec![1.0, f64::NAN, 0.5];
        let best = select_best(candidates, |_| true, |&v| v).unwrap();

        assert!((best - 1.0).abs() < f64::EPSILON);
    }

    // Tests 2x2 sheet of blue, gray, green and transparent tiles selects blue by blue lean
    // Verified by scoring with the green lean instead
    #[test]
    fn test_select_blue_tile_from_sheet() {
        let image = grid_sheet(
            16,
            2,
            2,
            &[
                [20, 40, 220, 255],
                [128, 128, 128, 255],
                [30, 200, 40, 255],
                [0, 0, 0, 0],
            ],
        );
        let sheet = SpriteSheet::new(SheetId(0), image, 16).unwrap();
        let stats = sheet.collect_stats().unwrap();

        let best = select_best(stats, |s| s.alpha_cov > 0.5, |s| s.blue).unwrap();

        assert_eq!(best.location.index, 0);
        assert_eq!((best.location.x, best.location.y), (0, 0));
    }
}
