//! Tests for puzzle and output constants

#[cfg(test)]
mod tests {
    use chesspuzzle::io::configuration::{
        BLACK_CELL_RGBA, BOARD_HIGH, BOARD_LOW, DEFAULT_CELL_SIZE, EMPTY_CELL_RGBA, MAX_CELL_SIZE,
        OUTLINE_RGBA, PROGRESS_CHECK_MASK, PROGRESS_REFRESH_INTERVAL_MS, WHITE_CELL_RGBA,
    };

    // Tests the standard board is 8 by 8 starting at 1
    // Verified by changing the board bounds
    #[test]
    fn test_board_bounds() {
        assert_eq!(BOARD_LOW, 1);
        assert_eq!(BOARD_HIGH, 8);
    }

    // Tests the progress mask selects one visit in 2048
    // Verified by using a mask that is not all ones
    #[test]
    fn test_progress_sampling() {
        assert_eq!(PROGRESS_CHECK_MASK, 2047);
        assert!((PROGRESS_CHECK_MASK + 1).is_power_of_two());
        assert!(PROGRESS_REFRESH_INTERVAL_MS > 0);
    }

    // Tests the default cell size is accepted and the palette is distinct
    // Verified by giving two fills the same color
    #[test]
    fn test_output_settings() {
        assert!(DEFAULT_CELL_SIZE > 0);
        assert!(DEFAULT_CELL_SIZE <= MAX_CELL_SIZE);

        let palette = [BLACK_CELL_RGBA, WHITE_CELL_RGBA, EMPTY_CELL_RGBA, OUTLINE_RGBA];
        for (i, a) in palette.iter().enumerate() {
            for b in palette.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
