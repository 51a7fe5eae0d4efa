//! Tests for the occupancy bitmap and first-free-point scanning

#[cfg(test)]
mod tests {
    use chesspuzzle::spatial::{BoardDomain, OccupancyBitmap, Point};

    fn small_domain() -> BoardDomain {
        BoardDomain::new(1, 3).unwrap()
    }

    // Verifies a new bitmap has no occupied cells
    // Verified by initializing all bits to 1
    #[test]
    fn test_new_bitmap_is_empty() {
        let bitmap = OccupancyBitmap::new(small_domain());
        assert!(bitmap.is_empty());
        assert!(!bitmap.is_full());
        assert_eq!(bitmap.count(), 0);
        assert_eq!(bitmap.first_free(), Some(Point::new(1, 1)));
    }

    // Tests first free point skips the occupied corner
    // Verified by scanning columns before rows
    #[test]
    fn test_first_free_after_corner() {
        let mut bitmap = OccupancyBitmap::new(small_domain());
        assert!(bitmap.insert(Point::new(1, 1)));
        assert_eq!(bitmap.first_free(), Some(Point::new(2, 1)));

        bitmap.insert(Point::new(2, 1));
        bitmap.insert(Point::new(3, 1));
        assert_eq!(bitmap.first_free(), Some(Point::new(1, 2)));
    }

    // Tests a fully occupied bitmap has no free point
    // Verified by returning the last cell when full
    #[test]
    fn test_full_bitmap() {
        let domain = small_domain();
        let bitmap = OccupancyBitmap::new(domain).with_points(domain.points());
        assert!(bitmap.is_full());
        assert_eq!(bitmap.count(), 9);
        assert_eq!(bitmap.first_free(), None);
    }

    // Tests out-of-range points are neither stored nor reported
    // Verified by clamping points into range on insert
    #[test]
    fn test_out_of_range() {
        let mut bitmap = OccupancyBitmap::new(small_domain());
        assert!(!bitmap.insert(Point::new(0, 1)));
        assert!(!bitmap.insert(Point::new(4, 4)));
        assert!(!bitmap.contains(Point::new(0, 1)));
        assert!(bitmap.is_empty());
    }

    // Tests with_points leaves the source bitmap untouched
    // Verified by mutating self in with_points
    #[test]
    fn test_with_points_is_persistent() {
        let mut base = OccupancyBitmap::new(small_domain());
        base.insert(Point::new(2, 2));

        let extended = base.with_points([Point::new(1, 3), Point::new(3, 1)]);

        assert_eq!(base.count(), 1);
        assert_eq!(extended.count(), 3);
        assert_eq!(
            extended.occupied_points(),
            vec![Point::new(3, 1), Point::new(2, 2), Point::new(1, 3)]
        );
    }

    // Tests text rendering lays out rows
    // Verified by omitting row separators
    #[test]
    fn test_display() {
        let bitmap = OccupancyBitmap::new(small_domain()).with_points([Point::new(1, 1), Point::new(3, 3)]);
        assert_eq!(bitmap.to_string(), "#..\n...\n..#");
    }
}
