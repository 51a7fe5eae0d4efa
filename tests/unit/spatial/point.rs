//! Tests for point parity, arithmetic, and raster ordering

#[cfg(test)]
mod tests {
    use chesspuzzle::spatial::Point;

    // Tests parity of x + y including negative coordinates
    // Verified by computing parity from x alone
    #[test]
    fn test_is_odd() {
        assert!(!Point::new(0, 0).is_odd());
        assert!(Point::new(1, 0).is_odd());
        assert!(Point::new(0, 1).is_odd());
        assert!(!Point::new(1, 1).is_odd());
        assert!(Point::new(-1, 0).is_odd());
        assert!(!Point::new(-3, 1).is_odd());
        assert!(Point::new(2, -5).is_odd());
    }

    // Tests shift, negation, and subtraction agree with each other
    // Verified by swapping the coordinates in shift
    #[test]
    fn test_shift_and_inverse() {
        let p = Point::new(3, 5);
        let offset = Point::new(-1, 2);

        assert_eq!(p.shift(offset), Point::new(2, 7));
        assert_eq!(p + offset, Point::new(2, 7));
        assert_eq!(-offset, Point::new(1, -2));
        assert_eq!(p.shift(offset) - offset, p);
        assert_eq!(p.shift(-p), Point::ORIGIN);
    }

    // Tests ordering is row-major: y first, then x
    // Verified by comparing x before y
    #[test]
    fn test_raster_order() {
        let mut points = vec![
            Point::new(2, 2),
            Point::new(1, 3),
            Point::new(3, 1),
            Point::new(1, 1),
        ];
        points.sort();

        assert_eq!(
            points,
            vec![
                Point::new(1, 1),
                Point::new(3, 1),
                Point::new(2, 2),
                Point::new(1, 3),
            ]
        );
        assert!(Point::new(8, 1) < Point::new(1, 2));
    }

    // Tests display format
    // Verified by omitting the y coordinate
    #[test]
    fn test_display() {
        assert_eq!(Point::new(-2, 7).to_string(), "(-2, 7)");
    }
}
