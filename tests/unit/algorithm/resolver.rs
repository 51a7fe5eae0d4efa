//! Tests for the backtracking driver, its status, and the observer hook

#[cfg(test)]
mod tests {
    use chesspuzzle::algorithm::resolver::{NoopObserver, Resolver, SearchStatus};
    use chesspuzzle::algorithm::state::SolutionState;
    use chesspuzzle::shapes::Figure;
    use chesspuzzle::spatial::{BoardDomain, Color, Point};
    use std::ops::ControlFlow;

    fn dominoes(count: usize) -> SolutionState {
        let domino = Figure::new(Color::Black, [Point::new(1, 0)]).unwrap();
        SolutionState::create_initial(vec![domino; count], BoardDomain::new(1, 2).unwrap())
    }

    // Tests a tileable board is solved with a fully covered final board
    // Verified by treating a full board as exhausted
    #[test]
    fn test_solves_two_dominoes() {
        let mut resolver = Resolver::new();
        assert_eq!(resolver.status(), SearchStatus::Idle);

        let found = resolver.search_solution(dominoes(2)).unwrap();

        assert!(found);
        assert_eq!(resolver.status(), SearchStatus::Solved);
        let final_state = resolver.final_state().unwrap();
        assert!(final_state.is_final());
        assert!(final_state.board().is_full());
        // Root, one child, and the final grandchild
        assert_eq!(resolver.visited_states(), 3);
        assert_eq!(resolver.depth(), 2);
    }

    // Tests too many figures exhaust the search
    // Verified by reporting success on an empty decision queue
    #[test]
    fn test_exhausts_when_area_exceeds_board() {
        let mut resolver = Resolver::new();
        let found = resolver.search_solution(dominoes(3)).unwrap();

        assert!(!found);
        assert_eq!(resolver.status(), SearchStatus::Exhausted);
        assert!(resolver.final_state().is_none());
        assert_eq!(resolver.depth(), 0);
    }

    // Tests an empty figure list cannot cover the board
    // Verified by accepting any state with no figures left
    #[test]
    fn test_empty_figure_list_is_exhausted() {
        let mut resolver = Resolver::default();
        let found = resolver.search_solution(dominoes(0)).unwrap();
        assert!(!found);
        assert_eq!(resolver.status(), SearchStatus::Exhausted);
        assert_eq!(resolver.visited_states(), 1);
        assert!(resolver.into_final_state().is_none());
    }

    // Tests placing every figure without covering the board backtracks
    // Verified by finishing on the first state with no figures left
    #[test]
    fn test_uncovered_final_state_backtracks() {
        let mut resolver = Resolver::new();
        let found = resolver.search_solution(dominoes(1)).unwrap();

        assert!(!found);
        assert_eq!(resolver.status(), SearchStatus::Exhausted);
        assert!(resolver.final_state().is_none());
        // Root plus four children, each followed by a return to the root
        assert_eq!(resolver.visited_states(), 9);
    }

    // Tests observer sees consecutive visit numbers, revisits included
    // Verified by notifying only on first entry of a state
    #[test]
    fn test_observer_sees_every_visit() {
        let mut visits = Vec::new();
        let mut depths = Vec::new();
        let mut observer = |state: &SolutionState, visit: u64| {
            visits.push(visit);
            depths.push(state.board().placement_count());
            ControlFlow::Continue(())
        };

        let mut resolver = Resolver::new();
        let found = resolver.search_solution_with(dominoes(3), &mut observer).unwrap();

        assert!(!found);
        let expected: Vec<u64> = (1..=resolver.visited_states()).collect();
        assert_eq!(visits, expected);
        assert_eq!(depths.first(), Some(&0));
        // Backtracking returns to the root last
        assert_eq!(depths.last(), Some(&0));
        assert!(depths.iter().any(|&d| d == 2));
    }

    // Tests the observer can cancel the search
    // Verified by ignoring the observer's return value
    #[test]
    fn test_observer_cancels() {
        let mut observer = |_: &SolutionState, visit: u64| {
            if visit >= 2 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        };

        let mut resolver = Resolver::new();
        let found = resolver.search_solution_with(dominoes(2), &mut observer).unwrap();

        assert!(!found);
        assert_eq!(resolver.status(), SearchStatus::Cancelled);
        assert_eq!(resolver.visited_states(), 2);
        assert!(resolver.final_state().is_none());
    }

    // Tests a resolver can be reused and resets its counters
    // Verified by keeping the visit counter across searches
    #[test]
    fn test_resolver_reuse() {
        let mut resolver = Resolver::new();
        resolver.search_solution(dominoes(3)).unwrap();
        let found = resolver
            .search_solution_with(dominoes(2), &mut NoopObserver)
            .unwrap();

        assert!(found);
        assert_eq!(resolver.visited_states(), 3);
        assert_eq!(SearchStatus::Solved.to_string(), "solved");
    }
}
