//! Depth-first search driver with explicit backtracking
//!
//! The search tree is walked iteratively: descending pushes the current
//! node onto a stack, backtracking pops it and resumes its decision queue
//! where it stopped. Memory grows with the search depth only.

use crate::algorithm::state::SolutionState;
use crate::io::error::Result;
use std::fmt;
use std::ops::ControlFlow;

/// Lifecycle of a search
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    /// No search has run yet
    Idle,
    /// Search loop in progress
    Running,
    /// A final state was reached
    Solved,
    /// Every decision was tried without reaching a final state
    Exhausted,
    /// The observer asked the search to stop
    Cancelled,
    /// Building a child state failed
    Failed,
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Solved => "solved",
            Self::Exhausted => "exhausted",
            Self::Cancelled => "cancelled",
            Self::Failed => "failed",
        })
    }
}

/// Receives every state the search enters, including revisits on backtrack
pub trait SearchObserver {
    /// Called with the entered state and the 1-based visit counter
    ///
    /// Returning `ControlFlow::Break` cancels the search.
    fn on_state_enter(&mut self, state: &SolutionState, visit: u64) -> ControlFlow<()>;
}

impl<F> SearchObserver for F
where
    F: FnMut(&SolutionState, u64) -> ControlFlow<()>,
{
    fn on_state_enter(&mut self, state: &SolutionState, visit: u64) -> ControlFlow<()> {
        self(state, visit)
    }
}

/// Observer that never interrupts the search
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {
    fn on_state_enter(&mut self, _state: &SolutionState, _visit: u64) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

/// Backtracking search over [`SolutionState`] trees
#[derive(Debug)]
pub struct Resolver {
    states: Vec<SolutionState>,
    final_state: Option<SolutionState>,
    status: SearchStatus,
    visited_states: u64,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver {
    /// Create an idle resolver
    pub const fn new() -> Self {
        Self {
            states: Vec::new(),
            final_state: None,
            status: SearchStatus::Idle,
            visited_states: 0,
        }
    }

    /// Search for the first final state with a fully covered board
    ///
    /// # Errors
    ///
    /// Returns an error if a decision cannot be applied to its own state
    pub fn search_solution(&mut self, initial_state: SolutionState) -> Result<bool> {
        self.search_solution_with(initial_state, &mut NoopObserver)
    }

    /// Search while reporting every entered state to `observer`
    ///
    /// Returns true when a final state was found. Exhaustion and
    /// cancellation both return false; [`Resolver::status`] tells them apart.
    ///
    /// # Errors
    ///
    /// Returns an error if a decision cannot be applied to its own state
    pub fn search_solution_with<O>(
        &mut self,
        initial_state: SolutionState,
        observer: &mut O,
    ) -> Result<bool>
    where
        O: SearchObserver + ?Sized,
    {
        self.clear_states();
        self.status = SearchStatus::Running;

        let mut current = initial_state;
        loop {
            self.visited_states += 1;
            if observer
                .on_state_enter(&current, self.visited_states)
                .is_break()
            {
                self.status = SearchStatus::Cancelled;
                return Ok(false);
            }

            // A final state with uncovered cells has no decisions and backtracks
            if current.is_final() && current.board().is_full() {
                self.status = SearchStatus::Solved;
                self.final_state = Some(current);
                return Ok(true);
            }

            if let Some(decision) = current.next_decision() {
                let next = match current.create_next_state(&decision) {
                    Ok(next) => next,
                    Err(err) => {
                        self.status = SearchStatus::Failed;
                        return Err(err);
                    }
                };
                self.states.push(current);
                current = next;
            } else if let Some(parent) = self.states.pop() {
                current = parent;
            } else {
                self.status = SearchStatus::Exhausted;
                return Ok(false);
            }
        }
    }

    /// Final state of the last successful search
    pub const fn final_state(&self) -> Option<&SolutionState> {
        self.final_state.as_ref()
    }

    /// Take ownership of the final state
    pub fn into_final_state(self) -> Option<SolutionState> {
        self.final_state
    }

    /// Outcome of the last search
    pub const fn status(&self) -> SearchStatus {
        self.status
    }

    /// Number of state visits in the last search, revisits included
    pub const fn visited_states(&self) -> u64 {
        self.visited_states
    }

    /// Number of ancestor states currently on the backtracking stack
    pub fn depth(&self) -> usize {
        self.states.len()
    }

    fn clear_states(&mut self) {
        self.states.clear();
        self.final_state = None;
        self.visited_states = 0;
    }
}
