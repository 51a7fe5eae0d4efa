//! Live search progress with an optional state budget

use crate::algorithm::resolver::SearchObserver;
use crate::algorithm::state::SolutionState;
use crate::io::configuration::{PROGRESS_CHECK_MASK, PROGRESS_REFRESH_INTERVAL_MS, SPINNER_TICK_MS};
use indicatif::{ProgressBar, ProgressStyle};
use std::ops::ControlFlow;
use std::sync::LazyLock;
use std::time::{Duration, Instant};

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Search observer that keeps a spinner up to date
///
/// The visit counter is sampled through [`PROGRESS_CHECK_MASK`] so the
/// clock is read rarely; the message is refreshed at most once per
/// refresh interval. An optional state limit cancels the search when it
/// would enter more states than the limit allows.
pub struct SearchProgress {
    bar: ProgressBar,
    started: Instant,
    last_refresh: Option<Instant>,
    refresh_interval: Duration,
    state_limit: Option<u64>,
    last_visit: u64,
}

impl SearchProgress {
    /// Create a visible spinner
    pub fn new(state_limit: Option<u64>) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(SPINNER_STYLE.clone());
        bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        Self::with_bar(bar, state_limit)
    }

    /// Create a reporter that draws nothing but still enforces the limit
    pub fn hidden(state_limit: Option<u64>) -> Self {
        Self::with_bar(ProgressBar::hidden(), state_limit)
    }

    fn with_bar(bar: ProgressBar, state_limit: Option<u64>) -> Self {
        Self {
            bar,
            started: Instant::now(),
            last_refresh: None,
            refresh_interval: Duration::from_millis(PROGRESS_REFRESH_INTERVAL_MS),
            state_limit,
            last_visit: 0,
        }
    }

    /// Last visit counter seen
    pub const fn visited_states(&self) -> u64 {
        self.last_visit
    }

    /// Time since the reporter was created
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Average visits per second so far
    pub fn states_per_second(&self) -> f64 {
        let seconds = self.elapsed().as_secs_f64();
        if seconds > 0.0 {
            self.last_visit as f64 / seconds
        } else {
            0.0
        }
    }

    /// Current spinner message
    pub fn message(&self) -> String {
        self.bar.message()
    }

    /// Stop the spinner and leave a closing message
    pub fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }

    fn refresh(&mut self, state: &SolutionState, now: Instant) {
        self.bar.set_message(format!(
            "State {}: {} figures placed, {} left, {:.0} states/s",
            self.last_visit,
            state.board().placement_count(),
            state.rest_figures().len(),
            self.states_per_second()
        ));
        self.last_refresh = Some(now);
    }
}

impl SearchObserver for SearchProgress {
    fn on_state_enter(&mut self, state: &SolutionState, visit: u64) -> ControlFlow<()> {
        self.last_visit = visit;

        if visit & PROGRESS_CHECK_MASK == 1 {
            let now = Instant::now();
            let due = self
                .last_refresh
                .is_none_or(|last| now.duration_since(last) >= self.refresh_interval);
            if due {
                self.refresh(state, now);
            }
        }

        match self.state_limit {
            Some(limit) if visit > limit => ControlFlow::Break(()),
            _ => ControlFlow::Continue(()),
        }
    }
}
