//! Roster controller: pagination, search, and scroll state for the user list.
//!
//! The `Roster` owns one explicit state object (pager + query + displayed set
//! + scroll tracker) mutated only through its defined operations. Fetches run
//! on a spawned Tokio task and report back through an MPSC channel; the
//! consuming event loop pumps `process_fetch_results` to apply completions,
//! so all state transitions happen on that single loop.

pub mod filter;
pub mod pager;
pub mod scroll;

pub use pager::{FetchStatus, PageRequest, Pager};
pub use scroll::{AffordanceTransition, ScrollCommand, ScrollTracker, NEAR_END_THRESHOLD, SCROLL_TOP_THRESHOLD};

use tokio::sync::mpsc;
use tracing::{debug, info, trace};

use crate::api::DirectoryClient;
use crate::models::User;

// ============================================================================
// Constants
// ============================================================================

/// Buffer size for the fetch completion channel.
/// Only one fetch is ever in flight, so a small buffer is plenty.
const CHANNEL_BUFFER_SIZE: usize = 8;

// ============================================================================
// Fetch Outcomes
// ============================================================================

/// Result of one page fetch, sent through the completion channel from the
/// spawned fetch task back to the roster.
enum FetchOutcome {
    /// The page arrived; may be empty (end of directory).
    PageLoaded(Vec<User>),
    /// The fetch failed with a user-facing message.
    FetchFailed(String),
}

// ============================================================================
// Roster Controller
// ============================================================================

/// Controller for the paginated, searchable user list.
pub struct Roster {
    api: DirectoryClient,
    pager: Pager,
    query: String,
    displayed: Vec<User>,
    scroll: ScrollTracker,

    fetch_rx: mpsc::Receiver<FetchOutcome>,
    fetch_tx: mpsc::Sender<FetchOutcome>,
}

impl Roster {
    pub fn new(api: DirectoryClient, page_size: usize) -> Self {
        let (tx, rx) = mpsc::channel(CHANNEL_BUFFER_SIZE);
        Self {
            api,
            pager: Pager::new(page_size),
            query: String::new(),
            displayed: Vec::new(),
            scroll: ScrollTracker::new(),
            fetch_rx: rx,
            fetch_tx: tx,
        }
    }

    // =========================================================================
    // Fetching
    // =========================================================================

    /// Start fetching the next page if the pager allows it. A refusal
    /// (already loading, end reached) is a silent no-op.
    ///
    /// Returns whether a fetch was actually started.
    pub fn fetch_next_page(&mut self) -> bool {
        let Some(request) = self.pager.begin_fetch() else {
            return false;
        };

        debug!(skip = request.skip, limit = request.limit, "Starting page fetch");

        let api = self.api.clone();
        let tx = self.fetch_tx.clone();
        tokio::spawn(async move {
            let outcome = match api.fetch_page(request.skip, request.limit).await {
                Ok(page) => FetchOutcome::PageLoaded(page.users),
                Err(e) => FetchOutcome::FetchFailed(e.to_string()),
            };
            // If the roster was torn down mid-fetch the receiver is gone;
            // dropping the outcome here is the correct no-op.
            if tx.send(outcome).await.is_err() {
                debug!("Roster dropped before fetch completed, discarding result");
            }
        });

        true
    }

    /// Drain completed fetches from the channel and apply them.
    /// Call this from the event loop between input events.
    pub fn process_fetch_results(&mut self) {
        while let Ok(outcome) = self.fetch_rx.try_recv() {
            self.apply_outcome(outcome);
        }
    }

    fn apply_outcome(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::PageLoaded(users) => {
                self.pager.apply_page(users);
                if self.pager.is_end_reached() {
                    info!(loaded = self.pager.users().len(), "Directory fully loaded");
                }
                self.recompute_displayed();
            }
            FetchOutcome::FetchFailed(message) => {
                self.pager.apply_error(message);
            }
        }
    }

    /// Clear a failed fetch and refetch from the same offset.
    pub fn retry(&mut self) -> bool {
        self.pager.retry();
        self.fetch_next_page()
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Set the search query and recompute the displayed set. While the
    /// trimmed query is non-empty, page fetching is frozen; the filter only
    /// sees records that were already loaded.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.recompute_displayed();
    }

    /// True while a non-empty query is active and pagination is frozen.
    pub fn is_filtering(&self) -> bool {
        !self.query.trim().is_empty()
    }

    fn recompute_displayed(&mut self) {
        self.displayed = filter::apply(self.pager.users(), &self.query);
    }

    // =========================================================================
    // Scroll Events
    // =========================================================================

    /// Feed one scroll position update; returns the affordance transition to
    /// animate, if the show/hide state flipped.
    pub fn on_scroll(&mut self, offset_y: f32) -> Option<AffordanceTransition> {
        self.scroll.on_scroll(offset_y)
    }

    /// The renderer's end-of-list proximity signal. Fetches the next page
    /// unless a query is active, the end was reached, or the last fetch
    /// failed (failure recovery goes through the explicit retry affordance).
    pub fn on_near_end(&mut self) -> bool {
        if self.is_filtering() {
            trace!("Near-end ignored: search active");
            return false;
        }
        if self.pager.is_end_reached() || self.pager.status() == FetchStatus::Failed {
            trace!(status = ?self.pager.status(), "Near-end ignored");
            return false;
        }
        self.fetch_next_page()
    }

    /// Command the renderer to scroll back to the top. Pure command; state
    /// catches up through the renderer's subsequent `on_scroll` reports.
    pub fn scroll_to_top(&self) -> ScrollCommand {
        ScrollCommand::to_top()
    }

    // =========================================================================
    // Read Accessors
    // =========================================================================

    /// Records currently shown: the accumulated set, or the filtered subset
    /// while a query is active.
    pub fn displayed(&self) -> &[User] {
        &self.displayed
    }

    /// All records fetched so far regardless of the active query.
    pub fn users(&self) -> &[User] {
        self.pager.users()
    }

    pub fn status(&self) -> FetchStatus {
        self.pager.status()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.pager.error_message()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn show_scroll_top(&self) -> bool {
        self.scroll.show_scroll_top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        // The base URL is never reached: tests apply outcomes directly.
        let api = DirectoryClient::new("http://127.0.0.1:0").expect("client builds");
        Roster::new(api, 10)
    }

    fn users(count: usize, start_id: i64) -> Vec<User> {
        (0..count)
            .map(|i| User {
                id: start_id + i as i64,
                first_name: format!("First{}", start_id + i as i64),
                last_name: format!("Last{}", start_id + i as i64),
                email: format!("user{}@example.com", start_id + i as i64),
                image: None,
            })
            .collect()
    }

    /// Begin a fetch without spawning, then apply the given outcome, the way
    /// the event loop would after the task completes.
    fn fetch_and_apply(roster: &mut Roster, outcome: FetchOutcome) {
        roster.pager.begin_fetch().expect("fetch allowed");
        roster.apply_outcome(outcome);
    }

    #[tokio::test]
    async fn test_fetch_next_page_sets_loading_state_immediately() {
        let mut r = roster();
        assert!(r.fetch_next_page());
        assert_eq!(r.status(), FetchStatus::LoadingInitial);

        // Second call while in flight is a guarded no-op.
        assert!(!r.fetch_next_page());
        assert_eq!(r.status(), FetchStatus::LoadingInitial);
    }

    #[test]
    fn test_page_load_updates_displayed_set() {
        let mut r = roster();
        fetch_and_apply(&mut r, FetchOutcome::PageLoaded(users(10, 1)));

        assert_eq!(r.status(), FetchStatus::Idle);
        assert_eq!(r.users().len(), 10);
        assert_eq!(r.displayed().len(), 10);
    }

    #[test]
    fn test_empty_directory_scenario() {
        let mut r = roster();
        fetch_and_apply(&mut r, FetchOutcome::PageLoaded(vec![]));

        assert_eq!(r.status(), FetchStatus::EndReached);
        assert!(r.users().is_empty());
        assert!(r.displayed().is_empty());

        // Proximity events after end-reached never start a fetch.
        for _ in 0..3 {
            assert!(!r.on_near_end());
        }
        assert_eq!(r.status(), FetchStatus::EndReached);
    }

    #[test]
    fn test_failure_then_retry_scenario() {
        let mut r = roster();
        fetch_and_apply(&mut r, FetchOutcome::PageLoaded(users(10, 1)));
        fetch_and_apply(&mut r, FetchOutcome::PageLoaded(users(10, 11)));
        fetch_and_apply(
            &mut r,
            FetchOutcome::FetchFailed("connection reset".to_string()),
        );

        assert_eq!(r.status(), FetchStatus::Failed);
        assert_eq!(r.error_message(), Some("connection reset"));
        assert_eq!(r.users().len(), 20);

        // Near-end proximity must not refetch while failed.
        assert!(!r.on_near_end());

        r.pager.retry();
        fetch_and_apply(&mut r, FetchOutcome::PageLoaded(users(5, 21)));
        assert_eq!(r.users().len(), 25);
        assert_eq!(r.displayed().len(), 25);
        assert_eq!(r.status(), FetchStatus::Idle);
    }

    #[test]
    fn test_query_freezes_pagination() {
        let mut r = roster();
        fetch_and_apply(&mut r, FetchOutcome::PageLoaded(users(10, 1)));

        r.set_query("First1");
        assert!(r.is_filtering());

        for _ in 0..5 {
            assert!(!r.on_near_end());
        }
        assert_eq!(r.users().len(), 10);
        assert_eq!(r.status(), FetchStatus::Idle);
    }

    #[test]
    fn test_clearing_query_restores_accumulated_set() {
        let mut r = roster();
        fetch_and_apply(&mut r, FetchOutcome::PageLoaded(users(10, 1)));

        r.set_query("First3");
        assert_eq!(r.displayed().len(), 1);
        assert_eq!(r.displayed()[0].id, 3);

        r.set_query("");
        assert_eq!(r.displayed().len(), 10);
        let ids: Vec<i64> = r.displayed().iter().map(|u| u.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<i64>>());
    }

    #[test]
    fn test_whitespace_query_counts_as_empty() {
        let mut r = roster();
        fetch_and_apply(&mut r, FetchOutcome::PageLoaded(users(10, 1)));

        r.set_query("  ");
        assert!(!r.is_filtering());
        assert_eq!(r.displayed().len(), 10);
    }

    #[test]
    fn test_displayed_follows_accumulated_growth_without_query() {
        let mut r = roster();
        fetch_and_apply(&mut r, FetchOutcome::PageLoaded(users(10, 1)));
        fetch_and_apply(&mut r, FetchOutcome::PageLoaded(users(10, 11)));

        assert_eq!(r.displayed().len(), 20);
    }

    #[test]
    fn test_scroll_affordance_and_command() {
        let mut r = roster();
        assert_eq!(r.on_scroll(150.0), None);
        assert_eq!(r.on_scroll(250.0), Some(AffordanceTransition::Show));
        assert_eq!(r.on_scroll(300.0), None);
        assert!(r.show_scroll_top());

        let cmd = r.scroll_to_top();
        assert_eq!(cmd.offset, 0.0);
        assert!(cmd.animated);
    }

    #[tokio::test]
    async fn test_process_fetch_results_applies_transport_failure() {
        let mut r = roster();
        assert!(r.fetch_next_page());

        // The unroutable base URL guarantees the spawned fetch fails; wait
        // for the outcome to land in the channel.
        let outcome = r.fetch_rx.recv().await.expect("outcome delivered");
        r.apply_outcome(outcome);

        assert_eq!(r.status(), FetchStatus::Failed);
        assert!(r.error_message().is_some());
        assert!(r.users().is_empty());
    }
}
