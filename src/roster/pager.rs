//! Forward-only pagination state machine over the directory listing.
//!
//! The pager owns the fetch cursor, the accumulated records, and the fetch
//! status. All mutation goes through `begin_fetch`, `apply_page`,
//! `apply_error`, and `retry`; everything else is read-only. At most one
//! fetch is in flight at a time because `begin_fetch` refuses to start a
//! second one while a loading status is active.

use tracing::{debug, trace};

use crate::models::User;

/// Where the pager is in its fetch lifecycle. Exactly one holds at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    /// No fetch in flight; more data may exist.
    Idle,
    /// First page (cursor 0) is being fetched.
    LoadingInitial,
    /// A subsequent page is being fetched.
    LoadingMore,
    /// A fetch returned zero records. Terminal: no further fetches happen.
    EndReached,
    /// The last fetch failed; `error_message` holds the user-facing text.
    Failed,
}

/// Offset/limit pair for the fetch that `begin_fetch` approved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub skip: usize,
    pub limit: usize,
}

/// Pagination state machine. See module docs for the mutation protocol.
#[derive(Debug)]
pub struct Pager {
    page_size: usize,
    cursor: usize,
    users: Vec<User>,
    status: FetchStatus,
    error_message: Option<String>,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            cursor: 0,
            users: Vec::new(),
            status: FetchStatus::Idle,
            error_message: None,
        }
    }

    /// Ask to start a fetch. Returns the request to issue, or `None` if a
    /// fetch is already in flight or the end of the data has been reached.
    /// The refusal is a defined no-op, not an error.
    pub fn begin_fetch(&mut self) -> Option<PageRequest> {
        match self.status {
            FetchStatus::LoadingInitial | FetchStatus::LoadingMore => {
                trace!("Fetch already in flight, ignoring");
                return None;
            }
            FetchStatus::EndReached => {
                trace!("End of directory reached, ignoring fetch request");
                return None;
            }
            FetchStatus::Idle | FetchStatus::Failed => {}
        }

        self.error_message = None;
        self.status = if self.cursor == 0 {
            FetchStatus::LoadingInitial
        } else {
            FetchStatus::LoadingMore
        };

        Some(PageRequest {
            skip: self.cursor,
            limit: self.page_size,
        })
    }

    /// Apply a successfully fetched page.
    ///
    /// A non-empty page is appended atomically and the cursor advances by the
    /// page size. An empty page flips the pager into its terminal
    /// `EndReached` state and changes nothing else.
    pub fn apply_page(&mut self, users: Vec<User>) {
        if users.is_empty() {
            debug!(loaded = self.users.len(), "Empty page - end of directory");
            self.status = FetchStatus::EndReached;
            return;
        }

        debug!(count = users.len(), cursor = self.cursor, "Page applied");
        self.users.extend(users);
        self.cursor += self.page_size;
        self.status = FetchStatus::Idle;
    }

    /// Apply a failed fetch. The cursor and accumulated records are left
    /// untouched so a retry continues from the same offset.
    pub fn apply_error(&mut self, message: String) {
        debug!(error = %message, cursor = self.cursor, "Fetch failed");
        self.status = FetchStatus::Failed;
        self.error_message = Some(message);
    }

    /// Clear a failure so fetching can resume from the same offset.
    /// Does nothing unless the pager is in the `Failed` state.
    pub fn retry(&mut self) {
        if self.status == FetchStatus::Failed {
            self.status = FetchStatus::Idle;
            self.error_message = None;
        }
    }

    /// All records fetched so far, in insertion order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Next offset to request.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn is_loading(&self) -> bool {
        matches!(
            self.status,
            FetchStatus::LoadingInitial | FetchStatus::LoadingMore
        )
    }

    pub fn is_end_reached(&self) -> bool {
        self.status == FetchStatus::EndReached
    }
}
