//! Rolodex - client-side controller for a paginated remote user directory.
//!
//! The crate fetches user records page by page from a remote listing
//! endpoint and drives the list-presentation state around them: incremental
//! pagination with end-of-data detection, a local search filter over the
//! loaded records, and scroll-driven triggers for loading more and for the
//! scroll-to-top affordance.
//!
//! Rendering is the consumer's concern: the [`roster::Roster`] exposes the
//! displayed records, fetch status, and error message, and accepts the user
//! events (scroll offsets, near-end signals, search text, retry).

pub mod api;
pub mod config;
pub mod models;
pub mod roster;

pub use api::{ApiError, DirectoryClient};
pub use config::Config;
pub use models::{User, UserDetail, UserPage};
pub use roster::{AffordanceTransition, FetchStatus, Roster, ScrollCommand};
