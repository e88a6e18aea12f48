//! Data models for directory entries.
//!
//! - `User`: one list entry with name parts, email, and avatar reference
//! - `UserPage`: one batch returned by a paged fetch
//! - `UserDetail`: the richer record returned by the single-user endpoint

pub mod user;

pub use user::{Address, Company, User, UserDetail, UserPage};
