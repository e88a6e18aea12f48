//! REST client module for the remote directory service.
//!
//! This module provides the `DirectoryClient` for fetching paged user
//! listings and single-user detail records.

pub mod client;
pub mod error;

pub use client::DirectoryClient;
pub use error::ApiError;
