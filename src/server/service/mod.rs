//! Service layer for business logic.
//!
//! Services coordinate repositories and external APIs: customer validation and storage,
//! and the GitHub client used to verify usernames.

pub mod customer;
pub mod github;
