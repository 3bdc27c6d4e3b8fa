//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations. They are generic
//! over `ConnectionTrait` so they work on a pooled connection or inside a transaction.

pub mod customer;
