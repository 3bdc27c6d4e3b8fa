//! Test fixture modules for database rows and generated request data.
//!
//! - `customer` - generated customer requests and customer table rows

pub mod customer;
