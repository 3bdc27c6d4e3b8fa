//! Customer records API.
//!
//! Create, fetch, list and delete customer records. Each new customer's GitHub
//! username is verified against the GitHub REST API before it is stored.

pub mod model;
pub mod server;
