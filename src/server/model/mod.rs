//! Server application models and type definitions.

pub mod app;
