//! Server application core modules.
//!
//! This module contains the HTTP routing, request handlers, customer business rules,
//! database access, the GitHub API client and background jobs of the customers service.

pub mod app;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
