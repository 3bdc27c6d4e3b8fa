//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with state built from a [`TestContext`], without going
//! through the router.

mod customer;
mod openapi;

use customers_test_utils::prelude::*;

use crate::util::TestContextExt;
