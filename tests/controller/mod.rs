//! Integration tests for the HTTP controllers.
//!
//! Handlers are called directly with extractors built by hand, responses are checked for
//! status code and JSON body.

mod favorite;
mod person;
mod planet;
mod species;
mod user;
mod vehicle;

use holocron_test_utils::prelude::*;

use crate::util::{json_body, TestContextExt};
