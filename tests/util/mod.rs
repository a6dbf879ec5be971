mod test_utils;

pub use test_utils::{json_body, TestContextExt};
