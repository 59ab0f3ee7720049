#![allow(unused_imports)]

pub(crate) use super::macros::*;
pub use super::{request::*, response::*, reviewer_ids, App};
pub use assert_json_diff::{assert_json_eq, assert_json_include};
pub use http::StatusCode;
pub use pr_review_backend::error;
pub use serde_json::{json, Value};
