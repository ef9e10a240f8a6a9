//! Integration tests for the sentiment API.
//!
//! Drive the full router in-process with `tower::ServiceExt::oneshot`.
//! Run with: cargo test --test integration

mod common;
mod docs;
mod endpoints;
