//! End-to-end flows over the real in-memory adapters. Upstream APIs are offline.

#[macro_use]
mod common;

mod project_flow;
pub mod support;
