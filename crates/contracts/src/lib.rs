//! Shared contracts: the pure data model and the metrics engine behind the
//! sales BI dashboard. No wasm and no UI, so everything here is testable
//! with a plain `cargo test`.

pub mod domain;
pub mod shared;
