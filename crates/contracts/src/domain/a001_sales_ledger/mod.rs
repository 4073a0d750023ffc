pub mod aggregate;
pub mod metrics;
