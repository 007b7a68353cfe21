//! Command implementations.

mod plan;

pub use plan::plan_execute;
