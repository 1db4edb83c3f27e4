//! Wire contract of the sales metrics API consumed by the D100 dashboard.

pub mod dto;

pub use dto::*;
