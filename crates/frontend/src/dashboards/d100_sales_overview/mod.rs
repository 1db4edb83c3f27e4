//! D100 — sales overview: KPI cards, sales over time, category split,
//! top customers and product performance, all pre-aggregated by the
//! Metrics API.

pub mod api;
pub mod error;
pub mod fetch_cycle;
pub mod state;
pub mod ui;
pub mod view_model;
