mod controls;
mod dashboard;
mod kpi_cards;
mod panels;
mod top_customers;

pub use dashboard::SalesOverviewDashboard;
