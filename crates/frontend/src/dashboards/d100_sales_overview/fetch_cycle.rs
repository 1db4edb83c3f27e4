//! One refresh of the dashboard: five concurrent reads joined into a single
//! outcome.

use super::error::FetchError;
use async_trait::async_trait;
use contracts::dashboards::d100_sales_overview::{
    CategorySlice, Granularity, KpiSummary, ProductPerformance, RankEntry, TimeSeriesPoint,
};

/// Everything the dashboard shows, replaced as a whole on each successful cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub kpis: KpiSummary,
    pub sales_over_time: Vec<TimeSeriesPoint>,
    pub sales_by_category: Vec<CategorySlice>,
    pub top_customers: Vec<RankEntry>,
    pub product_performance: ProductPerformance,
}

/// Read side of the Metrics API.
///
/// Futures are not `Send`: the dashboard runs on the browser event loop.
#[async_trait(?Send)]
pub trait MetricsSource {
    async fn kpis(&self) -> Result<KpiSummary, FetchError>;

    async fn sales_over_time(
        &self,
        granularity: Granularity,
    ) -> Result<Vec<TimeSeriesPoint>, FetchError>;

    async fn sales_by_category(&self) -> Result<Vec<CategorySlice>, FetchError>;

    async fn top_customers(&self, limit: u32) -> Result<Vec<RankEntry>, FetchError>;

    async fn product_performance(&self) -> Result<ProductPerformance, FetchError>;
}

/// Result of a fetch cycle: all five slots or the first failure.
#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    AllSucceeded(DashboardData),
    AnyFailed(FetchError),
}

/// Issue all five reads at once and wait for every one of them.
///
/// The first failure ends the cycle; requests still in flight are dropped
/// and nothing from this cycle is kept.
pub async fn run_fetch_cycle<S>(source: &S, granularity: Granularity, limit: u32) -> CycleOutcome
where
    S: MetricsSource + ?Sized,
{
    log::debug!("Sales overview fetch cycle started (period={}, limit={})", granularity, limit);

    let joined = futures::try_join!(
        source.kpis(),
        source.sales_over_time(granularity),
        source.sales_by_category(),
        source.top_customers(limit),
        source.product_performance(),
    );

    match joined {
        Ok((kpis, sales_over_time, sales_by_category, top_customers, product_performance)) => {
            log::debug!(
                "Sales overview fetch cycle done: {} time buckets, {} categories, {} ranked entries",
                sales_over_time.len(),
                sales_by_category.len(),
                top_customers.len()
            );
            CycleOutcome::AllSucceeded(DashboardData {
                kpis,
                sales_over_time,
                sales_by_category,
                top_customers,
                product_performance,
            })
        }
        Err(err) => {
            log::warn!("Sales overview fetch cycle failed: {}", err);
            CycleOutcome::AnyFailed(err)
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use contracts::dashboards::d100_sales_overview::{
        KPIS_PATH, PRODUCT_PERFORMANCE_PATH, SALES_BY_CATEGORY_PATH, SALES_OVER_TIME_PATH,
        TOP_CUSTOMERS_PATH,
    };
    use futures::channel::oneshot;
    use std::cell::RefCell;

    /// In-memory Metrics API with a scripted failure and an optional gate
    /// holding back `/sales-over-time`.
    #[derive(Default)]
    pub(crate) struct FakeSource {
        failure: Option<FetchError>,
        gate: RefCell<Option<oneshot::Receiver<()>>>,
        pub calls: RefCell<Vec<String>>,
    }

    impl FakeSource {
        /// `endpoint` answers with HTTP 500.
        pub fn failing(endpoint: &'static str) -> Self {
            Self::failing_with(FetchError::Status {
                endpoint,
                status: 500,
            })
        }

        /// The endpoint named by `err` fails with `err`.
        pub fn failing_with(err: FetchError) -> Self {
            Self {
                failure: Some(err),
                ..Default::default()
            }
        }

        pub fn gated(gate: oneshot::Receiver<()>) -> Self {
            Self {
                gate: RefCell::new(Some(gate)),
                ..Default::default()
            }
        }

        fn call(&self, endpoint: &'static str) -> Result<(), FetchError> {
            self.calls.borrow_mut().push(endpoint.to_string());
            match &self.failure {
                Some(err) if err.endpoint() == endpoint => Err(err.clone()),
                _ => Ok(()),
            }
        }
    }

    #[async_trait(?Send)]
    impl MetricsSource for FakeSource {
        async fn kpis(&self) -> Result<KpiSummary, FetchError> {
            self.call(KPIS_PATH)?;
            Ok(KpiSummary {
                total_revenue: Some(1234.56),
                total_orders: Some(307.0),
                ..Default::default()
            })
        }

        async fn sales_over_time(
            &self,
            granularity: Granularity,
        ) -> Result<Vec<TimeSeriesPoint>, FetchError> {
            let gate = self.gate.borrow_mut().take();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            self.call(SALES_OVER_TIME_PATH)?;
            self.calls.borrow_mut().push(format!("period={}", granularity));
            Ok(vec![TimeSeriesPoint {
                date: granularity.to_string(),
                total_sales: Some(10.0),
                order_count: None,
            }])
        }

        async fn sales_by_category(&self) -> Result<Vec<CategorySlice>, FetchError> {
            self.call(SALES_BY_CATEGORY_PATH)?;
            Ok(vec![CategorySlice {
                category: "Shipped".to_string(),
                total_sales: Some(300.0),
                order_count: None,
                avg_sales: None,
            }])
        }

        async fn top_customers(&self, limit: u32) -> Result<Vec<RankEntry>, FetchError> {
            self.call(TOP_CUSTOMERS_PATH)?;
            Ok((0..limit)
                .map(|i| RankEntry {
                    customer_name: Some(format!("Customer {}", i + 1)),
                    total_sales: Some(100.0 - f64::from(i)),
                    ..Default::default()
                })
                .collect())
        }

        async fn product_performance(&self) -> Result<ProductPerformance, FetchError> {
            self.call(PRODUCT_PERFORMANCE_PATH)?;
            Ok(ProductPerformance::NoData {
                message: "Product line data not available".to_string(),
            })
        }
    }
}
