use super::error::FetchError;
use super::fetch_cycle::MetricsSource;
use crate::shared::config::ApiConfig;
use async_trait::async_trait;
use contracts::dashboards::d100_sales_overview::{
    CategorySlice, Granularity, HealthStatus, KpiSummary, ProductPerformance, RankEntry,
    TimeSeriesPoint, HEALTH_PATH, KPIS_PATH, PRODUCT_PERFORMANCE_PATH, SALES_BY_CATEGORY_PATH,
    SALES_OVER_TIME_PATH, TOP_CUSTOMERS_PATH,
};
use futures::future::{select, Either};
use futures::pin_mut;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use std::future::Future;

/// Metrics API client over `fetch`.
#[derive(Debug, Clone)]
pub struct HttpMetricsApi {
    config: ApiConfig,
}

impl HttpMetricsApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Probe `/health`. Not part of a fetch cycle.
    pub async fn check_health(&self) -> Result<HealthStatus, FetchError> {
        self.get_json(HEALTH_PATH, &[]).await
    }

    /// GET `path` and decode the JSON body, bounded by the configured timeout.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &'static str,
        query: &[(&str, String)],
    ) -> Result<T, FetchError> {
        let url = build_url(&self.config.endpoint_url(path), query);
        let after_ms = self.config.request_timeout_ms;

        let request = async {
            let response = Request::get(&url)
                .send()
                .await
                .map_err(|e| FetchError::Network {
                    endpoint: path,
                    message: e.to_string(),
                })?;
            let status = response.status();
            let body = response.text().await.map_err(|e| FetchError::Network {
                endpoint: path,
                message: e.to_string(),
            })?;
            decode_response(path, status, &body)
        };

        let result = with_deadline(request, TimeoutFuture::new(after_ms), path, after_ms).await;
        if let Err(FetchError::Timeout { .. }) = result {
            log::warn!("{} timed out after {} ms", url, after_ms);
        }
        result
    }
}

/// Map a finished response to a value: non-2xx is `Status`, a body that is
/// not the expected JSON is `Decode`.
fn decode_response<T: DeserializeOwned>(
    endpoint: &'static str,
    status: u16,
    body: &str,
) -> Result<T, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Status { endpoint, status });
    }
    serde_json::from_str(body).map_err(|e| FetchError::Decode {
        endpoint,
        message: e.to_string(),
    })
}

/// Race `request` against `deadline`. When the deadline fires first the
/// request future is dropped and its result never observed.
async fn with_deadline<T, F, D>(
    request: F,
    deadline: D,
    endpoint: &'static str,
    after_ms: u32,
) -> Result<T, FetchError>
where
    F: Future<Output = Result<T, FetchError>>,
    D: Future<Output = ()>,
{
    pin_mut!(request);
    pin_mut!(deadline);

    match select(request, deadline).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(FetchError::Timeout { endpoint, after_ms }),
    }
}

#[async_trait(?Send)]
impl MetricsSource for HttpMetricsApi {
    async fn kpis(&self) -> Result<KpiSummary, FetchError> {
        self.get_json(KPIS_PATH, &[]).await
    }

    async fn sales_over_time(
        &self,
        granularity: Granularity,
    ) -> Result<Vec<TimeSeriesPoint>, FetchError> {
        self.get_json(
            SALES_OVER_TIME_PATH,
            &[("period", granularity.as_str().to_string())],
        )
        .await
    }

    async fn sales_by_category(&self) -> Result<Vec<CategorySlice>, FetchError> {
        self.get_json(SALES_BY_CATEGORY_PATH, &[]).await
    }

    async fn top_customers(&self, limit: u32) -> Result<Vec<RankEntry>, FetchError> {
        self.get_json(TOP_CUSTOMERS_PATH, &[("limit", limit.to_string())])
            .await
    }

    async fn product_performance(&self) -> Result<ProductPerformance, FetchError> {
        self.get_json(PRODUCT_PERFORMANCE_PATH, &[]).await
    }
}

/// Append URL-encoded query parameters.
fn build_url(endpoint: &str, query: &[(&str, String)]) -> String {
    if query.is_empty() {
        return endpoint.to_string();
    }
    let params = query
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", endpoint, params)
}
