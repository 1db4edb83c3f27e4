//! Dashboard state machine: `Loading` while the latest fetch cycle is in
//! flight, `Ready` once it settles.
//!
//! Every cycle gets a sequence number. Only the latest cycle may change the
//! state; results of superseded cycles are dropped, so a slow "month" cycle
//! can never overwrite a newer "year" one.

use super::fetch_cycle::{CycleOutcome, DashboardData};
use chrono::{DateTime, Utc};
use contracts::dashboards::d100_sales_overview::Granularity;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
}

/// Handle of a started cycle, passed back to [`DashboardState::settle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleTicket {
    pub seq: u64,
    pub granularity: Granularity,
}

/// What `settle` did with a cycle outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// New snapshot is shown.
    Applied,
    /// Previous snapshot kept, failure recorded.
    Failed,
    /// A newer cycle was started; outcome dropped.
    Superseded,
}

#[derive(Debug, Clone)]
pub struct DashboardState {
    phase: Phase,
    snapshot: Arc<DashboardData>,
    /// Granularity of the time series in `snapshot`, `None` before the first success.
    snapshot_granularity: Option<Granularity>,
    granularity: Granularity,
    latest_cycle: u64,
    last_failure: Option<String>,
    refreshed_at: Option<DateTime<Utc>>,
}

impl DashboardState {
    /// Initial state: loading, nothing to show yet.
    pub fn new(granularity: Granularity) -> Self {
        Self {
            phase: Phase::Loading,
            snapshot: Arc::new(DashboardData::default()),
            snapshot_granularity: None,
            granularity,
            latest_cycle: 0,
            last_failure: None,
            refreshed_at: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Current view model. Cheap to clone and never partially updated.
    pub fn snapshot(&self) -> Arc<DashboardData> {
        Arc::clone(&self.snapshot)
    }

    pub fn snapshot_granularity(&self) -> Option<Granularity> {
        self.snapshot_granularity
    }

    /// Granularity of the latest requested cycle.
    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn latest_cycle(&self) -> u64 {
        self.latest_cycle
    }

    /// Set when the latest settled cycle failed and stale data is shown.
    pub fn last_failure(&self) -> Option<&str> {
        self.last_failure.as_deref()
    }

    pub fn refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.refreshed_at
    }

    /// Start a new cycle; any cycle still in flight becomes stale.
    pub fn begin_cycle(&mut self, granularity: Granularity) -> CycleTicket {
        self.latest_cycle += 1;
        self.granularity = granularity;
        self.phase = Phase::Loading;
        CycleTicket {
            seq: self.latest_cycle,
            granularity,
        }
    }

    /// Apply the outcome of a cycle if it is still the latest one.
    pub fn settle(
        &mut self,
        ticket: CycleTicket,
        outcome: CycleOutcome,
        now: DateTime<Utc>,
    ) -> Settlement {
        if ticket.seq != self.latest_cycle {
            return Settlement::Superseded;
        }

        self.phase = Phase::Ready;
        match outcome {
            CycleOutcome::AllSucceeded(data) => {
                self.snapshot = Arc::new(data);
                self.snapshot_granularity = Some(ticket.granularity);
                self.last_failure = None;
                self.refreshed_at = Some(now);
                Settlement::Applied
            }
            CycleOutcome::AnyFailed(err) => {
                self.last_failure = Some(err.to_string());
                Settlement::Failed
            }
        }
    }
}
