//! # Report Commands

use chrono::Utc;
use tracing::debug;

use shopdesk_store::{DashboardSummary, ReportSummary};

use crate::state::{ConfigState, StoreState};

/// Dashboard cards for today (UTC).
pub fn get_dashboard(store: &StoreState, config: &ConfigState) -> DashboardSummary {
    debug!("get_dashboard command");
    let today = Utc::now().date_naive();
    store.with_store(|s| s.dashboard(today, config.low_stock_threshold))
}

pub fn get_report(store: &StoreState, config: &ConfigState) -> ReportSummary {
    debug!("get_report command");
    store.with_store(|s| s.report(config.low_stock_threshold))
}
