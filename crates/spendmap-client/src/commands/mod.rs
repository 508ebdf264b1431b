pub mod awards;
pub mod check;
pub mod points;
pub mod recipients;
pub mod summary;

use std::path::Path;

use crate::award::Award;
use crate::contracts::types::SnapshotContext;
use crate::filter::{GeoFilter, Metric};
use crate::geo::GeoCatalog;
use crate::session::DashboardSession;
use crate::setup::DataContext;
use crate::snapshot::normalize::LoadReport;
use crate::{ClientResult, snapshot};

pub(crate) const NO_DATA_MESSAGE: &str = "No awards match the current filters.";

/// Snapshot selection shared by every session-backed command.
#[derive(Debug, Default)]
pub struct SessionOptions<'a> {
    pub agency: Option<String>,
    pub days: Option<u32>,
    pub data_dir_override: Option<&'a Path>,
}

pub(crate) struct LoadedSession {
    pub(crate) session: DashboardSession,
    pub(crate) context: DataContext,
    pub(crate) report: LoadReport,
}

pub(crate) fn load_session(
    options: &SessionOptions<'_>,
    filter: GeoFilter,
    metric: Metric,
) -> ClientResult<LoadedSession> {
    let context = DataContext::resolve(
        options.data_dir_override,
        options.agency.as_deref(),
        options.days,
    );
    let (awards, report) = snapshot::load_awards(&context)?;
    let geo = GeoCatalog::for_context(&context);
    let session = DashboardSession::new(awards, geo, filter, metric);
    Ok(LoadedSession {
        session,
        context,
        report,
    })
}

pub(crate) fn snapshot_context(context: &DataContext, report: &LoadReport) -> SnapshotContext {
    SnapshotContext {
        agency: context.agency.clone(),
        window_days: context.window_days,
        data_dir: context.data_dir.display().to_string(),
        rows_read: report.rows_read,
    }
}

pub(crate) fn empty_message(rows_present: bool) -> Option<String> {
    if rows_present {
        None
    } else {
        Some(NO_DATA_MESSAGE.to_string())
    }
}

pub(crate) fn award_row(award: &Award) -> crate::contracts::types::AwardRow {
    crate::contracts::types::AwardRow {
        action_date: award.action_date.clone(),
        recipient_name: award.recipient_name.clone(),
        award_amount: award.award_amount,
        piid: award.piid.clone(),
        state: award.state.clone(),
        pop_city: award.pop_city.clone(),
        pop_zip5: award.pop_zip5.clone(),
        psc: award.psc.clone(),
        naics: award.naics.clone(),
        set_aside: award.set_aside.clone(),
        is_small_business: crate::set_aside::is_small_business_set_aside(
            award.set_aside.as_deref(),
        ),
    }
}
