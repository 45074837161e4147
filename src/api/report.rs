use crate::analytics::{aggregate, validate_query, ReportQuery, StatArchive, VariantReport};
use crate::catalog::CatalogManager;
use crate::orchestration::{log_event, EventType};
use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;

/// Report request as received from the console.
#[derive(Debug, Clone, Default)]
pub struct VariantReportPayload {
    pub source: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub limit: Option<usize>,
}

/// Validate, scan the stat archive and aggregate the per-variant
/// report. The date-range check runs before the archive is touched;
/// an unreachable archive is an error, not an empty report.
pub fn variant_report(
    manager: &CatalogManager,
    payload: VariantReportPayload,
) -> Result<VariantReport> {
    let query = ReportQuery {
        source: payload.source,
        date_from: payload.date_from,
        date_to: payload.date_to,
        limit: payload.limit,
    };
    // Fail fast on an inverted range; the archive enforces it again.
    validate_query(&query)?;

    let archive = StatArchive::new(manager.paths.stats_dir.clone());
    let stats = archive.load(&query)?;
    let limit = query.limit.unwrap_or(manager.config.reports.default_limit);
    let report = aggregate(&stats, &query, limit);

    log_event(
        manager,
        None,
        EventType::ReportRequested,
        json!({
            "source": query.source,
            "date_from": query.date_from,
            "date_to": query.date_to,
            "rows": report.items.len(),
            "total_views": report.total_views,
            "total_starts": report.total_starts,
        }),
    )?;

    Ok(report)
}
