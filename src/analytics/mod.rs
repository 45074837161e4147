//! Per-variant A/B analytics.
//!
//! Raw daily counters are produced by the event pipeline elsewhere;
//! this module only reads them. A report groups counters by
//! (example, source, variant), derives conversion rates and sums the
//! period totals. The average conversion rate is views-weighted
//! (`total_starts / total_views`), so low-traffic variants cannot skew
//! the period figure the way an unweighted mean of row rates would.

pub mod archive;

pub use archive::StatArchive;

use anyhow::{bail, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// One raw daily counter row, owned by the analytics/event domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantStat {
    pub example_id: Uuid,
    /// Traffic channel tag, e.g. "seo_detail" or "gallery".
    pub source: String,
    pub seo_variant_index: usize,
    pub date: NaiveDate,
    pub views_count: u64,
    pub starts_count: u64,
}

/// Aggregated per-(example, source, variant) report row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantStatRow {
    pub example_id: Uuid,
    pub source: String,
    pub seo_variant_index: usize,
    pub views_count: u64,
    pub starts_count: u64,
    pub conversion_rate: f64,
}

/// Report request parameters. Absent `source` means all sources; date
/// bounds are inclusive.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportQuery {
    pub source: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub limit: Option<usize>,
}

/// Report payload: rows plus period aggregates over the returned rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantReport {
    pub items: Vec<VariantStatRow>,
    pub total_views: u64,
    pub total_starts: u64,
    pub average_conversion_rate: f64,
}

/// Reject inverted date ranges before any data is touched.
pub fn validate_query(query: &ReportQuery) -> Result<()> {
    if let (Some(from), Some(to)) = (query.date_from, query.date_to) {
        if from > to {
            bail!("Invalid report range: date_from {} is after date_to {}", from, to);
        }
    }
    Ok(())
}

/// Starts per view; defined as 0 when there were no views.
pub fn conversion_rate(views_count: u64, starts_count: u64) -> f64 {
    if views_count == 0 {
        return 0.0;
    }
    starts_count as f64 / views_count as f64
}

/// Whether a raw stat row satisfies the query filters.
pub fn matches_query(stat: &VariantStat, query: &ReportQuery) -> bool {
    if let Some(source) = &query.source {
        if &stat.source != source {
            return false;
        }
    }
    if let Some(from) = query.date_from {
        if stat.date < from {
            return false;
        }
    }
    if let Some(to) = query.date_to {
        if stat.date > to {
            return false;
        }
    }
    true
}

/// Group filtered counters and compute the period report.
///
/// Rows are ordered by views descending (ties broken by key) and cut at
/// `limit`; the period totals are computed over the returned rows only.
pub fn aggregate(stats: &[VariantStat], query: &ReportQuery, limit: usize) -> VariantReport {
    let mut grouped: BTreeMap<(Uuid, String, usize), (u64, u64)> = BTreeMap::new();
    for stat in stats.iter().filter(|stat| matches_query(stat, query)) {
        let entry = grouped
            .entry((stat.example_id, stat.source.clone(), stat.seo_variant_index))
            .or_insert((0, 0));
        entry.0 += stat.views_count;
        entry.1 += stat.starts_count;
    }

    let mut items: Vec<VariantStatRow> = grouped
        .into_iter()
        .map(|((example_id, source, seo_variant_index), (views, starts))| VariantStatRow {
            example_id,
            source,
            seo_variant_index,
            views_count: views,
            starts_count: starts,
            conversion_rate: conversion_rate(views, starts),
        })
        .collect();
    items.sort_by(|a, b| {
        b.views_count
            .cmp(&a.views_count)
            .then_with(|| a.example_id.cmp(&b.example_id))
            .then_with(|| a.source.cmp(&b.source))
            .then_with(|| a.seo_variant_index.cmp(&b.seo_variant_index))
    });
    items.truncate(limit);

    let total_views: u64 = items.iter().map(|row| row.views_count).sum();
    let total_starts: u64 = items.iter().map(|row| row.starts_count).sum();

    VariantReport {
        average_conversion_rate: conversion_rate(total_views, total_starts),
        items,
        total_views,
        total_starts,
    }
}
