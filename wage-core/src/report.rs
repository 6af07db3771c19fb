//! Read-side projections over the snapshot log.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{MonthLabel, MonthlySnapshot};

/// Wage statistics for one person across all of their snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageSummary {
    pub name: String,
    /// Wage of the most recent snapshot.
    pub latest_wage: Decimal,
    pub max_wage: Decimal,
    pub average_wage: Decimal,
    pub snapshot_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub month: MonthLabel,
    pub real_hourly_wage: Decimal,
}

/// Chronological wage series for one person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageTrend {
    pub name: String,
    pub points: Vec<TrendPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageReport {
    /// Highest latest wage first; ties by name.
    pub summaries: Vec<WageSummary>,
    /// Trend of the first summary, if there is one.
    pub trend: Option<WageTrend>,
}

impl WageReport {
    /// Projects a report from snapshots in any order.
    ///
    /// Snapshots are ordered by month and then by id, so several snapshots
    /// in one month keep the order they were appended in.
    pub fn from_snapshots(snapshots: &[MonthlySnapshot]) -> Self {
        let mut ordered: Vec<&MonthlySnapshot> = snapshots.iter().collect();
        ordered.sort_by(|a, b| a.month.cmp(&b.month).then(a.id.cmp(&b.id)));

        let mut by_name: BTreeMap<&str, Vec<&MonthlySnapshot>> = BTreeMap::new();
        for snapshot in &ordered {
            by_name.entry(snapshot.name.as_str()).or_default().push(snapshot);
        }

        let mut summaries: Vec<WageSummary> = by_name
            .iter()
            .filter_map(|(name, series)| summarize(name, series))
            .collect();
        summaries.sort_by(|a, b| {
            b.latest_wage
                .cmp(&a.latest_wage)
                .then_with(|| a.name.cmp(&b.name))
        });

        let trend = summaries.first().map(|top| WageTrend {
            name: top.name.clone(),
            points: by_name
                .get(top.name.as_str())
                .into_iter()
                .flatten()
                .map(|s| TrendPoint {
                    month: s.month.clone(),
                    real_hourly_wage: s.real_hourly_wage,
                })
                .collect(),
        });

        Self { summaries, trend }
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}

fn summarize(
    name: &str,
    series: &[&MonthlySnapshot],
) -> Option<WageSummary> {
    let latest = series.last()?;
    let wages = series.iter().map(|s| s.real_hourly_wage);
    let max_wage = wages.clone().max()?;
    let count = Decimal::from(series.len());
    // Very large wages can overflow the running total; their mean still fits.
    let average_wage = match wages
        .clone()
        .try_fold(Decimal::ZERO, |total, wage| total.checked_add(wage))
    {
        Some(total) => total / count,
        None => wages.map(|wage| wage / count).sum(),
    };
    Some(WageSummary {
        name: name.to_string(),
        latest_wage: latest.real_hourly_wage,
        max_wage,
        average_wage,
        snapshot_count: series.len(),
    })
}
