use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CompensationProfile, MonthLabel, RecordTerms, WageBreakdown};

/// A stored profile together with its latest computed wage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationRecord {
    pub id: i64,
    pub profile: CompensationProfile,
    /// Always the wage of the most recently appended snapshot.
    pub real_hourly_wage: Decimal,
    pub created_at: DateTime<Utc>,
}

impl CompensationRecord {
    pub fn terms(&self) -> RecordTerms {
        self.profile.terms()
    }
}

/// One point of a person's monthly wage history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySnapshot {
    pub id: i64,
    pub record_id: i64,
    /// Name of the profile the snapshot belongs to.
    pub name: String,
    pub month: MonthLabel,
    pub total_compensation: Decimal,
    pub commute_cost: Decimal,
    /// Committed hours: paid work plus commuting.
    pub work_hours: Decimal,
    pub real_hourly_wage: Decimal,
}

/// For appending snapshots (no id, record or name yet)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSnapshot {
    pub month: MonthLabel,
    pub total_compensation: Decimal,
    pub commute_cost: Decimal,
    pub work_hours: Decimal,
    pub real_hourly_wage: Decimal,
}

impl NewSnapshot {
    pub fn from_breakdown(month: MonthLabel, breakdown: &WageBreakdown) -> Self {
        Self {
            month,
            total_compensation: breakdown.total_compensation,
            commute_cost: breakdown.annual_commute_cost,
            work_hours: breakdown.committed_hours(),
            real_hourly_wage: breakdown.real_hourly_wage,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn snapshot_records_committed_hours() {
        let breakdown = WageBreakdown {
            total_compensation: dec!(120000),
            annual_commute_cost: dec!(2392),
            net_compensation: dec!(117608),
            annual_work_hours: dec!(2080),
            annual_commute_hours: dec!(173.33),
            real_hourly_wage: dec!(52.19),
            nominal_hourly_wage: dec!(57.69),
        };
        let month = MonthLabel::parse("2025-06").unwrap();

        let snapshot = NewSnapshot::from_breakdown(month.clone(), &breakdown);

        assert_eq!(snapshot.month, month);
        assert_eq!(snapshot.work_hours, dec!(2253.33));
        assert_eq!(snapshot.commute_cost, dec!(2392));
        assert_eq!(snapshot.real_hourly_wage, dec!(52.19));
    }
}
