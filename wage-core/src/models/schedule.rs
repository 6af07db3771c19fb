use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How often a paycheck of [`WorkSchedule::pay`] arrives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayFrequency {
    Daily,
    Weekly,
    #[default]
    Biweekly,
    SemiMonthly,
    Monthly,
}

impl PayFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
            Self::SemiMonthly => "semi_monthly",
            Self::Monthly => "monthly",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            "biweekly" | "bi_weekly" => Some(Self::Biweekly),
            "semi_monthly" | "semimonthly" => Some(Self::SemiMonthly),
            "monthly" => Some(Self::Monthly),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Biweekly => "Bi-weekly",
            Self::SemiMonthly => "Semi-monthly",
            Self::Monthly => "Monthly",
        }
    }

    /// Number of paychecks in a year, `None` if it does not fit a `Decimal`.
    ///
    /// Daily pay scales with the days worked in a 50-week year; the other
    /// frequencies are fixed.
    pub fn paychecks_per_year(
        &self,
        work_days_per_week: Decimal,
        work_weeks_per_year: Decimal,
    ) -> Option<Decimal> {
        match self {
            Self::Daily => work_days_per_week.checked_mul(work_weeks_per_year),
            Self::Weekly => Some(work_weeks_per_year),
            Self::Biweekly => Some(Decimal::from(26)),
            Self::SemiMonthly => Some(Decimal::from(24)),
            Self::Monthly => Some(Decimal::from(12)),
        }
    }
}

/// Pay and weekly work pattern shared by every commute scenario being
/// compared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSchedule {
    /// Amount of one paycheck.
    pub pay: Decimal,
    #[serde(default)]
    pub pay_frequency: PayFrequency,
    pub daily_hours: Decimal,
    pub work_days_per_week: Decimal,
    /// Days per week worked from home; must not exceed `work_days_per_week`.
    #[serde(default)]
    pub wfh_days_per_week: Decimal,
}

impl WorkSchedule {
    /// Days per week spent commuting. Negative when the schedule is invalid.
    pub fn commute_days_per_week(&self) -> Decimal {
        self.work_days_per_week - self.wfh_days_per_week
    }
}
