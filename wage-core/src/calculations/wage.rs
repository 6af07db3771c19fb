//! Real hourly wage of a [`CompensationProfile`].
//!
//! The real wage spreads net compensation over every hour the job claims,
//! the unpaid commute included:
//!
//! ```text
//! total      = salary + rsu + salary × bonus% + salary × 401k match%
//! net        = total − annual commute cost
//! committed  = (daily hours + round-trip minutes ÷ 60) × 260
//! real wage  = net ÷ committed
//! nominal    = salary ÷ (daily hours × 260)
//! ```
//!
//! A wage whose hours come out as zero is zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::commute::{CommuteCost, CommuteCostCalculator};
use super::error::{CalculationError, checked, ensure_non_negative};
use crate::{CompensationProfile, WageBreakdown};

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Everything the profile calculator works out for one profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileWageResult {
    pub breakdown: WageBreakdown,
    pub commute: CommuteCost,
    pub bonus_amount: Decimal,
    pub match_401k_amount: Decimal,
}

#[derive(Debug, Clone, Default)]
pub struct WageCalculator {
    commute: CommuteCostCalculator,
}

impl WageCalculator {
    pub fn new(commute: CommuteCostCalculator) -> Self {
        Self { commute }
    }

    /// Computes the wage breakdown of `profile`.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError`] for negative pay, time or hours, for
    /// any commute input [`CommuteCostCalculator::calculate`] rejects, and
    /// when a figure grows too large for a `Decimal`.
    pub fn calculate(
        &self,
        profile: &CompensationProfile,
    ) -> Result<ProfileWageResult, CalculationError> {
        self.validate(profile)?;
        let commute = self.commute.calculate(profile)?;

        let bonus_amount = self.percent_of_salary("bonus", profile.salary, profile.bonus_percent)?;
        let match_401k_amount =
            self.percent_of_salary("401k match", profile.salary, profile.match_401k_percent)?;
        let total_compensation = [profile.rsu, bonus_amount, match_401k_amount]
            .into_iter()
            .try_fold(profile.salary, |total, part| {
                checked("total compensation", total.checked_add(part))
            })?;

        let breakdown = WageBreakdown::from_totals(
            total_compensation,
            commute.annual_total,
            self.annual_work_hours(profile.daily_hours)?,
            self.annual_commute_hours(profile.commute_minutes)?,
            profile.salary,
        )?;

        Ok(ProfileWageResult {
            breakdown,
            commute,
            bonus_amount,
            match_401k_amount,
        })
    }

    fn validate(
        &self,
        profile: &CompensationProfile,
    ) -> Result<(), CalculationError> {
        ensure_non_negative("salary", profile.salary)?;
        ensure_non_negative("RSU", profile.rsu)?;
        ensure_non_negative("401k match", profile.match_401k_percent)?;
        ensure_non_negative("bonus", profile.bonus_percent)?;
        ensure_non_negative("commute time", profile.commute_minutes)?;
        ensure_non_negative("daily hours", profile.daily_hours)
    }

    fn percent_of_salary(
        &self,
        field: &'static str,
        salary: Decimal,
        percent: Decimal,
    ) -> Result<Decimal, CalculationError> {
        let scaled = checked(field, salary.checked_mul(percent))?;
        checked(field, scaled.checked_div(Decimal::ONE_HUNDRED))
    }

    fn annual_work_hours(
        &self,
        daily_hours: Decimal,
    ) -> Result<Decimal, CalculationError> {
        checked(
            "annual work hours",
            daily_hours.checked_mul(self.commute.working_days_per_year()),
        )
    }

    fn annual_commute_hours(
        &self,
        one_way_minutes: Decimal,
    ) -> Result<Decimal, CalculationError> {
        let daily = one_way_minutes
            .checked_mul(Decimal::TWO)
            .and_then(|minutes| minutes.checked_div(MINUTES_PER_HOUR));
        let daily = checked("annual commute hours", daily)?;
        checked(
            "annual commute hours",
            daily.checked_mul(self.commute.working_days_per_year()),
        )
    }
}
