use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{divide_or_zero, percent_of};
use crate::calculations::error::{CalculationError, checked};

/// Cost, time and wage figures produced by either calculator.
///
/// Values are kept at full precision; round with
/// [`round_half_up`](crate::calculations::common::round_half_up) for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageBreakdown {
    /// Annual compensation before commuting is taken into account.
    pub total_compensation: Decimal,
    pub annual_commute_cost: Decimal,
    /// Compensation left after paying for the commute.
    pub net_compensation: Decimal,
    /// Paid hours per year.
    pub annual_work_hours: Decimal,
    /// Unpaid hours per year spent commuting.
    pub annual_commute_hours: Decimal,
    /// Net compensation per committed hour (work plus commute).
    pub real_hourly_wage: Decimal,
    /// Headline pay per paid hour, ignoring the commute.
    pub nominal_hourly_wage: Decimal,
}

impl WageBreakdown {
    /// Derives net compensation and both wages from annual totals.
    ///
    /// `nominal_pay` is what the nominal wage spreads over the work hours:
    /// the salary alone for a profile, all income for a scenario. A
    /// breakdown built here can always report its committed hours and wage
    /// difference.
    pub(crate) fn from_totals(
        total_compensation: Decimal,
        annual_commute_cost: Decimal,
        annual_work_hours: Decimal,
        annual_commute_hours: Decimal,
        nominal_pay: Decimal,
    ) -> Result<Self, CalculationError> {
        let net_compensation = checked(
            "net compensation",
            total_compensation.checked_sub(annual_commute_cost),
        )?;
        let committed_hours = checked(
            "committed hours",
            annual_work_hours.checked_add(annual_commute_hours),
        )?;
        let real_hourly_wage =
            divide_or_zero("real hourly wage", net_compensation, committed_hours)?;
        let nominal_hourly_wage =
            divide_or_zero("nominal hourly wage", nominal_pay, annual_work_hours)?;
        checked(
            "wage difference",
            nominal_hourly_wage.checked_sub(real_hourly_wage),
        )?;

        Ok(Self {
            total_compensation,
            annual_commute_cost,
            net_compensation,
            annual_work_hours,
            annual_commute_hours,
            real_hourly_wage,
            nominal_hourly_wage,
        })
    }

    /// Hours per year given up to the job, commuting included.
    pub fn committed_hours(&self) -> Decimal {
        self.annual_work_hours + self.annual_commute_hours
    }

    /// How much of the nominal wage the commute eats.
    pub fn wage_difference(&self) -> Decimal {
        self.nominal_hourly_wage - self.real_hourly_wage
    }

    /// [`wage_difference`](Self::wage_difference) as a percentage of the
    /// nominal wage, `None` when the nominal wage is zero.
    pub fn difference_percent(&self) -> Option<Decimal> {
        percent_of(self.wage_difference(), self.nominal_hourly_wage)
    }
}
