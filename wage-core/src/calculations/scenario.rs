//! True hourly wage of a [`WorkSchedule`] under one [`CommuteScenario`].
//!
//! The scenario year has 50 work weeks. Commuting only happens on days not
//! worked from home, and the daily commute cost is the cost of the
//! transport mode plus a flat additional cost that applies to every mode.
//!
//! | Quantity             | Formula                                          |
//! |----------------------|--------------------------------------------------|
//! | annual income        | pay × paychecks per year                         |
//! | yearly work hours    | daily hours × work days × 50                     |
//! | daily commute hours  | (one-way minutes + walking minutes) × 2 ÷ 60     |
//! | yearly commute hours | daily commute hours × commute days × 50          |
//! | yearly commute cost  | daily commute cost × commute days × 50           |
//! | traditional wage     | income ÷ yearly work hours                       |
//! | true wage            | (income − commute cost) ÷ (work + commute hours) |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use wage_core::calculations::ScenarioCalculator;
//! use wage_core::{CommuteScenario, PayFrequency, TransportMode, WorkSchedule};
//!
//! let schedule = WorkSchedule {
//!     pay: dec!(2000),
//!     pay_frequency: PayFrequency::Biweekly,
//!     daily_hours: dec!(8),
//!     work_days_per_week: dec!(5),
//!     wfh_days_per_week: dec!(0),
//! };
//! let commute = CommuteScenario {
//!     transport: TransportMode::Car {
//!         gas_price: dec!(3.50),
//!         miles_per_gallon: dec!(25),
//!     },
//!     one_way_minutes: dec!(30),
//!     one_way_miles: dec!(10),
//!     additional_daily_cost: dec!(0),
//! };
//!
//! let calculator = ScenarioCalculator::new(&schedule).unwrap();
//! let result = calculator.calculate(&commute).unwrap();
//!
//! assert_eq!(result.breakdown.nominal_hourly_wage, dec!(26));
//! assert_eq!(result.breakdown.annual_commute_cost, dec!(700));
//! assert_eq!(result.breakdown.real_hourly_wage, dec!(22.8));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::{divide_or_zero, percent_of};
use super::error::{CalculationError, checked, ensure_non_negative};
use crate::{CommuteScenario, PayFrequency, TransitFare, TransportMode, WageBreakdown, WorkSchedule};

/// Work weeks in the scenario year.
pub const WORK_WEEKS_PER_YEAR: u32 = 50;

/// Average weeks per month, used to spread a monthly transit pass.
pub const WEEKS_PER_MONTH: Decimal = Decimal::from_parts(433, 0, 0, false, 2);

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// The part of the daily commute cost that comes from the transport mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostComponent {
    Fuel(Decimal),
    Electricity(Decimal),
    TransitFare(Decimal),
    /// Biking and walking cost nothing beyond the additional daily cost.
    None,
}

impl CostComponent {
    pub fn amount(&self) -> Decimal {
        match self {
            Self::Fuel(amount) | Self::Electricity(amount) | Self::TransitFare(amount) => *amount,
            Self::None => Decimal::ZERO,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Fuel(_) => "Fuel",
            Self::Electricity(_) => "Electricity",
            Self::TransitFare(_) => "Transport",
            Self::None => "No fuel/transportation costs",
        }
    }
}

/// Time and money one commute scenario costs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommuteMetrics {
    pub commute_days_per_week: Decimal,
    /// Round trip, walking to and from transit included.
    pub daily_commute_hours: Decimal,
    pub mode_cost: CostComponent,
    /// Mode cost plus the additional daily cost.
    pub daily_commute_cost: Decimal,
    pub yearly_commute_hours: Decimal,
    pub yearly_commute_cost: Decimal,
}

// Weekly and bi-weekly figures are bounded by the yearly ones, which the
// calculator has already checked.
impl CommuteMetrics {
    pub fn weekly_commute_hours(&self) -> Decimal {
        self.daily_commute_hours * self.commute_days_per_week
    }

    pub fn weekly_commute_cost(&self) -> Decimal {
        self.daily_commute_cost * self.commute_days_per_week
    }
}

/// Commute cost and time measured against a single paycheck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaycheckPerspective {
    pub paycheck: Decimal,
    pub commute_cost: Decimal,
    pub commute_hours: Decimal,
    /// Paycheck left after the commute is paid for.
    pub effective_pay: Decimal,
    /// Commute cost as a percentage of the paycheck; zero for an empty
    /// paycheck.
    pub cost_percent: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub breakdown: WageBreakdown,
    pub metrics: CommuteMetrics,
}

impl ScenarioResult {
    /// Yearly commute cost as a percentage of annual income.
    pub fn commute_cost_share(&self) -> Option<Decimal> {
        percent_of(
            self.breakdown.annual_commute_cost,
            self.breakdown.total_compensation,
        )
    }
}

/// Scenario calculator for one validated [`WorkSchedule`].
#[derive(Debug, Clone)]
pub struct ScenarioCalculator<'a> {
    schedule: &'a WorkSchedule,
    annual_income: Decimal,
    yearly_work_hours: Decimal,
}

impl<'a> ScenarioCalculator<'a> {
    /// Validates `schedule` and works out its yearly income and hours.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError`] if any schedule figure is negative,
    /// more days are worked from home than are worked at all, or the yearly
    /// income or hours do not fit a `Decimal`.
    pub fn new(schedule: &'a WorkSchedule) -> Result<Self, CalculationError> {
        ensure_non_negative("pay", schedule.pay)?;
        ensure_non_negative("daily hours", schedule.daily_hours)?;
        ensure_non_negative("work days per week", schedule.work_days_per_week)?;
        ensure_non_negative("work from home days", schedule.wfh_days_per_week)?;
        if schedule.wfh_days_per_week > schedule.work_days_per_week {
            return Err(CalculationError::WfhExceedsWorkDays {
                work_days: schedule.work_days_per_week,
                wfh_days: schedule.wfh_days_per_week,
            });
        }

        let weeks = work_weeks();
        let paychecks = checked(
            "paychecks per year",
            schedule
                .pay_frequency
                .paychecks_per_year(schedule.work_days_per_week, weeks),
        )?;
        let annual_income = checked("annual income", schedule.pay.checked_mul(paychecks))?;
        let yearly_work_hours = checked(
            "yearly work hours",
            schedule
                .daily_hours
                .checked_mul(schedule.work_days_per_week)
                .and_then(|weekly| weekly.checked_mul(weeks)),
        )?;

        Ok(Self {
            schedule,
            annual_income,
            yearly_work_hours,
        })
    }

    pub fn schedule(&self) -> &WorkSchedule {
        self.schedule
    }

    /// Pay multiplied out to a year.
    pub fn annual_income(&self) -> Decimal {
        self.annual_income
    }

    pub fn yearly_work_hours(&self) -> Decimal {
        self.yearly_work_hours
    }

    /// Computes the full wage breakdown for `scenario`.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError`] for a negative commute input or a
    /// figure too large for a `Decimal`.
    pub fn calculate(
        &self,
        scenario: &CommuteScenario,
    ) -> Result<ScenarioResult, CalculationError> {
        let metrics = self.commute_metrics(scenario)?;
        let breakdown = self.breakdown_with(self.annual_income, self.yearly_work_hours, &metrics)?;
        Ok(ScenarioResult { breakdown, metrics })
    }

    /// Commute time and cost of `scenario` under this schedule.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError`] for a negative commute input or a
    /// figure too large for a `Decimal`.
    pub fn commute_metrics(
        &self,
        scenario: &CommuteScenario,
    ) -> Result<CommuteMetrics, CalculationError> {
        validate_scenario(scenario)?;

        let commute_days_per_week = self.schedule.commute_days_per_week();
        let daily_commute_hours = daily_commute_hours(scenario)?;
        let mode_cost = mode_cost(scenario, commute_days_per_week)?;
        let daily_commute_cost = checked(
            "daily commute cost",
            mode_cost.amount().checked_add(scenario.additional_daily_cost),
        )?;
        let days_per_year = checked(
            "commute days per year",
            commute_days_per_week.checked_mul(work_weeks()),
        )?;

        Ok(CommuteMetrics {
            commute_days_per_week,
            daily_commute_hours,
            mode_cost,
            daily_commute_cost,
            yearly_commute_hours: checked(
                "yearly commute hours",
                daily_commute_hours.checked_mul(days_per_year),
            )?,
            yearly_commute_cost: checked(
                "yearly commute cost",
                daily_commute_cost.checked_mul(days_per_year),
            )?,
        })
    }

    /// Commute measured against one bi-weekly paycheck. Only bi-weekly pay
    /// lines up with whole commuting weeks, so other frequencies get `None`.
    pub fn paycheck_perspective(
        &self,
        metrics: &CommuteMetrics,
    ) -> Option<PaycheckPerspective> {
        if self.schedule.pay_frequency != PayFrequency::Biweekly {
            return None;
        }
        let paycheck = self.schedule.pay;
        let commute_cost = metrics.weekly_commute_cost() * Decimal::TWO;
        let commute_hours = metrics.weekly_commute_hours() * Decimal::TWO;
        Some(PaycheckPerspective {
            paycheck,
            commute_cost,
            commute_hours,
            effective_pay: paycheck - commute_cost,
            cost_percent: percent_of(commute_cost, paycheck).unwrap_or(Decimal::ZERO),
        })
    }

    /// Builds a breakdown from already known income and work hours.
    ///
    /// Comparisons use this to price an alternative commute against the
    /// income and hours of the current one.
    pub(crate) fn breakdown_with(
        &self,
        total_compensation: Decimal,
        annual_work_hours: Decimal,
        metrics: &CommuteMetrics,
    ) -> Result<WageBreakdown, CalculationError> {
        WageBreakdown::from_totals(
            total_compensation,
            metrics.yearly_commute_cost,
            annual_work_hours,
            metrics.yearly_commute_hours,
            total_compensation,
        )
    }
}

fn work_weeks() -> Decimal {
    Decimal::from(WORK_WEEKS_PER_YEAR)
}

fn daily_commute_hours(scenario: &CommuteScenario) -> Result<Decimal, CalculationError> {
    let hours = scenario
        .one_way_minutes
        .checked_add(scenario.transport.access_minutes())
        .and_then(|one_way| one_way.checked_mul(Decimal::TWO))
        .and_then(|minutes| minutes.checked_div(MINUTES_PER_HOUR));
    checked("daily commute hours", hours)
}

fn mode_cost(
    scenario: &CommuteScenario,
    commute_days_per_week: Decimal,
) -> Result<CostComponent, CalculationError> {
    let round_trip = checked(
        "round trip distance",
        scenario.one_way_miles.checked_mul(Decimal::TWO),
    )?;
    let cost = match scenario.transport {
        TransportMode::Car {
            gas_price,
            miles_per_gallon,
        } => CostComponent::Fuel(energy_cost(round_trip, miles_per_gallon, gas_price)?),
        TransportMode::ElectricVehicle {
            electricity_price,
            miles_per_kwh,
        } => CostComponent::Electricity(energy_cost(
            round_trip,
            miles_per_kwh,
            electricity_price,
        )?),
        TransportMode::PublicTransit { fare, .. } => {
            CostComponent::TransitFare(daily_fare(fare, commute_days_per_week)?)
        }
        TransportMode::Biking | TransportMode::Walking => CostComponent::None,
    };
    Ok(cost)
}

/// Round trip ÷ efficiency × price, zero for a non-positive efficiency.
fn energy_cost(
    round_trip: Decimal,
    efficiency: Decimal,
    unit_price: Decimal,
) -> Result<Decimal, CalculationError> {
    if efficiency <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }
    let units = checked("energy used", round_trip.checked_div(efficiency))?;
    checked("energy cost", units.checked_mul(unit_price))
}

/// Daily share of a transit fare. A monthly pass with no commuting days
/// costs nothing per day.
fn daily_fare(
    fare: TransitFare,
    commute_days_per_week: Decimal,
) -> Result<Decimal, CalculationError> {
    match fare {
        TransitFare::Daily(amount) => Ok(amount),
        TransitFare::MonthlyPass(amount) => {
            let days_per_month = checked(
                "commute days per month",
                commute_days_per_week.checked_mul(WEEKS_PER_MONTH),
            )?;
            divide_or_zero("daily fare", amount, days_per_month)
        }
    }
}

fn validate_scenario(scenario: &CommuteScenario) -> Result<(), CalculationError> {
    ensure_non_negative("commute minutes", scenario.one_way_minutes)?;
    ensure_non_negative("commute distance", scenario.one_way_miles)?;
    ensure_non_negative("additional daily cost", scenario.additional_daily_cost)?;
    match scenario.transport {
        TransportMode::Car { gas_price, .. } => ensure_non_negative("gas price", gas_price),
        TransportMode::ElectricVehicle {
            electricity_price, ..
        } => ensure_non_negative("electricity price", electricity_price),
        TransportMode::PublicTransit {
            fare,
            walking_minutes,
        } => {
            ensure_non_negative("walking minutes", walking_minutes)?;
            match fare {
                TransitFare::Daily(amount) => ensure_non_negative("daily fare", amount),
                TransitFare::MonthlyPass(amount) => ensure_non_negative("monthly pass", amount),
            }
        }
        TransportMode::Biking | TransportMode::Walking => Ok(()),
    }
}
