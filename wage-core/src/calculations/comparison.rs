//! Current commute versus an alternative, under the same work schedule.
//!
//! The alternative keeps the current annual income and yearly work hours;
//! only its commute metrics are recomputed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::percent_of;
use super::error::{CalculationError, checked};
use super::scenario::{ScenarioCalculator, ScenarioResult};
use crate::CommuteScenario;

/// A metric measured for both commutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricDelta {
    pub current: Decimal,
    pub alternative: Decimal,
}

impl MetricDelta {
    /// Pairs the two measurements of `field`.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::Overflow`] if their difference does not
    /// fit a `Decimal`, so [`savings`](Self::savings) and
    /// [`change`](Self::change) never overflow.
    pub fn new(
        field: &'static str,
        current: Decimal,
        alternative: Decimal,
    ) -> Result<Self, CalculationError> {
        checked(field, current.checked_sub(alternative))?;
        Ok(Self {
            current,
            alternative,
        })
    }

    /// How much the alternative saves: current − alternative.
    pub fn savings(&self) -> Decimal {
        self.current - self.alternative
    }

    /// How much the alternative gains: alternative − current.
    pub fn change(&self) -> Decimal {
        self.alternative - self.current
    }

    pub fn savings_percent(&self) -> Option<Decimal> {
        percent_of(self.savings(), self.current)
    }

    pub fn change_percent(&self) -> Option<Decimal> {
        percent_of(self.change(), self.current)
    }
}

/// Side-by-side figures for the current and alternative commute.
///
/// Cost and time metrics read as savings (positive when the alternative is
/// cheaper or shorter); the true wage reads as a gain (positive when the
/// alternative pays better per committed hour).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommuteComparison {
    pub daily_commute_hours: MetricDelta,
    pub daily_commute_cost: MetricDelta,
    pub yearly_commute_hours: MetricDelta,
    pub yearly_commute_cost: MetricDelta,
    pub true_hourly_wage: MetricDelta,
    /// The alternative priced with the current income and work hours.
    pub alternative: ScenarioResult,
}

impl CommuteComparison {
    /// Prices `alternative` against the already computed `current` result.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError`] for a negative input in `alternative`
    /// or a figure too large for a `Decimal`.
    pub fn between(
        calculator: &ScenarioCalculator<'_>,
        current: &ScenarioResult,
        alternative: &CommuteScenario,
    ) -> Result<Self, CalculationError> {
        let metrics = calculator.commute_metrics(alternative)?;
        let breakdown = calculator.breakdown_with(
            current.breakdown.total_compensation,
            current.breakdown.annual_work_hours,
            &metrics,
        )?;
        let alternative = ScenarioResult { breakdown, metrics };

        Ok(Self {
            daily_commute_hours: MetricDelta::new(
                "daily commute hours",
                current.metrics.daily_commute_hours,
                alternative.metrics.daily_commute_hours,
            )?,
            daily_commute_cost: MetricDelta::new(
                "daily commute cost",
                current.metrics.daily_commute_cost,
                alternative.metrics.daily_commute_cost,
            )?,
            yearly_commute_hours: MetricDelta::new(
                "yearly commute hours",
                current.metrics.yearly_commute_hours,
                alternative.metrics.yearly_commute_hours,
            )?,
            yearly_commute_cost: MetricDelta::new(
                "yearly commute cost",
                current.metrics.yearly_commute_cost,
                alternative.metrics.yearly_commute_cost,
            )?,
            true_hourly_wage: MetricDelta::new(
                "true hourly wage",
                current.breakdown.real_hourly_wage,
                alternative.breakdown.real_hourly_wage,
            )?,
            alternative,
        })
    }

    /// Whether switching raises the true hourly wage.
    pub fn is_favorable(&self) -> bool {
        self.true_hourly_wage.change() > Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::common::round_half_up;
    use crate::{PayFrequency, ScenarioPair, TransitFare, TransportMode, WorkSchedule};

    fn test_schedule() -> WorkSchedule {
        WorkSchedule {
            pay: dec!(2000),
            pay_frequency: PayFrequency::Biweekly,
            daily_hours: dec!(8),
            work_days_per_week: dec!(5),
            wfh_days_per_week: dec!(0),
        }
    }

    fn car_commute() -> CommuteScenario {
        CommuteScenario {
            transport: TransportMode::Car {
                gas_price: dec!(3.50),
                miles_per_gallon: dec!(25),
            },
            one_way_minutes: dec!(30),
            one_way_miles: dec!(10),
            additional_daily_cost: dec!(0),
        }
    }

    // =========================================================================
    // MetricDelta tests
    // =========================================================================

    #[test]
    fn metric_delta_directions() {
        let delta = MetricDelta::new("yearly commute cost", dec!(700), dec!(500)).unwrap();

        assert_eq!(delta.savings(), dec!(200));
        assert_eq!(delta.change(), dec!(-200));
        assert_eq!(delta.savings_percent().map(round_half_up), Some(dec!(28.57)));
    }

    #[test]
    fn metric_delta_percent_needs_nonzero_current() {
        let delta = MetricDelta::new("yearly commute cost", dec!(0), dec!(500)).unwrap();

        assert_eq!(delta.change_percent(), None);
        assert_eq!(delta.savings_percent(), None);
    }

    #[test]
    fn metric_delta_rejects_unrepresentable_difference() {
        let result = MetricDelta::new("true hourly wage", Decimal::MAX, Decimal::MIN);

        assert_eq!(
            result,
            Err(CalculationError::Overflow {
                field: "true hourly wage",
            })
        );
    }

    // =========================================================================
    // between tests
    // =========================================================================

    #[test]
    fn comparing_with_copy_gives_zero_deltas() {
        let schedule = test_schedule();
        let calculator = ScenarioCalculator::new(&schedule).unwrap();
        let pair = ScenarioPair::new(car_commute());
        let current = calculator.calculate(&pair.current).unwrap();

        let comparison = CommuteComparison::between(&calculator, &current, &pair.alternative).unwrap();

        for delta in [
            comparison.daily_commute_hours,
            comparison.daily_commute_cost,
            comparison.yearly_commute_hours,
            comparison.yearly_commute_cost,
            comparison.true_hourly_wage,
        ] {
            assert_eq!(delta.savings(), dec!(0));
            assert_eq!(delta.change(), dec!(0));
        }
        assert!(!comparison.is_favorable());
        assert_eq!(comparison.alternative, current);
    }

    #[test]
    fn biking_alternative_saves_money_and_raises_wage() {
        let schedule = test_schedule();
        let calculator = ScenarioCalculator::new(&schedule).unwrap();
        let current = calculator.calculate(&car_commute()).unwrap();
        let alternative = CommuteScenario {
            transport: TransportMode::Biking,
            one_way_minutes: dec!(30),
            one_way_miles: dec!(5),
            additional_daily_cost: dec!(0),
        };

        let comparison = CommuteComparison::between(&calculator, &current, &alternative).unwrap();

        assert_eq!(comparison.yearly_commute_cost.savings(), dec!(700));
        assert_eq!(comparison.yearly_commute_hours.savings(), dec!(0));
        assert_eq!(
            round_half_up(comparison.true_hourly_wage.alternative),
            dec!(23.11)
        );
        assert!(comparison.is_favorable());
    }

    #[test]
    fn longer_transit_ride_lowers_wage() {
        let schedule = test_schedule();
        let calculator = ScenarioCalculator::new(&schedule).unwrap();
        let current = calculator.calculate(&car_commute()).unwrap();
        let alternative = CommuteScenario {
            transport: TransportMode::PublicTransit {
                fare: TransitFare::Daily(dec!(2.80)),
                walking_minutes: dec!(15),
            },
            one_way_minutes: dec!(45),
            one_way_miles: dec!(0),
            additional_daily_cost: dec!(0),
        };

        let comparison = CommuteComparison::between(&calculator, &current, &alternative).unwrap();

        assert_eq!(comparison.daily_commute_hours.savings(), dec!(-1));
        assert_eq!(comparison.yearly_commute_cost.savings(), dec!(0));
        assert!(comparison.true_hourly_wage.change() < dec!(0));
        assert!(!comparison.is_favorable());
    }

    #[test]
    fn alternative_keeps_current_income_and_hours() {
        let schedule = test_schedule();
        let calculator = ScenarioCalculator::new(&schedule).unwrap();
        let current = calculator.calculate(&car_commute()).unwrap();

        let comparison =
            CommuteComparison::between(&calculator, &current, &ScenarioPair::new(car_commute()).alternative)
                .unwrap();

        assert_eq!(
            comparison.alternative.breakdown.total_compensation,
            current.breakdown.total_compensation
        );
        assert_eq!(
            comparison.alternative.breakdown.annual_work_hours,
            current.breakdown.annual_work_hours
        );
    }

    #[test]
    fn alternative_too_costly_to_price_is_an_error() {
        let schedule = test_schedule();
        let calculator = ScenarioCalculator::new(&schedule).unwrap();
        let current = calculator.calculate(&car_commute()).unwrap();
        let alternative = CommuteScenario {
            transport: TransportMode::ElectricVehicle {
                electricity_price: dec!(1),
                miles_per_kwh: dec!(0.00000000000000001),
            },
            one_way_miles: dec!(1000000000000),
            ..car_commute()
        };

        assert_eq!(
            CommuteComparison::between(&calculator, &current, &alternative),
            Err(CalculationError::Overflow { field: "energy used" })
        );
    }
}
