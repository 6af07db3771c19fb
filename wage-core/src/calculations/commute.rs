//! Car commute costs for a [`CompensationProfile`].
//!
//! A commute costs fuel (or electricity) and wears the car down. Both are
//! charged per round-trip mile:
//!
//! | Item          | Formula                                           |
//! |---------------|---------------------------------------------------|
//! | round trip    | one-way miles × 2                                 |
//! | fuel / energy | round trip ÷ efficiency × unit price              |
//! | depreciation  | round trip × (vehicle cost ÷ lifetime mileage)    |
//! | daily total   | fuel + depreciation                               |
//! | annual total  | daily total × working days per year (260)         |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use wage_core::calculations::CommuteCostCalculator;
//! use wage_core::{CompensationProfile, Vehicle};
//!
//! let profile = CompensationProfile {
//!     name: "Avery".to_string(),
//!     salary: dec!(120000),
//!     rsu: dec!(0),
//!     match_401k_percent: dec!(0),
//!     bonus_percent: dec!(0),
//!     commute_minutes: dec!(20),
//!     commute_miles: dec!(10),
//!     vehicle: Vehicle::Gas {
//!         price_per_gallon: dec!(4),
//!         miles_per_gallon: dec!(25),
//!     },
//!     vehicle_cost: dec!(30000),
//!     vehicle_lifetime_miles: dec!(100000),
//!     daily_hours: dec!(8),
//! };
//!
//! let cost = CommuteCostCalculator::default().calculate(&profile).unwrap();
//!
//! assert_eq!(cost.daily_fuel, dec!(3.20));
//! assert_eq!(cost.daily_depreciation, dec!(6.00));
//! assert_eq!(cost.annual_total, dec!(2392.00));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::{CalculationError, checked, ensure_non_negative};
use crate::CompensationProfile;

/// Working days in the profile variant's year.
pub const WORKING_DAYS_PER_YEAR: u32 = 260;

/// Daily and annual cost of driving to work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommuteCost {
    /// Fuel or electricity for one round trip.
    pub daily_fuel: Decimal,
    pub daily_depreciation: Decimal,
    pub daily_total: Decimal,
    pub annual_total: Decimal,
}

#[derive(Debug, Clone)]
pub struct CommuteCostCalculator {
    working_days_per_year: Decimal,
}

impl Default for CommuteCostCalculator {
    fn default() -> Self {
        Self::new(Decimal::from(WORKING_DAYS_PER_YEAR))
    }
}

impl CommuteCostCalculator {
    pub fn new(working_days_per_year: Decimal) -> Self {
        Self {
            working_days_per_year,
        }
    }

    pub fn working_days_per_year(&self) -> Decimal {
        self.working_days_per_year
    }

    /// Computes the daily and annual commute cost of `profile`.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError`] if:
    /// - the vehicle efficiency or lifetime mileage is zero or negative
    /// - the distance, energy price or vehicle cost is negative
    /// - a cost grows too large for a `Decimal`
    pub fn calculate(
        &self,
        profile: &CompensationProfile,
    ) -> Result<CommuteCost, CalculationError> {
        self.validate(profile)?;

        let round_trip = self.round_trip_miles(profile.commute_miles)?;
        let daily_fuel = self.daily_fuel(
            round_trip,
            profile.vehicle.efficiency(),
            profile.vehicle.unit_price(),
        )?;
        let daily_depreciation = self.daily_depreciation(
            round_trip,
            profile.vehicle_cost,
            profile.vehicle_lifetime_miles,
        )?;
        let daily_total = checked(
            "daily commute cost",
            daily_fuel.checked_add(daily_depreciation),
        )?;

        Ok(CommuteCost {
            daily_fuel,
            daily_depreciation,
            daily_total,
            annual_total: self.annual_total(daily_total)?,
        })
    }

    fn validate(
        &self,
        profile: &CompensationProfile,
    ) -> Result<(), CalculationError> {
        let efficiency = profile.vehicle.efficiency();
        if efficiency <= Decimal::ZERO {
            return Err(CalculationError::NonPositiveEfficiency(efficiency));
        }
        if profile.vehicle_lifetime_miles <= Decimal::ZERO {
            return Err(CalculationError::NonPositiveLifetimeMileage(
                profile.vehicle_lifetime_miles,
            ));
        }
        ensure_non_negative("commute distance", profile.commute_miles)?;
        ensure_non_negative("fuel cost", profile.vehicle.unit_price())?;
        ensure_non_negative("car cost", profile.vehicle_cost)
    }

    fn round_trip_miles(
        &self,
        one_way_miles: Decimal,
    ) -> Result<Decimal, CalculationError> {
        checked("round trip distance", one_way_miles.checked_mul(Decimal::TWO))
    }

    /// Fuel or electricity for the round trip. `efficiency` is positive.
    fn daily_fuel(
        &self,
        round_trip: Decimal,
        efficiency: Decimal,
        unit_price: Decimal,
    ) -> Result<Decimal, CalculationError> {
        let units = checked("fuel used", round_trip.checked_div(efficiency))?;
        checked("fuel cost", units.checked_mul(unit_price))
    }

    /// Wear on the car, charged per mile driven. `lifetime_miles` is positive.
    fn daily_depreciation(
        &self,
        round_trip: Decimal,
        vehicle_cost: Decimal,
        lifetime_miles: Decimal,
    ) -> Result<Decimal, CalculationError> {
        let per_mile = checked(
            "depreciation per mile",
            vehicle_cost.checked_div(lifetime_miles),
        )?;
        checked("depreciation", round_trip.checked_mul(per_mile))
    }

    fn annual_total(
        &self,
        daily_total: Decimal,
    ) -> Result<Decimal, CalculationError> {
        checked(
            "annual commute cost",
            daily_total.checked_mul(self.working_days_per_year),
        )
    }
}
