use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a public transit commute is paid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitFare {
    /// Flat fare per commuting day (both directions).
    Daily(Decimal),
    /// Monthly pass, spread over the commuting days of a month.
    MonthlyPass(Decimal),
}

/// Transport mode together with the cost inputs that mode needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TransportMode {
    Car {
        gas_price: Decimal,
        miles_per_gallon: Decimal,
    },
    ElectricVehicle {
        /// Dollars per kWh.
        electricity_price: Decimal,
        miles_per_kwh: Decimal,
    },
    PublicTransit {
        fare: TransitFare,
        /// One-way walking time to and from stations, added to the ride.
        #[serde(default)]
        walking_minutes: Decimal,
    },
    Biking,
    Walking,
}

impl TransportMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Car { .. } => "Car (Gas)",
            Self::ElectricVehicle { .. } => "Electric Vehicle",
            Self::PublicTransit { .. } => "Public Transport",
            Self::Biking => "Biking",
            Self::Walking => "Walking",
        }
    }

    /// Whether the round-trip distance is meaningful for this mode.
    pub fn travels_own_distance(&self) -> bool {
        !matches!(self, Self::PublicTransit { .. })
    }

    /// Extra one-way minutes the mode adds on top of the ride itself.
    pub fn access_minutes(&self) -> Decimal {
        match self {
            Self::PublicTransit {
                walking_minutes, ..
            } => *walking_minutes,
            _ => Decimal::ZERO,
        }
    }
}

/// One complete commute option: how you travel, how far, how long, and
/// what it costs beyond the mode itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommuteScenario {
    pub transport: TransportMode,
    pub one_way_minutes: Decimal,
    #[serde(default)]
    pub one_way_miles: Decimal,
    /// Flat daily cost added to every mode (parking, tolls, gear upkeep).
    #[serde(default)]
    pub additional_daily_cost: Decimal,
}

/// The "current" commute and an "alternative" to compare it with.
///
/// The two scenarios are independent values; the only link between them
/// is [`ScenarioPair::synced`], which starts the alternative over as a
/// copy of the current commute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioPair {
    pub current: CommuteScenario,
    pub alternative: CommuteScenario,
}

impl ScenarioPair {
    /// Pairs `current` with an identical alternative.
    pub fn new(current: CommuteScenario) -> Self {
        Self {
            alternative: current.clone(),
            current,
        }
    }

    pub fn with_alternative(
        current: CommuteScenario,
        alternative: CommuteScenario,
    ) -> Self {
        Self {
            current,
            alternative,
        }
    }

    /// Returns a pair whose alternative is a fresh copy of the current
    /// scenario.
    pub fn synced(&self) -> Self {
        Self::new(self.current.clone())
    }
}
