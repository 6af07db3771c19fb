use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Storage code for the kind of car a profile commutes with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    Gas,
    Electric,
}

impl VehicleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gas => "gas",
            Self::Electric => "electric",
        }
    }

    /// Accepts the stored codes as well as the one-letter prompt answers.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gas" | "g" => Some(Self::Gas),
            "electric" | "e" => Some(Self::Electric),
            _ => None,
        }
    }
}

/// The car used for commuting, with the energy price and efficiency that
/// belong to its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Vehicle {
    Gas {
        /// Dollars per gallon.
        price_per_gallon: Decimal,
        miles_per_gallon: Decimal,
    },
    Electric {
        /// Dollars per kWh.
        price_per_kwh: Decimal,
        miles_per_kwh: Decimal,
    },
}

impl Vehicle {
    pub fn kind(&self) -> VehicleKind {
        match self {
            Self::Gas { .. } => VehicleKind::Gas,
            Self::Electric { .. } => VehicleKind::Electric,
        }
    }

    /// Price of one unit of fuel or energy.
    pub fn unit_price(&self) -> Decimal {
        match self {
            Self::Gas {
                price_per_gallon, ..
            } => *price_per_gallon,
            Self::Electric { price_per_kwh, .. } => *price_per_kwh,
        }
    }

    /// Miles travelled per unit of fuel or energy.
    pub fn efficiency(&self) -> Decimal {
        match self {
            Self::Gas {
                miles_per_gallon, ..
            } => *miles_per_gallon,
            Self::Electric { miles_per_kwh, .. } => *miles_per_kwh,
        }
    }

    pub fn gas_mileage(&self) -> Option<Decimal> {
        match self {
            Self::Gas {
                miles_per_gallon, ..
            } => Some(*miles_per_gallon),
            Self::Electric { .. } => None,
        }
    }

    pub fn electric_efficiency(&self) -> Option<Decimal> {
        match self {
            Self::Gas { .. } => None,
            Self::Electric { miles_per_kwh, .. } => Some(*miles_per_kwh),
        }
    }

    /// Rebuilds a vehicle from the flat storage layout.
    ///
    /// Exactly one of `gas_mileage` / `electric_efficiency` must be present
    /// and it must match `kind`; anything else yields `None`.
    pub fn from_parts(
        kind: VehicleKind,
        unit_price: Decimal,
        gas_mileage: Option<Decimal>,
        electric_efficiency: Option<Decimal>,
    ) -> Option<Self> {
        match (kind, gas_mileage, electric_efficiency) {
            (VehicleKind::Gas, Some(miles_per_gallon), None) => Some(Self::Gas {
                price_per_gallon: unit_price,
                miles_per_gallon,
            }),
            (VehicleKind::Electric, None, Some(miles_per_kwh)) => Some(Self::Electric {
                price_per_kwh: unit_price,
                miles_per_kwh,
            }),
            _ => None,
        }
    }
}

/// Everything the profile calculator needs to know about one person's pay
/// and car commute.
///
/// Commute time and distance are one-way figures; the calculator doubles
/// them for the round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationProfile {
    pub name: String,
    pub salary: Decimal,
    /// Annual value of restricted stock units.
    pub rsu: Decimal,
    /// Employer 401k match as a percentage of salary (4 means 4%).
    pub match_401k_percent: Decimal,
    /// Bonus as a percentage of salary.
    pub bonus_percent: Decimal,
    pub commute_minutes: Decimal,
    pub commute_miles: Decimal,
    pub vehicle: Vehicle,
    pub vehicle_cost: Decimal,
    /// Total miles the vehicle is expected to last.
    pub vehicle_lifetime_miles: Decimal,
    pub daily_hours: Decimal,
}

impl CompensationProfile {
    /// The subset of fields an update may change.
    pub fn terms(&self) -> RecordTerms {
        RecordTerms {
            salary: self.salary,
            rsu: self.rsu,
            daily_hours: self.daily_hours,
        }
    }

    /// Returns a copy of this profile with `terms` swapped in.
    pub fn with_terms(&self, terms: &RecordTerms) -> Self {
        Self {
            salary: terms.salary,
            rsu: terms.rsu,
            daily_hours: terms.daily_hours,
            ..self.clone()
        }
    }
}

/// Salary, RSU and daily hours: the only profile fields an update touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordTerms {
    pub salary: Decimal,
    pub rsu: Decimal,
    pub daily_hours: Decimal,
}

/// Requested changes to [`RecordTerms`]. `None` keeps the current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermChanges {
    pub salary: Option<Decimal>,
    pub rsu: Option<Decimal>,
    pub daily_hours: Option<Decimal>,
}

impl TermChanges {
    pub fn apply(&self, current: RecordTerms) -> RecordTerms {
        RecordTerms {
            salary: self.salary.unwrap_or(current.salary),
            rsu: self.rsu.unwrap_or(current.rsu),
            daily_hours: self.daily_hours.unwrap_or(current.daily_hours),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.salary.is_none() && self.rsu.is_none() && self.daily_hours.is_none()
    }
}
