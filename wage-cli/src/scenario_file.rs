//! TOML description of a work schedule and the commutes to price with it.
//!
//! ```toml
//! [schedule]
//! pay = 2000
//! pay_frequency = "biweekly"   # daily | weekly | biweekly | semi_monthly | monthly
//! daily_hours = 8
//! work_days_per_week = 5
//! wfh_days_per_week = 0
//!
//! [current]
//! one_way_minutes = 30
//! one_way_miles = 10
//! transport = { mode = "car", gas_price = 3.50, miles_per_gallon = 25 }
//!
//! [alternative]                 # optional
//! one_way_minutes = 45
//! additional_daily_cost = 0
//! transport = { mode = "public_transit", walking_minutes = 10, fare = { monthly_pass = 100 } }
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use wage_core::{CommuteScenario, ScenarioPair, WorkSchedule};

#[derive(Debug, Error)]
pub enum ScenarioFileError {
    #[error("cannot read scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid scenario file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScenarioFile {
    pub schedule: WorkSchedule,
    pub current: CommuteScenario,
    pub alternative: Option<CommuteScenario>,
}

impl ScenarioFile {
    /// The commutes to compare. Without an `[alternative]` table the
    /// alternative starts as a copy of the current commute.
    pub fn pair(&self) -> ScenarioPair {
        match &self.alternative {
            Some(alternative) => ScenarioPair::with_alternative(self.current.clone(), alternative.clone()),
            None => ScenarioPair::new(self.current.clone()),
        }
    }
}

pub fn load_from_str(input: &str) -> Result<ScenarioFile, ScenarioFileError> {
    Ok(toml::from_str(input)?)
}

pub fn load_from_file(path: &Path) -> Result<ScenarioFile, ScenarioFileError> {
    let contents = std::fs::read_to_string(path)?;
    load_from_str(&contents)
}
