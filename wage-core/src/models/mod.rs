mod breakdown;
mod month;
mod profile;
mod record;
mod scenario;
mod schedule;

pub use breakdown::WageBreakdown;
pub use month::MonthLabel;
pub use profile::{CompensationProfile, RecordTerms, TermChanges, Vehicle, VehicleKind};
pub use record::{CompensationRecord, MonthlySnapshot, NewSnapshot};
pub use scenario::{CommuteScenario, ScenarioPair, TransitFare, TransportMode};
pub use schedule::{PayFrequency, WorkSchedule};
