//! Domain models for the heat study
//!
//! One file per entity, mirroring the tables the pipeline works with:
//! raw registry records (suicide mortality, state population, heat), the
//! merged record, and the per-state monthly aggregate. Shared vocabulary
//! types (month codes, seasons, analysis variables) live in `types`.

pub mod aggregate;
pub mod enriched;
pub mod heat;
pub mod observation;
pub mod population;
pub mod suicide;
pub mod types;

pub use aggregate::MonthlyStateAggregate;
pub use enriched::EnrichedRecord;
pub use heat::HeatRecord;
pub use observation::Observation;
pub use population::PopulationRecord;
pub use suicide::SuicideRecord;
pub use types::{MonthCode, Season, Variable};
