pub mod error;
pub use error::Result;
pub use error::Error;

pub mod config;
pub use config::PlannerOptions;

pub mod candidate;
pub use candidate::Candidate;
pub use candidate::CandidateId;
pub use candidate::Decision;

pub mod snapshot;
pub use snapshot::PlanSnapshot;

pub mod planner;
