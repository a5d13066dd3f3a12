pub mod affinity_ops;
pub mod feedback;
pub mod graph;
pub mod network;
mod planning_error;
mod reference_profile;
mod trait_vector;
mod travel_mode;

pub use planning_error::PlanningError;
pub use reference_profile::ReferenceProfile;
pub use trait_vector::{BigFiveTrait, TraitVector, N_TRAITS};
pub use travel_mode::TravelMode;
