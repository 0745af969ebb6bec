//! Client profile data, input coercion, and intake loading

mod data;
mod raw;
pub mod coerce;
pub mod loader;

pub use data::{ClientProfile, Gender, MaritalStatus, HealthStatus};
pub use raw::RawProfile;
pub use loader::{load_profiles, load_profiles_from_reader, load_raw_profiles_from_reader};
