pub mod config;
pub mod error;
pub mod policy;
pub mod registry;
pub mod report;
pub mod ui;
pub mod version;

pub use error::{PolicyError, Result};
pub use policy::{Granularity, Policy, PolicyType};
