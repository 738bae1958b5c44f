pub mod store;

pub use crate::domain::model::{ClearTarget, Company, Job, JobUpdate, Listing};
pub use crate::utils::error::Result;
