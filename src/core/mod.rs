pub mod scaffold;

pub use crate::domain::model::{CreationLog, Layout, RunConfig, ScaffoldOutcome, ScaffoldPlan, Year};
pub use crate::domain::ports::DirectoryStore;
pub use crate::utils::error::Result;
