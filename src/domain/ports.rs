use crate::domain::model::Suite;
use crate::utils::error::Result;

/// Anything that can produce a scenario suite (TOML file, CSV table, ...).
pub trait SuiteSource {
    fn load_suite(&self) -> Result<Suite>;
}
