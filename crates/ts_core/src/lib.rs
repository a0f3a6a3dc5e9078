pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod types;

pub use config::{Config, ConfigResolver};
pub use error::{ConfigError, Error, InputError, Result};
pub use models::SummaryModel;
pub use types::{SummarizationRequest, SummarizationResult};

pub mod prelude {
    pub use super::{Config, ConfigResolver, SummaryModel};
    pub use super::{SummarizationRequest, SummarizationResult};
    pub use super::{ConfigError, Error, InputError, Result};
}
