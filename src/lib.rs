pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod stall;

pub use config::Scenario;
pub use error::{Error, Result};
