// Engine library root: configuration, storage, calculators and the services
// the GUI drives.

pub mod calculators;
pub mod config;
pub mod data;
pub mod error;
pub mod services;

pub use config::EngineSettings;
pub use error::EngineError;
pub use services::GoodsIntakeEngine;

#[cfg(test)]
mod test_support;
