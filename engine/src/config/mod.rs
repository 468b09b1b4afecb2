pub mod settings;

pub use settings::{CategoryRate, EngineSettings};
