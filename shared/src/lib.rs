pub mod models;
pub mod utils;

pub use models::{GoodsRecord, RecordId, ScfDetails};
