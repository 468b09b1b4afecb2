pub mod csv_export;
pub mod image_store;
pub mod record_store;

pub use image_store::ImageStore;
pub use record_store::RecordStore;
