pub mod app_data_dir;
pub mod json_collection_store;

pub use app_data_dir::{app_data_dir, collections_dir};
pub use json_collection_store::JsonFileSubmissionStore;
