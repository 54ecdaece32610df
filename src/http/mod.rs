mod app_server;
mod error;
mod handlers;
pub mod pages;
mod upload;

pub use app_server::{AppServer, AppState, PATH_ANALYZE, PATH_HEALTH, PATH_INDEX};
pub use error::ApiError;
pub use upload::{SalesUpload, FIELD_CSV_FILE, FIELD_MONTH};
