//! AppModel: merges API operation results and keeps derived views
//! consistent.

mod app_model;
mod error;

pub use app_model::AppModel;
pub use error::ModelError;
