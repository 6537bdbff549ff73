//! The async service layer: thin orchestrators that perform an API
//! operation, decode its response through the [`DtoRegistry`], and hand the
//! decoded envelope to the model inside a store transaction.
//!
//! Services hold no object state of their own; every cached object lives in
//! the model's store.
//!
//! [`DtoRegistry`]: crate::dto::DtoRegistry

mod api;
mod app_service;
mod error;
mod profile_service;
mod session;

pub use api::{ApiClient, ApiError, ApiOperation};
pub use app_service::AppService;
pub use error::ServiceError;
pub use profile_service::{ProfileInitializer, ProfileService};
pub use session::{session_scoped_services, SessionServices, UserSession};
