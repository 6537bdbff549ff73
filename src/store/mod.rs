//! The centralized store for objects shared throughout an app.

mod error;
mod store;

pub use error::StoreError;
pub use store::{AppObjectStore, StoreProxy};
