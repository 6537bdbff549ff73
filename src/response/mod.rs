//! API response envelope and graph materialization.

mod envelope;
mod processor;

pub use envelope::ApiResponse;
pub use processor::ResponseProcessor;
