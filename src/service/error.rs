use std::error::Error;
use std::fmt;

use super::api::ApiError;
use crate::dto::DecodeError;
use crate::model::ModelError;

/// An error from the service layer.
#[derive(Debug)]
pub enum ServiceError {
    /// The current user has no profile yet.
    ProfileNotFound,
    /// The transport failed.
    Api(ApiError),
    /// The response could not be decoded.
    Decode(DecodeError),
    /// Merging the response into the model failed.
    Model(ModelError),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::ProfileNotFound => write!(f, "current user profile not found"),
            ServiceError::Api(err) => write!(f, "api error: {err}"),
            ServiceError::Decode(err) => write!(f, "decode error: {err}"),
            ServiceError::Model(err) => write!(f, "model error: {err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ServiceError::ProfileNotFound => None,
            ServiceError::Api(err) => Some(err),
            ServiceError::Decode(err) => Some(err),
            ServiceError::Model(err) => Some(err),
        }
    }
}

impl From<ApiError> for ServiceError {
    fn from(err: ApiError) -> Self {
        ServiceError::Api(err)
    }
}

impl From<DecodeError> for ServiceError {
    fn from(err: DecodeError) -> Self {
        ServiceError::Decode(err)
    }
}

impl From<ModelError> for ServiceError {
    fn from(err: ModelError) -> Self {
        ServiceError::Model(err)
    }
}
