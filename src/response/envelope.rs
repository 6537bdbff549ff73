use crate::dto::AnyObjectDto;

/// A standard API response carrying requested data objects.
///
/// Loosely based on JSON:API in one respect: objects related to the primary
/// data (e.g. the creators of items) arrive separately in the flattened,
/// normalized `included` array, which is what makes updating the normalized
/// object store simple. It is not an implementation of the JSON:API spec and
/// should not be treated as one.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// Primary data. `null` on the wire is representable via `Option`.
    pub data: T,
    /// Related data objects.
    pub included: Option<Vec<AnyObjectDto>>,
}

impl<T> ApiResponse<T> {
    /// Build a response in memory (tests, fixtures).
    pub fn new(data: T, included: Option<Vec<AnyObjectDto>>) -> Self {
        ApiResponse { data, included }
    }
}
