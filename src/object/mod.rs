//! Object identity and typing.
//!
//! Every cached domain object is addressed by an [`ObjectKey`], a composite
//! of its [`ObjectType`] and its string ID. Two objects are "the same" iff
//! their keys are equal; value equality plays no part in identity. The
//! [`AppObject`] / [`AppObjectDto`] trait pair ties each runtime shape to
//! exactly one wire shape.

mod key;
mod provider;
mod traits;

pub use key::{ObjectKey, ObjectType};
pub use provider::{ProviderError, RelatedObjectProvider};
pub use traits::{AppObject, AppObjectDto};
