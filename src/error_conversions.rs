//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service/repository error types, so the
//! conversions live here and are compiled only with the layers they connect.

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

#[cfg(feature = "server")]
use crate::forms::weights::{CalculateWeightsFormError, FeedQueryFormError, WeightQueryFormError};
#[cfg(feature = "server")]
use crate::services::errors::ServiceError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

#[cfg(feature = "server")]
impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

#[cfg(feature = "server")]
impl From<WeightQueryFormError> for ServiceError {
    fn from(val: WeightQueryFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

#[cfg(feature = "server")]
impl From<FeedQueryFormError> for ServiceError {
    fn from(val: FeedQueryFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

#[cfg(feature = "server")]
impl From<CalculateWeightsFormError> for ServiceError {
    fn from(val: CalculateWeightsFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}
