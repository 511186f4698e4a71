//! Errors raised while building orders or enumerating order universes.

use thiserror::Error;

/// Errors that can occur when constructing a preorder or partial order.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("relation is not a preorder: {0}")]
    NotTransitiveOrReflexive(String),

    #[error("antisymmetry violated: both {0} <= {1} and {1} <= {0}")]
    AntisymmetryViolation(String, String),

    #[error("cannot enumerate partial orders over {requested} elements (at most {max})")]
    CapacityExceeded { requested: usize, max: usize },

    #[error("element {0} is not part of the order")]
    UnknownElement(String),
}

/// Result alias for order construction.
pub type Result<T> = std::result::Result<T, OrderError>;
