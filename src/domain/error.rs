//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid experiment requests.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("missing required value: {0}")]
    MissingField(&'static str),
}
