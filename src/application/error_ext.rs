//! Error conversion helpers for FIS client calls
//!
//! Provides an extension trait for attaching operation context to client errors.

use crate::application::{ApplicationError, ApplicationResult};
use crate::infrastructure::FisApiError;

/// Extension trait for converting FIS client results to `ApplicationResult` with context.
pub trait FisResultExt<T> {
    /// Add operation context to a client error.
    ///
    /// # Example
    /// ```ignore
    /// fis.start_experiment(id)
    ///     .await
    ///     .with_operation_context("start experiment")?;
    /// ```
    fn with_operation_context(self, context: &str) -> ApplicationResult<T>;
}

impl<T> FisResultExt<T> for Result<T, FisApiError> {
    fn with_operation_context(self, context: &str) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::OperationFailed {
            context: context.to_string(),
            source: Box::new(e),
        })
    }
}
