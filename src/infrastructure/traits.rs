//! I/O boundary traits for testability
//!
//! These traits abstract calls to external services, allowing services
//! to be tested with mock implementations.

use async_trait::async_trait;

use crate::domain::ExperimentTemplateRequest;
use crate::infrastructure::FisApiError;

/// AWS Fault Injection Simulator control-plane abstraction.
#[async_trait]
pub trait FisClient: Send + Sync {
    /// Create an experiment template and return its generated ID.
    async fn create_experiment_template(
        &self,
        request: &ExperimentTemplateRequest,
    ) -> Result<String, FisApiError>;

    /// Start an experiment from a template and return the experiment ID.
    async fn start_experiment(&self, template_id: &str) -> Result<String, FisApiError>;
}
