//! FIS experiment service
//!
//! Creates spot-interruption experiment templates and starts experiments
//! from them. Each call is a single request; errors are returned as-is,
//! without retries.

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::error_ext::FisResultExt;
use crate::application::ApplicationResult;
use crate::domain::{required, ExperimentTemplateRequest};
use crate::infrastructure::traits::FisClient;

/// FIS experiment service.
pub struct ExperimentService {
    fis: Arc<dyn FisClient>,
}

impl ExperimentService {
    /// Create a new experiment service.
    pub fn new(fis: Arc<dyn FisClient>) -> Self {
        Self { fis }
    }

    /// Create a template that interrupts `instance_arn` immediately.
    ///
    /// # Returns
    /// The template ID generated by FIS, verbatim.
    pub async fn create_spot_interruption_template(
        &self,
        instance_arn: &str,
        role_arn: &str,
    ) -> ApplicationResult<String> {
        let request = ExperimentTemplateRequest::spot_interruption(instance_arn, role_arn)?;
        debug!("create_spot_interruption_template: request={:?}", request);

        let template_id = self
            .fis
            .create_experiment_template(&request)
            .await
            .with_operation_context("create experiment template")?;

        info!("created experiment template {}", template_id);
        Ok(template_id)
    }

    /// Start an experiment from an existing template.
    ///
    /// # Returns
    /// The ID of the started experiment.
    pub async fn start_experiment(&self, template_id: &str) -> ApplicationResult<String> {
        let template_id = required("experiment template ID", template_id)?;
        debug!("start_experiment: template_id={}", template_id);

        let experiment_id = self
            .fis
            .start_experiment(template_id)
            .await
            .with_operation_context("start experiment")?;

        info!(
            "started experiment {} from template {}",
            experiment_id, template_id
        );
        Ok(experiment_id)
    }
}
