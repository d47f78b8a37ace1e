//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::ExperimentService;
use crate::config::Settings;
use crate::infrastructure::aws::AwsFisClient;
use crate::infrastructure::traits::FisClient;
use crate::infrastructure::InfraResult;

/// Container holding all application services.
pub struct ServiceContainer {
    /// FIS control-plane client
    pub fis: Arc<dyn FisClient>,
}

impl ServiceContainer {
    /// Create a new service container backed by the AWS SDK.
    ///
    /// Resolves AWS credentials and region; does not contact FIS.
    pub async fn new(settings: &Settings) -> InfraResult<Self> {
        let fis = AwsFisClient::from_settings(settings).await?;
        Ok(Self::with_deps(Arc::new(fis)))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(fis: Arc<dyn FisClient>) -> Self {
        Self { fis }
    }

    pub fn experiment_service(&self) -> ExperimentService {
        ExperimentService::new(Arc::clone(&self.fis))
    }
}
