//! Common test utilities

use std::sync::Mutex;

use async_trait::async_trait;

use spot_interrupter::domain::ExperimentTemplateRequest;
use spot_interrupter::infrastructure::traits::FisClient;
use spot_interrupter::infrastructure::FisApiError;

/// Mock FIS client that records every request it receives
pub struct MockFisClient {
    created: Mutex<Vec<ExperimentTemplateRequest>>,
    started: Mutex<Vec<String>>,
    template_id: String,
    experiment_id: String,
    failure: Option<String>,
}

#[allow(dead_code)]
impl MockFisClient {
    pub fn new() -> Self {
        Self::returning("EXT1a2b3c4d5e6f7", "EXP9z8y7x6w5v4u3")
    }

    pub fn returning(template_id: &str, experiment_id: &str) -> Self {
        Self {
            created: Mutex::new(Vec::new()),
            started: Mutex::new(Vec::new()),
            template_id: template_id.to_string(),
            experiment_id: experiment_id.to_string(),
            failure: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::new()
        }
    }

    pub fn created(&self) -> Vec<ExperimentTemplateRequest> {
        self.created.lock().unwrap().clone()
    }

    pub fn started(&self) -> Vec<String> {
        self.started.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.created().len() + self.started().len()
    }
}

#[async_trait]
impl FisClient for MockFisClient {
    async fn create_experiment_template(
        &self,
        request: &ExperimentTemplateRequest,
    ) -> Result<String, FisApiError> {
        self.created.lock().unwrap().push(request.clone());
        match &self.failure {
            Some(message) => Err(FisApiError::new(message.clone())),
            None => Ok(self.template_id.clone()),
        }
    }

    async fn start_experiment(&self, template_id: &str) -> Result<String, FisApiError> {
        self.started.lock().unwrap().push(template_id.to_string());
        match &self.failure {
            Some(message) => Err(FisApiError::new(message.clone())),
            None => Ok(self.experiment_id.clone()),
        }
    }
}
