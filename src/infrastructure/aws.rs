//! FIS client backed by the AWS SDK
//!
//! Credentials and region come from the standard AWS resolution chain
//! (environment, shared config/credentials files, instance profile),
//! optionally narrowed by [`Settings`].

use std::collections::HashMap;

use async_trait::async_trait;
use aws_credential_types::provider::{ProvideCredentials, SharedCredentialsProvider};
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_fis::error::DisplayErrorContext;
use aws_sdk_fis::types::{
    CreateExperimentTemplateActionInput, CreateExperimentTemplateStopConditionInput,
    CreateExperimentTemplateTargetInput,
};
use aws_sdk_fis::Client;
use tracing::{debug, instrument};

use crate::config::Settings;
use crate::domain::{ExperimentTemplateRequest, TemplateAction, TemplateTarget};
use crate::infrastructure::traits::FisClient;
use crate::infrastructure::{FisApiError, InfraError, InfraResult};

/// Load the shared AWS config, applying overrides from settings.
///
/// Fails if no region can be resolved or the credentials chain yields nothing;
/// both would otherwise only surface on the first request.
pub async fn load_sdk_config(settings: &Settings) -> InfraResult<SdkConfig> {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = &settings.region {
        loader = loader.region(Region::new(region.clone()));
    }
    if let Some(profile) = &settings.profile {
        loader = loader.profile_name(profile);
    }
    if let Some(endpoint) = &settings.endpoint_url {
        loader = loader.endpoint_url(endpoint);
    }

    let sdk_config = loader.load().await;

    if sdk_config.region().is_none() {
        return Err(InfraError::AwsConfig {
            message: "no region configured (set AWS_REGION, a profile region, or --region)"
                .into(),
        });
    }
    verify_credentials(sdk_config.credentials_provider()).await?;
    debug!("load_sdk_config: region={:?}", sdk_config.region());
    Ok(sdk_config)
}

/// Resolve credentials once so a missing or broken chain is a config error.
async fn verify_credentials(provider: Option<SharedCredentialsProvider>) -> InfraResult<()> {
    let provider = provider.ok_or_else(|| InfraError::AwsConfig {
        message: "no credentials provider available".into(),
    })?;
    provider
        .provide_credentials()
        .await
        .map_err(|e| InfraError::AwsConfig {
            message: format!("no usable credentials: {}", DisplayErrorContext(&e)),
        })?;
    Ok(())
}

/// Real FIS client implementation.
#[derive(Debug, Clone)]
pub struct AwsFisClient {
    client: Client,
}

impl AwsFisClient {
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self {
            client: Client::new(sdk_config),
        }
    }

    /// Resolve AWS config from the environment and settings, then build the client.
    pub async fn from_settings(settings: &Settings) -> InfraResult<Self> {
        let sdk_config = load_sdk_config(settings).await?;
        Ok(Self::new(&sdk_config))
    }
}

fn to_target_input(
    target: &TemplateTarget,
) -> Result<CreateExperimentTemplateTargetInput, FisApiError> {
    CreateExperimentTemplateTargetInput::builder()
        .resource_type(&target.resource_type)
        .set_resource_arns(Some(target.resource_arns.clone()))
        .selection_mode(&target.selection_mode)
        .build()
        .map_err(|e| FisApiError::new(format!("invalid target: {e}")))
}

fn to_action_input(
    action: &TemplateAction,
) -> Result<CreateExperimentTemplateActionInput, FisApiError> {
    let parameters: HashMap<String, String> = action.parameters.clone().into_iter().collect();
    let targets: HashMap<String, String> = action.targets.clone().into_iter().collect();

    CreateExperimentTemplateActionInput::builder()
        .action_id(&action.action_id)
        .set_parameters(Some(parameters))
        .set_targets(Some(targets))
        .build()
        .map_err(|e| FisApiError::new(format!("invalid action: {e}")))
}

#[async_trait]
impl FisClient for AwsFisClient {
    #[instrument(skip(self, request))]
    async fn create_experiment_template(
        &self,
        request: &ExperimentTemplateRequest,
    ) -> Result<String, FisApiError> {
        let mut call = self
            .client
            .create_experiment_template()
            .description(&request.description)
            .role_arn(&request.role_arn);

        for condition in &request.stop_conditions {
            let input = CreateExperimentTemplateStopConditionInput::builder()
                .source(&condition.source)
                .build()
                .map_err(|e| FisApiError::new(format!("invalid stop condition: {e}")))?;
            call = call.stop_conditions(input);
        }
        for (key, target) in &request.targets {
            call = call.targets(key, to_target_input(target)?);
        }
        for (key, action) in &request.actions {
            call = call.actions(key, to_action_input(action)?);
        }

        let output = call
            .send()
            .await
            .map_err(|e| FisApiError::new(DisplayErrorContext(&e).to_string()))?;

        output
            .experiment_template()
            .and_then(|template| template.id())
            .map(str::to_string)
            .ok_or_else(|| FisApiError::new("response did not include a template ID"))
    }

    #[instrument(skip(self))]
    async fn start_experiment(&self, template_id: &str) -> Result<String, FisApiError> {
        let output = self
            .client
            .start_experiment()
            .experiment_template_id(template_id)
            .send()
            .await
            .map_err(|e| FisApiError::new(DisplayErrorContext(&e).to_string()))?;

        output
            .experiment()
            .and_then(|experiment| experiment.id())
            .map(str::to_string)
            .ok_or_else(|| FisApiError::new("response did not include an experiment ID"))
    }
}
