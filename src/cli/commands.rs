//! Command dispatch: runs the resolved operation against the FIS service

use std::fmt;

use tracing::{debug, instrument};

use crate::cli::args::Operation;
use crate::cli::CliResult;
use crate::infrastructure::di::ServiceContainer;

/// What a successful invocation reports to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    TemplateCreated {
        template_id: String,
    },
    ExperimentStarted {
        template_id: String,
        experiment_id: String,
    },
}

impl fmt::Display for CommandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandOutcome::TemplateCreated { template_id } => {
                write!(f, "Created template with ID: {}", template_id)
            }
            CommandOutcome::ExperimentStarted {
                template_id,
                experiment_id,
            } => write!(
                f,
                "Successfully triggered experiment {} from template {}",
                experiment_id, template_id
            ),
        }
    }
}

/// Execute one operation. Errors are returned unchanged; there are no retries.
pub async fn execute_command(
    operation: &Operation,
    container: &ServiceContainer,
) -> CliResult<CommandOutcome> {
    match operation {
        Operation::CreateTemplate {
            instance_arn,
            role_arn,
        } => cmd_create_template(container, instance_arn, role_arn).await,
        Operation::InterruptSpot { template_id } => {
            cmd_interrupt_spot(container, template_id).await
        }
    }
}

#[instrument(skip(container))]
async fn cmd_create_template(
    container: &ServiceContainer,
    instance_arn: &str,
    role_arn: &str,
) -> CliResult<CommandOutcome> {
    debug!("cmd_create_template");
    let template_id = container
        .experiment_service()
        .create_spot_interruption_template(instance_arn, role_arn)
        .await?;
    Ok(CommandOutcome::TemplateCreated { template_id })
}

#[instrument(skip(container))]
async fn cmd_interrupt_spot(
    container: &ServiceContainer,
    template_id: &str,
) -> CliResult<CommandOutcome> {
    debug!("cmd_interrupt_spot");
    let experiment_id = container
        .experiment_service()
        .start_experiment(template_id)
        .await?;
    Ok(CommandOutcome::ExperimentStarted {
        template_id: template_id.to_string(),
        experiment_id,
    })
}
