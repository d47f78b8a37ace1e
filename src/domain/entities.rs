//! Experiment template request model
//!
//! Mirrors the shape of an FIS `CreateExperimentTemplate` request without
//! depending on SDK types, so requests can be inspected in tests.

use std::collections::BTreeMap;

use crate::domain::DomainError;

/// Description attached to every template this tool creates.
pub const TEMPLATE_DESCRIPTION: &str = "Created by ec2-spot-interrupter tool";

/// Stop condition source meaning "never stop automatically".
pub const STOP_CONDITION_NONE: &str = "none";

pub const SPOT_INSTANCE_RESOURCE_TYPE: &str = "aws:ec2:spot-instance";
pub const SELECTION_MODE_ALL: &str = "ALL";
pub const SPOT_INTERRUPTION_ACTION_ID: &str = "aws:ec2:send-spot-instance-interruptions";

/// Action parameter controlling the warning period before interruption.
pub const DURATION_BEFORE_INTERRUPTION: &str = "durationBeforeInterruption";

/// ISO-8601 duration: interrupt immediately.
pub const IMMEDIATE_INTERRUPTION: &str = "PT0M";

/// Template-local name of the spot target.
pub const SPOT_TARGET_KEY: &str = "targetSpot";

/// Template-local name of the interruption action.
pub const SPOT_ACTION_KEY: &str = "actionSpot";

/// Target slot the interruption action expects.
pub const SPOT_ACTION_TARGET_SLOT: &str = "SpotInstances";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopCondition {
    pub source: String,
}

/// Resources an experiment acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateTarget {
    pub resource_type: String,
    pub resource_arns: Vec<String>,
    pub selection_mode: String,
}

/// An FIS action and the template targets it applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateAction {
    pub action_id: String,
    pub parameters: BTreeMap<String, String>,
    /// Action target slot -> template target key
    pub targets: BTreeMap<String, String>,
}

/// Request for creating an FIS experiment template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentTemplateRequest {
    pub description: String,
    pub stop_conditions: Vec<StopCondition>,
    pub targets: BTreeMap<String, TemplateTarget>,
    pub actions: BTreeMap<String, TemplateAction>,
    pub role_arn: String,
}

impl ExperimentTemplateRequest {
    /// Build a template that immediately interrupts a single spot instance.
    ///
    /// The template has no stop condition, one target selecting exactly
    /// `instance_arn`, and one `send-spot-instance-interruptions` action
    /// with zero delay. FIS assumes `role_arn` to run the experiment.
    ///
    /// # Errors
    /// Returns [`DomainError::MissingField`] if either argument is empty.
    pub fn spot_interruption(instance_arn: &str, role_arn: &str) -> Result<Self, DomainError> {
        let instance_arn = required("instance ARN", instance_arn)?;
        let role_arn = required("FIS role ARN", role_arn)?;

        let target = TemplateTarget {
            resource_type: SPOT_INSTANCE_RESOURCE_TYPE.into(),
            resource_arns: vec![instance_arn.into()],
            selection_mode: SELECTION_MODE_ALL.into(),
        };

        let action = TemplateAction {
            action_id: SPOT_INTERRUPTION_ACTION_ID.into(),
            parameters: BTreeMap::from([(
                DURATION_BEFORE_INTERRUPTION.to_string(),
                IMMEDIATE_INTERRUPTION.to_string(),
            )]),
            targets: BTreeMap::from([(
                SPOT_ACTION_TARGET_SLOT.to_string(),
                SPOT_TARGET_KEY.to_string(),
            )]),
        };

        Ok(Self {
            description: TEMPLATE_DESCRIPTION.into(),
            stop_conditions: vec![StopCondition {
                source: STOP_CONDITION_NONE.into(),
            }],
            targets: BTreeMap::from([(SPOT_TARGET_KEY.to_string(), target)]),
            actions: BTreeMap::from([(SPOT_ACTION_KEY.to_string(), action)]),
            role_arn: role_arn.into(),
        })
    }
}

/// Reject empty or whitespace-only values.
pub fn required<'a>(name: &'static str, value: &'a str) -> Result<&'a str, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::MissingField(name));
    }
    Ok(trimmed)
}
