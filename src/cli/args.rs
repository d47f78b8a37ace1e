//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use crate::cli::{CliError, CliResult};
use crate::config::Settings;

/// Trigger AWS FIS experiments that interrupt EC2 Spot Instances
#[derive(Parser, Debug)]
#[command(name = "spot-interrupter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Create an experiment template
    #[arg(long)]
    pub create_template: bool,

    /// Interrupt a spot instance
    #[arg(long)]
    pub interrupt_spot: bool,

    /// Template ID for interrupting a spot instance
    #[arg(long, value_name = "ID")]
    pub template_id: Option<String>,

    /// Instance ARN for creating a template
    #[arg(long, value_name = "ARN")]
    pub instance_arn: Option<String>,

    /// FIS role ARN for creating a template
    #[arg(long, value_name = "ARN")]
    pub fis_role_arn: Option<String>,

    /// AWS region (default: AWS SDK resolution)
    #[arg(long, value_name = "REGION")]
    pub region: Option<String>,

    /// Named AWS profile
    #[arg(long, value_name = "NAME")]
    pub profile: Option<String>,

    /// FIS endpoint override
    #[arg(long, value_name = "URL", value_hint = ValueHint::Url)]
    pub endpoint_url: Option<String>,

    /// Settings file (default: global spot-interrupter.toml)
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Print effective settings and exit
    #[arg(long)]
    pub show_config: bool,

    /// Debug output: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Generate shell completions
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}

/// The single request an invocation performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    CreateTemplate {
        instance_arn: String,
        role_arn: String,
    },
    InterruptSpot {
        template_id: String,
    },
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl Cli {
    /// Settings given on the command line; highest precedence layer.
    pub fn flag_settings(&self) -> Settings {
        Settings {
            region: self.region.clone(),
            profile: self.profile.clone(),
            endpoint_url: self.endpoint_url.clone(),
            fis_role_arn: self.fis_role_arn.clone(),
        }
    }

    /// Resolve flags into exactly one operation.
    ///
    /// `settings` must already include the flag layer; it supplies the
    /// FIS role ARN when `--fis-role-arn` is not given.
    pub fn operation(&self, settings: &Settings) -> CliResult<Operation> {
        match (self.create_template, self.interrupt_spot) {
            (true, true) => Err(CliError::Usage(
                "Both --create-template and --interrupt-spot flags are specified. Please specify only one."
                    .into(),
            )),
            (false, false) => Err(CliError::Usage(
                "Either --create-template or --interrupt-spot flag must be specified.".into(),
            )),
            (true, false) => {
                let instance_arn = non_empty(self.instance_arn.as_deref()).ok_or_else(|| {
                    CliError::Usage(
                        "--instance-arn must be specified when using --create-template.".into(),
                    )
                })?;
                let role_arn = non_empty(settings.fis_role_arn.as_deref()).ok_or_else(|| {
                    CliError::Usage(
                        "--fis-role-arn (or SPOT_INTERRUPTER_FIS_ROLE_ARN) must be specified when using --create-template."
                            .into(),
                    )
                })?;
                Ok(Operation::CreateTemplate {
                    instance_arn,
                    role_arn,
                })
            }
            (false, true) => {
                let template_id = non_empty(self.template_id.as_deref()).ok_or_else(|| {
                    CliError::Usage(
                        "--template-id must be specified when using --interrupt-spot.".into(),
                    )
                })?;
                Ok(Operation::InterruptSpot { template_id })
            }
        }
    }
}
