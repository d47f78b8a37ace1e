//! Tests for command dispatch against a mocked FIS client

mod common;

use std::sync::Arc;

use clap::Parser;

use common::MockFisClient;
use spot_interrupter::cli::{execute_command, Cli, CommandOutcome, Operation};
use spot_interrupter::config::Settings;
use spot_interrupter::exitcode;
use spot_interrupter::infrastructure::di::ServiceContainer;
use spot_interrupter::util::testing;

fn container_with(mock: &Arc<MockFisClient>) -> ServiceContainer {
    testing::init_test_setup();
    ServiceContainer::with_deps(mock.clone())
}

fn operation_from(args: &[&str]) -> Operation {
    let cli = Cli::try_parse_from(std::iter::once("spot-interrupter").chain(args.iter().copied()))
        .unwrap();
    let settings = Settings::default().merge_with(&cli.flag_settings());
    cli.operation(&settings).unwrap()
}

#[tokio::test]
async fn given_create_flags_when_execute_then_prints_template_id() {
    // Arrange
    let mock = Arc::new(MockFisClient::returning("EXTfresh0001", "unused"));
    let container = container_with(&mock);
    let operation = operation_from(&["--create-template", "--instance-arn=X", "--fis-role-arn=Y"]);

    // Act
    let outcome = execute_command(&operation, &container).await.unwrap();

    // Assert
    assert_eq!(
        outcome,
        CommandOutcome::TemplateCreated {
            template_id: "EXTfresh0001".into()
        }
    );
    assert_eq!(outcome.to_string(), "Created template with ID: EXTfresh0001");
    let created = mock.created();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].role_arn, "Y");
    assert_eq!(
        created[0].targets.values().next().unwrap().resource_arns,
        vec!["X".to_string()]
    );
}

#[tokio::test]
async fn given_interrupt_flags_when_execute_then_starts_experiment_from_exact_id() {
    // Arrange
    let mock = Arc::new(MockFisClient::returning("unused", "EXPrun0001"));
    let container = container_with(&mock);
    let operation = operation_from(&["--interrupt-spot", "--template-id=abc123"]);

    // Act
    let outcome = execute_command(&operation, &container).await.unwrap();

    // Assert
    assert_eq!(mock.started(), vec!["abc123".to_string()]);
    assert!(mock.created().is_empty());
    assert_eq!(
        outcome.to_string(),
        "Successfully triggered experiment EXPrun0001 from template abc123"
    );
}

#[tokio::test]
async fn given_api_failure_when_execute_then_nonzero_exit_code_and_message() {
    // Arrange
    let mock = Arc::new(MockFisClient::failing("ThrottlingException: Rate exceeded"));
    let container = container_with(&mock);
    let operation = operation_from(&["--interrupt-spot", "--template-id=abc123"]);

    // Act
    let err = execute_command(&operation, &container).await.unwrap_err();

    // Assert
    assert_eq!(err.exit_code(), exitcode::UNAVAILABLE);
    assert_ne!(err.exit_code(), exitcode::OK);
    assert!(err.to_string().contains("ThrottlingException: Rate exceeded"));
}

#[tokio::test]
async fn given_blank_template_id_operation_when_execute_then_no_fis_call() {
    // Arrange
    let mock = Arc::new(MockFisClient::new());
    let container = container_with(&mock);
    let operation = Operation::InterruptSpot {
        template_id: "  ".into(),
    };

    // Act
    let err = execute_command(&operation, &container).await.unwrap_err();

    // Assert
    assert_eq!(err.exit_code(), exitcode::DATAERR);
    assert_eq!(mock.call_count(), 0);
}
