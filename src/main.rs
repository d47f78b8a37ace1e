use std::io;

use clap::{Command, CommandFactory, Parser};
use clap_complete::{generate, Generator};
use spot_interrupter::cli::{
    execute_command, output, Cli, CliError, CliResult, CommandOutcome, Operation,
};
use spot_interrupter::config::Settings;
use spot_interrupter::exitcode;
use spot_interrupter::infrastructure::di::ServiceContainer;
use spot_interrupter::infrastructure::InfraError;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

fn main() {
    let cli = Cli::parse();

    if let Some(generator) = cli.completions {
        let mut cmd = Cli::command();
        eprintln!("Generating completion file for {generator:?}...");
        print_completions(generator, &mut cmd);
        std::process::exit(exitcode::OK);
    }

    setup_logging(cli.debug);

    if let Err(e) = run(&cli) {
        output::error(&e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?.merge_with(&cli.flag_settings());

    if cli.show_config {
        output::info(&settings.to_toml()?);
        return Ok(());
    }

    // Usage errors surface here, before any AWS config is resolved.
    let operation = cli.operation(&settings)?;
    tracing::debug!("operation: {:?}", operation);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::from(InfraError::io("start async runtime", e)))?;

    let outcome = runtime.block_on(dispatch(settings, &operation))?;

    output::success(&outcome);
    Ok(())
}

async fn dispatch(settings: Settings, operation: &Operation) -> CliResult<CommandOutcome> {
    let container = ServiceContainer::new(&settings).await?;
    execute_command(operation, &container).await
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}
