//! CLI entrypoint for scout
//!
//! This is the main binary that wires together all layers using dependency
//! injection, then either answers one question or serves the web form UI.

use anyhow::{bail, Context, Result};
use clap::Parser;
use scout_application::{HandleQuestionUseCase, ResearchRunner, RunResearchUseCase};
use scout_domain::{Model, ResearcherProfile};
use scout_infrastructure::{
    ApiKey, ConfigLoader, FileConfig, GroqLlmGateway, JsonlConversationLogger,
    JsonSchemaToolConverter, LocalToolExecutor,
};
use scout_presentation::Cli;
use std::io::Write;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration
    let config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!(e))
            .context("Failed to load configuration")?
    };

    // Resolve the model: CLI flag overrides config
    let model: Model = match &cli.model {
        Some(name) => name.parse().unwrap(),
        None => config.model.to_model(),
    };

    // Resolve the Groq credential. This is the one fail-fast condition:
    // config value, then environment, then one interactive prompt.
    let api_key = match config.providers.groq.resolve_api_key() {
        Some(key) => key,
        None => prompt_api_key(&config.providers.groq.api_key_env)?,
    };

    info!("Starting scout (model: {})", model);

    // === Dependency Injection ===
    let gateway = Arc::new(GroqLlmGateway::new(
        &config.providers.groq,
        api_key,
        config.model.to_settings(),
    )?);
    let tool_executor = Arc::new(LocalToolExecutor::new());
    let tool_schema = Arc::new(JsonSchemaToolConverter);

    let mut run_research = RunResearchUseCase::new(gateway, tool_executor, tool_schema);
    if let Some(ref path) = config.logging.conversation_log
        && let Some(logger) = JsonlConversationLogger::new(path)
    {
        info!("Conversation transcript: {}", logger.path().display());
        run_research = run_research.with_conversation_logger(Arc::new(logger));
    }
    let runner: Arc<dyn ResearchRunner> = Arc::new(run_research);

    let profile = Arc::new(ResearcherProfile::web_researcher(model));
    let handler = HandleQuestionUseCase::new(profile, runner);

    // Single question mode
    if let Some(question) = cli.question {
        if !cli.quiet {
            println!("Question: {}", question);
            println!();
        }
        let answer = handler.handle(&question).await;
        println!("{}", answer);
        return Ok(());
    }

    // Web UI mode (default when no question is given)
    let addr = cli.addr.unwrap_or(config.server.addr);
    if !cli.quiet {
        println!("scout web UI: http://{}", addr);
    }
    scout_presentation::serve(&addr, handler)
        .await
        .context("Web server failed")?;

    Ok(())
}

/// Ask for the API key interactively; missing credentials are fatal.
fn prompt_api_key(env_var: &str) -> Result<ApiKey> {
    eprint!("Please enter your Groq API key: ");
    std::io::stderr().flush().ok();

    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("Failed to read API key from stdin")?;

    match ApiKey::new(line) {
        Some(key) => Ok(key),
        None => bail!(
            "A Groq API key is required. Set {} or add it to the config file.",
            env_var
        ),
    }
}
