//! truthcheck - hover truth-checker for YouTube video titles
//!
//! Command-line host: runs single checks through the background service and
//! validates configuration.

mod cli;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use tracing::{info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use truthcheck_config::{Config, ConfigLoader, ConfigValidator, SettingsStore};
use truthcheck_metadata_web::WebMetadataFetcher;
use truthcheck_protocols::HostRequest;
use truthcheck_provider_anthropic::AnthropicClassifier;
use truthcheck_runtime::BackgroundService;

use crate::cli::{Cli, Commands};

fn truthcheck_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".truthcheck"))
        .unwrap_or_else(|| PathBuf::from(".truthcheck"))
}

/// Initialize tracing with console and file output.
///
/// Log files are written to ~/.truthcheck/logs/ with daily rotation.
fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let log_dir = truthcheck_dir().join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("truthcheck")
        .filename_suffix("log")
        .max_log_files(14)
        .build(&log_dir)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Flushes pending file output on exit.
    static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
        std::sync::OnceLock::new();
    let _ = GUARD.set(guard);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        // Console goes to stderr; stdout carries command output.
        .with(
            fmt::layer()
                .with_target(true)
                .with_ansi(true)
                .with_writer(std::io::stderr),
        )
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing()?;

    let cli = Cli::parse();
    let config_path = PathBuf::from(ConfigLoader::expand_path(&cli.config));
    let config = ConfigLoader::load_or_default(&config_path)?;

    match cli.command {
        Commands::Check {
            title,
            video_url,
            deep_search,
        } => run_check(&config, cli.api_key, title, video_url, deep_search).await,
        Commands::Config => {
            show_config(&config_path, &config, cli.api_key.as_deref());
            Ok(())
        }
    }
}

async fn run_check(
    config: &Config,
    api_key: Option<String>,
    title: String,
    video_url: Option<String>,
    deep_search: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let validation = ConfigValidator::validate(config);
    for warning in &validation.warnings {
        warn!("{}: {}", warning.path, warning.message);
    }
    if !validation.is_valid() {
        let errors: Vec<String> = validation
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.path, e.message))
            .collect();
        return Err(format!("invalid configuration: {}", errors.join("; ")).into());
    }

    let store = SettingsStore::new(config.settings.to_settings());
    store.update(|settings| {
        if let Some(key) = api_key {
            settings.api_key = key;
        }
        if deep_search {
            settings.enable_deep_search = true;
        }
    });

    let classifier = AnthropicClassifier::new()
        .with_endpoint(config.classifier.endpoint.as_str())
        .with_model(config.classifier.model.as_str())
        .with_max_tokens(config.classifier.max_tokens)
        .with_timeout(config.classifier.timeout());
    let metadata =
        WebMetadataFetcher::new(&config.metadata.user_agent, config.metadata.timeout())?;

    let handle =
        BackgroundService::new(Arc::new(classifier), Arc::new(metadata), store.subscribe()).spawn();

    info!(title = %title, "Checking title");
    let response = handle.send(HostRequest::check_title(title, video_url)).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn show_config(path: &Path, config: &Config, api_key: Option<&str>) {
    println!("Config file: {}", path.display());
    if !path.exists() {
        println!("  (not found, using defaults)");
    }

    let validation = ConfigValidator::validate(config);
    for error in &validation.errors {
        println!("error: {}: {}", error.path, error.message);
    }
    for warning in &validation.warnings {
        println!("warning: {}: {}", warning.path, warning.message);
    }

    let mut settings = config.settings.to_settings();
    if let Some(key) = api_key {
        settings.api_key = key.trim().to_string();
    }
    println!();
    println!("api_key            = {}", mask_key(&settings.api_key));
    println!("enable_hover       = {}", settings.enable_hover);
    println!("enable_deep_search = {}", settings.enable_deep_search);
    println!("hover_active       = {}", settings.hover_active());
    println!("endpoint           = {}", config.classifier.endpoint);
    println!("model              = {}", config.classifier.model);
    println!("max_tokens         = {}", config.classifier.max_tokens);
    println!("debounce_ms        = {}", config.hover.debounce_ms);
}

/// Show only enough of a key to recognise it.
fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    match chars.len() {
        0 => "(not set)".to_string(),
        n if n <= 12 => "*".repeat(n),
        n => {
            let head: String = chars[..7].iter().collect();
            let tail: String = chars[n - 4..].iter().collect();
            format!("{head}...{tail}")
        }
    }
}
