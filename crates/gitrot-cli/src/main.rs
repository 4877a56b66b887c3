use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use gitrot_client::{
    Client, ClientConfig, CredentialSet, GenerateRequest, GenerationResult, ModelCatalog,
    Selection, SelectionStore, ServiceTier, config_complete, validate_repository_url,
};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "gitrot",
    about = "GitRot — AI-powered README generation for GitHub repositories",
    version
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Backend base URL (default: http://localhost:8000)
    #[arg(long, env = "GITROT_API_URL", global = true)]
    api_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "GITROT_LOG", global = true)]
    log: Option<String>,

    /// Suppress progress output on stderr.
    ///
    /// Generated README content and errors are unaffected.
    #[arg(long, short = 'q', global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a README for a GitHub repository.
    ///
    /// Prints the generated markdown to stdout (or writes it to --output).
    /// Progress goes to stderr, so the output is safe to pipe.
    ///
    /// The provider and model default to the persisted selection; pass
    /// --provider/--model to override for this run.
    ///
    /// Examples:
    ///   gitrot generate https://github.com/rust-lang/rust
    ///   gitrot generate github.com/octocat/hello-world -p google -m gemini-1.5-flash
    ///   gitrot generate github.com/octocat/hello-world --output README.md
    Generate(GenerateArgs),
    /// List the available model providers.
    ///
    /// Examples:
    ///   gitrot providers
    ///   gitrot providers --json
    Providers {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the models of a provider.
    ///
    /// Defaults to the catalog's default provider when --provider is omitted.
    ///
    /// Examples:
    ///   gitrot models
    ///   gitrot models --provider google
    Models {
        /// Provider id (e.g. azure_openai, google)
        #[arg(long, short = 'p')]
        provider: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show or change the persisted provider/model selection.
    ///
    /// With no arguments, prints the current selection. With a provider
    /// (and optionally a model), validates the pair against the catalog
    /// and persists it for future runs.
    ///
    /// Examples:
    ///   gitrot select
    ///   gitrot select google
    ///   gitrot select azure_openai gpt-4o-mini
    Select {
        /// Provider id to select
        provider: Option<String>,
        /// Model id to select (default: the provider's default model)
        model: Option<String>,
    },
    /// Check backend health.
    ///
    /// Exits 0 when the backend reports itself healthy, 1 otherwise.
    ///
    /// Examples:
    ///   gitrot health
    ///   gitrot health --json
    Health {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(clap::Args)]
struct GenerateArgs {
    /// GitHub repository URL to document
    repo_url: String,

    /// Provider id for this run (e.g. azure_openai, google)
    #[arg(long, short = 'p')]
    provider: Option<String>,

    /// Model id for this run (e.g. gpt-4o, gemini-1.5-flash)
    #[arg(long, short = 'm')]
    model: Option<String>,

    /// Generation method ("Standard README" or "README with Examples")
    #[arg(long)]
    method: Option<String>,

    /// Token budget override (backend default: 1000)
    #[arg(long)]
    max_tokens: Option<u32>,

    /// Sampling temperature override (backend default: 0.3)
    #[arg(long)]
    temperature: Option<f32>,

    /// Write the README to this file instead of stdout
    #[arg(long, short = 'o')]
    output: Option<std::path::PathBuf>,

    /// Use your own provider credentials (GitRot Free tier).
    ///
    /// Credentials are read from GITROT_AZURE_API_KEY, GITROT_AZURE_ENDPOINT,
    /// GITROT_AZURE_DEPLOYMENT, and GITROT_GOOGLE_API_KEY. The command
    /// refuses to submit when the selected provider's set is incomplete.
    #[arg(long)]
    own_credentials: bool,

    /// Do not persist the provider/model used for this run
    #[arg(long)]
    no_save: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(args.log.as_deref().unwrap_or("warn"));

    let quiet = args.quiet;
    match args.command {
        Command::Generate(generate) => {
            run_generate(build_client(args.api_url)?, generate, quiet).await?;
        }
        Command::Providers { json } => run_providers(json)?,
        Command::Models { provider, json } => run_models(provider.as_deref(), json)?,
        Command::Select { provider, model } => run_select(provider, model)?,
        Command::Health { json } => {
            let exit_code = run_health(build_client(args.api_url)?, json).await;
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

/// Initialize the tracing subscriber.
///
/// Logs go to stderr so stdout stays clean for README output.
fn setup_logging(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

/// Build the API client from the environment, with --api-url taking precedence.
fn build_client(api_url: Option<String>) -> Result<Client> {
    let mut config = ClientConfig::from_env().context("invalid GITROT_* environment")?;
    if let Some(url) = api_url {
        config.base_url = Some(url);
    }
    Ok(Client::from_config(config)?)
}

// ── gitrot generate ───────────────────────────────────────────────────────────

async fn run_generate(client: Client, args: GenerateArgs, quiet: bool) -> Result<()> {
    validate_repository_url(&args.repo_url)?;

    let catalog = client.catalog();
    let mut store = SelectionStore::with_default_path();
    let persisted = store.load(catalog);

    let (provider, model) = resolve_model_choice(catalog, &persisted, args.provider, args.model)?;

    if args.own_credentials {
        let credentials = CredentialSet::from_env();
        if !config_complete(ServiceTier::OwnCredentials, &credentials, &provider) {
            anyhow::bail!(
                "incomplete credentials for provider '{provider}' ({} tier)\n  {}",
                ServiceTier::OwnCredentials.label(),
                credential_hint(&provider)
            );
        }
    }

    let mut builder = GenerateRequest::builder();
    builder
        .repo_url(args.repo_url.clone())
        .provider_id(provider.clone())
        .model_id(model.clone());
    if let Some(method) = args.method {
        builder.generation_method(method);
    }
    if let Some(max_tokens) = args.max_tokens {
        builder.max_tokens(max_tokens);
    }
    if let Some(temperature) = args.temperature {
        builder.temperature(temperature);
    }
    let request = builder.build().context("invalid generation request")?;

    if !quiet {
        eprintln!(
            "Generating README for {} with {}/{}...",
            args.repo_url, provider, model
        );
    }

    match client.readmes().generate(&request).await {
        GenerationResult::Success(readme) => {
            match &args.output {
                Some(path) => {
                    std::fs::write(path, &readme.content)
                        .with_context(|| format!("cannot write {}", path.display()))?;
                    if !quiet {
                        eprintln!(
                            "Wrote {} ({} bytes, generated at {})",
                            path.display(),
                            readme.content.len(),
                            readme.generation_timestamp
                        );
                    }
                }
                None => print!("{}", readme.content),
            }

            // Remember the pair that worked, if the catalog knows it
            if !args.no_save && catalog.model(&provider, &model).is_some() {
                store.save(&Selection::new(provider, model));
            } else {
                debug!("selection not persisted (unknown pair or --no-save)");
            }
        }
        GenerationResult::Failure { message } => {
            eprintln!("generation failed: {message}");
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Pick the provider/model for this run.
///
/// Explicit flags win over the persisted selection. A provider given
/// without a model snaps to that provider's default model; unknown
/// providers then need an explicit --model.
fn resolve_model_choice(
    catalog: &ModelCatalog,
    persisted: &Selection,
    provider: Option<String>,
    model: Option<String>,
) -> Result<(String, String)> {
    match (provider, model) {
        (None, None) => Ok((persisted.provider.clone(), persisted.model.clone())),
        (None, Some(model)) => Ok((persisted.provider.clone(), model)),
        (Some(provider), Some(model)) => Ok((provider, model)),
        (Some(provider), None) => match catalog.provider(&provider) {
            Some(entry) => Ok((provider, entry.default_model.clone())),
            None => anyhow::bail!(
                "unknown provider '{provider}' — pass --model as well, or run `gitrot providers`"
            ),
        },
    }
}

/// Which GITROT_* variables a provider needs.
fn credential_hint(provider: &str) -> &'static str {
    match provider {
        "azure_openai" => {
            "set GITROT_AZURE_API_KEY, GITROT_AZURE_ENDPOINT, and GITROT_AZURE_DEPLOYMENT"
        }
        "google" => "set GITROT_GOOGLE_API_KEY",
        _ => "this provider does not support custom credentials",
    }
}

// ── gitrot providers / models ─────────────────────────────────────────────────

fn run_providers(json: bool) -> Result<()> {
    let catalog = ModelCatalog::builtin();
    let options = catalog.provider_options();

    if json {
        println!("{}", serde_json::to_string_pretty(&options)?);
        return Ok(());
    }

    println!(
        "{:<14} {:<16} {:<18} TAGLINE",
        "ID", "LABEL", "DEFAULT MODEL"
    );
    println!("{}", "-".repeat(88));
    for option in &options {
        let default_model = catalog
            .provider(&option.id)
            .map(|p| p.default_model.as_str())
            .unwrap_or("-");
        let marker = if option.id == catalog.default_provider_id() {
            "*"
        } else {
            " "
        };
        println!(
            "{:<13}{} {:<16} {:<18} {}",
            option.id, marker, option.label, default_model, option.tagline
        );
    }
    println!("\n* default provider");

    Ok(())
}

fn run_models(provider: Option<&str>, json: bool) -> Result<()> {
    let catalog = ModelCatalog::builtin();
    let provider_id = provider.unwrap_or_else(|| catalog.default_provider_id());

    let options = catalog.model_options(provider_id);
    if options.is_empty() {
        anyhow::bail!("unknown provider '{provider_id}' — run `gitrot providers`");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&options)?);
        return Ok(());
    }

    println!("Models for provider '{provider_id}':\n");
    println!(
        "{:<24} {:<6} {:<8} {:<20} BADGE",
        "ID", "COST", "SPEED", "LABEL"
    );
    println!("{}", "-".repeat(80));
    for option in &options {
        println!(
            "{:<24} {:<6} {:<8} {:<20} {}",
            option.id,
            option.cost.symbol(),
            option.speed.to_string(),
            option.label,
            option.badge.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}

// ── gitrot select ─────────────────────────────────────────────────────────────

fn run_select(provider: Option<String>, model: Option<String>) -> Result<()> {
    let catalog = ModelCatalog::builtin();
    let mut store = SelectionStore::with_default_path();
    let current = store.load(&catalog);

    let Some(provider) = provider else {
        println!("{} / {}", current.provider, current.model);
        return Ok(());
    };

    let Some(entry) = catalog.provider(&provider) else {
        anyhow::bail!("unknown provider '{provider}' — run `gitrot providers`");
    };

    let model = model.unwrap_or_else(|| entry.default_model.clone());
    if catalog.model(&provider, &model).is_none() {
        anyhow::bail!(
            "unknown model '{model}' for provider '{provider}' — run `gitrot models --provider {provider}`"
        );
    }

    let selection = Selection::new(provider, model);
    store.save(&selection);
    println!("Selected {} / {}", selection.provider, selection.model);

    Ok(())
}

// ── gitrot health ─────────────────────────────────────────────────────────────

/// Returns exit code: 0 = healthy, 1 = degraded or unreachable.
async fn run_health(client: Client, json: bool) -> i32 {
    match client.health().check().await {
        Ok(health) => {
            if json {
                println!("{}", serde_json::to_string(&health).unwrap_or_default());
            } else {
                println!(
                    "{} {} - {} ({})",
                    health.service, health.version, health.status, health.timestamp
                );
            }
            if health.is_healthy() { 0 } else { 1 }
        }
        Err(e) => {
            if json {
                println!(r#"{{"status":"unreachable"}}"#);
            } else {
                eprintln!("backend unreachable: {e}");
            }
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn persisted() -> Selection {
        Selection::new("azure_openai", "gpt-4o")
    }

    #[test]
    fn test_choice_defaults_to_persisted_selection() {
        let catalog = ModelCatalog::builtin();
        let (provider, model) =
            resolve_model_choice(&catalog, &persisted(), None, None).unwrap();

        assert_eq!(provider, "azure_openai");
        assert_eq!(model, "gpt-4o");
    }

    #[test]
    fn test_choice_provider_flag_snaps_to_its_default_model() {
        let catalog = ModelCatalog::builtin();
        let (provider, model) =
            resolve_model_choice(&catalog, &persisted(), Some("google".into()), None).unwrap();

        assert_eq!(provider, "google");
        assert_eq!(model, "gemini-1.5-flash");
    }

    #[test]
    fn test_choice_explicit_pair_passes_through() {
        let catalog = ModelCatalog::builtin();
        let (provider, model) = resolve_model_choice(
            &catalog,
            &persisted(),
            Some("anthropic".into()),
            Some("claude-3".into()),
        )
        .unwrap();

        // Unknown pairs are forwarded; the backend decides
        assert_eq!(provider, "anthropic");
        assert_eq!(model, "claude-3");
    }

    #[test]
    fn test_choice_unknown_provider_without_model_is_an_error() {
        let catalog = ModelCatalog::builtin();
        let result =
            resolve_model_choice(&catalog, &persisted(), Some("anthropic".into()), None);

        assert!(result.is_err());
    }

    #[test]
    fn test_credential_hints_name_env_vars() {
        assert!(credential_hint("azure_openai").contains("GITROT_AZURE_API_KEY"));
        assert!(credential_hint("google").contains("GITROT_GOOGLE_API_KEY"));
    }
}
