//! Nano Banana CLI - image generation with @handle references
//!
//! Parses prompts locally, resolves `@handle` references against the
//! server-side element store, and keeps a local history of generated images.

mod api;
mod config;
mod history;
mod legacy;
mod store;

use anyhow::{bail, Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Confirm, Password};
use nanobanana::{
    get_resolution, is_prompt_handle, normalize_handle, parse_prompt_for_elements,
    resolve_references, AspectRatio, Element, Quality, ASPECT_RATIOS,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use api::NanoBananaClient;
use config::Config;
use store::LocalStore;

#[derive(Parser)]
#[command(name = "nanobanana")]
#[command(about = "Nano Banana CLI - image generation with @handle reference images", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Login and store API key
    Login {
        /// API key (will prompt if not provided)
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },

    /// Show how a prompt's @handles are rewritten
    Parse {
        prompt: String,
        /// Print the parsed prompt as JSON
        #[arg(long)]
        json: bool,
    },

    /// List aspect ratios and output sizes
    Resolutions,

    /// Manage reference image elements
    Element {
        #[command(subcommand)]
        action: ElementAction,
    },

    /// Generate an image
    Generate {
        /// Prompt, may reference elements as @handle
        prompt: String,
        /// Aspect ratio (16:9, 1:1, 9:16, 4:3, 21:9)
        #[arg(short, long, default_value = "16:9")]
        aspect: AspectRatio,
        /// Quality (standard, high, ultra)
        #[arg(short, long, default_value = "standard")]
        quality: Quality,
        /// Extra reference images, sent after the referenced elements
        #[arg(short, long = "image")]
        images: Vec<PathBuf>,
        /// Output file (defaults to nanobanana-<id>.png)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Locally saved generations
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Set the server URL
    SetUrl { url: String },
}

#[derive(Subcommand)]
enum ElementAction {
    /// List elements
    List,
    /// Upload an image as a new element
    Add {
        /// Handle, with or without the leading @
        handle: String,
        /// Image file
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Delete an element by handle
    Delete { handle: String },
    /// Upload elements saved locally by older clients, then clear them
    Migrate,
}

#[derive(Subcommand)]
enum HistoryAction {
    /// List saved generations, newest first
    List,
    /// Delete an entry by id (or unique id prefix)
    Delete { id: String },
    /// Delete all entries
    Clear {
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Login { key } => cmd_login(key).await,
        Commands::Config { action } => cmd_config(action),
        Commands::Parse { prompt, json } => cmd_parse(&prompt, json),
        Commands::Resolutions => cmd_resolutions(),
        Commands::Element { action } => cmd_element(action).await,
        Commands::Generate {
            prompt,
            aspect,
            quality,
            images,
            out,
        } => cmd_generate(prompt, aspect, quality, images, out).await,
        Commands::History { action } => cmd_history(action),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn client_from(config: &Config) -> NanoBananaClient {
    NanoBananaClient::new(&config.base_url, config.api_key.as_deref())
}

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_login(key: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    let api_key = match key {
        Some(k) => k,
        None => Password::new()
            .with_prompt("API Key")
            .interact()
            .context("Failed to read API key")?,
    };

    // Test connection
    let client = NanoBananaClient::new(&config.base_url, Some(api_key.as_str()));
    print!("Testing connection... ");

    match client.health().await {
        Ok(true) => {}
        _ => {
            println!("{}", "Failed".red());
            bail!("Could not reach {}. Check the server URL.", config.base_url);
        }
    }

    if let Err(e) = client.list_elements().await {
        println!("{}", "Failed".red());
        bail!("API key rejected: {}", e);
    }
    println!("{}", "OK".green());

    config.set_api_key(api_key);
    config.save()?;

    println!("{} API key saved to {:?}", "✓".green(), Config::config_path()?);

    Ok(())
}

fn cmd_config(action: Option<ConfigAction>) -> Result<()> {
    let mut config = Config::load()?;

    if let Some(ConfigAction::SetUrl { url }) = action {
        config.set_base_url(&url);
        config.save()?;
        println!("{} Server URL set to {}", "✓".green(), config.base_url.cyan());
        return Ok(());
    }

    let store = LocalStore::open_default()?;

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.base_url);
    println!(
        "  API Key: {}",
        if config.api_key.is_some() {
            "Set".green()
        } else {
            "Not set".red()
        }
    );
    println!("  Local data: {:?}", store.dir());
    println!("  History: {} item(s)", history::get_history(&store).len());

    Ok(())
}

fn cmd_parse(prompt: &str, json: bool) -> Result<()> {
    let parsed = parse_prompt_for_elements(prompt);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&parsed).context("Failed to serialize")?
        );
        return Ok(());
    }

    println!("{}", parsed.cleaned_prompt);
    if !parsed.references.is_empty() {
        println!();
        for reference in &parsed.references {
            println!(
                "  {} {}",
                format!("[{}]", reference.ref_index).dimmed(),
                reference.handle.cyan()
            );
        }
    }

    Ok(())
}

fn cmd_resolutions() -> Result<()> {
    let qualities = [Quality::Standard, Quality::High, Quality::Ultra];

    println!("{}", "Resolutions:".bold());
    for ratio in ASPECT_RATIOS {
        let sizes: Vec<String> = qualities
            .iter()
            .map(|q| format!("{} {}", q, get_resolution(ratio, *q)))
            .collect();
        println!(
            "  {} {}",
            format!("{:<18}", ratio.label()).cyan(),
            sizes.join("  ").dimmed()
        );
    }

    Ok(())
}

async fn cmd_element(action: ElementAction) -> Result<()> {
    let config = Config::load()?;
    let client = client_from(&config);

    match action {
        ElementAction::List => {
            let elements = client.list_elements().await?;

            if elements.is_empty() {
                println!("No elements yet.");
                println!("\n{}", "Add one with:".dimmed());
                println!("  nanobanana element add <handle> --file <image>");
                return Ok(());
            }

            println!("{}", "Elements:".bold());
            for element in elements {
                println!(
                    "  {} {}",
                    element.handle.cyan().bold(),
                    element.image_url.dimmed()
                );
            }
        }

        ElementAction::Add { handle, file } => {
            let handle = normalize_handle(&handle)?;

            let elements = client.list_elements().await?;
            if find_element(&elements, &handle).is_some() {
                bail!(nanobanana::HANDLE_IN_USE);
            }

            let image = read_image_data_uri(&file)?;
            let element = client.create_element(&handle, &image).await?;

            println!("{} Element {} added", "✓".green(), element.handle.cyan());
            warn_if_unreferenceable(&element.handle);
        }

        ElementAction::Delete { handle } => {
            let handle = normalize_handle(&handle)?;
            let elements = client.list_elements().await?;
            let element = find_element(&elements, &handle)
                .with_context(|| format!("Element {} not found", handle))?;

            client.delete_element(element.id).await?;
            println!("{} Element {} deleted", "✓".green(), handle.cyan());
        }

        ElementAction::Migrate => {
            let store = LocalStore::open_default()?;
            let pending = legacy::get_legacy_elements(&store);

            if pending.is_empty() {
                println!("No locally saved elements to migrate.");
                return Ok(());
            }

            let mut failed = Vec::new();
            for element in pending {
                match client.create_element(&element.handle, &element.base64).await {
                    Ok(created) => {
                        println!("{} Migrated {}", "✓".green(), created.handle.cyan());
                    }
                    Err(e) => {
                        println!("{} {}: {}", "✗".red(), element.handle, e);
                        failed.push(element);
                    }
                }
            }

            legacy::retain_legacy_elements(&store, &failed)?;

            if !failed.is_empty() {
                bail!("{} element(s) could not be migrated and were kept locally", failed.len());
            }
        }
    }

    Ok(())
}

async fn cmd_generate(
    prompt: String,
    aspect: AspectRatio,
    quality: Quality,
    images: Vec<PathBuf>,
    out: Option<PathBuf>,
) -> Result<()> {
    if prompt.trim().is_empty() {
        bail!("Prompt is required");
    }

    let config = Config::load()?;
    let client = client_from(&config);
    let store = LocalStore::open_default()?;

    let parsed = parse_prompt_for_elements(&prompt);
    let elements = if parsed.references.is_empty() {
        Vec::new()
    } else {
        client.list_elements().await?
    };

    let resolved = resolve_references(&parsed, &elements);
    for handle in &resolved.missing {
        eprintln!(
            "{} {} is not an element and was sent without an image",
            "warning:".yellow(),
            handle
        );
    }

    let mut input_images = resolved.input_images;
    for path in &images {
        input_images.push(read_image_data_uri(path)?);
    }

    let resolution = get_resolution(aspect, quality).to_string();
    tracing::debug!("Sending prompt: {}", resolved.prompt);

    println!(
        "Generating {} with {} reference image(s)...",
        resolution.cyan(),
        input_images.len()
    );
    let image = client
        .generate(&resolved.prompt, &resolution, &input_images)
        .await?;

    let bytes = STANDARD
        .decode(image.base64.as_bytes())
        .context("Server returned invalid image data")?;

    let saved = history::save_to_history(
        &store,
        image.base64,
        image.prompt,
        image.resolution,
        now_ms(),
    )?;

    let path = out.unwrap_or_else(|| PathBuf::from(default_output_name(&saved.id)));
    fs::write(&path, bytes).with_context(|| format!("Failed to write {:?}", path))?;

    println!("{} Saved {}", "✓".green(), path.display());
    println!("  Server copy: {}", image.image_url.dimmed());

    Ok(())
}

fn cmd_history(action: HistoryAction) -> Result<()> {
    let store = LocalStore::open_default()?;

    match action {
        HistoryAction::List => {
            let entries = history::get_history(&store);
            if entries.is_empty() {
                println!("No history yet.");
                return Ok(());
            }

            let now = now_ms();
            println!("{}", "History:".bold());
            for entry in entries {
                println!(
                    "  {} {:<16} {} {}",
                    short_id(&entry.id).dimmed(),
                    history::format_relative_time(entry.created_at, now),
                    entry.resolution.cyan(),
                    truncate_string(&entry.prompt, 60)
                );
            }
        }

        HistoryAction::Delete { id } => {
            let entries = history::get_history(&store);
            let id = history::find_entry_id(&entries, &id)
                .with_context(|| format!("No single history entry matches '{}'", id))?;

            history::delete_from_history(&store, &id)?;
            println!("{} Deleted {}", "✓".green(), short_id(&id));
        }

        HistoryAction::Clear { yes } => {
            let confirmed = yes
                || Confirm::new()
                    .with_prompt("Delete all history?")
                    .default(false)
                    .interact()
                    .context("Failed to read confirmation")?;

            if confirmed {
                history::clear_history(&store)?;
                println!("{} History cleared", "✓".green());
            }
        }
    }

    Ok(())
}

// ============================================
// Helpers
// ============================================

fn find_element<'a>(elements: &'a [Element], handle: &str) -> Option<&'a Element> {
    elements.iter().find(|e| e.handle == handle)
}

fn warn_if_unreferenceable(handle: &str) {
    if !is_prompt_handle(handle) {
        eprintln!(
            "{} {} contains characters prompts do not recognise; \
             it cannot be referenced as {} in a prompt",
            "warning:".yellow(),
            handle,
            handle
        );
    }
}

fn mime_type(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "image/png",
    }
}

/// Read an image file as a `data:` URI
fn read_image_data_uri(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read image {:?}", path))?;
    Ok(format!(
        "data:{};base64,{}",
        mime_type(path),
        STANDARD.encode(bytes)
    ))
}

fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

fn default_output_name(id: &str) -> String {
    format!("nanobanana-{}.png", short_id(id))
}

/// Truncate string safely for UTF-8 (by char count, not bytes)
fn truncate_string(s: &str, max_chars: usize) -> String {
    let chars: Vec<char> = s.chars().take(max_chars).collect();
    if s.chars().count() > max_chars {
        format!("{}...", chars.into_iter().collect::<String>())
    } else {
        s.to_string()
    }
}
