//! # project-finder
//!
//! A fast CLI for finding your project directories and seeing at a glance
//! what each one is built with.
//!
//! Roots come from the command line or from `project_folders` in
//! `~/.config/project-finder/config.toml`. A root ending in `/*` contributes
//! each of its immediate subdirectories; any other root is a project itself.
//!
//! ## Features
//!
//! - Wildcard and literal roots with `~` expansion
//! - Built-in ignore list for build output, caches and VCS folders
//! - Optional project-indicator check (`.git`, `Cargo.toml`, ...)
//! - Technology classification with framework-over-language priority
//! - Favorites that always sort first
//! - JSON output for scripting
//!
//! ## Usage
//!
//! ```bash
//! # List projects under the configured roots
//! project-finder
//!
//! # List children of ~/code that look like real projects
//! project-finder ~/code/* --require-indicator
//!
//! # Explain why a directory was classified the way it was
//! project-finder classify . --explain
//! ```

mod cli;

use std::{path::Path, process::exit};

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Commands, ConfigCommand, FavoriteCommand, ListArgs};
use colored::Colorize;
use project_finder::{
    config::{DEFAULT_INDICATORS, FileConfig, Platform},
    discover::{DiscoveredProject, Discoverer},
    favorites::{Favorites, FavoritesStore},
    output::JsonOutput,
    paths::PathNormalizer,
    technology::{self, Evidence, Technology},
};
use rayon::prelude::*;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Entry point for the project-finder application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err:#}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// # Errors
///
/// Returns errors from favorites persistence, config file creation, or
/// JSON serialization. Discovery and classification never fail.
fn inner_main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    match &args.subcommand {
        Some(Commands::Config { command }) => handle_config_command(command),
        Some(Commands::Favorite { command }) => handle_favorite_command(command),
        Some(Commands::Classify { paths, explain }) => {
            classify_paths(paths, *explain);
            Ok(())
        }
        Some(Commands::List(list)) => run_list(list),
        None => run_list(&args.list),
    }
}

/// Install the stderr subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        "project_finder=debug"
    } else {
        "project_finder=warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// ── List ────────────────────────────────────────────────────────────

/// Discover, classify and print projects.
fn run_list(list: &ListArgs) -> Result<()> {
    let json_mode = list.json();
    let config = load_config(json_mode);
    let normalizer = PathNormalizer::native();
    let platform = normalizer.platform();

    let favorites = load_favorites(&config, &normalizer, json_mode);
    let options = list.discover_options(&config, platform, favorites);
    let roots = list.roots(&config);

    if roots.is_empty() && !json_mode {
        print_no_roots_hint();
        return Ok(());
    }

    let projects = Discoverer::new(options, normalizer).discover(&roots);
    let classified: Vec<(DiscoveredProject, Technology)> = projects
        .into_par_iter()
        .map(|project| {
            let tech = technology::classify(&project.path);
            (project, tech)
        })
        .collect();

    if json_mode {
        let output = JsonOutput::from_projects(&roots, &classified);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if classified.is_empty() {
        println!("{}", "✨ No projects found under the configured roots.".green());
        return Ok(());
    }

    for (project, tech) in &classified {
        print_project(project, *tech);
    }
    println!("\n{} {}", "📁 Projects:".bold(), classified.len());

    Ok(())
}

fn print_project(project: &DiscoveredProject, tech: Technology) {
    let marker = if project.is_favorite {
        "★".yellow().to_string()
    } else {
        " ".to_string()
    };

    println!(
        "{marker} {} {:<28} {:<12} {}",
        tech.emoji(),
        project.label.bold(),
        tech.display_name().cyan(),
        project.path.display().to_string().dimmed()
    );
}

fn print_no_roots_hint() {
    println!("{}", "No project folders configured.".yellow());
    println!("Pass roots on the command line, e.g. `project-finder ~/code/*`,");
    match FileConfig::config_path() {
        Some(path) => println!("or add `project_folders` to {}", path.display()),
        None => println!("or add `project_folders` to the config file."),
    }
    println!("Run `project-finder config init` to create one.");
}

// ── Classify ────────────────────────────────────────────────────────

/// Print the technology of each path. Unreadable paths are `Unknown`.
fn classify_paths(paths: &[std::path::PathBuf], explain: bool) {
    for path in paths {
        let detection = technology::detect(path);
        let tech = detection.map_or(Technology::Unknown, |d| d.technology);

        print!(
            "{} {:<12} {}",
            tech.emoji(),
            tech.display_name().cyan(),
            path.display()
        );

        if explain {
            match detection {
                Some(d) => print!(
                    "  {}",
                    format!("(priority {}, {})", d.priority, describe_evidence(d.evidence)).dimmed()
                ),
                None => print!("  {}", "(no rule matched)".dimmed()),
            }
        }
        println!();
    }
}

fn describe_evidence(evidence: Evidence) -> String {
    match evidence {
        Evidence::File(name) => format!("found {name}"),
        Evidence::Extension(ext) => format!("found a *{ext} file"),
        Evidence::Content { file, needle } => format!("{file} mentions {needle}"),
        Evidence::Subdirectory(path) => format!("found {path}"),
    }
}

// ── Favorites ───────────────────────────────────────────────────────

/// Dispatch a `favorite` subcommand.
fn handle_favorite_command(cmd: &FavoriteCommand) -> Result<()> {
    let config = load_config(false);
    let normalizer = PathNormalizer::native();
    let Some(store) = config.favorites_store(&normalizer) else {
        bail!("Could not determine the data directory on this platform");
    };

    let mut favorites = store.load()?;

    match cmd {
        FavoriteCommand::List => {
            for path in favorites.favorite_paths() {
                println!("{}", path.display());
            }
            return Ok(());
        }
        FavoriteCommand::Add { path } => {
            let path = absolute(path)?;
            favorites.set(path.clone(), true);
            println!("{} {}", "★ Added".yellow(), path.display());
        }
        FavoriteCommand::Remove { path } => {
            let path = absolute(path)?;
            favorites.set(path.clone(), false);
            println!("{} {}", "Removed".dimmed(), path.display());
        }
        FavoriteCommand::Toggle { path } => {
            let path = absolute(path)?;
            if favorites.toggle(path.clone()) {
                println!("{} {}", "★ Added".yellow(), path.display());
            } else {
                println!("{} {}", "Removed".dimmed(), path.display());
            }
        }
    }

    store.save(&favorites)?;
    debug!(path = %store.path().display(), "favorites saved");
    Ok(())
}

fn absolute(path: &Path) -> Result<std::path::PathBuf> {
    std::path::absolute(path)
        .with_context(|| format!("Failed to resolve {}", path.display()))
}

/// Load favorites for discovery, falling back to an empty map on failure.
fn load_favorites(config: &FileConfig, normalizer: &PathNormalizer, quiet: bool) -> Favorites {
    let Some(store) = config.favorites_store(normalizer) else {
        return Favorites::default();
    };

    store.load().unwrap_or_else(|e| {
        if !quiet {
            eprintln!("{} {e:#}", "Warning: Failed to load favorites:".yellow());
        }
        Favorites::default()
    })
}

// ── Config subcommand ────────────────────────────────────────────────

/// Default config file template written by `config init`.
const CONFIG_TEMPLATE: &str = r#"# project-finder configuration
# All values shown are their defaults. Uncomment and change as needed.

# Roots to search. A trailing "/*" lists the immediate subdirectories of a
# folder; any other entry is a single project. "~" is the home directory.
# project_folders = ["~/code/*"]

# Only keep wildcard children that contain one of the project indicators
# enable_project_indicators = false

# Entries that mark a directory as a project
# project_indicators = [".git", "package.json", ".vscode", "pom.xml", "build.gradle", "Cargo.toml", "go.mod"]

# Folder names to skip. Setting this replaces the built-in list.
# ignored_folders = []

# Folder names to skip in addition to the list above
# extra_ignored_folders = []

# Where favorites are stored (defaults to the platform data directory)
# favorites_file = "~/.local/share/project-finder/favorites.json"
"#;

/// Dispatch a `config` subcommand.
fn handle_config_command(cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Path => match FileConfig::config_path() {
            Some(path) => println!("{}", path.display()),
            None => bail!("Could not determine the config directory on this platform"),
        },
        ConfigCommand::Show => show_config()?,
        ConfigCommand::Init => init_config()?,
    }
    Ok(())
}

/// Print the effective configuration (file values merged with defaults).
fn show_config() -> Result<()> {
    let path = FileConfig::config_path();

    let (file_exists, config) = match &path {
        Some(p) if p.exists() => (true, FileConfig::load()?),
        _ => (false, FileConfig::default()),
    };

    match &path {
        Some(p) if file_exists => println!("Config file: {} (found)", p.display()),
        Some(p) => println!(
            "Config file: {} (not found - showing defaults)",
            p.display()
        ),
        None => println!("Config file: (cannot determine path on this platform)"),
    }

    println!();
    println!("{}", format_config(&config));
    Ok(())
}

/// Format a [`FileConfig`] as a human-readable table, showing defaults for `None` fields.
fn format_config(config: &FileConfig) -> String {
    fn show_list(val: Option<&[String]>, default: &str) -> String {
        val.map_or_else(
            || format!("{default}  (default)"),
            |v| {
                let items: Vec<String> = v.iter().map(|s| format!("\"{s}\"")).collect();
                format!("[{}]", items.join(", "))
            },
        )
    }
    fn show_bool(val: Option<bool>, default: bool) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }

    let default_indicators = format!(
        "[{}]",
        DEFAULT_INDICATORS
            .iter()
            .map(|s| format!("\"{s}\""))
            .collect::<Vec<_>>()
            .join(", ")
    );
    let favorites = config.favorites_file.as_ref().map_or_else(
        || {
            FavoritesStore::default_path().map_or_else(
                || "(unknown)  (default)".to_string(),
                |p| format!("\"{}\"  (default)", p.display()),
            )
        },
        |f| format!("\"{f}\""),
    );
    let ignored = config.ignore_set(Platform::native());

    format!(
        "\
project_folders           = {project_folders}
enable_project_indicators = {enable_project_indicators}
project_indicators        = {project_indicators}
ignored_folders           = {ignored_folders}
extra_ignored_folders     = {extra_ignored_folders}
favorites_file            = {favorites}

{ignored_count} folder names are ignored in total.",
        project_folders = show_list(config.project_folders.as_deref(), "[]"),
        enable_project_indicators = show_bool(config.enable_project_indicators, false),
        project_indicators = show_list(config.project_indicators.as_deref(), &default_indicators),
        ignored_folders = show_list(config.ignored_folders.as_deref(), "(built-in list)"),
        extra_ignored_folders = show_list(config.extra_ignored_folders.as_deref(), "[]"),
        ignored_count = ignored.len(),
    )
}

/// Write a default config template to the config file path if it does not exist yet.
fn init_config() -> Result<()> {
    let Some(path) = FileConfig::config_path() else {
        bail!("Could not determine the config directory on this platform");
    };

    if path.exists() {
        println!("Config file already exists at: {}", path.display());
        println!("Remove it first if you want to regenerate it.");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create config directory {}", parent.display())
        })?;
    }

    std::fs::write(&path, CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to write config file {}", path.display()))?;

    println!("Config file written to: {}", path.display());
    Ok(())
}

/// Load the configuration file, falling back to defaults on failure.
fn load_config(quiet: bool) -> FileConfig {
    FileConfig::load().unwrap_or_else(|e| {
        if !quiet {
            eprintln!("{} {e:#}", "Warning: Failed to load config file:".yellow());
        }
        FileConfig::default()
    })
}
