//! Made in USA Badge CLI
//!
//! Usage:
//!   made-in-usa-badge [OPTIONS] <COMMAND>
//!
//! Commands:
//!   css            Print the CSS block
//!   html           Print the self-contained HTML element
//!   script         Print the runtime init snippet
//!   inject         Print the standalone injection script
//!   react          Print the React component snippet
//!   descriptor     Print the resolved style descriptor as JSON
//!   save-default   Store the configured badge as the new default
//!   build-assets   Write the distributable stylesheet, runtime and README

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use env_logger::Env;

use made_in_usa_badge::{
    build_assets, generate_with_config, BadgePosition, BadgeSize, BadgeStyle, ConfigEdit,
    ConfigError, ConfiguratorSession, DefaultsStore, PartialBadgeConfig, SnippetConfig,
    SnippetKind,
};

#[derive(Parser)]
#[command(name = "made-in-usa-badge")]
#[command(about = "Configure and generate Made in USA product badges")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Badge config file (TOML), applied over the defaults
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Defaults file (TOML) seeding the session
    #[arg(short, long, global = true)]
    defaults: Option<PathBuf>,

    /// Badge style: standard, round, ribbon or flag
    #[arg(long, global = true)]
    style: Option<BadgeStyle>,

    /// Badge size: sm, md or lg
    #[arg(long, global = true)]
    size: Option<BadgeSize>,

    /// Badge position: top-left, top-right, bottom-left, bottom-right or center
    #[arg(long, global = true)]
    position: Option<BadgePosition>,

    /// Hover animation (true/false)
    #[arg(long, global = true)]
    animated: Option<bool>,

    /// Glow effect (true/false)
    #[arg(long, global = true)]
    glowing: Option<bool>,

    /// Flag icon (true/false)
    #[arg(long, global = true)]
    show_icon: Option<bool>,

    /// Custom badge text; empty restores "MADE IN USA"
    #[arg(long, global = true)]
    text: Option<String>,

    /// Extra edits as KEY=VALUE, applied after the other options
    #[arg(long = "set", value_name = "KEY=VALUE", global = true)]
    edits: Vec<ConfigEdit>,

    /// Base URL the assets are served from
    #[arg(long, global = true)]
    cdn: Option<String>,

    /// Emit compact CSS without comments
    #[arg(long, global = true)]
    compact: bool,

    /// Log resolution details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the CSS block
    Css,
    /// Print the self-contained HTML element
    Html,
    /// Print the runtime init snippet
    Script {
        /// CSS selector of the product containers
        #[arg(long, default_value = ".product-card")]
        selector: String,
    },
    /// Print the standalone injection script
    Inject {
        /// CSS selector of the product containers
        #[arg(long, default_value = ".product-card")]
        selector: String,
    },
    /// Print the React component snippet
    React,
    /// Print the resolved style descriptor as JSON
    Descriptor,
    /// Store the configured badge in the defaults file
    SaveDefault,
    /// Write the distributable assets
    BuildAssets {
        /// Output directory
        #[arg(long, default_value = "dist/badge-assets")]
        out_dir: PathBuf,
    },
}

impl Cli {
    /// The single-field options as edits, in a fixed order
    fn field_edits(&self) -> Vec<ConfigEdit> {
        let mut edits = vec![];
        if let Some(style) = self.style {
            edits.push(ConfigEdit::Style(style));
        }
        if let Some(size) = self.size {
            edits.push(ConfigEdit::Size(size));
        }
        if let Some(position) = self.position {
            edits.push(ConfigEdit::Position(position));
        }
        if let Some(animated) = self.animated {
            edits.push(ConfigEdit::Animated(animated));
        }
        if let Some(glowing) = self.glowing {
            edits.push(ConfigEdit::Glowing(glowing));
        }
        if let Some(show_icon) = self.show_icon {
            edits.push(ConfigEdit::ShowIcon(show_icon));
        }
        if let Some(text) = &self.text {
            edits.push(ConfigEdit::CustomText(text.clone()));
        }
        edits.extend(self.edits.iter().cloned());
        edits
    }

    fn snippet_config(&self) -> SnippetConfig {
        let snippet = SnippetConfig::new()
            .with_pretty_print(!self.compact)
            .with_comments(!self.compact);
        match &self.cdn {
            Some(url) => snippet.with_asset_base_url(url.as_str()),
            None => snippet,
        }
    }
}

/// Logger reading its filter from `env`, `warn` when unset
///
/// `--verbose` raises every module to debug on top of that filter.
fn logger_builder(env: Env<'_>, verbose: bool) -> env_logger::Builder {
    let mut builder = env_logger::Builder::from_env(env.default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder
}

/// Print a config error with its source context and exit
fn exit_with_config_error(error: ConfigError, path: &Path) -> ! {
    let source = fs::read_to_string(path).unwrap_or_default();
    eprintln!("{}", error.format(&source, &path.display().to_string()));
    std::process::exit(1);
}

fn main() {
    let cli = Cli::parse();

    logger_builder(Env::default(), cli.verbose).init();

    // Load defaults
    let mut defaults = match &cli.defaults {
        Some(path) => match DefaultsStore::load(path) {
            Ok(store) => store,
            Err(e) => exit_with_config_error(e, path),
        },
        None => DefaultsStore::new(),
    };

    let mut session = ConfiguratorSession::start(&defaults);

    // Config file, then individual options
    if let Some(path) = &cli.config {
        match PartialBadgeConfig::from_file(path) {
            Ok(partial) => {
                session.merge(partial);
            }
            Err(e) => exit_with_config_error(e, path),
        }
    }
    session.apply_all(cli.field_edits());

    let snippet = cli.snippet_config();
    let generated = match &cli.command {
        Command::Css => generate_with_config(SnippetKind::Css, session.config(), "", &snippet),
        Command::Html => generate_with_config(SnippetKind::Html, session.config(), "", &snippet),
        Command::Script { selector } => {
            generate_with_config(SnippetKind::Script, session.config(), selector, &snippet)
        }
        Command::Inject { selector } => {
            generate_with_config(SnippetKind::Inject, session.config(), selector, &snippet)
        }
        Command::React => {
            generate_with_config(SnippetKind::React, session.config(), "", &snippet)
        }
        Command::Descriptor => {
            match serde_json::to_string_pretty(&session.descriptor()) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error serializing descriptor: {}", e);
                    std::process::exit(1);
                }
            }
            return;
        }
        Command::SaveDefault => {
            let Some(path) = &cli.defaults else {
                eprintln!("Error: save-default requires --defaults <FILE>");
                std::process::exit(1);
            };
            session.save_as_default(&mut defaults);
            if let Err(e) = defaults.save(path) {
                eprintln!("Error saving defaults '{}': {}", path.display(), e);
                std::process::exit(1);
            }
            println!("Saved defaults to {}", path.display());
            return;
        }
        Command::BuildAssets { out_dir } => {
            match build_assets(out_dir, &snippet) {
                Ok(manifest) => {
                    for path in [&manifest.stylesheet, &manifest.runtime, &manifest.readme] {
                        println!("{}", path.display());
                    }
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
            return;
        }
    };

    match generated {
        Ok(out) => print!("{}", out),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
