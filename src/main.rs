//! Portfolio Builder CLI
//!
//! Usage:
//!   portfolio-builder list
//!   portfolio-builder show <TEMPLATE> [--format toml|json]
//!   portfolio-builder validate <FILE>
//!   portfolio-builder edit <TEMPLATE> --script <FILE> [--options <FILE>] [--history]

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use portfolio_builder::{
    ConfigError, EditScript, EditorOptions, PortfolioConfig, TemplateCatalog, TemplateConfig, TemplateEditor,
};

#[derive(Parser)]
#[command(name = "portfolio-builder")]
#[command(about = "Template configuration engine for portfolio websites")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the built-in templates
    List,

    /// Print the default configuration of a template
    Show {
        /// Template variant (professional, modern, minimalist, vanta)
        template: String,

        #[arg(short, long, value_enum, default_value_t = Format::Toml)]
        format: Format,
    },

    /// Check a template configuration file
    Validate {
        /// Configuration file (TOML format)
        file: PathBuf,
    },

    /// Apply an edit script to a template's default configuration
    Edit {
        /// Template variant to start from
        template: String,

        /// Edit script (TOML, or JSON with a .json extension)
        #[arg(short, long)]
        script: PathBuf,

        /// Editor options file (TOML format)
        #[arg(short, long)]
        options: Option<PathBuf>,

        /// Also print the edit history, most recent first
        #[arg(long)]
        history: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Toml,
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Command::List => {
            list_templates();
            Ok(())
        }
        Command::Show { template, format } => show_template(&template, format),
        Command::Validate { file } => validate_file(&file),
        Command::Edit {
            template,
            script,
            options,
            history,
        } => edit_template(&template, &script, options.as_deref(), history),
    };

    if let Err(message) = result {
        eprintln!("Error: {}", message);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("portfolio_builder={}", default_level))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn list_templates() {
    let catalog = TemplateCatalog::builtin();
    for variant in catalog.variants() {
        if let Ok(config) = catalog.get_default(variant) {
            println!("{:<14}{}", variant, config.description);
        }
    }
}

fn show_template(template: &str, format: Format) -> Result<(), String> {
    let config = TemplateCatalog::builtin()
        .get_default_by_name(template)
        .map_err(|e| e.to_string())?;
    println!("{}", serialize(&config, format)?);
    Ok(())
}

fn serialize<T: serde::Serialize>(value: &T, format: Format) -> Result<String, String> {
    match format {
        Format::Toml => toml::to_string_pretty(value).map_err(|e| e.to_string()),
        Format::Json => serde_json::to_string_pretty(value).map_err(|e| e.to_string()),
    }
}

fn validate_file(path: &Path) -> Result<(), String> {
    let source = ConfigError::read(path).map_err(|e| e.to_string())?;

    match TemplateConfig::from_toml_str(&source) {
        Ok(config) => {
            println!(
                "{}: ok ({} template, {} sections, {} visible)",
                path.display(),
                config.template,
                config.sections.len(),
                config.visible_sections().len()
            );
            Ok(())
        }
        Err(e) => {
            let filename = path.display().to_string();
            Err(e.format(&source, &filename))
        }
    }
}

fn edit_template(
    template: &str,
    script_path: &Path,
    options_path: Option<&Path>,
    show_history: bool,
) -> Result<(), String> {
    let config = TemplateCatalog::builtin()
        .get_default_by_name(template)
        .map_err(|e| e.to_string())?;

    let options = match options_path {
        Some(path) => EditorOptions::from_file(path).map_err(|e| e.to_string())?,
        None => EditorOptions::default(),
    };
    debug!(?options, "editor options");

    let script = EditScript::from_file(script_path).map_err(|e| e.to_string())?;
    info!(template, edits = script.len(), "applying edit script");

    let mut editor = TemplateEditor::with_options(PortfolioConfig::from_template(config), options);
    let result = script.apply(&mut editor).map_err(|e| e.to_string())?;

    println!("{}", serialize(&*result, Format::Json)?);

    if show_history {
        eprintln!();
        for entry in editor.history() {
            eprintln!("{}  {}", entry.timestamp_label(), entry.description);
        }
    }
    Ok(())
}
