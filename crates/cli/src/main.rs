mod config;
mod input;
mod template;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use markup_core::{SchemaKind, render};
use schemars::schema_for;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "markup")]
#[command(about = "Schema.org JSON-LD markup generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render JSON-LD markup from an input record
    Generate {
        /// faq, product, local-business or article
        kind: SchemaKind,

        /// Input record (.json, .yaml, .yml or .toml); "-" reads JSON from stdin
        #[arg(long, short)]
        input: PathBuf,

        /// Config file (default: ./markup.toml, optional)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Wrap the JSON in a <script type="application/ld+json"> element
        #[arg(long, conflicts_with = "bare")]
        script_tag: bool,

        /// Print the JSON without the script element
        #[arg(long)]
        bare: bool,

        /// Write to a file instead of stdout
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
    /// Export JSON Schemas for the input records
    Schema {
        #[command(subcommand)]
        command: SchemaCommands,
    },
    /// Print the default input record for a kind
    Template {
        /// faq, product, local-business or article
        kind: SchemaKind,
    },
}

#[derive(Subcommand)]
enum SchemaCommands {
    /// Export JSON Schema files for the input records
    Export {
        /// Output directory (default: ./schemas)
        #[arg(long, default_value = "schemas")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            kind,
            input,
            config,
            script_tag,
            bare,
            out,
        } => generate(kind, input, config, script_tag, bare, out),
        Commands::Schema { command } => match command {
            SchemaCommands::Export { out_dir } => schema_export(out_dir),
        },
        Commands::Template { kind } => print_template(kind),
    }
}

fn generate(
    kind: SchemaKind,
    input: PathBuf,
    config: Option<PathBuf>,
    script_tag: bool,
    bare: bool,
    out: Option<PathBuf>,
) -> Result<()> {
    let config = config::MarkupConfig::resolve(config.as_deref())?;
    let mut options = config.render_options();
    if script_tag {
        options.include_script_tag = true;
    }
    if bare {
        options.include_script_tag = false;
    }

    let record = input::load(kind, &input)?;
    let markup = render(&record, &options)
        .with_context(|| format!("failed to render {kind} markup"))?;

    match out {
        Some(path) => {
            fs::write(&path, format!("{markup}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(kind = %kind, path = %path.display(), "wrote markup");
        }
        None => println!("{markup}"),
    }
    Ok(())
}

fn schema_export(out_dir: PathBuf) -> Result<()> {
    fs::create_dir_all(&out_dir)?;

    let schemas = [
        ("FaqPage", schema_for!(markup_core::FaqPage)),
        ("ProductData", schema_for!(markup_core::ProductData)),
        ("LocalBusinessData", schema_for!(markup_core::LocalBusinessData)),
        ("ArticleData", schema_for!(markup_core::ArticleData)),
    ];

    for (name, schema) in schemas {
        let json = serde_json::to_string_pretty(&schema)?;
        fs::write(out_dir.join(format!("{name}.schema.json")), json)?;
    }

    println!("Exported schemas to {}", out_dir.display());
    Ok(())
}

fn print_template(kind: SchemaKind) -> Result<()> {
    let today = time::OffsetDateTime::now_utc().date();
    let record = template::default_record(kind, today)?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
