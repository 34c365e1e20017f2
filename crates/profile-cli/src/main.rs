//! # profile-cli
//!
//! Command-line interface for the profile schema engine.
//!
//! `profilegen generate` assembles the validation schema from a dictionary
//! directory and writes it as a JSON Schema document; `profilegen check`
//! verifies that every bound vocabulary resolves to a loadable dictionary.

use anyhow::Context;
use clap::Parser;
use profile_schema::{BindingTable, DocumentVariant, SchemaAssembler};
use profile_vocab::DictionaryLoader;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "profilegen")]
#[command(about = "Profile schema generator")]
#[command(version)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
enum Commands {
    /// Generate the profile validation schema
    Generate {
        /// Output schema file path
        output: PathBuf,

        /// Dictionaries directory
        #[arg(short, long, default_value = "dictionaries")]
        dictionaries: PathBuf,

        /// Include the event_context block and goal vocabularies
        #[arg(long)]
        event_context: bool,
    },

    /// Check that every bound vocabulary resolves to a dictionary
    Check {
        /// Dictionaries directory
        #[arg(short, long, default_value = "dictionaries")]
        dictionaries: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            output,
            dictionaries,
            event_context,
        } => generate(&output, &dictionaries, event_context),
        Commands::Check { dictionaries } => check(&dictionaries),
    }
}

fn generate(output: &Path, dictionaries: &Path, event_context: bool) -> anyhow::Result<()> {
    let variant = if event_context {
        DocumentVariant::WithEventContext
    } else {
        DocumentVariant::Standard
    };

    let assembler = SchemaAssembler::new(
        DictionaryLoader::new(dictionaries),
        BindingTable::standard(),
        variant,
    );
    let schema = assembler.assemble()?;

    let mut rendered = serde_json::to_string_pretty(&schema.to_value())?;
    rendered.push('\n');
    std::fs::write(output, rendered)
        .with_context(|| format!("writing schema to {}", output.display()))?;

    tracing::info!("Schema written to {}", output.display());
    Ok(())
}

fn check(dictionaries: &Path) -> anyhow::Result<()> {
    let loader = DictionaryLoader::new(dictionaries);
    let table = BindingTable::standard();

    let mut failures = 0usize;
    for identifier in table.vocabularies() {
        match loader.load(identifier) {
            Ok(content) => println!("{identifier}: {} values", content.len()),
            Err(err) => {
                eprintln!("{identifier}: {err}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} vocabularies failed to load");
    }
    Ok(())
}
