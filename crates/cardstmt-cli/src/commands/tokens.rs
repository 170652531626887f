//! Tokens command - dump the page tokens of a PDF statement.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use super::{load_config, read_document};

/// Arguments for the tokens command.
#[derive(Args)]
pub struct TokensArgs {
    /// Input PDF statement
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn run(args: TokensArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let doc = read_document(&args.input, &config)?;
    info!(
        "Tokenized {} into {} pages, {} tokens",
        args.input.display(),
        doc.page_count(),
        doc.token_count()
    );

    let output = serde_json::to_string_pretty(&doc)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Tokens written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}
