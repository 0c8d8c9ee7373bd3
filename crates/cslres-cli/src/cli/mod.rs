//! CLI for the cslres style resolver.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cslres_core::config;
use cslres_core::resolver::StyleResolver;

use commands::{run_fetch, run_list, run_resolve};

/// Top-level CLI for the cslres style resolver.
#[derive(Debug, Parser)]
#[command(name = "cslres")]
#[command(about = "cslres: resolve CSL citation style identifiers and fetch stylesheets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve a style identifier to its independent style.
    Resolve {
        /// Style short name or URL (config default_style when omitted).
        style: Option<String>,

        /// Advance a single dependency hop instead of resolving fully.
        #[arg(long)]
        step: bool,
    },

    /// Resolve a style and print (or save) its stylesheet text.
    Fetch {
        /// Style short name or URL (config default_style when omitted).
        style: Option<String>,

        /// Use the contents of FILE as a posted stylesheet, bypassing resolution.
        #[arg(long, value_name = "FILE")]
        post: Option<String>,

        /// Write the stylesheet to FILE instead of stdout.
        #[arg(short, long, value_name = "FILE")]
        output: Option<String>,
    },

    /// List the styles known to the registry snapshot.
    List,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let resolver = StyleResolver::from_config(&cfg)?;

        match cli.command {
            CliCommand::Resolve { style, step } => {
                let style = style.unwrap_or_else(|| cfg.default_style().to_string());
                run_resolve(&resolver, &style, step).await?;
            }
            CliCommand::Fetch {
                style,
                post,
                output,
            } => {
                let style = style.unwrap_or_else(|| cfg.default_style().to_string());
                run_fetch(&resolver, &style, post.as_deref(), output.as_deref()).await?;
            }
            CliCommand::List => run_list(&resolver)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
