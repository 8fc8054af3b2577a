use clap::{Parser, Subcommand};
use std::path::PathBuf;
use anyhow::Result;

use crate::config::OutputFormat;
use crate::core::Engine;

#[derive(Parser)]
#[command(name = "flutterdoc")]
#[command(about = "Generates documentation comments for Dart/Flutter methods")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Document the method declared below the given line
    Generate {
        /// Source file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Reference (cursor) line, 1-based; the comment is inserted right below it
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
        line: u64,

        /// Output format (defaults to the configured one)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Rewrite the file in place instead of printing
        #[arg(short, long, requires = "file")]
        write: bool,
    },

    /// Show the parsed signature of the method declared below the given line
    Inspect {
        /// Source file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Reference (cursor) line, 1-based
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
        line: u64,

        /// Print JSON instead of a text summary
        #[arg(long)]
        json: bool,
    },

    /// Write a default flutterdoc.toml
    Init {
        /// Target file or directory (defaults to current directory)
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    pub async fn execute(self, engine: Engine) -> Result<()> {
        match self.command {
            Commands::Generate { file, line, format, write } => {
                engine.generate(file, line as usize, format, write).await
            }
            Commands::Inspect { file, line, json } => {
                engine.inspect(file, line as usize, json).await
            }
            Commands::Init { path, force } => {
                engine.init(path, force).await
            }
        }
    }
}
