// src/core/engine.rs
use std::path::{Path, PathBuf};
use anyhow::Result;
use serde::Serialize;
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

use crate::config::{Config, OutputFormat, CONFIG_CANDIDATES};
use crate::error::FlutterdocError;
use super::{decompose, CommentRenderer, DeclarationLocator, LocatedDeclaration, Signature, TextEdit};

/// Outcome of documenting one declaration
#[derive(Debug, Clone)]
pub struct GeneratedDoc {
    pub declaration: LocatedDeclaration,
    pub signature: Signature,
    pub edit: TextEdit,
    pub message: String,
}

/// JSON shape handed to editor adapters
#[derive(Debug, Serialize)]
struct EditOutput<'a> {
    line: usize,
    text: &'a str,
    name: &'a str,
}

/// Wires the locator, decomposer and renderer together for the CLI
pub struct Engine {
    config: Config,
    locator: DeclarationLocator,
    renderer: CommentRenderer,
}

impl Engine {
    pub async fn new(config_path: Option<&Path>) -> Result<Self> {
        let config = Config::load_or_default(config_path)?;

        debug!("Loaded configuration: {:?}", config);

        Ok(Self::from_config(config))
    }

    pub fn from_config(config: Config) -> Self {
        let locator = DeclarationLocator::new(&config.locator);
        Self {
            config,
            locator,
            renderer: CommentRenderer::new(),
        }
    }

    /// Find the declaration below `start_line` and build its comment block.
    /// `None` means nothing was found and nothing should change.
    pub fn document<S: AsRef<str>>(&self, lines: &[S], start_line: usize) -> Option<GeneratedDoc> {
        let declaration = self.locator.locate(lines, start_line)?;
        let signature = decompose(&declaration.text);

        debug!(
            "Decomposed '{}': returns '{}', {} parameter(s)",
            signature.name,
            signature.return_type,
            signature.parameters.len()
        );

        let edit = TextEdit::insert(declaration.insert_at, self.renderer.render_insertion(&signature));
        let message = self.renderer.status_message(&signature.name);

        Some(GeneratedDoc {
            declaration,
            signature,
            edit,
            message,
        })
    }

    /// Generate documentation for the declaration below `line` (1-based)
    pub async fn generate(
        &self,
        file: Option<PathBuf>,
        line: usize,
        format: Option<OutputFormat>,
        write: bool,
    ) -> Result<()> {
        let buffer = read_input(file.as_deref()).await?;
        let lines: Vec<&str> = buffer.lines().collect();
        let doc = self.document(&lines, reference_index(line)?);

        if write {
            let path = file.ok_or_else(|| {
                FlutterdocError::Config("--write needs a file path".to_string())
            })?;

            match &doc {
                Some(doc) => {
                    let updated = doc.edit.apply(&buffer)?;
                    tokio::fs::write(&path, updated).await?;
                    debug!(
                        "Wrote {} (declaration ends on line {})",
                        path.display(),
                        doc.declaration.end_line + 1
                    );
                    self.notify(doc);
                }
                None => debug!("Nothing to document in {}", path.display()),
            }
            return Ok(());
        }

        let format = format.unwrap_or(self.config.output.format);
        if let Some(output) = self.render_output(&buffer, doc.as_ref(), format)? {
            print!("{}", output);
        }
        if let Some(doc) = &doc {
            self.notify(doc);
        }

        Ok(())
    }

    /// Print the decomposed signature of the declaration below `line` (1-based)
    pub async fn inspect(&self, file: Option<PathBuf>, line: usize, json: bool) -> Result<()> {
        let buffer = read_input(file.as_deref()).await?;
        let lines: Vec<&str> = buffer.lines().collect();

        let Some(doc) = self.document(&lines, reference_index(line)?) else {
            debug!("No declaration found below line {}", line);
            return Ok(());
        };

        if json {
            println!("{}", serde_json::to_string_pretty(&doc.signature).map_err(FlutterdocError::from)?);
        } else {
            print!("{}", describe_signature(&doc.signature));
        }

        Ok(())
    }

    /// Write a default configuration file
    pub async fn init(&self, path: Option<PathBuf>, force: bool) -> Result<()> {
        let target = match path {
            Some(p) if p.is_dir() => p.join(CONFIG_CANDIDATES[1]),
            Some(p) => p,
            None => std::env::current_dir()?.join(CONFIG_CANDIDATES[1]),
        };

        if target.exists() && !force {
            return Err(FlutterdocError::Config(format!(
                "{} already exists (use --force to overwrite)",
                target.display()
            ))
            .into());
        }

        Config::default().save(&target)?;
        info!("✅ Wrote default configuration to {}", target.display());
        Ok(())
    }

    /// What `generate` prints for a given format. `None` means print nothing.
    fn render_output(
        &self,
        buffer: &str,
        doc: Option<&GeneratedDoc>,
        format: OutputFormat,
    ) -> Result<Option<String>> {
        let output = match (format, doc) {
            (OutputFormat::Buffer, Some(doc)) => Some(doc.edit.apply(buffer)?),
            (OutputFormat::Buffer, None) => Some(buffer.to_string()),
            (OutputFormat::Edit, Some(doc)) => {
                let json = serde_json::to_string_pretty(&EditOutput {
                    line: doc.edit.line,
                    text: &doc.edit.text,
                    name: &doc.signature.name,
                })
                .map_err(FlutterdocError::from)?;
                Some(format!("{}\n", json))
            }
            (OutputFormat::Block, Some(doc)) => Some(doc.edit.text.clone()),
            (_, None) => None,
        };

        Ok(output)
    }

    fn notify(&self, doc: &GeneratedDoc) {
        if self.config.output.notify {
            info!("✅ {}", doc.message);
        }
    }
}

/// Convert a 1-based CLI line into the zero-based reference index
fn reference_index(line: usize) -> Result<usize> {
    line.checked_sub(1)
        .ok_or_else(|| FlutterdocError::Config("line numbers start at 1".to_string()).into())
}

async fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => {
            debug!("Reading {}", path.display());
            Ok(tokio::fs::read_to_string(path).await.map_err(FlutterdocError::from)?)
        }
        None => {
            debug!("Reading buffer from stdin");
            let mut buffer = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buffer)
                .await
                .map_err(FlutterdocError::from)?;
            Ok(buffer)
        }
    }
}

fn describe_signature(signature: &Signature) -> String {
    let mut out = format!("name: {}\nreturns: {}\n", signature.name, signature.return_type);
    if signature.parameters.is_empty() {
        out.push_str("parameters: none\n");
    } else {
        out.push_str("parameters:\n");
        for param in &signature.parameters {
            let marker = if param.is_required { " (required)" } else { "" };
            out.push_str(&format!("  - {} {}{}\n", param.param_type, param.name, marker));
        }
    }
    out
}
