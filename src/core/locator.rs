use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::LocatorConfig;

/// Declaration text found below a reference line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocatedDeclaration {
    /// Every scanned line concatenated with no separator
    pub text: String,

    /// Zero-based line the comment goes above
    pub insert_at: usize,

    /// Zero-based line whose trimmed text ended in a block opener
    pub end_line: usize,
}

/// Scans forward from a reference line for the end of a declaration
#[derive(Debug, Clone)]
pub struct DeclarationLocator {
    block_openers: Vec<String>,
    max_scan_lines: Option<usize>,
}

impl DeclarationLocator {
    pub fn new(config: &LocatorConfig) -> Self {
        Self {
            block_openers: config
                .block_openers
                .iter()
                .filter(|m| !m.trim().is_empty())
                .cloned()
                .collect(),
            max_scan_lines: config.max_scan_lines,
        }
    }

    /// Start at `start_line + 1` and accumulate lines until one ends in a
    /// block opener. The insertion point is always `start_line + 1`, however
    /// many lines the declaration spans.
    pub fn locate<S: AsRef<str>>(&self, lines: &[S], start_line: usize) -> Option<LocatedDeclaration> {
        let first = start_line.checked_add(1)?;
        let limit = self.max_scan_lines.unwrap_or(usize::MAX);
        let mut text = String::new();

        for (index, line) in lines.iter().enumerate().skip(first).take(limit) {
            let line = line.as_ref();
            text.push_str(line);

            if self.is_declaration_end(line) {
                debug!("Declaration ends on line {} ({} lines scanned)", index, index - first + 1);
                return Some(LocatedDeclaration {
                    text,
                    insert_at: first,
                    end_line: index,
                });
            }
        }

        debug!("No block opener found below line {}", start_line);
        None
    }

    fn is_declaration_end(&self, line: &str) -> bool {
        let trimmed = line.trim();
        self.block_openers.iter().any(|marker| trimmed.ends_with(marker.as_str()))
    }
}

impl Default for DeclarationLocator {
    fn default() -> Self {
        Self::new(&LocatorConfig::default())
    }
}
