use serde::{Deserialize, Serialize};

use crate::error::{FlutterdocError, Result};

/// Text to splice into a buffer at column 0 of `line`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEdit {
    /// Zero-based line index
    pub line: usize,
    pub text: String,
}

impl TextEdit {
    pub fn insert(line: usize, text: impl Into<String>) -> Self {
        Self {
            line,
            text: text.into(),
        }
    }

    /// Insert the text in front of `line`. Inserting at the line count appends;
    /// anything beyond that is rejected. The rest of the buffer is left alone.
    pub fn apply(&self, buffer: &str) -> Result<String> {
        let offset = line_offset(buffer, self.line).ok_or_else(|| {
            FlutterdocError::Edit(format!(
                "Insertion line {} is past the end of a {} line buffer",
                self.line + 1,
                buffer.lines().count()
            ))
        })?;

        let mut result = String::with_capacity(buffer.len() + self.text.len() + 1);
        result.push_str(&buffer[..offset]);
        if offset == buffer.len() && !buffer.is_empty() && !buffer.ends_with('\n') {
            result.push('\n');
        }
        result.push_str(&self.text);
        result.push_str(&buffer[offset..]);

        Ok(result)
    }
}

/// Byte offset where `line` starts, or the end of the buffer when `line` is
/// exactly one past the last line.
fn line_offset(buffer: &str, line: usize) -> Option<usize> {
    if line == 0 {
        return Some(0);
    }

    let mut seen = 0;
    for (idx, _) in buffer.match_indices('\n') {
        seen += 1;
        if seen == line {
            return Some(idx + 1);
        }
    }

    // Unterminated last line counts as a line too
    let line_count = buffer.lines().count();
    (line == line_count).then_some(buffer.len())
}
