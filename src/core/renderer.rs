use super::decomposer::Signature;

/// Prefix carried by every generated line
pub const COMMENT_PREFIX: &str = "///";

/// Renders a [`Signature`] as a Dart `///` documentation block.
///
/// The layout is fixed: a summary line, one `@param` bullet per parameter in
/// declaration order (each followed by an empty `///` line), then a single
/// `@returns` bullet.
#[derive(Debug, Default, Clone, Copy)]
pub struct CommentRenderer;

impl CommentRenderer {
    pub fn new() -> Self {
        Self
    }

    /// The comment block without a trailing newline.
    pub fn render(&self, signature: &Signature) -> String {
        let mut lines = Vec::with_capacity(signature.parameters.len() + 2);
        lines.push(format!("{} Documentation for {}", COMMENT_PREFIX, signature.name));

        for param in &signature.parameters {
            lines.push(format!(
                " > * _`@param: [{}]`_ - {}\n{}",
                param.param_type, param.name, COMMENT_PREFIX
            ));
        }

        lines.push(format!(" > _`@returns: [{}]`_", signature.return_type));

        lines.join(&format!("\n{}", COMMENT_PREFIX))
    }

    /// The text spliced into the buffer: the block plus one blank line.
    pub fn render_insertion(&self, signature: &Signature) -> String {
        format!("{}\n\n", self.render(signature))
    }

    pub fn status_message(&self, name: &str) -> String {
        format!("Comment documentation for {} generated successfully", name)
    }
}
