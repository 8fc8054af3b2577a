mod engine;
mod locator;
mod tokenizer;
mod decomposer;
mod renderer;
mod edit;

pub use locator::{DeclarationLocator, LocatedDeclaration};
pub use decomposer::{decompose, Signature};
pub use renderer::CommentRenderer;
pub use edit::TextEdit;

// Export the main engine
pub use engine::Engine;
