//! Lexer for declaration text.
//!
//! Declarations are never parsed into a tree. The decomposer only needs to
//! know where identifiers, parentheses, braces and commas sit, so the text is
//! cut into flat tokens that keep their byte spans into the original string.

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Run of ASCII letters, digits and underscores
    Word,
    Whitespace,
    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,
    Comma,
    /// Any other single character (`<`, `?`, `@`, `=` ...)
    Symbol,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: Range<usize>,
}

/// Split `source` into tokens. Joining every token's text gives back `source`.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut chars = source.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        let kind = classify(c);
        let mut end = start + c.len_utf8();

        if matches!(kind, TokenKind::Word | TokenKind::Whitespace) {
            while let Some(&(idx, next)) = chars.peek() {
                if classify(next) != kind {
                    break;
                }
                end = idx + next.len_utf8();
                chars.next();
            }
        }

        tokens.push(Token {
            kind,
            text: &source[start..end],
            span: start..end,
        });
    }

    tokens
}

fn classify(c: char) -> TokenKind {
    match c {
        '(' => TokenKind::OpenParen,
        ')' => TokenKind::CloseParen,
        '{' => TokenKind::OpenBrace,
        '}' => TokenKind::CloseBrace,
        ',' => TokenKind::Comma,
        c if c.is_ascii_alphanumeric() || c == '_' => TokenKind::Word,
        c if c.is_whitespace() => TokenKind::Whitespace,
        _ => TokenKind::Symbol,
    }
}
