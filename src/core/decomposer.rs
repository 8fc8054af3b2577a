use serde::{Deserialize, Serialize};

use super::tokenizer::{tokenize, Token, TokenKind};

/// Keyword marking a named parameter that callers must supply
pub const REQUIRED_KEYWORD: &str = "required";

/// One positional entry of a parameter list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
    pub is_required: bool,
}

/// Name, return type and parameters pulled out of a declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signature {
    pub name: String,
    pub return_type: String,
    pub parameters: Vec<Parameter>,
}

impl Parameter {
    /// Read a single comma-separated parameter token.
    ///
    /// `required <type> <name>` when the word `required` appears anywhere in
    /// the token, `<type> <name>` otherwise. Missing words become empty strings.
    pub fn from_token(token: &str) -> Self {
        let words: Vec<&str> = token.split_whitespace().collect();
        let word = |i: usize| words.get(i).map(|w| w.to_string()).unwrap_or_default();

        if words.contains(&REQUIRED_KEYWORD) {
            Self {
                param_type: word(1),
                name: word(2),
                is_required: true,
            }
        } else {
            Self {
                param_type: word(0),
                name: word(1),
                is_required: false,
            }
        }
    }
}

/// Break declaration text into a [`Signature`]. Never fails; anything that
/// cannot be found comes back empty.
pub fn decompose(decl_text: &str) -> Signature {
    let name = extract_name(decl_text);
    let return_type = extract_return_type(decl_text, &name);
    let parameters = extract_parameters(decl_text);

    Signature {
        name,
        return_type,
        parameters,
    }
}

/// First identifier that is directly followed (whitespace aside) by `(`.
pub fn extract_name(decl_text: &str) -> String {
    let tokens = tokenize(decl_text);

    for (i, token) in tokens.iter().enumerate() {
        if token.kind != TokenKind::Word {
            continue;
        }

        let next = tokens[i + 1..]
            .iter()
            .find(|t| t.kind != TokenKind::Whitespace);

        if matches!(next, Some(t) if t.kind == TokenKind::OpenParen) {
            return token.text.to_string();
        }
    }

    String::new()
}

/// Everything before the first occurrence of `name`, trimmed.
pub fn extract_return_type(decl_text: &str, name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }

    decl_text
        .find(name)
        .map(|idx| decl_text[..idx].trim().to_string())
        .unwrap_or_default()
}

/// Parameters of the first non-empty parenthesised group, in source order.
pub fn extract_parameters(decl_text: &str) -> Vec<Parameter> {
    let Some(group) = parameter_group(&tokenize(decl_text)) else {
        return Vec::new();
    };

    split_parameter_tokens(&decl_text[group])
        .iter()
        .map(|token| Parameter::from_token(token))
        .collect()
}

/// Byte range of the first non-empty `( ... )` interior.
///
/// An empty `()` is skipped and the search moves on to the next `(`. The
/// interior ends at the first `)` and may itself contain `(`.
fn parameter_group(tokens: &[Token<'_>]) -> Option<std::ops::Range<usize>> {
    for (i, open) in tokens.iter().enumerate() {
        if open.kind != TokenKind::OpenParen {
            continue;
        }

        match tokens.get(i + 1) {
            None => return None,
            Some(next) if next.kind == TokenKind::CloseParen => continue,
            Some(_) => {}
        }

        // No `)` after this point means no later `(` can close either
        let close = tokens[i + 1..]
            .iter()
            .find(|t| t.kind == TokenKind::CloseParen)?;

        return Some(open.span.end..close.span.start);
    }

    None
}

/// Drop brace grouping and cut on commas, discarding blank entries.
fn split_parameter_tokens(group: &str) -> Vec<String> {
    let mut params = Vec::new();
    let mut current = String::new();

    for token in tokenize(group) {
        match token.kind {
            TokenKind::OpenBrace | TokenKind::CloseBrace => {}
            TokenKind::Comma => params.push(std::mem::take(&mut current)),
            _ => current.push_str(token.text),
        }
    }
    params.push(current);

    params
        .into_iter()
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}
