//! Tokenizer for device command lines.
//!
//! Lines are split on runs of whitespace. The first token is the command
//! keyword; keyword tokens are compared case-insensitively while data tokens
//! (hostnames, addresses, descriptions) are kept verbatim.

/// A non-empty, whitespace-split command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    tokens: Vec<String>,
}

impl CommandLine {
    /// Returns all tokens, verbatim.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Returns the command keyword, lowercased.
    pub fn keyword(&self) -> String {
        self.tokens[0].to_ascii_lowercase()
    }

    /// Returns the token at `index`, verbatim.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// Returns true if the leading tokens match `path`, ignoring case.
    pub fn starts_with(&self, path: &[&str]) -> bool {
        path.len() <= self.tokens.len()
            && path
                .iter()
                .zip(&self.tokens)
                .all(|(expected, token)| token.eq_ignore_ascii_case(expected))
    }

    /// Returns the tokens after the first `skip`, verbatim.
    pub fn args(&self, skip: usize) -> Vec<&str> {
        self.tokens.iter().skip(skip).map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Tokenizes a raw input line.
///
/// Returns `None` for empty or whitespace-only input.
pub fn tokenize(input: &str) -> Option<CommandLine> {
    let tokens: Vec<String> = input.split_whitespace().map(String::from).collect();
    if tokens.is_empty() {
        None
    } else {
        Some(CommandLine { tokens })
    }
}
