//! Token substitution and residue scan

use super::fragments::Fragments;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Anything token-shaped: delimiter, word characters, delimiter
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%%\w+%%").unwrap_or_else(|e| panic!("invalid token pattern: {e}"))
});

/// Result of filling a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substituted {
    pub text: String,
    /// Distinct token-shaped sequences still present, in order of appearance
    pub unresolved: Vec<String>,
}

impl Substituted {
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Replace every occurrence of every token with its fragment
///
/// Tokens are matched literally. Unknown token-shaped text is left in place
/// and listed in [`Substituted::unresolved`].
pub fn substitute(template: &str, fragments: &Fragments) -> Substituted {
    let mut text = template.to_string();
    for (token, value) in fragments.iter() {
        let literal = token.literal();
        if text.contains(&literal) {
            text = text.replace(&literal, value);
        } else {
            tracing::debug!("token {} not present in template", literal);
        }
    }

    let unresolved = unresolved_tokens(&text);
    Substituted { text, unresolved }
}

/// Distinct token-shaped sequences in `text`, first occurrence first
pub fn unresolved_tokens(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    TOKEN_PATTERN
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|token| seen.insert(*token))
        .map(str::to_string)
        .collect()
}
