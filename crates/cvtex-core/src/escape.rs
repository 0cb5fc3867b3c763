//! LaTeX escaping for display text
//!
//! Each reserved character is mapped independently in a single pass, so the
//! backslashes introduced by one mapping are never revisited by another.

use std::borrow::Cow;

/// Escape sequence for a LaTeX reserved character, `None` for plain text
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '&' => Some(r"\&"),
        '%' => Some(r"\%"),
        '$' => Some(r"\$"),
        '#' => Some(r"\#"),
        '_' => Some(r"\_"),
        '{' => Some(r"\{"),
        '}' => Some(r"\}"),
        '~' => Some(r"\textasciitilde{}"),
        '^' => Some(r"\^{}"),
        '\\' => Some(r"\textbackslash{}"),
        _ => None,
    }
}

/// Escape a plain string for safe use in LaTeX
///
/// Borrows the input unchanged when it contains no reserved character.
pub fn escape_latex(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find(|c: char| escape_char(c).is_some()) else {
        return Cow::Borrowed(text);
    };

    let mut out = String::with_capacity(text.len() + 16);
    out.push_str(&text[..first]);
    for c in text[first..].chars() {
        match escape_char(c) {
            Some(seq) => out.push_str(seq),
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}
