//! Template module - literal token substitution
//!
//! Templates are plain LaTeX files carrying `%%UPPER_SNAKE%%` tokens. Each known
//! token is replaced everywhere it occurs; anything token-shaped that is left
//! over afterwards is reported back to the caller, never treated as an error.
//!
//! ## Invariants owned by the template author
//!
//! - No token's literal text is a substring of another's
//! - Rendered fragments never contain token-shaped text

pub mod engine;
pub mod fragments;
pub mod token;

pub use engine::{substitute, unresolved_tokens, Substituted};
pub use fragments::Fragments;
pub use token::Token;
