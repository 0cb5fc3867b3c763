//! LaTeX compiler resolution and execution for cvtex.
//!
//! # Architecture
//!
//! - [`resolve`]: locate the compiler binary
//! - [`exec`]: run it with captured output
//! - [`diagnostics`]: reduce a failed run's log to what the user needs
//!
//! # Resolution Flow
//!
//! ```text
//! resolve_compiler()
//!     ↓
//! 1. CVTEX_PDFLATEX set? → use that path
//!     ↓ (unset)
//! 2. which::which(program)
//!     ↓ (not found)
//! 3. CompilerNotFound
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use cvtex_latex::{compile, CompileOptions};
//! use cvtex_core::config::CompilerConfig;
//! use std::path::PathBuf;
//!
//! # fn main() -> cvtex_core::Result<()> {
//! let result = compile(&CompileOptions {
//!     working_dir: PathBuf::from("."),
//!     compiler: CompilerConfig::default(),
//!     job_name: "cv".to_string(),
//!     source: PathBuf::from("cv-filled.tex"),
//! })?;
//! println!("Exit code: {}", result.exit_code);
//! # Ok(())
//! # }
//! ```

// Core modules
pub mod diagnostics;
pub mod exec;
pub mod resolve;

// Re-export commonly used types
pub use diagnostics::{FailureSummary, summarize_failure, tail};
pub use exec::{compile, CompileOptions, ExecResult};
pub use resolve::resolve_compiler;

// Type alias for convenience
pub type Result<T> = cvtex_core::Result<T>;
