use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CvtexError {
    // Input errors
    #[error(
        "DATA_NOT_FOUND: {} not found.\nCopy {} to {} and fill in your details.",
        .path.display(),
        .example.display(),
        .path.display()
    )]
    DataNotFound { path: PathBuf, example: PathBuf },

    #[error("DATA_PARSE_ERROR: failed to parse {}: {reason}", .path.display())]
    DataParseError { path: PathBuf, reason: String },

    #[error("DATA_INVALID: {0}")]
    DataInvalid(String),

    #[error("MISSING_FIELD: required field '{0}' is missing from the data file")]
    MissingField(String),

    // Template errors
    #[error("TEMPLATE_NOT_FOUND: template '{}' not found", .0.display())]
    TemplateNotFound(PathBuf),

    // Config errors
    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    // Compiler errors
    #[error("COMPILER_NOT_FOUND: '{program}' not found (set {env_var} or add it to PATH)")]
    CompilerNotFound { program: String, env_var: String },

    #[error("COMPILER_EXEC_FAILED: {0}")]
    CompilerExecFailed(String),

    #[error("COMPILE_FAILED: {program} exited with code {exit_code}")]
    CompileFailed { program: String, exit_code: i32 },

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<toml::de::Error> for CvtexError {
    fn from(err: toml::de::Error) -> Self {
        CvtexError::ConfigParseError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CvtexError>;
