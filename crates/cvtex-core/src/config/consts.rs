//! Constants shared across the workspace

/// Optional project configuration file, looked up in the working directory
pub const CONFIG_FILE: &str = "cvtex.toml";

/// Environment variable overriding the compiler binary
pub const COMPILER_ENV_VAR: &str = "CVTEX_PDFLATEX";

/// Environment variable holding the tracing filter
pub const LOG_ENV_VAR: &str = "CVTEX_LOG";

/// Default file names
pub mod files {
    pub const DATA: &str = "data.json";
    pub const DATA_EXAMPLE: &str = "data.example.json";
    pub const TEMPLATE: &str = "cv.tex";
    pub const FILLED: &str = "cv-filled.tex";
}

/// Default compiler invocation
pub mod compiler {
    pub const PROGRAM: &str = "pdflatex";
    pub const JOB_NAME: &str = "cv";

    /// Lines of compiler output starting with this marker are errors
    pub const ERROR_MARKER: &str = "!";

    /// Characters of output shown when no error line is found
    pub const TAIL_CHARS: usize = 3000;
}
