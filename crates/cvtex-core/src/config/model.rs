use super::consts::{compiler, files, CONFIG_FILE};
use crate::error::{CvtexError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// cvtex.toml schema
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub files: FilesConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub compiler: CompilerConfig,
}

/// Input and output file names, relative to the project root
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilesConfig {
    #[serde(default = "default_data")]
    pub data: PathBuf,
    #[serde(default = "default_data_example")]
    pub data_example: PathBuf,
    #[serde(default = "default_template")]
    pub template: PathBuf,
    #[serde(default = "default_filled")]
    pub filled: PathBuf,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            data: default_data(),
            data_example: default_data_example(),
            template: default_template(),
            filled: default_filled(),
        }
    }
}

fn default_data() -> PathBuf {
    PathBuf::from(files::DATA)
}

fn default_data_example() -> PathBuf {
    PathBuf::from(files::DATA_EXAMPLE)
}

fn default_template() -> PathBuf {
    PathBuf::from(files::TEMPLATE)
}

fn default_filled() -> PathBuf {
    PathBuf::from(files::FILLED)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Passed as `-jobname`; the artifact is `<job_name>.pdf`
    #[serde(default = "default_job_name")]
    pub job_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            job_name: default_job_name(),
        }
    }
}

impl OutputConfig {
    pub fn artifact_name(&self) -> String {
        format!("{}.pdf", self.job_name)
    }
}

fn default_job_name() -> String {
    compiler::JOB_NAME.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompilerConfig {
    #[serde(default = "default_program")]
    pub program: String,
    /// Arguments placed before `-jobname` and the filled template
    #[serde(default = "default_args")]
    pub args: Vec<String>,
    #[serde(default = "default_error_marker")]
    pub error_marker: String,
    #[serde(default = "default_tail_chars")]
    pub tail_chars: usize,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_args(),
            error_marker: default_error_marker(),
            tail_chars: default_tail_chars(),
        }
    }
}

fn default_program() -> String {
    compiler::PROGRAM.to_string()
}

fn default_args() -> Vec<String> {
    vec!["-interaction=nonstopmode".to_string()]
}

fn default_error_marker() -> String {
    compiler::ERROR_MARKER.to_string()
}

fn default_tail_chars() -> usize {
    compiler::TAIL_CHARS
}

impl Config {
    /// Read cvtex.toml
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| CvtexError::ConfigParseError(e.to_string()))?;

        Ok(toml::from_str(&content)?)
    }

    /// Read `<root>/cvtex.toml` if present, otherwise fall back to defaults
    pub fn load_or_default(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            tracing::debug!("no {} in {}, using defaults", CONFIG_FILE, root.display());
            return Ok(Self::default());
        }

        tracing::debug!("loading config from {}", path.display());
        Self::from_file(&path)
    }
}
