//! Run context for the build command

use anyhow::Result;
use cvtex_core::config::Config;
use std::env;
use std::path::PathBuf;

/// Project directory and its configuration
pub struct Context {
    pub root: PathBuf,
    pub config: Config,
}

impl Context {
    /// Use the current directory as the project root
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be read or
    /// `cvtex.toml` exists but cannot be parsed
    pub fn new() -> Result<Self> {
        let root = env::current_dir()?;
        let config = Config::load_or_default(&root)?;

        Ok(Self { root, config })
    }
}
