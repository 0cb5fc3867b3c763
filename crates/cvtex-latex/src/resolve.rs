use cvtex_core::config::consts::COMPILER_ENV_VAR;
use cvtex_core::CvtexError;
use std::path::PathBuf;

/// Locate the compiler binary
///
/// `CVTEX_PDFLATEX` wins when set and non-empty; otherwise `program` is looked
/// up on `PATH`. A relative override is resolved against the current
/// directory.
pub fn resolve_compiler(program: &str) -> crate::Result<PathBuf> {
    if let Some(path) = std::env::var_os(COMPILER_ENV_VAR).filter(|v| !v.is_empty()) {
        // The compiler runs in the project directory, not ours
        let path = std::path::absolute(PathBuf::from(path))?;
        tracing::debug!("using {} from {}", path.display(), COMPILER_ENV_VAR);
        if !path.exists() {
            return Err(CvtexError::CompilerNotFound {
                program: path.display().to_string(),
                env_var: COMPILER_ENV_VAR.to_string(),
            });
        }
        return Ok(path);
    }

    which::which(program).map_err(|e| {
        tracing::debug!("which({}) failed: {}", program, e);
        CvtexError::CompilerNotFound {
            program: program.to_string(),
            env_var: COMPILER_ENV_VAR.to_string(),
        }
    })
}
