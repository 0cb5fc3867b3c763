use crate::resolve::resolve_compiler;
use cvtex_core::config::CompilerConfig;
use cvtex_core::CvtexError;
use std::path::PathBuf;
use std::process::Command;
use std::time::Instant;

/// Options for one compiler run
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Directory the compiler runs in; the artifact lands here
    pub working_dir: PathBuf,
    pub compiler: CompilerConfig,
    pub job_name: String,
    /// Filled template, relative to `working_dir` or absolute
    pub source: PathBuf,
}

impl CompileOptions {
    /// Arguments after the program name: configured args, `-jobname=<job>`, source
    pub fn args(&self) -> Vec<String> {
        let mut args = self.compiler.args.clone();
        args.push(format!("-jobname={}", self.job_name));
        args.push(self.source.display().to_string());
        args
    }
}

/// Result of a compiler run
#[derive(Debug, Clone)]
pub struct ExecResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub duration_ms: u64,
}

impl ExecResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Run the compiler to completion, capturing stdout and stderr
///
/// A non-zero exit is reported in [`ExecResult::exit_code`], not as an error.
pub fn compile(options: &CompileOptions) -> crate::Result<ExecResult> {
    let program = resolve_compiler(&options.compiler.program)?;
    let args = options.args();

    tracing::debug!(
        "running {} {} in {}",
        program.display(),
        args.join(" "),
        options.working_dir.display()
    );

    let start = Instant::now();
    let output = Command::new(&program)
        .args(&args)
        .current_dir(&options.working_dir)
        .output()
        .map_err(|e| {
            CvtexError::CompilerExecFailed(format!("failed to run {}: {}", program.display(), e))
        })?;
    let duration_ms = start.elapsed().as_millis() as u64;

    // Killed by a signal: no code
    let exit_code = output.status.code().unwrap_or(-1);
    tracing::debug!("{} exited with {} after {}ms", program.display(), exit_code, duration_ms);

    Ok(ExecResult {
        exit_code,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        duration_ms,
    })
}
