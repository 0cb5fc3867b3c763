//! Build command - fill the template and compile it to PDF

use crate::context::Context;
use anyhow::Result;
use colored::Colorize;
use cvtex_core::CvtexError;
use cvtex_core::build::fill;
use cvtex_latex::{CompileOptions, FailureSummary, compile, summarize_failure, tail};

/// Fill the template and, unless `no_pdf`, compile it
///
/// The filled template is written before compiling and left in place when
/// compilation fails.
pub fn run(no_pdf: bool) -> Result<()> {
    let ctx = Context::new()?;
    let config = &ctx.config;

    // Step 1: Fill template
    tracing::debug!("filling template in {}", ctx.root.display());
    let outcome = fill(&ctx.root, config)?;

    if !outcome.is_complete() {
        eprintln!(
            "{} unresolved tokens: {}",
            "warning:".yellow().bold(),
            outcome.unresolved.join(", ")
        );
    }

    println!(
        "{} Generated {}",
        "✓".green().bold(),
        config.files.filled.display()
    );

    if no_pdf {
        tracing::debug!("--no-pdf given, skipping {}", config.compiler.program);
        return Ok(());
    }

    // Step 2: Compile
    let result = compile(&CompileOptions {
        working_dir: ctx.root.clone(),
        compiler: config.compiler.clone(),
        job_name: config.output.job_name.clone(),
        source: config.files.filled.clone(),
    })?;

    // Step 3: Report
    if !result.success() {
        let program = &config.compiler.program;
        eprintln!("{} {} failed", "✗".red().bold(), program);

        match summarize_failure(
            &result.stdout,
            &config.compiler.error_marker,
            config.compiler.tail_chars,
        ) {
            FailureSummary::Errors(lines) => {
                eprintln!("{} errors:", program);
                for line in lines {
                    eprintln!("  {}", line);
                }
            }
            FailureSummary::Tail(stdout_tail) => {
                eprintln!("{}", stdout_tail);
                // Some failures (missing fonts, bad binaries) only reach stderr
                let stderr = result.stderr.trim();
                if !stderr.is_empty() {
                    eprintln!("{}", tail(stderr, config.compiler.tail_chars));
                }
            }
        }

        return Err(CvtexError::CompileFailed {
            program: program.clone(),
            exit_code: result.exit_code,
        }
        .into());
    }

    println!(
        "{} Output: {} ({}ms)",
        "✓".green().bold(),
        config.output.artifact_name(),
        result.duration_ms
    );

    Ok(())
}
