//! Stand-in compilers for build tests
//!
//! A fake compiler is a shell script that records its arguments to
//! `compiler-args.txt`, prints canned output and exits with a fixed code.
//! Point `CVTEX_PDFLATEX` at it to keep tests away from a real TeX install.

use std::path::{Path, PathBuf};

/// File the fake compiler writes its arguments to, one per line
pub const ARGS_LOG: &str = "compiler-args.txt";

/// Write an executable script at `dir/name`
///
/// On success (`exit_code == 0`) the script also creates `<jobname>.pdf` in
/// its working directory, taking the job name from `-jobname=<name>`.
#[cfg(unix)]
pub fn fake_compiler(dir: &Path, name: &str, exit_code: i32, stdout: &str) -> PathBuf {
    fake_compiler_with_stderr(dir, name, exit_code, stdout, "")
}

/// Like [`fake_compiler`], additionally printing `stderr` to standard error
#[cfg(unix)]
pub fn fake_compiler_with_stderr(
    dir: &Path,
    name: &str,
    exit_code: i32,
    stdout: &str,
    stderr: &str,
) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    let script = format!(
        r#"#!/bin/sh
: > {args_log}
job=texput
for arg in "$@"; do
  printf '%s\n' "$arg" >> {args_log}
  case "$arg" in
    -jobname=*) job="${{arg#-jobname=}}" ;;
  esac
done
cat <<'CVTEX_EOF'
{stdout}
CVTEX_EOF
cat >&2 <<'CVTEX_EOF'
{stderr}
CVTEX_EOF
if [ {exit_code} -eq 0 ]; then
  : > "$job.pdf"
fi
exit {exit_code}
"#,
        args_log = ARGS_LOG,
        stdout = stdout,
        stderr = stderr,
        exit_code = exit_code,
    );

    std::fs::write(&path, script).expect("Failed to write fake compiler");
    let mut perms = std::fs::metadata(&path)
        .expect("Failed to stat fake compiler")
        .permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).expect("Failed to chmod fake compiler");
    path
}

/// Arguments recorded by the last fake compiler run in `dir`, if any
pub fn recorded_args(dir: &Path) -> Option<Vec<String>> {
    let content = std::fs::read_to_string(dir.join(ARGS_LOG)).ok()?;
    Some(content.lines().map(str::to_string).collect())
}
