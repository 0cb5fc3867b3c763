//! Build configuration
//!
//! Every setting has a default, so a project without `cvtex.toml` builds with
//! `data.json` + `cv.tex` → `cv-filled.tex` → `cv.pdf`.

pub mod consts;
pub mod model;

pub use model::{CompilerConfig, Config, FilesConfig, OutputConfig};
