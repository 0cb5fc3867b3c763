//! Fill pipeline - data file + template → filled LaTeX source
//!
//! Stages run in order and the first failure aborts the run. The filled file
//! is the last thing written, so a data or template error leaves no output.

use crate::config::Config;
use crate::error::{CvtexError, Result};
use crate::record::{self, Record};
use crate::template::{substitute, Fragments};
use std::fs;
use std::path::{Path, PathBuf};

/// What a successful fill produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillOutcome {
    /// Absolute path of the written file
    pub filled_path: PathBuf,
    /// Token-shaped text left in the output
    pub unresolved: Vec<String>,
}

impl FillOutcome {
    /// Whether every token in the output was resolved
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Read the record and template under `root` and write the filled template
///
/// # Errors
///
/// - `DataNotFound` if the data file is absent
/// - `DataParseError` if it is not valid JSON
/// - `TemplateNotFound` if the template is absent
/// - `MissingField` / `DataInvalid` if the record is incomplete
/// - `IoError` on read or write failure
pub fn fill(root: &Path, config: &Config) -> Result<FillOutcome> {
    let files = &config.files;

    let data_path = root.join(&files.data);
    if !data_path.exists() {
        return Err(CvtexError::DataNotFound {
            path: files.data.clone(),
            example: files.data_example.clone(),
        });
    }

    tracing::debug!("reading data from {}", data_path.display());
    let content = fs::read_to_string(&data_path)?;
    let value = record::parse_json(&files.data, &content)?;

    let template_path = root.join(&files.template);
    if !template_path.exists() {
        return Err(CvtexError::TemplateNotFound(files.template.clone()));
    }

    tracing::debug!("reading template from {}", template_path.display());
    let template = fs::read_to_string(&template_path)?;

    let record = Record::from_value(value)?;
    let fragments = Fragments::from_record(&record);
    let substituted = substitute(&template, &fragments);
    if !substituted.is_complete() {
        tracing::debug!("unresolved after substitution: {:?}", substituted.unresolved);
    }

    let filled_path = root.join(&files.filled);
    fs::write(&filled_path, &substituted.text)?;
    tracing::debug!(
        "wrote {} ({} bytes)",
        filled_path.display(),
        substituted.text.len()
    );

    Ok(FillOutcome {
        filled_path,
        unresolved: substituted.unresolved,
    })
}
