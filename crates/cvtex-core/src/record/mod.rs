//! Structured CV data loaded from `data.json`

mod model;

pub use model::{Education, Employment, Logo, Record, SkillGroup, TimelineEntry};

use crate::error::{CvtexError, Result};
use serde_json::Value;
use std::path::Path;

/// Top-level keys every data file must provide
pub const REQUIRED_FIELDS: [&str; 22] = [
    "name_first",
    "name_last",
    "title",
    "github_url",
    "github_label",
    "website_url",
    "website_label",
    "email",
    "headshot",
    "address_line1",
    "address_city",
    "phone",
    "country",
    "dob",
    "linkedin_url",
    "linkedin_label",
    "profile_summary",
    "tech_logos",
    "skills",
    "languages",
    "employment",
    "education",
];

/// Parse the raw JSON document, reporting syntax errors against `path`
pub fn parse_json(path: &Path, content: &str) -> Result<Value> {
    serde_json::from_str(content).map_err(|e| CvtexError::DataParseError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

impl Record {
    /// Build a record from parsed JSON
    ///
    /// # Errors
    ///
    /// - `MissingField` naming the first absent top-level key
    /// - `DataInvalid` for a non-object document, wrong value types, or a
    ///   missing required key inside a list item
    pub fn from_value(value: Value) -> Result<Self> {
        let Some(object) = value.as_object() else {
            return Err(CvtexError::DataInvalid(
                "top-level value must be a JSON object".to_string(),
            ));
        };

        if let Some(missing) = REQUIRED_FIELDS
            .iter()
            .find(|field| !object.contains_key(**field))
        {
            return Err(CvtexError::MissingField((*missing).to_string()));
        }

        serde_json::from_value(value).map_err(|e| CvtexError::DataInvalid(e.to_string()))
    }
}
