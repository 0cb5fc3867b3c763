//! Sample CV data and template
//!
//! The template contains every token exactly once, so a fill with the sample
//! data leaves nothing unresolved.

use serde_json::Value;
use std::path::Path;

/// Complete `data.json` exercising every field, including reserved characters
pub const SAMPLE_DATA_JSON: &str = include_str!("../fixtures/data.json");

/// LaTeX template carrying all 22 tokens once each
pub const SAMPLE_TEMPLATE: &str = include_str!("../fixtures/cv.tex");

/// Parsed [`SAMPLE_DATA_JSON`], convenient for removing or editing fields
pub fn sample_data() -> Value {
    serde_json::from_str(SAMPLE_DATA_JSON).expect("fixture data.json is valid JSON")
}

/// Write `data.json` and `cv.tex` into `root`
pub fn write_project(root: &Path) {
    write_data(root, &sample_data());
    write_template(root, SAMPLE_TEMPLATE);
}

pub fn write_data(root: &Path, data: &Value) {
    let content = serde_json::to_string_pretty(data).expect("Failed to serialize data");
    std::fs::write(root.join("data.json"), content).expect("Failed to write data.json");
}

pub fn write_template(root: &Path, template: &str) {
    std::fs::write(root.join("cv.tex"), template).expect("Failed to write cv.tex");
}
