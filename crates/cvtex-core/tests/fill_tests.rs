//! Integration tests for the fill pipeline

use cvtex_core::build::fill;
use cvtex_core::config::Config;
use cvtex_core::template::Token;
use cvtex_core::CvtexError;
use cvtex_testkit::fixtures::{sample_data, write_data, write_project, write_template};
use cvtex_testkit::temp_dir_in_workspace;
use std::fs;

#[test]
fn test_fill_writes_complete_output() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();
    write_project(root);

    let outcome = fill(root, &Config::default()).unwrap();

    assert_eq!(outcome.filled_path, root.join("cv-filled.tex"));
    assert!(outcome.is_complete());

    let filled = fs::read_to_string(&outcome.filled_path).unwrap();
    for token in Token::ALL {
        assert!(!filled.contains(&token.literal()), "{token} left in output");
    }
}

#[test]
fn test_data_is_checked_before_template() {
    let temp = temp_dir_in_workspace();

    let err = fill(temp.path(), &Config::default()).unwrap_err();
    assert!(matches!(err, CvtexError::DataNotFound { .. }));
}

#[test]
fn test_missing_template() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();
    write_data(root, &sample_data());

    let err = fill(root, &Config::default()).unwrap_err();
    assert!(matches!(err, CvtexError::TemplateNotFound(_)));
}

#[test]
fn test_missing_field_writes_nothing() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();
    write_project(root);

    let mut data = sample_data();
    data.as_object_mut().unwrap().remove("title");
    write_data(root, &data);

    let err = fill(root, &Config::default()).unwrap_err();
    assert!(matches!(err, CvtexError::MissingField(ref f) if f == "title"));
    assert!(!root.join("cv-filled.tex").exists());
}

#[test]
fn test_unresolved_tokens_are_returned() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();
    write_project(root);
    write_template(root, "%%TITLE%% %%BOGUS%% %%NOPE%% %%BOGUS%%");

    let outcome = fill(root, &Config::default()).unwrap();
    assert!(!outcome.is_complete());
    assert_eq!(outcome.unresolved, vec!["%%BOGUS%%", "%%NOPE%%"]);

    let filled = fs::read_to_string(&outcome.filled_path).unwrap();
    assert_eq!(
        filled,
        r"Senior Software Engineer \& Team Lead %%BOGUS%% %%NOPE%% %%BOGUS%%"
    );
}

#[test]
fn test_scalar_types_are_coerced() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();
    write_template(root, "%%PHONE%%/%%DOB%%");

    let mut data = sample_data();
    data["phone"] = serde_json::json!(5551234);
    data["dob"] = serde_json::json!(1990);
    write_data(root, &data);

    let outcome = fill(root, &Config::default()).unwrap();
    assert_eq!(fs::read_to_string(outcome.filled_path).unwrap(), "5551234/1990");
}

#[test]
fn test_null_scalar_renders_empty() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();
    write_template(root, "[%%DOB%%][%%COUNTRY%%]");

    let mut data = sample_data();
    data["dob"] = serde_json::Value::Null;
    write_data(root, &data);

    let outcome = fill(root, &Config::default()).unwrap();
    assert_eq!(
        fs::read_to_string(outcome.filled_path).unwrap(),
        "[][Germany]"
    );
}
