//! Failure summaries for compiler output
//!
//! pdflatex prints errors as lines starting with `!` in the middle of a long
//! transcript. Only those lines are shown; when there are none the tail of the
//! transcript is shown instead.

/// What to show the user after a failed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureSummary {
    /// Lines starting with the error marker, in order
    Errors(Vec<String>),
    /// Last characters of the output when no error line was found
    Tail(String),
}

/// Summarize a failed run's output
pub fn summarize_failure(output: &str, error_marker: &str, tail_chars: usize) -> FailureSummary {
    let errors: Vec<String> = output
        .lines()
        .filter(|line| line.starts_with(error_marker))
        .map(str::to_string)
        .collect();

    if errors.is_empty() {
        FailureSummary::Tail(tail(output, tail_chars).to_string())
    } else {
        FailureSummary::Errors(errors)
    }
}

/// Last `max_chars` characters of `text`, cut on a char boundary
pub fn tail(text: &str, max_chars: usize) -> &str {
    let count = text.chars().count();
    if count <= max_chars {
        return text;
    }
    let skip = count - max_chars;
    let start = text
        .char_indices()
        .nth(skip)
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    &text[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOG: &str = "This is pdfTeX, Version 3.141592653\n\
        (./cv-filled.tex\n\
        ! Undefined control sequence.\n\
        l.42 \\employmentHistoryEntr\n\
        ! Missing } inserted.\n\
        Output written on cv.pdf\n";

    #[test]
    fn test_error_lines_are_extracted() {
        assert_eq!(
            summarize_failure(LOG, "!", 3000),
            FailureSummary::Errors(vec![
                "! Undefined control sequence.".to_string(),
                "! Missing } inserted.".to_string(),
            ])
        );
    }

    #[test]
    fn test_marker_must_start_the_line() {
        let summary = summarize_failure("warning ! not an error\n", "!", 3000);
        assert_eq!(
            summary,
            FailureSummary::Tail("warning ! not an error\n".to_string())
        );
    }

    #[test]
    fn test_tail_without_error_lines() {
        let output = "a".repeat(10) + "bcd";
        assert_eq!(
            summarize_failure(&output, "!", 3),
            FailureSummary::Tail("bcd".to_string())
        );
    }

    #[test]
    fn test_tail_respects_char_boundaries() {
        assert_eq!(tail("ääöü", 2), "öü");
        assert_eq!(tail("", 5), "");
    }
}
