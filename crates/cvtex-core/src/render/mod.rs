//! Block renderers
//!
//! Each renderer turns one section of the record into a LaTeX fragment whose
//! continuation lines are already indented for its place in the template.

use crate::escape::escape_latex;
use crate::record::{Logo, SkillGroup, TimelineEntry};

/// Separator between logos, at the indentation of the logo strip
const LOGO_SEPARATOR: &str = "\n    ";

/// Separator between lines inside the skills/languages columns
const COLUMN_SEPARATOR: &str = "\n        ";

/// Separator between timeline entries (one blank line)
const ENTRY_SEPARATOR: &str = "\n\n    ";

/// Paragraph break inside a timeline description
const PARAGRAPH_BREAK: &str = "\n\n";
const LINE_BREAK: &str = "\n";
const PARAGRAPH_SPACING: &str = r"\vspace{4pt} ";

/// `\includegraphics` for each logo; file and height are layout data and stay raw
pub fn tech_logos(logos: &[Logo]) -> String {
    logos
        .iter()
        .map(|logo| {
            format!(
                r"\includegraphics[height={}]{{{}}}\hspace{{10pt}}%",
                logo.height, logo.file
            )
        })
        .collect::<Vec<_>>()
        .join(LOGO_SEPARATOR)
}

/// Bold category label followed by a nested list of skills, per group
pub fn skills(groups: &[SkillGroup]) -> String {
    let mut lines = Vec::new();
    for group in groups {
        lines.push(format!(r"\item \textbf{{{}}}", escape_latex(&group.category)));
        lines.push(
            r"      \begin{itemize}[leftmargin=8pt, label={}, itemsep=1pt, topsep=1pt]".to_string(),
        );
        for item in &group.items {
            lines.push(format!(r"          \skillitem{{{}}}", escape_latex(item)));
        }
        lines.push(r"      \end{itemize}".to_string());
    }
    lines.join(COLUMN_SEPARATOR)
}

pub fn languages(languages: &[String]) -> String {
    languages
        .iter()
        .map(|lang| format!(r"\skillitem{{{}}}", escape_latex(lang)))
        .collect::<Vec<_>>()
        .join(COLUMN_SEPARATOR)
}

/// Render a description, turning blank-line breaks into vertical spacing
///
/// Escaping runs first; newlines are not reserved characters, so the break
/// markers reach the replacement untouched.
fn description(text: &str) -> String {
    escape_latex(text)
        .replace(PARAGRAPH_BREAK, PARAGRAPH_SPACING)
        .replace(LINE_BREAK, " ")
}

/// `\employmentHistoryEntry{title}{subtitle}{period}{description}`
pub fn timeline_entry(entry: TimelineEntry<'_>) -> String {
    format!(
        r"\employmentHistoryEntry{{{}}}{{{}}}{{{}}}{{{}}}",
        escape_latex(entry.title),
        escape_latex(entry.subtitle),
        escape_latex(entry.period),
        description(entry.description),
    )
}

/// Render a list of entries separated by a blank line
pub fn timeline<'a>(entries: impl IntoIterator<Item = TimelineEntry<'a>>) -> String {
    entries
        .into_iter()
        .map(timeline_entry)
        .collect::<Vec<_>>()
        .join(ENTRY_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry<'a>(description: &'a str) -> TimelineEntry<'a> {
        TimelineEntry {
            title: "Lead R&D Engineer",
            subtitle: "Acme_Corp",
            period: "2020 -- 2024",
            description,
        }
    }

    #[test]
    fn test_tech_logos_are_not_escaped() {
        let logos = vec![
            Logo {
                file: "logos/rust_lang.png".to_string(),
                height: "14pt".to_string(),
            },
            Logo {
                file: "logos/go.png".to_string(),
                height: "12pt".to_string(),
            },
        ];
        assert_eq!(
            tech_logos(&logos),
            "\\includegraphics[height=14pt]{logos/rust_lang.png}\\hspace{10pt}%\n    \
             \\includegraphics[height=12pt]{logos/go.png}\\hspace{10pt}%"
        );
    }

    #[test]
    fn test_tech_logos_empty() {
        assert_eq!(tech_logos(&[]), "");
    }

    #[test]
    fn test_skills_block() {
        let groups = vec![SkillGroup {
            category: "C & C++".to_string(),
            items: vec!["CMake".to_string(), "C#".to_string()],
        }];
        let expected = [
            r"\item \textbf{C \& C++}",
            r"      \begin{itemize}[leftmargin=8pt, label={}, itemsep=1pt, topsep=1pt]",
            r"          \skillitem{CMake}",
            r"          \skillitem{C\#}",
            r"      \end{itemize}",
        ]
        .join("\n        ");
        assert_eq!(skills(&groups), expected);
    }

    #[test]
    fn test_languages_block() {
        let langs = vec!["English (native)".to_string(), "German ~B2".to_string()];
        assert_eq!(
            languages(&langs),
            "\\skillitem{English (native)}\n        \\skillitem{German \\textasciitilde{}B2}"
        );
    }

    #[test]
    fn test_timeline_entry_escapes_labels() {
        assert_eq!(
            timeline_entry(entry("Shipped 3 products.")),
            r"\employmentHistoryEntry{Lead R\&D Engineer}{Acme\_Corp}{2020 -- 2024}{Shipped 3 products.}"
        );
    }

    #[test]
    fn test_paragraph_break_becomes_single_spacing_directive() {
        let rendered = timeline_entry(entry("Built things.\n\nLed 5% of the team."));
        assert_eq!(rendered.matches(r"\vspace{4pt}").count(), 1);
        assert!(!rendered.contains('\n'));
        assert!(rendered.ends_with(r"{Built things.\vspace{4pt} Led 5\% of the team.}"));
    }

    #[test]
    fn test_single_break_becomes_space() {
        let rendered = timeline_entry(entry("line one\nline two"));
        assert!(rendered.ends_with("{line one line two}"));
        assert!(!rendered.contains(r"\vspace"));
    }

    #[test]
    fn test_empty_description() {
        assert!(timeline_entry(entry("")).ends_with("{2020 -- 2024}{}"));
    }

    #[test]
    fn test_timeline_joins_with_blank_line() {
        let rendered = timeline([entry("a"), entry("b")]);
        let parts: Vec<_> = rendered.split("\n\n    ").collect();
        assert_eq!(parts.len(), 2);
        assert!(parts[0].ends_with("{a}"));
        assert!(parts[1].ends_with("{b}"));
    }

    #[test]
    fn test_timeline_empty() {
        assert_eq!(timeline(std::iter::empty::<TimelineEntry<'_>>()), "");
    }
}
