//! CLI structure using clap

use clap::Parser;

/// Fill cv.tex with data.json and compile it with pdflatex
#[derive(Parser)]
#[command(name = "cvtex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Only generate the filled template, skip pdflatex
    #[arg(long)]
    pub no_pdf: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_pdf_flag() {
        assert!(Cli::try_parse_from(["cvtex", "--no-pdf"]).unwrap().no_pdf);
        assert!(!Cli::try_parse_from(["cvtex"]).unwrap().no_pdf);
    }

    #[test]
    fn test_rejects_other_flags() {
        assert!(Cli::try_parse_from(["cvtex", "--pdf-only"]).is_err());
        assert!(Cli::try_parse_from(["cvtex", "data.json"]).is_err());
    }
}
