//! Command-line argument definitions.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tinct_highlight::SupportedLanguage;

use crate::config::Config;
use crate::output::OutputFormat;

/// Path argument meaning "read from stdin".
const STDIN_PATH: &str = "-";

#[derive(Parser, Debug)]
#[command(
    name = "tinct",
    version,
    about = "Classify source text into highlighted tokens using Tree-sitter",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) config: Config,
    #[command(subcommand)]
    pub(crate) command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub(crate) enum CliCommand {
    /// Highlight a file, or stdin, and print one token per line.
    Highlight(HighlightArgs),
    /// List the supported languages with their aliases and extensions.
    Languages,
}

#[derive(Args, Debug)]
pub(crate) struct HighlightArgs {
    /// File to highlight; omit or pass `-` to read stdin.
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,
    /// Language name or alias; detected from the file extension otherwise.
    #[arg(long, short)]
    pub(crate) language: Option<SupportedLanguage>,
    /// Token output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub(crate) format: OutputFormat,
}

impl HighlightArgs {
    /// Returns the input file, or `None` when reading stdin.
    pub(crate) fn input_path(&self) -> Option<&Path> {
        self.path
            .as_deref()
            .filter(|path| path.as_os_str() != STDIN_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tinct_highlight::EscapeDelimiters;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("arguments should parse")
    }

    #[test]
    fn highlight_defaults_to_stdin_and_human_output() {
        let cli = parse(&["tinct", "highlight"]);
        let CliCommand::Highlight(args) = cli.command else {
            panic!("expected highlight command");
        };
        assert_eq!(args.input_path(), None);
        assert_eq!(args.language, None);
        assert_eq!(args.format, OutputFormat::Human);
    }

    #[rstest]
    #[case(&["tinct", "highlight", "-"], None)]
    #[case(&["tinct", "highlight", "src/lib.rs"], Some("src/lib.rs"))]
    fn dash_means_stdin(#[case] argv: &[&str], #[case] expected: Option<&str>) {
        let CliCommand::Highlight(args) = parse(argv).command else {
            panic!("expected highlight command");
        };
        assert_eq!(args.input_path(), expected.map(Path::new));
    }

    #[test]
    fn global_options_are_accepted_after_the_subcommand() {
        let cli = parse(&[
            "tinct",
            "highlight",
            "--language",
            "py",
            "--escape",
            "<>",
            "--format",
            "json",
        ]);
        assert_eq!(cli.config.escape(), Some(EscapeDelimiters::new(b'<', b'>')));
        let CliCommand::Highlight(args) = cli.command else {
            panic!("expected highlight command");
        };
        assert_eq!(args.language, Some(SupportedLanguage::Python));
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[rstest]
    #[case(&["tinct", "highlight", "--escape", "<"])]
    #[case(&["tinct", "highlight", "--language", "cobol"])]
    #[case(&["tinct", "--log-format", "pretty", "languages"])]
    #[case(&["tinct", "highlight", "--format", "xml"])]
    fn invalid_values_are_rejected(#[case] argv: &[&str]) {
        assert!(Cli::try_parse_from(argv).is_err());
    }
}
