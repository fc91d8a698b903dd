//! Log output formats accepted by the telemetry layer.

use strum::{Display, EnumString};

/// Supported logging output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogFormat {
    /// Human-readable single line output.
    #[default]
    Compact,
    /// Structured JSON suitable for ingestion by logging stacks.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("compact", LogFormat::Compact)]
    #[case("JSON", LogFormat::Json)]
    fn log_format_parses_case_insensitively(#[case] input: &str, #[case] expected: LogFormat) {
        assert_eq!(input.parse::<LogFormat>(), Ok(expected));
    }

    #[test]
    fn log_format_rejects_unknown_names() {
        assert_eq!(
            "pretty".parse::<LogFormat>(),
            Err(strum::ParseError::VariantNotFound)
        );
    }

    #[test]
    fn log_format_displays_in_snake_case() {
        assert_eq!(LogFormat::Json.to_string(), "json");
    }
}
