//! Command-line options.

use typestr_parse::{ExpectedKind, ParserConfig};

pub const USAGE: &str = "\
Usage: typestr [options] <type>...

Parses each type descriptor and prints its canonical form.
Reads one descriptor per line from stdin when no <type> is given.

Options:
  --batch              Parse all descriptors with one shared parser;
                       stop at the first failure
  --contained          Print every type name the descriptors mention
  --expect=<kind>      Require the root to be a <kind>: any, simple,
                       container, class, NamedTuple, or a keyword
                       such as List or Dict
  --max-depth=<n>      Nesting limit (default 128)
  --no-cache           Disable the sub-expression cache
  --no-parallel        Parse independent descriptors on one thread
  -h, --help           Show this message";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("invalid value `{value}` for `{option}`")]
    InvalidValue { option: &'static str, value: String },
}

/// Everything the flags control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliOptions {
    pub batch: bool,
    pub contained: bool,
    pub expect: ExpectedKind,
    pub config: ParserConfig,
    pub parallel: bool,
    pub help: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        CliOptions {
            batch: false,
            contained: false,
            expect: ExpectedKind::Any,
            config: ParserConfig::default(),
            parallel: true,
            help: false,
        }
    }
}

/// Split arguments (without the program name) into options and
/// descriptors. A lone `--` ends option parsing.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<(CliOptions, Vec<String>), UsageError> {
    let mut options = CliOptions::default();
    let mut sources = Vec::new();
    let mut only_sources = false;

    for arg in args {
        let arg = arg.as_ref();
        if only_sources || !arg.starts_with('-') {
            sources.push(arg.to_owned());
        } else if arg == "--" {
            only_sources = true;
        } else if arg == "--batch" {
            options.batch = true;
        } else if arg == "--contained" {
            options.contained = true;
        } else if arg == "--no-cache" {
            options.config = options.config.with_cache(false);
        } else if arg == "--no-parallel" {
            options.parallel = false;
        } else if arg == "--help" || arg == "-h" {
            options.help = true;
        } else if let Some(kind) = arg.strip_prefix("--expect=") {
            options.expect = ExpectedKind::from_name(kind).ok_or(UsageError::InvalidValue {
                option: "--expect",
                value: kind.to_owned(),
            })?;
        } else if let Some(depth) = arg.strip_prefix("--max-depth=") {
            let depth = depth
                .parse::<u32>()
                .ok()
                .filter(|&d| d > 0)
                .ok_or(UsageError::InvalidValue {
                    option: "--max-depth",
                    value: depth.to_owned(),
                })?;
            options.config = options.config.with_max_depth(depth);
        } else {
            return Err(UsageError::UnknownOption(arg.to_owned()));
        }
    }
    Ok((options, sources))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use typestr_ir::Container;

    #[test]
    fn defaults() {
        let (options, sources) = parse_args(&["List[int]", "str"]).unwrap();
        assert_eq!(options, CliOptions::default());
        assert_eq!(sources, vec!["List[int]", "str"]);
    }

    #[test]
    fn flags() {
        let (options, sources) = parse_args(&[
            "--batch",
            "--contained",
            "--no-cache",
            "--no-parallel",
            "--max-depth=8",
            "--expect=Dict",
            "Dict[str, int]",
        ])
        .unwrap();
        assert!(options.batch);
        assert!(options.contained);
        assert!(!options.parallel);
        assert!(!options.config.cache);
        assert_eq!(options.config.max_depth, 8);
        assert_eq!(options.expect, ExpectedKind::Container(Container::Dict));
        assert_eq!(sources, vec!["Dict[str, int]"]);
    }

    #[test]
    fn double_dash_ends_options() {
        let (options, sources) = parse_args(&["--", "--batch"]).unwrap();
        assert!(!options.batch);
        assert_eq!(sources, vec!["--batch"]);
    }

    #[test]
    fn bad_values() {
        assert_eq!(
            parse_args(&["--max-depth=0"]).unwrap_err(),
            UsageError::InvalidValue {
                option: "--max-depth",
                value: "0".to_owned()
            }
        );
        assert_eq!(
            parse_args(&["--expect=Struct"]).unwrap_err().to_string(),
            "invalid value `Struct` for `--expect`"
        );
        assert_eq!(
            parse_args(&["--verbose"]).unwrap_err(),
            UsageError::UnknownOption("--verbose".to_owned())
        );
    }
}
