//! Command-line argument parsing for the coins demo binary.

use thiserror::Error;

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    /// Pages to load, including the first (default 1)
    pub pages: usize,
    /// Search text applied after loading
    pub search: Option<String>,
    /// Override for the configured page size
    pub page_size: Option<usize>,
    /// 1-based row whose detail figures are printed after the list
    pub detail: Option<usize>,
    pub show_help: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            pages: 1,
            search: None,
            page_size: None,
            detail: None,
            show_help: false,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum CliError {
    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("invalid value for {flag}: {value}")]
    InvalidValue { flag: String, value: String },

    #[error("unknown argument: {0}")]
    UnknownArgument(String),
}

pub const USAGE: &str = "Usage: coins [--pages N] [--page-size N] [--search TEXT] [--detail ROW]";

/// Parse arguments, skipping the program name.
///
/// ```
/// use coins::cli::parse_args;
///
/// let args = vec!["coins".to_string(), "--pages".to_string(), "3".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap().pages, 3);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliArgs, CliError>
where
    I: Iterator<Item = String>,
{
    let mut parsed = CliArgs::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--pages" | "-p" => parsed.pages = parse_count(&arg, args.next())?,
            "--page-size" => parsed.page_size = Some(parse_count(&arg, args.next())?),
            "--search" | "-s" => {
                parsed.search = Some(args.next().ok_or(CliError::MissingValue(arg))?);
            }
            "--detail" | "-d" => parsed.detail = Some(parse_count(&arg, args.next())?),
            "--help" | "-h" => parsed.show_help = true,
            _ => return Err(CliError::UnknownArgument(arg)),
        }
    }
    Ok(parsed)
}

fn parse_count(flag: &str, value: Option<String>) -> Result<usize, CliError> {
    let value = value.ok_or_else(|| CliError::MissingValue(flag.to_string()))?;
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CliError::InvalidValue {
            flag: flag.to_string(),
            value,
        }),
    }
}
